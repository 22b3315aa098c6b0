//! Pairwise interactions between charges and atoms.

use crate::constants::{
    fcn, ANGSTROM_TO_M, AVOGADRO, EPSILON_0, KBOLTZMANN, KCAL_TO_J, MOLAR_TO_MOL_PER_M3, PI,
    Q_ELECTRON,
};

/// Relative permittivity of vacuum.
pub const VACUUM_DIELECTRIC_CONSTANT: fcn = 1.0;
/// Typical relative permittivity of a protein interior.
pub const PROTEIN_DIELECTRIC_CONSTANT: fcn = 5.0;
/// Relative permittivity of water.
pub const WATER_DIELECTRIC_CONSTANT: fcn = 80.0;

/// Lennard-Jones parameters of an atom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LennardJonesParameters {
    /// Distance of lowest energy [Angstrom].
    pub r: fcn,
    /// Depth of the potential well [kcal/mol].
    pub e: fcn,
}

/// Lennard-Jones parameters for common elements.
pub static LJ_PARAMS: [(&str, LennardJonesParameters); 4] = [
    ("O", LennardJonesParameters { r: 2.96, e: 0.21 }),
    ("N", LennardJonesParameters { r: 3.25, e: 0.17 }),
    ("C", LennardJonesParameters { r: 3.5, e: 0.08 }),
    ("H", LennardJonesParameters { r: 2.5, e: 0.05 }),
];

/// Returns the Lennard-Jones parameters of the element with the given symbol.
pub fn lj_params(element: &str) -> Option<LennardJonesParameters> {
    LJ_PARAMS
        .iter()
        .find(|(symbol, _)| *symbol == element)
        .map(|&(_, params)| params)
}

/// Converts an energy per molecule [J] to an energy per mole [kcal/mol].
pub fn joule_to_kcal_per_mol(energy: fcn) -> fcn {
    energy * AVOGADRO / KCAL_TO_J
}

/// Computes the Coulomb potential [kcal/mol] between two point charges `q1`
/// and `q2` [elementary charges] separated by `r` [Angstrom] in a medium with
/// the given relative permittivity.
pub fn coulomb_potential(q1: fcn, q2: fcn, r: fcn, dielectric_constant: fcn) -> fcn {
    assert!(r > 0.0, "Distance must be positive");
    joule_to_kcal_per_mol(
        q1 * Q_ELECTRON * q2 * Q_ELECTRON
            / (4.0 * PI * EPSILON_0 * dielectric_constant * r * ANGSTROM_TO_M),
    )
}

/// Computes the Debye screening length [m] in a solution of a symmetric
/// electrolyte with ion valency `z` and concentration `n` [mol/L] at
/// temperature `temperature` [K] with relative permittivity `epsilon`.
pub fn debye_length(z: fcn, n: fcn, temperature: fcn, epsilon: fcn) -> fcn {
    assert!(n > 0.0, "Ion concentration must be positive");
    fcn::sqrt(
        epsilon * EPSILON_0 * KBOLTZMANN * temperature
            / (2.0 * z * z * Q_ELECTRON * Q_ELECTRON * n * AVOGADRO * MOLAR_TO_MOL_PER_M3),
    )
}

/// Computes the Lennard-Jones potential between two atoms at distance `r`
/// [Angstrom], combining the parameters of each atom with a geometric mean
/// for the well depth and an arithmetic mean for the distance.
///
/// The result has the unit of the well depths.
pub fn lennard_jones_potential(e1: fcn, e2: fcn, r1: fcn, r2: fcn, r: fcn) -> fcn {
    assert!(r > 0.0, "Distance must be positive");
    let e_mean = fcn::sqrt(e1 * e2);
    let r_mean = 0.5 * (r1 + r2);
    let ratio_6 = fcn::powi(r_mean / r, 6);
    e_mean * (ratio_6 * ratio_6 - 2.0 * ratio_6)
}

/// Computes the Lennard-Jones potential between two atoms described by their
/// parameters.
pub fn lennard_jones_potential_between(
    atom_1: &LennardJonesParameters,
    atom_2: &LennardJonesParameters,
    r: fcn,
) -> fcn {
    lennard_jones_potential(atom_1.e, atom_2.e, atom_1.r, atom_2.r, r)
}
