//! Single-particle partition functions.

use crate::constants::{fcn, AVOGADRO, HPLANCK, KBOLTZMANN, MOLAR_TO_MOL_PER_M3, PI};

/// Computes the thermal length [m] of a particle with the given mass [kg]
/// at the given temperature [K].
///
/// The translational partition function of a particle in a volume V is
/// V divided by the cube of this length.
pub fn particle_state_thermal_length(mass: fcn, temperature: fcn) -> fcn {
    assert!(mass > 0.0, "Mass must be positive");
    assert!(temperature > 0.0, "Temperature must be positive");
    HPLANCK / fcn::sqrt(2.0 * PI * mass * KBOLTZMANN * temperature)
}

/// Computes the rotational partition function of a rigid particle with the
/// given principal moments of inertia [kg m^2] and rotational symmetry number
/// at the given temperature [K].
pub fn rotation_partition_function(
    moments_of_inertia: [fcn; 3],
    rotation_symmetry: u32,
    temperature: fcn,
) -> fcn {
    assert!(rotation_symmetry > 0, "Symmetry number must be positive");
    let [i1, i2, i3] = moments_of_inertia;
    fcn::sqrt(PI * i1 * i2 * i3) / (rotation_symmetry as fcn)
        * fcn::powi(fcn::sqrt(8.0 * KBOLTZMANN * temperature) * PI / HPLANCK, 3)
}

/// Computes the translational chemical potential [J] of an ideal solute
/// particle with the given mass [kg] at the given concentration [mol/L] and
/// temperature [K], relative to a particle with no translational freedom.
///
/// The potential is negative when there is more than one thermal volume
/// available per particle.
pub fn ideal_chemical_potential(mass: fcn, concentration: fcn, temperature: fcn) -> fcn {
    assert!(concentration > 0.0, "Concentration must be positive");
    let number_density = concentration * MOLAR_TO_MOL_PER_M3 * AVOGADRO;
    let thermal_volume = fcn::powi(particle_state_thermal_length(mass, temperature), 3);
    KBOLTZMANN * temperature * fcn::ln(number_density * thermal_volume)
}
