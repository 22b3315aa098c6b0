//! Free energy of exposing hydrophobic surfaces and creating cavities in water.

use crate::constants::{
    fcn, ANGSTROM2_TO_M2, ANGSTROM3_TO_M3, AVOGADRO, KCAL_TO_J, STANDARD_PRESSURE,
    WATER_SURFACE_TENSION,
};

/// Solvent accessible surface areas of amino acid side chains [Angstrom^2].
pub static AA_SIDE_CHAIN_SASA: [(&str, fcn); 19] = [
    // Aliphatic
    ("ALA", 67.0),
    ("PRO", 105.0),
    ("VAL", 117.0),
    ("LEU", 137.0),
    ("ILE", 140.0),
    ("MET", 160.0),
    // Aromatic
    ("PHE", 175.0),
    ("TYR", 187.0),
    ("TRP", 217.0),
    // Polar
    ("SER", 80.0),
    ("THR", 102.0),
    ("CYS", 104.0),
    // Positive
    ("HIS", 151.0),
    ("LYS", 167.0),
    ("ARG", 196.0),
    // Negative
    ("ASP", 106.0),
    ("GLU", 138.0),
    // Amide
    ("ASN", 113.0),
    ("GLN", 144.0),
];

/// Returns the side chain surface area [Angstrom^2] of the residue with the
/// given three-letter code.
pub fn side_chain_sasa(residue: &str) -> Option<fcn> {
    AA_SIDE_CHAIN_SASA
        .iter()
        .find(|(name, _)| *name == residue)
        .map(|&(_, area)| area)
}

/// Computes the free energy [kcal/mol] of exposing the given area
/// [Angstrom^2] of water surface.
pub fn water_surface_energy(surface_area: fcn) -> fcn {
    WATER_SURFACE_TENSION * surface_area * ANGSTROM2_TO_M2 * AVOGADRO / KCAL_TO_J
}

/// Computes the free energy [kcal/mol] of creating a cavity of the given
/// volume [Angstrom^3] against the given pressure [Pa], ignoring the surface
/// contribution.
pub fn volume_free_energy(volume: fcn, pressure: fcn) -> fcn {
    pressure * volume * ANGSTROM3_TO_M3 * AVOGADRO / KCAL_TO_J
}

/// Computes the cavity free energy [kcal/mol] at standard pressure.
pub fn volume_free_energy_at_standard_pressure(volume: fcn) -> fcn {
    volume_free_energy(volume, STANDARD_PRESSURE)
}

#[cfg(test)]
mod tests {

    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn surface_energy_per_square_angstrom_is_correct() {
        assert_relative_eq!(water_surface_energy(1.0), 0.10475, max_relative = 1e-3);
    }

    #[test]
    fn tryptophan_costs_more_than_alanine() {
        let alanine = water_surface_energy(side_chain_sasa("ALA").unwrap());
        let tryptophan = water_surface_energy(side_chain_sasa("TRP").unwrap());
        assert!(tryptophan > 3.0 * alanine);
        assert!(side_chain_sasa("XYZ").is_none());
    }

    #[test]
    fn cavity_energy_of_protein_sized_hole_is_correct() {
        let protein_cavity = volume_free_energy_at_standard_pressure(50.0_f64.powi(3));
        assert_relative_eq!(protein_cavity, 1.7985, max_relative = 1e-3);
    }
}
