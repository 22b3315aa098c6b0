//! Relations between the weight, mass and size of molecules.

use crate::constants::{fcn, AVOGADRO, G_TO_KG, PI, WATER_DENSITY};

/// Converts a molecular weight in Dalton to a mass in kilograms.
pub fn dalton_to_kg(weight: fcn) -> fcn {
    weight / AVOGADRO * G_TO_KG
}

/// Computes the radius [m] of a spherical molecule with the given weight
/// [Da] and mass density [kg/m^3].
pub fn weight_to_radius_with_density(weight: fcn, density: fcn) -> fcn {
    assert!(density > 0.0, "Density must be positive");
    let volume = dalton_to_kg(weight) / density;
    fcn::cbrt(volume * 3.0 / (4.0 * PI))
}

/// Computes the radius [m] of a molecule with the given weight [Da],
/// assuming that the molecule is a sphere with the same density as water.
pub fn weight_to_radius(weight: fcn) -> fcn {
    weight_to_radius_with_density(weight, WATER_DENSITY)
}

#[cfg(test)]
mod tests {

    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn dalton_conversion_matches_atomic_mass_unit() {
        assert_relative_eq!(dalton_to_kg(1.0), 1.661e-27, max_relative = 1e-3);
    }

    #[test]
    fn gfp_radius_is_a_few_nanometers() {
        assert_relative_eq!(weight_to_radius(31000.0), 2.308e-9, max_relative = 1e-3);
    }

    #[test]
    fn radius_scales_with_cube_root_of_weight() {
        let ratio = weight_to_radius(8000.0) / weight_to_radius(1000.0);
        assert_relative_eq!(ratio, 2.0, max_relative = 1e-12);
    }

    #[test]
    fn denser_molecules_are_smaller() {
        assert!(weight_to_radius_with_density(1e6, 1300.0) < weight_to_radius(1e6));
    }
}
