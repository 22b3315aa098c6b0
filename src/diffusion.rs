//! Diffusion of molecules in water.

use crate::{
    constants::{fcn, KBOLTZMANN, PI, WATER_VISCOSITY},
    molecules,
};

/// A measured diffusion constant.
#[derive(Clone, Debug, PartialEq)]
pub struct DiffusionMeasurement {
    pub molecule: &'static str,
    pub medium: &'static str,
    /// Temperature [K].
    pub temperature: fcn,
    /// Molecular weight [Da].
    pub weight: fcn,
    /// Diffusion constant [m^2/s].
    pub diffusion_constant: fcn,
}

macro_rules! measurement {
    ($molecule:expr, $temperature:expr, $weight:expr, $diffusion_constant:expr) => {
        DiffusionMeasurement {
            molecule: $molecule,
            medium: "water",
            temperature: $temperature,
            weight: $weight,
            diffusion_constant: $diffusion_constant,
        }
    };
}

/// Experimental diffusion constants of molecules in water.
pub static EXPERIMENTAL_DIFFUSION_CONSTANTS: [DiffusionMeasurement; 9] = [
    measurement!("H2", 298.0, 2.0, 4.5e-9),
    measurement!("water", 298.0, 18.0, 2.13e-9),
    measurement!("O2", 298.0, 32.0, 2.1e-9),
    measurement!("urea", 298.0, 60.0, 1.38e-9),
    measurement!("benzene", 298.0, 78.0, 1.02e-9),
    measurement!("sucrose", 298.0, 342.0, 5.23e-10),
    measurement!("GFP", 298.0, 31000.0, 8.7e-11),
    measurement!("DNA", 293.0, 6e6, 1.3e-12),
    measurement!("tobacco_mosaic_virus", 293.0, 5e7, 3e-12),
];

/// Computes the Stokes-Einstein diffusion constant [m^2/s] of a sphere with
/// the given radius [m] in a medium with the given temperature [K] and
/// dynamic viscosity [Pa s].
pub fn stokes_einstein_diffusion_constant(radius: fcn, temperature: fcn, viscosity: fcn) -> fcn {
    assert!(radius > 0.0, "Radius must be positive");
    assert!(viscosity > 0.0, "Viscosity must be positive");
    KBOLTZMANN * temperature / (6.0 * PI * viscosity * radius)
}

impl DiffusionMeasurement {
    /// Radius [m] of the molecule, assuming a sphere with the density of water.
    pub fn radius(&self) -> fcn {
        molecules::weight_to_radius(self.weight)
    }

    /// Diffusion constant [m^2/s] predicted by the Stokes-Einstein relation
    /// for a medium with the given viscosity.
    pub fn estimated_diffusion_constant(&self, viscosity: fcn) -> fcn {
        stokes_einstein_diffusion_constant(self.radius(), self.temperature, viscosity)
    }

    /// Ratio of the predicted to the measured diffusion constant in water.
    pub fn estimate_to_measurement_ratio(&self) -> fcn {
        self.estimated_diffusion_constant(WATER_VISCOSITY) / self.diffusion_constant
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn stokes_einstein_is_correct() {
        let diffusion_constant = stokes_einstein_diffusion_constant(1e-9, 300.0, 1e-3);
        assert_relative_eq!(diffusion_constant, 2.196e-10, max_relative = 1e-3);
    }

    #[test]
    fn protein_estimate_is_within_factor_of_two() {
        let gfp = EXPERIMENTAL_DIFFUSION_CONSTANTS
            .iter()
            .find(|measurement| measurement.molecule == "GFP")
            .unwrap();
        let ratio = gfp.estimate_to_measurement_ratio();
        assert!(ratio > 0.5 && ratio < 2.0);
    }

    #[test]
    fn larger_molecules_diffuse_slower() {
        let estimates: Vec<_> = EXPERIMENTAL_DIFFUSION_CONSTANTS
            .iter()
            .map(|measurement| measurement.estimated_diffusion_constant(WATER_VISCOSITY))
            .collect();
        assert!(estimates.windows(2).all(|pair| pair[1] < pair[0] * 1.05));
    }
}
