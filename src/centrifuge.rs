//! Sedimentation equilibrium of particles in a centrifuge.
//!
//! In a constant acceleration field the concentration of a particle decays
//! exponentially along the field, with a decay length set by the balance
//! between thermal energy and the buoyancy-corrected weight of the particle.

use crate::{
    constants::{fcn, KBOLTZMANN, ROOM_TEMPERATURE, WATER_DENSITY},
    molecules,
};

/// A particle that can be sedimented.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub molecule: &'static str,
    /// Molecular weight [Da].
    pub weight: fcn,
    /// Mass density [kg/m^3].
    pub density: fcn,
}

/// A centrifuge setting, given by its acceleration.
#[derive(Clone, Debug, PartialEq)]
pub struct Centrifuge {
    pub name: &'static str,
    /// Acceleration [m/s^2].
    pub acceleration: fcn,
}

pub static PARTICLES: [Particle; 5] = [
    Particle {
        molecule: "GFP",
        weight: 3.1e4,
        density: 1300.0,
    },
    // Length ~10 kbp
    Particle {
        molecule: "DNA",
        weight: 6e6,
        density: 2000.0,
    },
    Particle {
        molecule: "tobacco_mosaic_virus",
        weight: 5e7,
        density: 1150.0,
    },
    Particle {
        molecule: "e-coli_genome",
        weight: 6e8,
        density: 2000.0,
    },
    Particle {
        molecule: "e-coli",
        weight: 3e11,
        density: 1090.0,
    },
];

pub static CENTRIFUGES: [Centrifuge; 4] = [
    Centrifuge {
        name: "nothing",
        acceleration: 10.0,
    },
    Centrifuge {
        name: "convenience",
        acceleration: 21100.0,
    },
    Centrifuge {
        name: "quick",
        acceleration: 30279.0,
    },
    Centrifuge {
        name: "fast",
        acceleration: 1048680.0,
    },
];

/// Configuration parameters for sedimentation.
#[derive(Clone, Debug)]
pub struct SedimentationConfig {
    /// Temperature [K].
    pub temperature: fcn,
    /// Mass density of the solvent [kg/m^3].
    pub solvent_density: fcn,
}

impl SedimentationConfig {
    pub const DEFAULT_TEMPERATURE: fcn = ROOM_TEMPERATURE;
    pub const DEFAULT_SOLVENT_DENSITY: fcn = WATER_DENSITY;

    /// Panics if any of the configuration parameter values are invalid.
    pub fn validate(&self) {
        assert!(self.temperature > 0.0, "Temperature must be positive.");
        assert!(
            self.solvent_density >= 0.0,
            "Solvent density must be larger than or equal to zero."
        );
    }
}

impl Default for SedimentationConfig {
    fn default() -> Self {
        SedimentationConfig {
            temperature: Self::DEFAULT_TEMPERATURE,
            solvent_density: Self::DEFAULT_SOLVENT_DENSITY,
        }
    }
}

/// Computes the decay length [m] of the equilibrium concentration of a
/// particle with the given weight [Da] and density [kg/m^3] under the given
/// acceleration [m/s^2].
///
/// The result is negative for particles lighter than the solvent, which
/// accumulate against the field, and infinite for neutrally buoyant ones.
pub fn boltzmann_decay_length(
    acceleration: fcn,
    weight: fcn,
    density: fcn,
    config: &SedimentationConfig,
) -> fcn {
    let buoyant_mass = molecules::dalton_to_kg(weight) * (1.0 - config.solvent_density / density);
    KBOLTZMANN * config.temperature / buoyant_mass / acceleration
}

impl Particle {
    /// Radius [m] of the particle, assuming a sphere with the density of water.
    pub fn radius(&self) -> fcn {
        molecules::weight_to_radius(self.weight)
    }

    /// Sedimentation decay length [m] in the given centrifuge.
    pub fn decay_length(&self, centrifuge: &Centrifuge, config: &SedimentationConfig) -> fcn {
        boltzmann_decay_length(centrifuge.acceleration, self.weight, self.density, config)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gfp_decay_length_is_correct() {
        let decay_length =
            boltzmann_decay_length(21100.0, 3.1e4, 1300.0, &SedimentationConfig::default());
        assert_relative_eq!(decay_length, 1.652e-2, max_relative = 2e-3);
    }

    #[test]
    fn decay_length_is_inversely_proportional_to_acceleration() {
        let config = SedimentationConfig::default();
        let gfp = &PARTICLES[0];
        let ratio = gfp.decay_length(&CENTRIFUGES[0], &config)
            / gfp.decay_length(&CENTRIFUGES[3], &config);
        assert_relative_eq!(
            ratio,
            CENTRIFUGES[3].acceleration / CENTRIFUGES[0].acceleration,
            max_relative = 1e-12
        );
    }

    #[test]
    fn buoyant_particles_have_negative_decay_length() {
        let decay_length =
            boltzmann_decay_length(10.0, 1e6, 900.0, &SedimentationConfig::default());
        assert!(decay_length < 0.0);
    }

    #[test]
    fn bacteria_sediment_under_gravity() {
        let config = SedimentationConfig::default();
        let e_coli = PARTICLES
            .iter()
            .find(|particle| particle.molecule == "e-coli")
            .unwrap();
        // kT / (m (1 - 1000/1090) g) with m = 3e11 Da and g = 10 m/s^2
        assert_relative_eq!(
            e_coli.decay_length(&CENTRIFUGES[0], &config),
            1.006e-5,
            max_relative = 1e-3
        );
        assert!(e_coli.decay_length(&CENTRIFUGES[3], &config) < 1e-10);
    }
}
