//! Command line interface for sedimentation in a centrifuge.

use super::utils;
use crate::centrifuge::{SedimentationConfig, CENTRIFUGES, PARTICLES};
use clap::{ArgMatches, Command};

/// Builds a representation of the `centrifuge` command line subcommand.
pub fn create_centrifuge_subcommand(_parent_command_name: &'static str) -> Command<'static> {
    Command::new("centrifuge")
        .about("Compute sedimentation decay lengths of particles in centrifuges")
        .long_about(
            "Compute sedimentation decay lengths of particles in centrifuges.\n\
             The decay length is the distance over which the equilibrium concentration\n\
             of a particle drops by a factor e. Negative lengths mean that the particle\n\
             floats.",
        )
        .arg(utils::create_option_with_default(
            "temperature",
            "VALUE",
            "Temperature [K]",
            "300",
        ))
        .arg(utils::create_option_with_default(
            "solvent-density",
            "VALUE",
            "Mass density of the solvent [kg/m^3]",
            "1000",
        ))
}

/// Runs the actions for the `centrifuge` subcommand using the given arguments.
pub fn run_centrifuge_subcommand(arguments: &ArgMatches) {
    let config = construct_sedimentation_config_from_options(arguments);

    println!("Particles:");
    for particle in &PARTICLES {
        println!(
            "    {:<22}weight = {:.2E} Da, density = {:.3E} kg/m^3, radius = {:.2E} m",
            particle.molecule,
            particle.weight,
            particle.density,
            particle.radius()
        );
    }
    println!();

    for centrifuge in &CENTRIFUGES {
        println!(
            "Centrifuge: {} ({:.0} m/s^2)",
            centrifuge.name, centrifuge.acceleration
        );
        for particle in &PARTICLES {
            println!(
                "    {:<22}decay length = {:.2E} m",
                particle.molecule,
                particle.decay_length(centrifuge, &config)
            );
        }
    }
}

fn construct_sedimentation_config_from_options(arguments: &ArgMatches) -> SedimentationConfig {
    let config = SedimentationConfig {
        temperature: utils::get_positive_float_value_from_required_parseable_argument(
            arguments,
            "temperature",
        ),
        solvent_density: utils::get_finite_float_value_from_required_parseable_argument(
            arguments,
            "solvent-density",
        ),
    };
    config.validate();
    config
}
