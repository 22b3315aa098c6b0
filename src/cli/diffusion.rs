//! Command line interface for estimating diffusion constants.

use super::utils;
use crate::{
    constants::{fcn, WATER_VISCOSITY},
    diffusion::EXPERIMENTAL_DIFFUSION_CONSTANTS,
};
use clap::{ArgMatches, Command};

/// Builds a representation of the `diffusion` command line subcommand.
pub fn create_diffusion_subcommand(_parent_command_name: &'static str) -> Command<'static> {
    Command::new("diffusion")
        .about("Compare measured diffusion constants with Stokes-Einstein estimates")
        .arg(utils::create_option_with_default(
            "viscosity",
            "VALUE",
            "Dynamic viscosity of the medium [Pa s]",
            "8.9e-4",
        ))
}

/// Runs the actions for the `diffusion` subcommand using the given arguments.
pub fn run_diffusion_subcommand(arguments: &ArgMatches) {
    let viscosity: fcn =
        utils::get_positive_float_value_from_required_parseable_argument(arguments, "viscosity");
    if viscosity != WATER_VISCOSITY {
        tracing::info!("Using viscosity {:e} Pa s instead of that of water", viscosity);
    }

    println!(
        "{:<22}{:>10}{:>12}{:>12}{:>14}{:>14}",
        "molecule", "T [K]", "M [Da]", "r [nm]", "D [m^2/s]", "D_SE [m^2/s]"
    );
    for measurement in &EXPERIMENTAL_DIFFUSION_CONSTANTS {
        println!(
            "{:<22}{:>10.1}{:>12.3e}{:>12.3}{:>14.2E}{:>14.2E}",
            measurement.molecule,
            measurement.temperature,
            measurement.weight,
            measurement.radius() * 1e9,
            measurement.diffusion_constant,
            measurement.estimated_diffusion_constant(viscosity)
        );
    }
}
