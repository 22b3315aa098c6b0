//! Command line interface for single-particle partition functions and
//! chemical potentials.

use super::utils;
use crate::{
    constants::fcn,
    exit_on_false, molecular_mechanics, molecules, statistical_mechanics,
};
use clap::{Arg, ArgMatches, Command};

/// Builds a representation of the `chemical_potential` command line subcommand.
pub fn create_chemical_potential_subcommand(
    _parent_command_name: &'static str,
) -> Command<'static> {
    Command::new("chemical_potential")
        .about("Compute the thermal length and chemical potential of a solute particle")
        .arg(
            Arg::new("weight")
                .value_name("WEIGHT")
                .help("Molecular weight of the particle [Da]")
                .required(true)
                .takes_value(true),
        )
        .arg(utils::create_option_with_default(
            "temperature",
            "VALUE",
            "Temperature [K]",
            "300",
        ))
        .arg(utils::create_option_with_default(
            "concentration",
            "VALUE",
            "Concentration of the particle [mol/L]",
            "1e-3",
        ))
        .arg(
            Arg::new("moments-of-inertia")
                .long("moments-of-inertia")
                .require_equals(true)
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .value_name("I1,I2,I3")
                .help("Principal moments of inertia for the rotational partition function [kg m^2]")
                .takes_value(true)
                .number_of_values(3),
        )
        .arg(utils::create_option_with_default(
            "symmetry",
            "NUMBER",
            "Rotational symmetry number of the particle",
            "1",
        ))
}

/// Runs the actions for the `chemical_potential` subcommand using the given arguments.
pub fn run_chemical_potential_subcommand(arguments: &ArgMatches) {
    let weight: fcn =
        utils::get_positive_float_value_from_required_parseable_argument(arguments, "weight");
    let temperature: fcn =
        utils::get_positive_float_value_from_required_parseable_argument(arguments, "temperature");
    let concentration: fcn =
        utils::get_positive_float_value_from_required_parseable_argument(arguments, "concentration");

    let mass = molecules::dalton_to_kg(weight);
    let thermal_length = statistical_mechanics::particle_state_thermal_length(mass, temperature);
    println!(
        "Particle of {} Da at {} K: thermal length = {:.3E} m",
        weight, temperature, thermal_length
    );

    let chemical_potential =
        statistical_mechanics::ideal_chemical_potential(mass, concentration, temperature);
    println!(
        "Translational chemical potential at {:.2E} M = {:.2} kcal/mol",
        concentration,
        molecular_mechanics::joule_to_kcal_per_mol(chemical_potential)
    );

    if let Some(values) = arguments.values_of("moments-of-inertia") {
        let moments: Vec<fcn> = values
            .map(|value_string| utils::parse_value_string("moments-of-inertia", value_string))
            .collect();
        exit_on_false!(
            moments.iter().all(|&moment| moment > 0.0),
            "Error: Moments of inertia must be positive"
        );
        let symmetry: u32 = utils::get_value_from_required_parseable_argument(arguments, "symmetry");
        exit_on_false!(symmetry > 0, "Error: Symmetry number must be positive");

        println!(
            "Rotational partition function = {:.3E}",
            statistical_mechanics::rotation_partition_function(
                [moments[0], moments[1], moments[2]],
                symmetry,
                temperature
            )
        );
    }
}
