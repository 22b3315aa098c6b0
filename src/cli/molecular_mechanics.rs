//! Command line interface for electrostatic and Lennard-Jones interactions.

use super::utils;
use crate::{
    constants::fcn,
    molecular_mechanics::{
        self, LJ_PARAMS, PROTEIN_DIELECTRIC_CONSTANT, VACUUM_DIELECTRIC_CONSTANT,
        WATER_DIELECTRIC_CONSTANT,
    },
};
use clap::{ArgMatches, Command};

const ION_CONCENTRATIONS: [fcn; 4] = [1e-6, 1e-3, 0.1, 1.0];

/// Builds a representation of the `molecular_mechanics` command line subcommand.
pub fn create_molecular_mechanics_subcommand(
    _parent_command_name: &'static str,
) -> Command<'static> {
    Command::new("molecular_mechanics")
        .about("Estimate electrostatic and Lennard-Jones interaction energies")
        .arg(utils::create_option_with_default(
            "charge-distance",
            "VALUE",
            "Distance between the interacting charges [Angstrom]",
            "3",
        ))
        .arg(utils::create_option_with_default(
            "atom-distance",
            "VALUE",
            "Distance between the interacting atoms [Angstrom]",
            "3.5",
        ))
        .arg(utils::create_option_with_default(
            "temperature",
            "VALUE",
            "Temperature used for the Debye length [K]",
            "300",
        ))
        .arg(utils::create_option_with_default(
            "dielectric",
            "VALUE",
            "Relative permittivity of the solvent used for the Debye length",
            "80",
        ))
}

/// Runs the actions for the `molecular_mechanics` subcommand using the given arguments.
pub fn run_molecular_mechanics_subcommand(arguments: &ArgMatches) {
    let charge_distance: fcn = utils::get_positive_float_value_from_required_parseable_argument(
        arguments,
        "charge-distance",
    );
    let atom_distance: fcn =
        utils::get_positive_float_value_from_required_parseable_argument(arguments, "atom-distance");
    let temperature: fcn =
        utils::get_positive_float_value_from_required_parseable_argument(arguments, "temperature");
    let dielectric: fcn =
        utils::get_positive_float_value_from_required_parseable_argument(arguments, "dielectric");

    for (medium, dielectric_constant) in [
        ("vacuum", VACUUM_DIELECTRIC_CONSTANT),
        ("protein", PROTEIN_DIELECTRIC_CONSTANT),
        ("water", WATER_DIELECTRIC_CONSTANT),
    ] {
        println!(
            "The electrostatic potential between two unit charges separated by {} Angstrom in {} is {:.2} kcal/mol",
            charge_distance,
            medium,
            molecular_mechanics::coulomb_potential(1.0, 1.0, charge_distance, dielectric_constant)
        );
    }
    println!();

    for n in ION_CONCENTRATIONS {
        println!(
            "The Debye length for {:.2E} M NaCl solution is {:.3E} m",
            n,
            molecular_mechanics::debye_length(1.0, n, temperature, dielectric)
        );
    }
    println!();

    for (i, (element_1, params_1)) in LJ_PARAMS.iter().enumerate() {
        for (element_2, params_2) in &LJ_PARAMS[i..] {
            println!(
                "The LJ potential between {} and {} atoms at distance {} Angstrom is {:.2} kcal/mol",
                element_1,
                element_2,
                atom_distance,
                molecular_mechanics::lennard_jones_potential_between(
                    params_1,
                    params_2,
                    atom_distance
                )
            );
        }
    }
}
