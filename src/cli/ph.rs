//! Command line interface for computing the pH of an acid solution.

use super::utils;
use crate::{
    exit_on_false, exit_on_none,
    ph::{self, fph},
};
use clap::{Arg, ArgMatches, Command};

/// Builds a representation of the `pka_concentration_to_ph` command line subcommand.
pub fn create_pka_concentration_to_ph_subcommand(
    _parent_command_name: &'static str,
) -> Command<'static> {
    Command::new("pka_concentration_to_ph")
        .about("Compute the pH of a solution of a monoprotic acid")
        .long_about(
            "Compute the pH of a solution of a monoprotic acid from its pKa and\n\
             concentration, accounting for the self-ionization of water.",
        )
        .allow_negative_numbers(true)
        .arg(
            Arg::new("pka")
                .value_name("PKA")
                .help("pKa of the acid")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::new("concentration")
                .value_name("CONCENTRATION")
                .help("Total concentration of the acid [mol/L]")
                .required(true)
                .takes_value(true),
        )
}

/// Runs the actions for the `pka_concentration_to_ph` subcommand using the given arguments.
pub fn run_pka_concentration_to_ph_subcommand(arguments: &ArgMatches) {
    let pka: fph = utils::get_finite_float_value_from_required_parseable_argument(arguments, "pka");
    let concentration: fph =
        utils::get_finite_float_value_from_required_parseable_argument(arguments, "concentration");
    exit_on_false!(
        concentration > 0.0,
        "Error: Concentration must be positive"
    );

    let solution = exit_on_none!(
        ph::AcidSolution::new(pka, concentration),
        "Error: Found no physically valid hydrogen ion concentration"
    );
    println!("{}", solution);
}
