//! Command line interface for estimating E. coli cell mass from optical density.

use super::utils;
use crate::{constants::fcn, exit_on_false, protein_expression};
use clap::{Arg, ArgMatches, Command};

/// Builds a representation of the `ecoli_expression` command line subcommand.
pub fn create_ecoli_expression_subcommand(_parent_command_name: &'static str) -> Command<'static> {
    Command::new("ecoli_expression")
        .about("Convert the OD600 of an E. coli culture to cell weight per volume")
        .arg(
            Arg::new("od600")
                .value_name("OD600")
                .help("Optical density of the culture at 600 nm")
                .required(true)
                .takes_value(true),
        )
        .arg(utils::create_option_with_default(
            "volume",
            "VALUE",
            "Volume of the culture [L]",
            "1",
        ))
}

/// Runs the actions for the `ecoli_expression` subcommand using the given arguments.
pub fn run_ecoli_expression_subcommand(arguments: &ArgMatches) {
    let od600: fcn =
        utils::get_finite_float_value_from_required_parseable_argument(arguments, "od600");
    exit_on_false!(od600 >= 0.0, "Error: OD600 must not be negative");
    let volume: fcn =
        utils::get_positive_float_value_from_required_parseable_argument(arguments, "volume");

    let wet_weight = protein_expression::od600_to_wet_ecoli_cell_weight(od600);
    let dry_weight = protein_expression::ecoli_cell_wet_weight_to_dry_weight(wet_weight);
    println!(
        "OD600 = {}: wet cell weight = {:.2} g/L, dry cell weight = {:.2} g/L",
        od600, wet_weight, dry_weight
    );
    println!(
        "In {} L of culture: wet cell weight = {:.2} g, dry cell weight = {:.2} g",
        volume,
        wet_weight * volume,
        dry_weight * volume
    );
}
