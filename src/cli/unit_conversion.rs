//! Command line interface for converting values between units.

use super::utils;
use crate::{
    exit_on_error,
    units::{self, fun},
};
use clap::{Arg, ArgMatches, Command};

/// Builds a representation of the `unit_conversion` command line subcommand.
pub fn create_unit_conversion_subcommand(_parent_command_name: &'static str) -> Command<'static> {
    Command::new("unit_conversion")
        .about("Convert a value from one compound unit to another")
        .long_about(
            "Convert a value from one compound unit to another.\n\
             Compound units are written as unit names joined by '*' (multiply) and\n\
             '/' (divide), for instance kg*m/s/s. Each name must be in the unit table\n\
             (see the `units` subcommand). Powers are written by repetition.",
        )
        .allow_negative_numbers(true)
        .arg(
            Arg::new("value")
                .value_name("VALUE")
                .help("Value to convert")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::new("input-unit")
                .value_name("INPUT_UNIT")
                .help("Compound unit of the value")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::new("output-unit")
                .value_name("OUTPUT_UNIT")
                .help(
                    "Compound unit to convert to\n\
                     [default: the SI base units kg, m and s matching the input dimensions]",
                )
                .takes_value(true),
        )
}

/// Runs the actions for the `unit_conversion` subcommand using the given arguments.
pub fn run_unit_conversion_subcommand(arguments: &ArgMatches) {
    let value: fun =
        utils::get_finite_float_value_from_required_parseable_argument(arguments, "value");
    let input_unit = arguments
        .value_of("input-unit")
        .expect("No value for required argument");
    let output_unit = arguments.value_of("output-unit");

    let conversion = exit_on_error!(
        units::convert(value, input_unit, output_unit),
        "Error: Could not convert unit: {}"
    );
    println!("{}", conversion);
}

/// Builds a representation of the `units` command line subcommand.
pub fn create_units_subcommand(_parent_command_name: &'static str) -> Command<'static> {
    Command::new("units").about("List the units available for conversion")
}

/// Runs the actions for the `units` subcommand.
pub fn run_units_subcommand(_arguments: &ArgMatches) {
    for name in units::unit_names() {
        let unit = exit_on_error!(units::lookup_unit(name), "Error: {}");
        let dimensions = unit.dimensions();
        let base_unit = if dimensions.is_dimensionless() {
            String::from("1")
        } else {
            dimensions.to_string()
        };
        println!("{:<6}{:>12.4e} {}", name, unit.magnitude(), base_unit);
    }
}
