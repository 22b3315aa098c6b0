//! Utilities for creating the command line interface.

use crate::{exit_on_error, exit_on_false, num::BFloat};
use clap::{Arg, ArgMatches};
use std::str::FromStr;

/// Calls the `create_<name>_subcommand` function for the given subcommand
/// name, passing along the name of the parent command.
#[macro_export]
macro_rules! create_subcommand {
    ($parent_command_name:ident, $subcommand_name:ident) => {
        paste::paste! {
            [<create_ $subcommand_name _subcommand>](stringify!($parent_command_name))
        }
    };
}

/// Creates an optional `--NAME=VALUE` argument with a default value.
pub fn create_option_with_default(
    name: &'static str,
    value_name: &'static str,
    help: &'static str,
    default_value: &'static str,
) -> Arg<'static> {
    Arg::new(name)
        .long(name)
        .require_equals(true)
        .allow_hyphen_values(true)
        .value_name(value_name)
        .help(help)
        .takes_value(true)
        .default_value(default_value)
}

pub fn parse_value_string<T>(argument_name: &str, value_string: &str) -> T
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    exit_on_error!(
        value_string.parse(),
        "Error: Could not parse value for {0}: {1}",
        argument_name
    )
}

fn verify_finite_float_value<F: BFloat>(argument_name: &str, value: F) {
    exit_on_false!(value.is_finite(), "Error: {} must be finite", argument_name);
}

pub fn get_value_from_required_parseable_argument<T>(
    arguments: &ArgMatches,
    argument_name: &str,
) -> T
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    parse_value_string(
        argument_name,
        arguments
            .value_of(argument_name)
            .expect("No value for required argument"),
    )
}

pub fn get_finite_float_value_from_required_parseable_argument<F>(
    arguments: &ArgMatches,
    argument_name: &str,
) -> F
where
    F: BFloat + FromStr,
    <F as FromStr>::Err: std::fmt::Display,
{
    let value: F = get_value_from_required_parseable_argument(arguments, argument_name);
    verify_finite_float_value(argument_name, value);
    value
}

pub fn get_positive_float_value_from_required_parseable_argument<F>(
    arguments: &ArgMatches,
    argument_name: &str,
) -> F
where
    F: BFloat + FromStr,
    <F as FromStr>::Err: std::fmt::Display,
{
    let value: F = get_finite_float_value_from_required_parseable_argument(arguments, argument_name);
    exit_on_false!(
        value > F::zero(),
        "Error: {} must be positive",
        argument_name
    );
    value
}

pub fn get_finite_float_value_from_parseable_argument<F>(
    arguments: &ArgMatches,
    argument_name: &str,
) -> Option<F>
where
    F: BFloat + FromStr,
    <F as FromStr>::Err: std::fmt::Display,
{
    arguments.value_of(argument_name).map(|value_string| {
        let value: F = parse_value_string(argument_name, value_string);
        verify_finite_float_value(argument_name, value);
        value
    })
}
