//! Command line interface for washing of chromatography columns.

use super::utils;
use crate::{
    chromatography::{self, Competitor},
    constants::fcn,
    exit_on_false,
};
use clap::{Arg, ArgMatches, Command};

/// Builds a representation of the `chromatography` command line subcommand.
pub fn create_chromatography_subcommand(_parent_command_name: &'static str) -> Command<'static> {
    Command::new("chromatography")
        .about("Estimate the washing volume that elutes a bound molecule")
        .arg(utils::create_option_with_default(
            "kd",
            "VALUE",
            "Dissociation constant of the bound molecule [mol/L]",
            "1e-9",
        ))
        .arg(utils::create_option_with_default(
            "bound-amount",
            "VALUE",
            "Amount of molecule bound to the column [mol]",
            "1e-9",
        ))
        .arg(
            Arg::new("competitor-kd")
                .long("competitor-kd")
                .require_equals(true)
                .value_name("VALUE")
                .help("Dissociation constant of a competitor in the washing buffer [mol/L]")
                .takes_value(true)
                .requires("competitor-concentration"),
        )
        .arg(
            Arg::new("competitor-concentration")
                .long("competitor-concentration")
                .require_equals(true)
                .value_name("VALUE")
                .help("Concentration of the competitor in the washing buffer [mol/L]")
                .takes_value(true)
                .requires("competitor-kd"),
        )
}

/// Runs the actions for the `chromatography` subcommand using the given arguments.
pub fn run_chromatography_subcommand(arguments: &ArgMatches) {
    let kd: fcn = utils::get_positive_float_value_from_required_parseable_argument(arguments, "kd");
    let bound_amount: fcn =
        utils::get_positive_float_value_from_required_parseable_argument(arguments, "bound-amount");

    let competitor_kd: Option<fcn> =
        utils::get_finite_float_value_from_parseable_argument(arguments, "competitor-kd");
    let competitor_concentration: Option<fcn> =
        utils::get_finite_float_value_from_parseable_argument(arguments, "competitor-concentration");
    let competitor = competitor_kd
        .zip(competitor_concentration)
        .map(|(dissociation_constant, concentration)| {
            exit_on_false!(
                dissociation_constant > 0.0 && concentration > 0.0,
                "Error: Competitor dissociation constant and concentration must be positive"
            );
            Competitor {
                dissociation_constant,
                concentration,
            }
        });

    println!(
        "critical_washing_volume = {:.2E} L",
        chromatography::critical_washing_volume(kd, bound_amount, None)
    );
    if competitor.is_some() {
        println!(
            "critical_washing_volume with competitor = {:.2E} L",
            chromatography::critical_washing_volume(kd, bound_amount, competitor)
        );
    }
}
