//! Command line interface for spontaneous hydrolysis rates.

use crate::{exit_on_error, reaction::REACTION_RATES};
use clap::{Arg, ArgMatches, Command};

/// Builds a representation of the `reactions` command line subcommand.
pub fn create_reactions_subcommand(_parent_command_name: &'static str) -> Command<'static> {
    Command::new("reactions")
        .about("List measured half-lives of hydrolysis reactions and their rate constants")
        .arg(
            Arg::new("reaction")
                .long("reaction")
                .require_equals(true)
                .value_name("NAME")
                .help("Only list reactions with this name")
                .takes_value(true),
        )
}

/// Runs the actions for the `reactions` subcommand using the given arguments.
pub fn run_reactions_subcommand(arguments: &ArgMatches) {
    let selected_reaction = arguments.value_of("reaction");

    let mut n_listed = 0;
    for rate in REACTION_RATES
        .iter()
        .filter(|rate| selected_reaction.map_or(true, |name| rate.reaction == name))
    {
        let rate_constant = exit_on_error!(
            rate.rate_constant(),
            "Error: Invalid half-life for {}: {}",
            rate.reaction
        );
        print!(
            "{} in {}: half-life = {} {}, rate constant = {:.2E} s^-1",
            rate.reaction, rate.buffer, rate.half_life, rate.half_life_unit, rate_constant
        );
        match rate.note {
            Some(note) => println!(" ({})", note),
            None => println!(),
        }
        n_listed += 1;
    }
    if n_listed == 0 {
        if let Some(name) = selected_reaction {
            eprintln!("Warning: No rates listed for reaction {}", name);
        }
    }
}
