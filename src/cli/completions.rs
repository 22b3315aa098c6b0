//! Command line interface for generating a command line completion script.

use super::build;
use crate::exit_on_error;
use clap::{Arg, ArgMatches, Command};
use clap_complete::Shell;
use std::io;

/// Builds a representation of the `completions` command line subcommand.
pub fn create_completions_subcommand(_parent_command_name: &'static str) -> Command<'static> {
    Command::new("completions")
        .about("Generate tab-completion script for your shell")
        .hide(true)
        .arg(
            Arg::new("shell")
                .value_name("SHELL")
                .required(true)
                .possible_values(["bash", "zsh", "fish"])
                .help("The shell to generate the script for"),
        )
        .after_help(
            "The script is written to standard output. For Bash, for instance:\n\n    \
             $ mkdir -p ~/.local/share/bash-completion/completions\n    \
             $ biocalc completions bash > ~/.local/share/bash-completion/completions/biocalc\n\n\
             You may have to log out and back in for the changes to take effect.",
        )
}

/// Runs the actions for the `completions` subcommand using the given arguments.
pub fn run_completions_subcommand(arguments: &ArgMatches) {
    let shell: Shell = exit_on_error!(
        arguments
            .value_of("shell")
            .expect("No value for required argument")
            .parse::<Shell>(),
        "Error: Invalid shell: {}"
    );
    let mut command = build::build();
    clap_complete::generate(shell, &mut command, clap::crate_name!(), &mut io::stdout());
}
