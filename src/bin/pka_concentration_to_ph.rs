//! Stand-alone runner for the `pka_concentration_to_ph` subcommand.
//!
//! Usage: `pka_concentration_to_ph PKA CONCENTRATION`

use biocalc::cli;
use std::{env, ffi::OsString};

#[quit::main]
fn main() {
    cli::run::run_with_args(cli::build::build().get_matches_from(
        ["biocalc", "pka_concentration_to_ph"]
            .into_iter()
            .map(OsString::from)
            .chain(env::args_os().skip(1)),
    ));
}
