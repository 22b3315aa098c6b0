//! Stand-alone runner for the `unit_conversion` subcommand.
//!
//! Usage: `unit_conversion VALUE INPUT_UNIT [OUTPUT_UNIT]`

use biocalc::cli;
use std::{env, ffi::OsString};

#[quit::main]
fn main() {
    cli::run::run_with_args(cli::build::build().get_matches_from(
        ["biocalc", "unit_conversion"]
            .into_iter()
            .map(OsString::from)
            .chain(env::args_os().skip(1)),
    ));
}
