//! Function for running the command line program.

use super::{
    build, cell_numbers::run_cell_numbers_subcommand, centrifuge::run_centrifuge_subcommand,
    chemical_potential::run_chemical_potential_subcommand,
    chromatography::run_chromatography_subcommand, completions::run_completions_subcommand,
    diffusion::run_diffusion_subcommand, ecoli_expression::run_ecoli_expression_subcommand,
    hydrophobic_interaction::run_hydrophobic_interaction_subcommand,
    molecular_mechanics::run_molecular_mechanics_subcommand,
    ph::run_pka_concentration_to_ph_subcommand,
    protein_crowding::run_protein_crowding_subcommand, reactions::run_reactions_subcommand,
    unit_conversion::{run_unit_conversion_subcommand, run_units_subcommand},
};
use clap::ArgMatches;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Runs the `biocalc` command line program.
pub fn run() {
    run_with_args(build::build().get_matches())
}

/// Runs the `biocalc` command line program with the given parsed arguments.
pub fn run_with_args(arguments: ArgMatches) {
    init_logging(arguments.is_present("verbose"));

    let start_instant = Instant::now();

    match arguments.subcommand() {
        Some(("unit_conversion", subcommand_arguments)) => {
            run_unit_conversion_subcommand(subcommand_arguments)
        }
        Some(("units", subcommand_arguments)) => run_units_subcommand(subcommand_arguments),
        Some(("pka_concentration_to_ph", subcommand_arguments)) => {
            run_pka_concentration_to_ph_subcommand(subcommand_arguments)
        }
        Some(("diffusion", subcommand_arguments)) => run_diffusion_subcommand(subcommand_arguments),
        Some(("centrifuge", subcommand_arguments)) => {
            run_centrifuge_subcommand(subcommand_arguments)
        }
        Some(("chromatography", subcommand_arguments)) => {
            run_chromatography_subcommand(subcommand_arguments)
        }
        Some(("cell_numbers", subcommand_arguments)) => {
            run_cell_numbers_subcommand(subcommand_arguments)
        }
        Some(("protein_crowding", subcommand_arguments)) => {
            run_protein_crowding_subcommand(subcommand_arguments)
        }
        Some(("ecoli_expression", subcommand_arguments)) => {
            run_ecoli_expression_subcommand(subcommand_arguments)
        }
        Some(("molecular_mechanics", subcommand_arguments)) => {
            run_molecular_mechanics_subcommand(subcommand_arguments)
        }
        Some(("hydrophobic_interaction", subcommand_arguments)) => {
            run_hydrophobic_interaction_subcommand(subcommand_arguments)
        }
        Some(("chemical_potential", subcommand_arguments)) => {
            run_chemical_potential_subcommand(subcommand_arguments)
        }
        Some(("reactions", subcommand_arguments)) => run_reactions_subcommand(subcommand_arguments),
        Some(("completions", subcommand_arguments)) => {
            run_completions_subcommand(subcommand_arguments)
        }
        _ => unreachable!("Subcommand is required"),
    }

    if arguments.is_present("timing") {
        println!("Elapsed time: {} s", start_instant.elapsed().as_secs_f64());
    }
}

/// Installs a subscriber printing log messages to standard error.
///
/// The level is `warn`, or `debug` if verbose output was requested, unless
/// overridden by the `RUST_LOG` environment variable. Does nothing if a
/// subscriber is already installed.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
