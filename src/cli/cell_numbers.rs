//! Command line interface for order-of-magnitude estimates of cell biology.

use crate::cell_biology::BASIC_BIO_NUMBERS;
use clap::{ArgMatches, Command};

/// Builds a representation of the `cell_numbers` command line subcommand.
pub fn create_cell_numbers_subcommand(_parent_command_name: &'static str) -> Command<'static> {
    Command::new("cell_numbers")
        .about("Estimate replication, proteostasis and energy budget of cells")
}

/// Runs the actions for the `cell_numbers` subcommand.
pub fn run_cell_numbers_subcommand(_arguments: &ArgMatches) {
    let numbers = &BASIC_BIO_NUMBERS;

    println!("Replication");
    let replication = numbers.replication();
    println!(
        "Time for a single origin to replicate a human chromosome = {:.0} min",
        replication.single_origin_replication_time
    );
    println!(
        "Minimum number of origins per chromosome within S phase = {}",
        replication.min_origins_per_chromosome
    );
    println!(
        "Number of origins per chromosome = {:.0}, replicated in {:.0} min each",
        replication.origins_per_chromosome, replication.inter_origin_replication_time
    );
    println!();

    println!("Proteostasis");
    let yeast = numbers.yeast_proteostasis();
    println!("N proteins in yeast = {:.2E}", yeast.n_proteins);
    println!(
        "Yeast max n proteins produced per sec = {:.2E}",
        yeast.max_proteins_produced_per_sec
    );
    println!(
        "Yeast protein doubling time = {:.1} min (cell cycle {:.0} min)",
        yeast.protein_doubling_time / 60.0,
        numbers.yeast_cell_cycle_time
    );
    println!("Ribosomes per mRNA in yeast = {:.1}", yeast.ribosomes_per_mrna);
    println!();

    let hela = numbers.hela_proteostasis();
    println!("N proteins in a hela cell = {:.2E}", hela.n_proteins);
    println!(
        "Hela cell protein synthesis rate = {:.2E} sec^-1",
        hela.protein_synthesis_rate
    );
    println!();

    println!("Energy budget");
    let budget = numbers.energy_budget();
    println!(
        "Hela cell atp cost rate for protein synthesis = {:.2E} sec^-1",
        budget.atp_cost_rate_for_protein_synthesis
    );
    println!(
        "Fraction of the atp production of a human cell = {:.2}",
        budget.fraction_of_atp_production
    );
}
