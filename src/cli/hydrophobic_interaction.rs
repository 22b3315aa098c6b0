//! Command line interface for hydrophobic surface and cavity free energies.

use crate::{
    constants::WATER_SURFACE_TENSION,
    exit_on_none,
    hydrophobic::{self, AA_SIDE_CHAIN_SASA},
};
use clap::{Arg, ArgMatches, Command};

const DEFAULT_RESIDUES: [&str; 4] = ["ALA", "LEU", "PHE", "TRP"];
/// Edge length of a cubic protein with a diameter of 5 nm [Angstrom].
const PROTEIN_EDGE_LENGTH: i32 = 50;

/// Builds a representation of the `hydrophobic_interaction` command line subcommand.
pub fn create_hydrophobic_interaction_subcommand(
    _parent_command_name: &'static str,
) -> Command<'static> {
    Command::new("hydrophobic_interaction")
        .about("Estimate free energies of exposing surfaces and creating cavities in water")
        .arg(
            Arg::new("residues")
                .long("residues")
                .require_equals(true)
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .value_name("NAMES")
                .help(
                    "Three-letter codes of the side chains to compute surface energies for\n\
                     (comma-separated) [default: ALA,LEU,PHE,TRP]",
                )
                .takes_value(true)
                .multiple_values(true),
        )
        .arg(
            Arg::new("all-residues")
                .long("all-residues")
                .help("Compute surface energies for all tabulated side chains")
                .conflicts_with("residues"),
        )
}

/// Runs the actions for the `hydrophobic_interaction` subcommand using the given arguments.
pub fn run_hydrophobic_interaction_subcommand(arguments: &ArgMatches) {
    let residues: Vec<&str> = if arguments.is_present("all-residues") {
        AA_SIDE_CHAIN_SASA.iter().map(|&(name, _)| name).collect()
    } else {
        arguments
            .values_of("residues")
            .map(|values| values.collect())
            .unwrap_or_else(|| DEFAULT_RESIDUES.to_vec())
    };

    println!(
        "Surface tension of water is {} N/m, giving a surface energy of {:.5} kcal/mol for 1 Angstrom^2",
        WATER_SURFACE_TENSION,
        hydrophobic::water_surface_energy(1.0)
    );
    println!("Surface energies for AA side chains:");
    for residue in residues {
        let area = exit_on_none!(
            hydrophobic::side_chain_sasa(residue),
            "Error: No surface area for residue {}",
            residue
        );
        println!(
            "{}: surface area = {} Angstrom^2, surface energy = {:.2} kcal/mol",
            residue,
            area,
            hydrophobic::water_surface_energy(area)
        );
    }
    println!();

    println!(
        "Volume energy for creating a 1 Angstrom^3 hole is {:.2E} kcal/mol",
        hydrophobic::volume_free_energy_at_standard_pressure(1.0)
    );
    println!(
        "Volume energy for a cubic protein with 5nm diameter is {:.2E} kcal/mol",
        hydrophobic::volume_free_energy_at_standard_pressure(
            PROTEIN_EDGE_LENGTH.pow(3) as f64
        )
    );
}
