//! Function for building the command line hierarchy.

use super::{
    cell_numbers::create_cell_numbers_subcommand, centrifuge::create_centrifuge_subcommand,
    chemical_potential::create_chemical_potential_subcommand,
    chromatography::create_chromatography_subcommand, completions::create_completions_subcommand,
    diffusion::create_diffusion_subcommand, ecoli_expression::create_ecoli_expression_subcommand,
    hydrophobic_interaction::create_hydrophobic_interaction_subcommand,
    molecular_mechanics::create_molecular_mechanics_subcommand,
    ph::create_pka_concentration_to_ph_subcommand,
    protein_crowding::create_protein_crowding_subcommand,
    reactions::create_reactions_subcommand,
    unit_conversion::{create_unit_conversion_subcommand, create_units_subcommand},
};
use crate::create_subcommand;
use clap::{self, Arg, Command};

/// Build the `biocalc` command line hierarchy.
pub fn build() -> Command<'static> {
    Command::new(clap::crate_name!())
        .version(clap::crate_version!())
        .author(clap::crate_authors!())
        .about(clap::crate_description!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .disable_help_subcommand(true)
        .arg(
            Arg::new("timing")
                .short('t')
                .long("timing")
                .help("Display elapsed time when done"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .help("Print intermediate values of the calculations to standard error"),
        )
        .subcommand(create_subcommand!(biocalc, unit_conversion))
        .subcommand(create_subcommand!(biocalc, units))
        .subcommand(create_subcommand!(biocalc, pka_concentration_to_ph))
        .subcommand(create_subcommand!(biocalc, diffusion))
        .subcommand(create_subcommand!(biocalc, centrifuge))
        .subcommand(create_subcommand!(biocalc, chromatography))
        .subcommand(create_subcommand!(biocalc, cell_numbers))
        .subcommand(create_subcommand!(biocalc, protein_crowding))
        .subcommand(create_subcommand!(biocalc, ecoli_expression))
        .subcommand(create_subcommand!(biocalc, molecular_mechanics))
        .subcommand(create_subcommand!(biocalc, hydrophobic_interaction))
        .subcommand(create_subcommand!(biocalc, chemical_potential))
        .subcommand(create_subcommand!(biocalc, reactions))
        .subcommand(create_subcommand!(biocalc, completions))
}
