//! Command line interface.

pub mod build;
pub mod cell_numbers;
pub mod centrifuge;
pub mod chemical_potential;
pub mod chromatography;
pub mod completions;
pub mod diffusion;
pub mod ecoli_expression;
pub mod hydrophobic_interaction;
pub mod molecular_mechanics;
pub mod ph;
pub mod protein_crowding;
pub mod reactions;
pub mod run;
pub mod unit_conversion;
pub mod utils;
