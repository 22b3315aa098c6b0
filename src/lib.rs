//! The `biocalc` crate provides back-of-the-envelope calculators for
//! biophysics and cell biology.
pub mod constants;
pub mod units;
pub mod math;
pub mod num;
pub mod ph;
pub mod molecules;
pub mod diffusion;
pub mod centrifuge;
pub mod chromatography;
pub mod cell_biology;
pub mod protein_expression;
pub mod molecular_mechanics;
pub mod hydrophobic;
pub mod statistical_mechanics;
pub mod reaction;
pub mod error;

#[cfg(feature = "cli")]
pub mod cli;
