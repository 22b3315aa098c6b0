//! Command line interface for protein crowding and the mosaic binding model.

use super::utils;
use crate::{
    cell_biology::crowding::{self, MosaicBindingModel, MILLIMOLAR_KD},
    constants::fcn,
};
use clap::{ArgMatches, Command};

/// Builds a representation of the `protein_crowding` command line subcommand.
pub fn create_protein_crowding_subcommand(_parent_command_name: &'static str) -> Command<'static> {
    Command::new("protein_crowding")
        .about("Estimate the protein concentration in a cell and random binding affinities")
        .long_about(
            "Estimate the protein concentration in a cell and random binding affinities.\n\
             In the mosaic binding model each surface of a protein is a grid of patches.\n\
             A matching pair of patches contributes a favorable energy and a mismatching\n\
             pair an equally unfavorable one. Matches occur at random with a fixed\n\
             probability, so the number of matching patches is binomially distributed.",
        )
        .arg(utils::create_option_with_default(
            "kd",
            "VALUE",
            "Dissociation constant to estimate the probability for [mol/L]",
            "1e-3",
        ))
        .arg(utils::create_option_with_default(
            "patches",
            "NUMBER",
            "Number of patches per protein surface",
            "50",
        ))
        .arg(utils::create_option_with_default(
            "patch-size",
            "VALUE",
            "Area of a patch [Angstrom^2]",
            "50",
        ))
        .arg(utils::create_option_with_default(
            "energy-per-patch",
            "VALUE",
            "Binding energy of a matching pair of patches [kcal/mol]",
            "5",
        ))
        .arg(utils::create_option_with_default(
            "rot-trans-free-energy",
            "VALUE",
            "Loss of rotational and translational free energy on binding [kcal/mol]",
            "30",
        ))
        .arg(utils::create_option_with_default(
            "match-probability",
            "VALUE",
            "Probability that a pair of patches matches",
            "0.3333333333333333",
        ))
}

/// Runs the actions for the `protein_crowding` subcommand using the given arguments.
pub fn run_protein_crowding_subcommand(arguments: &ArgMatches) {
    let kd: fcn = utils::get_positive_float_value_from_required_parseable_argument(arguments, "kd");
    let model = construct_mosaic_binding_model_from_options(arguments);

    println!(
        "Protein concentration in a cell is about {:.1} mM",
        crowding::cell_protein_concentration() * 1e3
    );
    println!();

    let estimate = model.estimate(kd);
    let kd_description = if kd == MILLIMOLAR_KD {
        String::from("mM scale Kd")
    } else {
        format!("Kd = {:.2e} mol/L", kd)
    };

    println!("Mosaic protein protein binding model:");
    println!(
        "A surface of {} patches of {:.0} A^2 covers {:.0} A^2",
        model.num_patches_per_surface,
        model.patch_size,
        model.surface_area()
    );
    println!(
        "The Kd for a perfect matched pair is {:.2e} mol/L",
        estimate.perfect_match_kd
    );
    println!(
        "Binding enthalpy for {} is {:.2} kcal/mol",
        kd_description, estimate.binding_enthalpy
    );
    println!(
        "For the distribution of positive matches, mean = {:.2}, standard_deviation = {:.2}",
        estimate.mean, estimate.standard_deviation
    );
    println!(
        "The number of positive patches required for {} is {}, which is {:.2} standard deviations from the mean.",
        kd_description, estimate.matching_patches, estimate.z_score
    );
    println!(
        "The probability of randomly creating {} is {:.2e}",
        kd_description, estimate.probability
    );
}

fn construct_mosaic_binding_model_from_options(arguments: &ArgMatches) -> MosaicBindingModel {
    let model = MosaicBindingModel {
        num_patches_per_surface: utils::get_value_from_required_parseable_argument(
            arguments, "patches",
        ),
        patch_size: utils::get_positive_float_value_from_required_parseable_argument(
            arguments,
            "patch-size",
        ),
        energy_per_patch: utils::get_positive_float_value_from_required_parseable_argument(
            arguments,
            "energy-per-patch",
        ),
        binding_rot_trans_free_energy:
            utils::get_finite_float_value_from_required_parseable_argument(
                arguments,
                "rot-trans-free-energy",
            ),
        match_probability: utils::get_positive_float_value_from_required_parseable_argument(
            arguments,
            "match-probability",
        ),
    };
    model.validate();
    model
}
