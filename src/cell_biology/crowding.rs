//! Protein crowding and the likelihood of accidental protein-protein binding.
//!
//! In the mosaic model, proteins are cubes whose faces are grids of residue
//! sized patches. Each patch is hydrophobic, positively or negatively charged,
//! and two opposing patches either match (lowering the energy by one patch
//! energy) or mismatch (raising it by the same amount). Binding must also pay
//! for the loss of rotational and translational entropy.

use crate::{
    constants::{fcn, KT_KCAL_PER_MOL},
    math,
};

/// Mass density of a cell [g/L].
pub const CELL_DENSITY: fcn = 1000.0;
/// Fraction of the wet weight remaining after drying.
pub const DRY_WEIGHT_FRACTION: fcn = 0.3;
/// Fraction of the dry weight made up of protein.
pub const PROTEIN_DRY_WEIGHT_FRACTION: fcn = 0.5;
/// Average protein weight [g/mol].
pub const AVERAGE_PROTEIN_WEIGHT: fcn = 3e4;
/// Typical protein size [m].
pub const PROTEIN_LENGTH: fcn = 5e-9;

/// Dissociation constant regarded as a weak but biologically relevant
/// interaction [mol/L].
pub const MILLIMOLAR_KD: fcn = 1e-3;

/// Estimates the molar concentration of protein in a cell [mol/L].
pub fn cell_protein_concentration() -> fcn {
    CELL_DENSITY * DRY_WEIGHT_FRACTION * PROTEIN_DRY_WEIGHT_FRACTION / AVERAGE_PROTEIN_WEIGHT
}

/// Parameters of the mosaic protein-protein binding model.
#[derive(Clone, Debug)]
pub struct MosaicBindingModel {
    /// Number of patches on one face, from a protein of about 300 residues.
    pub num_patches_per_surface: u32,
    /// Area of a patch [Angstrom^2].
    pub patch_size: fcn,
    /// Energy gained by one matching patch pair [kcal/mol], close to the water
    /// surface energy of one patch.
    pub energy_per_patch: fcn,
    /// Free energy lost to rotational and translational entropy on binding,
    /// at 1 mol/L standard concentration [kcal/mol].
    pub binding_rot_trans_free_energy: fcn,
    /// Probability that two random patches match.
    pub match_probability: fcn,
}

impl MosaicBindingModel {
    pub const DEFAULT_NUM_PATCHES_PER_SURFACE: u32 = 50;
    pub const DEFAULT_PATCH_SIZE: fcn = 50.0;
    pub const DEFAULT_ENERGY_PER_PATCH: fcn = 5.0;
    pub const DEFAULT_BINDING_ROT_TRANS_FREE_ENERGY: fcn = 30.0;
    pub const DEFAULT_MATCH_PROBABILITY: fcn = 1.0 / 3.0;

    /// Panics if any of the model parameter values are invalid.
    pub fn validate(&self) {
        assert!(
            self.num_patches_per_surface > 0,
            "Number of patches must be larger than zero."
        );
        assert!(self.patch_size > 0.0, "Patch size must be positive.");
        assert!(self.energy_per_patch > 0.0, "Patch energy must be positive.");
        assert!(
            self.match_probability > 0.0 && self.match_probability < 1.0,
            "Match probability must be between zero and one."
        );
    }

    /// Area of one protein surface [Angstrom^2].
    pub fn surface_area(&self) -> fcn {
        self.num_patches_per_surface as fcn * self.patch_size
    }

    /// Dissociation constant [mol/L] of a pair whose patches all match.
    pub fn perfect_match_kd(&self) -> fcn {
        let binding_energy = self.num_patches_per_surface as fcn * self.energy_per_patch
            - self.binding_rot_trans_free_energy;
        fcn::exp(-binding_energy / KT_KCAL_PER_MOL)
    }

    /// Binding enthalpy [kcal/mol] required for the given dissociation
    /// constant [mol/L].
    pub fn binding_enthalpy_for_kd(&self, kd: fcn) -> fcn {
        self.binding_rot_trans_free_energy - KT_KCAL_PER_MOL * fcn::ln(kd)
    }

    /// Smallest excess of matching over mismatching patches giving at least
    /// the binding enthalpy for the given dissociation constant.
    pub fn net_matching_patches_for_kd(&self, kd: fcn) -> u32 {
        fcn::ceil(self.binding_enthalpy_for_kd(kd) / self.energy_per_patch) as u32
    }

    /// Smallest number of matching patches giving the dissociation constant.
    pub fn matching_patches_for_kd(&self, kd: fcn) -> u32 {
        let net_matching_patches = self.net_matching_patches_for_kd(kd);
        (self.num_patches_per_surface + net_matching_patches + 1) / 2
    }

    /// Mean and standard deviation of the binomially distributed number of
    /// matching patches between two random surfaces.
    pub fn matching_patch_distribution(&self) -> (fcn, fcn) {
        let n = self.num_patches_per_surface as fcn;
        let p = self.match_probability;
        (n * p, fcn::sqrt(n * p * (1.0 - p)))
    }

    /// Evaluates the model for the given target dissociation constant [mol/L].
    pub fn estimate(&self, kd: fcn) -> MosaicBindingEstimate {
        let (mean, standard_deviation) = self.matching_patch_distribution();
        let matching_patches = self.matching_patches_for_kd(kd);
        let z_score = (matching_patches as fcn - mean) / standard_deviation;
        MosaicBindingEstimate {
            perfect_match_kd: self.perfect_match_kd(),
            binding_enthalpy: self.binding_enthalpy_for_kd(kd),
            net_matching_patches: self.net_matching_patches_for_kd(kd),
            matching_patches,
            mean,
            standard_deviation,
            z_score,
            probability: math::normal_upper_tail_probability(z_score),
        }
    }
}

impl Default for MosaicBindingModel {
    fn default() -> Self {
        MosaicBindingModel {
            num_patches_per_surface: Self::DEFAULT_NUM_PATCHES_PER_SURFACE,
            patch_size: Self::DEFAULT_PATCH_SIZE,
            energy_per_patch: Self::DEFAULT_ENERGY_PER_PATCH,
            binding_rot_trans_free_energy: Self::DEFAULT_BINDING_ROT_TRANS_FREE_ENERGY,
            match_probability: Self::DEFAULT_MATCH_PROBABILITY,
        }
    }
}

/// Outcome of the mosaic binding model for a target dissociation constant.
#[derive(Clone, Debug, PartialEq)]
pub struct MosaicBindingEstimate {
    /// Dissociation constant of a perfectly matched pair [mol/L].
    pub perfect_match_kd: fcn,
    /// Binding enthalpy required for the target [kcal/mol].
    pub binding_enthalpy: fcn,
    /// Required excess of matching over mismatching patches.
    pub net_matching_patches: u32,
    /// Required number of matching patches.
    pub matching_patches: u32,
    /// Mean number of matching patches for random surfaces.
    pub mean: fcn,
    /// Standard deviation of the number of matching patches.
    pub standard_deviation: fcn,
    /// Distance of the required number of patches from the mean, in standard deviations.
    pub z_score: fcn,
    /// Probability that random surfaces bind at least as strongly as the target.
    pub probability: fcn,
}

#[cfg(test)]
mod tests {

    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cell_protein_concentration_is_a_few_millimolar() {
        assert_relative_eq!(cell_protein_concentration() * 1000.0, 5.0, max_relative = 1e-12);
    }

    #[test]
    fn millimolar_binding_needs_twenty_nine_matches() {
        let estimate = MosaicBindingModel::default().estimate(MILLIMOLAR_KD);
        assert_relative_eq!(estimate.binding_enthalpy, 34.12, max_relative = 1e-3);
        assert_eq!(estimate.net_matching_patches, 7);
        assert_eq!(estimate.matching_patches, 29);
        assert_relative_eq!(estimate.mean, 50.0 / 3.0, max_relative = 1e-12);
        assert_relative_eq!(estimate.standard_deviation, 3.333, max_relative = 1e-3);
        assert_relative_eq!(estimate.z_score, 3.70, max_relative = 1e-3);
        assert!(estimate.probability > 1e-5 && estimate.probability < 2e-4);
    }

    #[test]
    fn surface_is_covered_by_patches() {
        let model = MosaicBindingModel::default();
        assert_relative_eq!(model.surface_area(), 2500.0);
        let model = MosaicBindingModel {
            patch_size: 20.0,
            ..MosaicBindingModel::default()
        };
        model.validate();
        assert_relative_eq!(model.surface_area(), 1000.0);
    }

    #[test]
    #[should_panic]
    fn non_positive_patch_size_is_invalid() {
        MosaicBindingModel {
            patch_size: 0.0,
            ..MosaicBindingModel::default()
        }
        .validate();
    }

    #[test]
    fn perfect_match_binds_extremely_tightly() {
        let kd = MosaicBindingModel::default().perfect_match_kd();
        assert!(kd > 0.0 && kd < 1e-150);
    }
}
