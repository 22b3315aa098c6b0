//! Order-of-magnitude numbers for cells and estimates derived from them.

pub mod crowding;

use crate::constants::{fcn, LN_2};

/// Typical length of a protein [amino acids].
pub const AVERAGE_PROTEIN_LENGTH: fcn = 500.0;

const SECONDS_PER_MINUTE: fcn = 60.0;
const SECONDS_PER_HOUR: fcn = 3600.0;

/// Basic numbers describing yeast and human cells.
#[derive(Clone, Debug, PartialEq)]
pub struct BioNumbers {
    // Replication
    /// Speed of a replication fork [kb/min].
    pub dna_replication_rate: fcn,
    /// Mean size of a human chromosome [kb].
    pub mean_human_chromosome_size: fcn,
    /// Duration of S phase in HeLa cells [min].
    pub hela_s_phase_duration: fcn,
    /// Mean distance between replication origins in mammals [kb].
    pub mammals_mean_inter_ori_interval_length: fcn,

    // Proteostasis
    /// mRNA molecules per yeast cell.
    pub yeast_num_mrna: fcn,
    /// Ribosomes per yeast cell.
    pub yeast_num_ribosomes: fcn,
    /// Elongation speed of a ribosome [aa/s].
    pub translation_rate: fcn,
    /// Number density of proteins in the cytoplasm [1/um^3].
    pub protein_concentration: fcn,
    /// Volume of a yeast cell [um^3].
    pub yeast_cell_volume: fcn,
    /// Duration of the yeast cell cycle [min].
    pub yeast_cell_cycle_time: fcn,
    /// Average protein turnover time in HeLa cells [h].
    pub hela_average_protein_turnover_time: fcn,
    /// Duration of the HeLa cell cycle [h].
    pub hela_cell_cycle_time: fcn,
    /// Volume of a HeLa cell [um^3].
    pub hela_cell_volume: fcn,

    // Energy budget
    /// ATP molecules consumed per peptide bond formed.
    pub atp_cost_per_peptide_bond_formation: fcn,
    /// ATP molecules produced per second by a human fibroblast.
    pub human_fibroblast_atp_production_rate: fcn,
}

pub const BASIC_BIO_NUMBERS: BioNumbers = BioNumbers {
    dna_replication_rate: 2.0,
    mean_human_chromosome_size: 128327.0,
    hela_s_phase_duration: 530.0,
    mammals_mean_inter_ori_interval_length: 40.0,

    yeast_num_mrna: 15000.0,
    yeast_num_ribosomes: 500000.0,
    translation_rate: 5.0,
    protein_concentration: 3e6,
    yeast_cell_volume: 36.0,
    yeast_cell_cycle_time: 200.0,
    hela_average_protein_turnover_time: 20.0,
    hela_cell_cycle_time: 22.0,
    hela_cell_volume: 4000.0,

    atp_cost_per_peptide_bond_formation: 4.0,
    human_fibroblast_atp_production_rate: 1e9,
};

/// Estimates of DNA replication in a human cell.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplicationEstimate {
    /// Time for two forks from a single origin to copy a mean chromosome [min].
    pub single_origin_replication_time: fcn,
    /// Smallest number of origins per chromosome that completes within S phase.
    pub min_origins_per_chromosome: fcn,
    /// Number of origins per chromosome given the typical origin spacing.
    pub origins_per_chromosome: fcn,
    /// Time to replicate the stretch between two neighboring origins [min].
    pub inter_origin_replication_time: fcn,
}

/// Estimates of protein synthesis in yeast.
#[derive(Clone, Debug, PartialEq)]
pub struct YeastProteostasis {
    /// Number of proteins in a cell.
    pub n_proteins: fcn,
    /// Proteins produced per second with all ribosomes translating.
    pub max_proteins_produced_per_sec: fcn,
    /// Time to double the protein content at maximum production [s].
    pub protein_doubling_time: fcn,
    /// Ribosomes available per mRNA molecule.
    pub ribosomes_per_mrna: fcn,
}

/// Estimates of protein synthesis in HeLa cells.
#[derive(Clone, Debug, PartialEq)]
pub struct HelaProteostasis {
    /// Number of proteins in a cell.
    pub n_proteins: fcn,
    /// Proteins synthesized per second to balance dilution and degradation.
    pub protein_synthesis_rate: fcn,
}

/// Estimate of the energy spent on protein synthesis in a HeLa cell.
#[derive(Clone, Debug, PartialEq)]
pub struct EnergyBudget {
    /// ATP molecules consumed per second by protein synthesis.
    pub atp_cost_rate_for_protein_synthesis: fcn,
    /// Fraction of the ATP production of a human cell spent on protein synthesis.
    pub fraction_of_atp_production: fcn,
}

impl BioNumbers {
    pub fn replication(&self) -> ReplicationEstimate {
        let fork_pair_rate = 2.0 * self.dna_replication_rate;
        let single_origin_replication_time = self.mean_human_chromosome_size / fork_pair_rate;
        ReplicationEstimate {
            single_origin_replication_time,
            min_origins_per_chromosome: fcn::ceil(
                single_origin_replication_time / self.hela_s_phase_duration,
            ),
            origins_per_chromosome: self.mean_human_chromosome_size
                / self.mammals_mean_inter_ori_interval_length,
            inter_origin_replication_time: self.mammals_mean_inter_ori_interval_length
                / fork_pair_rate,
        }
    }

    pub fn yeast_proteostasis(&self) -> YeastProteostasis {
        let n_proteins = self.protein_concentration * self.yeast_cell_volume;
        let max_proteins_produced_per_sec =
            self.yeast_num_ribosomes * self.translation_rate / AVERAGE_PROTEIN_LENGTH;
        YeastProteostasis {
            n_proteins,
            max_proteins_produced_per_sec,
            protein_doubling_time: n_proteins / max_proteins_produced_per_sec,
            ribosomes_per_mrna: self.yeast_num_ribosomes / self.yeast_num_mrna,
        }
    }

    pub fn hela_proteostasis(&self) -> HelaProteostasis {
        let n_proteins = self.protein_concentration * self.hela_cell_volume;
        let loss_rate_per_hour =
            LN_2 * (1.0 / self.hela_cell_cycle_time + 1.0 / self.hela_average_protein_turnover_time);
        HelaProteostasis {
            n_proteins,
            protein_synthesis_rate: n_proteins * loss_rate_per_hour / SECONDS_PER_HOUR,
        }
    }

    pub fn energy_budget(&self) -> EnergyBudget {
        let atp_cost_rate_for_protein_synthesis = self.hela_proteostasis().protein_synthesis_rate
            * self.atp_cost_per_peptide_bond_formation
            * AVERAGE_PROTEIN_LENGTH;
        EnergyBudget {
            atp_cost_rate_for_protein_synthesis,
            fraction_of_atp_production: atp_cost_rate_for_protein_synthesis
                / self.human_fibroblast_atp_production_rate,
        }
    }

    /// Duration of the yeast cell cycle [s].
    pub fn yeast_cell_cycle_time_in_seconds(&self) -> fcn {
        self.yeast_cell_cycle_time * SECONDS_PER_MINUTE
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn yeast_proteostasis_is_correct() {
        let yeast = BASIC_BIO_NUMBERS.yeast_proteostasis();
        assert_relative_eq!(yeast.n_proteins, 1.08e8);
        assert_relative_eq!(yeast.max_proteins_produced_per_sec, 5000.0);
        assert_relative_eq!(yeast.protein_doubling_time / 60.0, 360.0, max_relative = 1e-12);
        assert!(yeast.protein_doubling_time > BASIC_BIO_NUMBERS.yeast_cell_cycle_time_in_seconds());
    }

    #[test]
    fn hela_proteostasis_is_correct() {
        let hela = BASIC_BIO_NUMBERS.hela_proteostasis();
        assert_relative_eq!(hela.n_proteins, 1.2e10);
        assert_relative_eq!(hela.protein_synthesis_rate, 2.206e5, max_relative = 1e-3);
    }

    #[test]
    fn energy_budget_is_correct() {
        let budget = BASIC_BIO_NUMBERS.energy_budget();
        assert_relative_eq!(
            budget.atp_cost_rate_for_protein_synthesis,
            4.41e8,
            max_relative = 1e-3
        );
        assert!(budget.fraction_of_atp_production < 1.0);
    }

    #[test]
    fn replication_needs_many_origins() {
        let replication = BASIC_BIO_NUMBERS.replication();
        assert_relative_eq!(replication.min_origins_per_chromosome, 61.0);
        assert_relative_eq!(replication.inter_origin_replication_time, 10.0);
        assert!(replication.origins_per_chromosome > replication.min_origins_per_chromosome);
    }
}
