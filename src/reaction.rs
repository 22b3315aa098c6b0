//! Spontaneous hydrolysis rates of biological molecules.

use crate::{
    constants::{fcn, LN_2},
    units::{self, UnitError, UnitExpression},
};

/// A measured half-life of a reaction in a given buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct ReactionRate {
    pub reaction: &'static str,
    pub buffer: &'static str,
    /// Half-life, in units of `half_life_unit`.
    pub half_life: fcn,
    /// Name of the time unit of the half-life.
    pub half_life_unit: &'static str,
    pub note: Option<&'static str>,
}

macro_rules! rate {
    ($reaction:expr, $buffer:expr, $half_life:expr, $unit:expr) => {
        rate!($reaction, $buffer, $half_life, $unit, None)
    };
    ($reaction:expr, $buffer:expr, $half_life:expr, $unit:expr, $note:expr) => {
        ReactionRate {
            reaction: $reaction,
            buffer: $buffer,
            half_life: $half_life,
            half_life_unit: $unit,
            note: $note,
        }
    };
}

pub static REACTION_RATES: [ReactionRate; 7] = [
    rate!("atp_hydrolysis", "water", 116.0, "h"),
    rate!("atp_hydrolysis", "Mg2+_pH1.52", 42.0, "min"),
    rate!("atp_hydrolysis", "Mg2+_pH6.59", 27.8, "h"),
    rate!("atp_hydrolysis", "Ca2+_pH1.40", 40.0, "min"),
    rate!("atp_hydrolysis", "Ca2+_pH7.01", 5.8, "h"),
    rate!(
        "DNA_hydrolysis",
        "water",
        3e7,
        "yr",
        Some("at pH 7 (Gates, Chem. Res. Toxicol. 22, 1747, 2009)")
    ),
    rate!(
        "peptide_bond_hydrolysis",
        "water",
        7.0,
        "yr",
        Some("other sources report 350 to 600 years")
    ),
];

impl ReactionRate {
    /// Half-life [s].
    pub fn half_life_in_seconds(&self) -> Result<fcn, UnitError> {
        let quantity =
            units::to_standard(self.half_life, &UnitExpression::parse(self.half_life_unit))?;
        units::to_custom(&quantity, &UnitExpression::parse("s"))
    }

    /// First-order rate constant [1/s].
    pub fn rate_constant(&self) -> Result<fcn, UnitError> {
        Ok(LN_2 / self.half_life_in_seconds()?)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn atp_rate_constant_in_water_is_correct() {
        let rate = &REACTION_RATES[0];
        assert_relative_eq!(rate.half_life_in_seconds().unwrap(), 417600.0);
        assert_relative_eq!(rate.rate_constant().unwrap(), 1.66e-6, max_relative = 1e-2);
    }

    #[test]
    fn all_half_lives_have_time_units() {
        for rate in REACTION_RATES.iter() {
            assert!(rate.rate_constant().unwrap() > 0.0);
        }
    }

    #[test]
    fn dna_is_more_stable_than_peptide_bonds() {
        let rate_of = |reaction: &str| {
            REACTION_RATES
                .iter()
                .find(|rate| rate.reaction == reaction)
                .unwrap()
                .rate_constant()
                .unwrap()
        };
        assert!(rate_of("DNA_hydrolysis") < rate_of("peptide_bond_hydrolysis"));
    }

    #[test]
    fn non_time_unit_is_rejected() {
        let rate = rate!("test", "water", 1.0, "m");
        assert!(matches!(
            rate.rate_constant(),
            Err(UnitError::DimensionMismatch { .. })
        ));
    }
}
