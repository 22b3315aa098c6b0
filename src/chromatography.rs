//! Washing of molecules bound to a chromatography column.

use crate::constants::fcn;

/// A molecule competing for the binding sites of the stationary phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Competitor {
    /// Dissociation constant of the competitor [mol/L].
    pub dissociation_constant: fcn,
    /// Concentration of the competitor in the washing buffer [mol/L].
    pub concentration: fcn,
}

/// Computes the washing volume [L] at which a significant amount of the bound
/// molecule will have been washed off.
///
/// `dissociation_constant` [mol/L] is that of the bound molecule and
/// `bound_amount` [mol] is the amount bound to the stationary phase. Without a
/// competitor the molecule is washed off by dissociation alone; with one, the
/// smaller of the two washing volumes applies.
pub fn critical_washing_volume(
    dissociation_constant: fcn,
    bound_amount: fcn,
    competitor: Option<Competitor>,
) -> fcn {
    assert!(
        dissociation_constant > 0.0,
        "Dissociation constant must be positive"
    );
    let volume_without_competitor = bound_amount / dissociation_constant;

    match competitor {
        None => volume_without_competitor,
        Some(Competitor {
            dissociation_constant: competitor_dissociation_constant,
            concentration,
        }) => {
            let volume_with_competitor = bound_amount * competitor_dissociation_constant
                / (dissociation_constant * concentration);
            fcn::min(volume_without_competitor, volume_with_competitor)
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn washing_volume_without_competitor_is_correct() {
        assert_relative_eq!(critical_washing_volume(1e-9, 1e-9, None), 1.0);
    }

    #[test]
    fn strong_competitor_reduces_washing_volume() {
        let competitor = Competitor {
            dissociation_constant: 1e-6,
            concentration: 0.1,
        };
        assert_relative_eq!(
            critical_washing_volume(1e-9, 1e-9, Some(competitor)),
            1e-5,
            max_relative = 1e-12
        );
    }

    #[test]
    fn weak_competitor_has_no_effect() {
        let competitor = Competitor {
            dissociation_constant: 1.0,
            concentration: 1e-6,
        };
        assert_relative_eq!(critical_washing_volume(1e-9, 1e-9, Some(competitor)), 1.0);
    }
}
