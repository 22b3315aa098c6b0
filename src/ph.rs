//! Acidity of a solution of a monoprotic acid.
//!
//! For an acid HA with dissociation constant Ka at analytical concentration C,
//! charge balance together with the mass action laws for HA and water gives
//! a cubic in the hydrogen ion concentration x:
//!
//! x^3 + Ka*x^2 - (Ka*C + Kw)*x - Ka*Kw = 0
//!
//! Concentrations are in mol/L.

use crate::{constants::KW, math};
use std::fmt;
use tracing::debug;

/// Floating-point precision to use for acidity calculations.
#[allow(non_camel_case_types)]
pub type fph = f64;

/// Absolute tolerance on the concentration of dissociated acid.
const DISSOCIATED_CONCENTRATION_TOLERANCE: fph = 1e-20;
/// Relative tolerance on the concentration of dissociated acid exceeding the
/// total concentration.
const DISSOCIATED_CONCENTRATION_RELATIVE_TOLERANCE: fph = 1e-9;

/// Returns the dissociation constant corresponding to the given pKa.
pub fn pka_to_ka(pka: fph) -> fph {
    fph::powf(10.0, -pka)
}

/// Returns the coefficients of the charge balance polynomial, ordered from the
/// cubic term down to the constant term.
pub fn charge_balance_coefficients(pka: fph, concentration: fph) -> [fph; 4] {
    let ka = pka_to_ka(pka);
    [1.0, ka, -ka * concentration - KW, -ka * KW]
}

/// Evaluates the charge balance polynomial at the given hydrogen ion concentration.
///
/// The result is zero for the equilibrium concentration.
pub fn charge_balance_residual(pka: fph, concentration: fph, hydrogen_ion_concentration: fph) -> fph {
    math::evaluate_polynomial(
        &charge_balance_coefficients(pka, concentration),
        hydrogen_ion_concentration,
    )
}

/// Whether a root of the charge balance polynomial is a physically possible
/// hydrogen ion concentration.
///
/// The concentration of dissociated acid, [H+] - [OH-] = x - Kw/x, must lie
/// between zero and the total concentration of acid, up to rounding.
pub fn is_physical_root(root: fph, concentration: fph) -> bool {
    if root <= 0.0 {
        return false;
    }
    let dissociated_concentration = root - KW / root;
    let tolerance = DISSOCIATED_CONCENTRATION_TOLERANCE
        + DISSOCIATED_CONCENTRATION_RELATIVE_TOLERANCE * concentration;
    dissociated_concentration >= -tolerance && dissociated_concentration <= concentration + tolerance
}

/// Interval containing the physical hydrogen ion concentration, where the
/// charge balance divided by x*(x + Ka) is increasing.
///
/// At the lower end, [H+] = sqrt(Kw), no acid is dissociated, and at the upper
/// end all of it is.
fn physical_root_bracket(concentration: fph) -> (fph, fph) {
    let lower = fph::sqrt(KW);
    let upper = 0.5 * (concentration + fph::sqrt(concentration * concentration + 4.0 * KW));
    (lower, upper)
}

/// Fraction Ka/(Ka + x) of the acid that is dissociated at the hydrogen ion
/// concentration x, valid also for a Ka of zero or infinity.
fn dissociated_fraction(ka: fph, x: fph) -> fph {
    if ka > x {
        1.0 / (1.0 + x / ka)
    } else {
        ka / (ka + x)
    }
}

/// Derivative of `dissociated_fraction` with respect to x, negated.
fn dissociated_fraction_derivative(ka: fph, x: fph) -> fph {
    if ka > x {
        let ratio = x / ka;
        1.0 / (ka * (1.0 + ratio) * (1.0 + ratio))
    } else {
        ka / ((ka + x) * (ka + x))
    }
}

/// Computes the equilibrium hydrogen ion concentration.
///
/// The real roots of the charge balance polynomial are computed, and the
/// smallest one passing `is_physical_root` is refined within the bracket of
/// physically possible concentrations, where the polynomial has exactly one
/// root. If rounding has pushed the physical root out of the set of real
/// roots, or the coefficients overflow, the bracket alone is used. Returns
/// `None` for a negative or non-finite concentration or a NaN pKa.
pub fn hydrogen_ion_concentration(pka: fph, concentration: fph) -> Option<fph> {
    if pka.is_nan() || !concentration.is_finite() || concentration < 0.0 {
        return None;
    }
    let ka = pka_to_ka(pka);
    let [a, b, c, d] = charge_balance_coefficients(pka, concentration);
    let roots = math::real_cubic_roots(a, b, c, d);

    let mut physical_roots = roots
        .iter()
        .copied()
        .filter(|&root| is_physical_root(root, concentration));
    let candidate = physical_roots.next();
    debug!(
        "Real roots of charge balance: {:?}, physical candidate: {:?}",
        roots, candidate
    );
    if let Some(rejected) = physical_roots.next() {
        debug!("Ignoring additional physical root {:e}", rejected);
    }

    let (lower, upper) = physical_root_bracket(concentration);
    let excess_charge = |x: fph| x - KW / x - dissociated_fraction(ka, x) * concentration;
    let excess_charge_derivative =
        |x: fph| 1.0 + KW / (x * x) + dissociated_fraction_derivative(ka, x) * concentration;

    let root = if lower >= upper || excess_charge(lower) >= 0.0 {
        lower.min(upper)
    } else if excess_charge(upper) <= 0.0 {
        upper
    } else {
        let initial_guess = candidate.unwrap_or_else(|| {
            debug!("No physical root among the real roots, solving within bracket only");
            fph::sqrt(lower * upper)
        });
        math::find_bracketed_root(
            excess_charge,
            excess_charge_derivative,
            lower,
            upper,
            initial_guess,
        )
    };
    debug!("Hydrogen ion concentration: {:e}", root);
    Some(root)
}

/// Computes the pH of a solution of an acid with the given pKa and concentration.
pub fn calc_ph(pka: fph, concentration: fph) -> Option<fph> {
    hydrogen_ion_concentration(pka, concentration).map(|root| -fph::log10(root))
}

/// The pH of a solution of an acid, together with the acid parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AcidSolution {
    pub pka: fph,
    /// Total concentration of acid [mol/L].
    pub concentration: fph,
    pub ph: fph,
}

impl AcidSolution {
    /// Computes the pH of a solution of an acid with the given pKa and concentration.
    pub fn new(pka: fph, concentration: fph) -> Option<Self> {
        calc_ph(pka, concentration).map(|ph| Self {
            pka,
            concentration,
            ph,
        })
    }
}

impl fmt::Display for AcidSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pKa = {:?}, concentration = {:?}M, pH = {:.2}",
            self.pka, self.concentration, self.ph
        )
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn assert_root_is_valid(pka: fph, concentration: fph) {
        let root = hydrogen_ion_concentration(pka, concentration)
            .unwrap_or_else(|| panic!("No root for pKa {} and concentration {}", pka, concentration));
        assert!(
            is_physical_root(root, concentration),
            "Root {:e} for pKa {} and concentration {} is not physical",
            root,
            pka,
            concentration
        );

        let ka = pka_to_ka(pka);
        let term_scale = root.powi(3)
            + ka * root.powi(2)
            + (ka * concentration + KW) * root
            + ka * KW;
        assert!(
            charge_balance_residual(pka, concentration, root).abs() <= 1e-9 * term_scale,
            "Root {:e} for pKa {} and concentration {} does not balance charge",
            root,
            pka,
            concentration
        );
    }

    #[test]
    fn acetic_acid_ph_is_correct() {
        let ph = calc_ph(4.76, 0.1).unwrap();
        assert_abs_diff_eq!(ph, 2.88, epsilon = 0.01);
    }

    #[test]
    fn strong_acid_is_fully_dissociated() {
        let ph = calc_ph(-2.0, 0.01).unwrap();
        assert_abs_diff_eq!(ph, 2.0, epsilon = 0.01);
    }

    #[test]
    fn very_strong_acid_is_fully_dissociated() {
        // x - Kw/x = C for complete dissociation
        let root = hydrogen_ion_concentration(-15.0, 1e-3).unwrap();
        assert_relative_eq!(root, 1e-3 + 1e-11, max_relative = 1e-12);
        assert_abs_diff_eq!(calc_ph(-15.0, 1e-3).unwrap(), 3.0, epsilon = 1e-6);
    }

    #[test]
    fn dilute_strong_acid_includes_water_ions() {
        // x^2 - C*x - Kw = 0 for complete dissociation
        let root = hydrogen_ion_concentration(-11.0, 1e-7).unwrap();
        assert_relative_eq!(root, 0.5e-7 * (1.0 + fph::sqrt(5.0)), max_relative = 1e-9);
        assert_abs_diff_eq!(calc_ph(-11.0, 1e-7).unwrap(), 6.79, epsilon = 0.005);
    }

    #[test]
    fn extremely_dilute_strong_acid_is_nearly_neutral() {
        let root = hydrogen_ion_concentration(-6.25, 1e-12).unwrap();
        assert_relative_eq!(root, 1.000_005e-7, max_relative = 1e-9);
    }

    #[test]
    fn very_dilute_acid_gives_neutral_ph() {
        let ph = calc_ph(4.76, 1e-10).unwrap();
        assert_abs_diff_eq!(ph, 7.0, epsilon = 0.01);
    }

    #[test]
    fn pure_water_is_neutral() {
        for &pka in &[-15.0, 0.0, 4.76, 20.0] {
            let root = hydrogen_ion_concentration(pka, 0.0).unwrap();
            assert_relative_eq!(root, 1e-7, max_relative = 1e-9);
        }
    }

    #[test]
    fn negative_concentration_has_no_solution() {
        assert_eq!(hydrogen_ion_concentration(4.76, -0.1), None);
        assert_eq!(calc_ph(fph::NAN, 0.1), None);
    }

    #[test]
    fn roots_are_physical_and_balance_charge() {
        for &pka in &[-3.0, 0.0, 2.15, 4.76, 7.2, 9.25, 12.3] {
            for &concentration in &[1e-9, 1e-6, 1e-3, 0.1, 1.0] {
                assert_root_is_valid(pka, concentration);
            }
        }
    }

    #[test]
    fn roots_balance_charge_for_extreme_acids() {
        for pka_index in 0..=35 {
            let pka = -15.0 + pka_index as fph;
            for concentration_index in 0..=17 {
                let concentration = fph::powi(10.0, concentration_index - 14);
                assert_root_is_valid(pka, concentration);
                assert_root_is_valid(pka + 0.5, 3.0 * concentration);
            }
        }
    }

    #[test]
    fn weak_acids_are_less_acidic() {
        let concentration = 0.01;
        let strong = calc_ph(1.0, concentration).unwrap();
        let weak = calc_ph(5.0, concentration).unwrap();
        let very_weak = calc_ph(9.0, concentration).unwrap();
        assert!(strong < weak && weak < very_weak);
        assert!(very_weak < 7.0);
    }

    #[test]
    fn negative_roots_are_not_physical() {
        assert!(!is_physical_root(-1e-3, 0.1));
        assert!(!is_physical_root(0.0, 0.1));
        assert!(is_physical_root(1e-7, 0.1));
        assert!(!is_physical_root(0.2, 0.1));
    }

    #[test]
    fn rounding_at_the_bounds_is_tolerated() {
        assert!(is_physical_root(1.000_000_000_000_000_1e-7, 0.0));
        assert!(is_physical_root(1.000_005e-7, 1e-12));
        assert!(!is_physical_root(1.1e-7, 1e-12));
    }

    #[test]
    fn acid_solution_is_reported_with_two_decimals() {
        let solution = AcidSolution::new(4.76, 0.1).unwrap();
        assert_eq!(
            solution.to_string(),
            "pKa = 4.76, concentration = 0.1M, pH = 2.88"
        );
        let solution = AcidSolution::new(5.0, 1.0).unwrap();
        assert!(solution
            .to_string()
            .starts_with("pKa = 5.0, concentration = 1.0M, pH = "));
    }
}
