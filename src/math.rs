//! Math utilities.

use crate::{constants::PI, num::BFloat};
use special::Error;
use tracing::trace;

/// Floating-point precision to use for root finding.
#[allow(non_camel_case_types)]
pub type fin = f64;

const MAX_POLISHING_ITERATIONS: usize = 16;
const MAX_BRACKETED_ITERATIONS: usize = 200;
const BRACKETED_RELATIVE_TOLERANCE: fin = 4.0 * fin::EPSILON;

/// Evaluates the polynomial with the given coefficients, ordered from the
/// highest degree down to the constant term.
pub fn evaluate_polynomial<F: BFloat>(coefficients: &[F], x: F) -> F {
    coefficients
        .iter()
        .fold(F::zero(), |accum, &coefficient| accum * x + coefficient)
}

/// Evaluates the derivative of the polynomial with the given coefficients,
/// ordered from the highest degree down to the constant term.
pub fn evaluate_polynomial_derivative<F: BFloat>(coefficients: &[F], x: F) -> F {
    let degree = coefficients.len().saturating_sub(1);
    coefficients[..degree]
        .iter()
        .enumerate()
        .fold(F::zero(), |accum, (idx, &coefficient)| {
            accum * x
                + coefficient * F::from_usize(degree - idx).expect("Conversion failed")
        })
}

/// Computes the real roots of the cubic polynomial a*x^3 + b*x^2 + c*x + d,
/// sorted in ascending order.
///
/// The root of largest magnitude is found in closed form and divided out,
/// and the remaining quadratic is solved with the cancellation-free form of
/// the quadratic formula. All roots are then refined with Newton iterations
/// on the undeflated polynomial. Complex roots are omitted, and a repeated
/// real root is reported once per multiplicity.
pub fn real_cubic_roots(a: fin, b: fin, c: fin, d: fin) -> Vec<fin> {
    assert!(a != 0.0, "Leading coefficient of cubic must be non-zero");

    let b = b / a;
    let c = c / a;
    let d = d / a;
    let coefficients = [1.0, b, c, d];

    let first_root = polish_root(&coefficients, largest_real_root_estimate(b, c, d));

    // Dividing out (x - r) leaves x^2 + e*x + f, where b = e - r, c = f - e*r
    // and d = -f*r. Of the two expressions for e, the one with the least
    // cancellation is used.
    let (e, f) = if first_root != 0.0 {
        let f = -d / first_root;
        let e_from_b = b + first_root;
        let e_from_c = (f - c) / first_root;
        let e = if cancellation_ratio(b, first_root) <= cancellation_ratio(f, -c) {
            e_from_b
        } else {
            e_from_c
        };
        (e, f)
    } else {
        (b, c)
    };

    let mut roots = vec![first_root];
    let quadratic_discriminant = e * e - 4.0 * f;
    if quadratic_discriminant >= 0.0 {
        let s = -0.5 * (e + fin::copysign(quadratic_discriminant.sqrt(), e));
        let (second_root, third_root) = if s != 0.0 { (s, f / s) } else { (0.0, 0.0) };
        roots.push(polish_root(&coefficients, second_root));
        roots.push(polish_root(&coefficients, third_root));
    }
    // Coefficients spanning more than the floating-point range give no roots
    roots.retain(|root| root.is_finite());
    roots.sort_by(|x, y| x.partial_cmp(y).expect("NaN in cubic root"));

    trace!("Real roots of {:?}: {:?}", coefficients, roots);
    roots
}

/// Ratio of the magnitude of the terms to the magnitude of their sum, which
/// bounds the relative rounding error of the sum.
fn cancellation_ratio(x: fin, y: fin) -> fin {
    let sum = (x + y).abs();
    if sum == 0.0 {
        fin::INFINITY
    } else {
        (x.abs() + y.abs()) / sum
    }
}

/// Estimates the real root of largest magnitude of x^3 + b*x^2 + c*x + d.
fn largest_real_root_estimate(b: fin, c: fin, d: fin) -> fin {
    // Substituting x = t - b/3 gives t^3 + p*t + q = 0
    let shift = -b / 3.0;
    let p = c - b * b / 3.0;
    let q = 2.0 * b * b * b / 27.0 - b * c / 3.0 + d;

    let half_q = 0.5 * q;
    let third_p = p / 3.0;
    let discriminant = half_q * half_q + third_p * third_p * third_p;

    if p == 0.0 && q == 0.0 {
        shift
    } else if discriminant >= 0.0 {
        let sqrt_discriminant = discriminant.sqrt();
        fin::cbrt(-half_q + sqrt_discriminant) + fin::cbrt(-half_q - sqrt_discriminant) + shift
    } else {
        let amplitude = 2.0 * fin::sqrt(-third_p);
        let cos_arg = (3.0 * q / (2.0 * p) * fin::sqrt(-3.0 / p)).clamp(-1.0, 1.0);
        let angle = cos_arg.acos() / 3.0;
        (0..3)
            .map(|k| amplitude * fin::cos(angle - 2.0 * PI * (k as fin) / 3.0) + shift)
            .fold(0.0, |largest: fin, root| {
                if root.abs() > largest.abs() {
                    root
                } else {
                    largest
                }
            })
    }
}

/// Refines an approximate root with Newton iterations, keeping only steps
/// that reduce the magnitude of the polynomial.
fn polish_root(coefficients: &[fin], mut root: fin) -> fin {
    let mut value = evaluate_polynomial(coefficients, root);
    for _ in 0..MAX_POLISHING_ITERATIONS {
        if value == 0.0 {
            break;
        }
        let derivative = evaluate_polynomial_derivative(coefficients, root);
        if derivative == 0.0 {
            break;
        }
        let candidate = root - value / derivative;
        let candidate_value = evaluate_polynomial(coefficients, candidate);
        if candidate_value.abs() >= value.abs() {
            break;
        }
        root = candidate;
        value = candidate_value;
    }
    root
}

/// Finds the root of a continuous function in the interval between `lower`
/// and `upper`, where the function values at the end points must not have the
/// same sign.
///
/// Newton steps from `initial_guess` are used as long as they stay inside the
/// current bracket and shrink it fast enough, and bisection otherwise. When
/// the bracket is positive and spans more than a decade, bisection is done in
/// the logarithm of the argument.
pub fn find_bracketed_root<E, D>(
    evaluate: E,
    evaluate_derivative: D,
    lower: fin,
    upper: fin,
    initial_guess: fin,
) -> fin
where
    E: Fn(fin) -> fin,
    D: Fn(fin) -> fin,
{
    assert!(lower <= upper, "Lower bound must not exceed upper bound");

    let lower_value = evaluate(lower);
    let upper_value = evaluate(upper);
    if lower_value == 0.0 {
        return lower;
    }
    if upper_value == 0.0 {
        return upper;
    }
    assert!(
        lower_value.signum() != upper_value.signum(),
        "Root must be bracketed"
    );

    // Orient the bracket so that the function is negative at `low`
    let (mut low, mut high) = if lower_value < 0.0 {
        (lower, upper)
    } else {
        (upper, lower)
    };

    let mut root = if initial_guess > lower && initial_guess < upper {
        initial_guess
    } else {
        bracket_midpoint(low, high)
    };
    let mut previous_step = (upper - lower).abs();

    for _ in 0..MAX_BRACKETED_ITERATIONS {
        let value = evaluate(root);
        if value == 0.0 {
            return root;
        }
        if value < 0.0 {
            low = root;
        } else {
            high = root;
        }

        let derivative = evaluate_derivative(root);
        let newton_root = root - value / derivative;
        let newton_is_safe = derivative != 0.0
            && newton_root.is_finite()
            && (newton_root - low) * (newton_root - high) < 0.0
            && (newton_root - root).abs() < 0.5 * previous_step;

        let next_root = if newton_is_safe {
            newton_root
        } else {
            bracket_midpoint(low, high)
        };
        previous_step = (next_root - root).abs();

        if previous_step <= BRACKETED_RELATIVE_TOLERANCE * next_root.abs() {
            return next_root;
        }
        root = next_root;
    }
    trace!(
        "Root finding stopped after {} iterations at {:e}",
        MAX_BRACKETED_ITERATIONS,
        root
    );
    root
}

fn bracket_midpoint(a: fin, b: fin) -> fin {
    let (smaller, larger) = if a <= b { (a, b) } else { (b, a) };
    if smaller > 0.0 && larger > 10.0 * smaller {
        fin::sqrt(smaller * larger)
    } else {
        0.5 * (smaller + larger)
    }
}

/// Probability that a standard normal variable exceeds `z`.
pub fn normal_upper_tail_probability(z: fin) -> fin {
    0.5 * fin::compl_error(z / fin::sqrt(2.0))
}

#[cfg(test)]
mod tests {

    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn polynomial_evaluation_works() {
        let coefficients = [2.0, -3.0, 0.0, 5.0];
        assert_relative_eq!(evaluate_polynomial(&coefficients, 2.0), 9.0);
        assert_relative_eq!(evaluate_polynomial_derivative(&coefficients, 2.0), 12.0);
    }

    #[test]
    fn polynomial_evaluation_works_in_single_precision() {
        let coefficients: [f32; 3] = [1.0, 0.0, -4.0];
        assert_eq!(evaluate_polynomial(&coefficients, 2.0), 0.0);
        assert_eq!(evaluate_polynomial_derivative(&coefficients, 2.0), 4.0);
    }

    #[test]
    fn three_distinct_roots_are_found() {
        // (x - 1)(x + 2)(x - 3)
        let roots = real_cubic_roots(1.0, -2.0, -5.0, 6.0);
        assert_eq!(roots.len(), 3);
        assert_relative_eq!(roots[0], -2.0, max_relative = 1e-12);
        assert_relative_eq!(roots[1], 1.0, max_relative = 1e-12);
        assert_relative_eq!(roots[2], 3.0, max_relative = 1e-12);
    }

    #[test]
    fn complex_roots_are_omitted() {
        // (x - 2)(x^2 + 1)
        let roots = real_cubic_roots(2.0, -4.0, 2.0, -4.0);
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 2.0, max_relative = 1e-12);
    }

    #[test]
    fn triple_root_is_found() {
        // (x - 1)^3
        let roots = real_cubic_roots(1.0, -3.0, 3.0, -1.0);
        assert_eq!(roots.len(), 3);
        for root in roots {
            assert_abs_diff_eq!(root, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn widely_separated_roots_are_accurate() {
        // (x - 1e-7)(x + 1e-5)(x + 1e2)
        let (r1, r2, r3) = (1e-7, -1e-5, -1e2);
        let roots = real_cubic_roots(
            1.0,
            -(r1 + r2 + r3),
            r1 * r2 + r1 * r3 + r2 * r3,
            -r1 * r2 * r3,
        );
        assert_eq!(roots.len(), 3);
        assert_relative_eq!(roots[0], r3, max_relative = 1e-9);
        assert_relative_eq!(roots[1], r2, max_relative = 1e-9);
        assert_relative_eq!(roots[2], r1, max_relative = 1e-9);
    }

    #[test]
    fn small_root_survives_deflation_of_huge_root() {
        // Charge balance of a strong acid with Ka = 1e15 at C = 1e-3
        let roots = real_cubic_roots(1.0, 1e15, -(1e12 + 1e-14), -10.0);
        let positive_roots: Vec<_> = roots.iter().copied().filter(|&root| root > 0.0).collect();
        assert_eq!(positive_roots.len(), 1);
        assert_relative_eq!(positive_roots[0], 1e-3, max_relative = 1e-6);
    }

    #[test]
    fn overflowing_coefficients_give_no_roots() {
        let roots = real_cubic_roots(1.0, fin::INFINITY, fin::NEG_INFINITY, fin::NEG_INFINITY);
        assert!(roots.iter().all(|root| root.is_finite()));
    }

    #[test]
    fn bracketed_root_is_found() {
        let root = find_bracketed_root(|x| x * x - 2.0, |x| 2.0 * x, 0.0, 2.0, 1.0);
        assert_relative_eq!(root, fin::sqrt(2.0), max_relative = 1e-12);

        let root = find_bracketed_root(|x| 2.0 - x * x, |x| -2.0 * x, 0.0, 2.0, 3.0);
        assert_relative_eq!(root, fin::sqrt(2.0), max_relative = 1e-12);
    }

    #[test]
    fn bracketed_root_is_found_by_bisection_over_many_decades() {
        let root = find_bracketed_root(|x| x - 1e-3, |_| 0.0, 1e-9, 1e3, 0.0);
        assert_relative_eq!(root, 1e-3, max_relative = 1e-12);
    }

    #[test]
    fn bracket_end_point_can_be_the_root() {
        assert_eq!(find_bracketed_root(|x| x, |_| 1.0, 0.0, 1.0, 0.5), 0.0);
        assert_eq!(find_bracketed_root(|x| x - 1.0, |_| 1.0, 0.0, 1.0, 0.5), 1.0);
    }

    #[test]
    #[should_panic]
    fn unbracketed_root_is_rejected() {
        find_bracketed_root(|x| x * x + 1.0, |x| 2.0 * x, -1.0, 1.0, 0.0);
    }

    #[test]
    fn normal_tail_probability_is_correct() {
        assert_relative_eq!(normal_upper_tail_probability(0.0), 0.5, max_relative = 1e-12);
        assert_relative_eq!(
            normal_upper_tail_probability(1.0),
            0.158_655_253_931_457,
            max_relative = 1e-9
        );
    }
}
