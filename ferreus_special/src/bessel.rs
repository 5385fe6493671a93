/////////////////////////////////////////////////////////////////////////////////////////////
//
// Evaluates Bessel functions of the first kind for integer and non-integer orders.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::{SpecialFunctionError, gamma, ln_gamma};

// # References
// [1] M. Abramowitz, I. A. Stegun, Handbook of Mathematical Functions, 9.1.10 and 9.1.27 (1964).
// [2] W. H. Press et al., Numerical Recipes, 3rd ed., section 6.5 (Miller's algorithm) (2007).

/// Largest |x| evaluated with the ascending power series for integer orders.
/// Beyond this the alternating series loses too many digits to cancellation.
const INTEGER_SERIES_LIMIT: f64 = 8.0;

/// Largest x accepted for non-integer orders, which only have the series path.
const FRACTIONAL_SERIES_LIMIT: f64 = 20.0;

/// Largest |x| accepted by the backward recurrence.
const MILLER_ARGUMENT_LIMIT: f64 = 1.0e5;

/// Maximum number of series terms before reporting non-convergence.
const MAX_SERIES_TERMS: usize = 500;

/// Extra recurrence depth above max(n, |x|) for Miller's algorithm.
const MILLER_PADDING: usize = 20;

const MILLER_SEED: f64 = 1.0e-300;
const RESCALE_THRESHOLD: f64 = 1.0e250;
const RESCALE_FACTOR: f64 = 1.0e-250;

/// Bessel function of the first kind `J_ν(x)` for a real order `ν`.
///
/// Integer orders (of either sign) are evaluated for any real `x` via [`bessel_jn`].
/// Non-integer orders, such as half-integers, are evaluated with the ascending
/// series and are only real-valued for `x >= 0`; negative arguments return a
/// [`SpecialFunctionError::DomainError`]. At `x = 0` a negative non-integer
/// order is singular and is also reported as a domain error.
pub fn bessel_j(order: f64, x: f64) -> Result<f64, SpecialFunctionError> {
    if !order.is_finite() {
        return Err(SpecialFunctionError::DomainError {
            function: "bessel_j",
            argument: order,
        });
    }

    if order == order.trunc() && order.abs() < i64::MAX as f64 {
        return bessel_jn(order as i64, x);
    }

    if !x.is_finite() || x < 0.0 {
        return Err(SpecialFunctionError::DomainError {
            function: "bessel_j",
            argument: x,
        });
    }

    if x == 0.0 {
        return match order > 0.0 {
            true => Ok(0.0),
            false => Err(SpecialFunctionError::DomainError {
                function: "bessel_j",
                argument: x,
            }),
        };
    }

    if x > FRACTIONAL_SERIES_LIMIT {
        return Err(SpecialFunctionError::NonConvergence {
            function: "bessel_j",
            iterations: 0,
        });
    }

    // Leading term (x/2)^ν / Γ(ν + 1), computed in log space when Γ(ν + 1) could overflow.
    let half_x = 0.5 * x;
    let leading = if order + 1.0 > 0.0 {
        (order * half_x.ln() - ln_gamma(order + 1.0)?).exp()
    } else {
        half_x.powf(order) / gamma(order + 1.0)?
    };

    let value = ascending_series(leading, order, half_x, "bessel_j")?;

    match value.is_finite() {
        true => Ok(value),
        false => Err(SpecialFunctionError::NonConvergence {
            function: "bessel_j",
            iterations: MAX_SERIES_TERMS,
        }),
    }
}

/// Bessel function of the first kind `J_n(x)` for an integer order `n`.
///
/// Negative orders and arguments are reduced with
/// `J_{-n}(x) = (-1)^n J_n(x)` and `J_n(-x) = (-1)^n J_n(x)`.
/// Small arguments use the ascending power series, larger arguments use
/// Miller's backward recurrence normalised by `J_0 + 2 Σ J_{2k} = 1`.
pub fn bessel_jn(order: i64, x: f64) -> Result<f64, SpecialFunctionError> {
    if !x.is_finite() {
        return Err(SpecialFunctionError::DomainError {
            function: "bessel_jn",
            argument: x,
        });
    }

    let n = order.unsigned_abs() as usize;

    // Each reflection contributes (-1)^n.
    let odd = n % 2 == 1;
    let flip = odd && ((order < 0) != (x < 0.0));
    let sign = if flip { -1.0 } else { 1.0 };

    let ax = x.abs();

    if ax == 0.0 {
        return Ok(if n == 0 { 1.0 } else { 0.0 });
    }

    let value = if ax <= INTEGER_SERIES_LIMIT {
        integer_series(n, ax)?
    } else if ax <= MILLER_ARGUMENT_LIMIT {
        miller_backward_recurrence(n, ax)
    } else {
        return Err(SpecialFunctionError::NonConvergence {
            function: "bessel_jn",
            iterations: 0,
        });
    };

    Ok(sign * value)
}

/// Ascending series `J_n(x) = Σ_m (-1)^m (x/2)^{2m+n} / (m! (m+n)!)` for `x > 0`.
fn integer_series(n: usize, ax: f64) -> Result<f64, SpecialFunctionError> {
    let half_x = 0.5 * ax;

    // (x/2)^n / n!, built incrementally so it underflows gracefully rather than overflowing.
    let mut leading = 1.0;
    for k in 1..=n {
        leading *= half_x / k as f64;
        if leading == 0.0 {
            return Ok(0.0);
        }
    }

    ascending_series(leading, n as f64, half_x, "bessel_jn")
}

/// Sums the ascending series given its leading term, using the term ratio
/// `t_m / t_{m-1} = -(x/2)^2 / (m (m + ν))`.
fn ascending_series(
    leading: f64,
    order: f64,
    half_x: f64,
    function: &'static str,
) -> Result<f64, SpecialFunctionError> {
    let half_x_sqr = half_x * half_x;

    let mut term = leading;
    let mut sum = leading;

    for m in 1..MAX_SERIES_TERMS {
        let m = m as f64;
        let denominator = m * (m + order);
        term *= -half_x_sqr / denominator;
        sum += term;

        // Terms only shrink monotonically once m (m + ν) exceeds (x/2)^2.
        if denominator > half_x_sqr && term.abs() <= 0.5 * f64::EPSILON * sum.abs() {
            return Ok(sum);
        }
    }

    Err(SpecialFunctionError::NonConvergence {
        function,
        iterations: MAX_SERIES_TERMS,
    })
}

/// Miller's algorithm: recur `J_{k-1} = (2k / x) J_k - J_{k+1}` downward from an
/// arbitrary seed well above max(n, x), then normalise with
/// `J_0 + 2 (J_2 + J_4 + ...) = 1`.
fn miller_backward_recurrence(n: usize, ax: f64) -> f64 {
    let top = n.max(ax as usize);
    let start = 2 * ((top + MILLER_PADDING + (40.0 * top as f64).sqrt() as usize) / 2);

    let mut next = 0.0;
    let mut current = MILLER_SEED;
    let mut even_sum = 0.0;
    let mut result = 0.0;

    for k in (1..=start).rev() {
        let previous = 2.0 * k as f64 / ax * current - next;
        next = current;
        current = previous;

        if current.abs() > RESCALE_THRESHOLD {
            current *= RESCALE_FACTOR;
            next *= RESCALE_FACTOR;
            even_sum *= RESCALE_FACTOR;
            result *= RESCALE_FACTOR;
        }

        let index = k - 1;
        if index > 0 && index % 2 == 0 {
            even_sum += current;
        }
        if index == n {
            result = current;
        }
    }

    result / (2.0 * even_sum + current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;
    use std::f64::consts::PI;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!((actual - expected).abs() <= tol);
    }

    #[test]
    fn integer_orders_match_reference_values() {
        // Reference values from Abramowitz & Stegun table 9.1.
        assert_close(bessel_jn(0, 1.0).unwrap(), 0.765_197_686_557_966_6, 1e-15);
        assert_close(bessel_jn(1, 1.0).unwrap(), 0.440_050_585_744_933_5, 1e-15);
        assert_close(bessel_jn(2, 2.4).unwrap(), 0.430_980_040_187_698_6, 1e-14);
        assert_close(bessel_jn(5, 5.0).unwrap(), 0.261_140_546_120_170_2, 1e-14);
        assert_close(bessel_jn(10, 0.3).unwrap(), 1.585_846_515_700_257e-15, 1e-28);
    }

    #[test]
    fn backward_recurrence_covers_large_arguments() {
        assert_close(bessel_jn(0, 20.0).unwrap(), 0.167_024_664_340_583_1, 1e-13);
        assert_close(bessel_jn(1, 60.0).unwrap(), 0.046_598_383_758_166_2, 1e-13);
        assert_close(bessel_jn(30, 20.0).unwrap(), 1.240_153_636_035_432e-4, 1e-15);

        // Both paths agree near the switch-over point.
        let below = integer_series(3, INTEGER_SERIES_LIMIT).unwrap();
        let above = miller_backward_recurrence(3, INTEGER_SERIES_LIMIT);
        assert_close(below, above, 1e-13);
    }

    #[test]
    fn reflections_in_order_and_argument() {
        for n in 0..8i64 {
            let x = 0.7;
            let positive = bessel_jn(n, x).unwrap();
            let parity = if n % 2 == 0 { 1.0 } else { -1.0 };
            assert_close(bessel_jn(-n, x).unwrap(), parity * positive, 1e-16);
            assert_close(bessel_jn(n, -x).unwrap(), parity * positive, 1e-16);
            assert_close(bessel_jn(-n, -x).unwrap(), positive, 1e-16);
        }
    }

    #[test]
    fn zero_argument_is_nonzero_only_for_order_zero() {
        assert!(bessel_jn(0, 0.0).unwrap() == 1.0);
        for n in [-3i64, -1, 1, 2, 17] {
            assert!(bessel_jn(n, 0.0).unwrap() == 0.0);
        }
    }

    #[test]
    fn half_integer_orders_match_closed_forms() {
        for x in [0.25, 1.0, 3.5, 9.0] {
            let scale = (2.0 / (PI * x)).sqrt();
            assert_close(bessel_j(0.5, x).unwrap(), scale * x.sin(), 1e-12);
            assert_close(bessel_j(-0.5, x).unwrap(), scale * x.cos(), 1e-12);
            assert_close(
                bessel_j(1.5, x).unwrap(),
                scale * (x.sin() / x - x.cos()),
                1e-12,
            );
        }
    }

    #[test]
    fn real_orders_with_integer_value_use_integer_path() {
        assert!(bessel_j(-3.0, -1.2).unwrap() == bessel_jn(-3, -1.2).unwrap());
    }

    #[test]
    fn fractional_orders_reject_negative_arguments() {
        match bessel_j(0.5, -1.0) {
            Err(SpecialFunctionError::DomainError { argument, .. }) => {
                assert!(argument == -1.0)
            }
            other => panic!("Expected DomainError, got {:?}", other),
        }
        assert!(bessel_j(-0.5, 0.0).is_err());
        assert!(bessel_j(0.5, 0.0).unwrap() == 0.0);
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        assert!(bessel_jn(0, f64::NAN).is_err());
        assert!(bessel_j(f64::INFINITY, 1.0).is_err());
        assert!(bessel_jn(2, 1.0e6).is_err());
    }
}
