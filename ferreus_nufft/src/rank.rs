/////////////////////////////////////////////////////////////////////////////////////////////
//
// Estimates the number of Chebyshev terms needed for a requested transform accuracy.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::NufftError;
use ferreus_special::lambert_w;

// # References
// [1] D. Ruiz-Antolín, A. Townsend, A nonuniform fast Fourier transform based on low rank
//     approximation, SIAM Journal on Scientific Computing 40 (1) (2018) A529-A547.

/// Checks that a requested accuracy lies strictly inside (0, 1).
pub(crate) fn validate_epsilon(epsilon: f64) -> Result<(), NufftError> {
    match epsilon.is_finite() && epsilon > 0.0 && epsilon < 1.0 {
        true => Ok(()),
        false => Err(NufftError::invalid(format!(
            "accuracy must lie in (0, 1), got {}",
            epsilon
        ))),
    }
}

/// Estimates the rank `K` of the low-rank kernel approximation.
///
/// Uses the asymptotic bound `K = ceil(5 γ exp(W(ln(10/ε) / (7 γ))))` from [1],
/// evaluated through the identity `exp(W(z)) = z / W(z)` so that tiny values of
/// `gamma` cannot overflow the exponential.
///
/// # Arguments
/// * `gamma` - The clustering parameter, `max_j |N x_j - round(N x_j)|`.
/// * `epsilon` - Requested accuracy in (0, 1).
///
/// # Returns
/// `K >= 1`. Points lying exactly on the uniform grid (`gamma == 0`) give `K = 1`:
/// the kernel reduces to a permutation of the DFT and its zero-order term is exact.
pub fn estimate_rank(gamma: f64, epsilon: f64) -> Result<usize, NufftError> {
    validate_epsilon(epsilon)?;

    if !gamma.is_finite() || gamma < 0.0 {
        return Err(NufftError::invalid(format!(
            "gamma must be finite and non-negative, got {}",
            gamma
        )));
    }

    if gamma == 0.0 {
        return Ok(1);
    }

    let argument = (10.0 / epsilon).ln() / gamma / 7.0;

    // gamma so small that the argument overflows: the bound is already below one.
    if !argument.is_finite() {
        return Ok(1);
    }

    let w = lambert_w(argument)?;
    let rank = (5.0 * gamma * (argument / w)).ceil();

    Ok((rank as usize).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;

    #[test]
    fn zero_gamma_gives_rank_one() {
        assert!(estimate_rank(0.0, 1e-10).unwrap() == 1);
        assert!(estimate_rank(0.0, 0.5).unwrap() == 1);
    }

    #[test]
    fn matches_reference_ranks() {
        assert!(estimate_rank(0.5, 1e-4).unwrap() == 8);
        assert!(estimate_rank(0.5, 1e-8).unwrap() == 11);
        assert!(estimate_rank(0.5, 1e-10).unwrap() == 12);
        assert!(estimate_rank(0.5, 1e-12).unwrap() == 13);
        assert!(estimate_rank(0.25, 1e-10).unwrap() == 10);
    }

    #[test]
    fn rank_is_monotone_in_accuracy_and_gamma() {
        let epsilons = [1e-1, 1e-3, 1e-6, 1e-9, 1e-12, 1e-15];
        for gamma in [1e-6, 0.01, 0.1, 0.3, 0.5] {
            let ranks: Vec<usize> = epsilons
                .iter()
                .map(|&eps| estimate_rank(gamma, eps).unwrap())
                .collect();
            assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
        }

        for eps in epsilons {
            let small = estimate_rank(0.1, eps).unwrap();
            let large = estimate_rank(0.5, eps).unwrap();
            assert!(small <= large);
        }
    }

    #[test]
    fn tiny_gamma_does_not_overflow() {
        assert!(estimate_rank(1e-310, 1e-15).unwrap() == 1);
        assert!(estimate_rank(1e-300, 1e-15).unwrap() == 1);
    }

    #[test]
    fn rejects_invalid_accuracy_and_gamma() {
        for eps in [0.0, 1.0, -1e-3, 2.0, f64::NAN] {
            assert!(matches!(
                estimate_rank(0.5, eps),
                Err(NufftError::InvalidArgument { .. })
            ));
        }
        assert!(estimate_rank(-0.1, 1e-6).is_err());
        assert!(estimate_rank(f64::INFINITY, 1e-6).is_err());
    }
}
