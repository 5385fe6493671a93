/////////////////////////////////////////////////////////////////////////////////////////////
//
// Constructs the low-rank factors (U, V) approximating the NUFFT kernel matrix.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::{
    NufftError,
    bessel_coefficients::bessel_coefficients,
    chebyshev::{evaluate_chebyshev_polynomials, uniform_grid_nodes},
    parameters::{AlgorithmicParameters, find_algorithmic_parameters},
};
use faer::Mat;
use num_complex::Complex64;
use std::f64::consts::PI;

/// Low-rank factors such that `U V^T` approximates the N×N matrix with entries
/// `exp(-2πi (x_j - anchor_j / N) k)`.
#[derive(Debug, Clone)]
pub struct LowRankFactors {
    /// Column-space factor of shape (N, K), carrying the phase `exp(-iπ r_j)`
    /// of each residual `r_j = N x_j - anchor_j`.
    pub u: Mat<Complex64>,

    /// Row-space factor of shape (N, K): Chebyshev polynomials on the uniform
    /// grid `2k / N - 1`.
    pub v: Mat<f64>,
}

impl LowRankFactors {
    /// Number of rows N.
    pub fn len(&self) -> usize {
        self.u.nrows()
    }

    /// Always `false`; factors are never built for an empty point set.
    pub fn is_empty(&self) -> bool {
        self.u.nrows() == 0
    }

    /// Number of columns K.
    pub fn rank(&self) -> usize {
        self.u.ncols()
    }
}

/// Builds the low-rank factors for `points` at the given `rank`.
///
/// # Arguments
/// * `points` - The nonuniform points `x_j`.
/// * `rank` - Number of retained Chebyshev terms K, at least 1.
///
/// # Returns
/// `(U, V)` as a [`LowRankFactors`].
pub fn construct_low_rank_factors(
    points: &[f64],
    rank: usize,
) -> Result<LowRankFactors, NufftError> {
    let parameters = find_algorithmic_parameters(points)?;
    let coefficients = bessel_coefficients(rank, parameters.gamma)?;
    Ok(assemble_factors(&parameters, &coefficients))
}

/// Assembles `U = diag(exp(-iπ r)) T(r / γ) C` and `V = T(2k/N - 1)` from
/// precomputed parameters and a K×K coefficient matrix `C`.
pub(crate) fn assemble_factors(
    parameters: &AlgorithmicParameters,
    coefficients: &Mat<Complex64>,
) -> LowRankFactors {
    let n = parameters.len();
    let rank = coefficients.ncols();

    // gamma == 0 only occurs with rank 1, where the scaled residuals are unused.
    let inverse_gamma = match parameters.gamma > 0.0 {
        true => 1.0 / parameters.gamma,
        false => 0.0,
    };

    let scaled_residuals: Vec<f64> = parameters
        .residuals
        .iter()
        .map(|r| r * inverse_gamma)
        .collect();

    let tn_residuals = evaluate_chebyshev_polynomials(rank - 1, &scaled_residuals);
    let tn_residuals = Mat::<Complex64>::from_fn(n, rank, |i, j| {
        Complex64::new(tn_residuals[(i, j)], 0.0)
    });

    let projected = &tn_residuals * coefficients;

    let phases: Vec<Complex64> = parameters
        .residuals
        .iter()
        .map(|r| Complex64::from_polar(1.0, -PI * r))
        .collect();

    let u = Mat::<Complex64>::from_fn(n, rank, |i, j| phases[i] * projected[(i, j)]);
    let v = evaluate_chebyshev_polynomials(rank - 1, &uniform_grid_nodes(n));

    LowRankFactors { u, v }
}
