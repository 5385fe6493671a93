/////////////////////////////////////////////////////////////////////////////////////////////
//
// Direct O(N^2) evaluation of the nonuniform Fourier sums approximated by the NUFFT plans.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::NufftError;
use faer::Mat;
use num_complex::Complex64;
use rayon::prelude::*;
use std::f64::consts::PI;

#[inline(always)]
fn twiddle(position: f64, frequency: usize) -> Complex64 {
    Complex64::from_polar(1.0, -2.0 * PI * position * frequency as f64)
}

fn check_lengths(coefficients: &[Complex64], points: &[f64]) -> Result<(), NufftError> {
    match coefficients.len() == points.len() {
        true => Ok(()),
        false => Err(NufftError::DimensionMismatch {
            expected: points.len(),
            actual: coefficients.len(),
        }),
    }
}

/// Directly evaluates `f_j = Σ_k c_k exp(-2πi x_j k)`, `j, k = 0..N`.
pub fn ndft1(coefficients: &[Complex64], points: &[f64]) -> Result<Vec<Complex64>, NufftError> {
    check_lengths(coefficients, points)?;

    Ok(points
        .par_iter()
        .map(|&x| {
            coefficients
                .iter()
                .enumerate()
                .map(|(k, c)| *c * twiddle(x, k))
                .sum()
        })
        .collect())
}

/// Directly evaluates `f_k = Σ_j c_j exp(-2πi ω_j k / N)`, `j, k = 0..N`.
pub fn ndft2(
    coefficients: &[Complex64],
    frequencies: &[f64],
) -> Result<Vec<Complex64>, NufftError> {
    check_lengths(coefficients, frequencies)?;

    let n = frequencies.len() as f64;

    Ok((0..frequencies.len())
        .into_par_iter()
        .map(|k| {
            frequencies
                .iter()
                .zip(coefficients)
                .map(|(&w, c)| *c * twiddle(w / n, k))
                .sum()
        })
        .collect())
}

/// Builds the dense N×N matrix with entries `exp(-2πi x_j k)`.
///
/// # Arguments
/// * `points`: The N sample points `x_j`.
///
/// # Returns
/// * A matrix of shape (N, N) whose row `j` holds the type-1 kernel at `x_j`.
pub fn kernel_matrix(points: &[f64]) -> Mat<Complex64> {
    let n = points.len();

    let mut a_matrix = Mat::<Complex64>::zeros(n, n);

    for k in 0..n {
        for (j, &x) in points.iter().enumerate() {
            a_matrix[(j, k)] = twiddle(x, k);
        }
    }

    a_matrix
}
