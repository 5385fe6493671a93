/////////////////////////////////////////////////////////////////////////////////////////////
//
// Builds the Chebyshev coefficient matrix of the oscillatory kernel from Bessel functions.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::NufftError;
use faer::Mat;
use ferreus_special::bessel_jn;
use num_complex::Complex64;
use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::{Mutex, OnceLock};

/// i^q for q mod 4.
const I_POWERS: [Complex64; 4] = [
    Complex64::new(1.0, 0.0),
    Complex64::new(0.0, 1.0),
    Complex64::new(-1.0, 0.0),
    Complex64::new(0.0, -1.0),
];

/// Computes the K×K matrix of bivariate Chebyshev coefficients of
/// `exp(-iπγ ξ y)` on `[-1, 1]^2`.
///
/// Entry (p, q) is `4 i^q J_{(p+q)/2}(-γπ/2) J_{(q-p)/2}(-γπ/2)` when `q - p`
/// is even and exactly zero otherwise; row 0 and column 0 are halved.
/// The matrix depends only on `(rank, gamma)`.
///
/// # Arguments
/// * `rank` - Number of Chebyshev terms K in each variable.
/// * `gamma` - The clustering parameter of the sample set.
pub fn bessel_coefficients(rank: usize, gamma: f64) -> Result<Mat<Complex64>, NufftError> {
    if rank == 0 {
        return Err(NufftError::invalid("rank must be at least 1"));
    }
    if !gamma.is_finite() || gamma < 0.0 {
        return Err(NufftError::invalid(format!(
            "gamma must be finite and non-negative, got {}",
            gamma
        )));
    }

    let argument = -gamma * PI / 2.0;
    let mut cfs = Mat::<Complex64>::zeros(rank, rank);

    for p in 0..rank {
        // Only entries where p and q share parity are populated.
        for q in (p % 2..rank).step_by(2) {
            let sum_order = ((p + q) / 2) as i64;
            let difference_order = (q as i64 - p as i64) / 2;

            let product =
                bessel_jn(sum_order, argument)? * bessel_jn(difference_order, argument)?;

            cfs[(p, q)] = I_POWERS[q % 4] * (4.0 * product);
        }
    }

    for q in 0..rank {
        cfs[(0, q)] *= 0.5;
    }
    for p in 0..rank {
        cfs[(p, 0)] *= 0.5;
    }

    Ok(cfs)
}

type CoefficientKey = (usize, u64);

static COEFFICIENT_CACHE: OnceLock<Mutex<HashMap<CoefficientKey, Mat<Complex64>>>> =
    OnceLock::new();

fn coefficient_cache() -> &'static Mutex<HashMap<CoefficientKey, Mat<Complex64>>> {
    COEFFICIENT_CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Returns the coefficient matrix for `(rank, gamma)`, computing and storing it
/// on a miss. The boolean is `true` on a cache hit.
///
/// The cache is only consulted while plans are being built; callers receive
/// their own copy, so applying a plan never touches shared state.
pub(crate) fn cached_bessel_coefficients(
    rank: usize,
    gamma: f64,
) -> Result<(Mat<Complex64>, bool), NufftError> {
    let key = (rank, gamma.to_bits());

    if let Some(hit) = coefficient_cache()
        .lock()
        .ok()
        .and_then(|cache| cache.get(&key).cloned())
    {
        return Ok((hit, true));
    }

    let cfs = bessel_coefficients(rank, gamma)?;

    if let Ok(mut cache) = coefficient_cache().lock() {
        cache.insert(key, cfs.clone());
    }

    Ok((cfs, false))
}

/// Number of coefficient matrices currently held in the process-wide cache.
#[must_use]
pub fn coefficient_cache_len() -> usize {
    coefficient_cache().lock().map_or(0, |cache| cache.len())
}

/// Drops every cached coefficient matrix.
pub fn clear_coefficient_cache() {
    if let Ok(mut cache) = coefficient_cache().lock() {
        cache.clear();
    }
}
