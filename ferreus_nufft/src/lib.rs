/////////////////////////////////////////////////////////////////////////////////////////////
//
// Exposes the public API for the low-rank Nonuniform Fast Fourier Transform (NUFFT) crate.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Low-rank Nonuniform Fast Fourier Transform
//!
//! This crate evaluates nonuniform discrete Fourier transforms of size N in
//! `O(K N log N)` operations, where the rank K depends only on the requested
//! accuracy and on how far the samples stray from the uniform grid.
//!
//! The dense kernel `exp(-2πi x_j k)` is written as a uniform DFT corrected by
//! a low-rank factor pair `(U, V)`. The factors come from a bivariate Chebyshev
//! expansion of `exp(-iπγ ξ y)` whose coefficients are products of Bessel
//! functions, and the rank is chosen from a Lambert-W bound.
//!
//! # Features:
//! - Type-1 (nonuniform points to uniform frequencies) and type-2 (uniform
//!   points to nonuniform frequencies) plans, built once and applied many times
//! - Transpose and adjoint applications through [`LinearOperator`]
//! - Multiple right-hand sides
//! - Parallel column transforms via `rayon`
//!
//! # Example: Type-1 transform
//!
//! ```
//! use ferreus_nufft::{build_nufft1, ndft1, Complex64};
//!
//! let n = 64;
//! let points: Vec<f64> = (0..n)
//!     .map(|j| (j as f64 + 0.3 * (7.0 * j as f64).sin()) / n as f64)
//!     .collect();
//! let coefficients: Vec<Complex64> = (0..n)
//!     .map(|k| Complex64::new(1.0 / (k + 1) as f64, 0.0))
//!     .collect();
//!
//! // Build once, then apply to as many coefficient vectors as needed
//! let plan = build_nufft1(&points, 1e-12).unwrap();
//! let fast = plan.apply(&coefficients).unwrap();
//!
//! // Compare against the direct O(N^2) sum
//! let direct = ndft1(&coefficients, &points).unwrap();
//! for (a, b) in fast.iter().zip(&direct) {
//!     assert!((a - b).norm() < 1e-9);
//! }
//! ```
//!
//! # Example: Type-2 transform with custom parameters
//!
//! ```
//! use ferreus_nufft::{Nufft2Plan, NufftParams, LinearOperator, Complex64};
//!
//! let frequencies = [0.0, 1.4, 2.2, 2.9, 4.1, 5.5, 5.9, 7.3];
//! let params = NufftParams::builder().parallel(false).build();
//!
//! let plan = Nufft2Plan::new(&frequencies, 1e-8, Some(params)).unwrap();
//! let values = plan.apply(&[Complex64::new(1.0, 0.0); 8]).unwrap();
//!
//! assert_eq!(values.len(), plan.len());
//! ```

mod bessel_coefficients;
mod chebyshev;
mod config;
mod direct;
mod error;
mod fft;
mod low_rank;
mod parameters;
mod plan;
mod rank;
mod traits;

pub use num_complex::Complex64;

pub use {
    bessel_coefficients::{bessel_coefficients, clear_coefficient_cache, coefficient_cache_len},
    chebyshev::{evaluate_chebyshev_polynomials, uniform_grid_nodes},
    config::{NufftParams, NufftParamsBuilder},
    direct::{kernel_matrix, ndft1, ndft2},
    error::NufftError,
    low_rank::{LowRankFactors, construct_low_rank_factors},
    parameters::{AlgorithmicParameters, find_algorithmic_parameters},
    plan::{
        Nufft1Plan, Nufft2Plan, NufftPlan, TransformType, build_nufft1, build_nufft2, nufft1,
        nufft2,
    },
    rank::estimate_rank,
    traits::LinearOperator,
};
