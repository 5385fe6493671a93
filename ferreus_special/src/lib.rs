/////////////////////////////////////////////////////////////////////////////////////////////
//
// Re-exports the special functions used by the ferreus_nufft crate.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Special functions for the `ferreus_nufft` crate
//!
//! Real-valued implementations of the handful of special functions needed to
//! build low-rank NUFFT operators:
//!
//! - [`bessel_j`] / [`bessel_jn`]: Bessel functions of the first kind, for integer
//!   orders of either sign and for non-integer orders at non-negative arguments.
//! - [`gamma`] / [`ln_gamma`]: the Gamma function, backed by `statrs`.
//! - [`lambert_w`]: the principal branch of the Lambert-W function on `[0, ∞)`.
//!
//! Every function returns a [`Result`] so that domain violations and
//! non-convergence can be propagated by the caller rather than surfacing as NaN.
//!
//! ```
//! use ferreus_special::{bessel_jn, lambert_w};
//!
//! let j0 = bessel_jn(0, 0.0).unwrap();
//! assert_eq!(j0, 1.0);
//!
//! // W(e) = 1
//! let w = lambert_w(std::f64::consts::E).unwrap();
//! assert!((w - 1.0).abs() < 1e-14);
//! ```

mod bessel;
mod error;
mod gamma;
mod lambert_w;

pub use {
    bessel::{bessel_j, bessel_jn},
    error::SpecialFunctionError,
    gamma::{gamma, ln_gamma},
    lambert_w::lambert_w,
};
