/////////////////////////////////////////////////////////////////////////////////////////////
//
// Wraps the statrs Gamma function and its logarithm with domain checks.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::SpecialFunctionError;

/// The Gamma function `Γ(x)` for real `x`.
///
/// Non-positive integers are poles and are reported as a domain error, as are
/// non-finite arguments. Large arguments overflow to `+∞` in the same way as
/// `f64::exp`.
pub fn gamma(x: f64) -> Result<f64, SpecialFunctionError> {
    if !x.is_finite() || (x <= 0.0 && x == x.floor()) {
        return Err(SpecialFunctionError::DomainError {
            function: "gamma",
            argument: x,
        });
    }

    Ok(statrs::function::gamma::gamma(x))
}

/// Natural logarithm of the Gamma function, `ln Γ(x)`, for `x > 0`.
pub fn ln_gamma(x: f64) -> Result<f64, SpecialFunctionError> {
    if !x.is_finite() || x <= 0.0 {
        return Err(SpecialFunctionError::DomainError {
            function: "ln_gamma",
            argument: x,
        });
    }

    Ok(statrs::function::gamma::ln_gamma(x))
}
