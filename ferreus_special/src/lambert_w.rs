/////////////////////////////////////////////////////////////////////////////////////////////
//
// Evaluates the principal branch of the Lambert-W function by Halley iteration.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::SpecialFunctionError;

const MAX_HALLEY_ITERATIONS: usize = 64;

/// Principal branch `W_0(z)` of the Lambert-W function for `z >= 0`,
/// i.e. the non-negative solution `w` of `w e^w = z`.
///
/// Negative or non-finite arguments return a [`SpecialFunctionError::DomainError`].
pub fn lambert_w(z: f64) -> Result<f64, SpecialFunctionError> {
    if !z.is_finite() || z < 0.0 {
        return Err(SpecialFunctionError::DomainError {
            function: "lambert_w",
            argument: z,
        });
    }

    if z == 0.0 {
        return Ok(0.0);
    }

    // W(z) ~ ln(1 + z) near the origin and ln z - ln ln z asymptotically.
    let mut w = if z < 3.0 {
        z.ln_1p()
    } else {
        let ln_z = z.ln();
        ln_z - ln_z.ln()
    };

    for _ in 0..MAX_HALLEY_ITERATIONS {
        let ew = w.exp();
        let residual = w * ew - z;
        let w_plus_one = w + 1.0;

        let step = residual / (ew * w_plus_one - (w + 2.0) * residual / (2.0 * w_plus_one));
        w -= step;

        if step.abs() <= 4.0 * f64::EPSILON * (1.0 + w.abs()) {
            return Ok(w);
        }
    }

    Err(SpecialFunctionError::NonConvergence {
        function: "lambert_w",
        iterations: MAX_HALLEY_ITERATIONS,
    })
}
