/////////////////////////////////////////////////////////////////////////////////////////////
//
// Declares the error type shared by the special function evaluators.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use thiserror::Error;

/// Errors that can occur while evaluating a special function.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecialFunctionError {
    /// The argument (or order) lies outside the real domain of the function,
    /// or is not finite.
    #[error("{function}: argument {argument} lies outside the real domain")]
    DomainError {
        function: &'static str,
        argument: f64,
    },

    /// An iterative evaluation did not reach machine precision, or the
    /// argument is too large for the evaluation scheme to be reliable.
    #[error("{function}: evaluation failed to converge after {iterations} iterations")]
    NonConvergence {
        function: &'static str,
        iterations: usize,
    },
}
