/////////////////////////////////////////////////////////////////////////////////////////////
//
// Declares the error type returned by NUFFT plan construction and application.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use ferreus_special::SpecialFunctionError;
use thiserror::Error;

/// Errors that can occur while building or applying a NUFFT plan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NufftError {
    /// The length of a coefficient vector (or the row count of a batch)
    /// does not match the number of points the plan was built for.
    #[error("dimension mismatch: plan expects length {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// An input is outside the accepted domain, e.g. an accuracy outside (0, 1),
    /// an empty or non-finite point set, or a zero rank.
    #[error("invalid argument: {detail}")]
    InvalidArgument { detail: String },

    /// A special function (Bessel J or Lambert W) could not be evaluated.
    #[error("numerical failure: {0}")]
    NumericalFailure(#[from] SpecialFunctionError),
}

impl NufftError {
    pub(crate) fn invalid(detail: impl Into<String>) -> Self {
        NufftError::InvalidArgument {
            detail: detail.into(),
        }
    }
}
