/////////////////////////////////////////////////////////////////////////////////////////////
//
// Declares the tuning parameters and builder used when constructing NUFFT plans.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Declares the tuning parameters used when constructing NUFFT plans.
use serde::{Deserialize, Serialize};

/// Optional parameters for tuning NUFFT plan construction and application.
///
/// ### Default Values
/// - `parallel`: `true`
/// - `cache_coefficients`: `true`
/// - `check_finite`: `true`
/// - `fixed_rank`: `None`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NufftParams {
    /// Distribute the K column transforms of each application over the rayon
    /// thread pool. Results agree with serial execution up to summation order.
    pub parallel: bool,

    /// Reuse Bessel coefficient matrices across plans with the same rank and
    /// clustering parameter. Only consulted during plan construction.
    pub cache_coefficients: bool,

    /// Reject coefficient vectors containing NaN or infinite entries.
    pub check_finite: bool,

    /// Use this rank instead of the one estimated from the requested accuracy.
    /// Must be at least 1.
    pub fixed_rank: Option<usize>,
}

impl Default for NufftParams {
    fn default() -> Self {
        NufftParams {
            parallel: true,
            cache_coefficients: true,
            check_finite: true,
            fixed_rank: None,
        }
    }
}

impl NufftParams {
    /// Begins building a [`NufftParams`] instance from the default values.
    pub fn builder() -> NufftParamsBuilder {
        NufftParamsBuilder {
            params: NufftParams::default(),
        }
    }
}

/// Builder for [`NufftParams`].
#[derive(Debug, Clone, Copy)]
pub struct NufftParamsBuilder {
    params: NufftParams,
}

impl NufftParamsBuilder {
    /// Sets the `parallel` parameter on the builder.
    pub fn parallel(mut self, v: bool) -> Self {
        self.params.parallel = v;
        self
    }

    /// Sets the `cache_coefficients` parameter on the builder.
    pub fn cache_coefficients(mut self, v: bool) -> Self {
        self.params.cache_coefficients = v;
        self
    }

    /// Sets the `check_finite` parameter on the builder.
    pub fn check_finite(mut self, v: bool) -> Self {
        self.params.check_finite = v;
        self
    }

    /// Sets the `fixed_rank` parameter on the builder.
    pub fn fixed_rank(mut self, v: usize) -> Self {
        self.params.fixed_rank = Some(v);
        self
    }

    /// Finalises the builder into a [`NufftParams`] value.
    pub fn build(self) -> NufftParams {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;

    #[test]
    fn builder_starts_from_defaults() {
        let params = NufftParams::builder().build();
        assert!(params == NufftParams::default());
        assert!(params.parallel);
        assert!(params.cache_coefficients);
        assert!(params.check_finite);
        assert!(params.fixed_rank.is_none());
    }

    #[test]
    fn builder_overrides_fields() {
        let params = NufftParams::builder()
            .parallel(false)
            .cache_coefficients(false)
            .check_finite(false)
            .fixed_rank(7)
            .build();
        assert!(!params.parallel);
        assert!(!params.cache_coefficients);
        assert!(!params.check_finite);
        assert!(params.fixed_rank == Some(7));
    }

    #[test]
    fn params_roundtrip_through_json() {
        let params = NufftParams::builder().fixed_rank(3).parallel(false).build();
        let json = serde_json::to_string(&params).unwrap();
        let restored: NufftParams = serde_json::from_str(&json).unwrap();
        assert!(restored == params);
    }
}
