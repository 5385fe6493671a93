/////////////////////////////////////////////////////////////////////////////////////////////
//
// Extracts grid anchors, FFT gather indices and the clustering parameter from sample points.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::NufftError;

/// 2^53: beyond this magnitude consecutive doubles are more than one grid
/// node apart, so `N x` no longer identifies its nearest node.
const MAX_SCALED_POINT: f64 = 9_007_199_254_740_992.0;

/// Per-sample-set quantities derived once at plan construction.
///
/// For `N` points `x_j`, each scaled point `N x_j` is split into its nearest
/// grid node `anchors[j]` and a residual `residuals[j] = N x_j - anchors[j]`
/// with `|residuals[j]| <= 0.5`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmicParameters {
    /// Nearest integer to `N x_j` (ties to even).
    pub anchors: Vec<i64>,

    /// `anchors[j] mod N` as a 0-based row index into a length-`N` FFT output.
    pub target_indices: Vec<usize>,

    /// `N x_j - anchors[j]`.
    pub residuals: Vec<f64>,

    /// `max_j |residuals[j]|`. Zero when every point lies on the uniform grid.
    pub gamma: f64,
}

impl AlgorithmicParameters {
    /// Number of sample points.
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Always `false` for parameters produced by [`find_algorithmic_parameters`].
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}

/// Computes the [`AlgorithmicParameters`] for a set of sample points.
///
/// # Arguments
/// * `points` - The nonuniform points `x_j`, nominally in `[0, 1)`. Points
///   outside that interval are accepted; they wrap onto the periodic grid
///   as long as `|N x_j| < 2^53`.
///
/// # Returns
/// The anchors, 0-based target indices, residuals and `gamma`, or
/// [`NufftError::InvalidArgument`] if `points` is empty, contains
/// non-finite values, or contains a point whose scaled value `N x_j` is
/// non-finite or at least `2^53` in magnitude.
pub fn find_algorithmic_parameters(points: &[f64]) -> Result<AlgorithmicParameters, NufftError> {
    if points.is_empty() {
        return Err(NufftError::invalid("point set must not be empty"));
    }

    if let Some(index) = points.iter().position(|x| !x.is_finite()) {
        return Err(NufftError::invalid(format!(
            "point at index {} is not finite",
            index
        )));
    }

    let n = points.len();
    let n_f64 = n as f64;

    let mut anchors = Vec::with_capacity(n);
    let mut target_indices = Vec::with_capacity(n);
    let mut residuals = Vec::with_capacity(n);
    let mut gamma: f64 = 0.0;

    for (index, &x) in points.iter().enumerate() {
        let scaled = n_f64 * x;

        if !scaled.is_finite() || scaled.abs() >= MAX_SCALED_POINT {
            return Err(NufftError::invalid(format!(
                "point at index {} is too large to place on a grid of {} nodes",
                index, n
            )));
        }

        let nearest = scaled.round_ties_even();
        let anchor = nearest as i64;
        let residual = scaled - nearest;

        anchors.push(anchor);
        target_indices.push(anchor.rem_euclid(n as i64) as usize);
        residuals.push(residual);
        gamma = gamma.max(residual.abs());
    }

    Ok(AlgorithmicParameters {
        anchors,
        target_indices,
        residuals,
        gamma,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;

    #[test]
    fn uniform_points_have_zero_gamma() {
        let n = 8;
        let points: Vec<f64> = (0..n).map(|j| j as f64 / n as f64).collect();
        let params = find_algorithmic_parameters(&points).unwrap();

        assert!(params.gamma == 0.0);
        assert!(params.anchors == (0..n as i64).collect::<Vec<_>>());
        assert!(params.target_indices == (0..n).collect::<Vec<_>>());
        assert!(params.residuals.iter().all(|r| *r == 0.0));
    }

    #[test]
    fn residuals_are_bounded_by_gamma() {
        let points = [0.01, 0.2, 0.33, 0.49, 0.74, 0.99];
        let params = find_algorithmic_parameters(&points).unwrap();

        assert!(params.len() == points.len());
        assert!(params.gamma <= 0.5);
        for (j, &x) in points.iter().enumerate() {
            let scaled = x * points.len() as f64;
            assert!((scaled - params.anchors[j] as f64 - params.residuals[j]).abs() < 1e-15);
            assert!(params.residuals[j].abs() <= params.gamma);
        }

        // 6 * 0.74 = 4.44 is furthest from its grid node.
        assert!((params.gamma - 0.44).abs() < 1e-12);
    }

    #[test]
    fn target_indices_wrap_into_range() {
        // 4 * 0.99 rounds to 4, -0.3 * 4 rounds to -1, 2.1 * 4 rounds to 8.
        let points = [0.99, -0.3, 2.1, 0.5];
        let params = find_algorithmic_parameters(&points).unwrap();

        assert!(params.anchors == vec![4, -1, 8, 2]);
        assert!(params.target_indices == vec![0, 3, 0, 2]);
        assert!(params.target_indices.iter().all(|&t| t < points.len()));
    }

    #[test]
    fn ties_round_to_even() {
        // 2 * 0.25 = 0.5 and 2 * 0.75 = 1.5
        let params = find_algorithmic_parameters(&[0.25, 0.75]).unwrap();
        assert!(params.anchors == vec![0, 2]);
        assert!(params.gamma == 0.5);
    }

    #[test]
    fn rejects_empty_and_non_finite_points() {
        assert!(matches!(
            find_algorithmic_parameters(&[]),
            Err(NufftError::InvalidArgument { .. })
        ));
        assert!(matches!(
            find_algorithmic_parameters(&[0.1, f64::NAN]),
            Err(NufftError::InvalidArgument { .. })
        ));
        assert!(matches!(
            find_algorithmic_parameters(&[f64::INFINITY]),
            Err(NufftError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn large_points_within_exact_range_still_wrap() {
        // 4 * (2^50 + 0.25) = 2^52 + 1 is exact and lands on node 1.
        let x = 1_125_899_906_842_624.25;
        let params = find_algorithmic_parameters(&[0.0, 0.3, 0.55, x]).unwrap();

        assert!(params.anchors[3] == 4_503_599_627_370_497);
        assert!(params.target_indices[3] == 1);
        assert!(params.residuals[3] == 0.0);
    }

    #[test]
    fn rejects_points_too_large_for_the_grid() {
        // 3 * 4e18 exceeds 2^53: the nearest grid node is no longer resolvable.
        match find_algorithmic_parameters(&[0.1, 0.4, 4e18]) {
            Err(NufftError::InvalidArgument { detail }) => assert!(detail.contains("index 2")),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }

        // 2 * 1e308 overflows to infinity.
        assert!(matches!(
            find_algorithmic_parameters(&[0.1, 1e308]),
            Err(NufftError::InvalidArgument { .. })
        ));
        assert!(matches!(
            find_algorithmic_parameters(&[-1e300, 0.5]),
            Err(NufftError::InvalidArgument { .. })
        ));
    }
}
