/////////////////////////////////////////////////////////////////////////////////////////////
//
// Evaluates Chebyshev polynomials of the first kind on arbitrary and uniform nodes.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use faer::Mat;

/// Calculates T_k(x), the Chebyshev polynomials of the first kind,
/// for k between 0 and `degree` inclusive.
///
/// Uses the recurrence relation:
///  T_0(x) = 1 \n
///  T_1(x) = x \n
///  T_{k+1}(x) = 2xT_k(x) - T_{k-1}(x) for k >= 1
///
/// # Returns
/// A matrix of shape (M, degree + 1) whose column k holds T_k evaluated at the M nodes.
pub fn evaluate_chebyshev_polynomials(degree: usize, nodes: &[f64]) -> Mat<f64> {
    let num_columns = degree + 1;
    let mut tn_x = Mat::<f64>::zeros(nodes.len(), num_columns);

    for (i, &x) in nodes.iter().enumerate() {
        for j in 0..num_columns {
            let value = if j == 0 {
                1.0
            } else if j == 1 {
                x
            } else {
                2.0 * x * tn_x[(i, j - 1)] - tn_x[(i, j - 2)]
            };
            tn_x[(i, j)] = value;
        }
    }

    tn_x
}

/// The uniform grid k / N for k in 0..N, mapped affinely onto [-1, 1).
pub fn uniform_grid_nodes(n: usize) -> Vec<f64> {
    let n_f64 = n as f64;
    (0..n).map(|k| 2.0 * k as f64 / n_f64 - 1.0).collect()
}
