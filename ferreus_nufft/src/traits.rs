/////////////////////////////////////////////////////////////////////////////////////////////
//
// Declares the linear operator trait shared by the NUFFT plan types.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::NufftError;
use faer::{Mat, MatRef};
use num_complex::Complex64;

/// A square complex linear operator of size N with a low-rank representation.
///
/// Implementors provide [`apply`](LinearOperator::apply) and
/// [`apply_transpose`](LinearOperator::apply_transpose); the adjoint and
/// batched forms are derived from them.
pub trait LinearOperator {
    /// Number of rows (and columns) N.
    fn len(&self) -> usize;

    /// Number of terms K in the low-rank representation.
    fn rank(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Computes `A c`.
    fn apply(&self, coefficients: &[Complex64]) -> Result<Vec<Complex64>, NufftError>;

    /// Computes `A^T c`, the transpose without conjugation.
    fn apply_transpose(&self, coefficients: &[Complex64]) -> Result<Vec<Complex64>, NufftError>;

    /// Computes `A^H c = conj(A^T conj(c))`.
    fn apply_adjoint(&self, coefficients: &[Complex64]) -> Result<Vec<Complex64>, NufftError> {
        let conjugated: Vec<Complex64> = coefficients.iter().map(|c| c.conj()).collect();
        let mut result = self.apply_transpose(&conjugated)?;
        result.iter_mut().for_each(|value| *value = value.conj());
        Ok(result)
    }

    /// Applies the operator to every column of an (N, M) matrix.
    ///
    /// # Arguments
    /// * `coefficients`: Matrix of shape (N, M), one right-hand side per column.
    ///
    /// # Returns
    /// * Matrix of shape (N, M) whose column `j` is `A` applied to column `j`.
    fn apply_batch(&self, coefficients: MatRef<'_, Complex64>) -> Result<Mat<Complex64>, NufftError> {
        let n = self.len();
        if coefficients.nrows() != n {
            return Err(NufftError::DimensionMismatch {
                expected: n,
                actual: coefficients.nrows(),
            });
        }

        let mut result = Mat::<Complex64>::zeros(n, coefficients.ncols());
        let mut column = vec![Complex64::new(0.0, 0.0); n];

        for j in 0..coefficients.ncols() {
            for (i, value) in column.iter_mut().enumerate() {
                *value = coefficients[(i, j)];
            }

            let transformed = self.apply(&column)?;

            for (i, value) in transformed.into_iter().enumerate() {
                result[(i, j)] = value;
            }
        }

        Ok(result)
    }
}
