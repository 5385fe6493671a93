/////////////////////////////////////////////////////////////////////////////////////////////
//
// Wraps rustfft forward and inverse plans of a fixed length for reuse across applications.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use std::fmt;
use std::sync::Arc;

/// Forward and inverse length-`N` transforms, planned once.
///
/// Both directions are unnormalised: `inverse(forward(x)) == N x`.
#[derive(Clone)]
pub(crate) struct UniformFft {
    len: usize,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
}

impl UniformFft {
    pub(crate) fn new(len: usize) -> Self {
        let mut planner = FftPlanner::<f64>::new();
        let forward = planner.plan_fft_forward(len);
        let inverse = planner.plan_fft_inverse(len);

        UniformFft {
            len,
            forward,
            inverse,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// In place `X_k = Σ_m x_m exp(-2πi m k / N)`.
    pub(crate) fn forward(&self, buffer: &mut [Complex64]) {
        debug_assert_eq!(buffer.len(), self.len);
        self.forward.process(buffer);
    }

    /// In place `x_m = Σ_k X_k exp(2πi m k / N)`, without the `1 / N` factor.
    pub(crate) fn inverse(&self, buffer: &mut [Complex64]) {
        debug_assert_eq!(buffer.len(), self.len);
        self.inverse.process(buffer);
    }
}

impl fmt::Debug for UniformFft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniformFft").field("len", &self.len).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;
    use std::f64::consts::PI;

    fn naive_dft(input: &[Complex64], sign: f64) -> Vec<Complex64> {
        let n = input.len();
        (0..n)
            .map(|k| {
                input
                    .iter()
                    .enumerate()
                    .map(|(m, x)| {
                        *x * Complex64::from_polar(1.0, sign * 2.0 * PI * (m * k) as f64 / n as f64)
                    })
                    .sum()
            })
            .collect()
    }

    fn sample(n: usize) -> Vec<Complex64> {
        (0..n)
            .map(|m| Complex64::new((0.7 * m as f64).cos(), (1.3 * m as f64 + 0.2).sin()))
            .collect()
    }

    #[test]
    fn forward_matches_naive_dft() {
        for n in [1, 5, 8, 12, 17] {
            let input = sample(n);
            let mut buffer = input.clone();
            UniformFft::new(n).forward(&mut buffer);

            let expected = naive_dft(&input, -1.0);
            for (a, b) in buffer.iter().zip(&expected) {
                assert!((a - b).norm() < 1e-12);
            }
        }
    }

    #[test]
    fn inverse_is_unnormalised() {
        let n = 10;
        let fft = UniformFft::new(n);
        let input = sample(n);

        let mut buffer = input.clone();
        fft.forward(&mut buffer);
        fft.inverse(&mut buffer);

        assert!(fft.len() == n);
        for (a, b) in buffer.iter().zip(&input) {
            assert!((a - b * n as f64).norm() < 1e-12);
        }
    }
}
