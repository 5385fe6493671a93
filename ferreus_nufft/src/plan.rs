/////////////////////////////////////////////////////////////////////////////////////////////
//
// Implements the type-1 and type-2 NUFFT plans built from low-rank factors and uniform FFTs.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::{
    LinearOperator, NufftError, NufftParams,
    bessel_coefficients::{bessel_coefficients, cached_bessel_coefficients},
    fft::UniformFft,
    low_rank::{LowRankFactors, assemble_factors},
    parameters::{AlgorithmicParameters, find_algorithmic_parameters},
    rank::{estimate_rank, validate_epsilon},
};
use num_complex::Complex64;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Direction of a NUFFT plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransformType {
    /// Nonuniform points to uniform frequencies:
    /// `f_j = Σ_k c_k exp(-2πi x_j k)`.
    Type1,

    /// Uniform points to nonuniform frequencies:
    /// `f_k = Σ_j c_j exp(-2πi ω_j k / N)`.
    Type2,
}

/// The state shared by both plan directions: the sample-set parameters, the
/// low-rank factors and a length-N FFT.
///
/// For the matrix `A[j, k] = Σ_r u[j, r] F[t_j, k] v[k, r]`, where `F` is the
/// forward DFT matrix and `t_j` the target indices, [`gather`](Self::gather)
/// computes `A c` and [`scatter`](Self::scatter) computes `A^T c`.
#[derive(Debug, Clone)]
struct LowRankKernel {
    parameters: AlgorithmicParameters,
    factors: LowRankFactors,
    fft: UniformFft,
    epsilon: f64,
    params: NufftParams,
}

impl LowRankKernel {
    fn new(
        points: &[f64],
        epsilon: f64,
        params: NufftParams,
        direction: TransformType,
    ) -> Result<Self, NufftError> {
        validate_epsilon(epsilon)?;

        let parameters = find_algorithmic_parameters(points)?;

        let rank = match params.fixed_rank {
            Some(0) => return Err(NufftError::invalid("fixed rank must be at least 1")),
            Some(rank) => rank,
            None => estimate_rank(parameters.gamma, epsilon)?,
        };

        let (coefficients, cached) = match params.cache_coefficients {
            true => cached_bessel_coefficients(rank, parameters.gamma)?,
            false => (bessel_coefficients(rank, parameters.gamma)?, false),
        };

        let factors = assemble_factors(&parameters, &coefficients);
        let n = parameters.len();

        debug!(
            n,
            gamma = parameters.gamma,
            rank,
            ?direction,
            cached,
            "built low-rank NUFFT plan"
        );

        Ok(LowRankKernel {
            parameters,
            factors,
            fft: UniformFft::new(n),
            epsilon,
            params,
        })
    }

    fn len(&self) -> usize {
        self.fft.len()
    }

    fn rank(&self) -> usize {
        self.factors.rank()
    }

    fn check_coefficients(
        &self,
        coefficients: &[Complex64],
        operation: &'static str,
    ) -> Result<(), NufftError> {
        if coefficients.len() != self.len() {
            return Err(NufftError::DimensionMismatch {
                expected: self.len(),
                actual: coefficients.len(),
            });
        }

        if self.params.check_finite {
            if let Some(index) = coefficients
                .iter()
                .position(|c| !(c.re.is_finite() && c.im.is_finite()))
            {
                return Err(NufftError::invalid(format!(
                    "coefficient {} is not finite",
                    index
                )));
            }
        }

        trace!(n = self.len(), rank = self.rank(), operation, "applying NUFFT kernel");

        Ok(())
    }

    /// `Σ_r u[:, r] ⊙ FFT(c ⊙ v[:, r])[t]`
    fn gather(&self, coefficients: &[Complex64]) -> Vec<Complex64> {
        let u = &self.factors.u;
        let v = &self.factors.v;

        self.accumulate_columns(|r| {
            let mut buffer: Vec<Complex64> = coefficients
                .iter()
                .enumerate()
                .map(|(k, c)| *c * v[(k, r)])
                .collect();

            self.fft.forward(&mut buffer);

            self.parameters
                .target_indices
                .iter()
                .enumerate()
                .map(|(j, &t)| u[(j, r)] * buffer[t])
                .collect()
        })
    }

    /// `Σ_r v[:, r] ⊙ conj(IFFT(scatter_t(conj(c ⊙ u[:, r]))))`
    ///
    /// Rows sharing a target index are summed into the same bin.
    fn scatter(&self, coefficients: &[Complex64]) -> Vec<Complex64> {
        let u = &self.factors.u;
        let v = &self.factors.v;
        let n = self.len();

        self.accumulate_columns(|r| {
            let mut buffer = vec![Complex64::new(0.0, 0.0); n];

            for (j, &t) in self.parameters.target_indices.iter().enumerate() {
                buffer[t] += (coefficients[j] * u[(j, r)]).conj();
            }

            self.fft.inverse(&mut buffer);

            buffer
                .iter()
                .enumerate()
                .map(|(k, b)| b.conj() * v[(k, r)])
                .collect()
        })
    }

    /// Sums the length-N contributions of the K columns.
    fn accumulate_columns<F>(&self, column: F) -> Vec<Complex64>
    where
        F: Fn(usize) -> Vec<Complex64> + Send + Sync,
    {
        let n = self.len();
        let zeros = || vec![Complex64::new(0.0, 0.0); n];
        let add = |mut total: Vec<Complex64>, part: Vec<Complex64>| {
            total.iter_mut().zip(part).for_each(|(t, p)| *t += p);
            total
        };

        match self.params.parallel {
            true => (0..self.rank())
                .into_par_iter()
                .map(|r| column(r))
                .reduce(zeros, add),
            false => (0..self.rank()).map(column).fold(zeros(), add),
        }
    }
}

/// A reusable type-1 transform `f_j = Σ_k c_k exp(-2πi x_j k)` for fixed
/// nonuniform points `x_j`, `j, k = 0..N`.
#[derive(Debug, Clone)]
pub struct Nufft1Plan {
    points: Vec<f64>,
    kernel: LowRankKernel,
}

impl Nufft1Plan {
    /// Builds a type-1 plan.
    ///
    /// # Arguments
    /// * `points`: The N nonuniform points `x_j`, nominally in `[0, 1)`.
    /// * `epsilon`: Requested accuracy in (0, 1).
    /// * `params`: Optional parameters; `None` uses [`NufftParams::default`].
    pub fn new(
        points: &[f64],
        epsilon: f64,
        params: Option<NufftParams>,
    ) -> Result<Self, NufftError> {
        let params = params.unwrap_or_default();
        let kernel = LowRankKernel::new(points, epsilon, params, TransformType::Type1)?;

        Ok(Nufft1Plan {
            points: points.to_vec(),
            kernel,
        })
    }

    /// Evaluates `f_j = Σ_k c_k exp(-2πi x_j k)` for every point.
    pub fn apply(&self, coefficients: &[Complex64]) -> Result<Vec<Complex64>, NufftError> {
        self.kernel.check_coefficients(coefficients, "type-1")?;
        Ok(self.kernel.gather(coefficients))
    }

    /// Evaluates `g_k = Σ_j c_j exp(-2πi x_j k)` for every frequency.
    pub fn apply_transpose(
        &self,
        coefficients: &[Complex64],
    ) -> Result<Vec<Complex64>, NufftError> {
        self.kernel.check_coefficients(coefficients, "type-1 transpose")?;
        Ok(self.kernel.scatter(coefficients))
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn epsilon(&self) -> f64 {
        self.kernel.epsilon
    }

    pub fn gamma(&self) -> f64 {
        self.kernel.parameters.gamma
    }

    pub fn params(&self) -> &NufftParams {
        &self.kernel.params
    }

    pub fn parameters(&self) -> &AlgorithmicParameters {
        &self.kernel.parameters
    }

    pub fn factors(&self) -> &LowRankFactors {
        &self.kernel.factors
    }
}

/// A reusable type-2 transform `f_k = Σ_j c_j exp(-2πi ω_j k / N)` for fixed
/// nonuniform frequencies `ω_j`, `j, k = 0..N`.
///
/// Internally the plan is built on the scaled points `ω_j / N` and reuses the
/// type-1 factors with the roles of `u` and `v` exchanged.
#[derive(Debug, Clone)]
pub struct Nufft2Plan {
    frequencies: Vec<f64>,
    kernel: LowRankKernel,
}

impl Nufft2Plan {
    /// Builds a type-2 plan.
    ///
    /// # Arguments
    /// * `frequencies`: The N nonuniform frequencies `ω_j`, nominally in `[0, N)`.
    /// * `epsilon`: Requested accuracy in (0, 1).
    /// * `params`: Optional parameters; `None` uses [`NufftParams::default`].
    pub fn new(
        frequencies: &[f64],
        epsilon: f64,
        params: Option<NufftParams>,
    ) -> Result<Self, NufftError> {
        let params = params.unwrap_or_default();
        let n = frequencies.len() as f64;
        let scaled: Vec<f64> = frequencies.iter().map(|w| w / n).collect();
        let kernel = LowRankKernel::new(&scaled, epsilon, params, TransformType::Type2)?;

        Ok(Nufft2Plan {
            frequencies: frequencies.to_vec(),
            kernel,
        })
    }

    /// Evaluates `f_k = Σ_j c_j exp(-2πi ω_j k / N)` for every uniform index `k`.
    pub fn apply(&self, coefficients: &[Complex64]) -> Result<Vec<Complex64>, NufftError> {
        self.kernel.check_coefficients(coefficients, "type-2")?;
        Ok(self.kernel.scatter(coefficients))
    }

    /// Evaluates `g_j = Σ_k c_k exp(-2πi ω_j k / N)` for every frequency.
    pub fn apply_transpose(
        &self,
        coefficients: &[Complex64],
    ) -> Result<Vec<Complex64>, NufftError> {
        self.kernel.check_coefficients(coefficients, "type-2 transpose")?;
        Ok(self.kernel.gather(coefficients))
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn epsilon(&self) -> f64 {
        self.kernel.epsilon
    }

    pub fn gamma(&self) -> f64 {
        self.kernel.parameters.gamma
    }

    pub fn params(&self) -> &NufftParams {
        &self.kernel.params
    }

    /// Parameters of the scaled points `ω_j / N`.
    pub fn parameters(&self) -> &AlgorithmicParameters {
        &self.kernel.parameters
    }

    pub fn factors(&self) -> &LowRankFactors {
        &self.kernel.factors
    }
}

impl LinearOperator for Nufft1Plan {
    fn len(&self) -> usize {
        self.kernel.len()
    }

    fn rank(&self) -> usize {
        self.kernel.rank()
    }

    fn apply(&self, coefficients: &[Complex64]) -> Result<Vec<Complex64>, NufftError> {
        Nufft1Plan::apply(self, coefficients)
    }

    fn apply_transpose(&self, coefficients: &[Complex64]) -> Result<Vec<Complex64>, NufftError> {
        Nufft1Plan::apply_transpose(self, coefficients)
    }
}

impl LinearOperator for Nufft2Plan {
    fn len(&self) -> usize {
        self.kernel.len()
    }

    fn rank(&self) -> usize {
        self.kernel.rank()
    }

    fn apply(&self, coefficients: &[Complex64]) -> Result<Vec<Complex64>, NufftError> {
        Nufft2Plan::apply(self, coefficients)
    }

    fn apply_transpose(&self, coefficients: &[Complex64]) -> Result<Vec<Complex64>, NufftError> {
        Nufft2Plan::apply_transpose(self, coefficients)
    }
}

/// Either plan direction, chosen at construction time.
#[derive(Debug, Clone)]
pub enum NufftPlan {
    Type1(Nufft1Plan),
    Type2(Nufft2Plan),
}

impl NufftPlan {
    /// Builds a plan of the requested direction. `points` are the sample
    /// points `x_j` for [`TransformType::Type1`] and the frequencies `ω_j`
    /// for [`TransformType::Type2`].
    pub fn new(
        kind: TransformType,
        points: &[f64],
        epsilon: f64,
        params: Option<NufftParams>,
    ) -> Result<Self, NufftError> {
        match kind {
            TransformType::Type1 => Ok(NufftPlan::Type1(Nufft1Plan::new(points, epsilon, params)?)),
            TransformType::Type2 => Ok(NufftPlan::Type2(Nufft2Plan::new(points, epsilon, params)?)),
        }
    }

    pub fn kind(&self) -> TransformType {
        match self {
            NufftPlan::Type1(_) => TransformType::Type1,
            NufftPlan::Type2(_) => TransformType::Type2,
        }
    }

    pub fn gamma(&self) -> f64 {
        match self {
            NufftPlan::Type1(plan) => plan.gamma(),
            NufftPlan::Type2(plan) => plan.gamma(),
        }
    }
}

impl LinearOperator for NufftPlan {
    fn len(&self) -> usize {
        match self {
            NufftPlan::Type1(plan) => LinearOperator::len(plan),
            NufftPlan::Type2(plan) => LinearOperator::len(plan),
        }
    }

    fn rank(&self) -> usize {
        match self {
            NufftPlan::Type1(plan) => LinearOperator::rank(plan),
            NufftPlan::Type2(plan) => LinearOperator::rank(plan),
        }
    }

    fn apply(&self, coefficients: &[Complex64]) -> Result<Vec<Complex64>, NufftError> {
        match self {
            NufftPlan::Type1(plan) => plan.apply(coefficients),
            NufftPlan::Type2(plan) => plan.apply(coefficients),
        }
    }

    fn apply_transpose(&self, coefficients: &[Complex64]) -> Result<Vec<Complex64>, NufftError> {
        match self {
            NufftPlan::Type1(plan) => plan.apply_transpose(coefficients),
            NufftPlan::Type2(plan) => plan.apply_transpose(coefficients),
        }
    }
}

/// Builds a type-1 plan for `points` with default parameters.
pub fn build_nufft1(points: &[f64], epsilon: f64) -> Result<Nufft1Plan, NufftError> {
    Nufft1Plan::new(points, epsilon, None)
}

/// Builds a type-2 plan for `frequencies` with default parameters.
pub fn build_nufft2(frequencies: &[f64], epsilon: f64) -> Result<Nufft2Plan, NufftError> {
    Nufft2Plan::new(frequencies, epsilon, None)
}

/// Builds a default type-1 plan and applies it once.
pub fn nufft1(
    coefficients: &[Complex64],
    points: &[f64],
    epsilon: f64,
) -> Result<Vec<Complex64>, NufftError> {
    check_lengths(coefficients.len(), points.len())?;
    build_nufft1(points, epsilon)?.apply(coefficients)
}

/// Builds a default type-2 plan and applies it once.
pub fn nufft2(
    coefficients: &[Complex64],
    frequencies: &[f64],
    epsilon: f64,
) -> Result<Vec<Complex64>, NufftError> {
    check_lengths(coefficients.len(), frequencies.len())?;
    build_nufft2(frequencies, epsilon)?.apply(coefficients)
}

fn check_lengths(coefficients: usize, points: usize) -> Result<(), NufftError> {
    match coefficients == points {
        true => Ok(()),
        false => Err(NufftError::DimensionMismatch {
            expected: points,
            actual: coefficients,
        }),
    }
}
