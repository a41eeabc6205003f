//! Categorical sampling by CDF inversion.
//!
//! Given a label set \( \{a_0, \dots, a_{K-1}\} \) and masses \( p_i \), build the
//! cumulative sums \( c_i = \sum_{j \le i} p_j \) and, for each uniform draw \(r\),
//! emit \( a_i \) for the smallest \(i\) with \( c_i \ge r \).
//!
//! The lookup is a binary search over the (non-decreasing) cumulative vector, so
//! each draw costs O(log K) after an O(K) setup.
//!
//! Notes:
//! - Uniforms are drawn from the open interval (0, 1), so a zero-mass label is never
//!   selected, including one at index 0.
//! - If rounding leaves the last cumulative entry just below `r`, the lookup clamps
//!   to the last index ([`findx`]) or, in [`CategoricalSampler`], to the last label
//!   with positive mass.
//! - This module provides `*_with_rng` entrypoints for deterministic testing/benchmarking.

use rand::distr::Open01;
use rand::prelude::*;

use crate::error::{DistributionDefect, Result, SampleError};

/// Absolute tolerance on `sum(p) == 1`.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// Check that `probabilities` is a probability mass vector.
pub fn validate(probabilities: &[f64]) -> Result<()> {
    if probabilities.is_empty() {
        return Err(SampleError::InvalidDistribution(DistributionDefect::Empty));
    }
    for (index, &value) in probabilities.iter().enumerate() {
        if !value.is_finite() {
            return Err(SampleError::InvalidDistribution(
                DistributionDefect::NonFinite { index, value },
            ));
        }
        if value < 0.0 {
            return Err(SampleError::InvalidDistribution(
                DistributionDefect::Negative { index, value },
            ));
        }
    }
    let sum: f64 = probabilities.iter().sum();
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(SampleError::InvalidDistribution(
            DistributionDefect::BadSum { sum },
        ));
    }
    Ok(())
}

/// Running sum of `probabilities`.
pub fn cumulative(probabilities: &[f64]) -> Vec<f64> {
    probabilities
        .iter()
        .scan(0.0, |acc, &p| {
            *acc += p;
            Some(*acc)
        })
        .collect()
}

/// Smallest index `i` with `cumulative[i] >= r`, clamped to the last index.
///
/// `cumulative` must be non-decreasing. Returns 0 for an empty slice.
#[inline]
pub fn findx(cumulative: &[f64], r: f64) -> usize {
    cumulative
        .partition_point(|&c| c < r)
        .min(cumulative.len().saturating_sub(1))
}

/// [`findx`] over a batch of uniforms.
pub fn findx_many(cumulative: &[f64], rs: &[f64]) -> Vec<usize> {
    rs.iter().map(|&r| findx(cumulative, r)).collect()
}

/// A validated categorical distribution over borrowed labels.
#[derive(Debug, Clone)]
pub struct CategoricalSampler<'a, T> {
    labels: &'a [T],
    cumulative: Vec<f64>,
    // One past the last label with positive mass.
    support: usize,
}

impl<'a, T> CategoricalSampler<'a, T> {
    /// Validate `probabilities` against `labels` and precompute the CDF.
    pub fn new(labels: &'a [T], probabilities: &[f64]) -> Result<Self> {
        if labels.len() != probabilities.len() {
            return Err(SampleError::LengthMismatch {
                labels: labels.len(),
                probabilities: probabilities.len(),
            });
        }
        validate(probabilities)?;
        let cumulative = cumulative(probabilities);
        let support = probabilities
            .iter()
            .rposition(|&p| p > 0.0)
            .map_or(probabilities.len(), |i| i + 1);
        log::debug!(
            "categorical sampler over {} labels ({} in support)",
            labels.len(),
            support
        );
        Ok(Self {
            labels,
            cumulative,
            support,
        })
    }

    /// Number of labels (K).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false: construction rejects empty distributions.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &'a [T] {
        self.labels
    }

    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Draw one label index.
    #[inline]
    pub fn sample_index_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let r: f64 = Open01.sample(rng);
        self.index_for(r)
    }

    /// Label index for a uniform `r`.
    ///
    /// Clamps to the last positive-mass label, not a trailing zero.
    #[inline]
    pub(crate) fn index_for(&self, r: f64) -> usize {
        findx(&self.cumulative[..self.support], r)
    }

    /// Draw one label.
    #[inline]
    pub fn draw_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a T {
        &self.labels[self.sample_index_with_rng(rng)]
    }
}

impl<T: Clone> CategoricalSampler<'_, T> {
    /// Draw `n` i.i.d. labels, in draw order.
    pub fn sample_with_rng<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<T> {
        log::trace!("drawing {n} categorical samples");
        (0..n).map(|_| self.draw_with_rng(rng).clone()).collect()
    }

    /// Draw `n` labels using the thread-local RNG.
    pub fn sample(&self, n: usize) -> Vec<T> {
        let mut rng = rand::rng();
        self.sample_with_rng(n, &mut rng)
    }
}

/// Draw `n` labels from `labels` with masses `probabilities`.
///
/// Fails with [`SampleError::LengthMismatch`] if the slices differ in length and with
/// [`SampleError::InvalidDistribution`] if `probabilities` is not a valid mass vector.
pub fn sample<T: Clone>(labels: &[T], probabilities: &[f64], n: usize) -> Result<Vec<T>> {
    let mut rng = rand::rng();
    sample_with_rng(labels, probabilities, n, &mut rng)
}

/// [`sample`] with a caller-supplied RNG (for tests/benchmarks).
pub fn sample_with_rng<T: Clone, R: Rng + ?Sized>(
    labels: &[T],
    probabilities: &[f64],
    n: usize,
    rng: &mut R,
) -> Result<Vec<T>> {
    Ok(CategoricalSampler::new(labels, probabilities)?.sample_with_rng(n, rng))
}
