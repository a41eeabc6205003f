//! Joint discrete model p(x, y) = p(x) p(y | x).
//!
//! Two questions are answered both exactly and by simulation:
//!
//! - the marginal \( p(y) = \sum_x p(y \mid x)\, p(x) \) (law of total probability);
//! - the posterior \( p(x \mid y = k) = p(y = k \mid x)\, p(x) / p(y = k) \) (Bayes' theorem).
//!
//! The simulated marginal draws `x ~ p(x)` and then one or more `y ~ p(y | x)` per
//! x. The simulated posterior draws `(x, y)` pairs and keeps only the x's with
//! `y == k` (rejection sampling).
//!
//! Labels are indices: x ranges over `0..kx`, y over `0..ky`.

use rand::prelude::*;

use crate::categorical::{validate, CategoricalSampler};
use crate::empirical::index_frequencies;
use crate::error::{Result, SampleError};

/// A Monte Carlo frequency estimate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Estimate {
    /// Empirical frequency of each label index.
    pub frequencies: Vec<f64>,
    /// Samples the frequencies were computed from.
    pub samples: usize,
    /// Draws made to obtain them (differs from `samples` under rejection).
    pub draws: usize,
}

impl Estimate {
    /// Largest absolute difference from `exact`.
    pub fn max_abs_error(&self, exact: &[f64]) -> f64 {
        self.frequencies
            .iter()
            .zip(exact.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    /// Fraction of draws retained.
    pub fn acceptance_rate(&self) -> f64 {
        if self.draws == 0 {
            0.0
        } else {
            self.samples as f64 / self.draws as f64
        }
    }
}

/// Prior p(x) and likelihood table p(y | x).
#[derive(Debug, Clone, PartialEq)]
pub struct Joint {
    p_x: Vec<f64>,
    p_y_x: Vec<Vec<f64>>,
}

impl Joint {
    /// Validate `p_x` and each row of `p_y_x`.
    ///
    /// `p_y_x[i]` is the distribution of y given `x == i`. A row count other than
    /// `p_x.len()` is [`SampleError::RowCountMismatch`]; a row whose length differs
    /// from the first is [`SampleError::RaggedRow`].
    pub fn new(p_x: Vec<f64>, p_y_x: Vec<Vec<f64>>) -> Result<Self> {
        validate(&p_x)?;
        if p_y_x.len() != p_x.len() {
            return Err(SampleError::RowCountMismatch {
                labels: p_x.len(),
                rows: p_y_x.len(),
            });
        }
        let ky = p_y_x[0].len();
        for (i, row) in p_y_x.iter().enumerate() {
            if row.len() != ky {
                return Err(SampleError::RaggedRow {
                    row: i,
                    expected: ky,
                    len: row.len(),
                });
            }
            validate(row)?;
        }
        Ok(Self { p_x, p_y_x })
    }

    /// p(x) = [0.6, 0.4], p(y | x) = [[0.1, 0.9], [0.7, 0.3]].
    ///
    /// p(y = 0) = 0.34, p(x = 0 | y = 0) = 0.06 / 0.34, p(x = 0 | y = 1) = 0.54 / 0.66.
    pub fn textbook() -> Self {
        Self {
            p_x: vec![0.6, 0.4],
            p_y_x: vec![vec![0.1, 0.9], vec![0.7, 0.3]],
        }
    }

    /// Number of x labels.
    pub fn kx(&self) -> usize {
        self.p_x.len()
    }

    /// Number of y labels.
    pub fn ky(&self) -> usize {
        self.p_y_x[0].len()
    }

    pub fn p_x(&self) -> &[f64] {
        &self.p_x
    }

    pub fn p_y_given_x(&self, x: usize) -> Option<&[f64]> {
        self.p_y_x.get(x).map(Vec::as_slice)
    }

    /// Exact p(y) by the law of total probability.
    pub fn marginal_y(&self) -> Vec<f64> {
        let mut p_y = vec![0.0; self.ky()];
        for (px, row) in self.p_x.iter().zip(&self.p_y_x) {
            for (py, &pyx) in p_y.iter_mut().zip(row) {
                *py += pyx * px;
            }
        }
        p_y
    }

    /// Exact p(x | y = k) by Bayes' theorem.
    ///
    /// Fails with [`SampleError::EmptySampleSet`] when p(y = k) is zero.
    pub fn posterior_x_given_y(&self, k: usize) -> Result<Vec<f64>> {
        self.check_y(k)?;
        let joint: Vec<f64> = self
            .p_x
            .iter()
            .zip(&self.p_y_x)
            .map(|(px, row)| row[k] * px)
            .collect();
        let evidence: f64 = joint.iter().sum();
        if evidence <= 0.0 {
            return Err(SampleError::EmptySampleSet);
        }
        Ok(joint.into_iter().map(|j| j / evidence).collect())
    }

    /// Estimate p(y): draw `n_x` x's, then `y_per_x` y's for each.
    pub fn simulate_marginal_y_with_rng<R: Rng + ?Sized>(
        &self,
        n_x: usize,
        y_per_x: usize,
        rng: &mut R,
    ) -> Result<Estimate> {
        let (x_labels, y_labels) = self.labels();
        let x_sampler = CategoricalSampler::new(&x_labels, &self.p_x)?;
        let rows = self.row_samplers(&y_labels)?;

        let mut counts = vec![0usize; self.ky()];
        for _ in 0..n_x {
            let x = x_sampler.sample_index_with_rng(rng);
            for _ in 0..y_per_x {
                counts[rows[x].sample_index_with_rng(rng)] += 1;
            }
        }

        let samples = n_x * y_per_x;
        let frequencies = index_frequencies(&counts)?;
        log::debug!("simulated p(y) from {samples} draws: {frequencies:?}");
        Ok(Estimate {
            frequencies,
            samples,
            draws: samples,
        })
    }

    /// [`Joint::simulate_marginal_y_with_rng`] using the thread-local RNG.
    pub fn simulate_marginal_y(&self, n_x: usize, y_per_x: usize) -> Result<Estimate> {
        let mut rng = rand::rng();
        self.simulate_marginal_y_with_rng(n_x, y_per_x, &mut rng)
    }

    /// Estimate p(x | y = k) by rejection: draw `n_x` (x, y) pairs, keep x where `y == k`.
    ///
    /// Fails with [`SampleError::EmptySampleSet`] if no pair matched.
    pub fn simulate_posterior_x_given_y_with_rng<R: Rng + ?Sized>(
        &self,
        k: usize,
        n_x: usize,
        rng: &mut R,
    ) -> Result<Estimate> {
        self.check_y(k)?;
        let (x_labels, y_labels) = self.labels();
        let x_sampler = CategoricalSampler::new(&x_labels, &self.p_x)?;
        let rows = self.row_samplers(&y_labels)?;

        let mut kept = vec![0usize; self.kx()];
        for _ in 0..n_x {
            let x = x_sampler.sample_index_with_rng(rng);
            if rows[x].sample_index_with_rng(rng) == k {
                kept[x] += 1;
            }
        }

        let samples: usize = kept.iter().sum();
        log::debug!("rejection sampling p(x|y={k}): kept {samples} of {n_x}");
        let frequencies = index_frequencies(&kept)?;
        Ok(Estimate {
            frequencies,
            samples,
            draws: n_x,
        })
    }

    /// [`Joint::simulate_posterior_x_given_y_with_rng`] using the thread-local RNG.
    pub fn simulate_posterior_x_given_y(&self, k: usize, n_x: usize) -> Result<Estimate> {
        let mut rng = rand::rng();
        self.simulate_posterior_x_given_y_with_rng(k, n_x, &mut rng)
    }

    fn check_y(&self, k: usize) -> Result<()> {
        if k >= self.ky() {
            return Err(SampleError::UnknownLabel {
                index: k,
                len: self.ky(),
            });
        }
        Ok(())
    }

    fn labels(&self) -> (Vec<usize>, Vec<usize>) {
        ((0..self.kx()).collect(), (0..self.ky()).collect())
    }

    fn row_samplers<'a>(
        &self,
        y_labels: &'a [usize],
    ) -> Result<Vec<CategoricalSampler<'a, usize>>> {
        self.p_y_x
            .iter()
            .map(|row| CategoricalSampler::new(y_labels, row))
            .collect()
    }
}
