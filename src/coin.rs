//! Biased coin.
//!
//! A Bernoulli trial with `P(heads) = p`. A toss draws `u ~ Uniform[0, 1)` and
//! returns tails when `u > p`, heads otherwise.

use rand::prelude::*;

use crate::error::{DistributionDefect, Result, SampleError};

/// Outcome of one toss. Displays as `H` / `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Toss {
    Heads,
    Tails,
}

impl std::fmt::Display for Toss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heads => write!(f, "H"),
            Self::Tails => write!(f, "T"),
        }
    }
}

/// Head/tail tally of a toss sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TossCounts {
    pub heads: usize,
    pub tails: usize,
}

impl TossCounts {
    pub fn total(&self) -> usize {
        self.heads + self.tails
    }

    /// Fraction of heads, or `None` for an empty tally.
    pub fn heads_fraction(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            n => Some(self.heads as f64 / n as f64),
        }
    }
}

/// Count heads and tails in `seq`.
pub fn count(seq: &[Toss]) -> TossCounts {
    seq.iter().fold(TossCounts::default(), |mut acc, t| {
        match t {
            Toss::Heads => acc.heads += 1,
            Toss::Tails => acc.tails += 1,
        }
        acc
    })
}

/// A coin that lands heads with probability `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiasedCoin {
    p: f64,
}

impl BiasedCoin {
    /// Fails unless `p` is finite and in `[0, 1]`.
    pub fn new(p: f64) -> Result<Self> {
        if !p.is_finite() {
            return Err(SampleError::InvalidDistribution(
                DistributionDefect::NonFinite { index: 0, value: p },
            ));
        }
        if p < 0.0 {
            return Err(SampleError::InvalidDistribution(
                DistributionDefect::Negative { index: 0, value: p },
            ));
        }
        if p > 1.0 {
            // Tails would need mass 1 - p < 0.
            return Err(SampleError::InvalidDistribution(
                DistributionDefect::Negative {
                    index: 1,
                    value: 1.0 - p,
                },
            ));
        }
        Ok(Self { p })
    }

    /// Probability of heads.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Toss once using the thread-local RNG.
    pub fn toss(&self) -> Toss {
        let mut rng = rand::rng();
        self.toss_with_rng(&mut rng)
    }

    /// Toss once using a caller-supplied RNG.
    #[inline]
    pub fn toss_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Toss {
        if rng.random::<f64>() > self.p {
            Toss::Tails
        } else {
            Toss::Heads
        }
    }

    /// `num_tosses` independent tosses using the thread-local RNG.
    pub fn get_sequence(&self, num_tosses: usize) -> Vec<Toss> {
        let mut rng = rand::rng();
        self.get_sequence_with_rng(num_tosses, &mut rng)
    }

    /// `num_tosses` independent tosses, in order.
    pub fn get_sequence_with_rng<R: Rng + ?Sized>(
        &self,
        num_tosses: usize,
        rng: &mut R,
    ) -> Vec<Toss> {
        (0..num_tosses).map(|_| self.toss_with_rng(rng)).collect()
    }
}
