//! Parameters for a full simulation run.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::bayes::Joint;
use crate::coin::BiasedCoin;
use crate::error::{Result, SampleError};

/// Knobs for the coin and joint-model simulations.
///
/// Defaults reproduce the classic demonstration: a coin with `p = 0.7` tossed 100
/// times, 10 000 x draws with 10 y draws each, conditioning on `y = 0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Probability of heads.
    pub heads_probability: f64,
    pub num_tosses: usize,
    /// Number of x draws for both joint-model simulations.
    pub num_draws: usize,
    /// y draws per x when estimating p(y).
    pub y_per_x: usize,
    /// The y label to condition the posterior on.
    pub condition_on: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            heads_probability: 0.7,
            num_tosses: 100,
            num_draws: 10_000,
            y_per_x: 10,
            condition_on: 0,
        }
    }
}

impl SimulationConfig {
    /// Builder-style seed setter.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The run's RNG.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        }
    }

    /// The configured coin, validating `heads_probability`.
    pub fn coin(&self) -> Result<BiasedCoin> {
        BiasedCoin::new(self.heads_probability)
    }

    /// Check the coin bias and that `condition_on` is a y label of `joint`.
    pub fn validate_for(&self, joint: &Joint) -> Result<()> {
        self.coin()?;
        if self.condition_on >= joint.ky() {
            return Err(SampleError::UnknownLabel {
                index: self.condition_on,
                len: joint.ky(),
            });
        }
        Ok(())
    }

    /// [`SimulationConfig::validate_for`] against [`Joint::textbook`].
    pub fn validate(&self) -> Result<()> {
        self.validate_for(&Joint::textbook())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_is_valid() {
        let cfg = SimulationConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let cfg = SimulationConfig::default().with_seed(42);
        let a: u64 = cfg.rng().random();
        let b: u64 = cfg.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn bad_bias_is_rejected() {
        let cfg = SimulationConfig {
            heads_probability: 2.0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(SampleError::InvalidDistribution(_))
        ));
    }

    #[test]
    fn conditioning_label_is_checked() {
        let cfg = SimulationConfig {
            condition_on: 2,
            ..SimulationConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(SampleError::UnknownLabel { index: 2, len: 2 })
        );

        let three_ys = Joint::new(vec![1.0], vec![vec![0.2, 0.3, 0.5]]).expect("valid");
        assert_eq!(cfg.validate_for(&three_ys), Ok(()));
    }
}
