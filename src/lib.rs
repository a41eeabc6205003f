//! `mcmm`: Monte Carlo sampling over discrete distributions.
//!
//! A small toolbox for simulating finite random variables and checking the
//! simulation against exact answers.
//!
//! Exposed modules:
//! - `categorical`: inverse-CDF sampling from a labelled probability vector (`sample`, `findx`).
//! - `coin`: a biased coin (`toss`, `get_sequence`).
//! - `bayes`: a joint model p(x) p(y | x) with exact and simulated marginals and posteriors.
//! - `empirical`: frequency estimates from a sample batch.
//! - `config`: parameters for a full simulation run.
//!
//! Every sampling function has a `*_with_rng` form taking an explicit generator;
//! the plain form uses the thread-local `rand::rng()`.

#![forbid(unsafe_code)]

pub mod bayes;
pub mod categorical;
pub mod coin;
pub mod config;
pub mod empirical;
pub mod error;

pub use bayes::{Estimate, Joint};
pub use categorical::{
    cumulative, findx, findx_many, sample, sample_with_rng, CategoricalSampler, SUM_TOLERANCE,
};
pub use coin::{BiasedCoin, Toss, TossCounts};
pub use config::SimulationConfig;
pub use empirical::frequencies;
pub use error::{DistributionDefect, Result, SampleError};
