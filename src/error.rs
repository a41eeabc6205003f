//! Error types.

use thiserror::Error;

/// Why a probability vector was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistributionDefect {
    /// No entries at all.
    Empty,
    /// An entry is NaN or infinite.
    NonFinite { index: usize, value: f64 },
    /// An entry is below zero.
    Negative { index: usize, value: f64 },
    /// Entries do not sum to 1 within tolerance.
    BadSum { sum: f64 },
}

impl std::fmt::Display for DistributionDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "probability vector is empty"),
            Self::NonFinite { index, value } => {
                write!(f, "probability at index {index} must be finite (got {value})")
            }
            Self::Negative { index, value } => {
                write!(f, "probability at index {index} must be >= 0 (got {value})")
            }
            Self::BadSum { sum } => write!(f, "probabilities must sum to 1 (got {sum})"),
        }
    }
}

/// Errors returned by the samplers and estimators in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleError {
    #[error("invalid distribution: {0}")]
    InvalidDistribution(DistributionDefect),
    #[error("length mismatch: {labels} labels but {probabilities} probabilities")]
    LengthMismatch { labels: usize, probabilities: usize },
    /// A likelihood table has a different number of rows than the prior has labels.
    #[error("likelihood table has {rows} rows but the prior has {labels} labels")]
    RowCountMismatch { labels: usize, rows: usize },
    /// A likelihood row is longer or shorter than the first row.
    #[error("likelihood row {row} has {len} entries, expected {expected}")]
    RaggedRow { row: usize, expected: usize, len: usize },
    /// A conditioning label index is outside the label set.
    #[error("label index {index} out of range for {len} labels")]
    UnknownLabel { index: usize, len: usize },
    /// A derived estimate had no samples to compute frequencies from.
    #[error("empty sample set: no samples to estimate frequencies from")]
    EmptySampleSet,
}

pub type Result<T> = std::result::Result<T, SampleError>;
