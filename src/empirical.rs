//! Empirical frequencies of a sample batch.

use crate::error::{Result, SampleError};

/// Occurrences of each label in `samples`. Samples outside `labels` are ignored.
pub fn counts<T: PartialEq>(samples: &[T], labels: &[T]) -> Vec<usize> {
    labels
        .iter()
        .map(|l| samples.iter().filter(|&s| s == l).count())
        .collect()
}

/// `count(label_i) / samples.len()` for each label.
///
/// Fails with [`SampleError::EmptySampleSet`] when `samples` is empty.
pub fn frequencies<T: PartialEq>(samples: &[T], labels: &[T]) -> Result<Vec<f64>> {
    if samples.is_empty() {
        return Err(SampleError::EmptySampleSet);
    }
    let n = samples.len() as f64;
    Ok(counts(samples, labels)
        .into_iter()
        .map(|c| c as f64 / n)
        .collect())
}

/// Frequencies of indices `0..k` from raw counts.
pub(crate) fn index_frequencies(counts: &[usize]) -> Result<Vec<f64>> {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return Err(SampleError::EmptySampleSet);
    }
    Ok(counts.iter().map(|&c| c as f64 / total as f64).collect())
}
