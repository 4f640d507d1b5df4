//! Robust aggregation of per-solution match counts
//!
//! The interquartile mean trims a fraction from both tails of the sorted
//! sample before averaging, so a handful of pathological solutions cannot
//! dominate a candidate's score.

use std::fmt;

/// Error type for aggregation failures
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// The sample was empty
    EmptySample,
    /// The cutoff trims away the entire sample
    CutoffTooAggressive { len: usize, cutoff: f64 },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySample => write!(f, "Cannot aggregate an empty sample"),
            Self::CutoffTooAggressive { len, cutoff } => write!(
                f,
                "Cutoff {cutoff} leaves no values from a sample of {len}"
            ),
        }
    }
}

impl std::error::Error for StatsError {}

/// Interquartile mean: the mean of the sorted sample after trimming
/// `floor(len * cutoff)` values from each tail
///
/// # Errors
/// Returns `StatsError::EmptySample` for an empty slice, and
/// `StatsError::CutoffTooAggressive` when trimming leaves nothing to
/// average.
///
/// # Examples
/// ```
/// use wordle_openers::analysis::stats::interquartile_mean;
///
/// let values: Vec<usize> = (0..100).collect();
/// let iqm = interquartile_mean(&values, 0.1).unwrap();
/// assert!((iqm - 49.5).abs() < f64::EPSILON);
/// ```
pub fn interquartile_mean(values: &[usize], cutoff: f64) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptySample);
    }

    let trim = (values.len() as f64 * cutoff).floor() as usize;
    let kept = values
        .len()
        .checked_sub(2 * trim)
        .filter(|&kept| kept > 0)
        .ok_or(StatsError::CutoffTooAggressive {
            len: values.len(),
            cutoff,
        })?;

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let total: usize = sorted[trim..values.len() - trim].iter().sum();
    Ok(total as f64 / kept as f64)
}
