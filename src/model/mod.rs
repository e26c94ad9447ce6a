//! The trained channel model: smoothed probability matrices.

pub mod estimator;
pub mod matrix;

pub use estimator::estimate;
pub use matrix::ProbabilityMatrix;

use crate::alphabet::ALPHABET_SIZE;
use crate::channel::TrainingCounts;
use crate::error::Result;

/// The trained artifact of one training pass.
///
/// Immutable once built; decoding reads it through a shared reference
/// (typically an `Arc`), so independent decode calls can run in parallel
/// with no locking.
#[derive(Debug, Clone)]
pub struct ChannelModel {
    /// P(observed symbol | true state), row-normalized.
    pub emission: ProbabilityMatrix,
    /// P(next true state | true state), row-normalized.
    pub transition: ProbabilityMatrix,
    /// Uniform initial state probability, `1 / 52`.
    pub initial_probability: f64,
}

impl ChannelModel {
    /// Estimate both probability matrices from accumulated counts.
    pub fn from_counts(counts: &TrainingCounts) -> Result<ChannelModel> {
        let emission = estimate(&counts.emissions, "emission")?;
        let transition = estimate(&counts.transitions, "transition")?;
        Ok(ChannelModel {
            emission,
            transition,
            initial_probability: 1.0 / ALPHABET_SIZE as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_counts_on_empty_counts() {
        // All-zero counts smooth to uniform rows.
        let model = ChannelModel::from_counts(&TrainingCounts::new()).unwrap();
        let uniform = 1.0 / ALPHABET_SIZE as f64;
        for letter in crate::alphabet::Letter::all() {
            for &p in model.emission.row(letter) {
                assert!((p - uniform).abs() < 1e-12);
            }
        }
        assert!((model.initial_probability - uniform).abs() < 1e-12);
    }
}
