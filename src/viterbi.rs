//! Log-domain Viterbi decoding of corrupted words.
//!
//! Hidden states and observed symbols share the 52-letter alphabet. The
//! decoder walks the observation left to right, keeping per-state log
//! probabilities and backpointers, then backtraces the most probable state
//! sequence. All probability lookups are strictly positive after smoothing,
//! so every `ln` is finite and no `-inf` handling is needed.

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use crate::alphabet::{ALPHABET_SIZE, Letter};
use crate::error::{Result, ScrivenerError};
use crate::model::ChannelModel;

/// Decodes observed character sequences against a frozen [`ChannelModel`].
///
/// Decoding never mutates the model, so one decoder (or clones of it) can
/// serve any number of parallel decode calls.
#[derive(Debug, Clone)]
pub struct ViterbiDecoder {
    model: Arc<ChannelModel>,
}

impl ViterbiDecoder {
    /// Create a decoder over a trained model.
    pub fn new(model: Arc<ChannelModel>) -> ViterbiDecoder {
        ViterbiDecoder { model }
    }

    /// The model this decoder reads.
    pub fn model(&self) -> &ChannelModel {
        &self.model
    }

    /// Decode an observed word into its most probable original form.
    ///
    /// The result has the same length as the input. An observed character
    /// outside the alphabet is rejected with [`UnknownSymbol`]; callers that
    /// prefer pass-through handle that at the token layer. The empty string
    /// decodes to itself.
    ///
    /// [`UnknownSymbol`]: ScrivenerError::UnknownSymbol
    pub fn decode(&self, observed: &str) -> Result<String> {
        let symbols = self.to_symbols(observed)?;
        let Some((&first, rest)) = symbols.split_first() else {
            return Ok(String::new());
        };

        // t = 0: uniform initial probability times the emission evidence.
        let init = self.model.initial_probability.ln();
        let mut delta = [0.0f64; ALPHABET_SIZE];
        for state in Letter::all() {
            delta[state.index()] = init + self.model.emission.get(state, first).ln();
        }

        // Single-character observations skip the recurrence entirely.
        if rest.is_empty() {
            let best = Letter::from_index(argmax(&delta)).unwrap();
            return Ok(best.as_char().to_string());
        }

        // Recurrence: one backpointer row per time step t >= 1.
        let mut backpointers: Vec<[usize; ALPHABET_SIZE]> = Vec::with_capacity(rest.len());
        for &symbol in rest {
            let mut next = [0.0f64; ALPHABET_SIZE];
            let mut row = [0usize; ALPHABET_SIZE];
            for to in Letter::all() {
                let mut best_score = f64::NEG_INFINITY;
                let mut best_from = 0;
                for from in Letter::all() {
                    let score =
                        delta[from.index()] + self.model.transition.get(from, to).ln();
                    // Ties break toward the lowest state index.
                    if score > best_score {
                        best_score = score;
                        best_from = from.index();
                    }
                }
                row[to.index()] = best_from;
                next[to.index()] = best_score + self.model.emission.get(to, symbol).ln();
            }
            backpointers.push(row);
            delta = next;
        }

        // Termination and backtrace.
        let mut state = argmax(&delta);
        let mut states = Vec::with_capacity(symbols.len());
        states.push(state);
        for row in backpointers.iter().rev() {
            state = row[state];
            states.push(state);
        }
        states.reverse();

        Ok(states
            .into_iter()
            .map(|i| Letter::from_index(i).unwrap().as_char())
            .collect())
    }

    /// Decode independent words in parallel.
    ///
    /// Each word succeeds or fails on its own; one failure never aborts the
    /// rest of the batch.
    pub fn decode_batch(&self, words: &[String]) -> Vec<Result<String>> {
        debug!("decoding batch of {} words", words.len());
        words.par_iter().map(|word| self.decode(word)).collect()
    }

    fn to_symbols(&self, observed: &str) -> Result<Vec<Letter>> {
        observed
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Letter::from_char(symbol)
                    .ok_or(ScrivenerError::UnknownSymbol { symbol, position })
            })
            .collect()
    }
}

/// Index of the maximum value; the lowest index wins ties.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &value) in values.iter().enumerate().skip(1) {
        if value > values[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::TrainingCounts;

    fn uniform_decoder() -> ViterbiDecoder {
        let model = ChannelModel::from_counts(&TrainingCounts::new()).unwrap();
        ViterbiDecoder::new(Arc::new(model))
    }

    #[test]
    fn test_argmax_lowest_index_wins_ties() {
        assert_eq!(argmax(&[1.0, 1.0, 1.0]), 0);
        assert_eq!(argmax(&[0.0, 2.0, 2.0]), 1);
        assert_eq!(argmax(&[-1.0, -3.0, -0.5]), 2);
    }

    #[test]
    fn test_empty_input_decodes_to_empty() {
        assert_eq!(uniform_decoder().decode("").unwrap(), "");
    }

    #[test]
    fn test_single_char_under_uniform_model_is_lowest_state() {
        // Every state scores identically, so the lowest index ('a') wins.
        assert_eq!(uniform_decoder().decode("q").unwrap(), "a");
    }

    #[test]
    fn test_output_length_matches_input_length() {
        let decoder = uniform_decoder();
        for word in ["a", "ab", "hello", "Spelling"] {
            assert_eq!(decoder.decode(word).unwrap().len(), word.len());
        }
    }

    #[test]
    fn test_unknown_symbol_is_rejected_with_position() {
        let err = uniform_decoder().decode("ab9c").unwrap_err();
        match err {
            ScrivenerError::UnknownSymbol { symbol, position } => {
                assert_eq!(symbol, '9');
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_is_deterministic() {
        let decoder = uniform_decoder();
        let first = decoder.decode("determinism").unwrap();
        let second = decoder.decode("determinism").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_decode_batch_isolates_failures() {
        let decoder = uniform_decoder();
        let words = vec!["ok".to_string(), "not-ok".to_string(), "ab".to_string()];
        let results = decoder.decode_batch(&words);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }
}
