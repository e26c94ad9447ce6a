//! Seeded keyboard-noise simulation over word lists.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::channel::counts::TrainingCounts;
use crate::error::{Result, ScrivenerError};
use crate::keyboard::AdjacencyMap;

/// Configuration for the noisy channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Per-character probability of substituting a keyboard neighbor.
    pub corruption_probability: f64,
    /// Seed for the random source. Identical seeds reproduce identical
    /// corruption byte for byte.
    pub seed: u64,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        ChannelConfig {
            corruption_probability: 0.2,
            seed: 42,
        }
    }
}

impl ChannelConfig {
    /// Validate the configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.corruption_probability) {
            return Err(ScrivenerError::invalid_config(format!(
                "corruption probability must lie in [0, 1], got {}",
                self.corruption_probability
            )));
        }
        Ok(())
    }
}

/// The noisy channel: corrupts words by substituting keyboard neighbors.
///
/// Holds its own seeded random source, so a fresh channel with the same
/// configuration replays the same corruption sequence. Training is
/// single-writer: both the channel and the count accumulator are taken by
/// `&mut`.
pub struct NoisyChannel {
    config: ChannelConfig,
    adjacency: AdjacencyMap,
    rng: StdRng,
}

impl NoisyChannel {
    /// Create a channel with the default QWERTY adjacency table.
    pub fn new(config: ChannelConfig) -> Result<NoisyChannel> {
        Self::with_adjacency(config, AdjacencyMap::qwerty())
    }

    /// Create a channel with a custom adjacency table.
    pub fn with_adjacency(config: ChannelConfig, adjacency: AdjacencyMap) -> Result<NoisyChannel> {
        config.validate()?;
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(NoisyChannel {
            config,
            adjacency,
            rng,
        })
    }

    /// The channel configuration.
    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    /// Corrupt a word list without recording counts.
    ///
    /// Words containing any character outside `a-z`/`A-Z` produce no output,
    /// so the result can be shorter than the input; callers must not assume
    /// index correspondence between input and output.
    pub fn corrupt_words(&mut self, words: &[String]) -> Vec<String> {
        self.corrupt(words, None)
    }

    /// Corrupt a word list while accumulating transition and emission counts
    /// into `counts` (the training pass).
    ///
    /// Per alphabetic word, every position `i` records
    /// `emissions[true_i][observed_i]`, and every position `i < len-1`
    /// records `transitions[true_i][true_{i+1}]`. Pairs with either operand
    /// outside the 52-letter alphabet are skipped.
    pub fn corrupt_words_counting(
        &mut self,
        words: &[String],
        counts: &mut TrainingCounts,
    ) -> Vec<String> {
        self.corrupt(words, Some(counts))
    }

    fn corrupt(&mut self, words: &[String], mut counts: Option<&mut TrainingCounts>) -> Vec<String> {
        let mut corrupted = Vec::with_capacity(words.len());
        for word in words {
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            corrupted.push(self.corrupt_word(word, counts.as_deref_mut()));
        }
        debug!(
            "corrupted {} of {} words (counting: {})",
            corrupted.len(),
            words.len(),
            counts.is_some()
        );
        corrupted
    }

    fn corrupt_word(&mut self, word: &str, mut counts: Option<&mut TrainingCounts>) -> String {
        let chars: Vec<char> = word.chars().collect();
        let mut observed = String::with_capacity(word.len());

        for (i, &ch) in chars.iter().enumerate() {
            let out = if self.rng.random::<f64>() < self.config.corruption_probability {
                self.pick_neighbor(ch)
            } else {
                ch
            };
            observed.push(out);

            if let Some(counts) = counts.as_deref_mut() {
                counts.record_emission(ch, out);
                if i + 1 < chars.len() {
                    counts.record_transition(ch, chars[i + 1]);
                }
            }
        }

        observed
    }

    /// A uniformly-chosen neighbor, or the character itself when it has no
    /// neighbors.
    fn pick_neighbor(&mut self, ch: char) -> char {
        let neighbors = self.adjacency.neighbors(ch);
        if neighbors.is_empty() {
            ch
        } else {
            neighbors[self.rng.random_range(0..neighbors.len())]
        }
    }
}
