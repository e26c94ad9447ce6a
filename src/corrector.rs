//! One-call training pipeline and token-level correction.
//!
//! [`SpellingCorrector::train`] runs the whole pipeline: split the corpus,
//! corrupt the training set while accumulating counts, corrupt the held-out
//! set without counts, and estimate the model. The resulting corrector then
//! serves per-word decoding, sentence correction against an external
//! tokenizer's `(tokens, space flags)` contract, and accuracy evaluation
//! over the corrupted hold-out set.

use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::channel::{ChannelConfig, NoisyChannel, TrainingCounts};
use crate::corpus::Corpus;
use crate::error::{Result, ScrivenerError};
use crate::keyboard::AdjacencyMap;
use crate::model::ChannelModel;
use crate::viterbi::ViterbiDecoder;

/// Configuration for the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectorConfig {
    /// Fraction of the corpus used for training; the remainder is held out.
    pub split_ratio: f64,
    /// Noisy-channel parameters.
    pub channel: ChannelConfig,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            split_ratio: 0.8,
            channel: ChannelConfig::default(),
        }
    }
}

impl CorrectorConfig {
    /// Validate the configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.split_ratio) {
            return Err(ScrivenerError::invalid_config(format!(
                "split ratio must lie in [0, 1], got {}",
                self.split_ratio
            )));
        }
        self.channel.validate()
    }
}

/// Statistics from one training pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Word tokens in the corpus.
    pub total_words: usize,
    /// Tokens assigned to the training set by the split.
    pub training_words: usize,
    /// Tokens assigned to the hold-out set by the split.
    pub holdout_words: usize,
    /// Alphabetic training words that went through the channel. Smaller than
    /// `training_words` when the corpus contains digits or punctuation runs.
    pub corrupted_training_words: usize,
    /// Alphabetic hold-out words paired with their corrupted forms.
    pub evaluation_words: usize,
}

/// An original hold-out word paired with its corrupted form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationPair {
    pub original: String,
    pub corrupted: String,
}

/// The corrupted hold-out set kept for accuracy evaluation.
///
/// Pairs are equal-length by construction: the originals are filtered the
/// same way the channel filters words it corrupts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationSet {
    pub pairs: Vec<EvaluationPair>,
}

impl EvaluationSet {
    /// Number of evaluation pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the set holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Word-accuracy statistics over an evaluation set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationStats {
    /// Decoded hold-out words.
    pub total_words: usize,
    /// Decodes that reproduced the original word exactly.
    pub correct_words: usize,
    /// `correct_words / total_words`, or 0 for an empty set.
    pub accuracy: f64,
}

/// How a single token fared during sentence correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenOutcome {
    /// The token was decoded against the model.
    Decoded,
    /// The token contained a symbol outside the alphabet and was passed
    /// through unchanged.
    PassedThrough,
}

/// One corrected token with its spacing flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectedToken {
    pub original: String,
    pub corrected: String,
    /// Whether a separating space follows this token.
    pub space: bool,
    pub outcome: TokenOutcome,
}

/// The corrected form of one tokenized sentence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceCorrection {
    pub tokens: Vec<CorrectedToken>,
}

impl SentenceCorrection {
    /// Re-join the corrected tokens using the space flags.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            out.push_str(&token.corrected);
            if token.space {
                out.push(' ');
            }
        }
        out
    }

    /// Number of tokens that were passed through uncorrected.
    pub fn passed_through(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.outcome == TokenOutcome::PassedThrough)
            .count()
    }
}

/// Everything produced by one training pass.
pub struct TrainingOutput {
    /// The trained corrector.
    pub corrector: SpellingCorrector,
    /// Pipeline statistics.
    pub report: TrainingReport,
    /// The corrupted hold-out set, ready for [`SpellingCorrector::evaluate`].
    pub holdout: EvaluationSet,
}

/// A trained character-level spelling corrector.
pub struct SpellingCorrector {
    decoder: ViterbiDecoder,
}

impl SpellingCorrector {
    /// Train a corrector with the default QWERTY adjacency table.
    ///
    /// Any failure aborts the whole pass; no partial model is produced.
    pub fn train(corpus: &Corpus, config: &CorrectorConfig) -> Result<TrainingOutput> {
        Self::train_with_adjacency(corpus, config, AdjacencyMap::qwerty())
    }

    /// Train a corrector with a custom adjacency table.
    pub fn train_with_adjacency(
        corpus: &Corpus,
        config: &CorrectorConfig,
        adjacency: AdjacencyMap,
    ) -> Result<TrainingOutput> {
        config.validate()?;
        let (training, holdout) = corpus.split(config.split_ratio)?;
        info!(
            "training on {} words, holding out {}",
            training.len(),
            holdout.len()
        );

        let mut channel = NoisyChannel::with_adjacency(config.channel.clone(), adjacency)?;
        let mut counts = TrainingCounts::new();
        let corrupted_training = channel.corrupt_words_counting(training, &mut counts);

        // The channel drops non-alphabetic words, so pair the corrupted
        // hold-out with the identically filtered originals.
        let corrupted_holdout = channel.corrupt_words(holdout);
        let originals = holdout
            .iter()
            .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_alphabetic()));
        let pairs: Vec<EvaluationPair> = originals
            .zip(&corrupted_holdout)
            .map(|(original, corrupted)| EvaluationPair {
                original: original.clone(),
                corrupted: corrupted.clone(),
            })
            .collect();
        debug_assert_eq!(pairs.len(), corrupted_holdout.len());

        let model = ChannelModel::from_counts(&counts)?;
        let report = TrainingReport {
            total_words: corpus.len(),
            training_words: training.len(),
            holdout_words: holdout.len(),
            corrupted_training_words: corrupted_training.len(),
            evaluation_words: pairs.len(),
        };

        Ok(TrainingOutput {
            corrector: SpellingCorrector::from_model(model),
            report,
            holdout: EvaluationSet { pairs },
        })
    }

    /// Wrap an already-trained model, for callers with their own training
    /// loop.
    pub fn from_model(model: ChannelModel) -> SpellingCorrector {
        SpellingCorrector {
            decoder: ViterbiDecoder::new(Arc::new(model)),
        }
    }

    /// The underlying model.
    pub fn model(&self) -> &ChannelModel {
        self.decoder.model()
    }

    /// Decode one word to its most probable original form.
    pub fn correct_word(&self, word: &str) -> Result<String> {
        self.decoder.decode(word)
    }

    /// Correct one tokenized sentence.
    ///
    /// `tokens` and `spaces` come from an external tokenizer and are
    /// consumed positionally; differing lengths are a contract breach. A
    /// token holding any out-of-alphabet symbol is passed through unchanged
    /// rather than aborting the rest of the sentence.
    pub fn correct_tokens(&self, tokens: &[String], spaces: &[bool]) -> Result<SentenceCorrection> {
        if tokens.len() != spaces.len() {
            return Err(ScrivenerError::TokenCountMismatch {
                tokens: tokens.len(),
                flags: spaces.len(),
            });
        }

        let mut corrected = Vec::with_capacity(tokens.len());
        for (token, &space) in tokens.iter().zip(spaces) {
            let (output, outcome) = match self.decoder.decode(token) {
                Ok(word) => (word, TokenOutcome::Decoded),
                Err(ScrivenerError::UnknownSymbol { symbol, position }) => {
                    debug!("passing through token {token:?}: unknown symbol '{symbol}' at {position}");
                    (token.clone(), TokenOutcome::PassedThrough)
                }
                Err(other) => return Err(other),
            };
            corrected.push(CorrectedToken {
                original: token.clone(),
                corrected: output,
                space,
                outcome,
            });
        }

        Ok(SentenceCorrection { tokens: corrected })
    }

    /// Decode every corrupted hold-out word and count exact matches against
    /// the originals.
    pub fn evaluate(&self, holdout: &EvaluationSet) -> EvaluationStats {
        let corrupted: Vec<String> = holdout.pairs.iter().map(|p| p.corrupted.clone()).collect();
        let decoded = self.decoder.decode_batch(&corrupted);

        let correct_words = decoded
            .iter()
            .zip(&holdout.pairs)
            .filter(|(result, pair)| matches!(result, Ok(word) if *word == pair.original))
            .count();

        let total_words = holdout.len();
        let accuracy = if total_words == 0 {
            0.0
        } else {
            correct_words as f64 / total_words as f64
        };
        EvaluationStats {
            total_words,
            correct_words,
            accuracy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Adjacency map where every letter maps only to itself, so corruption
    /// is observable but harmless.
    fn identity_map() -> AdjacencyMap {
        AdjacencyMap::from_entries(('a'..='z').map(|c| (c, vec![c])))
    }

    fn train_identity(corpus_text: &str) -> TrainingOutput {
        let corpus = Corpus::from_text(corpus_text).unwrap();
        let config = CorrectorConfig::default();
        SpellingCorrector::train_with_adjacency(&corpus, &config, identity_map()).unwrap()
    }

    #[test]
    fn test_config_validation() {
        assert!(CorrectorConfig::default().validate().is_ok());

        let mut config = CorrectorConfig::default();
        config.split_ratio = 1.2;
        assert!(config.validate().is_err());

        let mut config = CorrectorConfig::default();
        config.channel.corruption_probability = -0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_training_report_counts() {
        let output = train_identity("cat dog cat dog cat dog cat dog 42 dog");
        assert_eq!(output.report.total_words, 10);
        assert_eq!(output.report.training_words, 8);
        assert_eq!(output.report.holdout_words, 2);
        // "42" is dropped by the channel.
        assert_eq!(output.report.evaluation_words, 1);
        assert_eq!(output.holdout.len(), 1);
    }

    #[test]
    fn test_token_flag_mismatch_is_rejected() {
        let output = train_identity("cat dog cat dog cat");
        let tokens = vec!["cat".to_string(), "dog".to_string()];
        let err = output.corrector.correct_tokens(&tokens, &[true]).unwrap_err();
        assert!(matches!(err, ScrivenerError::TokenCountMismatch { tokens: 2, flags: 1 }));
    }

    #[test]
    fn test_out_of_alphabet_token_passes_through() {
        let output = train_identity("cat dog cat dog cat");
        let tokens = vec!["cat".to_string(), "42,".to_string(), "dog".to_string()];
        let spaces = vec![true, false, true];
        let correction = output.corrector.correct_tokens(&tokens, &spaces).unwrap();

        assert_eq!(correction.tokens[1].corrected, "42,");
        assert_eq!(correction.tokens[1].outcome, TokenOutcome::PassedThrough);
        assert_eq!(correction.passed_through(), 1);
        // The rest of the sentence is still decoded.
        assert_eq!(correction.tokens[0].outcome, TokenOutcome::Decoded);
        assert_eq!(correction.tokens[2].outcome, TokenOutcome::Decoded);
    }

    #[test]
    fn test_render_respects_space_flags() {
        let output = train_identity("cat dog cat dog cat");
        let tokens: Vec<String> = ["cat", ",", "dog"].iter().map(|s| s.to_string()).collect();
        let spaces = vec![false, true, false];
        let correction = output.corrector.correct_tokens(&tokens, &spaces).unwrap();
        assert_eq!(correction.render(), "cat, dog");
    }

    #[test]
    fn test_evaluate_on_empty_holdout() {
        let output = train_identity("cat dog cat dog cat");
        let stats = output.corrector.evaluate(&EvaluationSet::default());
        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.accuracy, 0.0);
    }
}
