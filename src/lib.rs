//! # Scrivener
//!
//! A statistical, character-level spelling correction library for Rust.
//!
//! Scrivener trains a noisy-channel model (emission and transition
//! probability matrices over the 52 Latin letters) from a plain-text corpus,
//! then decodes corrupted words back to their most probable original form
//! with the Viterbi algorithm in log-space.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Seeded, reproducible corruption and training
//! - Whole-row Laplace smoothing of count matrices
//! - Log-domain Viterbi decoding with deterministic tie-breaking
//! - Parallel batch decoding over a frozen model

pub mod alphabet;
pub mod channel;
pub mod cli;
pub mod corpus;
pub mod corrector;
pub mod error;
pub mod keyboard;
pub mod model;
pub mod viterbi;

pub mod prelude {
    pub use crate::alphabet::{ALPHABET_SIZE, Letter};
    pub use crate::channel::{ChannelConfig, NoisyChannel, TrainingCounts};
    pub use crate::corpus::Corpus;
    pub use crate::corrector::{CorrectorConfig, SpellingCorrector};
    pub use crate::error::{Result, ScrivenerError};
    pub use crate::keyboard::AdjacencyMap;
    pub use crate::model::ChannelModel;
    pub use crate::viterbi::ViterbiDecoder;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
