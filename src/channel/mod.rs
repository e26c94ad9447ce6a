//! The noisy channel: keyboard-based corruption and count accumulation.
//!
//! Training passes a word list through [`NoisyChannel`], which stochastically
//! substitutes characters with keyboard neighbors and, on the training pass,
//! accumulates transition and emission counts into a [`TrainingCounts`]
//! accumulator.

pub mod counts;
pub mod noisy;

pub use counts::{CountMatrix, TrainingCounts};
pub use noisy::{ChannelConfig, NoisyChannel};
