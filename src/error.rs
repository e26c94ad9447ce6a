//! Error types for the Scrivener library.
//!
//! All errors are represented by the [`ScrivenerError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use scrivener::error::{Result, ScrivenerError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ScrivenerError::invalid_config("corruption probability out of range"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Scrivener operations.
///
/// Training errors (`CorpusEmpty`, `DegenerateRow`, `InvalidConfig`) abort
/// the whole training pass; no partial model is considered valid. Decode
/// errors (`UnknownSymbol`) are local to one word and leave the rest of a
/// batch unaffected.
#[derive(Error, Debug)]
pub enum ScrivenerError {
    /// I/O errors (corpus file operations).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The training corpus yielded zero word tokens.
    #[error("Corpus error: {0}")]
    CorpusEmpty(String),

    /// A count-matrix row summed to zero even after smoothing. Indicates an
    /// alphabet/count mismatch; unreachable with well-formed counts.
    #[error("Degenerate {matrix} row for state '{row}': sum is zero after smoothing")]
    DegenerateRow {
        matrix: &'static str,
        row: char,
    },

    /// An observed character during decoding falls outside the 52-letter
    /// alphabet. The trained model has no state for it.
    #[error("Unknown symbol '{symbol}' at position {position}")]
    UnknownSymbol { symbol: char, position: usize },

    /// Token and space-flag sequences from the external tokenizer differ in
    /// length.
    #[error("Token count mismatch: {tokens} tokens but {flags} space flags")]
    TokenCountMismatch { tokens: usize, flags: usize },

    /// Configuration validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with ScrivenerError.
pub type Result<T> = std::result::Result<T, ScrivenerError>;

impl ScrivenerError {
    /// Create a new corpus-empty error.
    pub fn corpus_empty<S: Into<String>>(msg: S) -> Self {
        ScrivenerError::CorpusEmpty(msg.into())
    }

    /// Create a new invalid-configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        ScrivenerError::InvalidConfig(msg.into())
    }
}
