//! Corpus loading and deterministic train/test splitting.

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::error::{Result, ScrivenerError};

lazy_static! {
    /// Maximal runs of word characters (letters, digits, underscore).
    static ref WORD_PATTERN: Regex = Regex::new(r"\w+").unwrap();
}

/// A corpus of word tokens extracted from raw text, in source order.
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<String>,
}

impl Corpus {
    /// Extract word tokens from raw text.
    ///
    /// Returns `CorpusEmpty` if the text yields zero tokens.
    pub fn from_text(text: &str) -> Result<Corpus> {
        let words: Vec<String> = WORD_PATTERN
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();

        if words.is_empty() {
            return Err(ScrivenerError::corpus_empty(
                "no word tokens extracted from text",
            ));
        }

        debug!("extracted {} word tokens", words.len());
        Ok(Corpus { words })
    }

    /// Read a corpus from a plain-text file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Corpus> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::from_text(&text).map_err(|e| match e {
            ScrivenerError::CorpusEmpty(_) => ScrivenerError::corpus_empty(format!(
                "no word tokens extracted from {}",
                path.display()
            )),
            other => other,
        })
    }

    /// All word tokens in source order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of word tokens.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the corpus holds no tokens. Unreachable through the
    /// constructors, which reject empty corpora.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Split into a training set and a test set at `floor(ratio * len)`.
    ///
    /// The split is deterministic: the first portion in source order is the
    /// training set, the remainder the test set.
    pub fn split(&self, ratio: f64) -> Result<(&[String], &[String])> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(ScrivenerError::invalid_config(format!(
                "split ratio must lie in [0, 1], got {ratio}"
            )));
        }
        let index = (ratio * self.words.len() as f64).floor() as usize;
        Ok(self.words.split_at(index))
    }
}
