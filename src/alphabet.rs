//! The fixed 52-letter alphabet shared by hidden states and observations.
//!
//! Hidden states and observed symbols are drawn from the same ordered set:
//! lowercase `a..z` (indices 0-25) followed by uppercase `A..Z` (indices
//! 26-51). Index `i` denotes the same letter in both spaces.

use std::fmt;

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 52;

/// A letter of the model alphabet, stored as its index.
///
/// `Letter` is the only way to index the count and probability matrices,
/// so an in-range index is guaranteed by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Convert a character to a letter, or `None` if it is outside the
    /// 52-letter alphabet.
    pub fn from_char(ch: char) -> Option<Letter> {
        match ch {
            'a'..='z' => Some(Letter(ch as u8 - b'a')),
            'A'..='Z' => Some(Letter(ch as u8 - b'A' + 26)),
            _ => None,
        }
    }

    /// Construct a letter from its alphabet index.
    ///
    /// Returns `None` if the index is out of range.
    pub fn from_index(index: usize) -> Option<Letter> {
        if index < ALPHABET_SIZE {
            Some(Letter(index as u8))
        } else {
            None
        }
    }

    /// The letter's index into the alphabet, always `< ALPHABET_SIZE`.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The letter as a character.
    pub fn as_char(self) -> char {
        if self.0 < 26 {
            (b'a' + self.0) as char
        } else {
            (b'A' + self.0 - 26) as char
        }
    }

    /// Iterate over the entire alphabet in index order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_SIZE as u8).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
