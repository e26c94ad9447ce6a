//! Count matrices accumulated during the training pass.

use crate::alphabet::{ALPHABET_SIZE, Letter};

/// A square integer matrix over the alphabet, indexed by `(Letter, Letter)`.
///
/// `Transition[i][j]` counts true character `i` followed by true character
/// `j`; `Emission[i][j]` counts true character `i` observed as character `j`
/// (including `i == j`, "no corruption").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMatrix {
    cells: Vec<u64>,
}

impl CountMatrix {
    /// Create a zeroed matrix.
    pub fn new() -> CountMatrix {
        CountMatrix {
            cells: vec![0; ALPHABET_SIZE * ALPHABET_SIZE],
        }
    }

    /// The count at `(row, col)`.
    #[inline]
    pub fn get(&self, row: Letter, col: Letter) -> u64 {
        self.cells[row.index() * ALPHABET_SIZE + col.index()]
    }

    /// Increment the count at `(row, col)`.
    #[inline]
    pub fn increment(&mut self, row: Letter, col: Letter) {
        self.cells[row.index() * ALPHABET_SIZE + col.index()] += 1;
    }

    /// The full row for a state, `ALPHABET_SIZE` entries.
    pub fn row(&self, row: Letter) -> &[u64] {
        let start = row.index() * ALPHABET_SIZE;
        &self.cells[start..start + ALPHABET_SIZE]
    }

    /// Sum of all counts in the matrix.
    pub fn total(&self) -> u64 {
        self.cells.iter().sum()
    }
}

impl Default for CountMatrix {
    fn default() -> Self {
        CountMatrix::new()
    }
}

/// The mutable accumulator for one training session.
///
/// Passed by `&mut` into the counting corruption pass; there is no ambient
/// shared state, so the borrow checker enforces the single-writer rule.
#[derive(Debug, Clone, Default)]
pub struct TrainingCounts {
    /// True-char to true-next-char counts.
    pub transitions: CountMatrix,
    /// True-char to observed-char counts.
    pub emissions: CountMatrix,
}

impl TrainingCounts {
    /// Create a zeroed accumulator.
    pub fn new() -> TrainingCounts {
        TrainingCounts::default()
    }

    /// Record one emission: true character observed as another character.
    /// Pairs outside the alphabet are skipped.
    pub fn record_emission(&mut self, true_char: char, observed_char: char) {
        if let (Some(t), Some(o)) = (Letter::from_char(true_char), Letter::from_char(observed_char))
        {
            self.emissions.increment(t, o);
        }
    }

    /// Record one transition between consecutive true characters.
    /// Pairs outside the alphabet are skipped.
    pub fn record_transition(&mut self, from: char, to: char) {
        if let (Some(f), Some(t)) = (Letter::from_char(from), Letter::from_char(to)) {
            self.transitions.increment(f, t);
        }
    }
}
