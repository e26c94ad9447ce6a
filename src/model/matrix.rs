//! Row-stochastic probability matrices over the alphabet.

use crate::alphabet::{ALPHABET_SIZE, Letter};

/// A square probability matrix over the alphabet, each row summing to 1.
///
/// Built only by the estimator; read-only afterwards. Smoothing guarantees
/// every entry is strictly positive, so `ln` of any entry is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityMatrix {
    cells: Vec<f64>,
}

impl ProbabilityMatrix {
    pub(crate) fn from_cells(cells: Vec<f64>) -> ProbabilityMatrix {
        debug_assert_eq!(cells.len(), ALPHABET_SIZE * ALPHABET_SIZE);
        ProbabilityMatrix { cells }
    }

    /// The probability at `(row, col)`.
    #[inline]
    pub fn get(&self, row: Letter, col: Letter) -> f64 {
        self.cells[row.index() * ALPHABET_SIZE + col.index()]
    }

    /// The full row for a state, `ALPHABET_SIZE` entries.
    pub fn row(&self, row: Letter) -> &[f64] {
        let start = row.index() * ALPHABET_SIZE;
        &self.cells[start..start + ALPHABET_SIZE]
    }
}
