//! Count-to-probability estimation with whole-row Laplace smoothing.

use log::debug;

use crate::alphabet::{ALPHABET_SIZE, Letter};
use crate::channel::CountMatrix;
use crate::error::{Result, ScrivenerError};
use crate::model::matrix::ProbabilityMatrix;

/// Convert a count matrix into a row-normalized probability matrix.
///
/// Per row: if any entry is zero, add 1 to every entry of that row (the
/// smoothing applies to the whole row, not just the zero cells), then divide
/// each entry by the row total. Pure function: the input counts are never
/// mutated, and identical inputs yield identical outputs.
///
/// `matrix` names the matrix in the defensive [`DegenerateRow`] error, which
/// is unreachable with a well-formed alphabet since smoothing adds at least
/// `ALPHABET_SIZE` to an all-zero row.
///
/// [`DegenerateRow`]: ScrivenerError::DegenerateRow
pub fn estimate(counts: &CountMatrix, matrix: &'static str) -> Result<ProbabilityMatrix> {
    let mut cells = vec![0.0; ALPHABET_SIZE * ALPHABET_SIZE];
    let mut smoothed_rows = 0usize;

    for state in Letter::all() {
        let raw = counts.row(state);
        let needs_smoothing = raw.contains(&0);
        if needs_smoothing {
            smoothed_rows += 1;
        }

        let mut row = [0u64; ALPHABET_SIZE];
        for (cell, &count) in row.iter_mut().zip(raw) {
            *cell = if needs_smoothing { count + 1 } else { count };
        }

        let total: u64 = row.iter().sum();
        if total == 0 {
            return Err(ScrivenerError::DegenerateRow {
                matrix,
                row: state.as_char(),
            });
        }

        let start = state.index() * ALPHABET_SIZE;
        for (j, &count) in row.iter().enumerate() {
            cells[start + j] = count as f64 / total as f64;
        }
    }

    debug!("estimated {matrix} matrix, smoothed {smoothed_rows}/{ALPHABET_SIZE} rows");
    Ok(ProbabilityMatrix::from_cells(cells))
}
