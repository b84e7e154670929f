//! Error types for the tic-tac-toe engine.

use crate::types::Cell;
use derive_more::{Display, Error};
use tracing::instrument;

/// A move that cannot be applied to the board it was offered to.
///
/// Returned by [`crate::apply_move`]; the board is never modified when this
/// error occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMoveError {
    /// Row or column lies outside `0..=2`.
    #[display("Move ({}, {}) is off the board (rows and columns are 0-2)", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The addressed cell already holds a mark.
    #[display("Cell ({}, {}) is already occupied by {}", row, col, occupant)]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// The mark found in the cell.
        occupant: Cell,
    },
}

/// Board notation could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {}", message)]
pub struct ParseBoardError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ParseBoardError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(level = "trace", skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
