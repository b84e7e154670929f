//! Board coordinates for tic-tac-toe moves.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: zero-based `(row, col)` coordinates of the cell to mark.
///
/// Coordinates are not range-checked on construction so that callers can
/// express whatever their input says; [`crate::apply_move`] rejects cells
/// that are off the board or already occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Row, 0 at the top.
    pub row: usize,
    /// Column, 0 at the left.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Checks that both coordinates are on the board.
    pub fn in_range(&self) -> bool {
        self.row < Board::SIZE && self.col < Board::SIZE
    }

    /// Converts to a row-major board index (0-8), if on the board.
    pub fn index(&self) -> Option<usize> {
        self.in_range().then(|| self.row * Board::SIZE + self.col)
    }

    /// Creates a move from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < Board::SIZE * Board::SIZE)
            .then(|| Self::new(index / Board::SIZE, index % Board::SIZE))
    }

    /// All 9 cells in row-major order.
    pub const ALL: [Move; 9] = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(1, 2),
        Move::new(2, 0),
        Move::new(2, 1),
        Move::new(2, 2),
    ];

    /// Get label for this move (for display).
    pub fn label(&self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            (2, 2) => "Bottom-right",
            _ => "Off-board",
        }
    }

    /// Parses `"row,col"`, `"row col"`, or a cell label such as `center`.
    #[instrument(level = "trace")]
    pub fn parse(s: &str) -> Option<Move> {
        let s = s.trim();
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        if let [row, col] = parts.as_slice()
            && let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
        {
            return Some(Move::new(row, col));
        }

        let s_lower = s.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|mv| mv.label().to_lowercase() == s_lower)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
