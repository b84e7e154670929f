//! Core domain types for tic-tac-toe.

use crate::error::ParseBoardError;
use crate::position::Move;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    #[display("X")]
    X,
    /// Player O (goes second, minimizes utility).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the cell value this player writes.
    pub fn cell(self) -> Cell {
        Cell::from(self)
    }
}

/// A cell on the tic-tac-toe board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Cell {
    /// Unoccupied cell.
    #[default]
    Empty,
    /// Cell holding X's mark.
    MarkX,
    /// Cell holding O's mark.
    MarkO,
}

impl Cell {
    /// Returns the player whose mark occupies this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::MarkX => Some(Player::X),
            Cell::MarkO => Some(Player::O),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Canonical notation character.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::MarkX => 'X',
            Cell::MarkO => 'O',
        }
    }

    /// Parses a notation character. Accepts either case and several blanks.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Cell::MarkX),
            'O' | 'o' => Some(Cell::MarkO),
            '.' | '-' | '_' | ' ' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::MarkX,
            Player::O => Cell::MarkO,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values. Every rule that "changes" a board returns a new
/// one, so a board handed to the search can be shared freely between
/// branches.
///
/// Serializes as its 9-character notation (see [`Board::notation`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Side length of the board.
    pub const SIZE: usize = 3;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Creates a board from three rows.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (row, line) in rows.iter().enumerate() {
            cells[row * Self::SIZE..(row + 1) * Self::SIZE].copy_from_slice(line);
        }
        Self { cells }
    }

    /// Gets the cell at the given move's coordinates.
    ///
    /// Returns `None` when the coordinates are off the board.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        mv.index().map(|idx| self.cells[idx])
    }

    /// Gets the cell at a row-major index (0-8).
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the addressed cell exists and is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Cell::Empty))
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the board as three rows.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        let c = &self.cells;
        [[c[0], c[1], c[2]], [c[3], c[4], c[5]], [c[6], c[7], c[8]]]
    }

    /// Counts cells holding the given value.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Checks the mark-count invariant of reachable boards:
    /// X has as many marks as O, or exactly one more.
    #[instrument(level = "trace")]
    pub fn is_reachable_shape(&self) -> bool {
        let x = self.count(Cell::MarkX);
        let o = self.count(Cell::MarkO);
        x == o || x == o + 1
    }

    /// Returns a copy with the cell at `index` replaced.
    ///
    /// The index must be in range; callers are the rule functions, which
    /// validate coordinates first.
    pub(crate) fn with_cell(mut self, index: usize, cell: Cell) -> Self {
        self.cells[index] = cell;
        self
    }

    /// Canonical 9-character row-major notation, e.g. `XX.OO....`.
    pub fn notation(&self) -> String {
        self.cells.iter().map(|c| c.symbol()).collect()
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, line) in self.rows().iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => (row * Self::SIZE + col + 1).to_string(),
                    other => other.symbol().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notation())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    #[instrument(level = "trace")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; 9];
        let mut count = 0;

        for c in s.chars().filter(|c| !matches!(c, '/' | '|' | '\n' | '\r')) {
            let cell = Cell::from_symbol(c).ok_or_else(|| {
                let allowed: String = Cell::iter().map(Cell::symbol).collect();
                ParseBoardError::new(format!(
                    "Unexpected character {:?} (expected one of {:?}, lowercase marks or blanks)",
                    c, allowed
                ))
            })?;
            if count < cells.len() {
                cells[count] = cell;
            }
            count += 1;
        }

        if count != cells.len() {
            return Err(ParseBoardError::new(format!(
                "Expected 9 cells, found {}",
                count
            )));
        }

        Ok(Self { cells })
    }
}

impl TryFrom<String> for Board {
    type Error = ParseBoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.notation()
    }
}
