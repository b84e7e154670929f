//! Turn order and move application.

use crate::error::InvalidMoveError;
use crate::position::Move;
use crate::types::{Board, Cell, Player};
use tracing::{instrument, trace};

/// Returns the starting board: all nine cells empty.
#[instrument(level = "trace")]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who moves next on `board`.
///
/// X moves whenever both sides have placed the same number of marks
/// (including the empty board); otherwise O moves.
#[instrument(level = "trace")]
pub fn current_player(board: &Board) -> Player {
    if board.count(Cell::MarkX) == board.count(Cell::MarkO) {
        Player::X
    } else {
        Player::O
    }
}

/// Returns every empty cell in row-major order.
///
/// Empty when the board is full.
#[instrument(level = "trace")]
pub fn legal_moves(board: &Board) -> Vec<Move> {
    Move::ALL
        .iter()
        .copied()
        .filter(|mv| board.is_empty(*mv))
        .collect()
}

/// Returns the board that results from the current player marking `mv`.
///
/// The mark is always the one [`current_player`] reports for the input
/// board. The input board is left untouched.
///
/// # Errors
///
/// - [`InvalidMoveError::OutOfRange`] if the row or column is outside 0-2.
/// - [`InvalidMoveError::Occupied`] if the cell already holds a mark.
#[instrument(level = "trace", fields(row = mv.row, col = mv.col))]
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, InvalidMoveError> {
    let Some(index) = mv.index() else {
        trace!("Rejected off-board move");
        return Err(InvalidMoveError::OutOfRange {
            row: mv.row,
            col: mv.col,
        });
    };

    let occupant = board.cells()[index];
    if !occupant.is_empty() {
        trace!(%occupant, "Rejected move onto occupied cell");
        return Err(InvalidMoveError::Occupied {
            row: mv.row,
            col: mv.col,
            occupant,
        });
    }

    Ok(board.with_cell(index, current_player(board).cell()))
}

/// Yields each legal move paired with the board it produces.
///
/// Equivalent to calling [`apply_move`] for every entry of
/// [`legal_moves`], without an error path.
pub fn successors(board: &Board) -> impl Iterator<Item = (Move, Board)> + '_ {
    let mark = current_player(board).cell();
    legal_moves(board)
        .into_iter()
        .filter_map(move |mv| mv.index().map(|idx| (mv, board.with_cell(idx, mark))))
}
