//! Win detection logic for tic-tac-toe.

use crate::position::Move;
use crate::types::{Board, Player};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line (in [`LINES`] order) whose
/// three cells all hold that player's mark, `None` otherwise.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let player = board.get(a)?.mark()?;
        (board.get(b) == Some(player.cell()) && board.get(c) == Some(player.cell()))
            .then_some(player)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().expect("valid notation")
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(winner(&board("XXXOO....")), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(winner(&board("XO.XO.X..")), Some(Player::X));
        assert_eq!(winner(&board("XOXXO..O.")), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        assert_eq!(winner(&board("O.X.OX..O")), Some(Player::O));
        assert_eq!(winner(&board("O.X.X.XO.")), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winner(&board("XX.OO....")), None);
    }

    #[test]
    fn test_first_complete_line_wins() {
        // Not reachable in play, but pins the scan order.
        assert_eq!(winner(&board("OOO...XXX")), Some(Player::O));
        assert_eq!(winner(&board("XXX...OOO")), Some(Player::X));
    }
}
