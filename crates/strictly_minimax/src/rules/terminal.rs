//! Terminal detection and scoring.

use super::win::winner;
use crate::outcome::Outcome;
use crate::types::Board;
use tracing::instrument;

/// Checks if the game is over: someone has a line, or no empty cell remains.
#[instrument(level = "trace")]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Returns the outcome of a terminal board, or `None` while play continues.
#[instrument(level = "trace")]
pub fn outcome(board: &Board) -> Option<Outcome> {
    match winner(board) {
        Some(player) => Some(Outcome::win_for(player)),
        None if board.is_full() => Some(Outcome::Draw),
        None => None,
    }
}

/// Scores a board from X's perspective: +1 if X won, -1 if O won, else 0.
///
/// Only meaningful on terminal boards. A board still in play has no
/// winner and therefore scores 0.
#[instrument(level = "trace")]
pub fn utility(board: &Board) -> i32 {
    winner(board).map_or(0, |player| Outcome::win_for(player).utility())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().expect("valid notation")
    }

    #[test]
    fn test_empty_board_not_terminal() {
        assert!(!is_terminal(&Board::new()));
        assert_eq!(outcome(&Board::new()), None);
    }

    #[test]
    fn test_win_is_terminal_before_board_fills() {
        let b = board("XXXOO....");
        assert!(is_terminal(&b));
        assert_eq!(outcome(&b), Some(Outcome::XWins));
        assert_eq!(utility(&b), 1);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let b = board("XOXOXXOXO");
        assert!(is_terminal(&b));
        assert_eq!(outcome(&b), Some(Outcome::Draw));
        assert_eq!(utility(&b), 0);
    }

    #[test]
    fn test_o_win_scores_negative() {
        let b = board("XX.OOOX..");
        assert_eq!(utility(&b), -1);
        assert_eq!(outcome(&b), Some(Outcome::OWins));
    }

    #[test]
    fn test_full_board_with_winner_is_a_win() {
        let b = board("XXXOOXOXO");
        assert_eq!(outcome(&b), Some(Outcome::XWins));
    }

    #[test]
    fn test_utility_of_unfinished_board_is_zero() {
        assert_eq!(utility(&board("XX.OO....")), 0);
    }
}
