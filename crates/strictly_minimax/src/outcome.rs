//! Result of a finished game.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a terminal board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// X completed a line.
    XWins,
    /// O completed a line.
    OWins,
    /// Board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Outcome for a win by `player`.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::X => Outcome::XWins,
            Player::O => Outcome::OWins,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Score from X's perspective: +1, -1 or 0.
    pub fn utility(&self) -> i32 {
        match self {
            Outcome::XWins => 1,
            Outcome::OWins => -1,
            Outcome::Draw => 0,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner() {
            Some(player) => write!(f, "Player {} wins", player),
            None => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_for_each_player() {
        assert_eq!(Outcome::win_for(Player::X), Outcome::XWins);
        assert_eq!(Outcome::win_for(Player::O), Outcome::OWins);
        assert_eq!(Outcome::XWins.winner(), Some(Player::X));
        assert_eq!(Outcome::OWins.winner(), Some(Player::O));
    }

    #[test]
    fn test_only_draw_is_a_draw() {
        assert!(Outcome::Draw.is_draw());
        assert!(!Outcome::XWins.is_draw());
        assert!(!Outcome::OWins.is_draw());
        assert_eq!(Outcome::Draw.winner(), None);
    }

    #[test]
    fn test_utility_signs() {
        assert_eq!(Outcome::XWins.utility(), 1);
        assert_eq!(Outcome::OWins.utility(), -1);
        assert_eq!(Outcome::Draw.utility(), 0);
    }
}
