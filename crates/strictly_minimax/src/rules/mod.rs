//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Every function takes a board by
//! reference and returns a fresh value; nothing here mutates its input.

pub mod terminal;
pub mod turn;
pub mod win;

pub use terminal::{is_terminal, outcome, utility};
pub use turn::{apply_move, current_player, initial_state, legal_moves, successors};
pub use win::winner;
