//! Strictly Minimax - perfect-play tic-tac-toe engine
//!
//! Pure game rules plus an exhaustive minimax search. Every function is a
//! pure function of the board it receives: boards are `Copy` values and no
//! state survives between calls.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`], [`Player`], [`Move`], [`Outcome`]
//! - **Rules**: turn inference, legal moves, move application, win/draw detection
//! - **Search**: full-depth minimax over the game tree
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{apply_move, best_move, initial_state, is_terminal, outcome, Outcome};
//!
//! let mut board = initial_state();
//! while let Some(mv) = best_move(&board) {
//!     board = apply_move(&board, mv)?;
//! }
//! assert!(is_terminal(&board));
//! assert_eq!(outcome(&board), Some(Outcome::Draw));
//! # Ok::<(), strictly_minimax::InvalidMoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod outcome;
mod position;
mod rules;
mod search;
mod types;

// Crate-level exports - Domain types
pub use outcome::Outcome;
pub use position::Move;
pub use types::{Board, Cell, Player};

// Crate-level exports - Errors
pub use error::{InvalidMoveError, ParseBoardError};

// Crate-level exports - Rules
pub use rules::win::LINES;
pub use rules::{
    apply_move, current_player, initial_state, is_terminal, legal_moves, outcome, successors,
    utility, winner,
};

// Crate-level exports - Search
pub use search::{MoveEvaluation, Role, best_move, evaluate_moves, minimax_value};
