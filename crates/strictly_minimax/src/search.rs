//! Exhaustive minimax search.
//!
//! The game tree of tic-tac-toe is small enough to walk completely from any
//! position, so values are exact: no depth limit, no heuristic, no pruning
//! and no transposition table. Each call is a pure function of its board.

use crate::position::Move;
use crate::rules::{current_player, is_terminal, successors, utility};
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which side a search node optimizes for.
///
/// X maximizes utility and O minimizes it. The role flips on every ply;
/// the recursion follows the role alone and never re-derives the mover
/// from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Node where X chooses: take the largest child value.
    Maximizing,
    /// Node where O chooses: take the smallest child value.
    Minimizing,
}

impl Role {
    /// Role of the node where `player` is to move.
    pub fn for_player(player: Player) -> Self {
        match player {
            Player::X => Role::Maximizing,
            Player::O => Role::Minimizing,
        }
    }

    /// Role of the nodes one ply below.
    pub fn next(self) -> Self {
        match self {
            Role::Maximizing => Role::Minimizing,
            Role::Minimizing => Role::Maximizing,
        }
    }

    /// Value a node starts from before any child is seen.
    fn worst(self) -> i32 {
        match self {
            Role::Maximizing => i32::MIN,
            Role::Minimizing => i32::MAX,
        }
    }

    /// Checks whether `candidate` strictly improves on `incumbent`.
    fn prefers(self, candidate: i32, incumbent: i32) -> bool {
        match self {
            Role::Maximizing => candidate > incumbent,
            Role::Minimizing => candidate < incumbent,
        }
    }
}

/// Minimax value of a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveEvaluation {
    /// The move considered.
    pub mv: Move,
    /// Utility (X's perspective) reached with optimal play after the move.
    pub value: i32,
}

/// Computes the minimax value of `board` when `role` is to choose.
///
/// Terminal boards score their [`utility`]. Otherwise a maximizing node
/// returns the largest value among its children evaluated as minimizing
/// nodes, and a minimizing node the smallest among children evaluated as
/// maximizing nodes.
pub fn minimax_value(board: &Board, role: Role) -> i32 {
    if is_terminal(board) {
        return utility(board);
    }

    let child_role = role.next();
    successors(board)
        .map(|(_, child)| minimax_value(&child, child_role))
        .fold(role.worst(), |best, value| match role {
            Role::Maximizing => best.max(value),
            Role::Minimizing => best.min(value),
        })
}

/// Evaluates every legal move of the player to move.
///
/// Moves appear in [`crate::legal_moves`] order. Returns an empty list on
/// terminal boards.
#[instrument(level = "trace")]
pub fn evaluate_moves(board: &Board) -> Vec<MoveEvaluation> {
    if is_terminal(board) {
        return Vec::new();
    }

    let child_role = Role::for_player(current_player(board)).next();
    successors(board)
        .map(|(mv, child)| MoveEvaluation {
            mv,
            value: minimax_value(&child, child_role),
        })
        .collect()
}

/// Returns an optimal move for the player to move, or `None` if the game is
/// over.
///
/// X keeps the move with the strictly greatest value and O the one with the
/// strictly smallest. When several moves share the best value, the first in
/// row-major order is kept.
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn best_move(board: &Board) -> Option<Move> {
    if is_terminal(board) {
        debug!("Board is terminal, no move to make");
        return None;
    }

    let player = current_player(board);
    let role = Role::for_player(player);

    let mut best: Option<MoveEvaluation> = None;
    for eval in evaluate_moves(board) {
        let improves = best.is_none_or(|b| role.prefers(eval.value, b.value));
        if improves {
            best = Some(eval);
        }
    }

    if let Some(choice) = best {
        debug!(%player, mv = %choice.mv, value = choice.value, "Selected move");
    }
    best.map(|choice| choice.mv)
}
