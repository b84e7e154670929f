//! Text and JSON rendering of engine answers.

use crate::config::RenderStyle;
use serde::Serialize;
use strictly_minimax::{
    Board, Move, MoveEvaluation, Outcome, Player, current_player, evaluate_moves, is_terminal,
    legal_moves, outcome, utility, winner,
};
use tracing::instrument;

/// Everything the engine can say about a board.
#[derive(Debug, Clone, Serialize)]
pub struct BoardReport {
    /// The board described.
    pub board: Board,
    /// Player to move (meaningless once the game is over).
    pub to_move: Player,
    /// Empty cells in row-major order.
    pub legal_moves: Vec<Move>,
    /// Winner, if a line is complete.
    pub winner: Option<Player>,
    /// Whether the game is over.
    pub terminal: bool,
    /// Final outcome of a terminal board.
    pub outcome: Option<Outcome>,
    /// Utility from X's perspective.
    pub utility: i32,
    /// Minimax value of each legal move, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluations: Option<Vec<MoveEvaluation>>,
}

impl BoardReport {
    /// Builds a report, optionally running the search for every legal move.
    #[instrument(skip(board), fields(board = %board))]
    pub fn new(board: Board, evaluate: bool) -> Self {
        Self {
            board,
            to_move: current_player(&board),
            legal_moves: legal_moves(&board),
            winner: winner(&board),
            terminal: is_terminal(&board),
            outcome: outcome(&board),
            utility: utility(&board),
            evaluations: evaluate.then(|| evaluate_moves(&board)),
        }
    }

    /// Renders the report as plain text.
    pub fn to_text(&self, style: RenderStyle) -> String {
        let mut out = render_board(&self.board, style);
        out.push('\n');

        match self.outcome {
            Some(outcome) => out.push_str(&format!("Game over: {}\n", outcome)),
            None => out.push_str(&format!("To move: {}\n", self.to_move)),
        }

        let moves: Vec<String> = self.legal_moves.iter().map(Move::to_string).collect();
        out.push_str(&format!("Legal moves: {}\n", moves.join(" ")));
        out.push_str(&format!("Utility: {}\n", self.utility));

        if let Some(evaluations) = &self.evaluations {
            for eval in evaluations {
                out.push_str(&format!(
                    "  {} {:<13} -> {:+}\n",
                    eval.mv,
                    eval.mv.label(),
                    eval.value
                ));
            }
        }

        out
    }
}

/// Answer to a best-move request.
#[derive(Debug, Clone, Serialize)]
pub struct BestMoveReport {
    /// The board analysed.
    pub board: Board,
    /// Chosen move, absent on terminal boards.
    pub best_move: Option<Move>,
    /// Board after the chosen move.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Board>,
}

impl BestMoveReport {
    /// Renders the report as plain text.
    pub fn to_text(&self, style: RenderStyle) -> String {
        match (self.best_move, self.result) {
            (Some(mv), Some(result)) => format!(
                "Best move for {}: {} {}\n{}\n",
                current_player(&self.board),
                mv,
                mv.label(),
                render_board(&result, style)
            ),
            _ => "Board is terminal: no move to make\n".to_string(),
        }
    }
}

/// Formats a board in the requested style.
pub fn render_board(board: &Board, style: RenderStyle) -> String {
    match style {
        RenderStyle::Grid => board.display(),
        RenderStyle::Compact => board.notation(),
    }
}
