//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_minimax::{Board, Move};

/// Strictly Minimax - perfect-play tic-tac-toe engine
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Exhaustive minimax for tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "strictly_minimax.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
///
/// Boards are given in 9-character row-major notation: `X`, `O` and `.`
/// for empty, with optional `/` row separators (e.g. `XX./OO./...`).
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the engine's move for a board
    BestMove {
        /// Board to analyse
        board: Board,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Describe a board: mover, legal moves, winner, utility
    Inspect {
        /// Board to inspect
        board: Board,

        /// Also compute the minimax value of every legal move
        #[arg(short, long)]
        evaluate: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Apply a move for the player to move and print the result
    Apply {
        /// Board to play on
        board: Board,

        /// Cell to mark: `row,col` (zero-based) or a label such as `center`
        #[arg(value_parser = parse_move)]
        mv: Move,
    },

    /// Let the engine play both sides until the game ends
    Play {
        /// Starting board (defaults to the empty board)
        #[arg(long)]
        from: Option<Board>,
    },
}

/// Parses a move argument for clap.
fn parse_move(s: &str) -> Result<Move, String> {
    Move::parse(s).ok_or_else(|| format!("Expected `row,col` or a cell label, got {:?}", s))
}
