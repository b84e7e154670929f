//! Strictly Minimax - command-line host
//!
//! Parses boards, asks the engine questions and prints the answers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod report;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use config::SolverConfig;
use report::{BestMoveReport, BoardReport, render_board};
use strictly_minimax::{Board, Move, apply_move, best_move, current_player, initial_state, outcome};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = SolverConfig::load_or_default(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::BestMove { board, json } => run_best_move(&config, board, json),
        Command::Inspect {
            board,
            evaluate,
            json,
        } => run_inspect(&config, board, evaluate, json),
        Command::Apply { board, mv } => run_apply(&config, board, mv),
        Command::Play { from } => run_play(&config, from.unwrap_or_else(initial_state)),
    }
}

/// Rejects boards no sequence of legal moves could produce.
fn ensure_reachable(board: &Board) -> Result<()> {
    if !board.is_reachable_shape() {
        warn!(%board, "Rejected board with impossible mark counts");
        bail!(
            "Board {} is not reachable: X must have as many marks as O, or one more",
            board
        );
    }
    Ok(())
}

/// Print the engine's move for a board
#[instrument(skip(config))]
fn run_best_move(config: &SolverConfig, board: Board, json: bool) -> Result<()> {
    ensure_reachable(&board)?;

    let mv = best_move(&board);
    let result = mv.map(|mv| apply_move(&board, mv)).transpose()?;
    let report = BestMoveReport {
        board,
        best_move: mv,
        result,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text(*config.render()));
    }
    Ok(())
}

/// Describe a board
#[instrument(skip(config))]
fn run_inspect(config: &SolverConfig, board: Board, evaluate: bool, json: bool) -> Result<()> {
    ensure_reachable(&board)?;

    let report = BoardReport::new(board, evaluate || *config.show_evaluations());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text(*config.render()));
    }
    Ok(())
}

/// Apply a move for the player to move
#[instrument(skip(config))]
fn run_apply(config: &SolverConfig, board: Board, mv: Move) -> Result<()> {
    ensure_reachable(&board)?;

    let next = apply_move(&board, mv)?;
    println!("{}", render_board(&next, *config.render()));
    if let Some(outcome) = outcome(&next) {
        println!("Game over: {}", outcome);
    }
    Ok(())
}

/// Let the engine play both sides
#[instrument(skip(config))]
fn run_play(config: &SolverConfig, start: Board) -> Result<()> {
    ensure_reachable(&start)?;

    let style = *config.render();
    let mut board = start;
    println!("{}\n", render_board(&board, style));

    while let Some(mv) = best_move(&board) {
        let player = current_player(&board);
        board = apply_move(&board, mv)?;
        info!(%player, %mv, %board, "Engine moved");
        println!("{} plays {} ({})", player, mv, mv.label());
        println!("{}\n", render_board(&board, style));
    }

    match outcome(&board) {
        Some(outcome) => println!("Game over: {}", outcome),
        None => bail!("Search stopped on a board that is not terminal: {}", board),
    }
    Ok(())
}
