//! Noughts - terminal front end.
//!
//! Asks the engine for a move, or plays whole games.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts::{Board, GameEvent, GameMode, Mark, Orchestrator, Settings, input_lines};
use std::io::BufRead;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries the game.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::BestMove { board, side, json } => best_move(board, side, json),
        Command::Play {
            config,
            mode,
            computer_first,
            delay_ms,
        } => play(config, mode, computer_first, delay_ms).await,
    }
}

/// Print the engine's choice for one position
#[instrument(skip(board), fields(board = %board.notation()))]
fn best_move(mut board: Board, side: Mark, json: bool) -> Result<()> {
    let status = board.status();
    if status.is_over() {
        anyhow::bail!("Game is already over ({})", status);
    }

    let report = noughts_core::analyze(&mut board, side)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", board);
    println!(
        "{} plays {} (row {}, col {})",
        side.name(),
        report.best_move.position,
        report.best_move.row(),
        report.best_move.col()
    );
    println!("Score {} after searching {} nodes", report.score, report.nodes);
    Ok(())
}

/// Play a game in the terminal
async fn play(
    config: Option<PathBuf>,
    mode: Option<GameMode>,
    computer_first: bool,
    delay_ms: Option<u64>,
) -> Result<()> {
    let mut settings = match config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    if let Some(mode) = mode {
        settings = settings.with_mode(mode);
    }
    if computer_first {
        settings = settings.with_computer_first(true);
    }
    if let Some(delay_ms) = delay_ms {
        settings = settings.with_turn_delay_ms(delay_ms);
    }
    info!(?settings, "Starting game");

    let (input_tx, input_rx) = mpsc::unbounded_channel();
    if *settings.mode() != GameMode::ComputerVersusComputer {
        spawn_stdin_reader(input_tx);
    }

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::from_settings(&settings, input_lines(input_rx), event_tx);
    let game = tokio::spawn(async move { orchestrator.run().await });

    let mut last_board = Board::new();
    while let Some(event) = event_rx.recv().await {
        match event {
            GameEvent::AwaitingMove {
                player,
                mark,
                board,
            } => {
                println!("\n{}\n", board);
                println!("{} ({}) to move:", player, mark);
            }
            GameEvent::InputRejected { reason, .. } => println!("  {}; try again", reason),
            GameEvent::MoveMade { player, mv, board } => {
                println!("{} plays {}", player, mv.position);
                last_board = board;
            }
            GameEvent::GameOver { status, line } => {
                println!("\n{}\n", last_board);
                match line {
                    Some(line) => {
                        let cells: Vec<_> = line.iter().map(|p| p.label()).collect();
                        println!("Game over: {} ({})", status, cells.join(", "));
                    }
                    None => println!("Game over: {}", status),
                }
            }
        }
    }

    game.await??;
    Ok(())
}

/// Forward stdin lines on a plain thread; a blocked read must not hold up
/// runtime shutdown.
fn spawn_stdin_reader(tx: mpsc::UnboundedSender<String>) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
        debug!("Stdin reader finished");
    });
}
