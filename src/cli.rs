//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts::{Board, GameMode, Mark};

/// Noughts and crosses with a perfect-play computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Noughts and crosses with a perfect-play computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the engine's move for a position
    BestMove {
        /// Board in row-major notation, e.g. "X../.O./..." ('.' for empty)
        #[arg(short, long)]
        board: Board,

        /// Side to move: x, o, cross or nought
        #[arg(short, long)]
        side: Mark,

        /// Print the full search report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play a game in the terminal
    Play {
        /// Path to a TOML settings file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Game mode (overrides the settings file)
        #[arg(short, long, value_enum)]
        mode: Option<GameMode>,

        /// Let the computer open in player vs computer
        #[arg(long)]
        computer_first: bool,

        /// Pause before each computer move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },
}
