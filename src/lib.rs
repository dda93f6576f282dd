//! Noughts and crosses against a perfect-play computer.
//!
//! The game logic and the minimax engine live in [`noughts_core`]; this
//! crate drives games with it.
//!
//! # Architecture
//!
//! - **Settings**: game mode, who opens, and pacing, from TOML or flags
//! - **Session**: one game's board, turn, status and history
//! - **Players**: human and computer seats behind one async trait
//! - **Orchestrator**: the game loop, reporting progress as events
//!
//! # Example
//!
//! ```no_run
//! use noughts::{GameMode, Orchestrator, Settings, input_lines};
//! use tokio::sync::mpsc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let settings = Settings::default()
//!     .with_mode(GameMode::ComputerVersusComputer)
//!     .with_turn_delay_ms(0);
//! let (_input_tx, input_rx) = mpsc::unbounded_channel();
//! let (event_tx, _event_rx) = mpsc::unbounded_channel();
//!
//! let mut orchestrator = Orchestrator::from_settings(&settings, input_lines(input_rx), event_tx);
//! let status = orchestrator.run().await?;
//! println!("{status}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod orchestrator;
mod players;
mod session;
mod settings;

// Crate-level exports - Orchestration
pub use orchestrator::{GameEvent, Orchestrator};

// Crate-level exports - Players
pub use players::{ComputerPlayer, HumanPlayer, InputLines, Player, input_lines};

// Crate-level exports - Session management
pub use session::{GameSession, SessionError};

// Crate-level exports - Settings
pub use settings::{GameMode, Settings, SettingsError};

// Crate-level exports - Game types
pub use noughts_core::{Board, GameStatus, Mark, Move, Position, SearchReport};
