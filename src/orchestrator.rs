//! Game orchestration between players.

use crate::players::{ComputerPlayer, HumanPlayer, InputLines, Player};
use crate::session::GameSession;
use crate::settings::{GameMode, Settings};
use anyhow::Result;
use noughts_core::{Board, GameStatus, Line, Mark, Move};
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::{debug, info, instrument};

/// Messages sent from the orchestrator to whoever presents the game.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A player is about to choose a move.
    AwaitingMove {
        /// Name of the seat.
        player: String,
        /// Mark that seat plays.
        mark: Mark,
        /// Board they are choosing on.
        board: Board,
    },
    /// A human's input could not be used.
    InputRejected {
        /// Name of the seat.
        player: String,
        /// Why the input was refused.
        reason: String,
    },
    /// A move was made.
    MoveMade {
        /// Name of the seat.
        player: String,
        /// The move applied.
        mv: Move,
        /// Board after the move.
        board: Board,
    },
    /// The game ended.
    GameOver {
        /// Won or drawn.
        status: GameStatus,
        /// Completed line, for a win.
        line: Option<Line>,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    session: GameSession,
    cross: Box<dyn Player>,
    nought: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator; `opening` moves first.
    pub fn new(
        cross: Box<dyn Player>,
        nought: Box<dyn Player>,
        opening: Mark,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session: GameSession::new(opening),
            cross,
            nought,
            event_tx,
        }
    }

    /// Seats players as `settings` asks.
    ///
    /// Human seats read from `input`; in player vs computer the human plays
    /// Cross and the computer Nought.
    #[instrument(skip(input, event_tx))]
    pub fn from_settings(
        settings: &Settings,
        input: InputLines,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        let delay = Duration::from_millis(*settings.turn_delay_ms());
        let human = |name: &str| -> Box<dyn Player> {
            Box::new(HumanPlayer::new(name, input.clone(), event_tx.clone()))
        };
        let computer =
            |name: &str| -> Box<dyn Player> { Box::new(ComputerPlayer::new(name, delay)) };

        let (cross, nought) = match settings.mode() {
            GameMode::PlayerVersusPlayer => (human("Player 1"), human("Player 2")),
            GameMode::PlayerVersusComputer => (human("Player"), computer("Computer")),
            GameMode::ComputerVersusComputer => (computer("Computer X"), computer("Computer O")),
        };

        Self::new(cross, nought, settings.opening_mark(), event_tx)
    }

    /// Returns the session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Runs the game loop until the game ends; returns the final status.
    pub async fn run(&mut self) -> Result<GameStatus> {
        info!(opening = %self.session.to_move(), "Starting game orchestration");

        while !self.session.is_over() {
            let mark = self.session.to_move();
            let player = match mark {
                Mark::Cross => &mut self.cross,
                Mark::Nought => &mut self.nought,
            };
            let player_name = player.name().to_string();

            self.event_tx.send(GameEvent::AwaitingMove {
                player: player_name.clone(),
                mark,
                board: self.session.board().clone(),
            })?;

            debug!(player = %player_name, "Waiting for move");
            let position = player.get_move(&self.session).await?;
            self.session.play(position)?;

            self.event_tx.send(GameEvent::MoveMade {
                player: player_name,
                mv: Move::new(mark, position),
                board: self.session.board().clone(),
            })?;
        }

        let status = self.session.status();
        self.event_tx.send(GameEvent::GameOver {
            status,
            line: self.session.winning_line().map(|(_, line)| line),
        })?;
        info!(%status, "Game finished");
        Ok(status)
    }

    /// Restarts the game with `opening` to move.
    pub fn restart(&mut self, opening: Mark) {
        self.session.reset(opening);
    }
}
