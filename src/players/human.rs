//! Human player fed by lines of text.

use super::Player;
use crate::orchestrator::GameEvent;
use crate::session::GameSession;
use anyhow::Result;
use noughts_core::Position;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, warn};

/// Line source shared by every human seat, so two players can take turns
/// at one keyboard.
pub type InputLines = Arc<Mutex<mpsc::UnboundedReceiver<String>>>;

/// Wraps a receiver of input lines for sharing between seats.
pub fn input_lines(rx: mpsc::UnboundedReceiver<String>) -> InputLines {
    Arc::new(Mutex::new(rx))
}

/// Human player typing cells as text.
///
/// Accepts anything [`Position`] parses: a cell number, `row,col`, or a
/// name. Unreadable or occupied choices are reported through the event
/// channel and the player is asked again.
pub struct HumanPlayer {
    name: String,
    input: InputLines,
    events: mpsc::UnboundedSender<GameEvent>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(
        name: impl Into<String>,
        input: InputLines,
        events: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            name: name.into(),
            input,
            events,
        }
    }

    fn reject(&self, reason: String) -> Result<()> {
        warn!(player = %self.name, %reason, "Input rejected");
        self.events.send(GameEvent::InputRejected {
            player: self.name.clone(),
            reason,
        })?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, session: &GameSession) -> Result<Position> {
        loop {
            let line = self.input.lock().await.recv().await;
            let Some(line) = line else {
                anyhow::bail!("Input closed while waiting for {}", self.name);
            };
            debug!(player = %self.name, input = %line, "Received input");

            match line.parse::<Position>() {
                Ok(pos) if session.board().is_empty(pos) => return Ok(pos),
                Ok(pos) => self.reject(format!("{} is already taken", pos))?,
                Err(e) => self.reject(e.to_string())?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
