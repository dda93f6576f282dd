//! Computer player backed by the minimax engine.

use super::Player;
use crate::session::GameSession;
use anyhow::Result;
use noughts_core::Position;
use tokio::time::{Duration, sleep};
use tracing::debug;

/// Perfect-play computer opponent.
pub struct ComputerPlayer {
    name: String,
    delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player that pauses `delay` before each move.
    pub fn new(name: impl Into<String>, delay: Duration) -> Self {
        Self {
            name: name.into(),
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    async fn get_move(&mut self, session: &GameSession) -> Result<Position> {
        debug!(ai = %self.name, "Computer making move");

        // Pacing only; the search itself is instant.
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let mv = session.suggest_move()?;
        debug!(ai = %self.name, position = %mv.position, "Computer chose position");
        Ok(mv.position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
