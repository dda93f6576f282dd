//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, InputLines, input_lines};

use crate::session::GameSession;
use anyhow::Result;
use noughts_core::Position;

/// A seat at the board that can choose moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Chooses a move for the side to move in `session`.
    ///
    /// The returned position must be empty on the session's board.
    async fn get_move(&mut self, session: &GameSession) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
