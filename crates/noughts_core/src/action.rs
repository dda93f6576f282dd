//! Moves as first-class values.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
///
/// The search engine produces these; a driver applies each one exactly once
/// to its own board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// Target row (0-2).
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// Target column (0-2).
    pub fn col(&self) -> usize {
        self.position.col()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} ({}, {})",
            self.mark,
            self.position.label(),
            self.row(),
            self.col()
        )
    }
}
