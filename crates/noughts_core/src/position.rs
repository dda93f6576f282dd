//! The nine cells of the board.

use crate::error::ParsePositionError;
use crate::types::Board;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A cell on the board, addressed by `(row, col)` or by row-major index.
///
/// Variants are declared in row-major order, so iterating them (or
/// [`Position::ALL`]) visits cells the way the search does.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Row-major index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a position from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from `(row, col)`; `None` outside the grid.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Number shown for this cell on an empty board (1-9).
    pub fn cell_number(self) -> usize {
        self.to_index() + 1
    }

    /// Positions still open on `board`.
    #[instrument(skip(board), fields(board = %board.notation()))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        board.empty_cells().collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parses a cell number (`1`-`9`), a `row,col` or `row col` pair, or a label.
///
/// Labels match case-insensitively and ignore spaces, hyphens and
/// underscores, so `center`, `top left` and `Bottom-right` all work.
impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = || ParsePositionError(input.to_string());

        let parts: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        if let [row, col] = parts.as_slice()
            && let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
        {
            return Self::from_row_col(row, col).ok_or_else(invalid);
        }

        if let Ok(number) = input.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(Self::from_index)
                .ok_or_else(invalid);
        }

        let wanted = normalize(input);
        if wanted.is_empty() {
            return Err(invalid());
        }
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| normalize(pos.label()) == wanted)
            .ok_or_else(invalid)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_round_trip() {
        for pos in Position::ALL {
            assert_eq!(Position::from_row_col(pos.row(), pos.col()), Some(pos));
        }
        assert_eq!(Position::from_row_col(3, 0), None);
        assert_eq!(Position::from_row_col(0, 3), None);
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("5".parse::<Position>().unwrap(), Position::Center);
        assert_eq!("2,0".parse::<Position>().unwrap(), Position::BottomLeft);
        assert_eq!(" 0 2 ".parse::<Position>().unwrap(), Position::TopRight);
        assert_eq!("top left".parse::<Position>().unwrap(), Position::TopLeft);
        assert_eq!("Bottom-right".parse::<Position>().unwrap(), Position::BottomRight);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("0".parse::<Position>().is_err());
        assert!("10".parse::<Position>().is_err());
        assert!("3,1".parse::<Position>().is_err());
        assert!("left".parse::<Position>().is_err());
        assert!("".parse::<Position>().is_err());
    }
}
