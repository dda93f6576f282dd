//! Error types for board operations, parsing and search.

use crate::position::Position;

/// Misuse of the board: a caller asked for something the rules forbid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Coordinates outside the 3x3 grid.
    #[display("Coordinates ({}, {}) are outside the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for BoardError {}

/// Text that does not describe a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// A character other than `X`, `O`, `.`, `-`, `_`, `/`, `|` or whitespace.
    #[display("Invalid board symbol {:?}", _0)]
    InvalidSymbol(char),

    /// The text held this many squares instead of 9.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for ParseBoardError {}

/// Text that does not name a cell.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid position {:?}: use a cell number 1-9, \"row,col\" or a name like \"center\"", _0)]
pub struct ParsePositionError(pub String);

impl std::error::Error for ParsePositionError {}

/// Search invoked where no move can be made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board has no empty square.
    #[display("No moves available: the board is full")]
    NoMovesAvailable,
}

impl std::error::Error for SearchError {}
