//! Core domain types for noughts and crosses.

use crate::error::{BoardError, ParseBoardError};
use crate::position::Position;
use crate::rules::{self, Line};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Cross, player one (opens unless the computer was asked to).
    #[display("X")]
    #[strum(serialize = "x", serialize = "cross")]
    Cross,
    /// Nought, player two.
    #[display("O")]
    #[strum(serialize = "o", serialize = "nought")]
    Nought,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Cross => Mark::Nought,
            Mark::Nought => Mark::Cross,
        }
    }

    /// Full name of the mark, for messages.
    pub fn name(self) -> &'static str {
        match self {
            Mark::Cross => "Cross",
            Mark::Nought => "Nought",
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Mark::Cross) => 'X',
            Square::Occupied(Mark::Nought) => 'O',
        }
    }
}

/// 3x3 noughts and crosses board.
///
/// The board only changes by placing a mark into an empty square or by
/// clearing a square back to empty. The search engine relies on the second
/// form to retract the moves it simulates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] unless both coordinates are in `0..3`.
    pub fn square(&self, row: usize, col: usize) -> Result<Square, BoardError> {
        let pos = Position::from_row_col(row, col).ok_or(BoardError::OutOfRange { row, col })?;
        Ok(self.get(pos))
    }

    /// Checks if the square at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] for coordinates outside the grid and
    /// [`BoardError::SquareOccupied`] if the square already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), BoardError> {
        let pos = Position::from_row_col(row, col).ok_or(BoardError::OutOfRange { row, col })?;
        self.place_at(pos, mark)
    }

    /// Places `mark` at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SquareOccupied`] if the square already holds a mark.
    pub fn place_at(&mut self, pos: Position, mark: Mark) -> Result<(), BoardError> {
        if !self.is_empty(pos) {
            return Err(BoardError::SquareOccupied(pos));
        }
        self.set(pos, Square::Occupied(mark));
        Ok(())
    }

    /// Resets the square at `(row, col)` to empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] for coordinates outside the grid.
    #[instrument(skip(self))]
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        let pos = Position::from_row_col(row, col).ok_or(BoardError::OutOfRange { row, col })?;
        self.set(pos, Square::Empty);
        Ok(())
    }

    /// Unchecked write used by the search to place and retract marks.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// True iff no square is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Mark of the first completed line, scanning rows, columns, then diagonals.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// Like [`Board::winner`], also returning the completed line.
    pub fn winning_line(&self) -> Option<(Mark, Line)> {
        rules::winning_line(self)
    }

    /// Empty positions in row-major order.
    ///
    /// The iterator borrows the board, so every call sees its current state.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(move |pos| self.is_empty(*pos))
    }

    /// Outcome of the position on this board.
    pub fn status(&self) -> GameStatus {
        if let Some(mark) = self.winner() {
            GameStatus::Won(mark)
        } else if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Compact notation: rows of `X`, `O` and `.` separated by `/`.
    pub fn notation(&self) -> String {
        let mut result = String::with_capacity(11);
        for (idx, square) in self.squares.iter().enumerate() {
            if idx > 0 && idx % 3 == 0 {
                result.push('/');
            }
            result.push(square.symbol());
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-readable grid; empty squares show their cell number (1-9).
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '/' && *c != '|') {
            let square = match c {
                'X' | 'x' => Square::Occupied(Mark::Cross),
                'O' | 'o' => Square::Occupied(Mark::Nought),
                '.' | '-' | '_' => Square::Empty,
                other => return Err(ParseBoardError::InvalidSymbol(other)),
            };
            if count < 9 {
                board.squares[count] = square;
            }
            count += 1;
        }
        if count != 9 {
            return Err(ParseBoardError::WrongLength(count));
        }
        Ok(board)
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("in progress")]
    InProgress,
    /// Game ended in a win.
    #[display("{} wins", _0.name())]
    Won(Mark),
    /// Game ended in a draw.
    #[display("draw")]
    Draw,
}

impl GameStatus {
    /// True once the game has been won or drawn.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_clear() {
        let mut board = Board::new();
        board.place(1, 2, Mark::Nought).unwrap();
        assert_eq!(board.get(Position::MiddleRight), Square::Occupied(Mark::Nought));
        board.clear(1, 2).unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_occupied_square() {
        let mut board = Board::new();
        board.place(0, 0, Mark::Cross).unwrap();
        assert_eq!(
            board.place(0, 0, Mark::Nought),
            Err(BoardError::SquareOccupied(Position::TopLeft))
        );
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::Cross));
    }

    #[test]
    fn test_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.place(3, 0, Mark::Cross),
            Err(BoardError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(board.clear(0, 7), Err(BoardError::OutOfRange { row: 0, col: 7 }));
        assert!(board.square(2, 3).is_err());
    }

    #[test]
    fn test_notation_parses_back() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.notation(), "XO./.X./..O");
        assert_eq!(board.count(Mark::Cross), 2);
        assert_eq!(board.count(Mark::Nought), 2);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("XO?......".parse::<Board>(), Err(ParseBoardError::InvalidSymbol('?')));
        assert_eq!("XO".parse::<Board>(), Err(ParseBoardError::WrongLength(2)));
        assert_eq!("..........".parse::<Board>(), Err(ParseBoardError::WrongLength(10)));
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board: Board = "X../.O./...".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_mark_from_str() {
        assert_eq!("x".parse::<Mark>().unwrap(), Mark::Cross);
        assert_eq!("Nought".parse::<Mark>().unwrap(), Mark::Nought);
        assert!("z".parse::<Mark>().is_err());
    }

    #[test]
    fn test_status() {
        assert_eq!(Board::new().status(), GameStatus::InProgress);
        let won: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(won.status(), GameStatus::Won(Mark::Cross));
        let drawn: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(drawn.status(), GameStatus::Draw);
        assert!(drawn.status().is_over());
    }
}
