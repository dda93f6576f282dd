//! Win detection logic.

use crate::{Board, Mark, Position};

/// Three positions that win when they hold the same mark.
pub type Line = [Position; 3];

/// The 8 lines in scan order: rows, columns, the falling diagonal, the
/// rising diagonal.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::BottomLeft, Position::Center, Position::TopRight],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first uniform line in [`LINES`] order, `None`
/// otherwise. A legal game never has two winners, so the order only matters
/// for determinism.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

/// Returns the winning mark together with the line it completed.
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let mark = board.get(a).mark()?;
        (board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark))
            .then_some((mark, line))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::Cross));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "XO./XO./.O.".parse().unwrap();
        assert_eq!(
            winning_line(&board),
            Some((
                Mark::Nought,
                [Position::TopCenter, Position::Center, Position::BottomCenter]
            ))
        );
    }

    #[test]
    fn test_winner_rising_diagonal() {
        let board: Board = "X.O/XO./O.X".parse().unwrap();
        assert_eq!(
            winning_line(&board),
            Some((
                Mark::Nought,
                [Position::BottomLeft, Position::Center, Position::TopRight]
            ))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XOX/.../...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
