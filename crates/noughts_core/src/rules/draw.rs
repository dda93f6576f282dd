//! Draw detection logic.

use super::win::check_winner;
use crate::{Board, Square};

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place_at(Position::Center, Mark::Cross).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board: Board = "XXX/XXX/XXX".parse().unwrap();
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = "XXX/OOX/OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
