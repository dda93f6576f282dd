//! Terminal evaluation.

use crate::rules::check_winner;
use crate::{Board, Mark};

/// Score of a board won by the side being evaluated for.
pub const WIN_SCORE: i32 = 10;

/// Score of a board won by the opponent.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Scores `board` from `side`'s point of view.
///
/// [`WIN_SCORE`] if `side` has completed a line, [`LOSS_SCORE`] if the
/// opponent has, 0 otherwise (including a drawn full board). The search
/// adjusts these by depth; this function never does.
pub fn evaluate(board: &Board, side: Mark) -> i32 {
    match check_winner(board) {
        Some(winner) if winner == side => WIN_SCORE,
        Some(_) => LOSS_SCORE,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perspective() {
        let board: Board = "OOO/XX./X..".parse().unwrap();
        assert_eq!(evaluate(&board, Mark::Nought), WIN_SCORE);
        assert_eq!(evaluate(&board, Mark::Cross), LOSS_SCORE);
    }

    #[test]
    fn test_no_winner_scores_zero() {
        assert_eq!(evaluate(&Board::new(), Mark::Cross), 0);
        let drawn: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(evaluate(&drawn, Mark::Nought), 0);
    }
}
