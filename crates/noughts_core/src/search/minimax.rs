//! Minimax search with alpha-beta pruning.
//!
//! The whole game tree of a 3x3 board is small enough to search to the end,
//! so there is no depth limit, no heuristic and no move ordering beyond
//! row-major order. What the search does add:
//!
//! - Depth-adjusted scores: a win found `d` plies below the root child scores
//!   `WIN_SCORE - d` and a loss `LOSS_SCORE + d`, so the engine takes the
//!   fastest win and delays a forced loss as long as possible.
//! - Alpha-beta cutoffs inside each root child's subtree.
//! - In-place traversal: candidate marks are placed on the caller's board and
//!   cleared again before the next sibling, so memory stays O(depth) and the
//!   board is unchanged when the search returns.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Board, Mark, Position};
//! use noughts_core::search::analyze;
//!
//! // Nought threatens the top row; Cross has no win of its own.
//! let mut board: Board = "OO./.X./..X".parse().unwrap();
//! let report = analyze(&mut board, Mark::Cross).unwrap();
//! assert_eq!(report.best_move.position, Position::TopRight);
//! assert_eq!(board.notation(), "OO./.X./..X");
//! ```

use super::evaluate::{LOSS_SCORE, WIN_SCORE, evaluate};
use crate::{Board, Mark, Move, Position, SearchError, Square};
use serde::Serialize;
use tracing::{debug, instrument, trace};

/// Bound wider than any reachable score.
const INF: i32 = 1000;

/// Outcome of a root search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// Move chosen for the searching side.
    pub best_move: Move,
    /// Depth-adjusted score of `best_move`.
    pub score: i32,
    /// Score of every legal move, in row-major order.
    pub candidates: Vec<Candidate>,
    /// Nodes visited below the root.
    pub nodes: u64,
}

/// One root move and its exact score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Cell the searching side would play.
    pub position: Position,
    /// Score with both sides playing perfectly afterwards.
    pub score: i32,
}

/// Finds the optimal move for `side`.
///
/// Ties are broken by row-major order: of equally scored moves the first
/// one wins, so the same board always yields the same move.
///
/// # Errors
///
/// Returns [`SearchError::NoMovesAvailable`] if the board is full.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn find_best_move(board: &mut Board, side: Mark) -> Result<Move, SearchError> {
    analyze(board, side).map(|report| report.best_move)
}

/// Searches every legal move for `side` and reports their scores.
///
/// # Errors
///
/// Returns [`SearchError::NoMovesAvailable`] if the board is full.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn analyze(board: &mut Board, side: Mark) -> Result<SearchReport, SearchError> {
    let mut search = Search {
        board,
        side,
        nodes: 0,
    };
    let mut candidates = Vec::with_capacity(9);
    let mut best: Option<Candidate> = None;

    for position in Position::ALL {
        if !search.board.is_empty(position) {
            continue;
        }

        search.board.set(position, Square::Occupied(side));
        let score = search.minimax(0, false, -INF, INF);
        search.board.set(position, Square::Empty);

        trace!(%position, score, "Scored root move");
        let candidate = Candidate { position, score };
        candidates.push(candidate);
        if best.is_none_or(|b| score > b.score) {
            best = Some(candidate);
        }
    }

    let best = best.ok_or(SearchError::NoMovesAvailable)?;
    debug!(
        position = %best.position,
        score = best.score,
        nodes = search.nodes,
        "Search complete"
    );

    Ok(SearchReport {
        best_move: Move::new(side, best.position),
        score: best.score,
        candidates,
        nodes: search.nodes,
    })
}

/// Per-call search state. The searching side stays fixed for the whole
/// traversal; only the maximizing flag alternates.
struct Search<'a> {
    board: &'a mut Board,
    side: Mark,
    nodes: u64,
}

impl Search<'_> {
    fn minimax(&mut self, depth: i32, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        match evaluate(self.board, self.side) {
            WIN_SCORE => return WIN_SCORE - depth,
            LOSS_SCORE => return LOSS_SCORE + depth,
            _ => {}
        }
        if self.board.is_full() {
            return 0;
        }

        let mark = if maximizing {
            self.side
        } else {
            self.side.opponent()
        };
        let mut best = if maximizing { -INF } else { INF };

        for position in Position::ALL {
            if !self.board.is_empty(position) {
                continue;
            }

            self.board.set(position, Square::Occupied(mark));
            let score = self.minimax(depth + 1, !maximizing, alpha, beta);
            self.board.set(position, Square::Empty);

            if maximizing {
                best = best.max(score);
                if best >= beta {
                    return best;
                }
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                if best <= alpha {
                    return best;
                }
                beta = beta.min(best);
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_board_has_no_move() {
        let mut board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(
            find_best_move(&mut board, Mark::Cross),
            Err(SearchError::NoMovesAvailable)
        );
    }

    #[test]
    fn test_single_empty_square() {
        let mut board: Board = "XOX/XOO/OX.".parse().unwrap();
        let best = find_best_move(&mut board, Mark::Cross).unwrap();
        assert_eq!(best.position, Position::BottomRight);
    }

    #[test]
    fn test_immediate_win_scores_full() {
        let mut board: Board = "X../X../...".parse().unwrap();
        let report = analyze(&mut board, Mark::Cross).unwrap();
        assert_eq!(report.best_move.position, Position::BottomLeft);
        assert_eq!(report.score, WIN_SCORE);
    }

    #[test]
    fn test_candidates_cover_every_empty_square() {
        let mut board: Board = "X../.O./...".parse().unwrap();
        let report = analyze(&mut board, Mark::Cross).unwrap();
        let positions: Vec<_> = report.candidates.iter().map(|c| c.position).collect();
        assert_eq!(positions, Position::valid_moves(&board));
        assert!(report.nodes > 0);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut board = Board::new();
        let report = analyze(&mut board, Mark::Cross).unwrap();
        assert_eq!(report.score, 0);
        assert!(report.candidates.iter().all(|c| c.score == 0));
    }
}
