//! Move search.
//!
//! Contains:
//! - Terminal evaluation from a fixed side's perspective
//! - Minimax with alpha-beta pruning and depth-adjusted scores

pub mod evaluate;
pub mod minimax;

pub use evaluate::{LOSS_SCORE, WIN_SCORE, evaluate};
pub use minimax::{Candidate, SearchReport, analyze, find_best_move};
