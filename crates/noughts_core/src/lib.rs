//! Pure noughts and crosses game logic.
//!
//! This crate holds everything that does not need a runtime: the 3x3
//! [`Board`], its [`Position`]s, the rules that decide wins and draws, and a
//! minimax engine with alpha-beta pruning that finds the optimal move for
//! either side.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Board, Mark, find_best_move};
//!
//! let mut board: Board = "X../X../...".parse().unwrap();
//! let best = find_best_move(&mut board, Mark::Cross).unwrap();
//! assert_eq!((best.row(), best.col()), (2, 0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use action::Move;
pub use error::{BoardError, ParseBoardError, ParsePositionError, SearchError};
pub use position::Position;
pub use rules::{Line, check_winner, is_draw, is_full, winning_line};
pub use search::{SearchReport, analyze, evaluate, find_best_move};
pub use types::{Board, GameStatus, Mark, Square};
