//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`](crate::Board): which line is complete,
//! whether the board is full, and whether the game is drawn. The board's
//! query methods delegate here.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner, winning_line};
