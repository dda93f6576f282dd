//! One game's record: board, side to move, status and history.

use derive_more::{Display, From};
use noughts_core::{
    Board, BoardError, GameStatus, Line, Mark, Move, Position, SearchError, find_best_move,
};
use tracing::{debug, info, instrument, warn};

/// A single game of noughts and crosses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameSession {
    /// Starts a game with `opening` to move.
    #[instrument]
    pub fn new(opening: Mark) -> Self {
        info!(opening = %opening, "Starting new game");
        Self {
            board: Board::new(),
            to_move: opening,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to play next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Moves played so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The completed line, if the game was won.
    pub fn winning_line(&self) -> Option<(Mark, Line)> {
        self.board.winning_line()
    }

    /// Plays the side to move at `position`.
    ///
    /// # Errors
    ///
    /// [`SessionError::GameOver`] once the game has ended, or
    /// [`SessionError::Board`] if the square is taken.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, position: Position) -> Result<GameStatus, SessionError> {
        if self.is_over() {
            warn!("Move rejected: game is over");
            return Err(SessionError::GameOver);
        }

        let mark = self.to_move;
        self.board.place_at(position, mark)?;
        self.history.push(Move::new(mark, position));
        self.status = self.board.status();

        if self.is_over() {
            info!(status = %self.status, moves = self.history.len(), "Game over");
        } else {
            self.to_move = mark.opponent();
            debug!(next = %self.to_move, "Turn passed");
        }

        Ok(self.status)
    }

    /// Optimal move for the side to move, leaving the session untouched.
    ///
    /// # Errors
    ///
    /// [`SessionError::GameOver`] once the game has ended.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn suggest_move(&self) -> Result<Move, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }
        let mut scratch = self.board.clone();
        Ok(find_best_move(&mut scratch, self.to_move)?)
    }

    /// Discards the current game and starts a new one.
    #[instrument(skip(self))]
    pub fn reset(&mut self, opening: Mark) {
        *self = Self::new(opening);
    }
}

/// Error that can occur when playing a move in a session.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum SessionError {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    #[from(skip)]
    GameOver,

    /// The board rejected the move.
    #[display("{}", _0)]
    Board(BoardError),

    /// The engine could not produce a move.
    #[display("{}", _0)]
    Search(SearchError),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::GameOver => None,
            SessionError::Board(e) => Some(e),
            SessionError::Search(e) => Some(e),
        }
    }
}
