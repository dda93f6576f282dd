//! Tests for game sessions.

use noughts::{GameSession, GameStatus, Mark, Position, SessionError};
use noughts_core::BoardError;

fn play_all(session: &mut GameSession, positions: &[Position]) -> GameStatus {
    let mut status = session.status();
    for pos in positions {
        status = session.play(*pos).unwrap();
    }
    status
}

#[test]
fn test_new_session() {
    let session = GameSession::new(Mark::Cross);
    assert_eq!(session.to_move(), Mark::Cross);
    assert_eq!(session.status(), GameStatus::InProgress);
    assert!(session.history().is_empty());
    assert_eq!(session.board().empty_cells().count(), 9);
}

#[test]
fn test_alternating_players() {
    let mut session = GameSession::new(Mark::Nought);
    session.play(Position::Center).unwrap();
    assert_eq!(session.to_move(), Mark::Cross);
    session.play(Position::TopLeft).unwrap();
    assert_eq!(session.to_move(), Mark::Nought);

    let marks: Vec<Mark> = session.history().iter().map(|m| m.mark).collect();
    assert_eq!(marks, vec![Mark::Nought, Mark::Cross]);
}

#[test]
fn test_occupied_square_rejected() {
    let mut session = GameSession::new(Mark::Cross);
    session.play(Position::Center).unwrap();

    let result = session.play(Position::Center);
    assert_eq!(
        result,
        Err(SessionError::Board(BoardError::SquareOccupied(Position::Center)))
    );
    assert!(result.unwrap_err().to_string().contains("occupied"));
    assert_eq!(session.to_move(), Mark::Nought);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_win_ends_game() {
    let mut session = GameSession::new(Mark::Cross);
    let status = play_all(
        &mut session,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ],
    );

    assert_eq!(status, GameStatus::Won(Mark::Cross));
    assert!(session.is_over());
    let (mark, line) = session.winning_line().unwrap();
    assert_eq!(mark, Mark::Cross);
    assert_eq!(line, [Position::TopLeft, Position::TopCenter, Position::TopRight]);

    assert_eq!(session.play(Position::BottomRight), Err(SessionError::GameOver));
    assert_eq!(session.suggest_move(), Err(SessionError::GameOver));
}

#[test]
fn test_draw_ends_game() {
    let mut session = GameSession::new(Mark::Cross);
    // X O X / X O O / O X X
    let status = play_all(
        &mut session,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ],
    );

    assert_eq!(status, GameStatus::Draw);
    assert_eq!(session.winning_line(), None);
}

#[test]
fn test_suggest_move_leaves_session_untouched() {
    let mut session = GameSession::new(Mark::Cross);
    play_all(&mut session, &[Position::TopLeft, Position::Center, Position::MiddleLeft]);
    let before = session.clone();

    let suggestion = session.suggest_move().unwrap();
    assert_eq!(suggestion.mark, Mark::Nought);
    assert_eq!(suggestion.position, Position::BottomLeft);
    assert_eq!(session, before);
}

#[test]
fn test_reset() {
    let mut session = GameSession::new(Mark::Cross);
    session.play(Position::Center).unwrap();
    session.reset(Mark::Nought);
    assert_eq!(session, GameSession::new(Mark::Nought));
}
