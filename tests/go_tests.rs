//! Go played through a session: captures, ko, passes and undo.

use board_rules::core::{Cell, GameConfig, GameResult, GameType, MoveError, Player, Point};
use board_rules::session::GameSession;

fn go(size: usize) -> GameSession {
    GameSession::new(GameConfig::new(GameType::Go, size).unwrap())
}

/// Black at the center is surrounded while Black passes.
fn surround_center(session: &mut GameSession) {
    session.make_move(4, 4).unwrap();
    session.make_move(4, 3).unwrap();
    session.pass(Player::Black).unwrap();
    session.make_move(3, 4).unwrap();
    session.pass(Player::Black).unwrap();
    session.make_move(5, 4).unwrap();
    session.pass(Player::Black).unwrap();
    session.make_move(4, 5).unwrap();
}

/// Alternating plays that set up a ko at (1,1)/(2,1), ending with Black's capture.
fn set_up_ko(session: &mut GameSession) {
    for (x, y) in [(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2), (8, 8), (1, 1), (2, 1)] {
        session.make_move(x, y).unwrap();
    }
}

#[test]
fn test_surrounded_stone_is_captured() {
    let mut session = go(9);
    surround_center(&mut session);
    let state = session.state();

    assert_eq!(state.grid.get(Point::new(4, 4)), Some(Cell::Empty));
    assert_eq!(state.prisoners[Player::White], 1);
    assert_eq!(state.prisoners[Player::Black], 0);
    assert_eq!(state.stones_lost(Player::Black), 1);
    assert_eq!(state.current_player, Player::Black);
    assert_eq!(state.last_move, Some(Point::new(4, 5)));
    assert!(!state.is_game_over);
    assert!(state.valid_moves.is_empty());
}

#[test]
fn test_passes_keep_the_grid() {
    let mut session = go(9);
    session.make_move(4, 4).unwrap();
    let before = session.state().grid.clone();

    session.make_move(0, 0).unwrap();
    let state = session.pass(Player::Black).unwrap();

    assert_eq!(state.message, "BLACK passed.");
    assert_eq!(state.current_player, Player::White);
    assert_eq!(state.last_move, None);
    assert_eq!(state.history.len(), 4);
    assert_eq!(state.consecutive_passes(), 1);
    assert_ne!(state.grid, before);
    assert_eq!(state.history[2], state.history[3]);
}

#[test]
fn test_ko_retake_rejected_until_played_elsewhere() {
    let mut session = go(9);
    set_up_ko(&mut session);
    assert_eq!(session.state().prisoners[Player::Black], 1);
    assert!(!session.legal_moves().contains(&Point::new(1, 1)));

    let before = session.state().clone();
    assert_eq!(session.make_move(1, 1), Err(MoveError::KoViolation));
    assert_eq!(session.state(), &before);

    session.make_move(8, 0).unwrap();
    session.make_move(8, 1).unwrap();
    assert!(session.legal_moves().contains(&Point::new(1, 1)));

    let state = session.make_move(1, 1).unwrap();
    assert_eq!(state.grid.get(Point::new(2, 1)), Some(Cell::Empty));
    assert_eq!(state.prisoners[Player::White], 1);
}

#[test]
fn test_suicide_rejected_in_session() {
    let mut session = go(9);
    for (x, y) in [(8, 8), (1, 0), (8, 7), (0, 1)] {
        session.make_move(x, y).unwrap();
    }
    assert_eq!(session.current_player(), Player::Black);
    assert_eq!(session.make_move(0, 0), Err(MoveError::Suicide));
    assert_eq!(session.state().ply_count(), 4);
}

#[test]
fn test_two_passes_end_the_game() {
    let mut session = go(9);
    session.pass(Player::Black).unwrap();
    let state = session.pass(Player::White).unwrap();

    assert!(state.is_game_over);
    assert_eq!(state.winner, Some(GameResult::Draw));
    assert_eq!(state.message, "Game over. Draw.");
    assert_eq!(session.make_move(0, 0), Err(MoveError::GameOver));
    assert_eq!(session.pass(Player::Black), Err(MoveError::GameOver));
}

#[test]
fn test_more_captures_win_after_passes() {
    let mut session = go(9);
    surround_center(&mut session);
    session.pass(Player::Black).unwrap();
    let state = session.pass(Player::White).unwrap();

    assert_eq!(state.winner, Some(GameResult::Winner(Player::White)));
}

#[test]
fn test_passes_separated_by_a_move_do_not_end() {
    let mut session = go(9);
    session.pass(Player::Black).unwrap();
    session.make_move(3, 3).unwrap();
    let state = session.pass(Player::Black).unwrap();

    assert!(!state.is_game_over);
    assert_eq!(state.consecutive_passes(), 1);
}

#[test]
fn test_undo_restores_captured_stone_and_prisoners() {
    let mut session = go(9);
    surround_center(&mut session);

    let state = session.undo();

    assert_eq!(state.grid.get(Point::new(4, 4)), Some(Cell::Black));
    assert_eq!(state.prisoners[Player::White], 0);
    assert_eq!(state.current_player, Player::White);
    assert_eq!(state.last_move, None);
    assert_eq!(state.message, "Undo. WHITE's turn.");
    assert_eq!(state.history.len(), 8);
}

#[test]
fn test_undo_game_over_resumes_play() {
    let mut session = go(9);
    session.pass(Player::Black).unwrap();
    session.pass(Player::White).unwrap();

    let state = session.undo();

    assert!(!state.is_game_over);
    assert_eq!(state.winner, None);
    assert_eq!(state.current_player, Player::White);
    assert!(session.make_move(2, 2).is_ok());
}

#[test]
fn test_undo_to_opening_is_noop() {
    let mut session = go(9);
    session.make_move(2, 2).unwrap();
    session.undo();
    let opening = session.state().clone();

    assert_eq!(session.undo(), opening);
    assert_eq!(opening.history.len(), 1);
    assert_eq!(opening.current_player, Player::Black);
}
