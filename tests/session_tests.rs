//! Session lifecycle: resignation, rejection codes, persistence and rooms.

use board_rules::core::{
    Cell, GameConfig, GameResult, GameState, GameType, Grid, MoveError, Player, Point, SavedGame,
    SeatKind,
};
use board_rules::session::{GameSession, SessionArena};

fn played_go() -> GameSession {
    let mut session = GameSession::new(GameConfig::new(GameType::Go, 9).unwrap());
    for (x, y) in [(4, 4), (4, 3), (3, 4), (3, 3)] {
        session.make_move(x, y).unwrap();
    }
    session.pass(Player::Black).unwrap();
    session
}

#[test]
fn test_resign_out_of_turn() {
    let mut session = GameSession::new(GameConfig::new(GameType::Gomoku, 15).unwrap());
    session.make_move(7, 7).unwrap();

    let state = session.resign(Player::Black).unwrap();

    assert!(state.is_game_over);
    assert_eq!(state.winner, Some(GameResult::Winner(Player::White)));
    assert_eq!(state.message, "BLACK resigned. WHITE wins!");
    assert!(state.valid_moves.is_empty());
    assert_eq!(session.make_move(0, 0), Err(MoveError::GameOver));
    assert_eq!(session.resign(Player::White), Err(MoveError::GameOver));
}

#[test]
fn test_rejection_codes() {
    let mut session = GameSession::new(GameConfig::new(GameType::Go, 9).unwrap());

    let err = session.make_move(9, 9).unwrap_err();
    assert_eq!(err.code(), "OUT_OF_BOUNDS");
    assert_eq!(err.rejection().code, "OUT_OF_BOUNDS");

    session.make_move(0, 0).unwrap();
    assert_eq!(session.make_move(0, 0).unwrap_err().code(), "OCCUPIED");
    assert_eq!(session.pass(Player::Black).unwrap_err().code(), "NOT_YOUR_TURN");
}

#[test]
fn test_ai_seat_reporting() {
    let config = GameConfig::new(GameType::Go, 9)
        .unwrap()
        .with_seat(Player::Black, SeatKind::Ai);
    let mut session = GameSession::new(config);

    assert!(session.is_ai_turn());
    session.make_move(4, 4).unwrap();
    assert!(!session.is_ai_turn());
    session.resign(Player::White).unwrap();
    assert!(!session.is_ai_turn());

    // Resigning records no ply, so undo also takes back the last move.
    let state = session.undo();
    assert_eq!(state.ply_count(), 0);
    assert!(session.is_ai_turn());
}

#[test]
fn test_json_round_trip() {
    let session = played_go();
    let saved = session.save(1_700_000_000_000);
    let json = saved.to_json().unwrap();

    assert!(json.contains("\"gameType\":\"GO\""));
    assert!(json.contains("\"currentPlayer\":\"WHITE\""));
    assert!(json.contains("\"timestamp\":1700000000000"));

    let mut restored = GameSession::default();
    let state = restored.load_saved(SavedGame::from_json(&json).unwrap());

    assert_eq!(&state, session.state());
    assert_eq!(restored.config(), session.config());
    assert_eq!(restored.save(1_700_000_000_000), saved);
}

#[test]
fn test_binary_round_trip() {
    let session = played_go();
    let saved = session.save(7);
    let bytes = saved.to_bytes().unwrap();

    assert_eq!(SavedGame::from_bytes(&bytes).unwrap(), saved);
}

#[test]
fn test_loaded_session_keeps_playing() {
    let original = played_go();
    let mut restored = GameSession::default();
    restored.load_saved(original.save(0));

    let state = restored.make_move(5, 5).unwrap();
    assert_eq!(state.current_player, Player::Black);
    assert_eq!(state.ply_count(), 6);

    // Two passes in a row after loading still end the game.
    restored.pass(Player::Black).unwrap();
    let state = restored.pass(Player::White).unwrap();
    assert!(state.is_game_over);
}

#[test]
fn test_loaded_turn_order_is_respected() {
    let config = GameConfig::new(GameType::Go, 9).unwrap();
    let mut state = GameState::new(&config, Grid::empty(9));
    state.current_player = Player::White;
    let mut session = GameSession::default();
    session.load(config, state);

    let state = session.make_move(4, 4).unwrap();
    assert_eq!(state.grid.get(Point::new(4, 4)), Some(Cell::White));
    assert_eq!(state.current_player, Player::Black);

    let state = session.pass(Player::Black).unwrap();
    assert_eq!(state.current_player, Player::White);

    assert_eq!(session.undo().current_player, Player::Black);
    let state = session.undo();
    assert_eq!(state.current_player, Player::White);
    assert_eq!(state.history.len(), 1);
}

#[test]
fn test_corrupt_save_rejected() {
    assert!(SavedGame::from_json("{\"config\":1}").is_err());
    assert!(SavedGame::from_bytes(&[1, 2, 3]).is_err());
}

#[test]
fn test_arena_rooms_play_independently() {
    let mut arena = SessionArena::new();
    arena.create("go", GameConfig::new(GameType::Go, 9).unwrap());
    arena.create("five", GameConfig::new(GameType::Gomoku, 15).unwrap());

    arena.get_mut("go").unwrap().make_move(4, 4).unwrap();
    arena.get_mut("go").unwrap().make_move(4, 5).unwrap();
    arena.get_mut("five").unwrap().resign(Player::White).unwrap();

    assert_eq!(arena.get("go").unwrap().state().ply_count(), 2);
    assert!(!arena.get("go").unwrap().state().is_game_over);
    assert!(arena.get("five").unwrap().state().is_game_over);

    let mut rooms: Vec<&str> = arena.rooms().collect();
    rooms.sort_unstable();
    assert_eq!(rooms, vec!["five", "go"]);
}
