//! # board-rules
//!
//! Rule validation and game-session state for Go, Gomoku and Reversi.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Engines validate a placement against a grid and return
//!    a new grid or a typed rejection. They never mutate their input.
//!
//! 2. **One Source of Truth**: `GameSession` owns the state and is the only
//!    thing that advances it. Every accepted action yields a fresh snapshot.
//!
//! 3. **History Is the Clock**: The player to move, pass streaks and undo are
//!    all derived from the grid history, one entry per ply.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Grids and history use `im` vectors, so
//!   snapshots and undo share structure instead of copying boards.
//!
//! - **Closed Game Set**: `Rules` is an enum over the three engines; adding a
//!   game is a compile-time change, not a registry lookup.
//!
//! ## Modules
//!
//! - `core`: Players, grids, configuration, state, errors
//! - `rules`: `RulesEngine` trait, engine selection, group analysis
//! - `games`: Go, Gomoku and Reversi engines
//! - `session`: Game lifecycle and per-room sessions

pub mod core;
pub mod rules;
pub mod games;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerMap,
    Cell, Grid, Point,
    GameConfig, GameType, SeatKind,
    GameResult, GameState, SavedGame,
    CodecError, ConfigError, GridError, MoveError, Rejection,
};

pub use crate::rules::{legal_moves, find_group, Group, MoveContext, Mutation, Position, Rules, RulesEngine};

pub use crate::games::{GoRules, GomokuRules, ReversiRules};

pub use crate::session::{GameSession, RoomId, SessionArena};
