//! Core types: players, grids, configuration, state, errors.
//!
//! This module contains the game-agnostic building blocks. Concrete games in
//! `games` only read and produce these values.

pub mod player;
pub mod grid;
pub mod config;
pub mod state;
pub mod error;

pub use player::{Player, PlayerMap};
pub use grid::{Cell, Grid, Neighbors, Point};
pub use config::{
    GameConfig, GameType, SeatKind, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
    REVERSI_BOARD_SIZE,
};
pub use state::{GameResult, GameState, SavedGame};
pub use error::{CodecError, ConfigError, GridError, MoveError, Rejection};
