//! Game state: the externally visible session snapshot.
//!
//! ## GameState
//!
//! Everything a collaborator needs to render, persist or resume a game:
//! - Current grid and the full history of grids (one per ply)
//! - Player to move, prisoners, last move
//! - Game-over flag, result, status message
//! - Currently legal coordinates (Gomoku and Reversi)
//!
//! History is an `im::Vector<Grid>`, so handing a snapshot out is O(1) and
//! never exposes storage a later action could mutate.
//!
//! ## SavedGame
//!
//! Persistence envelope (`config`, `state`, `timestamp`) with binary and JSON
//! encodings. Save → load → save reproduces the same structure.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::{GameConfig, GameType};
use super::error::CodecError;
use super::grid::{Cell, Grid, Point};
use super::player::{Player, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ResultRepr", into = "ResultRepr")]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Result by majority of a per-player count; equal counts draw.
    #[must_use]
    pub fn by_count(black: usize, white: usize) -> Self {
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::Black),
            std::cmp::Ordering::Less => GameResult::Winner(Player::White),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(player) => write!(f, "{player} wins!"),
            GameResult::Draw => f.write_str("Draw."),
        }
    }
}

/// Wire form of `GameResult`: `"BLACK" | "WHITE" | "DRAW"`.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum ResultRepr {
    Black,
    White,
    Draw,
}

impl From<ResultRepr> for GameResult {
    fn from(repr: ResultRepr) -> Self {
        match repr {
            ResultRepr::Black => GameResult::Winner(Player::Black),
            ResultRepr::White => GameResult::Winner(Player::White),
            ResultRepr::Draw => GameResult::Draw,
        }
    }
}

impl From<GameResult> for ResultRepr {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::Winner(Player::Black) => ResultRepr::Black,
            GameResult::Winner(Player::White) => ResultRepr::White,
            GameResult::Draw => ResultRepr::Draw,
        }
    }
}

/// Externally visible session snapshot.
///
/// Fields are public so collaborators (and trusted loaders) can build or
/// inspect snapshots directly; `GameSession` is the only component that
/// advances one according to the rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Current grid (always equal to the last history entry).
    pub grid: Grid,

    /// Player to move.
    pub current_player: Player,

    /// One grid per ply, starting with the opening position.
    pub history: Vector<Grid>,

    /// Stones captured BY each player (Go only).
    pub prisoners: PlayerMap<u32>,

    pub is_game_over: bool,

    /// `None` while the game continues.
    pub winner: Option<GameResult>,

    /// Human-readable status line.
    pub message: String,

    /// Coordinate of the last placement; cleared by passes and undo.
    pub last_move: Option<Point>,

    pub game_type: GameType,

    pub board_size: usize,

    /// Legal coordinates for the player to move (empty for Go and after the end).
    pub valid_moves: Vec<Point>,
}

impl GameState {
    /// Fresh state on the given opening grid, Black to move.
    #[must_use]
    pub fn new(config: &GameConfig, opening: Grid) -> Self {
        let current_player = Player::Black;
        Self {
            grid: opening.clone(),
            current_player,
            history: Vector::unit(opening),
            prisoners: PlayerMap::default(),
            is_game_over: false,
            winner: None,
            message: format!("Game started. {current_player}'s turn."),
            last_move: None,
            game_type: config.game_type(),
            board_size: config.board_size(),
            valid_moves: Vec::new(),
        }
    }

    /// Number of plies (moves and passes) recorded.
    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    /// Stones `player` has lost to captures.
    #[must_use]
    pub fn stones_lost(&self, player: Player) -> u32 {
        self.prisoners[player.opponent()]
    }

    /// Number of trailing plies that were passes.
    ///
    /// A pass records an unchanged grid, while every placement changes at
    /// least the placed cell, so passes are exactly the repeated entries.
    #[must_use]
    pub fn consecutive_passes(&self) -> usize {
        self.history
            .iter()
            .rev()
            .zip(self.history.iter().rev().skip(1))
            .take_while(|(later, earlier)| later == earlier)
            .count()
    }

    /// Discs (or stones) each player has on the current grid.
    #[must_use]
    pub fn disc_counts(&self) -> PlayerMap<usize> {
        PlayerMap::new(|player| self.grid.count(Cell::from(player)))
    }
}

/// Persistence envelope for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub config: GameConfig,
    pub state: GameState,
    /// Caller-supplied save time (milliseconds since the epoch by convention).
    pub timestamp: u64,
}

impl SavedGame {
    #[must_use]
    pub fn new(config: GameConfig, state: GameState, timestamp: u64) -> Self {
        Self {
            config,
            state,
            timestamp,
        }
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// JSON encoding in the collaborator wire shape.
    pub fn to_json(&self) -> Result<String, CodecError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CodecError> {
        Ok(serde_json::from_str(json)?)
    }
}
