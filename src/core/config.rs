//! Game configuration types.
//!
//! A `GameConfig` is validated once at construction and is immutable input to
//! session creation. It fixes the game type (and therefore the active rules
//! engine) and the board size for the lifetime of a session.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::{Player, PlayerMap};

/// Smallest supported board.
pub const MIN_BOARD_SIZE: usize = 8;
/// Largest supported board.
pub const MAX_BOARD_SIZE: usize = 19;
/// Board size used by `GameConfig::default()`.
pub const DEFAULT_BOARD_SIZE: usize = 15;
/// Reversi is always played on 8x8.
pub const REVERSI_BOARD_SIZE: usize = 8;

/// Which game a session plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameType {
    Go,
    Gomoku,
    Reversi,
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameType::Go => "GO",
            GameType::Gomoku => "GOMOKU",
            GameType::Reversi => "REVERSI",
        };
        f.write_str(name)
    }
}

/// Who sits in a seat. The core stores this but never interprets it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatKind {
    #[default]
    Human,
    Ai,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    board_size: usize,
    game_type: GameType,
    seats: PlayerMap<SeatKind>,
}

impl GameConfig {
    /// Create a configuration with two human seats.
    ///
    /// Board size must be within `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`, and exactly
    /// `REVERSI_BOARD_SIZE` for Reversi.
    pub fn new(game_type: GameType, board_size: usize) -> Result<Self, ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(ConfigError::BoardSizeOutOfRange {
                size: board_size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        if game_type == GameType::Reversi && board_size != REVERSI_BOARD_SIZE {
            return Err(ConfigError::ReversiBoardSize { size: board_size });
        }

        Ok(Self {
            board_size,
            game_type,
            seats: PlayerMap::default(),
        })
    }

    /// Reversi on its fixed 8x8 board.
    #[must_use]
    pub fn reversi() -> Self {
        Self {
            board_size: REVERSI_BOARD_SIZE,
            game_type: GameType::Reversi,
            seats: PlayerMap::default(),
        }
    }

    /// Assign a seat.
    #[must_use]
    pub fn with_seat(mut self, player: Player, kind: SeatKind) -> Self {
        self.seats[player] = kind;
        self
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    #[must_use]
    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    #[must_use]
    pub fn seat(&self, player: Player) -> SeatKind {
        self.seats[player]
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            game_type: GameType::Go,
            seats: PlayerMap::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_config_bounds() {
        assert!(GameConfig::new(GameType::Go, 8).is_ok());
        assert!(GameConfig::new(GameType::Gomoku, 19).is_ok());
        assert_eq!(
            GameConfig::new(GameType::Go, 7),
            Err(ConfigError::BoardSizeOutOfRange { size: 7, min: 8, max: 19 })
        );
        assert!(GameConfig::new(GameType::Go, 20).is_err());
    }

    #[test]
    fn test_reversi_requires_eight() {
        assert_eq!(
            GameConfig::new(GameType::Reversi, 9),
            Err(ConfigError::ReversiBoardSize { size: 9 })
        );
        assert_eq!(GameConfig::new(GameType::Reversi, 8), Ok(GameConfig::reversi()));
    }

    #[test]
    fn test_seats_builder() {
        let config = GameConfig::new(GameType::Gomoku, 15)
            .unwrap()
            .with_seat(Player::White, SeatKind::Ai);

        assert_eq!(config.seat(Player::Black), SeatKind::Human);
        assert_eq!(config.seat(Player::White), SeatKind::Ai);
    }

    #[test]
    fn test_default() {
        let config = GameConfig::default();
        assert_eq!(config.game_type(), GameType::Go);
        assert_eq!(config.board_size(), DEFAULT_BOARD_SIZE);
    }

    #[test]
    fn test_serialization_shape() {
        let config = GameConfig::new(GameType::Gomoku, 15).unwrap();
        let json = serde_json::to_string(&config).unwrap();

        assert_eq!(
            json,
            r#"{"boardSize":15,"gameType":"GOMOKU","seats":{"BLACK":"HUMAN","WHITE":"HUMAN"}}"#
        );
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
