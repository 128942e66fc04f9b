//! Error types.
//!
//! Every rule violation is a value, never a panic. A rejected action leaves
//! the session untouched and is always safe to retry with corrected input.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why a move, pass or resignation was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Error)]
pub enum MoveError {
    /// Target cell is non-empty.
    #[display("Position already occupied")]
    Occupied,
    /// Coordinate outside `[0, board_size)`.
    #[display("Position is outside the board")]
    OutOfBounds,
    /// Go: placement leaves its own group without liberties and captures nothing.
    #[display("Suicide move is illegal (no liberties)")]
    Suicide,
    /// Go: the resulting position repeats the one before the opponent's last move.
    #[display("Ko rule: cannot repeat the previous board position immediately")]
    KoViolation,
    /// Any mutating action after the game concluded.
    #[display("Game is over")]
    GameOver,
    /// Reversi: the player to move has no legal placement.
    #[display("No legal move available")]
    NoLegalMove,
    /// Reversi: the placement flanks no opponent run.
    #[display("Move does not flank any opponent discs")]
    NoFlank,
    /// A pass named a player who is not to move.
    #[display("It is not that player's turn")]
    NotYourTurn,
    /// Reversi: passing is only allowed without a legal placement.
    #[display("A legal move exists, passing is not allowed")]
    MustPlay,
}

impl MoveError {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            MoveError::Occupied => "OCCUPIED",
            MoveError::OutOfBounds => "OUT_OF_BOUNDS",
            MoveError::Suicide => "SUICIDE",
            MoveError::KoViolation => "KO_VIOLATION",
            MoveError::GameOver => "GAME_OVER",
            MoveError::NoLegalMove => "NO_LEGAL_MOVE",
            MoveError::NoFlank => "NO_FLANK",
            MoveError::NotYourTurn => "NOT_YOUR_TURN",
            MoveError::MustPlay => "MUST_PLAY",
        }
    }

    /// The `{code, message}` pair handed to collaborators.
    #[must_use]
    pub fn rejection(self) -> Rejection {
        Rejection {
            code: self.code().to_string(),
            message: self.to_string(),
        }
    }
}

/// Serializable form of a rejected action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub code: String,
    pub message: String,
}

/// Invalid game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("Board size {size} is outside {min}..={max}")]
    BoardSizeOutOfRange { size: usize, min: usize, max: usize },
    #[display("Reversi is played on an 8x8 board, got {size}")]
    ReversiBoardSize { size: usize },
}

/// Rows that do not form a square matrix.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum GridError {
    #[display("Grid has no rows")]
    Empty,
    #[display("Row {row} has {found} cells, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Failure to encode or decode a saved game.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum CodecError {
    #[display("Binary codec error: {message}")]
    Binary { message: String },
    #[display("JSON codec error: {message}")]
    Json { message: String },
}

impl From<bincode::Error> for CodecError {
    fn from(err: bincode::Error) -> Self {
        CodecError::Binary {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::Json {
            message: err.to_string(),
        }
    }
}
