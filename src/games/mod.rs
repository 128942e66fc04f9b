//! Concrete rule engines.
//!
//! - `go`: captures, suicide, single-repeat ko
//! - `gomoku`: five in a row
//! - `reversi`: flanking flips and forced passes

pub mod go;
pub mod gomoku;
pub mod reversi;

pub use go::GoRules;
pub use gomoku::{has_five_in_row, GomokuRules, WIN_LENGTH};
pub use reversi::ReversiRules;
