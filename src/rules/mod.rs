//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - How a placement is validated and what grid it produces
//! - Which coordinates are legal for a player
//! - When the game ends and who won
//!
//! `Rules` is the closed set of supported games behind that trait. The
//! session layer calls into it but never interprets game-specific concepts
//! directly.

pub mod engine;
pub mod group;

pub use engine::{legal_moves, MoveContext, Mutation, Position, Rules, RulesEngine};
pub use group::{find_group, Group};
