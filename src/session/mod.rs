//! Game lifecycle: sessions and the per-room arena.

pub mod arena;
pub mod game;

pub use arena::{RoomId, SessionArena};
pub use game::GameSession;
