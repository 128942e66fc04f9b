//! Sessions keyed by room.
//!
//! Each room owns an independent `GameSession`. The arena is plain owned
//! data behind `&mut self`; a host that serves rooms concurrently wraps it
//! (or each session) in its own lock or actor.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use tracing::info;

use crate::core::GameConfig;

use super::game::GameSession;

/// Room identifier.
pub type RoomId = String;

/// Independent game sessions, one per room.
#[derive(Clone, Debug, Default)]
pub struct SessionArena {
    sessions: FxHashMap<RoomId, GameSession>,
}

impl SessionArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh game in `room`, replacing any game already there.
    pub fn create(&mut self, room: impl Into<RoomId>, config: GameConfig) -> &mut GameSession {
        let room = room.into();
        info!(%room, game = %config.game_type(), "Opening room");
        let session = GameSession::new(config);
        match self.sessions.entry(room) {
            Entry::Occupied(mut entry) => {
                entry.insert(session);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(session),
        }
    }

    #[must_use]
    pub fn get(&self, room: &str) -> Option<&GameSession> {
        self.sessions.get(room)
    }

    pub fn get_mut(&mut self, room: &str) -> Option<&mut GameSession> {
        self.sessions.get_mut(room)
    }

    /// Close a room, returning its session.
    pub fn remove(&mut self, room: &str) -> Option<GameSession> {
        let removed = self.sessions.remove(room);
        if removed.is_some() {
            info!(%room, "Closing room");
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Open room identifiers, in no particular order.
    pub fn rooms(&self) -> impl Iterator<Item = &str> {
        self.sessions.keys().map(String::as_str)
    }
}
