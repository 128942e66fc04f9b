//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two sides of every supported game. Black always moves first.
//!
//! ## PlayerMap
//!
//! Exactly one value per player, indexable by `Player`. Serializes as
//! `{"BLACK": .., "WHITE": ..}` so snapshots read naturally on the wire.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::Black, Player::White];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Player to move after `plies` half-moves from the start of a game.
    ///
    /// ```
    /// use board_rules::core::Player;
    ///
    /// assert_eq!(Player::after_plies(0), Player::Black);
    /// assert_eq!(Player::after_plies(3), Player::White);
    /// ```
    #[must_use]
    pub const fn after_plies(plies: usize) -> Self {
        if plies % 2 == 0 {
            Player::Black
        } else {
            Player::White
        }
    }

    /// Wire name ("BLACK" / "WHITE").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Player::Black => "BLACK",
            Player::White => "WHITE",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use board_rules::core::{Player, PlayerMap};
///
/// let mut prisoners: PlayerMap<u32> = PlayerMap::default();
/// prisoners[Player::White] += 2;
///
/// assert_eq!(prisoners[Player::Black], 0);
/// assert_eq!(prisoners[Player::White], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    #[serde(rename = "BLACK")]
    black: T,
    #[serde(rename = "WHITE")]
    white: T,
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            black: factory(Player::Black),
            white: factory(Player::White),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            black: value.clone(),
            white: value,
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        match player {
            Player::Black => &self.black,
            Player::White => &self.white,
        }
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        match player {
            Player::Black => &mut self.black,
            Player::White => &mut self.white,
        }
    }

    /// Iterate over (Player, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(format!("{}", Player::Black), "BLACK");
    }

    #[test]
    fn test_after_plies_alternates() {
        let order: Vec<_> = (0..4).map(Player::after_plies).collect();
        assert_eq!(
            order,
            vec![Player::Black, Player::White, Player::Black, Player::White]
        );
    }

    #[test]
    fn test_player_map_new() {
        let map = PlayerMap::new(|p| if p == Player::Black { 1 } else { 2 });

        assert_eq!(map[Player::Black], 1);
        assert_eq!(map[Player::White], 2);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<u32> = PlayerMap::with_value(0);

        map[Player::Black] = 10;
        *map.get_mut(Player::White) += 3;

        assert_eq!(map[Player::Black], 10);
        assert_eq!(map[Player::White], 3);
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::with_value(7);
        let pairs: Vec<_> = map.iter().collect();

        assert_eq!(pairs, vec![(Player::Black, &7), (Player::White, &7)]);
    }

    #[test]
    fn test_player_serialization() {
        assert_eq!(serde_json::to_string(&Player::White).unwrap(), "\"WHITE\"");

        let map: PlayerMap<u32> = PlayerMap::new(|p| if p == Player::Black { 4 } else { 0 });
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"BLACK":4,"WHITE":0}"#);

        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
