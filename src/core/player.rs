//! Seats, seated players, and per-seat data storage.
//!
//! ## PlayerId
//!
//! Seat index. A room has exactly two seats: `PlayerId(0)` moves first and
//! owns `Cell::First` pieces, `PlayerId(1)` owns `Cell::Second` pieces.
//!
//! ## PlayerMap
//!
//! Per-seat data storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! A seated participant. Whether a seat is driven by a person or by the
//! computer opponent is carried by `PlayerKind`, never by the player id.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats in a room.
pub const SEATS: usize = 2;

/// Seat identifier (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The seat that moves first.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The seat that moves second; the computer always sits here.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat of the pair `{2k, 2k + 1}`.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Check whether this is one of the room's two seats.
    #[must_use]
    pub const fn is_seat(self) -> bool {
        (self.0 as usize) < SEATS
    }

    /// Iterate over both seats.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..SEATS as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Who drives a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// A person submitting moves through the transport.
    Human,
    /// The built-in threat-scanning opponent.
    Computer,
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Caller-supplied identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ready flag. The computer is always ready.
    pub ready: bool,
    pub kind: PlayerKind,
}

impl Player {
    /// A human player, not yet ready.
    pub fn human(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ready: false,
            kind: PlayerKind::Human,
        }
    }

    /// The computer opponent.
    pub fn computer(name: impl Into<String>) -> Self {
        Self {
            id: "cpu".to_string(),
            name: name.into(),
            ready: true,
            kind: PlayerKind::Computer,
        }
    }

    #[must_use]
    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use shape_drop::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::with_value(0);
/// scores[PlayerId::SECOND] += 3;
///
/// assert_eq!(scores[PlayerId::FIRST], 0);
/// assert_eq!(scores[PlayerId::SECOND], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all().map(factory).collect(),
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::SECOND.index(), 1);
        assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
        assert!(PlayerId::SECOND.is_seat());
        assert!(!PlayerId::new(2).is_seat());
        assert_eq!(format!("{}", PlayerId::FIRST), "Player 0");
    }

    #[test]
    fn test_opponent_outside_seat_range() {
        assert_eq!(PlayerId::new(2).opponent(), PlayerId::new(3));
        assert_eq!(PlayerId::new(u8::MAX).opponent(), PlayerId::new(254));
        assert_eq!(PlayerId::new(7).opponent().opponent(), PlayerId::new(7));
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<u32> = PlayerMap::with_value(0);

        map[PlayerId::FIRST] = 10;
        map[PlayerId::SECOND] += 5;

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::FIRST, &10), (PlayerId::SECOND, &5)]);
    }

    #[test]
    fn test_player_kinds() {
        let human = Player::human("p-1", "Alice");
        let cpu = Player::computer("CPU (Easy)");

        assert!(!human.ready);
        assert!(!human.is_computer());
        assert!(cpu.ready);
        assert!(cpu.is_computer());
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(|p| p.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
