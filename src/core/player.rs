//! Player identification and per-player data.
//!
//! ## PlayerId
//!
//! Seat identifier for the two players. `PlayerId(0)` moves on even turns,
//! `PlayerId(1)` on odd turns.
//!
//! ## PlayerMap
//!
//! Two-slot storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! One side's identity (name, marker) and its captured/reserve counters.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of players in a game of Focus.
pub const PLAYER_COUNT: usize = 2;

/// Player seat. `0` is the first player, `1` the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub const FIRST: PlayerId = PlayerId(0);
    pub const SECOND: PlayerId = PlayerId(1);

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// The seat that acts on `turn`: even turns are the first player's.
    #[must_use]
    pub const fn for_turn(turn: u32) -> Self {
        Self((turn % 2) as u8)
    }

    /// Both seats, first player first.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use focus_engine::core::{PlayerId, PlayerMap};
///
/// let mut captured: PlayerMap<u32> = PlayerMap::with_value(0);
/// captured[PlayerId::SECOND] += 2;
/// assert_eq!(captured[PlayerId::FIRST], 0);
/// assert_eq!(captured[PlayerId::SECOND], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a map from a factory called once per seat.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a map from the first and second player's values.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

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

    /// Find the first seat whose value matches `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<PlayerId> {
        self.iter().find(|(_, v)| predicate(v)).map(|(id, _)| id)
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

/// One side of the game: who they are and what they hold off-board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    marker: String,
    captured: u32,
    reserve: u32,
}

impl Player {
    /// Create a player with empty captured and reserve counts.
    pub fn new(name: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            marker: marker.into(),
            captured: 0,
            reserve: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Opponent pieces this player has captured.
    #[must_use]
    pub fn captured(&self) -> u32 {
        self.captured
    }

    /// Own pieces held off-board, available for reserve placement.
    #[must_use]
    pub fn reserve(&self) -> u32 {
        self.reserve
    }

    pub fn increment_captured(&mut self) {
        self.captured += 1;
    }

    pub fn increment_reserve(&mut self) {
        self.reserve += 1;
    }

    /// Callers check `reserve() > 0` first.
    pub fn decrement_reserve(&mut self) {
        debug_assert!(self.reserve > 0, "reserve underflow for {}", self.name);
        self.reserve = self.reserve.saturating_sub(1);
    }
}
