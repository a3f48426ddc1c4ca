//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The two sides of the board. The player to move is a single `PlayerId`
//! held by the engine, so exactly one side owns the turn at any time.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by a two-element array, indexable by
//! `PlayerId`.
//!
//! ## Player
//!
//! Name, score mirror, undo counter and the "has moved this turn" flag.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, RangeInclusive};

use super::error::GameError;

/// Number of regular pits on each side.
pub const PITS_PER_SIDE: usize = 6;

/// One side of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// Moves first; owns pits 0-5 and the store at 6.
    A,
    /// Owns pits 7-12 and the store at 13.
    B,
}

impl PlayerId {
    /// Both players, in seating order.
    pub const ALL: [PlayerId; 2] = [PlayerId::A, PlayerId::B];

    /// Get the raw player index (0 for A, 1 for B).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::A => 0,
            PlayerId::B => 1,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::A => PlayerId::B,
            PlayerId::B => PlayerId::A,
        }
    }

    /// Board index of this player's store.
    #[must_use]
    pub const fn store_index(self) -> usize {
        match self {
            PlayerId::A => 6,
            PlayerId::B => 13,
        }
    }

    /// Board indices of this player's regular pits.
    #[must_use]
    pub fn pit_range(self) -> RangeInclusive<usize> {
        let first = self.store_index() - PITS_PER_SIDE;
        first..=self.store_index() - 1
    }

    /// Whether `index` is one of this player's regular pits.
    #[must_use]
    pub fn owns_pit(self, index: usize) -> bool {
        self.pit_range().contains(&index)
    }

    /// Iterate over both player IDs.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::A => write!(f, "Player A"),
            PlayerId::B => write!(f, "Player B"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use kalah_engine::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::default();
/// scores[PlayerId::B] = 7;
/// assert_eq!(scores[PlayerId::A], 0);
/// assert_eq!(scores[PlayerId::B], 7);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::A), factory(PlayerId::B)],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter_mut())
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

/// Per-player bookkeeping.
///
/// `score` mirrors the player's store and is resynchronized by the engine
/// after every board mutation; the store pit is the source of truth.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    score: u32,
    undos_used: u32,
    has_moved: bool,
}

impl Player {
    /// Create a player with a zero score and a fresh turn.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            undos_used: 0,
            has_moved: false,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Add to the score. Negative amounts and sums past `u32::MAX` are
    /// rejected and leave the score unchanged.
    pub fn add_score(&mut self, amount: i64) -> Result<(), GameError> {
        let amount = GameError::check_non_negative("score increment", amount)?;
        self.score = self.score.checked_add(amount).ok_or_else(|| {
            let value = i64::from(self.score) + i64::from(amount);
            tracing::warn!(value, "score overflow");
            GameError::OutOfRange { field: "score", value }
        })?;
        Ok(())
    }

    /// Overwrite the score. Negative values are rejected.
    pub fn set_score(&mut self, value: i64) -> Result<(), GameError> {
        self.score = GameError::check_non_negative("score", value)?;
        Ok(())
    }

    /// Record whether the player has committed a move this turn.
    pub fn did_move(&mut self, moved: bool) {
        self.has_moved = moved;
    }

    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Undos consumed in the current turn.
    #[must_use]
    pub fn undos_used(&self) -> u32 {
        self.undos_used
    }

    pub fn set_undos_used(&mut self, count: u32) {
        self.undos_used = count;
    }

    /// Clear score, undo counter and move flag.
    pub(crate) fn reset(&mut self) {
        self.score = 0;
        self.undos_used = 0;
        self.has_moved = false;
    }

    /// Infallible score update used when mirroring a store.
    pub(crate) fn mirror_score(&mut self, stones: u32) {
        self.score = stones;
    }
}
