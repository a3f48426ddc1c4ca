//! The fixed 14-slot Kalah board.
//!
//! ```text
//! index:  0   1   2   3   4   5   6        7   8   9  10  11  12  13
//! name:  A1  A2  A3  A4  A5  A6  MancalaA  B6  B5  B4  B3  B2  B1  MancalaB
//! ```
//!
//! Stones travel in index order. Player A owns 0-5 and the store at 6,
//! Player B owns 7-12 and the store at 13. The layout never changes during a
//! game; pits are only refilled on re-initialization.

use serde::Serialize;
use std::ops::Index;

use super::pit::Pit;
use super::player::PlayerId;

/// Number of slots on the board, stores included.
pub const BOARD_SIZE: usize = 14;

/// Slot labels in board order.
pub const PIT_NAMES: [&str; BOARD_SIZE] = [
    "A1", "A2", "A3", "A4", "A5", "A6", "MancalaA", "B6", "B5", "B4", "B3", "B2", "B1", "MancalaB",
];

/// The board: 12 regular pits and 2 stores in fixed order.
///
/// `Board` is `Copy` so undo snapshots are plain values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    pits: [Pit; BOARD_SIZE],
}

impl Board {
    /// Build a fresh board with `stones_per_pit` in each regular pit and
    /// empty stores.
    #[must_use]
    pub fn new(stones_per_pit: u32) -> Self {
        let pits = std::array::from_fn(|i| {
            let stones = if Self::is_store(i) { 0 } else { stones_per_pit };
            Pit::new(PIT_NAMES[i], stones)
        });
        Self { pits }
    }

    /// Whether `index` is one of the two stores.
    #[must_use]
    pub fn is_store(index: usize) -> bool {
        index == PlayerId::A.store_index() || index == PlayerId::B.store_index()
    }

    /// Index of the pit facing `index` across the board.
    ///
    /// Stores and out-of-range indices have no opposite.
    #[must_use]
    pub fn opposite_index(index: usize) -> Option<usize> {
        if index >= BOARD_SIZE - 1 || Self::is_store(index) {
            return None;
        }
        Some(12 - index)
    }

    /// Look up a slot by its label.
    #[must_use]
    pub fn index_of(name: &str) -> Option<usize> {
        PIT_NAMES.iter().position(|&n| n == name)
    }

    /// All slots in board order.
    #[must_use]
    pub fn pits(&self) -> &[Pit; BOARD_SIZE] {
        &self.pits
    }

    #[must_use]
    pub fn pit(&self, index: usize) -> Option<&Pit> {
        self.pits.get(index)
    }

    /// Mutable access for scenario setup by the caller.
    pub fn pit_mut(&mut self, index: usize) -> Option<&mut Pit> {
        self.pits.get_mut(index)
    }

    /// Stones in a player's store.
    #[must_use]
    pub fn store(&self, player: PlayerId) -> u32 {
        self.pits[player.store_index()].stones()
    }

    /// Stones remaining in a player's six regular pits.
    #[must_use]
    pub fn side_total(&self, player: PlayerId) -> u32 {
        self.pits[player.pit_range()]
            .iter()
            .fold(0, |acc, pit| acc.saturating_add(pit.stones()))
    }

    #[must_use]
    pub fn side_is_empty(&self, player: PlayerId) -> bool {
        self.pits[player.pit_range()].iter().all(Pit::is_empty)
    }

    /// Every stone on the board, stores included.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        self.pits
            .iter()
            .fold(0, |acc, pit| acc.saturating_add(pit.stones()))
    }

    /// Move everything left on `player`'s side into their store.
    ///
    /// Returns the number of stones moved.
    pub(crate) fn sweep_side(&mut self, player: PlayerId) -> u32 {
        let swept = self.pits[player.pit_range()]
            .iter_mut()
            .fold(0u32, |acc, pit| acc.saturating_add(pit.take_all()));
        self.pits[player.store_index()].add(swept);
        swept
    }

    pub(crate) fn pit_at(&mut self, index: usize) -> &mut Pit {
        &mut self.pits[index]
    }

    fn render_row(&self, indices: impl Iterator<Item = usize>) -> String {
        indices
            .map(|i| format!("[{:>2}]", self.pits[i].stones()))
            .collect()
    }
}

impl Index<usize> for Board {
    type Output = Pit;

    fn index(&self, index: usize) -> &Self::Output {
        &self.pits[index]
    }
}

/// Two-row text rendering: B's pits on top (B1 at the left), A's pits below,
/// MancalaB on the left and MancalaA on the right.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "     {}", self.render_row(PlayerId::B.pit_range().rev()))?;
        writeln!(
            f,
            "{:>3}  {:width$}  {:<3}",
            self.store(PlayerId::B),
            "",
            self.store(PlayerId::A),
            width = 4 * 6 - 2,
        )?;
        write!(f, "     {}", self.render_row(PlayerId::A.pit_range()))
    }
}
