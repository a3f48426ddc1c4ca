//! Undo manager: snapshot history with turn-scoped clearing.
//!
//! ## States
//!
//! - *empty* / *has history*: whether a snapshot is available
//! - `just_undid`: set by a successful undo, cleared by the next committed
//!   move or a turn change. Blocks undoing an undo.
//!
//! ## Budget
//!
//! The history never holds more snapshots than the undo budget: a push onto
//! a full history is rejected. No snapshot is taken once the owner has spent
//! the whole budget either.

use smallvec::SmallVec;
use tracing::debug;

use crate::core::board::Board;
use crate::core::config::DEFAULT_MAX_UNDOS;
use crate::core::player::{Player, PlayerId, PlayerMap};

/// Board, scores and turn owner captured before a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub scores: PlayerMap<u32>,
    pub active: PlayerId,
}

/// Bounded LIFO of snapshots for the player whose turn it is.
#[derive(Clone, Debug)]
pub struct UndoManager {
    history: SmallVec<[Snapshot; DEFAULT_MAX_UNDOS as usize]>,
    max_undos: u32,
    owner: PlayerId,
    just_undid: bool,
}

impl Default for UndoManager {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UNDOS)
    }
}

impl UndoManager {
    /// Create an empty manager owned by Player A.
    #[must_use]
    pub fn new(max_undos: u32) -> Self {
        Self {
            history: SmallVec::new(),
            max_undos,
            owner: PlayerId::A,
            just_undid: false,
        }
    }

    /// Player whose moves are being recorded.
    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Number of stored snapshots.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    #[must_use]
    pub fn just_undid(&self) -> bool {
        self.just_undid
    }

    /// Record the state before a move.
    ///
    /// Nothing is stored once the owner has used up the budget or the
    /// history is full; existing snapshots are kept. Returns whether a
    /// snapshot was stored.
    pub fn save_state(
        &mut self,
        board: &Board,
        players: &PlayerMap<Player>,
        active: PlayerId,
    ) -> bool {
        if players[self.owner].undos_used() >= self.max_undos {
            debug!(owner = %self.owner, "undo budget spent, snapshot skipped");
            return false;
        }
        if self.history.len() >= self.max_undos as usize {
            debug!(
                owner = %self.owner,
                depth = self.history.len(),
                "history full, snapshot rejected"
            );
            return false;
        }
        self.history.push(Snapshot {
            board: *board,
            scores: PlayerMap::new(|p| players[p].score()),
            active,
        });
        debug!(owner = %self.owner, depth = self.history.len(), "snapshot saved");
        true
    }

    /// Whether `undo` would succeed right now.
    #[must_use]
    pub fn can_undo(&self, players: &PlayerMap<Player>) -> bool {
        !self.just_undid
            && players[self.owner].undos_used() < self.max_undos
            && !self.history.is_empty()
    }

    /// Pop the latest snapshot.
    ///
    /// Restores both scores, charges the owner one undo and returns the
    /// snapshot so the caller can restore the board and turn owner. Returns
    /// `None` when `can_undo` is false.
    pub fn undo(&mut self, players: &mut PlayerMap<Player>) -> Option<Snapshot> {
        if !self.can_undo(players) {
            return None;
        }
        let snapshot = self.history.pop()?;

        for (id, player) in players.iter_mut() {
            player.mirror_score(snapshot.scores[id]);
        }
        let owner = &mut players[self.owner];
        owner.set_undos_used(owner.undos_used() + 1);
        self.just_undid = true;

        debug!(owner = %self.owner, undos_used = owner.undos_used(), "undo applied");
        Some(snapshot)
    }

    /// Clear history for a new turn owned by `next`.
    pub fn reset_undo(&mut self, next: PlayerId, players: &mut PlayerMap<Player>) {
        self.owner = next;
        self.clear(players);
    }

    /// Clear history after a free turn; the owner stays the same.
    pub fn reset_undo_for_free_turn(&mut self, players: &mut PlayerMap<Player>) {
        self.clear(players);
    }

    /// Allow undo again after a committed move.
    pub fn clear_undo_flag(&mut self) {
        self.just_undid = false;
    }

    fn clear(&mut self, players: &mut PlayerMap<Player>) {
        self.history.clear();
        self.just_undid = false;
        players[self.owner].set_undos_used(0);
    }
}
