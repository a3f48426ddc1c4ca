//! Sowing, capture and free-turn detection.
//!
//! The three effects share the slot that received the last stone, so they
//! are resolved together in one pass over the board.

use tracing::debug;

use crate::core::board::{Board, BOARD_SIZE};
use crate::core::player::PlayerId;

/// Effects of one sowing pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SowResult {
    /// Slot that received the last stone.
    pub last_index: usize,

    /// Stones moved into the mover's store by a capture, landing stone
    /// included. 0 when nothing was captured.
    pub captured: u32,

    /// The last stone landed in the mover's own store.
    pub free_turn: bool,
}

/// Sow the stones of `start` for `player`.
///
/// The caller guarantees `start` is one of `player`'s regular pits and is
/// non-empty. Stones are dropped one per slot in board order; the opponent's
/// store is skipped every time it comes up and does not consume a stone.
///
/// If the last stone lands in a previously empty pit on the mover's side and
/// the facing pit holds stones, both pits are emptied into the mover's store.
///
/// ```
/// use kalah_engine::core::{Board, PlayerId};
/// use kalah_engine::rules::sow;
///
/// let mut board = Board::new(3);
/// let result = sow(&mut board, PlayerId::A, 0);
///
/// assert_eq!(result.last_index, 3);
/// assert_eq!(board[0].stones(), 0);
/// assert_eq!(board[3].stones(), 4);
/// assert!(!result.free_turn);
/// ```
pub fn sow(board: &mut Board, player: PlayerId, start: usize) -> SowResult {
    debug_assert!(player.owns_pit(start), "sowing from a pit the player does not own");

    let skip = player.opponent().store_index();
    let mut stones = board.pit_at(start).take_all();
    debug_assert!(stones > 0, "sowing from an empty pit");

    let mut idx = start;
    let mut last_index = start;
    while stones > 0 {
        idx = (idx + 1) % BOARD_SIZE;
        if idx == skip {
            continue;
        }
        board.pit_at(idx).add(1);
        stones -= 1;
        last_index = idx;
    }

    let mut captured = 0;
    if player.owns_pit(last_index) && board[last_index].stones() == 1 {
        if let Some(opposite) = Board::opposite_index(last_index) {
            let facing = board[opposite].stones();
            if facing > 0 {
                captured = facing + 1;
                board.pit_at(opposite).take_all();
                board.pit_at(last_index).take_all();
                board.pit_at(player.store_index()).add(captured);
                debug!(%player, landing = last_index, opposite, captured, "capture");
            }
        }
    }

    let free_turn = last_index == player.store_index();
    debug!(%player, start, last_index, free_turn, "sowed");

    SowResult {
        last_index,
        captured,
        free_turn,
    }
}
