//! Engine error type.
//!
//! Every fallible engine call returns `Result<_, GameError>`. The `Display`
//! text of each variant is the message shown to the player, so a UI can
//! surface an error verbatim.
//!
//! Two tiers exist:
//! - **Rejections**: routine input validation (wrong pit, empty pit, undo
//!   refused). The engine state is left untouched and play continues.
//! - **Invalid values**: negative or oversized stone and score assignments.
//!   These point at a bug in the caller and are rejected at the boundary.

use thiserror::Error;

/// Errors produced by the game engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A setter received a value outside its domain.
    #[error("invalid value for {field}: {value} (must be non-negative)")]
    InvalidValue { field: &'static str, value: i64 },

    /// A value or a sum does not fit in a stone count.
    #[error("invalid value for {field}: {value} (out of range, max {})", u32::MAX)]
    OutOfRange { field: &'static str, value: i64 },

    /// The pit is not a regular pit of the player to move.
    #[error("Invalid pit clicked")]
    InvalidPit { index: usize },

    /// No pit carries the given name.
    #[error("Unknown pit: {name}")]
    UnknownPit { name: String },

    /// The chosen pit holds no stones.
    #[error("Selected pit is empty.")]
    EmptyPit { index: usize },

    /// The player already committed a move this turn.
    #[error("{player} has already selected a pit this turn.")]
    AlreadyMoved { player: String },

    /// Switching turns requires a committed move first.
    #[error("Make a move before switching players.")]
    MustMoveFirst,

    /// Undo requested before any move this turn.
    #[error("No move to undo yet!")]
    NoMoveToUndo,

    /// The per-turn undo budget is used up.
    #[error("Reached max number of undos")]
    MaxUndosReached,

    /// The game has ended; carries the final result text.
    #[error("{result}")]
    GameOver { result: String },

    /// The game cannot start before a stone count is chosen.
    #[error("Stones per pit not chosen.")]
    StonesNotChosen,

    /// The game cannot start before a board style is chosen.
    #[error("Game view not chosen.")]
    StyleNotChosen,
}

impl GameError {
    /// True for routine refusals that should be shown to the player.
    ///
    /// `InvalidValue` and `OutOfRange` signal a caller bug.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        !matches!(
            self,
            GameError::InvalidValue { .. } | GameError::OutOfRange { .. }
        )
    }

    /// Validate a signed count coming in through a public setter.
    pub(crate) fn check_non_negative(field: &'static str, value: i64) -> Result<u32, GameError> {
        if value < 0 {
            tracing::warn!(field, value, "rejected negative value");
            return Err(GameError::InvalidValue { field, value });
        }
        u32::try_from(value).map_err(|_| {
            tracing::warn!(field, value, "rejected oversized value");
            GameError::OutOfRange { field, value }
        })
    }
}
