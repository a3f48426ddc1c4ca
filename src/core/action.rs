//! Move results and the move log.
//!
//! A committed move produces a `MoveReport` for the caller and a
//! `MoveRecord` for the engine's persistent move log. The log is used for
//! replay/debugging by UI collaborators; undoing a move pops its record.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::rules::GameResult;

/// What the turn looks like after a committed move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mover is done; the next step is `switch_turn()` (or an undo).
    TurnComplete,
    /// The last stone landed in the mover's store; they move again.
    FreeTurn,
    /// One side ran out of stones and the board was swept.
    GameOver(GameResult),
}

impl MoveOutcome {
    #[must_use]
    pub fn is_free_turn(&self) -> bool {
        matches!(self, MoveOutcome::FreeTurn)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, MoveOutcome::GameOver(_))
    }
}

/// Summary of a committed move, returned by `GameEngine::make_move`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Who moved.
    pub player: PlayerId,

    /// Pit the stones were picked up from.
    pub pit: usize,

    /// Slot that received the last stone.
    pub last_index: usize,

    /// Stones moved into the store by a capture (0 if none).
    pub captured: u32,

    pub outcome: MoveOutcome,
}

/// A committed move as kept in the move log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// Pit sown from.
    pub pit: usize,

    /// Slot that received the last stone.
    pub last_index: usize,

    /// Stones captured (0 if none).
    pub captured: u32,

    /// Whether the move earned a free turn.
    pub free_turn: bool,

    /// Turn number when the move was made.
    pub turn: u32,
}

impl MoveRecord {
    /// Build a log entry from a report.
    #[must_use]
    pub fn from_report(report: &MoveReport, turn: u32) -> Self {
        Self {
            player: report.player,
            pit: report.pit,
            last_index: report.last_index,
            captured: report.captured,
            free_turn: report.outcome.is_free_turn(),
            turn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_predicates() {
        assert!(MoveOutcome::FreeTurn.is_free_turn());
        assert!(!MoveOutcome::TurnComplete.is_free_turn());
        assert!(MoveOutcome::GameOver(GameResult::Draw).is_game_over());
        assert!(!MoveOutcome::FreeTurn.is_game_over());
    }

    #[test]
    fn test_record_from_report() {
        let report = MoveReport {
            player: PlayerId::B,
            pit: 9,
            last_index: 13,
            captured: 0,
            outcome: MoveOutcome::FreeTurn,
        };
        let record = MoveRecord::from_report(&report, 4);

        assert_eq!(record.player, PlayerId::B);
        assert_eq!(record.pit, 9);
        assert_eq!(record.last_index, 13);
        assert!(record.free_turn);
        assert_eq!(record.turn, 4);
    }

    #[test]
    fn test_record_serialization() {
        let record = MoveRecord {
            player: PlayerId::A,
            pit: 2,
            last_index: 4,
            captured: 5,
            free_turn: false,
            turn: 1,
        };
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
