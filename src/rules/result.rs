//! Result of a finished game.

use serde::{Deserialize, Serialize};

use crate::core::player::{PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal final scores.
    Draw,
}

impl GameResult {
    /// Decide the result from final scores.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<u32>) -> Self {
        let (a, b) = (scores[PlayerId::A], scores[PlayerId::B]);
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::A),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::B),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// The winning player, `None` for a draw.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}
