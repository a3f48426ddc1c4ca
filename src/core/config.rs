//! Game configuration types.
//!
//! A UI configures the engine before the first `initialize()`:
//! - `stones_per_pit`: starting count for each regular pit (0 = not chosen)
//! - `max_undos`: per-turn undo budget
//! - `player_names`: display names used in messages and results
//! - `board_style`: which board drawing the UI picked; opaque to the engine

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};

/// Default per-turn undo budget.
pub const DEFAULT_MAX_UNDOS: u32 = 3;

/// Board drawing selected by the UI.
///
/// The engine stores the choice so the UI can query it back but never
/// interprets it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardStyle {
    /// Oval pits.
    Regular,
    /// Hexagonal pits.
    Hexagon,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Stones placed in each regular pit by `initialize()`.
    pub stones_per_pit: u32,

    /// Undos each player may spend per turn.
    pub max_undos: u32,

    /// Player display names.
    pub player_names: PlayerMap<String>,

    /// Board drawing chosen by the UI. `None` until chosen.
    pub board_style: Option<BoardStyle>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            stones_per_pit: 0,
            max_undos: DEFAULT_MAX_UNDOS,
            player_names: PlayerMap::new(|p| p.to_string()),
            board_style: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting stone count per regular pit.
    #[must_use]
    pub fn with_stones_per_pit(mut self, stones: u32) -> Self {
        self.stones_per_pit = stones;
        self
    }

    /// Set the per-turn undo budget.
    #[must_use]
    pub fn with_max_undos(mut self, max_undos: u32) -> Self {
        self.max_undos = max_undos;
        self
    }

    /// Rename a player.
    #[must_use]
    pub fn with_player_name(mut self, player: PlayerId, name: impl Into<String>) -> Self {
        self.player_names[player] = name.into();
        self
    }

    /// Choose the board drawing.
    #[must_use]
    pub fn with_board_style(mut self, style: BoardStyle) -> Self {
        self.board_style = Some(style);
        self
    }
}
