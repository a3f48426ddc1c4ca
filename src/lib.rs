//! # kalah-engine
//!
//! A game-state engine for two-player Kalah (Mancala) on the classic
//! 14-slot board.
//!
//! ## Design Principles
//!
//! 1. **One owner**: `GameEngine` owns the board, both players and the undo
//!    history. Callers mutate state only through its operations.
//!
//! 2. **Rejections are values**: illegal moves and refused undos come back as
//!    `GameError`s whose text is ready to show to the player. The state is
//!    never left half-updated.
//!
//! 3. **Stores are the truth**: scores mirror the stores and are resynced
//!    after every mutation.
//!
//! ## Modules
//!
//! - `core`: pits, board, players, configuration, errors, move reports
//! - `rules`: sowing with capture and free-turn detection, game results
//! - `undo`: bounded per-turn snapshot history
//! - `game`: the engine and the listener seam for UIs
//!
//! ## Example
//!
//! ```
//! use kalah_engine::{GameConfig, GameEngine, MoveOutcome, PlayerId};
//!
//! let mut engine = GameEngine::new(GameConfig::new().with_stones_per_pit(3));
//!
//! let report = engine.make_move_named("A1").unwrap();
//! assert_eq!(report.outcome, MoveOutcome::TurnComplete);
//!
//! engine.switch_turn().unwrap();
//! assert_eq!(engine.active_player(), PlayerId::B);
//! ```

pub mod core;
pub mod rules;
pub mod undo;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardStyle, GameConfig, GameError, MoveOutcome, MoveRecord, MoveReport, Pit, Player,
    PlayerId, PlayerMap, BOARD_SIZE, PIT_NAMES,
};

pub use crate::rules::{sow, GameResult, SowResult};

pub use crate::undo::{Snapshot, UndoManager};

pub use crate::game::{GameEngine, GameListener, MessageLog};
