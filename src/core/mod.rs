//! Core engine types: pits, board, players, configuration, errors, moves.
//!
//! These are the building blocks the engine and the undo history share.
//! Nothing in here enforces turn order; that lives in `game::GameEngine`.

pub mod action;
pub mod board;
pub mod config;
pub mod error;
pub mod pit;
pub mod player;

pub use action::{MoveOutcome, MoveRecord, MoveReport};
pub use board::{Board, BOARD_SIZE, PIT_NAMES};
pub use config::{BoardStyle, GameConfig, DEFAULT_MAX_UNDOS};
pub use error::GameError;
pub use pit::Pit;
pub use player::{Player, PlayerId, PlayerMap, PITS_PER_SIDE};
