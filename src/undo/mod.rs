//! Bounded per-turn undo history.
//!
//! Snapshots are taken just before each committed move and dropped whenever
//! the turn changes. A player may undo at most `max_undos` moves per turn,
//! and never two in a row without a new move in between.

pub mod manager;

pub use manager::{Snapshot, UndoManager};
