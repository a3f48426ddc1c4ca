//! Game engine and its UI-facing listener seam.

mod engine;
mod listener;

pub use engine::{GameEngine, IN_PROGRESS};
pub use listener::{GameListener, MessageLog};
