//! Kalah rules: sowing with capture and free-turn detection, and game
//! results.
//!
//! The sowing function is the single place where stones move during a
//! regular move. Turn bookkeeping and undo live in `game::GameEngine`, which
//! calls into this module.

pub mod result;
pub mod sowing;

pub use result::GameResult;
pub use sowing::{sow, SowResult};
