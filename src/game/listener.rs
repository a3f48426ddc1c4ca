//! Observer seam for UI collaborators.
//!
//! The engine calls listeners after an operation has finished mutating the
//! board. Listeners only receive shared references, so they cannot call back
//! into the engine while a move is being resolved.

use crate::core::board::Board;
use crate::core::player::PlayerId;

/// Receives board updates and player-facing messages.
///
/// Both methods have empty default bodies so a listener can subscribe to
/// just one of them.
pub trait GameListener {
    /// The board or the turn owner changed.
    fn board_changed(&mut self, _board: &Board, _active: PlayerId) {}

    /// A message for the player: a rejection, a free turn, the final result.
    fn message(&mut self, _text: &str) {}
}

/// Listener that keeps every message it receives.
///
/// Useful for console front ends and tests.
#[derive(Clone, Debug, Default)]
pub struct MessageLog {
    messages: Vec<String>,
    updates: usize,
}

impl MessageLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in arrival order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Number of board updates seen.
    #[must_use]
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl GameListener for MessageLog {
    fn board_changed(&mut self, _board: &Board, _active: PlayerId) {
        self.updates += 1;
    }

    fn message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}

/// Shared listeners, so the caller can keep a handle to inspect them.
impl<L: GameListener> GameListener for std::rc::Rc<std::cell::RefCell<L>> {
    fn board_changed(&mut self, board: &Board, active: PlayerId) {
        self.borrow_mut().board_changed(board, active);
    }

    fn message(&mut self, text: &str) {
        self.borrow_mut().message(text);
    }
}
