//! A single pit or store on the board.

use serde::Serialize;

use super::error::GameError;

/// A named container of stones.
///
/// Pits carry no rules of their own; the engine is the only code that moves
/// stones between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Pit {
    name: &'static str,
    stones: u32,
}

impl Pit {
    /// Create a pit with a starting stone count.
    #[must_use]
    pub const fn new(name: &'static str, stones: u32) -> Self {
        Self { name, stones }
    }

    /// Label such as `"A3"` or `"MancalaB"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn stones(&self) -> u32 {
        self.stones
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.stones == 0
    }

    /// Set the stone count. Negative counts are rejected.
    pub fn set_stones(&mut self, stones: i64) -> Result<(), GameError> {
        self.stones = GameError::check_non_negative("stones", stones)?;
        Ok(())
    }

    /// Drop stones in. The count saturates at `u32::MAX`.
    pub(crate) fn add(&mut self, stones: u32) {
        self.stones = self.stones.saturating_add(stones);
    }

    /// Empty the pit, returning what it held.
    pub(crate) fn take_all(&mut self) -> u32 {
        std::mem::take(&mut self.stones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pit_basics() {
        let mut pit = Pit::new("A1", 4);
        assert_eq!(pit.name(), "A1");
        assert_eq!(pit.stones(), 4);

        pit.set_stones(0).unwrap();
        assert!(pit.is_empty());
    }

    #[test]
    fn test_pit_rejects_negative() {
        let mut pit = Pit::new("B2", 3);
        let err = pit.set_stones(-2).unwrap_err();

        assert_eq!(err, GameError::InvalidValue { field: "stones", value: -2 });
        assert_eq!(pit.stones(), 3);
    }

    #[test]
    fn test_pit_take_all() {
        let mut pit = Pit::new("A6", 5);
        assert_eq!(pit.take_all(), 5);
        assert!(pit.is_empty());

        pit.add(2);
        assert_eq!(pit.stones(), 2);
    }

    #[test]
    fn test_pit_add_saturates() {
        let mut pit = Pit::new("MancalaA", 0);
        pit.set_stones(i64::from(u32::MAX)).unwrap();

        pit.add(1);

        assert_eq!(pit.stones(), u32::MAX);
    }
}
