//! Word and group identifiers.
//!
//! Every word on the grid has a `WordId`, its index into `Puzzle::words`.
//! Every group has a `GroupId`, its index into `Puzzle::groups`.
//!
//! ## ID Layout
//!
//! Words are numbered in the puzzle's original order:
//! - `0..groups * group_size`: group words, group-major
//! - the remainder: wildcards
//!
//! The layout is fixed when the puzzle is validated and never changes
//! during a play-through.
//!
//! ```
//! use wordburn::core::{GroupId, WordId};
//!
//! let word = WordId::new(5);
//! assert_eq!(word.index(), 5);
//! assert_eq!(format!("{}", word), "Word(5)");
//!
//! let group = GroupId::new(1);
//! assert_eq!(group.index(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Identifier for a word on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WordId(pub u16);

impl WordId {
    /// Create a new word ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the index into `Puzzle::words`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all word IDs for a grid of `count` words.
    pub fn all(count: usize) -> impl Iterator<Item = WordId> {
        (0..count as u16).map(WordId)
    }
}

impl std::fmt::Display for WordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Word({})", self.0)
    }
}

/// Identifier for a group of words sharing a hidden theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupId(pub u8);

impl GroupId {
    /// Create a new group ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the index into `Puzzle::groups`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all group IDs for a puzzle with `count` groups.
    pub fn all(count: usize) -> impl Iterator<Item = GroupId> {
        (0..count as u8).map(GroupId)
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Group({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_id_all() {
        let ids: Vec<_> = WordId::all(3).collect();
        assert_eq!(ids, vec![WordId(0), WordId(1), WordId(2)]);
    }

    #[test]
    fn test_group_id_all() {
        let ids: Vec<_> = GroupId::all(2).collect();
        assert_eq!(ids, vec![GroupId(0), GroupId(1)]);
    }

    #[test]
    fn test_ordering_follows_index() {
        assert!(WordId(1) < WordId(2));
        assert!(GroupId(0) < GroupId(3));
    }

    #[test]
    fn test_serialization() {
        let id = WordId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: WordId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
