//! Puzzle validation errors.

use thiserror::Error;

/// Where a word sits in a `PuzzleSpec`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordSlot {
    /// Inside the group at this index.
    Group(usize),
    /// In the wildcard list.
    Wildcard,
}

impl std::fmt::Display for WordSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordSlot::Group(index) => write!(f, "group {}", index),
            WordSlot::Wildcard => write!(f, "wildcards"),
        }
    }
}

/// Error type for puzzles that violate the grid invariants.
///
/// Validation stops at the first violation, checked in declaration order.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    /// The puzzle declares no groups.
    #[error("Puzzle has no groups")]
    NoGroups,

    /// A group has no words.
    #[error("Group {group} has no words")]
    EmptyGroup {
        /// Index of the empty group.
        group: usize,
    },

    /// A word is empty or whitespace.
    #[error("Blank word in {slot}")]
    BlankWord {
        /// Where the blank word was found.
        slot: WordSlot,
    },

    /// A group's size differs from the first group's.
    #[error("Group {group} has {actual} words, expected {expected}")]
    GroupSizeMismatch {
        /// Index of the offending group.
        group: usize,
        /// Size of the first group.
        expected: usize,
        /// Size of this group.
        actual: usize,
    },

    /// A word appears more than once across groups and wildcards.
    #[error("Word \"{word}\" appears more than once")]
    DuplicateWord {
        /// The repeated word.
        word: String,
    },

    /// The word count does not fill the declared grid.
    #[error("Grid {rows}x{cols} holds {expected} words but the puzzle has {actual}")]
    GridSizeMismatch {
        /// Declared rows.
        rows: usize,
        /// Declared columns.
        cols: usize,
        /// `rows * cols`, or `usize::MAX` if that overflows.
        expected: usize,
        /// Distinct words in the puzzle.
        actual: usize,
    },

    /// More groups or words than identifiers can address.
    #[error("Puzzle is too large: {groups} groups, {words} words")]
    TooLarge {
        /// Number of groups.
        groups: usize,
        /// Number of words.
        words: usize,
    },
}
