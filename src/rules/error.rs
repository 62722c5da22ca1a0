//! Rejected commands.
//!
//! A rejection leaves the `GameState` exactly as it was and never costs
//! an attempt. The `Display` text is suitable for showing to the player.

use thiserror::Error;

use super::command::Command;
use super::state::GameStatus;
use crate::core::WordId;

/// Error type for commands that are not legal in the current state.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum IllegalCommand {
    /// The play-through already ended; only `Restart` is accepted.
    #[error("The game is over ({status})")]
    GameOver {
        /// Terminal status.
        status: GameStatus,
    },

    /// The word ID is not part of this puzzle.
    #[error("Unknown word {word}")]
    UnknownWord {
        /// The offending ID.
        word: WordId,
    },

    /// The word was already solved or burned.
    #[error("That word is already out of play")]
    WordLocked {
        /// The locked word.
        word: WordId,
    },

    /// `ConfirmBurn` without a burn suspect.
    #[error("Tap a selected word again to mark it for burning")]
    NoBurnSuspect,

    /// `SubmitGroup` with the wrong number of selected words.
    #[error("Select exactly {expected} words")]
    WrongSelectionSize {
        /// Group size.
        expected: usize,
        /// Words currently selected.
        actual: usize,
    },
}

/// Error type for a command log that cannot be replayed.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("Command {index} ({command}) was rejected on replay: {source}")]
pub struct ReplayError {
    /// Position of the rejected record.
    pub index: usize,
    /// The rejected command.
    pub command: Command,
    /// Why it was rejected.
    #[source]
    pub source: IllegalCommand,
}
