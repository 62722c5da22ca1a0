//! Commands: the only way a play-through changes.
//!
//! UI taps, bot decisions, and replays all reduce to a stream of `Command`
//! values fed to `GameEngine::apply`. Each accepted command is recorded
//! with the host timestamp it was applied at, so the stream can be
//! replayed deterministically.

use serde::{Deserialize, Serialize};

use crate::core::{Timestamp, WordId};

/// A player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Tap a word: select, deselect into a burn suspect, or move the suspect.
    SelectWord(WordId),
    /// Confirm the current burn suspect.
    ConfirmBurn,
    /// Submit the current selection as a group.
    SubmitGroup,
    /// Shuffle the board (display only).
    Randomize,
    /// Start over with the same puzzle.
    Restart,
}

impl Command {
    /// Check if this command can change game progress.
    ///
    /// `Randomize` only reorders the board; `Restart` discards progress
    /// rather than advancing it.
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(
            self,
            Command::SelectWord(_) | Command::ConfirmBurn | Command::SubmitGroup
        )
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::SelectWord(word) => write!(f, "Select({})", word.0),
            Command::ConfirmBurn => write!(f, "ConfirmBurn"),
            Command::SubmitGroup => write!(f, "Submit"),
            Command::Randomize => write!(f, "Randomize"),
            Command::Restart => write!(f, "Restart"),
        }
    }
}

/// An accepted command with the time it was applied.
///
/// Used for:
/// - Deterministic replay of a play-through
/// - Versus-mode spectating
/// - Debugging
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The command applied.
    pub command: Command,

    /// Host timestamp passed with the command.
    pub at: Timestamp,
}

impl CommandRecord {
    /// Create a new command record.
    #[must_use]
    pub fn new(command: Command, at: Timestamp) -> Self {
        Self { command, at }
    }
}
