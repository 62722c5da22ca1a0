//! Feedback for accepted commands.

use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::core::{GroupId, WordId};
use crate::puzzle::Puzzle;

/// What an accepted command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    /// The word joined the selection.
    Selected { word: WordId },
    /// The selection is already full; nothing changed.
    SelectionFull,
    /// The word is now the burn suspect.
    BurnSuspected { word: WordId },
    /// The burn suspect was tapped again and cleared.
    BurnCleared { word: WordId },
    /// A wildcard was burned.
    WildcardBurned {
        word: WordId,
        /// Burn bonus earned.
        bonus: i32,
        /// Attempts granted for burning the last wildcard.
        extra_attempts: i32,
    },
    /// The burned word belonged to a group; one attempt lost.
    FalseBurn { word: WordId },
    /// The selection matched an unsolved group.
    GroupSolved { group: GroupId },
    /// The selection matched a group that was already solved.
    AlreadySolved { group: GroupId },
    /// Wrong guess; at most `best` of the words share a group.
    PartialMatch { best: usize },
    /// The board was shuffled.
    Shuffled,
    /// The play-through was reset.
    Restarted,
}

impl Feedback {
    /// Player-facing text naming the words involved.
    #[must_use]
    pub fn describe(&self, puzzle: &Puzzle) -> String {
        match *self {
            Feedback::Selected { word } => format!("Selected {}", puzzle.word(word)),
            Feedback::BurnSuspected { word } => {
                format!("Burn {}? Confirm to burn it", puzzle.word(word))
            }
            Feedback::BurnCleared { word } => format!("{} unmarked", puzzle.word(word)),
            Feedback::WildcardBurned { word, .. } => {
                format!("{} was a wildcard! {}", puzzle.word(word), self)
            }
            Feedback::FalseBurn { word } => {
                format!("{} belongs to a group. {}", puzzle.word(word), self)
            }
            Feedback::GroupSolved { group } | Feedback::AlreadySolved { group } => {
                match puzzle.group(group).and_then(|g| g.label.as_deref()) {
                    Some(label) => format!("{} ({})", self, label),
                    None => self.to_string(),
                }
            }
            _ => self.to_string(),
        }
    }

    /// Check if this feedback reports a lost attempt.
    #[must_use]
    pub fn cost_attempt(&self) -> bool {
        matches!(self, Feedback::FalseBurn { .. } | Feedback::PartialMatch { .. })
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feedback::Selected { .. } => write!(f, "Selected"),
            Feedback::SelectionFull => write!(f, "Selection is full"),
            Feedback::BurnSuspected { .. } => write!(f, "Marked for burning"),
            Feedback::BurnCleared { .. } => write!(f, "Unmarked"),
            Feedback::WildcardBurned { bonus, extra_attempts, .. } => {
                write!(f, "+{} burn bonus", bonus)?;
                if *extra_attempts > 0 {
                    write!(f, ", all wildcards burned: +{} attempt", extra_attempts)?;
                }
                Ok(())
            }
            Feedback::FalseBurn { .. } => write!(f, "Not a wildcard: -1 attempt"),
            Feedback::GroupSolved { .. } => write!(f, "Correct!"),
            Feedback::AlreadySolved { .. } => write!(f, "Already solved"),
            Feedback::PartialMatch { best } => write!(f, "{} of these fit together", best),
            Feedback::Shuffled => write!(f, "Shuffled"),
            Feedback::Restarted => write!(f, "Restarted"),
        }
    }
}

/// Result of an accepted command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandOutcome {
    /// What the command did.
    pub feedback: Feedback,

    /// State after the command.
    pub state: GameState,
}
