//! Game state for one play-through.
//!
//! ## GameState
//!
//! Everything the engine tracks between commands:
//! - Selection and the transient burn suspect
//! - Locked words, solved groups, burned wildcards
//! - Attempt budget, burn bonus, status
//! - Board display order
//!
//! Fields are only written by `GameEngine`. Hosts read them through the
//! accessors or through the snapshot attached to every `CommandOutcome`.
//! Collections use `im` persistent structures so those snapshots are O(1).

use std::time::Duration;

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GroupId, RulesConfig, Timestamp, WordId};
use crate::puzzle::Puzzle;

/// Play-through status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Commands are accepted.
    #[default]
    InProgress,
    /// Every group has been solved.
    Won,
    /// The attempt budget ran out.
    Lost,
}

impl GameStatus {
    /// Check if no further moves are accepted.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won => write!(f, "won"),
            GameStatus::Lost => write!(f, "lost"),
        }
    }
}

/// State of one play-through.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) selected: SmallVec<[WordId; 4]>,
    pub(crate) locked: OrdSet<WordId>,
    pub(crate) solved_groups: Vector<GroupId>,
    pub(crate) burned_wildcards: OrdSet<WordId>,
    pub(crate) burn_suspect: Option<WordId>,
    pub(crate) starting_attempts: i32,
    pub(crate) attempts_left: i32,
    pub(crate) burn_bonus: i32,
    pub(crate) false_burns: u32,
    pub(crate) submissions: u32,
    pub(crate) status: GameStatus,
    pub(crate) board: Vector<WordId>,
    pub(crate) started_at: Timestamp,
    pub(crate) ended_at: Option<Timestamp>,
}

impl GameState {
    /// Fresh state for a puzzle.
    ///
    /// The board starts in the puzzle's original word order.
    #[must_use]
    pub fn new(puzzle: &Puzzle, config: &RulesConfig, started_at: Timestamp) -> Self {
        Self {
            selected: SmallVec::new(),
            locked: OrdSet::new(),
            solved_groups: Vector::new(),
            burned_wildcards: OrdSet::new(),
            burn_suspect: None,
            starting_attempts: config.starting_attempts,
            attempts_left: config.starting_attempts,
            burn_bonus: 0,
            false_burns: 0,
            submissions: 0,
            status: GameStatus::InProgress,
            board: puzzle.word_ids().collect(),
            started_at,
            ended_at: None,
        }
    }

    // === Selection ===

    /// Currently selected words, in tap order.
    #[must_use]
    pub fn selected(&self) -> &[WordId] {
        &self.selected
    }

    /// Check if a word is selected.
    #[must_use]
    pub fn is_selected(&self, word: WordId) -> bool {
        self.selected.contains(&word)
    }

    /// Word awaiting burn confirmation.
    #[must_use]
    pub fn burn_suspect(&self) -> Option<WordId> {
        self.burn_suspect
    }

    // === Progress ===

    /// Words removed from play.
    #[must_use]
    pub fn locked(&self) -> &OrdSet<WordId> {
        &self.locked
    }

    /// Check if a word is removed from play.
    #[must_use]
    pub fn is_locked(&self, word: WordId) -> bool {
        self.locked.contains(&word)
    }

    /// Solved groups, in solve order.
    #[must_use]
    pub fn solved_groups(&self) -> &Vector<GroupId> {
        &self.solved_groups
    }

    /// Check if a group has been solved.
    #[must_use]
    pub fn is_solved(&self, group: GroupId) -> bool {
        self.solved_groups.contains(&group)
    }

    /// Wildcards burned so far.
    #[must_use]
    pub fn burned_wildcards(&self) -> &OrdSet<WordId> {
        &self.burned_wildcards
    }

    /// Burns confirmed on words that belong to a group.
    #[must_use]
    pub fn false_burns(&self) -> u32 {
        self.false_burns
    }

    /// Submissions that reached group evaluation.
    #[must_use]
    pub fn submissions(&self) -> u32 {
        self.submissions
    }

    /// Remaining attempt budget.
    #[must_use]
    pub fn attempts_left(&self) -> i32 {
        self.attempts_left
    }

    /// Attempt budget this play-through started with.
    #[must_use]
    pub fn starting_attempts(&self) -> i32 {
        self.starting_attempts
    }

    /// Attempts consumed from the starting budget, never negative.
    #[must_use]
    pub fn attempts_used(&self) -> u32 {
        self.starting_attempts.saturating_sub(self.attempts_left).max(0) as u32
    }

    /// Live score contribution from burns.
    #[must_use]
    pub fn burn_bonus(&self) -> i32 {
        self.burn_bonus
    }

    // === Status ===

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the play-through has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Timestamp the play-through started at.
    #[must_use]
    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    /// Timestamp of the command that ended the play-through.
    #[must_use]
    pub fn ended_at(&self) -> Option<Timestamp> {
        self.ended_at
    }

    /// Elapsed play time, measured to `ended_at` once terminal and to
    /// `now` before that.
    #[must_use]
    pub fn elapsed(&self, now: Timestamp) -> Duration {
        self.ended_at.unwrap_or(now).duration_since(self.started_at)
    }

    // === Board ===

    /// Unlocked words in display order.
    #[must_use]
    pub fn board(&self) -> &Vector<WordId> {
        &self.board
    }
}
