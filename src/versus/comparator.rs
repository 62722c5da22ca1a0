//! Comparing a human play-through with a simulated one.
//!
//! Rules, in order:
//! 1. Both finished: faster wins, equal times draw.
//! 2. One finished: that side wins.
//! 3. Neither finished: more solved groups wins, equal counts draw.

use std::cmp::Ordering;
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bots::SimulationResult;
use crate::puzzle::Puzzle;
use crate::rules::{GameState, GameStatus};

/// Result of a versus match, from the human's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    HumanWins,
    BotWins,
    Draw,
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::HumanWins => write!(f, "You win!"),
            MatchOutcome::BotWins => write!(f, "The bot wins"),
            MatchOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Error type for matches that cannot be decided yet.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum VersusError {
    /// The human's play-through has not ended.
    #[error("The human side is still in progress")]
    HumanInProgress,
}

/// One side of a match, reduced to what the comparison needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideSummary {
    /// Every group solved.
    pub finished: bool,
    /// Number of groups solved.
    pub solved_groups: usize,
    /// Time taken.
    pub elapsed: Duration,
}

impl SideSummary {
    /// Summarize a terminal human play-through.
    pub fn from_human(state: &GameState, puzzle: &Puzzle) -> Result<Self, VersusError> {
        let ended_at = state.ended_at().ok_or(VersusError::HumanInProgress)?;
        Ok(Self {
            finished: state.status() == GameStatus::Won
                && state.solved_groups().len() == puzzle.group_count(),
            solved_groups: state.solved_groups().len(),
            elapsed: ended_at.duration_since(state.started_at()),
        })
    }

    /// Summarize a bot play-through.
    #[must_use]
    pub fn from_bot(result: &SimulationResult) -> Self {
        Self {
            finished: result.is_complete(),
            solved_groups: result.solved_groups.len(),
            elapsed: result.elapsed_time,
        }
    }

    /// Decide a match between two summaries.
    #[must_use]
    pub fn versus(&self, bot: &SideSummary) -> MatchOutcome {
        let ordering = match (self.finished, bot.finished) {
            (true, true) => bot.elapsed.cmp(&self.elapsed),
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.solved_groups.cmp(&bot.solved_groups),
        };
        match ordering {
            Ordering::Greater => MatchOutcome::HumanWins,
            Ordering::Less => MatchOutcome::BotWins,
            Ordering::Equal => MatchOutcome::Draw,
        }
    }
}

/// Decide a versus match.
pub fn compare(human: &GameState, puzzle: &Puzzle, bot: &SimulationResult) -> Result<MatchOutcome, VersusError> {
    let human_side = SideSummary::from_human(human, puzzle)?;
    let bot_side = SideSummary::from_bot(bot);
    let outcome = human_side.versus(&bot_side);

    debug!(
        target: "versus",
        "human {:?} vs {} bot {:?}: {:?}",
        human_side,
        bot.difficulty,
        bot_side,
        outcome
    );
    Ok(outcome)
}
