//! Score computation.

use serde::{Deserialize, Serialize};

use crate::core::ScoringConfig;
use crate::puzzle::Puzzle;
use crate::rules::GameState;

/// Every term of a score, for statistics and end-of-game screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Points for solved groups.
    pub groups: i64,
    /// Bonus for a flawless solve.
    pub perfect_bonus: i64,
    /// Points for burned wildcards.
    pub burns: i64,
    /// Penalty for false burns (zero or negative).
    pub false_burns: i64,
    /// Penalty for attempts used (zero or negative).
    pub attempts: i64,
    /// Bonus for a fast solve.
    pub time_bonus: i64,
}

impl ScoreBreakdown {
    /// Compute each term for `state`.
    #[must_use]
    pub fn compute(state: &GameState, puzzle: &Puzzle, config: &ScoringConfig) -> Self {
        let solved = state.solved_groups().len();
        let all_solved = solved == puzzle.group_count();
        let attempts_used = state.attempts_used() as i64;

        let fast = state
            .ended_at()
            .map(|end| end.duration_since(state.started_at()) <= config.time_bonus_threshold)
            .unwrap_or(false);

        Self {
            groups: config.points_per_group * solved as i64,
            perfect_bonus: if all_solved && attempts_used == 0 {
                config.perfect_bonus
            } else {
                0
            },
            burns: config.correct_burn_points * state.burned_wildcards().len() as i64,
            false_burns: -config.false_burn_penalty * state.false_burns() as i64,
            attempts: -config.attempt_penalty * attempts_used,
            time_bonus: if all_solved && fast { config.time_bonus } else { 0 },
        }
    }

    /// Sum of the terms before clamping.
    #[must_use]
    pub fn raw(&self) -> i64 {
        self.groups + self.perfect_bonus + self.burns + self.false_burns + self.attempts + self.time_bonus
    }

    /// Final score, never negative.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.raw().clamp(0, u32::MAX as i64) as u32
    }
}

/// Final score for a play-through.
#[must_use]
pub fn score(state: &GameState, puzzle: &Puzzle, config: &ScoringConfig) -> u32 {
    ScoreBreakdown::compute(state, puzzle, config).total()
}
