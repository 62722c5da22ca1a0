//! Headless opponent: plays a whole puzzle under one policy.
//!
//! The drive loop mirrors a human play-through closely enough to compare
//! results, without modelling wall-clock pacing. Each move draws a think
//! time from the difficulty's range; the sum is the bot's elapsed time.
//!
//! Guesses are evaluated with the same `Puzzle::match_group` the engine
//! uses for `SubmitGroup`. A pure burn request removes one wildcard from
//! play and costs an attempt.

use std::time::Duration;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::config::SimulatorConfig;
use super::policy::{BotMove, BotPolicy, BotView, Difficulty};
use crate::core::{GameRng, GroupId, WordId};
use crate::puzzle::Puzzle;

/// What happened to one bot move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotMoveOutcome {
    /// The guess solved a group.
    Solved(GroupId),
    /// The guess was wrong; `best` words shared a group.
    Missed { best: usize },
    /// A wildcard was removed from play.
    Burned(WordId),
    /// A burn was requested with no wildcard left.
    NothingToBurn,
}

/// One move in a simulated play-through.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotMoveRecord {
    /// The policy's decision.
    pub decision: BotMove,
    /// How the drive loop resolved it.
    pub outcome: BotMoveOutcome,
    /// Simulated time at which the move landed.
    pub at: Duration,
}

/// Final result of a simulated play-through.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Policy that played.
    pub difficulty: Difficulty,
    /// Groups solved, in solve order.
    pub solved_groups: Vec<GroupId>,
    /// Groups in the puzzle.
    pub total_groups: usize,
    /// Attempts left when the loop stopped.
    pub attempts_left: i32,
    /// Simulated elapsed time.
    pub elapsed_time: Duration,
    /// Every move, in order.
    pub moves: Vec<BotMoveRecord>,
}

impl SimulationResult {
    /// Check if every group was solved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.solved_groups.len() == self.total_groups
    }
}

/// Runs bot play-throughs.
#[derive(Clone, Debug, Default)]
pub struct OpponentSimulator {
    config: SimulatorConfig,
}

impl OpponentSimulator {
    /// Create a simulator.
    #[must_use]
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Simulator configuration.
    #[must_use]
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Play `puzzle` to completion at `difficulty`.
    ///
    /// Deterministic for a given config seed.
    #[must_use]
    pub fn run(&self, puzzle: &Puzzle, difficulty: Difficulty) -> SimulationResult {
        let mut rng = GameRng::new(self.config.seed).for_context(difficulty.tag());
        self.run_with_rng(puzzle, difficulty, &mut rng)
    }

    /// Play `puzzle` drawing from a caller-supplied RNG.
    pub fn run_with_rng(&self, puzzle: &Puzzle, difficulty: Difficulty, rng: &mut GameRng) -> SimulationResult {
        let think = self.config.think_time(difficulty);
        let total_groups = puzzle.group_count();

        let mut remaining: Vec<WordId> = puzzle.word_ids().collect();
        let mut wildcards_left: Vec<WordId> = puzzle.wildcards().to_vec();
        let mut solved: Vec<GroupId> = Vec::with_capacity(total_groups);
        let mut attempts_left = self.config.starting_attempts;
        let mut elapsed = Duration::ZERO;
        let mut moves = Vec::new();

        while solved.len() < total_groups && attempts_left > 0 && moves.len() < self.config.max_moves {
            let view = BotView {
                puzzle,
                remaining: &remaining,
                solved: &solved,
                wildcards_left: &wildcards_left,
            };
            let decision = difficulty.choose_move(&view, rng);
            elapsed = elapsed.saturating_add(rng.gen_duration(think.min, think.max));

            let outcome = if decision.is_pure_burn() {
                attempts_left -= 1;
                if wildcards_left.is_empty() {
                    BotMoveOutcome::NothingToBurn
                } else {
                    let word = wildcards_left.remove(0);
                    remaining.retain(|w| *w != word);
                    BotMoveOutcome::Burned(word)
                }
            } else {
                match puzzle.match_group(&decision.guess) {
                    Some(group) if !solved.contains(&group) => {
                        solved.push(group);
                        remaining.retain(|w| puzzle.group_of(*w) != Some(group));
                        BotMoveOutcome::Solved(group)
                    }
                    _ => {
                        attempts_left -= 1;
                        BotMoveOutcome::Missed {
                            best: puzzle.best_overlap(&decision.guess),
                        }
                    }
                }
            };

            trace!(target: "simulator", "{} {:?} -> {:?}", difficulty, decision.guess, outcome);
            moves.push(BotMoveRecord {
                decision,
                outcome,
                at: elapsed,
            });
        }

        debug!(
            target: "simulator",
            "{} bot solved {}/{} with {} attempts left in {:?}",
            difficulty,
            solved.len(),
            total_groups,
            attempts_left,
            elapsed
        );

        SimulationResult {
            difficulty,
            solved_groups: solved,
            total_groups,
            attempts_left,
            elapsed_time: elapsed,
            moves,
        }
    }
}
