//! Rule and scoring configuration.
//!
//! Hosts configure the engine at startup by providing:
//! - `RulesConfig`: attempt budget and burn rewards used by the state machine
//! - `ScoringConfig`: weights for the final score
//!
//! Defaults reproduce the standard daily-puzzle rules. Both structs are
//! serializable so hosts can ship rule variants as data.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Attempt budget and burn rewards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Attempts available at the start of a play-through.
    pub starting_attempts: i32,

    /// Burn bonus for a correct burn while `attempts_left >= burn_reward_min_attempts`.
    pub burn_reward_high: i32,

    /// Burn bonus for a correct burn below that threshold.
    pub burn_reward_low: i32,

    /// Attempts needed to earn the high burn reward.
    pub burn_reward_min_attempts: i32,

    /// Attempts granted once, when the last wildcard is burned.
    pub all_burned_bonus_attempts: i32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_attempts: 4,
            burn_reward_high: 10,
            burn_reward_low: 5,
            burn_reward_min_attempts: 2,
            all_burned_bonus_attempts: 1,
        }
    }
}

impl RulesConfig {
    /// Set the starting attempt budget.
    #[must_use]
    pub fn with_starting_attempts(mut self, attempts: i32) -> Self {
        self.starting_attempts = attempts;
        self
    }

    /// Set the high and low burn rewards.
    #[must_use]
    pub fn with_burn_rewards(mut self, high: i32, low: i32) -> Self {
        self.burn_reward_high = high;
        self.burn_reward_low = low;
        self
    }

    /// Set the bonus attempts for burning every wildcard.
    #[must_use]
    pub fn with_all_burned_bonus(mut self, attempts: i32) -> Self {
        self.all_burned_bonus_attempts = attempts;
        self
    }

    /// Burn reward earned with `attempts_left` remaining.
    #[must_use]
    pub fn burn_reward(&self, attempts_left: i32) -> i32 {
        if attempts_left >= self.burn_reward_min_attempts {
            self.burn_reward_high
        } else {
            self.burn_reward_low
        }
    }
}

/// Weights for the final score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points per solved group.
    pub points_per_group: i64,

    /// Bonus for solving every group without using an attempt.
    pub perfect_bonus: i64,

    /// Points per correctly burned wildcard.
    pub correct_burn_points: i64,

    /// Penalty per burn confirmed on a group word.
    pub false_burn_penalty: i64,

    /// Penalty per attempt used.
    pub attempt_penalty: i64,

    /// Bonus for solving every group within `time_bonus_threshold`.
    pub time_bonus: i64,

    /// Time limit for the time bonus.
    #[serde(with = "duration_secs")]
    pub time_bonus_threshold: Duration,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            points_per_group: 10,
            perfect_bonus: 15,
            correct_burn_points: 5,
            false_burn_penalty: 5,
            attempt_penalty: 2,
            time_bonus: 10,
            time_bonus_threshold: Duration::from_secs(90),
        }
    }
}

impl ScoringConfig {
    /// Set the time bonus threshold.
    #[must_use]
    pub fn with_time_bonus_threshold(mut self, threshold: Duration) -> Self {
        self.time_bonus_threshold = threshold;
        self
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_secs)
    }
}
