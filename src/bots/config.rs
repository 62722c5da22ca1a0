//! Simulator configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::policy::Difficulty;

/// Range a bot's per-move think time is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinkTime {
    /// Fastest move.
    pub min: Duration,
    /// Slowest move.
    pub max: Duration,
}

impl ThinkTime {
    /// Create a range from whole seconds.
    #[must_use]
    pub const fn secs(min: u64, max: u64) -> Self {
        Self {
            min: Duration::from_secs(min),
            max: Duration::from_secs(max),
        }
    }
}

/// Opponent simulator configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Random seed for policy decisions and think times.
    /// Same seed produces the same match.
    pub seed: u64,

    /// Attempt budget the bot starts with.
    pub starting_attempts: i32,

    /// Upper bound on drive-loop iterations.
    pub max_moves: usize,

    /// Think time per difficulty, indexed by `Difficulty::index`.
    pub think_times: [ThinkTime; 4],
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_attempts: 4,
            max_moves: 64,
            think_times: [
                ThinkTime::secs(8, 20),
                ThinkTime::secs(6, 15),
                ThinkTime::secs(4, 10),
                ThinkTime::secs(2, 6),
            ],
        }
    }
}

impl SimulatorConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom attempt budget.
    #[must_use]
    pub fn with_starting_attempts(mut self, attempts: i32) -> Self {
        self.starting_attempts = attempts;
        self
    }

    /// Create a new config with custom move limit.
    #[must_use]
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Override the think time for one difficulty.
    #[must_use]
    pub fn with_think_time(mut self, difficulty: Difficulty, think: ThinkTime) -> Self {
        self.think_times[difficulty.index()] = think;
        self
    }

    /// Think time range for a difficulty.
    #[must_use]
    pub fn think_time(&self, difficulty: Difficulty) -> ThinkTime {
        self.think_times[difficulty.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulatorConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.starting_attempts, 4);
        assert_eq!(config.think_time(Difficulty::Legendary), ThinkTime::secs(2, 6));
    }

    #[test]
    fn test_builder_pattern() {
        let config = SimulatorConfig::default()
            .with_seed(123)
            .with_max_moves(10)
            .with_think_time(Difficulty::Easy, ThinkTime::secs(1, 1));

        assert_eq!(config.seed, 123);
        assert_eq!(config.max_moves, 10);
        assert_eq!(config.think_time(Difficulty::Easy), ThinkTime::secs(1, 1));
        assert_eq!(config.think_time(Difficulty::Medium), ThinkTime::secs(6, 15));
    }

    #[test]
    fn test_serialization() {
        let config = SimulatorConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SimulatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
