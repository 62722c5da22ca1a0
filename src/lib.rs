//! # wordburn
//!
//! Engine for a word-grouping puzzle with wildcard burns and bot opponents.
//!
//! A grid of words hides equal-sized groups plus a few wildcards that
//! belong to none. Players submit groups under a small attempt budget and
//! may "burn" words they believe are wildcards, for a bonus if right and a
//! lost attempt if wrong.
//!
//! ## Design Principles
//!
//! 1. **Validate once**: a `Puzzle` only exists if its invariants hold.
//!    Nothing downstream re-checks them.
//!
//! 2. **One transition function**: every input is a `Command` applied by
//!    `GameEngine::apply`, which either applies fully or rejects without
//!    touching state.
//!
//! 3. **No I/O**: hosts supply timestamps and seeds. Play-throughs and bot
//!    matches are reproducible from those.
//!
//! ## Modules
//!
//! - `core`: identifiers, timestamps, RNG, configuration
//! - `puzzle`: puzzle spec, validation, the immutable `Puzzle`
//! - `rules`: commands, game state, the state machine
//! - `scoring`: final score and its breakdown
//! - `bots`: opponent policies and the headless simulator
//! - `versus`: deciding a human vs bot match
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use wordburn::{Command, GameEngine, GameStatus, Puzzle, RulesConfig, Timestamp};
//!
//! let puzzle = Puzzle::builder()
//!     .group("Fish", ["BASS", "PIKE", "CARP", "SOLE"])
//!     .wildcard("TOAST")
//!     .build()
//!     .unwrap();
//! let puzzle = Arc::new(puzzle);
//! let mut engine = GameEngine::new(puzzle.clone(), RulesConfig::default(), 7, Timestamp::ZERO);
//!
//! for word in ["BASS", "PIKE", "CARP", "SOLE"] {
//!     let id = puzzle.word_id(word).unwrap();
//!     engine.apply(Command::SelectWord(id), Timestamp::from_secs(1)).unwrap();
//! }
//! let outcome = engine.apply(Command::SubmitGroup, Timestamp::from_secs(2)).unwrap();
//! assert_eq!(outcome.state.status(), GameStatus::Won);
//! ```

pub mod bots;
pub mod core;
pub mod puzzle;
pub mod rules;
pub mod scoring;
pub mod versus;

// Re-export commonly used types
pub use crate::core::{GameRng, GroupId, RulesConfig, ScoringConfig, Timestamp, WordId};

pub use crate::puzzle::{GridSize, Group, GroupSpec, Puzzle, PuzzleBuilder, PuzzleError, PuzzleSpec};

pub use crate::rules::{
    Command, CommandOutcome, CommandRecord, Feedback, GameEngine, GameState, GameStatus, IllegalCommand,
    ReplayError,
};

pub use crate::scoring::{score, ScoreBreakdown};

pub use crate::bots::{
    BotMove, BotPolicy, Difficulty, OpponentSimulator, SimulationResult, SimulatorConfig,
};

pub use crate::versus::{compare, MatchOutcome, SideSummary, VersusError};
