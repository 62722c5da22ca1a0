//! Opponent simulator for versus mode.
//!
//! ## Overview
//!
//! Four policies play the same puzzle a human plays, headlessly, so the
//! two results can be compared:
//!
//! - **Easy**: random guesses
//! - **Medium**: naive puzzle-order guesses, sometimes random
//! - **Hard**: always finds an unsolved group
//! - **Legendary**: hard, plus burning wildcards once groups run out
//!
//! ## Usage
//!
//! ```rust
//! use wordburn::bots::{Difficulty, OpponentSimulator, SimulatorConfig};
//! use wordburn::puzzle::Puzzle;
//!
//! let puzzle = Puzzle::builder()
//!     .group("Fish", ["BASS", "PIKE", "CARP", "SOLE"])
//!     .group("Notes", ["DO", "RE", "MI", "FA"])
//!     .wildcard("TOAST")
//!     .grid(3, 3)
//!     .build()
//!     .unwrap();
//!
//! let sim = OpponentSimulator::new(SimulatorConfig::default().with_seed(7));
//! let result = sim.run(&puzzle, Difficulty::Hard);
//! assert!(result.is_complete());
//! ```

pub mod config;
pub mod policy;
pub mod simulator;

pub use config::{SimulatorConfig, ThinkTime};
pub use policy::{BotMove, BotPolicy, BotView, Difficulty, UnknownDifficulty};
pub use simulator::{BotMoveOutcome, BotMoveRecord, OpponentSimulator, SimulationResult};
