//! Core types: identifiers, timestamps, RNG, configuration.
//!
//! Nothing in here knows the puzzle rules. The state machine lives in
//! `rules`, and reads its knobs from `RulesConfig`.

pub mod clock;
pub mod config;
pub mod ids;
pub mod rng;

pub use clock::Timestamp;
pub use config::{RulesConfig, ScoringConfig};
pub use ids::{GroupId, WordId};
pub use rng::GameRng;
