//! Versus mode: decide a match between a human and a bot.

pub mod comparator;

pub use comparator::{compare, MatchOutcome, SideSummary, VersusError};
