//! Gameplay rules: the state machine shared by daily, custom, and versus play.
//!
//! Hosts create a `GameEngine` from a validated `Puzzle` and feed it
//! `Command`s. Each accepted command yields `Feedback` plus a state
//! snapshot; each rejected command yields an `IllegalCommand` and leaves
//! the state untouched.
//!
//! The engine is synchronous and owns its state exclusively. Concurrent
//! hosts keep one engine per match side and serialize access to it.

pub mod command;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod state;

pub use command::{Command, CommandRecord};
pub use engine::GameEngine;
pub use error::{IllegalCommand, ReplayError};
pub use feedback::{CommandOutcome, Feedback};
pub use state::{GameState, GameStatus};
