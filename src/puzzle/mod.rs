//! Puzzle model: the validated, immutable description of a grid.
//!
//! Hosts build a `PuzzleSpec` (from storage, an authoring tool, or the
//! builder) and turn it into a `Puzzle` exactly once. Validation happens at
//! that gate; the engine and bots never re-check the invariants.

pub mod error;
pub mod model;

pub use error::{PuzzleError, WordSlot};
pub use model::{GridSize, Group, GroupSpec, Puzzle, PuzzleBuilder, PuzzleSpec};
