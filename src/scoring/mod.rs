//! Scoring: a numeric result for a play-through.
//!
//! ```text
//! score = points_per_group * solved
//!       + perfect_bonus        (all solved, no attempt used)
//!       + correct_burn_points * burned wildcards
//!       - false_burn_penalty  * false burns
//!       - attempt_penalty     * attempts used
//!       + time_bonus           (all solved within the threshold)
//! clamped at zero
//! ```

pub mod score;

pub use score::{score, ScoreBreakdown};
