//! Deterministic random number generation for shuffles and bots.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence, so a
//!   play-through or bot match can be replayed from its seed
//! - **Context streams**: Independent sequences for board shuffles vs
//!   each bot difficulty
//!
//! ```
//! use wordburn::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut board = rng.for_context("board");
//! let mut again = GameRng::new(42).for_context("board");
//!
//! let mut a = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let mut b = a.clone();
//! board.shuffle(&mut a);
//! again.shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use std::hash::{Hash, Hasher};
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Sample a duration uniformly from `[min, max]`, millisecond resolution.
    ///
    /// Bounds beyond `u64::MAX` milliseconds are clamped to it.
    pub fn gen_duration(&mut self, min: Duration, max: Duration) -> Duration {
        let lo = millis(min);
        let hi = millis(max);
        if hi <= lo {
            return min;
        }
        Duration::from_millis(self.inner.gen_range(lo..=hi))
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Choose `amount` distinct elements uniformly at random.
    ///
    /// Returns every element if the slice is shorter than `amount`.
    pub fn sample<T: Clone>(&mut self, slice: &[T], amount: usize) -> Vec<T> {
        slice.choose_multiple(&mut self.inner, amount).cloned().collect()
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
