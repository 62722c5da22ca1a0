//! Bot policies: how an opponent picks its next move.
//!
//! A policy is a pure function of what the bot can see (`BotView`) plus
//! an RNG. Policies keep no memory between calls.
//!
//! - `Easy`: random guesses
//! - `Medium`: usually the first remaining words in puzzle order
//! - `Hard`: always finds an unsolved group
//! - `Legendary`: like hard, and burns wildcards once groups run out
//!
//! Easy, medium, and hard also roll an intent to burn alongside their
//! guess. The drive loop only honours burn requests that come without a
//! guess, so that roll never takes effect for them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::{GameRng, GroupId, WordId};
use crate::puzzle::{Group, Puzzle};

/// Bot difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Legendary,
}

impl Difficulty {
    /// All difficulties, easiest first.
    #[must_use]
    pub const fn all() -> [Difficulty; 4] {
        [
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Legendary,
        ]
    }

    /// Position in `all()`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
            Difficulty::Legendary => 3,
        }
    }

    /// Lowercase tag used by hosts and RNG context streams.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Legendary => "legendary",
        }
    }

    /// Chance of rolling an intent to burn next to a guess.
    #[must_use]
    pub const fn burn_intent(self) -> Option<f64> {
        match self {
            Difficulty::Easy => Some(0.30),
            Difficulty::Medium => Some(0.15),
            Difficulty::Hard => Some(0.05),
            Difficulty::Legendary => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error type for unrecognised difficulty tags.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Unknown difficulty \"{0}\"")]
pub struct UnknownDifficulty(pub String);

impl std::str::FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::all()
            .into_iter()
            .find(|d| d.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDifficulty(s.to_string()))
    }
}

/// What a bot can see when choosing a move.
#[derive(Clone, Copy, Debug)]
pub struct BotView<'a> {
    /// The puzzle being played.
    pub puzzle: &'a Puzzle,
    /// Words still in play, in original puzzle order.
    pub remaining: &'a [WordId],
    /// Groups solved so far.
    pub solved: &'a [GroupId],
    /// Wildcards not yet burned.
    pub wildcards_left: &'a [WordId],
}

impl BotView<'_> {
    /// First unsolved group whose words are all still in play.
    #[must_use]
    pub fn available_group(&self) -> Option<&Group> {
        self.puzzle.groups().iter().find(|g| {
            !self.solved.contains(&g.id) && g.words.iter().all(|w| self.remaining.contains(w))
        })
    }
}

/// A bot decision: a guess, a burn request, or (inertly) both.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotMove {
    /// Words to submit; empty for a pure burn request.
    pub guess: SmallVec<[WordId; 4]>,
    /// Intent to burn a wildcard.
    pub burn: bool,
}

impl BotMove {
    /// A guess with a burn intent flag.
    #[must_use]
    pub fn guess(words: &[WordId], burn: bool) -> Self {
        Self {
            guess: SmallVec::from_slice(words),
            burn,
        }
    }

    /// A burn request without a guess.
    #[must_use]
    pub fn burn() -> Self {
        Self {
            guess: SmallVec::new(),
            burn: true,
        }
    }

    /// Check if this move asks for a burn instead of a guess.
    #[must_use]
    pub fn is_pure_burn(&self) -> bool {
        self.guess.is_empty() && self.burn
    }
}

/// Policy for choosing a bot's next move.
pub trait BotPolicy {
    /// Choose the next move.
    fn choose_move(&self, view: &BotView<'_>, rng: &mut GameRng) -> BotMove;
}

impl BotPolicy for Difficulty {
    fn choose_move(&self, view: &BotView<'_>, rng: &mut GameRng) -> BotMove {
        match self {
            Difficulty::Easy => {
                let guess = random_guess(view, rng);
                BotMove::guess(&guess, roll_burn(*self, rng))
            }
            Difficulty::Medium => {
                let guess = if rng.gen_bool(0.7) {
                    first_remaining(view)
                } else {
                    random_guess(view, rng)
                };
                BotMove::guess(&guess, roll_burn(*self, rng))
            }
            Difficulty::Hard => {
                let guess = match view.available_group() {
                    Some(group) => group.words.to_vec(),
                    None => random_guess(view, rng),
                };
                BotMove::guess(&guess, roll_burn(*self, rng))
            }
            Difficulty::Legendary => match view.available_group() {
                Some(group) => BotMove::guess(&group.words, false),
                None if !view.wildcards_left.is_empty() => BotMove::burn(),
                None => BotMove::guess(&random_guess(view, rng), false),
            },
        }
    }
}

fn random_guess(view: &BotView<'_>, rng: &mut GameRng) -> Vec<WordId> {
    rng.sample(view.remaining, view.puzzle.group_size())
}

fn first_remaining(view: &BotView<'_>) -> Vec<WordId> {
    view.remaining.iter().take(view.puzzle.group_size()).copied().collect()
}

fn roll_burn(difficulty: Difficulty, rng: &mut GameRng) -> bool {
    difficulty.burn_intent().map(|p| rng.gen_bool(p)).unwrap_or(false)
}
