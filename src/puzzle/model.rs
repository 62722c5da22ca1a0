//! Puzzle specification and the validated puzzle.
//!
//! ## PuzzleSpec
//!
//! The unvalidated shape hosts hand over (deserialized from storage or
//! built by an authoring tool). Nothing trusts it until it passes
//! `PuzzleSpec::validate`.
//!
//! ## Puzzle
//!
//! The validated, immutable grid. Words are interned to `WordId`s in the
//! original order (group-major, then wildcards) and every lookup the
//! engine and bots need is precomputed.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{PuzzleError, WordSlot};
use crate::core::{GroupId, WordId};

/// Display grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl GridSize {
    /// Create a grid size.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of cells, `None` if `rows * cols` overflows.
    #[must_use]
    pub const fn cells(self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }
}

/// One group as authored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSpec {
    /// Theme text shown once the group is solved.
    #[serde(default)]
    pub label: Option<String>,

    /// The group's words.
    pub words: Vec<String>,
}

/// Unvalidated puzzle description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSpec {
    /// Groups in authored order.
    pub groups: Vec<GroupSpec>,

    /// Decoy words belonging to no group.
    #[serde(default)]
    pub wildcards: Vec<String>,

    /// Declared display grid.
    pub grid: GridSize,
}

impl PuzzleSpec {
    /// Check the grid invariants.
    ///
    /// Groups must be non-empty, equal-sized, and pairwise disjoint;
    /// wildcards must be disjoint from every group; no word may repeat;
    /// the word count must fill the declared grid exactly.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.groups.is_empty() {
            return Err(PuzzleError::NoGroups);
        }

        for (index, group) in self.groups.iter().enumerate() {
            if group.words.is_empty() {
                return Err(PuzzleError::EmptyGroup { group: index });
            }
        }

        let slots = self
            .groups
            .iter()
            .enumerate()
            .flat_map(|(i, g)| g.words.iter().map(move |w| (WordSlot::Group(i), w)))
            .chain(self.wildcards.iter().map(|w| (WordSlot::Wildcard, w)));
        for (slot, word) in slots {
            if word.trim().is_empty() {
                return Err(PuzzleError::BlankWord { slot });
            }
        }

        let expected = self.groups[0].words.len();
        for (index, group) in self.groups.iter().enumerate().skip(1) {
            if group.words.len() != expected {
                return Err(PuzzleError::GroupSizeMismatch {
                    group: index,
                    expected,
                    actual: group.words.len(),
                });
            }
        }

        let mut seen = FxHashSet::default();
        for word in self.all_words() {
            if !seen.insert(word.trim()) {
                return Err(PuzzleError::DuplicateWord {
                    word: word.trim().to_string(),
                });
            }
        }

        let cells = self.grid.cells();
        if cells != Some(seen.len()) {
            return Err(PuzzleError::GridSizeMismatch {
                rows: self.grid.rows,
                cols: self.grid.cols,
                expected: cells.unwrap_or(usize::MAX),
                actual: seen.len(),
            });
        }

        if self.groups.len() > u8::MAX as usize || seen.len() > u16::MAX as usize {
            return Err(PuzzleError::TooLarge {
                groups: self.groups.len(),
                words: seen.len(),
            });
        }

        Ok(())
    }

    fn all_words(&self) -> impl Iterator<Item = &String> {
        self.groups
            .iter()
            .flat_map(|g| g.words.iter())
            .chain(self.wildcards.iter())
    }
}

/// A validated group of words sharing a hidden theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    /// This group's ID.
    pub id: GroupId,

    /// Theme text, if authored.
    pub label: Option<String>,

    /// Member words in authored order.
    pub words: SmallVec<[WordId; 4]>,
}

impl Group {
    /// Check membership.
    #[must_use]
    pub fn contains(&self, word: WordId) -> bool {
        self.words.contains(&word)
    }
}

/// Validated, immutable puzzle.
///
/// Only obtainable through `Puzzle::new` (or `TryFrom<PuzzleSpec>`), so
/// holders may rely on the grid invariants without re-checking them.
#[derive(Clone, Debug)]
pub struct Puzzle {
    words: Vec<String>,
    groups: Vec<Group>,
    wildcards: Vec<WordId>,
    group_of: Vec<Option<GroupId>>,
    group_size: usize,
    grid: GridSize,
    index: FxHashMap<String, WordId>,
}

impl Puzzle {
    /// Validate a spec and intern its words.
    pub fn new(spec: PuzzleSpec) -> Result<Self, PuzzleError> {
        spec.validate()?;

        let group_size = spec.groups[0].words.len();
        let total = spec.grid.cells().unwrap_or_default();
        let mut words = Vec::with_capacity(total);
        let mut group_of = Vec::with_capacity(total);
        let mut index = FxHashMap::default();
        let mut groups = Vec::with_capacity(spec.groups.len());

        let mut intern = |word: &str, group: Option<GroupId>| {
            let id = WordId::new(words.len() as u16);
            words.push(word.trim().to_string());
            group_of.push(group);
            index.insert(word.trim().to_string(), id);
            id
        };

        for (i, group) in spec.groups.into_iter().enumerate() {
            let id = GroupId::new(i as u8);
            let members = group.words.iter().map(|w| intern(w, Some(id))).collect();
            groups.push(Group {
                id,
                label: group.label,
                words: members,
            });
        }

        let wildcards = spec.wildcards.iter().map(|w| intern(w, None)).collect();

        Ok(Self {
            words,
            groups,
            wildcards,
            group_of,
            group_size,
            grid: spec.grid,
            index,
        })
    }

    /// Start a fluent builder.
    #[must_use]
    pub fn builder() -> PuzzleBuilder {
        PuzzleBuilder::default()
    }

    // === Words ===

    /// All words in original order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words on the grid.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// All word IDs in original order.
    pub fn word_ids(&self) -> impl Iterator<Item = WordId> {
        WordId::all(self.words.len())
    }

    /// Text of a word. Returns `""` for IDs outside this puzzle.
    #[must_use]
    pub fn word(&self, id: WordId) -> &str {
        self.words.get(id.index()).map(String::as_str).unwrap_or("")
    }

    /// Look up a word by text (surrounding whitespace ignored).
    #[must_use]
    pub fn word_id(&self, word: &str) -> Option<WordId> {
        self.index.get(word.trim()).copied()
    }

    /// Check that an ID belongs to this puzzle.
    #[must_use]
    pub fn contains_word(&self, id: WordId) -> bool {
        id.index() < self.words.len()
    }

    // === Groups ===

    /// Groups in authored order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Get a group by ID.
    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id.index())
    }

    /// Number of groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Words per group.
    #[must_use]
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Group a word belongs to, `None` for wildcards.
    #[must_use]
    pub fn group_of(&self, word: WordId) -> Option<GroupId> {
        self.group_of.get(word.index()).copied().flatten()
    }

    // === Wildcards ===

    /// Wildcards in authored order.
    #[must_use]
    pub fn wildcards(&self) -> &[WordId] {
        &self.wildcards
    }

    /// Check if a word is a wildcard.
    #[must_use]
    pub fn is_wildcard(&self, word: WordId) -> bool {
        self.contains_word(word) && self.group_of(word).is_none()
    }

    /// Declared display grid.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    // === Matching ===

    /// Find the group whose word set equals `words`.
    ///
    /// Order is ignored. Returns `None` unless `words` holds exactly
    /// `group_size` words that together form one group.
    #[must_use]
    pub fn match_group(&self, words: &[WordId]) -> Option<GroupId> {
        if words.len() != self.group_size {
            return None;
        }
        self.groups
            .iter()
            .find(|g| words.iter().all(|w| g.contains(*w)) && g.words.iter().all(|w| words.contains(w)))
            .map(|g| g.id)
    }

    /// Largest number of `words` that share a single group.
    #[must_use]
    pub fn best_overlap(&self, words: &[WordId]) -> usize {
        self.groups
            .iter()
            .map(|g| words.iter().filter(|w| g.contains(**w)).count())
            .max()
            .unwrap_or(0)
    }
}

impl TryFrom<PuzzleSpec> for Puzzle {
    type Error = PuzzleError;

    fn try_from(spec: PuzzleSpec) -> Result<Self, Self::Error> {
        Puzzle::new(spec)
    }
}

/// Fluent construction of a `Puzzle`.
///
/// ```
/// use wordburn::puzzle::Puzzle;
///
/// let puzzle = Puzzle::builder()
///     .group("Fish", ["BASS", "PIKE", "CARP", "SOLE"])
///     .group("Notes", ["DO", "RE", "MI", "FA"])
///     .wildcard("TOAST")
///     .grid(3, 3)
///     .build()
///     .unwrap();
///
/// assert_eq!(puzzle.group_count(), 2);
/// assert!(puzzle.is_wildcard(puzzle.word_id("TOAST").unwrap()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PuzzleBuilder {
    groups: Vec<GroupSpec>,
    wildcards: Vec<String>,
    grid: Option<GridSize>,
}

impl PuzzleBuilder {
    /// Add a labelled group.
    #[must_use]
    pub fn group<I, S>(mut self, label: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.push(GroupSpec {
            label: Some(label.into()),
            words: words.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Add a group without a label.
    #[must_use]
    pub fn unlabeled_group<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.push(GroupSpec {
            label: None,
            words: words.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Add a wildcard.
    #[must_use]
    pub fn wildcard(mut self, word: impl Into<String>) -> Self {
        self.wildcards.push(word.into());
        self
    }

    /// Declare the display grid.
    ///
    /// Defaults to a single row holding every word.
    #[must_use]
    pub fn grid(mut self, rows: usize, cols: usize) -> Self {
        self.grid = Some(GridSize::new(rows, cols));
        self
    }

    /// The unvalidated spec.
    #[must_use]
    pub fn spec(self) -> PuzzleSpec {
        let total = self.groups.iter().map(|g| g.words.len()).sum::<usize>() + self.wildcards.len();
        PuzzleSpec {
            groups: self.groups,
            wildcards: self.wildcards,
            grid: self.grid.unwrap_or(GridSize::new(1, total)),
        }
    }

    /// Validate and build.
    pub fn build(self) -> Result<Puzzle, PuzzleError> {
        Puzzle::new(self.spec())
    }
}
