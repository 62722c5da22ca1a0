//! The gameplay state machine.
//!
//! `GameEngine` owns one `GameState` and applies commands to it:
//! - `SelectWord`: select, convert to a burn suspect, or move the suspect
//! - `ConfirmBurn`: burn the suspect (bonus if wildcard, penalty if not)
//! - `SubmitGroup`: evaluate the selection against the puzzle's groups
//! - `Randomize`: shuffle the board
//! - `Restart`: fresh state for the same puzzle
//!
//! ## Implementation Notes
//!
//! - Every command is validated before anything is written, so a rejected
//!   command leaves the state untouched and costs nothing.
//! - Termination is re-evaluated after `ConfirmBurn` and `SubmitGroup`.
//! - Board shuffles draw from a seeded `GameRng`, so a play-through is
//!   reproducible from `(puzzle, config, seed, history)`.

use std::sync::Arc;

use log::{debug, trace};

use super::command::{Command, CommandRecord};
use super::error::{IllegalCommand, ReplayError};
use super::feedback::{CommandOutcome, Feedback};
use super::state::{GameState, GameStatus};
use crate::core::{GameRng, RulesConfig, Timestamp, WordId};
use crate::puzzle::Puzzle;

/// Drives one play-through of a puzzle.
#[derive(Clone, Debug)]
pub struct GameEngine {
    puzzle: Arc<Puzzle>,
    config: RulesConfig,
    rng: GameRng,
    state: GameState,
    history: Vec<CommandRecord>,
}

impl GameEngine {
    /// Start a play-through at `started_at`.
    #[must_use]
    pub fn new(puzzle: Arc<Puzzle>, config: RulesConfig, seed: u64, started_at: Timestamp) -> Self {
        let state = GameState::new(&puzzle, &config, started_at);
        Self {
            puzzle,
            config,
            rng: GameRng::new(seed).for_context("board"),
            state,
            history: Vec::new(),
        }
    }

    /// Rebuild a play-through by re-applying recorded commands.
    ///
    /// The seed and start time must match the original engine's.
    pub fn replay(
        puzzle: Arc<Puzzle>,
        config: RulesConfig,
        seed: u64,
        started_at: Timestamp,
        records: &[CommandRecord],
    ) -> Result<Self, ReplayError> {
        let mut engine = Self::new(puzzle, config, seed, started_at);
        for (index, record) in records.iter().enumerate() {
            engine
                .apply(record.command, record.at)
                .map_err(|source| ReplayError {
                    index,
                    command: record.command,
                    source,
                })?;
        }
        Ok(engine)
    }

    /// The puzzle being played.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Shared handle to the puzzle.
    #[must_use]
    pub fn puzzle_handle(&self) -> Arc<Puzzle> {
        Arc::clone(&self.puzzle)
    }

    /// Rules in effect.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Every accepted command, restarts included.
    #[must_use]
    pub fn history(&self) -> &[CommandRecord] {
        &self.history
    }

    /// Apply a command at host time `at`.
    ///
    /// Returns the feedback and a snapshot of the new state, or the reason
    /// the command was rejected. Rejections never modify the state.
    pub fn apply(&mut self, command: Command, at: Timestamp) -> Result<CommandOutcome, IllegalCommand> {
        if let Err(err) = self.check(command) {
            trace!(target: "engine", "rejected {}: {}", command, err);
            return Err(err);
        }

        let feedback = match command {
            Command::SelectWord(word) => self.select_word(word),
            Command::ConfirmBurn => {
                let word = self.state.burn_suspect.ok_or(IllegalCommand::NoBurnSuspect)?;
                self.confirm_burn(word, at)
            }
            Command::SubmitGroup => self.submit_group(at),
            Command::Randomize => self.randomize(),
            Command::Restart => self.restart(at),
        };

        trace!(target: "engine", "{} -> {:?}", command, feedback);
        self.history.push(CommandRecord::new(command, at));

        Ok(CommandOutcome {
            feedback,
            state: self.state.clone(),
        })
    }

    /// Enumerate every command `apply` would accept right now.
    #[must_use]
    pub fn legal_commands(&self) -> Vec<Command> {
        if self.state.is_terminal() {
            return vec![Command::Restart];
        }

        let mut commands: Vec<Command> = self.state.board.iter().map(|w| Command::SelectWord(*w)).collect();
        if self.state.burn_suspect.is_some() {
            commands.push(Command::ConfirmBurn);
        }
        if self.state.selected.len() == self.puzzle.group_size() {
            commands.push(Command::SubmitGroup);
        }
        commands.push(Command::Randomize);
        commands.push(Command::Restart);
        commands
    }

    // === Validation ===

    fn check(&self, command: Command) -> Result<(), IllegalCommand> {
        if command == Command::Restart {
            return Ok(());
        }
        if self.state.is_terminal() {
            return Err(IllegalCommand::GameOver {
                status: self.state.status,
            });
        }

        match command {
            Command::SelectWord(word) => {
                if !self.puzzle.contains_word(word) {
                    return Err(IllegalCommand::UnknownWord { word });
                }
                if self.state.is_locked(word) {
                    return Err(IllegalCommand::WordLocked { word });
                }
            }
            Command::ConfirmBurn => {
                if self.state.burn_suspect.is_none() {
                    return Err(IllegalCommand::NoBurnSuspect);
                }
            }
            Command::SubmitGroup => {
                let expected = self.puzzle.group_size();
                if self.state.selected.len() != expected {
                    return Err(IllegalCommand::WrongSelectionSize {
                        expected,
                        actual: self.state.selected.len(),
                    });
                }
            }
            Command::Randomize | Command::Restart => {}
        }
        Ok(())
    }

    // === Transitions ===

    fn select_word(&mut self, word: WordId) -> Feedback {
        let state = &mut self.state;

        if state.burn_suspect == Some(word) {
            state.burn_suspect = None;
            return Feedback::BurnCleared { word };
        }

        // Re-tapping a selected word marks it for burning instead of
        // just deselecting it.
        if let Some(pos) = state.selected.iter().position(|w| *w == word) {
            state.selected.remove(pos);
            state.burn_suspect = Some(word);
            return Feedback::BurnSuspected { word };
        }

        if state.burn_suspect.is_some() {
            state.burn_suspect = Some(word);
            return Feedback::BurnSuspected { word };
        }

        if state.selected.len() < self.puzzle.group_size() {
            state.selected.push(word);
            return Feedback::Selected { word };
        }

        Feedback::SelectionFull
    }

    fn confirm_burn(&mut self, word: WordId, at: Timestamp) -> Feedback {
        let feedback = if self.puzzle.is_wildcard(word) {
            let state = &mut self.state;
            let bonus = self.config.burn_reward(state.attempts_left);
            state.burned_wildcards.insert(word);
            state.burn_bonus += bonus;
            lock(state, word);

            let mut extra_attempts = 0;
            if state.burned_wildcards.len() == self.puzzle.wildcards().len() {
                extra_attempts = self.config.all_burned_bonus_attempts;
                state.attempts_left += extra_attempts;
            }

            debug!(
                target: "engine",
                "burned wildcard {:?}: +{} bonus, +{} attempts",
                self.puzzle.word(word),
                bonus,
                extra_attempts
            );
            Feedback::WildcardBurned {
                word,
                bonus,
                extra_attempts,
            }
        } else {
            self.state.attempts_left -= 1;
            self.state.false_burns += 1;
            debug!(
                target: "engine",
                "false burn on {:?}, {} attempts left",
                self.puzzle.word(word),
                self.state.attempts_left
            );
            Feedback::FalseBurn { word }
        };

        self.state.burn_suspect = None;
        self.state.selected.clear();
        self.check_termination(at);
        feedback
    }

    fn submit_group(&mut self, at: Timestamp) -> Feedback {
        let selected: Vec<WordId> = self.state.selected.drain(..).collect();
        self.state.submissions += 1;

        let feedback = match self.puzzle.match_group(&selected) {
            Some(group) if self.state.is_solved(group) => Feedback::AlreadySolved { group },
            Some(group) => {
                self.state.solved_groups.push_back(group);
                for word in &selected {
                    lock(&mut self.state, *word);
                }
                debug!(target: "engine", "solved {}", group);
                Feedback::GroupSolved { group }
            }
            None => {
                self.state.attempts_left -= 1;
                let best = self.puzzle.best_overlap(&selected);
                debug!(
                    target: "engine",
                    "wrong guess, {} fit together, {} attempts left",
                    best,
                    self.state.attempts_left
                );
                Feedback::PartialMatch { best }
            }
        };

        self.check_termination(at);
        feedback
    }

    fn randomize(&mut self) -> Feedback {
        let mut board: Vec<WordId> = self.state.board.iter().copied().collect();
        self.rng.shuffle(&mut board);
        self.state.board = board.into_iter().collect();
        Feedback::Shuffled
    }

    fn restart(&mut self, at: Timestamp) -> Feedback {
        debug!(target: "engine", "restart at {}", at);
        self.state = GameState::new(&self.puzzle, &self.config, at);
        Feedback::Restarted
    }

    fn check_termination(&mut self, at: Timestamp) {
        let state = &mut self.state;
        let won = self
            .puzzle
            .groups()
            .iter()
            .all(|g| g.words.iter().all(|w| state.locked.contains(w)));

        state.status = if won {
            GameStatus::Won
        } else if state.attempts_left <= 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        if state.status.is_terminal() {
            state.ended_at = Some(at);
            debug!(
                target: "engine",
                "game {} after {:?}",
                state.status,
                at.duration_since(state.started_at)
            );
        }
    }
}

/// Remove a word from play.
fn lock(state: &mut GameState, word: WordId) {
    state.locked.insert(word);
    if let Some(pos) = state.board.index_of(&word) {
        state.board.remove(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> GameEngine {
        let puzzle = Puzzle::builder()
            .unlabeled_group(["A", "B", "C", "D"])
            .unlabeled_group(["E", "F", "G", "H"])
            .wildcard("W")
            .grid(3, 3)
            .build()
            .unwrap();
        GameEngine::new(Arc::new(puzzle), RulesConfig::default(), 42, Timestamp::ZERO)
    }

    fn id(engine: &GameEngine, word: &str) -> WordId {
        engine.puzzle().word_id(word).unwrap()
    }

    fn select(engine: &mut GameEngine, words: &[&str]) {
        for word in words {
            let w = id(engine, word);
            engine.apply(Command::SelectWord(w), Timestamp::ZERO).unwrap();
        }
    }

    #[test]
    fn test_select_appends() {
        let mut engine = engine();
        select(&mut engine, &["A", "B"]);
        assert_eq!(engine.state().selected(), &[WordId(0), WordId(1)]);
    }

    #[test]
    fn test_select_full_is_noop() {
        let mut engine = engine();
        select(&mut engine, &["A", "B", "C", "D"]);
        let e = id(&engine, "E");
        let outcome = engine.apply(Command::SelectWord(e), Timestamp::ZERO).unwrap();
        assert_eq!(outcome.feedback, Feedback::SelectionFull);
        assert_eq!(outcome.state.selected().len(), 4);
    }

    #[test]
    fn test_retap_selected_makes_suspect() {
        let mut engine = engine();
        select(&mut engine, &["A", "B", "A"]);
        assert_eq!(engine.state().selected(), &[WordId(1)]);
        assert_eq!(engine.state().burn_suspect(), Some(WordId(0)));

        // Tapping the suspect clears it.
        select(&mut engine, &["A"]);
        assert_eq!(engine.state().burn_suspect(), None);
        assert_eq!(engine.state().selected(), &[WordId(1)]);
    }

    #[test]
    fn test_tap_moves_suspect() {
        let mut engine = engine();
        select(&mut engine, &["A", "A", "W"]);
        assert_eq!(engine.state().burn_suspect(), Some(id(&engine, "W")));
        assert!(engine.state().selected().is_empty());
    }

    #[test]
    fn test_submit_wrong_size_rejected() {
        let mut engine = engine();
        select(&mut engine, &["A", "B"]);
        let before = engine.state().clone();

        let err = engine.apply(Command::SubmitGroup, Timestamp::ZERO).unwrap_err();
        assert_eq!(err, IllegalCommand::WrongSelectionSize { expected: 4, actual: 2 });
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_confirm_without_suspect_rejected() {
        let mut engine = engine();
        let err = engine.apply(Command::ConfirmBurn, Timestamp::ZERO).unwrap_err();
        assert_eq!(err, IllegalCommand::NoBurnSuspect);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_unknown_word_rejected() {
        let mut engine = engine();
        let err = engine.apply(Command::SelectWord(WordId(99)), Timestamp::ZERO).unwrap_err();
        assert_eq!(err, IllegalCommand::UnknownWord { word: WordId(99) });
    }

    #[test]
    fn test_false_burn_costs_attempt_and_clears_selection() {
        let mut engine = engine();
        select(&mut engine, &["E", "A", "A"]);
        let outcome = engine.apply(Command::ConfirmBurn, Timestamp::ZERO).unwrap();

        assert_eq!(outcome.feedback, Feedback::FalseBurn { word: WordId(0) });
        assert_eq!(outcome.state.attempts_left(), 3);
        assert_eq!(outcome.state.false_burns(), 1);
        assert!(outcome.state.selected().is_empty());
        assert!(!outcome.state.is_locked(WordId(0)));
    }

    #[test]
    fn test_low_attempt_burn_reward() {
        let mut engine = engine();
        for _ in 0..3 {
            select(&mut engine, &["A", "B", "C", "E"]);
            engine.apply(Command::SubmitGroup, Timestamp::ZERO).unwrap();
        }
        assert_eq!(engine.state().attempts_left(), 1);

        select(&mut engine, &["W", "W"]);
        let outcome = engine.apply(Command::ConfirmBurn, Timestamp::ZERO).unwrap();
        assert_eq!(
            outcome.feedback,
            Feedback::WildcardBurned { word: id(&engine, "W"), bonus: 5, extra_attempts: 1 }
        );
        assert_eq!(outcome.state.attempts_left(), 2);
        assert_eq!(outcome.state.burn_bonus(), 5);
    }

    #[test]
    fn test_loss_on_exhaustion() {
        let mut engine = engine();
        for i in 0..4 {
            select(&mut engine, &["A", "B", "C", "E"]);
            let outcome = engine.apply(Command::SubmitGroup, Timestamp::from_secs(i + 1)).unwrap();
            assert_eq!(outcome.feedback, Feedback::PartialMatch { best: 3 });
        }
        assert_eq!(engine.state().status(), GameStatus::Lost);
        assert_eq!(engine.state().ended_at(), Some(Timestamp::from_secs(4)));

        let err = engine.apply(Command::SelectWord(WordId(0)), Timestamp::ZERO).unwrap_err();
        assert_eq!(err, IllegalCommand::GameOver { status: GameStatus::Lost });
        assert_eq!(engine.legal_commands(), vec![Command::Restart]);
    }

    #[test]
    fn test_randomize_keeps_board_contents() {
        let mut engine = engine();
        select(&mut engine, &["A", "B", "C", "D"]);
        engine.apply(Command::SubmitGroup, Timestamp::ZERO).unwrap();
        select(&mut engine, &["E"]);

        let before = engine.state().clone();
        engine.apply(Command::Randomize, Timestamp::ZERO).unwrap();
        let after = engine.state();

        let mut a: Vec<_> = before.board().iter().copied().collect();
        let mut b: Vec<_> = after.board().iter().copied().collect();
        a.sort();
        b.sort();
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
        assert_eq!(after.selected(), before.selected());
        assert_eq!(after.attempts_left(), before.attempts_left());
    }

    #[test]
    fn test_restart_resets_state() {
        let mut engine = engine();
        select(&mut engine, &["A", "B", "C", "E"]);
        engine.apply(Command::SubmitGroup, Timestamp::ZERO).unwrap();

        let outcome = engine.apply(Command::Restart, Timestamp::from_secs(30)).unwrap();
        assert_eq!(outcome.feedback, Feedback::Restarted);
        assert_eq!(outcome.state.attempts_left(), 4);
        assert_eq!(outcome.state.started_at(), Timestamp::from_secs(30));
        assert_eq!(engine.history().len(), 6);
    }

    #[test]
    fn test_legal_commands_in_progress() {
        let mut engine = engine();
        let commands = engine.legal_commands();
        assert_eq!(commands.len(), 9 + 2);
        assert!(!commands.contains(&Command::SubmitGroup));

        select(&mut engine, &["A", "B", "C", "D"]);
        assert!(engine.legal_commands().contains(&Command::SubmitGroup));
    }
}
