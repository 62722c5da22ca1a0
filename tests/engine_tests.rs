//! Engine integration tests: full play-throughs through the public API.

use std::sync::Arc;

use wordburn::{
    score, Command, Feedback, GameEngine, GameStatus, GroupId, IllegalCommand, Puzzle, RulesConfig, ScoreBreakdown,
    ScoringConfig, Timestamp, WordId,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn two_group_puzzle() -> Arc<Puzzle> {
    let puzzle = Puzzle::builder()
        .unlabeled_group(["A", "B", "C", "D"])
        .unlabeled_group(["E", "F", "G", "H"])
        .wildcard("W")
        .grid(3, 3)
        .build()
        .unwrap();
    Arc::new(puzzle)
}

fn id(puzzle: &Puzzle, word: &str) -> WordId {
    puzzle.word_id(word).unwrap()
}

fn tap(engine: &mut GameEngine, word: &str, at: u64) -> Feedback {
    let w = id(engine.puzzle(), word);
    engine.apply(Command::SelectWord(w), Timestamp::from_secs(at)).unwrap().feedback
}

fn select_all(engine: &mut GameEngine, words: &[&str], at: u64) {
    for word in words {
        tap(engine, word, at);
    }
}

// =============================================================================
// Walkthrough
// =============================================================================

#[test]
fn test_documented_walkthrough() {
    init_logging();
    let puzzle = two_group_puzzle();
    let mut engine = GameEngine::new(puzzle.clone(), RulesConfig::default(), 42, Timestamp::ZERO);

    // Solve the first group.
    select_all(&mut engine, &["A", "B", "C", "D"], 5);
    let outcome = engine.apply(Command::SubmitGroup, Timestamp::from_secs(6)).unwrap();
    assert_eq!(outcome.feedback, Feedback::GroupSolved { group: GroupId(0) });
    assert_eq!(outcome.state.solved_groups().iter().copied().collect::<Vec<_>>(), vec![GroupId(0)]);
    assert_eq!(outcome.state.locked().len(), 4);
    assert_eq!(outcome.state.attempts_left(), 4);

    // Solved words are out of play.
    let a = id(&puzzle, "A");
    assert_eq!(
        engine.apply(Command::SelectWord(a), Timestamp::from_secs(7)),
        Err(IllegalCommand::WordLocked { word: a })
    );

    // Wrong fourth word.
    select_all(&mut engine, &["E", "F", "G", "W"], 10);
    let outcome = engine.apply(Command::SubmitGroup, Timestamp::from_secs(11)).unwrap();
    assert_eq!(outcome.feedback, Feedback::PartialMatch { best: 3 });
    assert_eq!(outcome.feedback.to_string(), "3 of these fit together");
    assert_eq!(outcome.state.attempts_left(), 3);
    assert!(outcome.state.selected().is_empty());

    // Flag W and burn it: +10 (attempts_left = 3 >= 2) and the only
    // wildcard is gone, so one attempt comes back.
    let w = id(&puzzle, "W");
    tap(&mut engine, "W", 20);
    assert_eq!(tap(&mut engine, "W", 21), Feedback::BurnSuspected { word: w });
    let outcome = engine.apply(Command::ConfirmBurn, Timestamp::from_secs(22)).unwrap();
    assert_eq!(outcome.feedback, Feedback::WildcardBurned { word: w, bonus: 10, extra_attempts: 1 });
    assert!(outcome.state.burned_wildcards().contains(&w));
    assert!(outcome.state.is_locked(w));
    assert_eq!(outcome.state.burn_bonus(), 10);
    assert_eq!(outcome.state.attempts_left(), 4);

    // Finish.
    select_all(&mut engine, &["E", "F", "G", "H"], 30);
    let outcome = engine.apply(Command::SubmitGroup, Timestamp::from_secs(31)).unwrap();
    assert_eq!(outcome.feedback, Feedback::GroupSolved { group: GroupId(1) });
    assert_eq!(outcome.state.status(), GameStatus::Won);
    assert_eq!(outcome.state.ended_at(), Some(Timestamp::from_secs(31)));
    assert!(outcome.state.board().is_empty());

    // The bonus attempt makes the solve count as flawless.
    let breakdown = ScoreBreakdown::compute(&outcome.state, &puzzle, &ScoringConfig::default());
    assert_eq!(breakdown.perfect_bonus, 15);
    assert_eq!(breakdown.burns, 5);
    assert_eq!(breakdown.time_bonus, 10);
    assert_eq!(score(&outcome.state, &puzzle, &ScoringConfig::default()), 50);
}

#[test]
fn test_win_does_not_require_burning_wildcards() {
    let puzzle = two_group_puzzle();
    let mut engine = GameEngine::new(puzzle, RulesConfig::default(), 1, Timestamp::ZERO);

    select_all(&mut engine, &["H", "G", "F", "E"], 1);
    engine.apply(Command::SubmitGroup, Timestamp::from_secs(1)).unwrap();
    select_all(&mut engine, &["D", "C", "B", "A"], 2);
    engine.apply(Command::SubmitGroup, Timestamp::from_secs(2)).unwrap();

    assert_eq!(engine.state().status(), GameStatus::Won);
    assert!(engine.state().burned_wildcards().is_empty());
    let solved: Vec<_> = engine.state().solved_groups().iter().copied().collect();
    assert_eq!(solved, vec![GroupId(1), GroupId(0)]);
}

#[test]
fn test_false_burn_can_lose_the_game() {
    let puzzle = two_group_puzzle();
    let config = RulesConfig::default().with_starting_attempts(1);
    let mut engine = GameEngine::new(puzzle, config, 1, Timestamp::ZERO);

    select_all(&mut engine, &["A", "A"], 3);
    let outcome = engine.apply(Command::ConfirmBurn, Timestamp::from_secs(4)).unwrap();
    assert_eq!(outcome.feedback, Feedback::FalseBurn { word: WordId(0) });
    assert_eq!(outcome.state.status(), GameStatus::Lost);
    assert_eq!(outcome.state.ended_at(), Some(Timestamp::from_secs(4)));
}

#[test]
fn test_crossing_bonus_granted_once() {
    let puzzle = Arc::new(
        Puzzle::builder()
            .unlabeled_group(["A", "B", "C", "D"])
            .wildcard("W1")
            .wildcard("W2")
            .grid(2, 3)
            .build()
            .unwrap(),
    );
    let mut engine = GameEngine::new(puzzle, RulesConfig::default(), 1, Timestamp::ZERO);

    select_all(&mut engine, &["W1", "W1"], 1);
    let first = engine.apply(Command::ConfirmBurn, Timestamp::from_secs(1)).unwrap();
    assert_eq!(first.feedback, Feedback::WildcardBurned { word: WordId(4), bonus: 10, extra_attempts: 0 });
    assert_eq!(first.state.attempts_left(), 4);

    select_all(&mut engine, &["W2", "W2"], 2);
    let second = engine.apply(Command::ConfirmBurn, Timestamp::from_secs(2)).unwrap();
    assert_eq!(second.feedback, Feedback::WildcardBurned { word: WordId(5), bonus: 10, extra_attempts: 1 });
    assert_eq!(second.state.attempts_left(), 5);
    assert_eq!(second.state.burn_bonus(), 20);
}

#[test]
fn test_burn_clears_selection() {
    let puzzle = two_group_puzzle();
    let mut engine = GameEngine::new(puzzle, RulesConfig::default(), 1, Timestamp::ZERO);

    select_all(&mut engine, &["A", "B", "C", "W", "W"], 1);
    assert_eq!(engine.state().selected().len(), 3);
    let outcome = engine.apply(Command::ConfirmBurn, Timestamp::from_secs(2)).unwrap();
    assert!(outcome.state.selected().is_empty());
    assert_eq!(outcome.state.burn_suspect(), None);
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn test_rejections_leave_state_untouched() {
    let puzzle = two_group_puzzle();
    let mut engine = GameEngine::new(puzzle, RulesConfig::default(), 1, Timestamp::ZERO);
    select_all(&mut engine, &["A", "E"], 1);
    let before = engine.state().clone();
    let history = engine.history().len();

    assert!(engine.apply(Command::SubmitGroup, Timestamp::from_secs(2)).is_err());
    assert!(engine.apply(Command::ConfirmBurn, Timestamp::from_secs(2)).is_err());
    assert!(engine.apply(Command::SelectWord(WordId(500)), Timestamp::from_secs(2)).is_err());

    assert_eq!(engine.state(), &before);
    assert_eq!(engine.history().len(), history);
}

#[test]
fn test_terminal_rejects_everything_but_restart() {
    let puzzle = two_group_puzzle();
    let mut engine = GameEngine::new(puzzle, RulesConfig::default(), 1, Timestamp::ZERO);
    select_all(&mut engine, &["A", "B", "C", "D"], 1);
    engine.apply(Command::SubmitGroup, Timestamp::from_secs(1)).unwrap();
    select_all(&mut engine, &["E", "F", "G", "H"], 2);
    engine.apply(Command::SubmitGroup, Timestamp::from_secs(2)).unwrap();

    let over = Err(IllegalCommand::GameOver { status: GameStatus::Won });
    assert_eq!(engine.apply(Command::Randomize, Timestamp::from_secs(3)), over);
    assert_eq!(engine.apply(Command::SelectWord(WordId(8)), Timestamp::from_secs(3)), over);

    let outcome = engine.apply(Command::Restart, Timestamp::from_secs(4)).unwrap();
    assert_eq!(outcome.state.status(), GameStatus::InProgress);
    assert!(outcome.state.solved_groups().is_empty());
}

// =============================================================================
// Replay
// =============================================================================

#[test]
fn test_replay_reproduces_state() {
    let puzzle = two_group_puzzle();
    let mut engine = GameEngine::new(puzzle.clone(), RulesConfig::default(), 77, Timestamp::from_secs(100));

    engine.apply(Command::Randomize, Timestamp::from_secs(101)).unwrap();
    select_all(&mut engine, &["A", "B", "C", "E"], 102);
    engine.apply(Command::SubmitGroup, Timestamp::from_secs(103)).unwrap();
    engine.apply(Command::Randomize, Timestamp::from_secs(104)).unwrap();
    select_all(&mut engine, &["W", "W"], 105);
    engine.apply(Command::ConfirmBurn, Timestamp::from_secs(106)).unwrap();

    let replayed = GameEngine::replay(
        puzzle,
        RulesConfig::default(),
        77,
        Timestamp::from_secs(100),
        engine.history(),
    )
    .unwrap();

    assert_eq!(replayed.state(), engine.state());
    assert_eq!(replayed.history(), engine.history());
}

#[test]
fn test_replay_reports_rejected_record() {
    let puzzle = two_group_puzzle();
    let records = [wordburn::CommandRecord::new(Command::ConfirmBurn, Timestamp::ZERO)];

    let err = GameEngine::replay(puzzle, RulesConfig::default(), 1, Timestamp::ZERO, &records).unwrap_err();
    assert_eq!(err.index, 0);
    assert_eq!(err.source, IllegalCommand::NoBurnSuspect);
}
