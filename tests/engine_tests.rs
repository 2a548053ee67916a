//! Engine integration tests.
//!
//! These tests drive full rounds through the public `GameEngine` API on a
//! known board, the way a presentation adapter would.

use rust_numhunt::core::{Cell, CellIndex, GameConfig, GameRng, Operator, CELL_COUNT};
use rust_numhunt::engine::{EndReason, EngineEvent, GameEngine, RoundSnapshot};
use rust_numhunt::round::{Countdown, RoundState, TickResult};
use rust_numhunt::target::TargetSelector;
use rust_numhunt::{Outcome, OutcomeStatus, OutcomeValue};

// =============================================================================
// Helpers
// =============================================================================

/// A: +5  B: ×3  C: +2  D: ÷2  E: -3  F: ÷1  G..J: +1
fn board() -> [Cell; CELL_COUNT] {
    use Operator::*;
    [
        Cell::new(Add, 5),
        Cell::new(Multiply, 3),
        Cell::new(Add, 2),
        Cell::new(Divide, 2),
        Cell::new(Subtract, 3),
        Cell::new(Divide, 1),
        Cell::new(Add, 1),
        Cell::new(Add, 1),
        Cell::new(Add, 1),
        Cell::new(Add, 1),
    ]
}

/// An engine with an active round on `board()` aiming at `target`.
fn fixed_engine(target: i64, seconds: u32) -> GameEngine {
    let cells = board();
    let mut analysis = TargetSelector::default().analyze(&cells, &mut GameRng::new(1));
    analysis.target = target;

    let mut countdown = Countdown::new(seconds);
    countdown.start();

    let mut engine = GameEngine::new(GameConfig::default());
    engine.restore(RoundSnapshot {
        number: 1,
        state: RoundState::Active,
        cells: Some(cells),
        analysis: Some(analysis),
        countdown,
        formulas: Vec::new(),
    })
    .unwrap();
    engine.sink_mut().drain().for_each(drop);
    engine
}

/// Select cells by label; returns the outcome of the last selection.
fn pick(engine: &mut GameEngine, labels: &str) -> Option<Outcome> {
    let mut outcome = None;
    for label in labels.chars() {
        outcome = engine.select_cell(CellIndex::from_label(label).unwrap());
    }
    outcome
}

// =============================================================================
// Checking
// =============================================================================

/// 5 ×3 +2 respects precedence: 5 × 3 + 2 = 17.
#[test]
fn test_correct_combination_is_credited() {
    let mut engine = fixed_engine(17, 180);

    let outcome = pick(&mut engine, "ABC").unwrap();
    assert_eq!(outcome.status, OutcomeStatus::Correct);
    assert_eq!(outcome.result, OutcomeValue::Integer(17));
    assert_eq!(outcome.combination.labels(), "ABC");

    let formulas: Vec<_> = engine.round().formulas().iter().map(|f| f.labels()).collect();
    assert_eq!(formulas, vec!["ABC".to_string()]);
}

/// The second operator binds tighter: 5 + 2 × 3 = 11.
#[test]
fn test_precedence_with_trailing_multiply() {
    let mut engine = fixed_engine(17, 180);

    let outcome = pick(&mut engine, "ACB").unwrap();
    assert_eq!(outcome.status, OutcomeStatus::Incorrect);
    assert_eq!(outcome.result, OutcomeValue::Integer(11));
    assert!(engine.round().formulas().is_empty());
}

#[test]
fn test_same_combination_twice_is_already_used() {
    let mut engine = fixed_engine(17, 180);

    pick(&mut engine, "ABC");
    let again = pick(&mut engine, "ABC").unwrap();

    assert_eq!(again.status, OutcomeStatus::AlreadyUsed);
    assert_eq!(again.result, OutcomeValue::NotEvaluated);
    assert_eq!(engine.round().formulas().len(), 1);
}

/// Keys are ordered, so the reversed triple is checked on its own merits.
#[test]
fn test_reordered_combination_is_checked_fresh() {
    let mut engine = fixed_engine(17, 180);

    pick(&mut engine, "ABC");
    let reversed = pick(&mut engine, "CBA").unwrap();

    // 2 × 3 + 5
    assert_eq!(reversed.status, OutcomeStatus::Incorrect);
    assert_eq!(reversed.result, OutcomeValue::Integer(11));
}

/// 5 ÷ 2 + 2 = 4.5 is never a hit, even when rounding would match.
#[test]
fn test_fractional_result_is_incorrect() {
    let mut engine = fixed_engine(4, 180);

    let outcome = pick(&mut engine, "ADC").unwrap();
    assert_eq!(outcome.status, OutcomeStatus::Incorrect);
    assert_eq!(outcome.result, OutcomeValue::Real(4.5));
    assert_eq!(outcome.result.to_string(), "4.5");
}

/// Only a completed selection produces an outcome.
#[test]
fn test_outcome_events_follow_selection_events() {
    let mut engine = fixed_engine(17, 180);

    pick(&mut engine, "AB");
    engine.clear_selection();
    pick(&mut engine, "ABC");

    let events: Vec<_> = engine.sink_mut().drain().collect();
    let outcomes: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            EngineEvent::Outcome(o) => Some(o.status),
            _ => None,
        })
        .collect();
    assert_eq!(outcomes, vec![OutcomeStatus::Correct]);
    assert_eq!(
        events.last(),
        Some(&EngineEvent::SelectionChanged { selection: vec![] })
    );
}

// =============================================================================
// Selection buffer
// =============================================================================

#[test]
fn test_duplicate_cell_in_selection_is_ignored() {
    let mut engine = fixed_engine(17, 180);

    pick(&mut engine, "AA");
    assert_eq!(engine.round().selection(), &[CellIndex(0)]);

    let outcome = pick(&mut engine, "BC").unwrap();
    assert_eq!(outcome.status, OutcomeStatus::Correct);
}

#[test]
fn test_selection_ignored_after_round_ends() {
    let mut engine = fixed_engine(17, 180);
    pick(&mut engine, "A");

    assert!(engine.end_round());
    assert_eq!(pick(&mut engine, "BC"), None);
    assert!(engine.round().formulas().is_empty());
}

// =============================================================================
// Countdown
// =============================================================================

#[test]
fn test_countdown_expires_round() {
    let mut engine = fixed_engine(17, 3);
    pick(&mut engine, "ABC");

    assert_eq!(engine.tick(), TickResult::Running(2));
    assert_eq!(engine.tick(), TickResult::Running(1));
    assert_eq!(engine.tick(), TickResult::Expired);
    assert_eq!(engine.state(), RoundState::Ended);
    assert_eq!(engine.remaining_seconds(), 0);

    let ended = engine
        .sink_mut()
        .drain()
        .find(|e| matches!(e, EngineEvent::RoundEnded { .. }));
    assert_eq!(
        ended,
        Some(EngineEvent::RoundEnded { reason: EndReason::Expired, credited: 1 })
    );

    // Further ticks change nothing
    assert_eq!(engine.tick(), TickResult::Ignored);
    assert_eq!(engine.remaining_seconds(), 0);
}

#[test]
fn test_restart_resets_round() {
    let config = GameConfig::default().with_round_seconds(30).with_seed(5);
    let mut engine = GameEngine::new(config);

    engine.start_round();
    for _ in 0..10 {
        engine.tick();
    }
    assert_eq!(engine.remaining_seconds(), 20);

    engine.start_round();
    assert_eq!(engine.state(), RoundState::Active);
    assert_eq!(engine.remaining_seconds(), 30);
    assert_eq!(engine.round().number(), 2);
    assert!(engine.round().formulas().is_empty());
    assert!(engine.round().used_combinations().is_empty());
}

// =============================================================================
// Determinism and checkpoints
// =============================================================================

#[test]
fn test_same_seed_same_rounds() {
    let config = GameConfig::default().with_seed(99);
    let mut first = GameEngine::new(config.clone());
    let mut second = GameEngine::new(config);

    for _ in 0..3 {
        assert_eq!(first.start_round(), second.start_round());
        assert_eq!(first.round().cells(), second.round().cells());
    }
}

#[test]
fn test_snapshot_bytes_resume_round() {
    let mut engine = fixed_engine(17, 60);
    pick(&mut engine, "ABC");
    engine.tick();

    let bytes = engine.snapshot().to_bytes().unwrap();
    let mut resumed = GameEngine::new(GameConfig::default());
    resumed.restore(RoundSnapshot::from_bytes(&bytes).unwrap()).unwrap();

    assert_eq!(resumed.remaining_seconds(), 59);
    assert_eq!(resumed.round().target(), Some(17));

    // Credit survives the checkpoint
    let again = pick(&mut resumed, "ABC").unwrap();
    assert_eq!(again.status, OutcomeStatus::AlreadyUsed);
}

/// A restored active round counts down even if the captured countdown was
/// stopped.
#[test]
fn test_restored_active_round_expires() {
    let cells = board();
    let analysis = TargetSelector::default().analyze(&cells, &mut GameRng::new(1));

    let mut engine = GameEngine::new(GameConfig::default());
    engine
        .restore(RoundSnapshot {
            number: 4,
            state: RoundState::Active,
            cells: Some(cells),
            analysis: Some(analysis),
            countdown: Countdown::new(2),
            formulas: Vec::new(),
        })
        .unwrap();

    for _ in 0..5 {
        engine.tick();
    }
    assert_eq!(engine.state(), RoundState::Ended);
    assert_eq!(engine.remaining_seconds(), 0);
}

#[test]
fn test_active_snapshot_without_board_is_rejected() {
    let mut engine = fixed_engine(17, 60);

    let result = engine.restore(RoundSnapshot {
        number: 2,
        state: RoundState::Active,
        cells: None,
        analysis: None,
        countdown: Countdown::new(60),
        formulas: Vec::new(),
    });

    assert!(result.is_err());
    assert_eq!(engine.round().target(), Some(17));
}
