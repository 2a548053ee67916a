//! Answer checking.
//!
//! A completed selection is checked in three steps:
//!
//! 1. Already credited this round → `AlreadyUsed` (no evaluation)
//! 2. Evaluation fails, is not an integer, or misses the target → `Incorrect`
//! 3. Otherwise → `Correct`, and the combination is credited
//!
//! Keys are order-sensitive, so `(C, B, A)` is checked fresh even after
//! `(A, B, C)` was credited.

mod outcome;

pub use outcome::{Outcome, OutcomeStatus, OutcomeValue};

use tracing::debug;

use crate::core::{CellIndex, CombinationKey};
use crate::eval::evaluate;
use crate::round::Round;

/// Judge a combination against the round without changing it.
///
/// Returns `None` if the round has no board or an index is off the board.
#[must_use]
pub fn check(round: &Round, combination: CombinationKey) -> Option<Outcome> {
    let target = round.target()?;
    let [a, b, c] = combination.indices();
    let (first, second, third) = (round.cell(a)?, round.cell(b)?, round.cell(c)?);

    if round.is_used(&combination) {
        return Some(Outcome {
            status: OutcomeStatus::AlreadyUsed,
            result: OutcomeValue::NotEvaluated,
            combination,
        });
    }

    let evaluated = evaluate(first, second, third);
    let status = match evaluated {
        Ok(value) if value.as_integer() == Some(target) => OutcomeStatus::Correct,
        _ => OutcomeStatus::Incorrect,
    };

    Some(Outcome {
        status,
        result: OutcomeValue::from(evaluated),
        combination,
    })
}

/// Check a completed selection and credit it if correct.
///
/// Returns `None`, changing nothing, unless the round is active and the
/// selection is three distinct on-board indices.
pub fn submit(round: &mut Round, selection: [CellIndex; 3]) -> Option<Outcome> {
    if !round.is_active() {
        return None;
    }

    let combination = CombinationKey::from_selection(&selection)?;
    let outcome = check(round, combination)?;

    if let (OutcomeStatus::Correct, OutcomeValue::Integer(result)) = (outcome.status, outcome.result) {
        round.record_correct(combination, result);
    }

    debug!(
        combination = %combination,
        status = ?outcome.status,
        result = %outcome.result,
        "Combination checked"
    );

    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, GameConfig, GameRng, Operator, CELL_COUNT};
    use crate::round::{Countdown, RoundState};
    use crate::target::{TargetAnalysis, TargetSelector, TargetTier};

    fn idx(i: u8) -> CellIndex {
        CellIndex(i)
    }

    /// Find a distinct-index triple hitting the target on this board.
    fn winning_selection(round: &Round) -> Option<[CellIndex; 3]> {
        for a in CellIndex::all() {
            for b in CellIndex::all() {
                for c in CellIndex::all() {
                    let selection = [a, b, c];
                    let Some(key) = CombinationKey::from_selection(&selection) else {
                        continue;
                    };
                    if let Some(outcome) = check(round, key) {
                        if outcome.is_correct() {
                            return Some(selection);
                        }
                    }
                }
            }
        }
        None
    }

    fn playable_round() -> Round {
        let config = GameConfig::default();
        let selector = TargetSelector::new(&config);
        let mut rng = GameRng::new(11);
        let mut round = Round::new();

        loop {
            round.start(&config, &selector, &mut rng);
            if round.analysis().is_some_and(|a| a.is_playable()) {
                return round;
            }
        }
    }

    #[test]
    fn test_submit_requires_active_round() {
        let mut round = Round::new();
        assert_eq!(submit(&mut round, [idx(0), idx(1), idx(2)]), None);
    }

    #[test]
    fn test_submit_rejects_repeated_index() {
        let mut round = playable_round();
        assert_eq!(submit(&mut round, [idx(0), idx(0), idx(2)]), None);
        assert!(round.used_combinations().is_empty());
    }

    #[test]
    fn test_correct_then_already_used() {
        let mut round = playable_round();
        let selection = winning_selection(&round).unwrap();

        let first = submit(&mut round, selection).unwrap();
        assert_eq!(first.status, OutcomeStatus::Correct);
        assert_eq!(first.result, OutcomeValue::Integer(round.target().unwrap()));
        assert_eq!(round.formulas().len(), 1);

        let second = submit(&mut round, selection).unwrap();
        assert_eq!(second.status, OutcomeStatus::AlreadyUsed);
        assert_eq!(second.result, OutcomeValue::NotEvaluated);
        assert_eq!(round.formulas().len(), 1);
    }

    #[test]
    fn test_incorrect_is_not_credited() {
        let mut round = playable_round();
        let target = round.target().unwrap();

        let miss = CellIndex::all()
            .flat_map(|a| CellIndex::all().map(move |b| (a, b)))
            .flat_map(|(a, b)| CellIndex::all().map(move |c| [a, b, c]))
            .find(|sel| {
                CombinationKey::from_selection(sel)
                    .and_then(|key| check(&round, key))
                    .is_some_and(|o| o.status == OutcomeStatus::Incorrect)
            })
            .unwrap();

        let outcome = submit(&mut round, miss).unwrap();
        assert_eq!(outcome.status, OutcomeStatus::Incorrect);
        assert_ne!(outcome.result, OutcomeValue::Integer(target));
        assert!(round.used_combinations().is_empty());

        // Incorrect answers can be retried and stay incorrect
        assert_eq!(submit(&mut round, miss).unwrap().status, OutcomeStatus::Incorrect);
    }

    #[test]
    fn test_reversed_order_checked_fresh() {
        let mut round = playable_round();
        let [a, b, c] = winning_selection(&round).unwrap();

        submit(&mut round, [a, b, c]);
        let reversed = submit(&mut round, [c, b, a]).unwrap();

        assert_ne!(reversed.status, OutcomeStatus::AlreadyUsed);
        assert_ne!(reversed.result, OutcomeValue::NotEvaluated);
    }

    #[test]
    fn test_check_uses_cell_operators() {
        let mut round = playable_round();
        let board = *round.cells().unwrap();
        let outcome = check(&round, CombinationKey::new(idx(0), idx(1), idx(2))).unwrap();

        let expected = evaluate(board[0], board[1], board[2]);
        assert_eq!(outcome.result, OutcomeValue::from(expected));

        // Checking alone never credits
        assert!(round.used_combinations().is_empty());
        round.end();
        assert_eq!(submit(&mut round, [idx(0), idx(1), idx(2)]), None);
    }

    /// Active round on a fixed board with a fixed target.
    fn fixed_round(cells: [Cell; CELL_COUNT], target: i64) -> Round {
        let analysis = TargetAnalysis {
            target,
            tier: TargetTier::Band,
            candidates: vec![target],
            frequencies: TargetSelector::tally(&cells),
            playable_count: TargetSelector::playable_count(&cells, target),
        };
        let mut countdown = Countdown::new(180);
        countdown.start();
        Round::restore(RoundState::Active, Some(cells), Some(analysis), Default::default(), countdown, 1)
    }

    #[test]
    fn test_precedence_example() {
        // A=5, B=×3, C=+2 → 5 × 3 + 2 = 17
        let mut cells = [Cell::new(Operator::Add, 1); CELL_COUNT];
        cells[0] = Cell::new(Operator::Add, 5);
        cells[1] = Cell::new(Operator::Multiply, 3);
        cells[2] = Cell::new(Operator::Add, 2);
        let mut round = fixed_round(cells, 17);

        let outcome = submit(&mut round, [idx(0), idx(1), idx(2)]).unwrap();
        assert_eq!(outcome.status, OutcomeStatus::Correct);
        assert_eq!(outcome.result, OutcomeValue::Integer(17));
        assert_eq!(round.formulas()[0].result, 17);
    }

    #[test]
    fn test_non_integer_is_incorrect() {
        // 1 + 1 ÷ 2 = 1.5
        let mut cells = [Cell::new(Operator::Add, 1); CELL_COUNT];
        cells[2] = Cell::new(Operator::Divide, 2);
        let mut round = fixed_round(cells, 1);

        let outcome = submit(&mut round, [idx(0), idx(1), idx(2)]).unwrap();
        assert_eq!(outcome.status, OutcomeStatus::Incorrect);
        assert_eq!(outcome.result, OutcomeValue::Real(1.5));
    }

    #[test]
    fn test_divide_by_zero_is_invalid() {
        let mut cells = [Cell::new(Operator::Add, 1); CELL_COUNT];
        cells[1] = Cell::new(Operator::Divide, 0);
        let mut round = fixed_round(cells, 1);

        let outcome = submit(&mut round, [idx(0), idx(1), idx(2)]).unwrap();
        assert_eq!(outcome.status, OutcomeStatus::Incorrect);
        assert_eq!(outcome.result, OutcomeValue::Invalid);
        assert!(round.used_combinations().is_empty());
    }
}
