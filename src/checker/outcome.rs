//! Outcome of checking a completed selection.

use serde::{Deserialize, Serialize};

use crate::core::CombinationKey;
use crate::eval::{EvalError, Value};

/// Verdict on a combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeStatus {
    /// Evaluated to the target; now credited for the round.
    Correct,
    /// Evaluated to something else, a non-integer, or nothing at all.
    Incorrect,
    /// Already credited earlier this round; not evaluated again.
    AlreadyUsed,
}

impl OutcomeStatus {
    #[must_use]
    pub fn is_correct(self) -> bool {
        self == OutcomeStatus::Correct
    }
}

/// Computed result shown alongside a verdict.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum OutcomeValue {
    Integer(i64),
    Real(f64),
    /// Evaluation failed (division by zero).
    Invalid,
    /// The evaluator was not consulted.
    NotEvaluated,
}

impl From<Result<Value, EvalError>> for OutcomeValue {
    fn from(result: Result<Value, EvalError>) -> Self {
        match result {
            Ok(Value::Integer(n)) => OutcomeValue::Integer(n),
            Ok(Value::Real(x)) => OutcomeValue::Real(x),
            Err(EvalError::DivideByZero | EvalError::Overflow) => OutcomeValue::Invalid,
        }
    }
}

impl std::fmt::Display for OutcomeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeValue::Integer(n) => write!(f, "{}", Value::Integer(*n)),
            OutcomeValue::Real(x) => write!(f, "{}", Value::Real(*x)),
            OutcomeValue::Invalid => write!(f, "invalid"),
            OutcomeValue::NotEvaluated => write!(f, "-"),
        }
    }
}

/// Result of checking one combination.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub status: OutcomeStatus,
    pub result: OutcomeValue,
    pub combination: CombinationKey,
}

impl Outcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.status.is_correct()
    }
}
