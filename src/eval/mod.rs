//! Expression evaluation for three-cell combinations.
//!
//! A combination `(A, B, C)` reads as `a opB b opC c`: the first cell's
//! operator is ignored. Multiplication and division bind tighter than
//! addition and subtraction; equal precedence evaluates left to right.
//!
//! ```
//! use rust_numhunt::core::{Cell, Operator};
//! use rust_numhunt::eval::{evaluate, Value};
//!
//! let a = Cell::new(Operator::Add, 5);
//! let b = Cell::new(Operator::Multiply, 3);
//! let c = Cell::new(Operator::Add, 2);
//!
//! // 5 × 3 + 2
//! assert_eq!(evaluate(a, b, c), Ok(Value::Integer(17)));
//! ```

mod expression;
mod fraction;

pub use expression::{apply, evaluate, evaluate_exact};
pub use fraction::Fraction;

use serde::{Deserialize, Serialize};

/// Arithmetic failure inside an expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// A divisor was zero at some step.
    DivideByZero,
    /// An intermediate value left the `i64` range.
    Overflow,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::DivideByZero => write!(f, "division by zero"),
            EvalError::Overflow => write!(f, "arithmetic overflow"),
        }
    }
}

impl std::error::Error for EvalError {}

/// Result of a successful evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Exact whole number.
    Integer(i64),
    /// Non-integer result (nearest `f64`).
    Real(f64),
}

impl Value {
    /// The whole-number value, if this is one.
    #[must_use]
    pub fn as_integer(self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(n),
            Value::Real(_) => None,
        }
    }

    /// Is this a positive whole number?
    #[must_use]
    pub fn is_positive_integer(self) -> bool {
        matches!(self, Value::Integer(n) if n > 0)
    }
}

impl From<Fraction> for Value {
    fn from(fraction: Fraction) -> Self {
        if fraction.is_integer() {
            Value::Integer(fraction.numerator())
        } else {
            Value::Real(fraction.to_f64())
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Real(x) => {
                let text = format!("{:.2}", x);
                write!(f, "{}", text.trim_end_matches('0').trim_end_matches('.'))
            }
        }
    }
}
