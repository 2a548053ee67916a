//! Precedence-aware evaluation of `a opB b opC c`.

use super::{EvalError, Fraction, Value};
use crate::core::{Cell, Operator};

/// Apply one operator to two operands.
pub fn apply(operator: Operator, lhs: Fraction, rhs: Fraction) -> Result<Fraction, EvalError> {
    match operator {
        Operator::Add => lhs.checked_add(rhs),
        Operator::Subtract => lhs.checked_sub(rhs),
        Operator::Multiply => lhs.checked_mul(rhs),
        Operator::Divide => lhs.checked_div(rhs),
    }
}

/// Evaluate a combination exactly.
///
/// The only case that is not left to right is an additive `opB` followed by
/// a multiplicative `opC`, where `b opC c` binds first.
pub fn evaluate_exact(first: Cell, second: Cell, third: Cell) -> Result<Fraction, EvalError> {
    let a = Fraction::integer(first.number);
    let b = Fraction::integer(second.number);
    let c = Fraction::integer(third.number);
    let (op_b, op_c) = (second.operator, third.operator);

    if op_c.is_multiplicative() && !op_b.is_multiplicative() {
        let right = apply(op_c, b, c)?;
        apply(op_b, a, right)
    } else {
        let left = apply(op_b, a, b)?;
        apply(op_c, left, c)
    }
}

/// Evaluate a combination.
///
/// Non-integer results are returned as [`Value::Real`]; deciding whether
/// they count is the caller's business.
pub fn evaluate(first: Cell, second: Cell, third: Cell) -> Result<Value, EvalError> {
    evaluate_exact(first, second, third).map(Value::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator::{Add, Divide, Multiply, Subtract};

    fn cell(operator: Operator, number: i64) -> Cell {
        Cell::new(operator, number)
    }

    #[test]
    fn test_first_operator_ignored() {
        for op in Operator::ALL {
            assert_eq!(
                evaluate(cell(op, 5), cell(Multiply, 3), cell(Add, 2)),
                Ok(Value::Integer(17))
            );
        }
    }

    #[test]
    fn test_both_multiplicative_left_to_right() {
        // 8 ÷ 2 × 3 = 12, not 8 ÷ 6
        assert_eq!(
            evaluate(cell(Add, 8), cell(Divide, 2), cell(Multiply, 3)),
            Ok(Value::Integer(12))
        );
    }

    #[test]
    fn test_only_second_multiplicative() {
        // 4 × 3 - 5 = 7
        assert_eq!(
            evaluate(cell(Add, 4), cell(Multiply, 3), cell(Subtract, 5)),
            Ok(Value::Integer(7))
        );
    }

    #[test]
    fn test_only_third_multiplicative() {
        // 2 + 3 × 4 = 14, not 20
        assert_eq!(
            evaluate(cell(Add, 2), cell(Add, 3), cell(Multiply, 4)),
            Ok(Value::Integer(14))
        );
        // 10 - 6 ÷ 3 = 8
        assert_eq!(
            evaluate(cell(Add, 10), cell(Subtract, 6), cell(Divide, 3)),
            Ok(Value::Integer(8))
        );
    }

    #[test]
    fn test_neither_multiplicative_left_to_right() {
        // 10 - 4 - 3 = 3, not 10 - (4 - 3)
        assert_eq!(
            evaluate(cell(Add, 10), cell(Subtract, 4), cell(Subtract, 3)),
            Ok(Value::Integer(3))
        );
    }

    #[test]
    fn test_non_integer_result() {
        // 1 + 1 ÷ 2
        assert_eq!(
            evaluate(cell(Add, 1), cell(Add, 1), cell(Divide, 2)),
            Ok(Value::Real(1.5))
        );
    }

    #[test]
    fn test_exact_intermediate_fraction() {
        // 7 ÷ 2 × 2 = 7 exactly
        assert_eq!(
            evaluate(cell(Add, 7), cell(Divide, 2), cell(Multiply, 2)),
            Ok(Value::Integer(7))
        );
    }

    #[test]
    fn test_divide_by_zero_final_step() {
        // 5 - 3 ÷ 0
        assert_eq!(
            evaluate(cell(Add, 5), cell(Subtract, 3), cell(Divide, 0)),
            Err(EvalError::DivideByZero)
        );
        // 4 ÷ 0 + 1
        assert_eq!(
            evaluate(cell(Add, 4), cell(Divide, 0), cell(Add, 1)),
            Err(EvalError::DivideByZero)
        );
    }

    #[test]
    fn test_zero_intermediate_divisor() {
        // b ÷ c binds first when opB is additive: 1 + (0 ÷ 2) is fine
        assert_eq!(
            evaluate(cell(Add, 1), cell(Add, 0), cell(Divide, 2)),
            Ok(Value::Integer(1))
        );
        // (6 ÷ 3) ÷ 0
        assert_eq!(
            evaluate(cell(Add, 6), cell(Divide, 3), cell(Divide, 0)),
            Err(EvalError::DivideByZero)
        );
    }

    #[test]
    fn test_negative_result() {
        assert_eq!(
            evaluate(cell(Add, 1), cell(Subtract, 2), cell(Multiply, 3)),
            Ok(Value::Integer(-5))
        );
    }

    #[test]
    fn test_overflow_is_an_error() {
        assert_eq!(
            evaluate(cell(Add, i64::MAX), cell(Multiply, 2), cell(Add, 1)),
            Err(EvalError::Overflow)
        );
        assert_eq!(
            evaluate(cell(Add, i64::MIN), cell(Subtract, 1), cell(Add, 0)),
            Err(EvalError::Overflow)
        );
    }
}
