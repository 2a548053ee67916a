//! Exact rational arithmetic for expression evaluation.
//!
//! Working exactly means `7 ÷ 2 × 2` is recognised as the integer `7`.
//! Every step is overflow-checked; a result outside `i64` is
//! [`EvalError::Overflow`].

use super::EvalError;

/// Reduced fraction with a positive denominator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fraction {
    num: i64,
    den: i64,
}

impl Fraction {
    /// Create a reduced fraction.
    ///
    /// Fails with `DivideByZero` if `den` is zero.
    pub fn new(num: i64, den: i64) -> Result<Self, EvalError> {
        if den == 0 {
            return Err(EvalError::DivideByZero);
        }
        let divisor =
            i64::try_from(gcd(num.unsigned_abs(), den.unsigned_abs())).map_err(|_| EvalError::Overflow)?;
        let (num, den) = (num / divisor, den / divisor);

        if den < 0 {
            Ok(Self {
                num: num.checked_neg().ok_or(EvalError::Overflow)?,
                den: den.checked_neg().ok_or(EvalError::Overflow)?,
            })
        } else {
            Ok(Self { num, den })
        }
    }

    /// Whole number.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self { num: value, den: 1 }
    }

    #[must_use]
    pub const fn numerator(self) -> i64 {
        self.num
    }

    #[must_use]
    pub const fn denominator(self) -> i64 {
        self.den
    }

    /// Is this a whole number?
    #[must_use]
    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    /// Nearest `f64`.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, EvalError> {
        let num = add(mul(self.num, rhs.den)?, mul(rhs.num, self.den)?)?;
        Self::new(num, mul(self.den, rhs.den)?)
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self, EvalError> {
        let num = sub(mul(self.num, rhs.den)?, mul(rhs.num, self.den)?)?;
        Self::new(num, mul(self.den, rhs.den)?)
    }

    pub fn checked_mul(self, rhs: Self) -> Result<Self, EvalError> {
        Self::new(mul(self.num, rhs.num)?, mul(self.den, rhs.den)?)
    }

    pub fn checked_div(self, rhs: Self) -> Result<Self, EvalError> {
        if rhs.num == 0 {
            return Err(EvalError::DivideByZero);
        }
        Self::new(mul(self.num, rhs.den)?, mul(self.den, rhs.num)?)
    }
}

fn add(a: i64, b: i64) -> Result<i64, EvalError> {
    a.checked_add(b).ok_or(EvalError::Overflow)
}

fn sub(a: i64, b: i64) -> Result<i64, EvalError> {
    a.checked_sub(b).ok_or(EvalError::Overflow)
}

fn mul(a: i64, b: i64) -> Result<i64, EvalError> {
    a.checked_mul(b).ok_or(EvalError::Overflow)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
