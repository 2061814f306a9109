//! Exact Rationals
//!
//! `i64` fractions in lowest terms. `0/0` is the NaN sentinel: it results
//! from a zero denominator, division by zero, or overflow, and propagates
//! through every operation.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use tracing::warn;

/// Exact rational number with a NaN sentinel
#[derive(Debug, Clone, Copy)]
pub struct Rational {
    num: i64,
    den: i64,
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a.abs()
}

impl Rational {
    pub const NAN: Rational = Rational { num: 0, den: 0 };
    pub const ZERO: Rational = Rational { num: 0, den: 1 };
    pub const ONE: Rational = Rational { num: 1, den: 1 };

    /// `num / den` in lowest terms; NaN when `den` is zero
    pub fn new(num: i64, den: i64) -> Self {
        if den == 0 {
            if num != 0 {
                warn!(num, "rational with zero denominator is undefined");
            }
            return Self::NAN;
        }
        Self::reduce(num as i128, den as i128, "new")
    }

    pub fn integer(value: i64) -> Self {
        Self { num: value, den: 1 }
    }

    /// Normalize a wide fraction and narrow it back to `i64`
    fn reduce(num: i128, den: i128, op: &str) -> Self {
        if num == 0 {
            return Self::ZERO;
        }
        let sign = if den < 0 { -1 } else { 1 };
        let g = gcd(num, den);
        let (num, den) = (sign * num / g, sign * den / g);
        match (i64::try_from(num), i64::try_from(den)) {
            (Ok(num), Ok(den)) => Self { num, den },
            _ => {
                warn!(op, "rational overflow");
                Self::NAN
            }
        }
    }

    pub fn numer(&self) -> i64 {
        self.num
    }

    pub fn denom(&self) -> i64 {
        self.den
    }

    pub fn is_nan(&self) -> bool {
        self.num == 0 && self.den == 0
    }

    pub fn to_f64(&self) -> f64 {
        if self.is_nan() {
            f64::NAN
        } else {
            self.num as f64 / self.den as f64
        }
    }

    /// Multiplicative inverse; NaN for zero
    pub fn recip(self) -> Self {
        Self::ONE / self
    }

    fn either_nan(&self, other: &Self, op: &str) -> bool {
        if self.is_nan() || other.is_nan() {
            warn!(op, "rational operation with NaN is undefined");
            true
        } else {
            false
        }
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        if self.either_nan(&rhs, "add") {
            return Rational::NAN;
        }
        let (a, b, c, d) = (self.num as i128, self.den as i128, rhs.num as i128, rhs.den as i128);
        Rational::reduce(a * d + b * c, b * d, "add")
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        if self.either_nan(&rhs, "sub") {
            return Rational::NAN;
        }
        let (a, b, c, d) = (self.num as i128, self.den as i128, rhs.num as i128, rhs.den as i128);
        Rational::reduce(a * d - b * c, b * d, "sub")
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        if self.either_nan(&rhs, "mul") {
            return Rational::NAN;
        }
        let (a, b, c, d) = (self.num as i128, self.den as i128, rhs.num as i128, rhs.den as i128);
        Rational::reduce(a * c, b * d, "mul")
    }
}

impl Div for Rational {
    type Output = Rational;

    fn div(self, rhs: Rational) -> Rational {
        if self.either_nan(&rhs, "div") {
            return Rational::NAN;
        }
        if rhs.num == 0 {
            warn!("rational division by zero is undefined");
            return Rational::NAN;
        }
        let (a, b, c, d) = (self.num as i128, self.den as i128, rhs.num as i128, rhs.den as i128);
        Rational::reduce(a * d, b * c, "div")
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        if self.is_nan() {
            return self;
        }
        Rational::reduce(-(self.num as i128), self.den as i128, "neg")
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        !self.is_nan() && !other.is_nan() && self.num == other.num && self.den == other.den
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.either_nan(other, "cmp") {
            return None;
        }
        // denominators are positive, so cross-multiplication preserves order
        let lhs = self.num as i128 * other.den as i128;
        let rhs = other.num as i128 * self.den as i128;
        Some(lhs.cmp(&rhs))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            write!(f, "NaN")
        } else {
            write!(f, "{} / {}", self.num, self.den)
        }
    }
}
