//! Closed Rational Intervals
//!
//! Interval arithmetic over [`Rational`] endpoints. An interval with a NaN
//! endpoint collapses to [`Interval::NAN`].

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use tracing::warn;

use super::rational::Rational;

/// Closed interval `[lo, hi]`
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    lo: Rational,
    hi: Rational,
}

impl Interval {
    pub const NAN: Interval = Interval {
        lo: Rational::NAN,
        hi: Rational::NAN,
    };

    /// Interval between `a` and `b`; endpoints given in reverse order are swapped
    pub fn new(a: Rational, b: Rational) -> Self {
        if a.is_nan() || b.is_nan() {
            return Self::NAN;
        }
        if a > b {
            warn!(lo = %a, hi = %b, "empty interval, swapping endpoints");
            return Self { lo: b, hi: a };
        }
        Self { lo: a, hi: b }
    }

    /// Degenerate interval `[x, x]`
    pub fn point(x: Rational) -> Self {
        Self::new(x, x)
    }

    pub fn lo(&self) -> Rational {
        self.lo
    }

    pub fn hi(&self) -> Rational {
        self.hi
    }

    pub fn is_nan(&self) -> bool {
        self.lo.is_nan() || self.hi.is_nan()
    }

    pub fn width(&self) -> Rational {
        self.hi - self.lo
    }

    pub fn contains(&self, x: Rational) -> bool {
        !self.is_nan() && self.lo <= x && x <= self.hi
    }

    pub fn contains_zero(&self) -> bool {
        if self.is_nan() {
            warn!("zero membership of NaN interval is undefined");
            return false;
        }
        self.contains(Rational::ZERO)
    }

    fn either_nan(&self, other: &Self, op: &str) -> bool {
        if self.is_nan() || other.is_nan() {
            warn!(op, "interval operation with NaN is undefined");
            true
        } else {
            false
        }
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        if self.either_nan(&rhs, "add") {
            return Interval::NAN;
        }
        Interval::new(self.lo + rhs.lo, self.hi + rhs.hi)
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        if self.either_nan(&rhs, "sub") {
            return Interval::NAN;
        }
        Interval::new(self.lo - rhs.hi, self.hi - rhs.lo)
    }
}

impl Mul for Interval {
    type Output = Interval;

    fn mul(self, rhs: Interval) -> Interval {
        if self.either_nan(&rhs, "mul") {
            return Interval::NAN;
        }
        let products = [
            self.lo * rhs.lo,
            self.lo * rhs.hi,
            self.hi * rhs.lo,
            self.hi * rhs.hi,
        ];
        if products.iter().any(Rational::is_nan) {
            warn!(lhs = %self, rhs = %rhs, "interval product overflow");
            return Interval::NAN;
        }
        let mut lo = products[0];
        let mut hi = products[0];
        for p in &products[1..] {
            if *p < lo {
                lo = *p;
            }
            if *p > hi {
                hi = *p;
            }
        }
        Interval { lo, hi }
    }
}

impl Div for Interval {
    type Output = Interval;

    fn div(self, rhs: Interval) -> Interval {
        if self.either_nan(&rhs, "div") {
            return Interval::NAN;
        }
        if rhs.contains_zero() {
            warn!(divisor = %rhs, "interval division by an interval containing zero");
            return Interval::NAN;
        }
        self * Interval::new(rhs.hi.recip(), rhs.lo.recip())
    }
}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Interval {
        if self.is_nan() {
            return self;
        }
        Interval::new(-self.hi, -self.lo)
    }
}

impl Mul<Interval> for Rational {
    type Output = Interval;

    fn mul(self, rhs: Interval) -> Interval {
        Interval::point(self) * rhs
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.lo == other.lo && self.hi == other.hi
    }
}

/// Overlapping, non-identical intervals are unordered
impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.either_nan(other, "cmp") {
            None
        } else if self == other {
            Some(Ordering::Equal)
        } else if self.hi < other.lo {
            Some(Ordering::Less)
        } else if self.lo > other.hi {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            write!(f, "NaN")
        } else {
            write!(f, "[{}, {}]", self.lo, self.hi)
        }
    }
}
