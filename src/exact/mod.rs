//! Exact Arithmetic
//!
//! Rationals and closed rational intervals with NaN-as-sentinel semantics.
//! Independent of the vector and set modules.

mod interval;
mod rational;

pub use interval::Interval;
pub use rational::Rational;
