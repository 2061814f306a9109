//! Set Module
//!
//! Containers keyed by approximate vector equality.

mod tolerance_set;

pub use tolerance_set::ToleranceSet;
