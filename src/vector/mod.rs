//! Vector Module
//!
//! Dense vectors, norms, and the factory operations that build them.

mod dense;
mod norm;
mod ops;

pub use dense::{DenseVector, Vector};
pub use norm::Norm;
pub use ops::{add, approx_equal, create, dot, scale, sub};
