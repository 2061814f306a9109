//! TOLVEC - Dense Vectors and Tolerance Sets
//!
//! Fixed-dimension real vectors with L1/L2/L∞ norms, factory operations
//! that report failures to an injected diagnostic sink, and a set that
//! deduplicates vectors by approximate equality.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod exact;
pub mod set;
pub mod shell;
pub mod vector;

pub use config::Config;
pub use diagnostics::{Diagnostic, DiagnosticSink, NoopSink, RecordingSink, TracingSink};
pub use error::{Error, Result, ResultCode};
pub use exact::{Interval, Rational};
pub use set::ToleranceSet;
pub use shell::{Command, Response, Session};
pub use vector::{DenseVector, Norm, Vector};
