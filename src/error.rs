//! Result Codes and Errors
//!
//! Every fallible operation returns [`Result`]; each [`Error`] maps onto
//! exactly one [`ResultCode`] of the public taxonomy.

use std::fmt;
use thiserror::Error;

/// Outcome codes exposed at the crate boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultCode {
    Success,
    InvalidArgument,
    InvalidDimension,
    DimensionMismatch,
    IndexOutOfRange,
    OutOfMemory,
    CalculationError,
}

impl ResultCode {
    /// Canonical name, stable across releases
    pub fn name(&self) -> &'static str {
        match self {
            ResultCode::Success => "Success",
            ResultCode::InvalidArgument => "InvalidArgument",
            ResultCode::InvalidDimension => "InvalidDimension",
            ResultCode::DimensionMismatch => "DimensionMismatch",
            ResultCode::IndexOutOfRange => "IndexOutOfRange",
            ResultCode::OutOfMemory => "OutOfMemory",
            ResultCode::CalculationError => "CalculationError",
        }
    }

    /// Code describing any operation result
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => ResultCode::Success,
            Err(e) => e.code(),
        }
    }

    pub fn is_success(&self) -> bool {
        *self == ResultCode::Success
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors produced by vector and set operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid dimension {0} (must be > 0)")]
    InvalidDimension(usize),

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("index {index} out of range for set of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("out of memory allocating {requested} elements")]
    OutOfMemory { requested: usize },

    #[error("calculation failed: {0}")]
    CalculationError(#[source] Box<Error>),
}

impl Error {
    pub fn code(&self) -> ResultCode {
        match self {
            Error::InvalidArgument(_) => ResultCode::InvalidArgument,
            Error::InvalidDimension(_) => ResultCode::InvalidDimension,
            Error::DimensionMismatch { .. } => ResultCode::DimensionMismatch,
            Error::IndexOutOfRange { .. } => ResultCode::IndexOutOfRange,
            Error::OutOfMemory { .. } => ResultCode::OutOfMemory,
            Error::CalculationError(_) => ResultCode::CalculationError,
        }
    }

    /// Wrap a failure raised inside another computation
    pub fn calculation(source: Error) -> Self {
        Error::CalculationError(Box::new(source))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reject negative and NaN tolerances
pub(crate) fn check_tolerance(tolerance: f64) -> Result<()> {
    if tolerance >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "tolerance must be non-negative, got {}",
            tolerance
        )))
    }
}
