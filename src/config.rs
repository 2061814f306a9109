//! Matching Configuration

use crate::error::{check_tolerance, Error, Result};
use crate::vector::Norm;

/// Defaults used by the shell when a command does not name a norm or tolerance
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Norm used for approximate equality
    pub norm: Norm,

    /// Non-negative tolerance for approximate equality
    pub tolerance: f64,

    /// Number of diagnostics retained by the session sink
    pub history: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            norm: Norm::L2,
            tolerance: 1e-6,
            history: 64,
        }
    }
}

impl Config {
    /// Set the norm
    pub fn with_norm(mut self, norm: Norm) -> Self {
        self.norm = norm;
        self
    }

    /// Set the tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the diagnostic history length
    pub fn with_history(mut self, history: usize) -> Self {
        self.history = history;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_tolerance(self.tolerance)?;
        if self.history == 0 {
            return Err(Error::InvalidArgument(
                "diagnostic history must hold at least one entry".to_string(),
            ));
        }
        Ok(())
    }
}
