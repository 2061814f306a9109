//! Vector Norms
//!
//! The three distance measures used for approximate equality.

use std::fmt;
use std::str::FromStr;

/// Norm used to measure a vector (or the difference of two vectors)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Norm {
    /// Sum of absolute coordinates
    L1,
    /// Euclidean length
    #[default]
    L2,
    /// Largest absolute coordinate
    LInf,
}

impl Norm {
    pub const ALL: [Norm; 3] = [Norm::L1, Norm::L2, Norm::LInf];

    /// Human-readable name for display
    pub fn name(&self) -> &'static str {
        match self {
            Norm::L1 => "l1",
            Norm::L2 => "l2",
            Norm::LInf => "linf",
        }
    }

    /// Parse from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "l1" | "manhattan" | "taxicab" => Some(Norm::L1),
            "l2" | "euclidean" => Some(Norm::L2),
            "linf" | "inf" | "max" | "chebyshev" => Some(Norm::LInf),
            _ => None,
        }
    }

    /// Measure a sequence of coordinates
    pub fn measure<I>(&self, coords: I) -> f64
    where
        I: IntoIterator<Item = f64>,
    {
        let abs = coords.into_iter().map(f64::abs);
        match self {
            Norm::L1 => abs.sum(),
            Norm::L2 => abs.map(|x| x * x).sum::<f64>().sqrt(),
            // f64::max would drop a NaN coordinate
            Norm::LInf => abs.fold(0.0, |m: f64, x| if x > m || x.is_nan() { x } else { m }),
        }
    }
}

impl fmt::Display for Norm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Norm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Norm::parse(s).ok_or_else(|| format!("unknown norm '{}' (expected l1, l2 or linf)", s))
    }
}
