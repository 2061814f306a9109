//! Vector Types
//!
//! The [`Vector`] interface and its dense, heap-backed implementation.

use std::fmt;

use super::norm::Norm;
use crate::error::{Error, Result};

/// Read-only view of a fixed-dimension real vector
pub trait Vector {
    /// Number of coordinates (never zero for factory-built vectors)
    fn dimension(&self) -> usize;

    /// The `index`-th coordinate
    ///
    /// # Panics
    ///
    /// Implementations may panic when `index >= self.dimension()`.
    fn coordinate(&self, index: usize) -> f64;

    fn norm(&self, norm: Norm) -> f64 {
        norm.measure((0..self.dimension()).map(|i| self.coordinate(i)))
    }

    /// Deep copy into a newly allocated dense vector
    fn try_clone(&self) -> Result<DenseVector> {
        DenseVector::from_fn(self.dimension(), |i| self.coordinate(i))
    }
}

/// Reserve a coordinate buffer, reporting allocation failure instead of aborting
pub(crate) fn allocate(len: usize) -> Result<Vec<f64>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| Error::OutOfMemory { requested: len })?;
    Ok(buf)
}

/// Owned dense vector
///
/// Built through [`crate::vector::create`] and the other factory
/// operations; coordinates never change after construction.
#[derive(Debug, PartialEq)]
pub struct DenseVector {
    coords: Box<[f64]>,
}

impl DenseVector {
    pub(crate) fn from_fn<F>(dimension: usize, f: F) -> Result<Self>
    where
        F: FnMut(usize) -> f64,
    {
        if dimension == 0 {
            return Err(Error::InvalidDimension(dimension));
        }
        let mut buf = allocate(dimension)?;
        buf.extend((0..dimension).map(f));
        Ok(Self {
            coords: buf.into_boxed_slice(),
        })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.coords.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.coords.to_vec()
    }
}

impl Vector for DenseVector {
    #[inline]
    fn dimension(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    fn coordinate(&self, index: usize) -> f64 {
        self.coords[index]
    }

    fn norm(&self, norm: Norm) -> f64 {
        norm.measure(self.iter())
    }

    fn try_clone(&self) -> Result<DenseVector> {
        let mut buf = allocate(self.coords.len())?;
        buf.extend_from_slice(&self.coords);
        Ok(Self {
            coords: buf.into_boxed_slice(),
        })
    }
}

impl fmt::Display for DenseVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}
