//! Tolerance Set
//!
//! Unordered collection of vectors that treats two vectors as the same
//! element when the chosen norm of their difference is below a tolerance.

use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::diagnostics::{DiagnosticSink, NoopSink};
use crate::error::{check_tolerance, Error, Result};
use crate::vector::{approx_equal, DenseVector, Norm, Vector};

/// Tolerance-deduplicating vector set
///
/// Owns a private copy of every element; getters always return fresh clones.
/// While non-empty all elements share one dimension; an empty set has
/// dimension 0 and adopts the dimension of the next inserted vector.
pub struct ToleranceSet {
    dimension: usize,
    elements: Vec<DenseVector>,
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for ToleranceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToleranceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToleranceSet")
            .field("dimension", &self.dimension)
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}

impl ToleranceSet {
    /// Create an empty set that discards diagnostics
    pub fn new() -> Self {
        Self::with_sink(Arc::new(NoopSink))
    }

    /// Create an empty set reporting vector-level failures to `sink`
    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            dimension: 0,
            elements: Vec::new(),
            sink,
        }
    }

    /// Shared dimension of the elements, 0 when empty
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Insert a copy of `vector` unless an element already matches it
    ///
    /// Returns `true` if the vector was appended, `false` if an existing
    /// element was within `tolerance`.
    pub fn insert<V>(&mut self, vector: &V, norm: Norm, tolerance: f64) -> Result<bool>
    where
        V: Vector + ?Sized,
    {
        check_tolerance(tolerance)?;
        if vector.dimension() == 0 {
            return Err(Error::InvalidDimension(0));
        }

        if !self.elements.is_empty() {
            self.check_dimension(vector)?;
            if let Some(index) = self.position(vector, norm, tolerance)? {
                debug!(index, "insert matched existing element");
                return Ok(false);
            }
        }

        let copy = vector.try_clone()?;
        self.elements
            .try_reserve(1)
            .map_err(|_| Error::OutOfMemory {
                requested: self.elements.len() + 1,
            })?;
        self.dimension = copy.dimension();
        self.elements.push(copy);
        debug!(size = self.elements.len(), dimension = self.dimension, "inserted element");
        Ok(true)
    }

    /// Copy of the element at `index` in insertion order
    pub fn get(&self, index: usize) -> Result<DenseVector> {
        self.check_index(index)?;
        self.elements[index].try_clone()
    }

    /// Copy of the first element within `tolerance` of `sample`
    ///
    /// `Ok(None)` means no element matched; it is not an error.
    pub fn find<V>(&self, sample: &V, norm: Norm, tolerance: f64) -> Result<Option<DenseVector>>
    where
        V: Vector + ?Sized,
    {
        check_tolerance(tolerance)?;
        if self.elements.is_empty() {
            return Ok(None);
        }
        self.check_dimension(sample)?;

        match self.position(sample, norm, tolerance)? {
            Some(index) => self.elements[index].try_clone().map(Some),
            None => Ok(None),
        }
    }

    /// Remove the element at `index`
    pub fn erase(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.elements.remove(index);
        self.reset_if_empty();
        debug!(index, size = self.elements.len(), "erased element");
        Ok(())
    }

    /// Remove every element within `tolerance` of `sample`
    ///
    /// Returns the number of removed elements. All matches are computed
    /// before anything is removed, so a failure leaves the set untouched.
    pub fn erase_matching<V>(&mut self, sample: &V, norm: Norm, tolerance: f64) -> Result<usize>
    where
        V: Vector + ?Sized,
    {
        check_tolerance(tolerance)?;
        if self.elements.is_empty() {
            return Ok(0);
        }
        self.check_dimension(sample)?;

        let hits = self
            .elements
            .iter()
            .map(|element| self.matches(element, sample, norm, tolerance))
            .collect::<Result<Vec<bool>>>()?;

        let before = self.elements.len();
        let mut hits = hits.into_iter();
        self.elements.retain(|_| !hits.next().unwrap_or(false));
        let removed = before - self.elements.len();

        self.reset_if_empty();
        debug!(removed, size = self.elements.len(), "erased matching elements");
        Ok(removed)
    }

    /// Drop every element and reset the dimension
    pub fn clear(&mut self) {
        self.elements.clear();
        self.dimension = 0;
    }

    /// Deep copy sharing the same diagnostic sink
    pub fn try_clone(&self) -> Result<Self> {
        let mut elements = Vec::new();
        elements
            .try_reserve_exact(self.elements.len())
            .map_err(|_| Error::OutOfMemory {
                requested: self.elements.len(),
            })?;
        for element in &self.elements {
            elements.push(element.try_clone()?);
        }
        Ok(Self {
            dimension: self.dimension,
            elements,
            sink: Arc::clone(&self.sink),
        })
    }

    /// Copies of all elements in insertion order
    pub fn snapshot(&self) -> Result<Vec<DenseVector>> {
        self.elements.iter().map(|e| e.try_clone()).collect()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.elements.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                size: self.elements.len(),
            })
        }
    }

    fn check_dimension<V: Vector + ?Sized>(&self, vector: &V) -> Result<()> {
        if vector.dimension() == self.dimension {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: self.dimension,
                actual: vector.dimension(),
            })
        }
    }

    /// Factory failures here are logged to the set's sink and surface as
    /// `CalculationError`. Dimensions are checked beforehand, so only an
    /// allocation failure or a sample whose dimension changes between calls
    /// reaches the error path.
    fn matches<V: Vector + ?Sized>(
        &self,
        element: &DenseVector,
        sample: &V,
        norm: Norm,
        tolerance: f64,
    ) -> Result<bool> {
        approx_equal(element, sample, norm, tolerance, &*self.sink)
            .map_err(Error::calculation)
    }

    /// Index of the first element matching `sample`
    fn position<V: Vector + ?Sized>(
        &self,
        sample: &V,
        norm: Norm,
        tolerance: f64,
    ) -> Result<Option<usize>> {
        for (index, element) in self.elements.iter().enumerate() {
            if self.matches(element, sample, norm, tolerance)? {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    fn reset_if_empty(&mut self) {
        if self.elements.is_empty() {
            self.dimension = 0;
        }
    }
}
