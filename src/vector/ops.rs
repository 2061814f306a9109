//! Vector Factory Operations
//!
//! Free functions that validate their operands, allocate, and return new
//! owned vectors. Every failure is returned to the caller and reported to the
//! supplied [`DiagnosticSink`] with the name of the failing operation.

use super::dense::{DenseVector, Vector};
use super::norm::Norm;
use crate::diagnostics::DiagnosticSink;
use crate::error::{check_tolerance, Error, Result};

/// Report `err` to the sink and hand it back
fn report(sink: &dyn DiagnosticSink, op: &str, err: Error) -> Error {
    sink.log(&format!("in [{}] {}", op, err), err.code());
    err
}

fn same_dimension<A, B>(op: &str, a: &A, b: &B, sink: &dyn DiagnosticSink) -> Result<usize>
where
    A: Vector + ?Sized,
    B: Vector + ?Sized,
{
    let (expected, actual) = (a.dimension(), b.dimension());
    if expected != actual {
        return Err(report(sink, op, Error::DimensionMismatch { expected, actual }));
    }
    Ok(expected)
}

/// Build a vector from exactly `dimension` values
pub fn create(dimension: usize, values: &[f64], sink: &dyn DiagnosticSink) -> Result<DenseVector> {
    if dimension == 0 {
        return Err(report(sink, "create", Error::InvalidDimension(dimension)));
    }
    if values.len() != dimension {
        return Err(report(
            sink,
            "create",
            Error::InvalidArgument(format!(
                "expected {} values, got {}",
                dimension,
                values.len()
            )),
        ));
    }
    if let Some(index) = values.iter().position(|x| !x.is_finite()) {
        return Err(report(
            sink,
            "create",
            Error::InvalidArgument(format!(
                "coordinate {} is not a finite number ({})",
                index, values[index]
            )),
        ));
    }
    DenseVector::from_fn(dimension, |i| values[i]).map_err(|e| report(sink, "create", e))
}

/// Elementwise sum
pub fn add<A, B>(a: &A, b: &B, sink: &dyn DiagnosticSink) -> Result<DenseVector>
where
    A: Vector + ?Sized,
    B: Vector + ?Sized,
{
    let dim = same_dimension("add", a, b, sink)?;
    DenseVector::from_fn(dim, |i| a.coordinate(i) + b.coordinate(i))
        .map_err(|e| report(sink, "add", e))
}

/// Elementwise difference `a - b`
pub fn sub<A, B>(a: &A, b: &B, sink: &dyn DiagnosticSink) -> Result<DenseVector>
where
    A: Vector + ?Sized,
    B: Vector + ?Sized,
{
    let dim = same_dimension("sub", a, b, sink)?;
    DenseVector::from_fn(dim, |i| a.coordinate(i) - b.coordinate(i))
        .map_err(|e| report(sink, "sub", e))
}

/// Multiply every coordinate by `factor`
pub fn scale<A>(a: &A, factor: f64, sink: &dyn DiagnosticSink) -> Result<DenseVector>
where
    A: Vector + ?Sized,
{
    DenseVector::from_fn(a.dimension(), |i| a.coordinate(i) * factor)
        .map_err(|e| report(sink, "scale", e))
}

/// Dot product
pub fn dot<A, B>(a: &A, b: &B, sink: &dyn DiagnosticSink) -> Result<f64>
where
    A: Vector + ?Sized,
    B: Vector + ?Sized,
{
    let dim = same_dimension("dot", a, b, sink)?;
    Ok((0..dim).map(|i| a.coordinate(i) * b.coordinate(i)).sum())
}

/// Approximate equality: `norm(a - b) < tolerance`
///
/// This is the one definition of "same vector" used by every
/// [`crate::set::ToleranceSet`] membership test.
pub fn approx_equal<A, B>(
    a: &A,
    b: &B,
    norm: Norm,
    tolerance: f64,
    sink: &dyn DiagnosticSink,
) -> Result<bool>
where
    A: Vector + ?Sized,
    B: Vector + ?Sized,
{
    check_tolerance(tolerance).map_err(|e| report(sink, "approx_equal", e))?;
    same_dimension("approx_equal", a, b, sink)?;
    let diff = sub(a, b, sink)?;
    Ok(diff.norm(norm) < tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{NoopSink, RecordingSink};
    use crate::error::ResultCode;
    use proptest::prelude::*;

    fn vector(values: &[f64]) -> DenseVector {
        create(values.len(), values, &NoopSink).unwrap()
    }

    #[test]
    fn test_create_copies_values() {
        let mut source = vec![1.0, 2.0, 3.0];
        let v = create(3, &source, &NoopSink).unwrap();
        source[0] = 99.0;
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_create_rejects_zero_dimension() {
        let sink = RecordingSink::default();
        let err = create(0, &[], &sink).unwrap_err();
        assert_eq!(err.code(), ResultCode::InvalidDimension);
        assert_eq!(sink.count(ResultCode::InvalidDimension), 1);
        assert!(sink.last().unwrap().message.contains("[create]"));
    }

    #[test]
    fn test_create_rejects_short_data() {
        let sink = RecordingSink::default();
        let err = create(3, &[1.0, 2.0], &sink).unwrap_err();
        assert_eq!(err.code(), ResultCode::InvalidArgument);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_create_rejects_non_finite() {
        let sink = RecordingSink::default();
        for values in [[f64::NAN, 0.0], [0.0, f64::INFINITY], [f64::NEG_INFINITY, 1.0]] {
            let err = create(2, &values, &sink).unwrap_err();
            assert_eq!(err.code(), ResultCode::InvalidArgument);
        }
        assert_eq!(sink.count(ResultCode::InvalidArgument), 3);
        assert!(sink.last().unwrap().message.contains("[create]"));
    }

    #[test]
    fn test_add_sub() {
        let a = vector(&[1.0, 2.0]);
        let b = vector(&[0.5, -1.0]);
        assert_eq!(add(&a, &b, &NoopSink).unwrap().as_slice(), &[1.5, 1.0]);
        assert_eq!(sub(&a, &b, &NoopSink).unwrap().as_slice(), &[0.5, 3.0]);
        // operands untouched
        assert_eq!(a.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_dimension_mismatch_is_reported() {
        let sink = RecordingSink::default();
        let a = vector(&[1.0, 2.0]);
        let b = vector(&[1.0, 2.0, 3.0]);

        let err = add(&a, &b, &sink).unwrap_err();
        assert_eq!(err, Error::DimensionMismatch { expected: 2, actual: 3 });
        assert!(sub(&a, &b, &sink).is_err());
        assert!(dot(&a, &b, &sink).is_err());

        let messages: Vec<String> = sink.entries().into_iter().map(|d| d.message).collect();
        assert!(messages[0].contains("[add]"));
        assert!(messages[1].contains("[sub]"));
        assert!(messages[2].contains("[dot]"));
        assert_eq!(sink.count(ResultCode::DimensionMismatch), 3);
    }

    #[test]
    fn test_scale() {
        let a = vector(&[1.0, -2.0, 0.0]);
        let s = scale(&a, -3.0, &NoopSink).unwrap();
        assert_eq!(s.as_slice(), &[-3.0, 6.0, 0.0]);
    }

    #[test]
    fn test_dot() {
        let a = vector(&[1.0, 2.0, 3.0]);
        let b = vector(&[4.0, 5.0, 6.0]);
        assert!((dot(&a, &b, &NoopSink).unwrap() - 32.0).abs() < 1e-12);
    }

    #[test]
    fn test_approx_equal_is_strict() {
        let a = vector(&[0.0, 0.0]);
        let b = vector(&[3.0, 4.0]);
        assert!(!approx_equal(&a, &b, Norm::L2, 5.0, &NoopSink).unwrap());
        assert!(approx_equal(&a, &b, Norm::L2, 5.0001, &NoopSink).unwrap());
        assert!(approx_equal(&a, &b, Norm::LInf, 4.5, &NoopSink).unwrap());
        assert!(!approx_equal(&a, &b, Norm::L1, 7.0, &NoopSink).unwrap());
    }

    #[test]
    fn test_approx_equal_zero_tolerance_never_matches() {
        let a = vector(&[1.0]);
        assert!(!approx_equal(&a, &a, Norm::L2, 0.0, &NoopSink).unwrap());
    }

    #[test]
    fn test_approx_equal_rejects_negative_tolerance() {
        let sink = RecordingSink::default();
        let a = vector(&[1.0]);
        let err = approx_equal(&a, &a, Norm::L1, -0.1, &sink).unwrap_err();
        assert_eq!(err.code(), ResultCode::InvalidArgument);
        assert!(sink.last().unwrap().message.contains("[approx_equal]"));
    }

    fn coords() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-1.0e3..1.0e3f64, 1..16)
    }

    proptest! {
        #[test]
        fn prop_clone_matches_original(values in coords()) {
            let v = vector(&values);
            let c = v.try_clone().unwrap();
            prop_assert_eq!(c.dimension(), v.dimension());
            for i in 0..v.dimension() {
                prop_assert_eq!(c.coordinate(i), v.coordinate(i));
            }
        }

        #[test]
        fn prop_norm_ordering(values in coords()) {
            let v = vector(&values);
            let (l1, l2, linf) = (v.norm(Norm::L1), v.norm(Norm::L2), v.norm(Norm::LInf));
            let eps = 1e-9 * (1.0 + l1);
            prop_assert!(linf <= l2 + eps);
            prop_assert!(l2 <= l1 + eps);
        }

        #[test]
        fn prop_add_then_sub_restores(pairs in prop::collection::vec((-1.0e3..1.0e3f64, -1.0e3..1.0e3f64), 1..16)) {
            let (xs, ys): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
            let a = vector(&xs);
            let b = vector(&ys);
            let sum = add(&a, &b, &NoopSink).unwrap();
            let back = sub(&sum, &b, &NoopSink).unwrap();
            prop_assert!(approx_equal(&back, &a, Norm::LInf, 1e-9, &NoopSink).unwrap());
        }
    }
}
