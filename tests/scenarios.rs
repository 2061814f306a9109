//! End-to-end scenarios over the public API.

use std::fs::File;
use std::io::{BufReader, Write};
use std::sync::Arc;

use tolvec::vector::{create, sub};
use tolvec::{Config, Norm, NoopSink, RecordingSink, ResultCode, Session, ToleranceSet, Vector};

fn v(values: &[f64]) -> tolvec::DenseVector {
    create(values.len(), values, &NoopSink).unwrap()
}

#[test]
fn test_insert_collision_then_erase_by_sample() {
    let mut set = ToleranceSet::new();
    for values in [[1.0, 0.0], [0.0, 1.0], [1.0, 0.05]] {
        set.insert(&v(&values), Norm::L2, 0.1).unwrap();
    }
    assert_eq!(set.len(), 2);

    let removed = set.erase_matching(&v(&[1.0, 0.0]), Norm::L2, 0.1).unwrap();
    assert_eq!(removed, 1);
    assert_eq!(set.len(), 1);
    assert_eq!(set.get(0).unwrap().as_slice(), &[0.0, 1.0]);
}

#[test]
fn test_reseed_with_new_dimension() {
    let mut set = ToleranceSet::new();
    set.insert(&v(&[1.0, 2.0]), Norm::L1, 0.5).unwrap();
    set.erase(0).unwrap();
    assert_eq!(set.dimension(), 0);

    set.insert(&v(&[1.0, 2.0, 3.0, 4.0]), Norm::L1, 0.5).unwrap();
    assert_eq!(set.dimension(), 4);
    assert_eq!(set.len(), 1);
}

#[test]
fn test_half_unit_difference() {
    let a = v(&[1.0, 1.0]);
    let b = v(&[1.0, 1.5]);
    assert!((sub(&a, &b, &NoopSink).unwrap().norm(Norm::L2) - 0.5).abs() < 1e-12);

    let mut loose = ToleranceSet::new();
    loose.insert(&a, Norm::L2, 1.0).unwrap();
    loose.insert(&b, Norm::L2, 1.0).unwrap();
    assert_eq!(loose.len(), 1);

    let mut tight = ToleranceSet::new();
    tight.insert(&a, Norm::L2, 0.1).unwrap();
    tight.insert(&b, Norm::L2, 0.1).unwrap();
    assert_eq!(tight.len(), 2);
}

#[test]
fn test_set_sink_sees_only_factory_reports() {
    let sink = Arc::new(RecordingSink::default());
    let mut set = ToleranceSet::with_sink(sink.clone());
    set.insert(&v(&[1.0]), Norm::L2, 0.1).unwrap();
    set.insert(&v(&[2.0]), Norm::L2, 0.1).unwrap();

    assert_eq!(
        ResultCode::of(&set.insert(&v(&[1.0, 1.0]), Norm::L2, 0.1)),
        ResultCode::DimensionMismatch
    );
    assert_eq!(ResultCode::of(&set.get(2)), ResultCode::IndexOutOfRange);
    assert!(sink.is_empty());
}

#[test]
fn test_script_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# scenario").unwrap();
    writeln!(file, "NORM l2").unwrap();
    writeln!(file, "TOL 0.1").unwrap();
    writeln!(file, "INSERT 1 0").unwrap();
    writeln!(file, "INSERT 0 1").unwrap();
    writeln!(file, "INSERT 1 0.05").unwrap();
    writeln!(file, "REMOVE 1 0").unwrap();
    writeln!(file, "LIST").unwrap();
    file.flush().unwrap();

    let mut session = Session::new(Config::default()).unwrap();
    let reader = BufReader::new(File::open(file.path()).unwrap());
    let mut out = Vec::new();
    let executed = session.run_script(reader, &mut out).unwrap();

    assert_eq!(executed, 7);
    assert_eq!(session.set().len(), 1);
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().last(), Some("0) [0, 1]"));
}
