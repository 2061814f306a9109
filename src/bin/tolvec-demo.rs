//! TOLVEC Demo
//!
//! Walks through the tolerance set and exact arithmetic, logging each step.

use clap::Parser;
use std::sync::Arc;
use tolvec::vector::{add, create, dot, scale, sub};
use tolvec::{Interval, Norm, Rational, ToleranceSet, TracingSink, Vector};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// TOLVEC Demo - Tolerance Set Walkthrough
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Norm used for approximate equality (l1, l2, linf)
    #[arg(short, long, default_value = "l2")]
    norm: Norm,

    /// Tolerance for approximate equality
    #[arg(short, long, default_value_t = 0.1)]
    tolerance: f64,

    /// Skip the exact arithmetic section
    #[arg(long, default_value_t = false)]
    vectors_only: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("tolvec=info".parse()?))
        .init();

    let args = Args::parse();
    let sink = TracingSink::new("demo");

    info!("Vector factory with {} norm", args.norm);
    let a = create(3, &[1.0, 2.0, 2.0], &sink)?;
    let b = create(3, &[0.5, -1.0, 4.0], &sink)?;
    info!("a = {}, |a|_1 = {}, |a|_2 = {}, |a|_inf = {}",
        a, a.norm(Norm::L1), a.norm(Norm::L2), a.norm(Norm::LInf));
    info!("a + b = {}", add(&a, &b, &sink)?);
    info!("a - b = {}", sub(&a, &b, &sink)?);
    info!("3a = {}", scale(&a, 3.0, &sink)?);
    info!("a . b = {}", dot(&a, &b, &sink)?);

    // Mismatched dimensions are reported through the sink
    let short = create(2, &[1.0, 0.0], &sink)?;
    if let Err(e) = add(&a, &short, &sink) {
        info!("add rejected: {} ({})", e, e.code());
    }

    info!("Tolerance set with tolerance {}", args.tolerance);
    let mut set = ToleranceSet::with_sink(Arc::new(TracingSink::new("set")));
    for values in [[1.0, 0.0], [0.0, 1.0], [1.0, 0.05]] {
        let v = create(2, &values, &sink)?;
        let inserted = set.insert(&v, args.norm, args.tolerance)?;
        info!("insert {} -> inserted={}, size={}", v, inserted, set.len());
    }

    let sample = create(2, &[1.0, 0.0], &sink)?;
    let removed = set.erase_matching(&sample, args.norm, args.tolerance)?;
    info!("erase matching {} -> removed {}, size={}", sample, removed, set.len());
    for (i, v) in set.snapshot()?.iter().enumerate() {
        info!("  {}) {}", i, v);
    }

    set.erase(0)?;
    info!("after erasing the last element: size={}, dimension={}", set.len(), set.dimension());

    if args.vectors_only {
        return Ok(());
    }

    info!("Exact arithmetic");
    let x = Rational::new(1, 3);
    let y = Rational::new(-3, 4);
    info!("{} + {} = {}", x, y, x + y);
    info!("{} / {} = {}", x, y, x / y);
    info!("{} / 0 = {}", x, x / Rational::ZERO);

    let p = Interval::new(Rational::integer(1), Rational::integer(2));
    let q = Interval::new(Rational::new(-1, 2), Rational::integer(3));
    info!("{} * {} = {}", p, q, p * q);
    info!("{} / {} = {}", q, p, q / p);
    info!("{} contains zero: {}", q, q.contains_zero());

    Ok(())
}
