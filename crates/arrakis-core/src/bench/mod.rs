//! Timing harness for the traversal algorithms
//!
//! Each algorithm is wrapped in a zero-argument closure over fixed inputs
//! (the configured scenario) and run a fixed number of times per batch.

mod suite;

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::bail_invalid;
use crate::error::Result;

pub use suite::standard_suite;

/// A named, zero-argument algorithm invocation
pub struct Benchmark<'g> {
    pub name: &'static str,
    pub run: Box<dyn Fn() -> Result<()> + 'g>,
}

impl<'g> Benchmark<'g> {
    pub fn new(name: &'static str, run: impl Fn() -> Result<()> + 'g) -> Self {
        Benchmark {
            name,
            run: Box::new(run),
        }
    }
}

impl std::fmt::Debug for Benchmark<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Benchmark").field("name", &self.name).finish()
    }
}

/// Elapsed wall time for one batch
#[derive(Debug, Clone, Serialize)]
pub struct BenchResult {
    pub name: String,
    pub trials: u32,
    #[serde(serialize_with = "serialize_secs")]
    pub total: Duration,
    #[serde(serialize_with = "serialize_secs")]
    pub per_trial: Duration,
}

fn serialize_secs<S>(d: &Duration, s: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_f64(d.as_secs_f64())
}

/// A full benchmark run
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub started_at: DateTime<Utc>,
    pub trials: u32,
    pub results: Vec<BenchResult>,
}

/// Run one benchmark `trials` times and time the whole batch
pub fn time_batch(bench: &Benchmark, trials: u32) -> Result<BenchResult> {
    if trials == 0 {
        bail_invalid!("trials", trials);
    }

    let start = Instant::now();
    for _ in 0..trials {
        (bench.run)()?;
    }
    let total = start.elapsed();

    crate::trace_time!(start, "bench_batch", benchmark = bench.name, trials = trials);

    Ok(BenchResult {
        name: bench.name.to_string(),
        trials,
        total,
        per_trial: total / trials,
    })
}

/// Run every benchmark in `suite`, one batch each
#[tracing::instrument(skip(suite), fields(benchmarks = suite.len()))]
pub fn run_suite(suite: &[Benchmark], trials: u32) -> Result<BenchReport> {
    let started_at = Utc::now();
    let results = suite
        .iter()
        .map(|bench| time_batch(bench, trials))
        .collect::<Result<Vec<_>>>()?;

    for result in &results {
        tracing::debug!(
            benchmark = %result.name,
            total = ?result.total,
            per_trial = ?result.per_trial,
            "bench_result"
        );
    }

    Ok(BenchReport {
        started_at,
        trials,
        results,
    })
}
