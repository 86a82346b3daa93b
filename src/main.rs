//! grade-partition
//!
//! Runs the copy vs in-place partition benchmark over `Vec`, `LinkedList`
//! and `VecDeque` with 10,000 generated students each, writing the report to
//! stdout. Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).
//!
//! Run with: cargo run --release

use grade_partition::Benchmark;
use std::io::{self, BufWriter, Write};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let benchmark = Benchmark::builder().build()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = benchmark.run(&mut out)?;
    out.flush()?;

    tracing::info!("benchmark summary:\n{}", summary.to_json()?);
    Ok(())
}
