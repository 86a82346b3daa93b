//! Benchmark driver
//!
//! For each configured container: generate a dataset, display it, run both
//! strategies under the timer, display their groups, check they agree, and
//! print a separator.

use crate::config::BenchmarkConfig;
use crate::dataset::generate_dataset;
use crate::record::StudentRecord;
use crate::report::{display, display_summary};
use crate::sequence::Sequence;
use crate::strategy::{verify_equivalence, Partition, Strategy};
use crate::timer::{measure, Timed, Timing};
use crate::{ContainerKind, Result};
use serde::Serialize;
use std::collections::{LinkedList, VecDeque};
use std::io::Write;

/// Line printed after each container run.
pub const SEPARATOR: &str = "========================================";

/// Outcome of benchmarking one container.
#[derive(Debug, Clone, Serialize)]
pub struct ContainerReport {
    /// Container name (`"Vector"`, `"List"`, `"Deque"`)
    pub container: &'static str,
    /// Number of generated students
    pub dataset_size: usize,
    /// Size of the failed group
    pub failed: usize,
    /// Size of the passed group
    pub passed: usize,
    /// Strategy 1 timing
    pub copy_timing: Timing,
    /// Strategy 2 timing
    pub in_place_timing: Timing,
}

/// All container reports of one benchmark run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BenchmarkSummary {
    /// One report per container, in run order
    pub reports: Vec<ContainerReport>,
}

impl BenchmarkSummary {
    /// Render the summary as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run every configured container in order.
///
/// # Errors
///
/// Returns an error if writing the report fails or the strategies disagree.
pub fn run<W>(config: &BenchmarkConfig, out: &mut W) -> Result<BenchmarkSummary>
where
    W: Write + ?Sized,
{
    let mut summary = BenchmarkSummary {
        reports: Vec::with_capacity(config.containers.len()),
    };

    for &kind in &config.containers {
        let report = match kind {
            ContainerKind::Vector => run_container::<Vec<StudentRecord>, W>(config, out)?,
            ContainerKind::List => run_container::<LinkedList<StudentRecord>, W>(config, out)?,
            ContainerKind::Deque => run_container::<VecDeque<StudentRecord>, W>(config, out)?,
        };
        summary.reports.push(report);
    }

    Ok(summary)
}

/// Benchmark a single container realization.
///
/// # Errors
///
/// Returns an error if writing the report fails or the strategies disagree.
pub fn run_container<S, W>(config: &BenchmarkConfig, out: &mut W) -> Result<ContainerReport>
where
    S: Sequence<Item = StudentRecord> + Clone,
    W: Write + ?Sized,
{
    writeln!(
        out,
        "Testing with container: {} ({} students)",
        S::NAME,
        config.dataset_size
    )?;

    let students: S = generate_dataset(config.dataset_size, config.seed);
    show(out, &students, "Original Students", config.list_records)?;

    let copy = run_strategy(out, &students, Strategy::Copy, config.list_records)?;
    let in_place = run_strategy(out, &students, Strategy::InPlace, config.list_records)?;

    verify_equivalence(&copy.value, &in_place.value)?;

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out)?;

    let (failed, passed) = copy.value.counts();
    tracing::info!(
        container = S::NAME,
        failed,
        passed,
        copy_secs = copy.timing.seconds(),
        in_place_secs = in_place.timing.seconds(),
        "container benchmarked"
    );

    Ok(ContainerReport {
        container: S::NAME,
        dataset_size: config.dataset_size,
        failed,
        passed,
        copy_timing: copy.timing,
        in_place_timing: in_place.timing,
    })
}

// The timed region covers the strategy and the display of its groups.
fn run_strategy<S, W>(
    out: &mut W,
    students: &S,
    strategy: Strategy,
    list_records: bool,
) -> Result<Timed<Partition<S>>>
where
    S: Sequence<Item = StudentRecord> + Clone,
    W: Write + ?Sized,
{
    let timed = measure(strategy.label(), || {
        let partition = strategy.apply(students);
        show(
            out,
            &partition.failed,
            &format!("Failed Students ({strategy})"),
            list_records,
        )?;
        show(
            out,
            &partition.passed,
            &format!("Passed Students ({strategy})"),
            list_records,
        )?;
        Ok::<_, crate::Error>(partition)
    })?;

    writeln!(out, "{}", timed.timing)?;
    writeln!(out)?;
    Ok(timed)
}

fn show<S, W>(out: &mut W, students: &S, title: &str, list_records: bool) -> Result<()>
where
    S: Sequence<Item = StudentRecord>,
    W: Write + ?Sized,
{
    if list_records {
        display(out, students, title)
    } else {
        display_summary(out, students, title)
    }
}
