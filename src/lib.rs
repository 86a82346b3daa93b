//! # grade-partition: Copy vs In-Place Partition Benchmark
//!
//! **Version**: 0.1.0
//!
//! Splits synthetic student records into failed (`grade < 50.0`) and passed
//! groups with two stable partition strategies, across three standard
//! containers, and measures wall-clock time for each.
//!
//! | Strategy   | Input         | Output                                   |
//! |------------|---------------|------------------------------------------|
//! | Strategy 1 | borrowed      | two freshly built sequences              |
//! | Strategy 2 | owned (clone) | extracted failures + compacted survivors |
//!
//! ## Design Principles (Toyota Way Aligned)
//!
//! - **Genchi Genbutsu**: Every strategy run is timed, not estimated
//! - **Jidoka**: Strategy equivalence is checked after each container run
//! - **Heijunka**: One generic code path for `Vec`, `LinkedList`, `VecDeque`
//!
//! ## Example Usage
//!
//! ```rust
//! use grade_partition::{Benchmark, ContainerKind};
//!
//! let benchmark = Benchmark::builder()
//!     .dataset_size(20)
//!     .seed(42)
//!     .containers([ContainerKind::Vector, ContainerKind::Deque])
//!     .build()?;
//!
//! let mut out = Vec::new();
//! let summary = benchmark.run(&mut out)?;
//! assert_eq!(summary.reports.len(), 2);
//! # Ok::<(), grade_partition::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod dataset;
pub mod driver;
pub mod error;
pub mod record;
pub mod report;
pub mod sequence;
pub mod strategy;
pub mod timer;

pub use config::BenchmarkConfig;
pub use driver::{BenchmarkSummary, ContainerReport};
pub use error::{Error, Result};
pub use record::StudentRecord;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// Container realization to benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    /// Contiguous array (`Vec`)
    Vector,
    /// Doubly-linked list (`LinkedList`)
    List,
    /// Double-ended queue (`VecDeque`)
    Deque,
}

impl ContainerKind {
    /// All containers in benchmark order.
    pub const ALL: [Self; 3] = [Self::Vector, Self::List, Self::Deque];

    /// Name used in report headings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vector => "Vector",
            Self::List => "List",
            Self::Deque => "Deque",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configured benchmark, ready to run
#[derive(Debug, Clone)]
pub struct Benchmark {
    config: BenchmarkConfig,
}

impl Benchmark {
    /// Create a new benchmark builder
    #[must_use]
    pub fn builder() -> BenchmarkBuilder {
        BenchmarkBuilder::default()
    }

    /// Create a benchmark from an existing configuration
    ///
    /// # Errors
    ///
    /// Returns error if the configuration selects no containers
    pub fn from_config(config: BenchmarkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration
    #[must_use]
    pub const fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Run every configured container, writing the report to `out`
    ///
    /// # Errors
    ///
    /// Returns error if writing fails or the two strategies disagree
    pub fn run<W: Write + ?Sized>(&self, out: &mut W) -> Result<BenchmarkSummary> {
        driver::run(&self.config, out)
    }
}

/// Benchmark builder
#[derive(Debug, Default)]
pub struct BenchmarkBuilder {
    config: BenchmarkConfig,
}

impl BenchmarkBuilder {
    /// Set number of students generated per container
    #[must_use]
    pub fn dataset_size(mut self, size: usize) -> Self {
        self.config.dataset_size = size;
        self
    }

    /// Use a fixed seed for reproducible grades
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Select containers to benchmark, in order
    #[must_use]
    pub fn containers(mut self, containers: impl IntoIterator<Item = ContainerKind>) -> Self {
        self.config.containers = containers.into_iter().collect();
        self
    }

    /// Print every record (default) or only group headings
    #[must_use]
    pub fn list_records(mut self, list: bool) -> Self {
        self.config.list_records = list;
        self
    }

    /// Build the benchmark
    ///
    /// # Errors
    ///
    /// Returns error if no containers are selected
    pub fn build(self) -> Result<Benchmark> {
        Benchmark::from_config(self.config)
    }
}
