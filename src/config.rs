//! Benchmark configuration
//!
//! Built programmatically through [`crate::Benchmark::builder`] or parsed from
//! JSON. Every field is optional in JSON and falls back to its default.
//!
//! # JSON Format
//! ```json
//! {
//!   "dataset_size": 10000,
//!   "seed": 42,
//!   "containers": ["vector", "list", "deque"],
//!   "list_records": true
//! }
//! ```

use crate::{ContainerKind, Error, Result};
use serde::{Deserialize, Serialize};

/// Benchmark configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Number of students generated per container.
    pub dataset_size: usize,
    /// Seed for the grade generator (`None` = OS entropy).
    pub seed: Option<u64>,
    /// Containers to benchmark, in order.
    pub containers: Vec<ContainerKind>,
    /// Print every record, or only the group headings.
    pub list_records: bool,
}

impl BenchmarkConfig {
    /// Default number of students per container.
    pub const DEFAULT_DATASET_SIZE: usize = 10_000;

    /// Parses configuration from a JSON string and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the JSON is malformed or the
    /// resulting configuration is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::InvalidConfig(format!("JSON parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises configuration to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the configuration can drive a benchmark run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if no containers are selected.
    pub fn validate(&self) -> Result<()> {
        if self.containers.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one container must be selected".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            dataset_size: Self::DEFAULT_DATASET_SIZE,
            seed: None,
            containers: ContainerKind::ALL.to_vec(),
            list_records: true,
        }
    }
}
