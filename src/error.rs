//! Error types for grade-partition
//!
//! Toyota Way: Clear error messages with actionable guidance (Respect for People)

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// grade-partition error types
#[derive(Error, Debug)]
pub enum Error {
    /// Strategy equivalence check failed (critical bug)
    #[error("Strategy equivalence failed: copy partition != in-place partition\nCopy: {copy_result}\nIn-place: {in_place_result}")]
    StrategyMismatch {
        /// What the copy partition produced at the first divergence
        copy_result: String,
        /// What the in-place partition produced at the first divergence
        in_place_result: String,
    },

    /// Benchmark configuration rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON encoding error (config or summary)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (report output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
