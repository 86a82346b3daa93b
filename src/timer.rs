//! Wall-clock timing harness
//!
//! Toyota Way: Genchi Genbutsu (measure, don't guess)

use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

/// Elapsed wall-clock time of one labelled unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timing {
    label: String,
    elapsed: Duration,
}

impl Timing {
    /// Create a timing record.
    #[must_use]
    pub fn new(label: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            label: label.into(),
            elapsed,
        }
    }

    /// Get the label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the elapsed duration.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in seconds.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} took {:.6} seconds.", self.label, self.seconds())
    }
}

/// Result of a timed unit of work.
#[derive(Debug)]
pub struct Timed<T> {
    /// Whatever the work returned
    pub value: T,
    /// How long it took
    pub timing: Timing,
}

/// Run `work` exactly once and measure its wall-clock time.
///
/// # Errors
///
/// Returns the error produced by `work` unchanged; no timing is recorded.
///
/// # Example
///
/// ```rust
/// use grade_partition::timer::measure;
///
/// let timed = measure("sum", || Ok::<_, std::convert::Infallible>((1..=10).sum::<u32>()))?;
/// assert_eq!(timed.value, 55);
/// assert!(timed.timing.to_string().starts_with("sum took "));
/// # Ok::<(), std::convert::Infallible>(())
/// ```
pub fn measure<T, E, F>(label: &str, work: F) -> Result<Timed<T>, E>
where
    F: FnOnce() -> Result<T, E>,
{
    let start = Instant::now();
    let value = work()?;
    let elapsed = start.elapsed();

    tracing::debug!(label, elapsed_secs = elapsed.as_secs_f64(), "timed work finished");

    Ok(Timed {
        value,
        timing: Timing::new(label, elapsed),
    })
}
