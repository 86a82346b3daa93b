//! Student Record - a (name, grade) pair

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grades strictly below this value are failing.
pub const FAIL_THRESHOLD: f64 = 50.0;

/// A single student's name and grade.
///
/// Records are immutable once constructed: partition strategies copy or
/// relocate them but never touch their fields. The grade is a percentage by
/// convention only; no bound is enforced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentRecord {
    name: String,
    grade: f64,
}

impl StudentRecord {
    /// Create a new student record.
    ///
    /// # Arguments
    ///
    /// * `name` - Student identifier (uniqueness is not enforced)
    /// * `grade` - Grade as a percentage
    #[must_use]
    pub fn new(name: impl Into<String>, grade: f64) -> Self {
        Self {
            name: name.into(),
            grade,
        }
    }

    /// Get the student name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the grade.
    #[must_use]
    pub const fn grade(&self) -> f64 {
        self.grade
    }

    /// Whether this record belongs to the failed group (`grade < 50.0`).
    ///
    /// A NaN grade compares false and is therefore counted as passed.
    #[must_use]
    pub fn is_failing(&self) -> bool {
        self.grade < FAIL_THRESHOLD
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Grade: {}", self.name, self.grade)
    }
}
