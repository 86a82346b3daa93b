//! Partition strategies
//!
//! **Problem**: split a sequence of students into failed (`grade < 50.0`) and
//! passed groups, keeping the original relative order inside each group.
//!
//! **Strategies**:
//! - [`partition_copy`] (Strategy 1): reads the input, copies every record
//!   into one of two fresh sequences.
//! - [`partition_in_place`] (Strategy 2): consumes an owned sequence, moves
//!   the failing records out and compacts the survivors, which become the
//!   passed group.
//!
//! Both produce identical output for every input; they differ only in how
//! they allocate and mutate.
//!
//! Toyota Way: Jidoka - [`verify_equivalence`] stops the line when the two
//! strategies disagree.
//!
//! # Example
//!
//! ```rust
//! use grade_partition::strategy::{partition_copy, partition_in_place, verify_equivalence};
//! use grade_partition::StudentRecord;
//!
//! let students = vec![
//!     StudentRecord::new("A", 40.0),
//!     StudentRecord::new("B", 60.0),
//!     StudentRecord::new("C", 50.0),
//!     StudentRecord::new("D", 10.0),
//! ];
//!
//! let copied = partition_copy(&students);
//! let filtered = partition_in_place(students.clone());
//!
//! assert_eq!(copied.counts(), (2, 2));
//! verify_equivalence(&copied, &filtered)?;
//! # Ok::<(), grade_partition::Error>(())
//! ```

use crate::record::StudentRecord;
use crate::sequence::Sequence;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Partition strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Strategy 1: copy into two new sequences
    Copy,
    /// Strategy 2: filter the working sequence in place
    InPlace,
}

impl Strategy {
    /// Both strategies in benchmark order.
    pub const ALL: [Self; 2] = [Self::Copy, Self::InPlace];

    /// Label used in report headings and timing lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Copy => "Strategy 1",
            Self::InPlace => "Strategy 2",
        }
    }

    /// Run this strategy.
    ///
    /// `students` is borrowed; the in-place strategy works on a clone.
    #[must_use]
    pub fn apply<S>(self, students: &S) -> Partition<S>
    where
        S: Sequence<Item = StudentRecord> + Clone,
    {
        match self {
            Self::Copy => partition_copy(students),
            Self::InPlace => partition_in_place(students.clone()),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Failed and passed groups produced by a strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<S> {
    /// Records with `grade < 50.0`, in input order
    pub failed: S,
    /// All other records, in input order
    pub passed: S,
}

impl<S: Sequence> Partition<S> {
    /// `(failed, passed)` group sizes.
    #[must_use]
    pub fn counts(&self) -> (usize, usize) {
        (self.failed.len(), self.passed.len())
    }

    /// Total number of records across both groups.
    #[must_use]
    pub fn total(&self) -> usize {
        self.failed.len() + self.passed.len()
    }
}

/// Strategy 1: stable partition into two freshly built sequences.
///
/// The input is left untouched.
#[must_use]
pub fn partition_copy<S>(students: &S) -> Partition<S>
where
    S: Sequence<Item = StudentRecord>,
{
    let mut failed = S::default();
    let mut passed = S::default();

    for student in students.iter() {
        if student.is_failing() {
            failed.push_back(student.clone());
        } else {
            passed.push_back(student.clone());
        }
    }

    Partition { failed, passed }
}

/// Strategy 2: extract failing records, keep the rest in the working sequence.
///
/// Takes ownership of `students`; clone at the call site to keep the
/// original. The compacted remainder is returned as `passed`.
#[must_use]
pub fn partition_in_place<S>(mut students: S) -> Partition<S>
where
    S: Sequence<Item = StudentRecord>,
{
    let mut failed = S::default();
    students.extract_where(StudentRecord::is_failing, &mut failed);

    Partition {
        failed,
        passed: students,
    }
}

/// Check that two partitions hold the same records in the same order.
///
/// # Errors
///
/// Returns [`Error::StrategyMismatch`] describing the first divergence.
pub fn verify_equivalence<S>(copy: &Partition<S>, in_place: &Partition<S>) -> Result<()>
where
    S: Sequence<Item = StudentRecord>,
{
    compare_group("failed", &copy.failed, &in_place.failed)?;
    compare_group("passed", &copy.passed, &in_place.passed)
}

fn compare_group<S>(group: &str, copy: &S, in_place: &S) -> Result<()>
where
    S: Sequence<Item = StudentRecord>,
{
    if copy.len() != in_place.len() {
        return Err(Error::StrategyMismatch {
            copy_result: format!("{group}: {} records", copy.len()),
            in_place_result: format!("{group}: {} records", in_place.len()),
        });
    }

    for (index, (a, b)) in copy.iter().zip(in_place.iter()).enumerate() {
        // Bitwise grade comparison so NaN grades still compare equal
        if a.name() != b.name() || a.grade().to_bits() != b.grade().to_bits() {
            return Err(Error::StrategyMismatch {
                copy_result: format!("{group}[{index}] = {a}"),
                in_place_result: format!("{group}[{index}] = {b}"),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{LinkedList, VecDeque};

    fn scenario<S>() -> S
    where
        S: Sequence<Item = StudentRecord>,
    {
        let mut students = S::default();
        for (name, grade) in [("A", 40.0), ("B", 60.0), ("C", 50.0), ("D", 10.0)] {
            students.push_back(StudentRecord::new(name, grade));
        }
        students
    }

    fn names<S>(seq: &S) -> Vec<&str>
    where
        S: Sequence<Item = StudentRecord>,
    {
        seq.iter().map(StudentRecord::name).collect()
    }

    fn check_scenario<S>()
    where
        S: Sequence<Item = StudentRecord> + Clone,
    {
        let students: S = scenario();
        for strategy in Strategy::ALL {
            let result = strategy.apply(&students);
            assert_eq!(names(&result.failed), ["A", "D"], "{strategy} on {}", S::NAME);
            assert_eq!(names(&result.passed), ["B", "C"], "{strategy} on {}", S::NAME);
        }
    }

    #[test]
    fn test_scenario_vector() {
        check_scenario::<Vec<StudentRecord>>();
    }

    #[test]
    fn test_scenario_list() {
        check_scenario::<LinkedList<StudentRecord>>();
    }

    #[test]
    fn test_scenario_deque() {
        check_scenario::<VecDeque<StudentRecord>>();
    }

    #[test]
    fn test_partition_copy_leaves_input_untouched() {
        let students: Vec<StudentRecord> = scenario();
        let before = students.clone();
        let _ = partition_copy(&students);
        assert_eq!(students, before);
    }

    #[test]
    fn test_empty_input() {
        let empty: VecDeque<StudentRecord> = VecDeque::new();
        let copied = partition_copy(&empty);
        let filtered = partition_in_place(empty);
        assert_eq!(copied.counts(), (0, 0));
        assert_eq!(filtered.counts(), (0, 0));
        assert!(verify_equivalence(&copied, &filtered).is_ok());
    }

    #[test]
    fn test_all_failing() {
        let students: LinkedList<StudentRecord> =
            (0..5).map(|i| StudentRecord::new(format!("s{i}"), 0.0)).collect();
        let result = partition_in_place(students);
        assert_eq!(result.counts(), (5, 0));
        assert_eq!(result.total(), 5);
    }

    #[test]
    fn test_nan_grade_goes_to_passed_in_both() {
        let students = vec![StudentRecord::new("n", f64::NAN), StudentRecord::new("f", 1.0)];
        let copied = partition_copy(&students);
        let filtered = partition_in_place(students);
        assert_eq!(copied.counts(), (1, 1));
        assert!(verify_equivalence(&copied, &filtered).is_ok());
    }

    #[test]
    fn test_verify_equivalence_detects_length_mismatch() {
        let students: Vec<StudentRecord> = scenario();
        let copied = partition_copy(&students);
        let mut tampered = partition_in_place(students);
        tampered.failed.pop();

        let err = verify_equivalence(&copied, &tampered).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("failed: 2 records"));
        assert!(msg.contains("failed: 1 records"));
    }

    #[test]
    fn test_verify_equivalence_detects_order_mismatch() {
        let students: Vec<StudentRecord> = scenario();
        let copied = partition_copy(&students);
        let mut tampered = partition_in_place(students);
        tampered.passed.swap(0, 1);

        let err = verify_equivalence(&copied, &tampered).unwrap_err();
        assert!(matches!(err, Error::StrategyMismatch { .. }));
        assert!(err.to_string().contains("passed[0]"));
    }

    #[test]
    fn test_strategy_labels() {
        assert_eq!(Strategy::Copy.label(), "Strategy 1");
        assert_eq!(Strategy::InPlace.to_string(), "Strategy 2");
    }
}
