//! Synthetic dataset generation
//!
//! Produces `Student_0 .. Student_{n-1}` with grades drawn uniformly from the
//! integers `[0, 100]`. Generators are entropy-seeded by default; pass a seed
//! for reproducible datasets.
//!
//! # Example
//!
//! ```rust
//! use grade_partition::dataset::DatasetGenerator;
//! use grade_partition::StudentRecord;
//!
//! let mut generator = DatasetGenerator::with_seed(42);
//! let students: Vec<StudentRecord> = generator.generate(3);
//!
//! assert_eq!(students.len(), 3);
//! assert_eq!(students[2].name(), "Student_2");
//! ```

use crate::record::StudentRecord;
use crate::sequence::Sequence;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Highest grade the generator produces (inclusive).
pub const MAX_GRADE: u8 = 100;

/// Seedable source of synthetic student datasets.
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    rng: StdRng,
}

impl DatasetGenerator {
    /// Create a generator seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic generator.
    ///
    /// Two generators with the same seed produce identical datasets.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `size` records into a fresh sequence.
    pub fn generate<S>(&mut self, size: usize) -> S
    where
        S: Sequence<Item = StudentRecord>,
    {
        let mut students = S::default();
        for i in 0..size {
            let grade = self.rng.gen_range(0..=MAX_GRADE);
            students.push_back(StudentRecord::new(format!("Student_{i}"), f64::from(grade)));
        }
        tracing::debug!(container = S::NAME, size, "generated dataset");
        students
    }
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a dataset with an optional seed.
///
/// `None` draws the seed from OS entropy.
pub fn generate_dataset<S>(size: usize, seed: Option<u64>) -> S
where
    S: Sequence<Item = StudentRecord>,
{
    let mut generator = seed.map_or_else(DatasetGenerator::new, DatasetGenerator::with_seed);
    generator.generate(size)
}
