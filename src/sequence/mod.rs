//! Ordered sequence abstraction over the standard containers
//!
//! The partition strategies never name a concrete container. They work on
//! anything that can append at the end, iterate front to back, and remove a
//! predicate-selected subset while keeping the survivors in order.
//!
//! Three realizations are provided:
//!
//! | Container        | `NAME`     | Layout              |
//! |------------------|------------|---------------------|
//! | `Vec<T>`         | `"Vector"` | contiguous array    |
//! | `LinkedList<T>`  | `"List"`   | doubly-linked list  |
//! | `VecDeque<T>`    | `"Deque"`  | ring buffer         |
//!
//! # Example
//!
//! ```rust
//! use grade_partition::sequence::Sequence;
//! use std::collections::VecDeque;
//!
//! let mut numbers: VecDeque<i32> = (1..=6).collect();
//! let mut odd = VecDeque::new();
//! numbers.extract_where(|n| n % 2 == 1, &mut odd);
//!
//! assert_eq!(numbers, [2, 4, 6]);
//! assert_eq!(odd, [1, 3, 5]);
//! ```

mod contiguous;
mod linked;

/// An ordered container the partition strategies can operate on.
pub trait Sequence: Default {
    /// Element type.
    type Item;

    /// Borrowing front-to-back iterator.
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Human-readable container name used in reports.
    const NAME: &'static str;

    /// Append an element at the end.
    fn push_back(&mut self, item: Self::Item);

    /// Number of elements.
    fn len(&self) -> usize;

    /// Check if the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate front to back.
    fn iter(&self) -> Self::Iter<'_>;

    /// Remove every element matching `pred`, appending each one to `sink`.
    ///
    /// `pred` is called exactly once per element, front to back. Removed
    /// elements reach `sink` in their original relative order and the
    /// survivors stay compacted in theirs.
    fn extract_where<F>(&mut self, pred: F, sink: &mut Self)
    where
        F: FnMut(&Self::Item) -> bool;
}
