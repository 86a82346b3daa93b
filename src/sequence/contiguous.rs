//! `Vec` and `VecDeque` realizations.
//!
//! Both extract by copying each match into the sink and erasing it in the
//! same `retain` pass, so the buffer is compacted exactly once.

use super::Sequence;
use std::collections::VecDeque;

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a;

    const NAME: &'static str = "Vector";

    fn push_back(&mut self, item: T) {
        self.push(item);
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn extract_where<F>(&mut self, mut pred: F, sink: &mut Self)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain(|item| {
            if pred(item) {
                sink.push(item.clone());
                false
            } else {
                true
            }
        });
    }
}

impl<T: Clone> Sequence for VecDeque<T> {
    type Item = T;
    type Iter<'a> = std::collections::vec_deque::Iter<'a, T> where Self: 'a;

    const NAME: &'static str = "Deque";

    fn push_back(&mut self, item: T) {
        Self::push_back(self, item);
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    fn extract_where<F>(&mut self, mut pred: F, sink: &mut Self)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain(|item| {
            if pred(item) {
                sink.push_back(item.clone());
                false
            } else {
                true
            }
        });
    }
}
