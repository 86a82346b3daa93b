//! `LinkedList` realization.

use super::Sequence;
use std::collections::LinkedList;

impl<T> Sequence for LinkedList<T> {
    type Item = T;
    type Iter<'a> = std::collections::linked_list::Iter<'a, T> where Self: 'a;

    const NAME: &'static str = "List";

    fn push_back(&mut self, item: T) {
        Self::push_back(self, item);
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    // No stable cursor API, so elements are moved (not cloned) node by node.
    fn extract_where<F>(&mut self, mut pred: F, sink: &mut Self)
    where
        F: FnMut(&T) -> bool,
    {
        let mut kept = Self::new();
        while let Some(item) = self.pop_front() {
            if pred(&item) {
                sink.push_back(item);
            } else {
                kept.push_back(item);
            }
        }
        *self = kept;
    }
}
