//! FIFO adapter over a double-ended growable buffer.

use alloc::{collections::VecDeque, vec::Vec};
use core::fmt;

/// Generic queue; push at the back, pop from the front.
///
/// Backed by a double-ended buffer so both ends are O(1) amortized.
/// Popping an empty queue returns `None`.
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub const fn new() -> Self {
        Self { items: VecDeque::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Element that the next [`pop`](Self::pop) would return.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Most recently pushed element.
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Full contents in queue order, front first. O(n).
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items: VecDeque::from(items) }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
