//! LIFO adapter over a contiguous growable buffer.

use alloc::vec::Vec;
use core::fmt;

/// Generic stack; the top is the last element of the backing buffer.
///
/// All operations are O(1) amortized. Popping an empty stack returns `None`.
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Element that the next [`pop`](Self::pop) would return.
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Full contents in insertion order, bottom of the stack first.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Full contents in insertion order, bottom of the stack first. O(n).
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
