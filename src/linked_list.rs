//! Singly-linked list with a cached tail pointer.

use alloc::{boxed::Box, vec::Vec};
use core::{fmt, ptr::NonNull};

struct Node<T> {
    element: T,
    next: Option<Box<Node<T>>>,
}

/// Singly-linked list where each node owns its successor.
///
/// The list keeps a non-owning pointer to the last node so that
/// [`push_back`](Self::push_back) is O(1); the pointer is refreshed whenever
/// the tail's identity may have changed. Element count is derived by
/// traversal and deliberately not cached.
///
/// The list is ordered but not indexed; call [`to_vec`](Self::to_vec) for
/// indexed access.
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    /// Points into the chain owned by `head`; `None` exactly when the list
    /// is empty.
    tail: Option<NonNull<Node<T>>>,
}

impl<T> LinkedList<T> {
    pub const fn new() -> Self {
        Self { head: None, tail: None }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of elements, derived by traversing the chain. O(n).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// First element. O(1).
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.element)
    }

    /// Last element. O(1).
    pub fn back(&self) -> Option<&T> {
        // Safety: `tail` points at a live node inside the chain owned by
        // `head` and every structural operation keeps it in sync.
        self.tail.map(|tail| unsafe { &(*tail.as_ptr()).element })
    }

    /// Appends `element` at the tail. O(1).
    pub fn push_back(&mut self, element: T) {
        let node = Box::new(Node { element, next: None });
        match self.tail {
            // Safety: `tail` points at the current last node, whose `next`
            // is `None`.
            Some(tail) => unsafe {
                let last = &mut *tail.as_ptr();
                last.next = Some(node);
                self.tail = last.next.as_deref_mut().map(NonNull::from);
            },
            None => {
                self.head = Some(node);
                self.tail = self.head.as_deref_mut().map(NonNull::from);
            }
        }
    }

    /// Prepends `element` at the head. O(1).
    pub fn push_front(&mut self, element: T) {
        let node = Box::new(Node { element, next: self.head.take() });
        self.head = Some(node);
        if self.tail.is_none() {
            self.tail = self.head.as_deref_mut().map(NonNull::from);
        }
    }

    /// Lazy forward-only view from head to tail. Restartable per call;
    /// iterating does not mutate the list.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { node: self.head.as_deref() }
    }

    /// Materializes the full sequence in list order. O(n).
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Walks the chain and refreshes the cached tail pointer.
    fn recompute_tail(&mut self) {
        let mut tail = None;
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            tail = Some(NonNull::from(&mut *node));
            cursor = node.next.as_deref_mut();
        }
        self.tail = tail;
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Inserts `element` after the first node equal to `anchor`. O(n).
    ///
    /// Returns `false` and leaves the list unchanged if no node matches.
    pub fn insert_after(&mut self, anchor: &T, element: T) -> bool {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.element == *anchor {
                node.next = Some(Box::new(Node { element, next: node.next.take() }));
                self.recompute_tail();
                return true;
            }
            cursor = node.next.as_deref_mut();
        }
        false
    }

    /// Inserts `element` before the first node equal to `anchor`. O(n).
    ///
    /// Returns `false` and leaves the list unchanged if no node matches.
    pub fn insert_before(&mut self, anchor: &T, element: T) -> bool {
        let head_matches = match self.head.as_deref() {
            None => return false,
            Some(first) => first.element == *anchor,
        };
        if head_matches {
            self.push_front(element);
            return true;
        }
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.next.as_deref().is_some_and(|next| next.element == *anchor) {
                // Inserting in front of an existing node never changes the
                // tail's identity.
                node.next = Some(Box::new(Node { element, next: node.next.take() }));
                return true;
            }
            cursor = node.next.as_deref_mut();
        }
        false
    }

    /// Removes the first node equal to `element` and returns its value. O(n).
    ///
    /// Returns `None` and leaves the list unchanged if no node matches.
    pub fn remove(&mut self, element: &T) -> Option<T> {
        let mut cursor = &mut self.head;
        while cursor.as_deref()?.element != *element {
            cursor = &mut cursor.as_mut()?.next;
        }
        let mut removed = cursor.take()?;
        *cursor = removed.next.take();
        self.recompute_tail();
        Some(removed.element)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively so a long chain cannot overflow the stack
        // through nested box drops.
        let mut node = self.head.take();
        while let Some(mut boxed) = node {
            node = boxed.next.take();
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for element in iter {
            list.push_back(element);
        }
        list
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowed iterator over a [`LinkedList`], from head to tail.
pub struct Iter<'a, T> {
    node: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.node?;
        self.node = node.next.as_deref();
        Some(&node.element)
    }
}
