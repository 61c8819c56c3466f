//! Generic container data structures.
//!
//! The core type is [`RingBuffer`]: a fixed-capacity FIFO hand-off buffer
//! safe for concurrent use by a writer side and a reader side. Writes fail
//! fast when the buffer is full and reads fail fast when it is empty, so
//! callers poll and retry instead of blocking.
//!
//! The crate also ships sequential containers: a singly-linked
//! [`LinkedList`] and array-backed [`Stack`]/[`Queue`] adapters.
//!
//! # Features
//!
//! - `std` *(default)* - enables [`RingBuffer`], which owns a `Mutex`.
//! - `alloc` - enables the sequential containers on `no_std` targets with
//!   an allocator.
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
mod error;
#[cfg(feature = "alloc")]
pub mod linked_list;
#[cfg(feature = "alloc")]
pub mod queue;
#[cfg(feature = "std")]
pub mod ring_buffer;
#[cfg(feature = "alloc")]
pub mod stack;

#[cfg(feature = "std")]
pub use error::CapacityError;
#[cfg(feature = "alloc")]
pub use linked_list::LinkedList;
#[cfg(feature = "alloc")]
pub use queue::Queue;
#[cfg(feature = "std")]
pub use ring_buffer::{Reader, RingBuffer, Writer, MIN_CAPACITY};
#[cfg(feature = "alloc")]
pub use stack::Stack;

#[cfg(test)]
mod tests;
