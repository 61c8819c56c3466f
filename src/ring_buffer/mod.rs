//! Fixed-capacity thread-safe ring buffer.

mod halves;

pub use halves::{Reader, Writer};

use crate::error::CapacityError;
use alloc::{boxed::Box, vec::Vec};
use core::fmt;
use crossbeam_utils::CachePadded;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Smallest capacity a [`RingBuffer`] may be constructed with.
pub const MIN_CAPACITY: usize = 10;

/// Slot array and cursors. Only ever accessed behind the lock.
struct RingState<T> {
    slots: Box<[Option<T>]>,
    write: usize,
    read: usize,
}

impl<T> RingState<T> {
    /// Next cursor position, wrapping at capacity.
    fn advance(&self, index: usize) -> usize {
        if index + 1 == self.slots.len() {
            0
        } else {
            index + 1
        }
    }

    fn write(&mut self, value: T) -> Result<(), T> {
        let slot = &mut self.slots[self.write];
        if slot.is_some() {
            return Err(value);
        }
        *slot = Some(value);
        self.write = self.advance(self.write);
        Ok(())
    }

    fn read(&mut self) -> Option<T> {
        let value = self.slots[self.read].take()?;
        self.read = self.advance(self.read);
        Some(value)
    }

    /// Cursor equality alone cannot distinguish an empty buffer from one
    /// that is exactly one full lap ahead; the slot check disambiguates.
    fn is_empty(&self) -> bool {
        self.read == self.write && self.slots[self.read].is_none()
    }

    fn is_full(&self) -> bool {
        self.slots[self.write].is_some()
    }

    fn occupied_len(&self) -> usize {
        let capacity = self.slots.len();
        let distance = (capacity + self.write - self.read) % capacity;
        if distance == 0 && self.slots[self.read].is_some() {
            capacity
        } else {
            distance
        }
    }
}

/// Bounded FIFO buffer that hands values from a writer side to a reader side.
///
/// Capacity is fixed at construction (at least [`MIN_CAPACITY`]) and never
/// changes. Both operations are fail-fast: [`try_write`](Self::try_write)
/// refuses to overwrite and [`try_read`](Self::try_read) refuses to block,
/// so full and empty are ordinary results rather than errors.
///
/// All operations take `&self`; the slot array and both cursors live behind
/// a single mutex, which gives concurrently submitted operations a
/// well-defined total order.
///
/// ```
/// use std::thread;
/// use holdall::RingBuffer;
///
/// let (writer, reader) = RingBuffer::new(16).unwrap().split();
/// thread::spawn(move || {
///     writer.try_write(123).unwrap();
/// })
/// .join()
/// .unwrap();
/// thread::spawn(move || {
///     assert_eq!(reader.try_read(), Some(123));
/// })
/// .join()
/// .unwrap();
/// ```
pub struct RingBuffer<T> {
    state: CachePadded<Mutex<RingState<T>>>,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    /// Creates a buffer with `capacity` empty slots and both cursors at 0.
    ///
    /// Fails if `capacity` is below [`MIN_CAPACITY`].
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        if capacity < MIN_CAPACITY {
            return Err(CapacityError::new(capacity));
        }
        Self::from_slots((0..capacity).map(|_| None).collect())
    }

    /// Creates a buffer that adopts `slots` as its initial contents.
    /// Capacity is `slots.len()`.
    ///
    /// Every adopted `Some` slot counts as already written: the read cursor
    /// starts at index 0 so adopted values come back in index order, and
    /// the write cursor starts at the first vacant slot (index 0 when the
    /// buffer is adopted full). Occupied slots should form a contiguous run
    /// starting at index 0: each cursor only examines its own slot, so a
    /// gap makes the buffer report full or empty early.
    ///
    /// Fails if `slots.len()` is below [`MIN_CAPACITY`].
    pub fn from_slots(slots: Vec<Option<T>>) -> Result<Self, CapacityError> {
        if slots.len() < MIN_CAPACITY {
            return Err(CapacityError::new(slots.len()));
        }
        let capacity = slots.len();
        let write = slots.iter().position(Option::is_none).unwrap_or(0);
        Ok(Self {
            state: CachePadded::new(Mutex::new(RingState {
                slots: slots.into_boxed_slice(),
                write,
                read: 0,
            })),
            capacity,
        })
    }

    /// Attempts to place `value` into the slot under the write cursor.
    ///
    /// Succeeds and advances the cursor only if that slot is empty. If the
    /// buffer is full at that position the value is handed back unchanged
    /// as `Err` and neither the slot nor the cursor is touched.
    pub fn try_write(&self, value: T) -> Result<(), T> {
        self.lock().write(value)
    }

    /// Attempts to take the value from the slot under the read cursor.
    ///
    /// Succeeds if that slot holds a value: the slot is cleared and the
    /// cursor advances. Returns `None` when the buffer is empty at that
    /// position, leaving the state untouched.
    pub fn try_read(&self) -> Option<T> {
        self.lock().read()
    }

    /// Whether both cursors coincide over an unoccupied slot.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Whether the slot under the write cursor is occupied.
    pub fn is_full(&self) -> bool {
        self.lock().is_full()
    }

    /// Number of slots, constant for the whole buffer lifetime.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of values currently held.
    pub fn occupied_len(&self) -> usize {
        self.lock().occupied_len()
    }

    /// Number of free slots remaining.
    pub fn vacant_len(&self) -> usize {
        self.capacity - self.occupied_len()
    }

    fn lock(&self) -> MutexGuard<'_, RingState<T>> {
        // No user code runs inside the critical section, so a poisoning
        // panic cannot leave the state half-updated.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity)
            .field("occupied", &self.occupied_len())
            .finish_non_exhaustive()
    }
}
