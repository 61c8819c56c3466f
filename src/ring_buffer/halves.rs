use super::RingBuffer;
use alloc::sync::Arc;

impl<T> RingBuffer<T> {
    /// Consumes the buffer and splits it into its write and read halves.
    ///
    /// Each half owns a shared handle to the buffer and exposes only its
    /// own side's operations, so the two logical sides can be moved to
    /// different threads independently.
    pub fn split(self) -> (Writer<T>, Reader<T>) {
        let rb = Arc::new(self);
        (Writer { rb: rb.clone() }, Reader { rb })
    }
}

/// Write half of a [`RingBuffer`].
pub struct Writer<T> {
    rb: Arc<RingBuffer<T>>,
}

impl<T> Writer<T> {
    /// See [`RingBuffer::try_write`].
    pub fn try_write(&self, value: T) -> Result<(), T> {
        self.rb.try_write(value)
    }

    /// See [`RingBuffer::is_full`].
    pub fn is_full(&self) -> bool {
        self.rb.is_full()
    }

    /// See [`RingBuffer::capacity`].
    pub fn capacity(&self) -> usize {
        self.rb.capacity()
    }
}

/// Read half of a [`RingBuffer`].
pub struct Reader<T> {
    rb: Arc<RingBuffer<T>>,
}

impl<T> Reader<T> {
    /// See [`RingBuffer::try_read`].
    pub fn try_read(&self) -> Option<T> {
        self.rb.try_read()
    }

    /// See [`RingBuffer::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.rb.is_empty()
    }

    /// See [`RingBuffer::capacity`].
    pub fn capacity(&self) -> usize {
        self.rb.capacity()
    }
}
