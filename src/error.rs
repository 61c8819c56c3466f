use core::fmt;

/// Construction rejected because the requested capacity is below
/// [`MIN_CAPACITY`](crate::ring_buffer::MIN_CAPACITY).
///
/// This is the only error in the crate. Full, empty and not-found are
/// expected steady-state conditions and are reported through `Result<(), T>`,
/// `Option<T>` and `bool` return values instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    requested: usize,
}

impl CapacityError {
    pub(crate) fn new(requested: usize) -> Self {
        Self { requested }
    }

    /// Capacity that was requested.
    pub fn requested(&self) -> usize {
        self.requested
    }
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ring buffer capacity {} is below the minimum of {}",
            self.requested,
            crate::ring_buffer::MIN_CAPACITY
        )
    }
}

impl std::error::Error for CapacityError {}
