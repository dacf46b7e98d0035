//! Error types for FIFO operations.

use core::fmt;

/// Error returned when [`FifoProducer::try_push`](crate::FifoProducer::try_push)
/// fails because the FIFO is full.
///
/// The item is returned so the caller can retry or handle it. A full FIFO is
/// an expected condition, not a fault: nothing is mutated on failure.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PushError<T> {
    /// The FIFO is at capacity.
    Full(T),
}

impl<T> PushError<T> {
    /// Extract the item that failed to push.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> T {
        match self {
            PushError::Full(item) => item,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushError::Full(item) => f.debug_tuple("Full").field(item).finish(),
        }
    }
}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushError::Full(_) => f.write_str("fifo is full"),
        }
    }
}

impl<T: fmt::Debug> core::error::Error for PushError<T> {}
