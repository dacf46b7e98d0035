//! Seam traits for the two ends of a bounded FIFO.

use crate::error::PushError;

/// Producing side of a bounded FIFO.
pub trait FifoProducer<T> {
    /// Try to push. Returns the item inside [`PushError::Full`] if full.
    fn try_push(&mut self, item: T) -> Result<(), PushError<T>>;

    /// True if full.
    fn is_full(&self) -> bool;

    /// Capacity.
    fn capacity(&self) -> usize;

    /// Current length.
    fn len(&self) -> usize;

    /// True if empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Consuming side of a bounded FIFO.
pub trait FifoConsumer<T> {
    /// Try to pop the oldest element. Returns `None` if empty.
    #[must_use]
    fn try_pop(&mut self) -> Option<T>;

    /// Peek at the oldest element.
    #[must_use]
    fn peek(&self) -> Option<&T>;

    /// True if empty.
    fn is_empty(&self) -> bool;

    /// Current length.
    fn len(&self) -> usize;

    /// Capacity.
    fn capacity(&self) -> usize;
}

/// Combined producer and consumer.
pub trait FifoBuffer<T>: FifoProducer<T> + FifoConsumer<T> {}

impl<T, F: FifoProducer<T> + FifoConsumer<T>> FifoBuffer<T> for F {}
