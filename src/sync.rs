//! Thread-safe, blocking and non-blocking wrapper over [`FifoRing`].
//!
//! Two counting semaphores partition the capacity between `free` slots and
//! `filled` slots (`free + filled == capacity`, modulo permits in flight),
//! turning "is there room / is there an item" into an OS-scheduled wait
//! instead of a spin. The mutex serializes the ring mutation itself.
//!
//! The ordering is fixed: a permit is acquired *before* the lock is taken,
//! and the complementary permit is released *after* the lock guard is
//! dropped. A thread therefore never holds the lock while waiting on a
//! permit (which would deadlock the opposite operation), and the counts move
//! in lock-step with actual buffer mutations.

use core::mem::MaybeUninit;
use std::sync::{Mutex, MutexGuard, PoisonError};

use alloc::boxed::Box;

use crate::error::PushError;
use crate::ring::FifoRing;
use crate::semaphore::Semaphore;
use crate::storage::RingStorage;

/// Bounded FIFO queue safe for any number of producer and consumer threads.
///
/// Every operation takes `&self`; the type is `Send + Sync` for `T: Send` by
/// composition. Blocking operations have no timeout and cannot be cancelled;
/// the usual way to stop a draining consumer is a sentinel value pushed by a
/// producer.
///
/// There is deliberately no `len` here: under concurrent mutation any
/// occupancy snapshot is stale the instant it is read. [`peek`](SyncFifo::peek)
/// exists but is advisory for the same reason.
pub struct SyncFifo<T, B: RingStorage<T> = Box<[MaybeUninit<T>]>> {
    ring: Mutex<FifoRing<T, B>>,
    capacity: usize,
    /// Slots still available to fill. Starts at `capacity - len`.
    free: Semaphore,
    /// Items available to drain. Starts at `len`.
    filled: Semaphore,
}

impl<T> SyncFifo<T> {
    /// Create a queue with owned storage for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_ring(FifoRing::with_capacity(capacity))
    }
}

impl<T, B: RingStorage<T>> SyncFifo<T, B> {
    /// Wrap an existing ring. Elements already buffered stay in place and
    /// the permit counts reflect them.
    #[must_use]
    pub fn from_ring(ring: FifoRing<T, B>) -> Self {
        let capacity = ring.capacity();
        let filled = ring.len();

        Self {
            ring: Mutex::new(ring),
            capacity,
            free: Semaphore::new(capacity - filled),
            filled: Semaphore::new(filled),
        }
    }

    /// Fixed capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Push without blocking. If the queue is full the item comes back in
    /// the error and nothing is mutated.
    pub fn try_push(&self, item: T) -> Result<(), PushError<T>> {
        if !self.free.try_acquire() {
            return Err(PushError::Full(item));
        }
        self.store(item);
        Ok(())
    }

    /// Push, blocking until a slot is free.
    pub fn push(&self, item: T) {
        self.free.acquire();
        self.store(item);
    }

    /// Pop the oldest element without blocking, or `None` if the queue is
    /// empty.
    #[must_use]
    pub fn try_pop(&self) -> Option<T> {
        if !self.filled.try_acquire() {
            return None;
        }
        Some(self.take())
    }

    /// Pop the oldest element, blocking until one is available.
    #[must_use]
    pub fn pop(&self) -> T {
        self.filled.acquire();
        self.take()
    }

    /// Clone the oldest element without removing it, or `None` if the queue
    /// is empty at the time of the call.
    ///
    /// Advisory only: no permit is claimed, and concurrent pops may have
    /// already removed the element by the time the caller looks at it.
    #[must_use]
    pub fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.lock_ring().peek().cloned()
    }

    /// Success path shared by `push` and `try_push`. Caller holds one `free`
    /// permit.
    fn store(&self, item: T) {
        let mut ring = self.lock_ring();
        let pushed = ring.try_push(item).is_ok();
        drop(ring);
        debug_assert!(pushed, "fill permit held but the ring rejected the item");

        self.filled.release();
    }

    /// Success path shared by `pop` and `try_pop`. Caller holds one `filled`
    /// permit.
    fn take(&self) -> T {
        let mut ring = self.lock_ring();
        let item = ring.pop();
        drop(ring);

        self.free.release();
        item.expect("drain permit held but the ring was empty")
    }

    fn lock_ring(&self) -> MutexGuard<'_, FifoRing<T, B>> {
        // The critical sections are index moves and a single slot
        // move/clone; a panic in T::clone (peek) happens before any index
        // changes, so a poisoned guard still protects a consistent ring.
        self.ring.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
