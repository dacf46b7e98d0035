//! Single-threaded fixed-capacity FIFO ring buffer.

use core::marker::PhantomData;
use core::mem::MaybeUninit;

use alloc::boxed::Box;

use crate::error::PushError;
use crate::storage::{RingStorage, boxed_slots};
use crate::traits::{FifoConsumer, FifoProducer};

/// Fixed-capacity circular FIFO buffer.
///
/// Unsynchronized: callers sharing one across threads must provide their own
/// locking (see [`SyncFifo`](crate::SyncFifo)). `head` indexes the oldest
/// occupied slot, `tail` the next slot to fill; exactly `len` slots starting
/// at `head` (modulo capacity) hold live elements, every other slot is
/// uninitialized memory.
///
/// `pop` and `peek` both operate on the `head` end, so what `peek` shows is
/// always what the next `pop` returns.
///
/// Storage may be owned ([`with_capacity`](FifoRing::with_capacity)) or
/// caller-supplied ([`with_storage`](FifoRing::with_storage)):
///
/// ```
/// use core::mem::MaybeUninit;
/// use fifo_ring::FifoRing;
///
/// let mut slots: [MaybeUninit<u8>; 4] = [const { MaybeUninit::uninit() }; 4];
/// let mut fifo = FifoRing::with_storage(&mut slots[..]);
/// fifo.try_push(7).unwrap();
/// assert_eq!(fifo.pop(), Some(7));
/// ```
pub struct FifoRing<T, B: RingStorage<T> = Box<[MaybeUninit<T>]>> {
    slots: B,
    head: usize,
    tail: usize,
    len: usize,
    _owns: PhantomData<T>,
}

impl<T> FifoRing<T> {
    /// Create a ring with owned storage for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_storage(boxed_slots(capacity))
    }
}

impl<T, B: RingStorage<T>> FifoRing<T, B> {
    /// Create a ring over the given storage. The slot count of `storage` is
    /// the capacity. Borrowed storage is left untouched when the ring is
    /// dropped; only the elements themselves are finalized.
    ///
    /// # Panics
    ///
    /// Panics if `storage` has zero slots.
    #[must_use]
    pub fn with_storage(storage: B) -> Self {
        assert!(!storage.slots().is_empty(), "capacity must be > 0");

        Self {
            slots: storage,
            head: 0,
            tail: 0,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Number of elements currently buffered.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Fixed capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.slots().len()
    }

    /// True if empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if full.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Append an item at the tail.
    ///
    /// On a full ring the item comes back in the error and nothing is
    /// mutated.
    #[inline]
    pub fn try_push(&mut self, item: T) -> Result<(), PushError<T>> {
        if self.is_full() {
            return Err(PushError::Full(item));
        }

        let cap = self.capacity();
        self.slots.slots_mut()[self.tail].write(item);
        self.tail = wrap(self.tail, cap);
        self.len += 1;

        Ok(())
    }

    /// Remove and return the oldest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let cap = self.capacity();
        // len > 0, so the slot at head holds a live element.
        let item = unsafe { self.slots.slots()[self.head].assume_init_read() };
        self.head = wrap(self.head, cap);
        self.len -= 1;

        Some(item)
    }

    /// Borrow the oldest element without removing it, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }

        Some(unsafe { self.slots.slots()[self.head].assume_init_ref() })
    }
}

impl<T, B: RingStorage<T>> Drop for FifoRing<T, B> {
    fn drop(&mut self) {
        // Occupied slots hold live elements the storage won't drop.
        while self.pop().is_some() {}
    }
}

/// Advance a ring index by one, wrapping at `capacity`.
#[inline]
fn wrap(index: usize, capacity: usize) -> usize {
    let next = index + 1;
    if next == capacity { 0 } else { next }
}

impl<T, B: RingStorage<T>> FifoProducer<T> for FifoRing<T, B> {
    #[inline]
    fn try_push(&mut self, item: T) -> Result<(), PushError<T>> {
        FifoRing::try_push(self, item)
    }

    #[inline]
    fn is_full(&self) -> bool {
        FifoRing::is_full(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        FifoRing::capacity(self)
    }

    #[inline]
    fn len(&self) -> usize {
        FifoRing::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        FifoRing::is_empty(self)
    }
}

impl<T, B: RingStorage<T>> FifoConsumer<T> for FifoRing<T, B> {
    #[inline]
    fn try_pop(&mut self) -> Option<T> {
        self.pop()
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        FifoRing::peek(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        FifoRing::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        FifoRing::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        FifoRing::capacity(self)
    }
}
