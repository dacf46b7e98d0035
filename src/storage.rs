//! Storage seam for the ring: owned or caller-supplied slot memory.

use core::mem::MaybeUninit;

use alloc::boxed::Box;

/// Backing storage for a [`FifoRing`](crate::FifoRing): a contiguous run of
/// maybe-uninitialized slots. The slot count is the ring's capacity.
///
/// Storage never initializes or drops elements; slot lifecycle belongs to the
/// ring built on top of it. When storage is borrowed, the caller keeps
/// ownership of the memory and may reuse it once the ring is gone.
pub trait RingStorage<T> {
    /// The slots.
    fn slots(&self) -> &[MaybeUninit<T>];

    /// The slots, mutably.
    fn slots_mut(&mut self) -> &mut [MaybeUninit<T>];
}

impl<T> RingStorage<T> for Box<[MaybeUninit<T>]> {
    #[inline]
    fn slots(&self) -> &[MaybeUninit<T>] {
        self
    }

    #[inline]
    fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self
    }
}

impl<T> RingStorage<T> for &mut [MaybeUninit<T>] {
    #[inline]
    fn slots(&self) -> &[MaybeUninit<T>] {
        self
    }

    #[inline]
    fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self
    }
}

/// Allocate owned storage for `capacity` elements.
pub(crate) fn boxed_slots<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    Box::new_uninit_slice(capacity)
}
