extern crate std;

use core::mem::MaybeUninit;
use core::sync::atomic::{AtomicUsize, Ordering};

use alloc::sync::Arc;

use super::Tracked;
use crate::{FifoBuffer, FifoConsumer, FifoRing, PushError};

const CAP: usize = 10;

#[test]
fn push_rejects_when_full() {
    let mut fifo = FifoRing::with_capacity(CAP);

    for i in 0..CAP {
        assert!(fifo.try_push(i).is_ok());
    }
    assert!(fifo.is_full());
    assert_eq!(fifo.len(), CAP);

    match fifo.try_push(13) {
        Err(PushError::Full(item)) => assert_eq!(item, 13),
        Ok(()) => panic!("push succeeded on a full ring"),
    }

    // The failed push left the ring untouched.
    assert_eq!(fifo.len(), CAP);
    assert_eq!(fifo.pop(), Some(0));
}

#[test]
fn pop_in_insertion_order() {
    let mut fifo = FifoRing::with_capacity(CAP);

    assert_eq!(fifo.pop(), None);

    for i in 0..CAP {
        assert!(fifo.try_push(i).is_ok());
    }
    for i in 0..CAP {
        assert_eq!(fifo.pop(), Some(i));
    }

    assert_eq!(fifo.pop(), None);
    assert!(fifo.is_empty());
}

#[test]
fn wraparound_preserves_order() {
    let mut fifo = FifoRing::with_capacity(CAP);

    // Fill [0, CAP), drain the first half, refill with [CAP, CAP + CAP/2).
    for i in 0..CAP {
        assert!(fifo.try_push(i).is_ok());
    }
    for _ in 0..CAP / 2 {
        assert!(fifo.pop().is_some());
    }
    for i in CAP..CAP + CAP / 2 {
        assert!(fifo.try_push(i).is_ok());
    }

    // A full drain yields [CAP/2, CAP + CAP/2) in order.
    for i in CAP / 2..CAP + CAP / 2 {
        assert_eq!(fifo.pop(), Some(i));
    }
    assert_eq!(fifo.pop(), None);
}

#[test]
fn peek_tracks_the_head() {
    let mut fifo = FifoRing::with_capacity(4);

    assert_eq!(fifo.peek(), None);

    assert!(fifo.try_push('a').is_ok());
    assert!(fifo.try_push('b').is_ok());

    // Peek shows exactly what the next pop returns.
    assert_eq!(fifo.peek(), Some(&'a'));
    assert_eq!(fifo.pop(), Some('a'));
    assert_eq!(fifo.peek(), Some(&'b'));
    assert_eq!(fifo.pop(), Some('b'));
    assert_eq!(fifo.peek(), None);
}

#[test]
fn caller_supplied_storage() {
    let mut slots: [MaybeUninit<u32>; CAP] = [const { MaybeUninit::uninit() }; CAP];

    {
        let mut fifo = FifoRing::with_storage(&mut slots[..]);
        assert_eq!(fifo.capacity(), CAP);

        for i in 0..CAP as u32 {
            assert!(fifo.try_push(i).is_ok());
        }
        assert!(fifo.try_push(99).is_err());
        assert_eq!(fifo.pop(), Some(0));
    }

    // The memory is ours again once the ring is gone.
    let mut fresh = FifoRing::with_storage(&mut slots[..]);
    assert_eq!(fresh.pop(), None);
}

#[test]
fn drop_releases_every_buffered_element() {
    let live = Arc::new(AtomicUsize::new(0));
    let mut fifo = FifoRing::with_capacity(CAP);

    for _ in 0..CAP {
        assert!(fifo.try_push(Tracked::new(&live)).is_ok());
    }
    for _ in 0..CAP / 2 {
        drop(fifo.pop());
    }
    assert_eq!(live.load(Ordering::Relaxed), CAP - CAP / 2);

    // Dropping the ring finalizes the remaining elements exactly once.
    drop(fifo);
    assert_eq!(live.load(Ordering::Relaxed), 0);
}

#[test]
fn seam_traits_cover_both_ends() {
    fn exercise<F: FifoBuffer<u32>>(fifo: &mut F) {
        assert!(fifo.try_push(7).is_ok());
        assert_eq!(fifo.peek(), Some(&7));
        assert_eq!(fifo.try_pop(), Some(7));
        assert!(FifoConsumer::is_empty(fifo));
    }

    exercise(&mut FifoRing::with_capacity(2));
}

#[test]
#[should_panic(expected = "capacity must be > 0")]
fn zero_capacity_is_refused() {
    let _ = FifoRing::<u8>::with_capacity(0);
}
