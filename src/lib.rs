//! Fixed-capacity FIFO buffering in two forms.
//!
//! [`FifoRing`] is the single-threaded core: a bounded circular buffer with
//! head/tail indices, explicit slot lifecycle, and non-blocking push/pop.
//! [`SyncFifo`] wraps a ring with a mutex and two counting [`Semaphore`]s
//! (free slots and filled slots) for any number of concurrent producers and
//! consumers, with blocking and non-blocking operation pairs.
//!
//! The ring layer is `no_std` (`core` + `alloc`); the synchronized layer
//! requires the `std` feature (enabled by default).
//!
//! # Single-threaded
//!
//! ```
//! use fifo_ring::FifoRing;
//!
//! let mut fifo = FifoRing::with_capacity(3);
//! fifo.try_push(1).unwrap();
//! fifo.try_push(2).unwrap();
//! assert_eq!(fifo.peek(), Some(&1));
//! assert_eq!(fifo.pop(), Some(1));
//! assert_eq!(fifo.pop(), Some(2));
//! assert_eq!(fifo.pop(), None);
//! ```
//!
//! # Producers and consumers
//!
//! ```
//! use fifo_ring::SyncFifo;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let queue = Arc::new(SyncFifo::with_capacity(4));
//!
//! let producer = {
//!     let queue = Arc::clone(&queue);
//!     thread::spawn(move || {
//!         for i in 0..32 {
//!             queue.push(i); // blocks while the queue is full
//!         }
//!     })
//! };
//!
//! let mut total = 0;
//! for _ in 0..32 {
//!     total += queue.pop(); // blocks while the queue is empty
//! }
//! producer.join().unwrap();
//! assert_eq!(total, (0..32).sum::<i32>());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod error;
mod ring;
mod storage;
mod traits;

#[cfg(feature = "std")]
mod semaphore;
#[cfg(feature = "std")]
mod sync;

#[cfg(test)]
mod tests;

pub use error::PushError;
pub use ring::FifoRing;
pub use storage::RingStorage;
pub use traits::{FifoBuffer, FifoConsumer, FifoProducer};

#[cfg(feature = "std")]
pub use semaphore::Semaphore;
#[cfg(feature = "std")]
pub use sync::SyncFifo;
