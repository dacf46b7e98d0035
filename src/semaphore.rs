//! In-process counting permits backed by a mutex and condvar.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// Counting permits: a non-negative count supporting blocking and
/// non-blocking acquire. Release increments the count and wakes one waiter.
///
/// Queue-scoped replacement for an OS semaphore: nothing here is named or
/// visible outside the process. Fairness among multiple blocked acquirers is
/// whatever [`Condvar::notify_one`] provides.
pub struct Semaphore {
    count: Mutex<usize>,
    available: Condvar,
}

impl Semaphore {
    /// Create a semaphore with `permits` initially available.
    #[must_use]
    pub fn new(permits: usize) -> Self {
        Self {
            count: Mutex::new(permits),
            available: Condvar::new(),
        }
    }

    /// Take one permit without blocking. Returns `false` if none is
    /// available.
    pub fn try_acquire(&self) -> bool {
        let mut count = self.lock_count();
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    /// Take one permit, blocking the calling thread until one is available.
    pub fn acquire(&self) {
        let mut count = self.lock_count();
        while *count == 0 {
            count = self
                .available
                .wait(count)
                .unwrap_or_else(PoisonError::into_inner);
        }
        *count -= 1;
    }

    /// Return one permit and wake a single waiter, if any.
    pub fn release(&self) {
        let mut count = self.lock_count();
        *count += 1;
        drop(count);
        self.available.notify_one();
    }

    fn lock_count(&self) -> MutexGuard<'_, usize> {
        // Only counter arithmetic runs under this lock, so a poisoned guard
        // still protects a consistent count.
        self.count.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn try_acquire_exhausts_permits() {
        let sem = Semaphore::new(2);
        assert!(sem.try_acquire());
        assert!(sem.try_acquire());
        assert!(!sem.try_acquire());

        sem.release();
        assert!(sem.try_acquire());
        assert!(!sem.try_acquire());
    }

    #[test]
    fn acquire_blocks_until_release() {
        let sem = Arc::new(Semaphore::new(0));

        let waiter = {
            let sem = Arc::clone(&sem);
            thread::spawn(move || sem.acquire())
        };

        // Give the waiter a chance to park before releasing.
        thread::sleep(Duration::from_millis(50));
        sem.release();

        waiter.join().expect("waiter panicked");
        assert!(!sem.try_acquire());
    }
}
