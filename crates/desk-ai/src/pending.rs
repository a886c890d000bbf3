//! Single in-flight request guard.

use std::sync::atomic::{AtomicBool, Ordering};

/// Holds a pending flag high for as long as it lives.
///
/// Dropping the guard (including when the owning future is dropped mid-await)
/// lowers the flag again.
pub struct PendingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> PendingGuard<'a> {
    /// Raise `flag`, or return `None` if it is already raised.
    pub fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
