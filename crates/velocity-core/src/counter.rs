//! Process-wide request tally.
//!
//! Every inbound request bumps the counter exactly once; one endpoint reads it.
//! The storage is a single `AtomicU64`, so increments never take a lock and
//! never serialize unrelated requests. Read-modify-write on one atomic location
//! is linearizable under any ordering, hence `Relaxed`.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic request counter. Share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct RequestCounter {
    value: AtomicU64,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self {
            value: AtomicU64::new(0),
        }
    }

    /// Add one and return the post-increment value.
    pub fn increment(&self) -> u64 {
        self.value.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    /// Current value.
    pub fn read(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}
