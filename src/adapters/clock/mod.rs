//! Clock adapters.

use std::sync::RwLock;

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Production clock backed by the system time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Fixed clock for tests and deterministic replays.
///
/// Returns a pinned instant until `advance` or `set` moves it.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned. This is acceptable for
/// test code; production wiring uses [`SystemClock`].
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<Timestamp>,
}

impl FixedClock {
    /// Creates a clock pinned at the given instant.
    pub fn at(now: Timestamp) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Moves the clock forward by whole seconds.
    pub fn advance_secs(&self, secs: u64) {
        let mut now = self.now.write().expect("FixedClock: lock poisoned");
        *now = now.plus_secs(secs);
    }

    /// Repins the clock at a new instant.
    pub fn set(&self, instant: Timestamp) {
        *self.now.write().expect("FixedClock: lock poisoned") = instant;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.now.read().expect("FixedClock: lock poisoned")
    }
}
