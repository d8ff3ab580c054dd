//! Time sources for model notifications.
//!
//! The core has no ambient wall clock, so every model that stamps its
//! events is handed a [`Clock`] by the host.

use core::cell::Cell;

/// Millisecond time source used to stamp notifications.
pub trait Clock {
    /// Current time in milliseconds since the host's epoch.
    fn now_ms(&self) -> u64;
}

impl<F: Fn() -> u64> Clock for F {
    fn now_ms(&self) -> u64 {
        self()
    }
}

/// A clock that only moves when told to.
///
/// Useful for deterministic hosts and for tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }

    /// Move the clock forward by `delta_ms`.
    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get().saturating_add(delta_ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}
