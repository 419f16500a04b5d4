//! Nullable clock: deterministic time for testing.

use std::cell::Cell;

use netspawner_utils::Clock;

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to.
pub struct NullClock {
    current: Cell<u64>,
}

impl NullClock {
    pub fn new(initial_millis: u64) -> Self {
        Self {
            current: Cell::new(initial_millis),
        }
    }

    /// Advance time by a number of milliseconds.
    pub fn advance(&self, millis: u64) {
        self.current.set(self.current.get() + millis);
    }
}

impl Clock for NullClock {
    fn now_millis(&self) -> u64 {
        self.current.get()
    }
}
