// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable retention cutoffs

use std::time::{Duration, SystemTime};

/// A clock that provides the current wall-clock time
pub trait Clock: Clone + Send + Sync {
    fn now(&self) -> SystemTime;

    /// Wall-clock instant `age` before now, saturating at the Unix epoch.
    fn cutoff(&self, age: Duration) -> SystemTime {
        // SystemTime may sit before the epoch on some platforms
        self.now().checked_sub(age).map_or(SystemTime::UNIX_EPOCH, |t| t.max(SystemTime::UNIX_EPOCH))
    }
}

/// Real system clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::Clock;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::{Duration, SystemTime};

    /// Fake clock for testing with controllable time
    #[derive(Clone, Debug)]
    pub struct FakeClock {
        current: Arc<Mutex<SystemTime>>,
    }

    impl FakeClock {
        pub fn new() -> Self {
            Self::at(SystemTime::now())
        }

        /// Clock frozen at the given instant
        pub fn at(time: SystemTime) -> Self {
            Self { current: Arc::new(Mutex::new(time)) }
        }

        /// Advance the clock by the given duration
        pub fn advance(&self, duration: Duration) {
            *self.current.lock() += duration;
        }

        /// Set the clock to a specific instant
        pub fn set(&self, time: SystemTime) {
            *self.current.lock() = time;
        }
    }

    impl Default for FakeClock {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> SystemTime {
            *self.current.lock()
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeClock;

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
