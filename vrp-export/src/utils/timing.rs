#[cfg(test)]
#[path = "../../tests/unit/utils/timing_test.rs"]
mod timing_test;

use std::time::{Duration, Instant};

/// Implements a simple performance timer.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns elapsed time.
    pub fn elapsed(&self) -> Duration {
        Instant::now() - self.start
    }

    /// Runs action and returns its result together with elapsed time.
    pub fn measure_duration<R, F: FnOnce() -> R>(action: F) -> (R, Duration) {
        let timer = Self::start();
        let result = action();

        (result, timer.elapsed())
    }

    /// Runs action and passes elapsed time to the callback.
    pub fn measure_duration_with_callback<R, F, C>(action: F, callback: C) -> R
    where
        F: FnOnce() -> R,
        C: FnOnce(&R, Duration),
    {
        let (result, duration) = Self::measure_duration(action);
        callback(&result, duration);

        result
    }
}
