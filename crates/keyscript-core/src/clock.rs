//! Blocking sleeps behind a trait, so tests never wait on the wall clock.

use std::sync::Mutex;
use std::time::Duration;

/// Source of every delay the engine performs: key holds, inter-key gaps,
/// `DELAY` lines and the post-command default delay.
///
/// Implementations block the calling thread for the requested duration.
pub trait Clock: Send + Sync {
    fn sleep(&self, duration: Duration);
}

/// Real-time clock backed by [`std::thread::sleep`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Test clock that returns immediately and remembers every requested sleep.
#[derive(Debug, Default)]
pub struct ManualClock {
    sleeps: Mutex<Vec<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every sleep requested so far, in order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Sum of all requested sleeps.
    pub fn total(&self) -> Duration {
        self.sleeps().iter().sum()
    }
}

impl Clock for ManualClock {
    fn sleep(&self, duration: Duration) {
        self.sleeps
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(duration);
    }
}
