//! Real monotonic clock.

use std::thread;
use std::time::{Duration, Instant};

use crate::core::{Clock, Interrupt, Wake};

/// Longest uninterrupted sleep, bounding how late an interrupt is noticed.
pub const SLICE: Duration = Duration::from_millis(20);

/// Stand-in wait for durations past what [`Instant`] can represent.
const FOREVER: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// [`Clock`] backed by [`Instant`] and [`thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn pause(&self, duration: Duration, interrupt: &Interrupt) -> Wake {
        let start = Instant::now();
        let deadline = start
            .checked_add(duration)
            .or_else(|| start.checked_add(FOREVER))
            .unwrap_or(start);
        loop {
            if interrupt.is_raised() {
                return Wake::Interrupted;
            }
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                return Wake::Elapsed;
            }
            thread::sleep(left.min(SLICE));
        }
    }
}
