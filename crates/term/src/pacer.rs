//! Fixed-rate frame pacing.
//!
//! The pacer keeps an absolute deadline for the next tick so small sleep
//! overshoots do not accumulate. When the loop falls a whole interval behind
//! (terminal stalled, process suspended) it reschedules from now instead of
//! running a burst of catch-up ticks.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next: Instant,
}

impl FramePacer {
    pub fn new(ticks_per_second: u32) -> Self {
        Self::starting_at(ticks_per_second, Instant::now())
    }

    /// Pacer whose first tick is due at `start`.
    pub fn starting_at(ticks_per_second: u32, start: Instant) -> Self {
        let interval = Duration::from_secs(1) / ticks_per_second.max(1);
        Self {
            interval,
            next: start,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next tick is due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Schedule the tick after the one that just ran.
    pub fn advance(&mut self, now: Instant) {
        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
    }

    /// Sleep until the next tick is due, then schedule the one after it.
    pub fn wait_for_next_tick(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.advance(Instant::now());
    }
}
