use std::time::{Duration, Instant};

/// Paces auto-play without blocking the UI thread.
pub struct Ticker {
    last_tick: Instant,
}

impl Default for Ticker {
    fn default() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }
}

impl Ticker {
    const MIN_RATE: f64 = 0.1;
    const MAX_RATE: f64 = 1000.;

    fn period(per_second: f64) -> Duration {
        Duration::from_secs_f64(1. / per_second.clamp(Self::MIN_RATE, Self::MAX_RATE))
    }

    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }

    /// Time left until the next tick.
    pub fn remaining(&self, per_second: f64) -> Duration {
        Self::period(per_second).saturating_sub(self.last_tick.elapsed())
    }

    /// Returns `true` at most `per_second` times a second.
    pub fn ready(&mut self, per_second: f64) -> bool {
        if self.remaining(per_second).is_zero() {
            self.reset();
            true
        } else {
            false
        }
    }
}
