//! Time sources and frame delta bookkeeping.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic elapsed time in seconds from an arbitrary epoch
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall clock measured from construction
#[derive(Debug, Clone, Copy)]
pub struct InstantClock {
    start: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Manually driven clock for tests and headless rendering
#[derive(Debug, Default)]
pub struct ManualClock {
    time: Cell<f64>,
}

impl ManualClock {
    pub fn new(time: f64) -> Self {
        Self {
            time: Cell::new(time),
        }
    }

    pub fn set(&self, time: f64) {
        debug_assert!(time >= self.time.get(), "clock must not run backwards");
        self.time.set(time);
    }

    pub fn advance(&self, dt: f64) {
        self.set(self.time.get() + dt);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.time.get()
    }
}

/// Tracks the time elapsed between consecutive frames
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTimer {
    last: f64,
    delta: f64,
    frames: u64,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `now` and return the seconds since the previous one
    pub fn tick(&mut self, now: f64) -> f64 {
        self.delta = (now - self.last).max(0.0);
        self.last = now;
        self.frames += 1;
        self.delta
    }

    /// Seconds between the two most recent frames
    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn delta_millis(&self) -> f64 {
        self.delta * 1000.0
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Instantaneous frame rate, if a nonzero delta has been observed
    pub fn fps(&self) -> Option<f64> {
        (self.delta > 0.0).then(|| 1.0 / self.delta)
    }
}
