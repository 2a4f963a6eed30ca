//! Wall-clock timing source for real-time runs
//!
//! One `FrameClock` is shared by the whole system; every body in a frame
//! integrates over the same elapsed value.

use std::time::Instant;

#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant, // reading taken at the previous lap
}

impl FrameClock {
    /// Start measuring from now
    pub fn start() -> Self {
        Self { last: Instant::now() }
    }

    /// Seconds since the previous lap (or since `start`), then reset
    pub fn lap(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        elapsed
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::start()
    }
}
