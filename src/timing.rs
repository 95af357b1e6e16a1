//! Fixed-rate frame pacing
//!
//! Blocks at the end of each tick until the tick's time budget is used up, so
//! the loop runs at (at most) the target rate. An overrunning tick is not
//! made up for later.

use std::thread;
use std::time::{Duration, Instant};

pub const TICKS_PER_SECOND: u32 = 60;

pub struct FrameClock {
    frame_duration: Duration,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(ticks_per_second: u32) -> Self {
        FrameClock {
            frame_duration: Duration::from_secs(1) / ticks_per_second.max(1),
            last_tick: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Time left in the budget after `elapsed` has already been spent
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.frame_duration.saturating_sub(elapsed)
    }

    /// Sleep out the rest of this tick and start timing the next one
    pub fn tick(&mut self) {
        let remaining = self.remaining(self.last_tick.elapsed());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.last_tick = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TICKS_PER_SECOND)
    }
}
