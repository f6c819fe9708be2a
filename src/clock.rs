use std::{thread::sleep, time::{Duration, Instant}};

pub const DEFAULT_FPS: u32 = 15;

/// Fixed-rate frame throttle.
pub struct Clock {
    period: Duration,
    next_tick: Instant,
}

impl Clock {
    pub fn new(fps: u32) -> Self {
        let period = Duration::from_nanos(1_000_000_000 / u64::from(fps.max(1)));
        Clock { period, next_tick: Instant::now() }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Blocks until the next tick boundary. A late caller gets a fresh schedule
    /// instead of a burst of catch-up ticks.
    pub fn tick(&mut self) {
        let now = Instant::now();

        if now < self.next_tick {
            sleep(self.next_tick - now);
            self.next_tick += self.period;
        } else {
            self.next_tick = now + self.period;
        }
    }
}
