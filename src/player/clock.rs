use std::time::{Duration, Instant};

/// Fixed-interval tick source for the elapsed-time counter.
///
/// Elapsed time is an approximation maintained by counting whole ticks, not
/// a readback of the engine's true position. If tick delivery is delayed by
/// system load, `due_ticks` reports the backlog in one burst and the counter
/// catches up; the drift between counted and true position is accepted by
/// design (see `ClockSettings::use_engine_position` for the alternate path).
#[derive(Debug)]
pub struct Clock {
    interval: Duration,
    last: Instant,
}

impl Clock {
    pub fn new(interval: Duration) -> Self {
        Self::with_origin(interval, Instant::now())
    }

    pub fn with_origin(interval: Duration, origin: Instant) -> Self {
        Self {
            interval,
            last: origin,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of whole intervals that elapsed since the last poll.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let mut ticks = 0;
        while now.duration_since(self.last) >= self.interval {
            self.last += self.interval;
            ticks += 1;
        }
        ticks
    }
}
