use std::time::Duration;

/// The transport state of the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped
    }
}

/// Transport state plus elapsed/duration bookkeeping for the live track.
///
/// Exactly one session exists per controller; it is created at startup and
/// mutated only by transport operations and clock ticks. `elapsed` is
/// clamped to `duration` on seek and at every observation point
/// (`remaining`, `progress_percent`).
#[derive(Debug, Clone, Default)]
pub struct PlaybackSession {
    pub state: PlaybackState,
    /// Playlist index of the track this session describes, if any.
    pub track_index: Option<usize>,
    pub elapsed: Duration,
    pub duration: Option<Duration>,
}

impl PlaybackSession {
    /// Rebind the session to a new track: elapsed resets to zero, duration
    /// is the freshly queried one. The state is set by the caller.
    pub fn begin(&mut self, track_index: usize, duration: Option<Duration>) {
        self.track_index = Some(track_index);
        self.elapsed = Duration::ZERO;
        self.duration = duration;
    }

    /// Elapsed time clamped to the track duration.
    pub fn elapsed_clamped(&self) -> Duration {
        match self.duration {
            Some(total) => self.elapsed.min(total),
            None => self.elapsed,
        }
    }

    /// Time left in the track, floored at zero.
    pub fn remaining(&self) -> Duration {
        self.duration
            .map(|total| total.saturating_sub(self.elapsed))
            .unwrap_or(Duration::ZERO)
    }

    /// Progress through the track as a whole percentage in `0..=100`.
    pub fn progress_percent(&self) -> u8 {
        match self.duration {
            Some(total) if total > Duration::ZERO => {
                let ratio = self.elapsed_clamped().as_secs_f64() / total.as_secs_f64();
                (ratio * 100.0).round() as u8
            }
            _ => 0,
        }
    }
}
