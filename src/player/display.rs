use std::time::Duration;

use super::session::PlaybackSession;

/// What the polling display layer renders on each refresh tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Display name of the current track, empty when nothing is loaded.
    pub title: String,
    /// Elapsed time as `MM:SS`.
    pub elapsed: String,
    /// Remaining time as `MM:SS`.
    pub remaining: String,
    /// Progress through the track, `0..=100`.
    pub progress_percent: u8,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            title: String::new(),
            elapsed: "00:00".to_string(),
            remaining: "00:00".to_string(),
            progress_percent: 0,
        }
    }
}

/// Format a `Duration` as `MM:SS`.
pub(super) fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

pub(super) fn render(title: Option<&str>, session: &PlaybackSession) -> DisplayState {
    DisplayState {
        title: title.unwrap_or_default().to_string(),
        elapsed: format_mmss(session.elapsed_clamped()),
        remaining: format_mmss(session.remaining()),
        progress_percent: session.progress_percent(),
    }
}
