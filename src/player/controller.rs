use std::sync::mpsc::Receiver;
use std::time::Duration;

use thiserror::Error;

use crate::engine::{AudioEngine, EngineError};
use crate::library::Playlist;

use super::display::{self, DisplayState};
use super::events::{EventBus, PlayerEvent};
use super::seek;
use super::session::{PlaybackSession, PlaybackState};

/// Errors surfaced to transport callers.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// The track could not be loaded; the controller returned to `Stopped`
    /// and the playlist cursor was left where it was, so `next` can retry.
    #[error("failed to load {title}: {source}")]
    LoadFailed {
        title: String,
        #[source]
        source: EngineError,
    },
}

/// The transport state machine.
///
/// Owns the engine handle, the playlist and the playback session as one
/// explicit context, passed into every transport and timer callback. All
/// mutation happens through `&mut self`, so a single owning thread (see
/// `runtime`) serializes transport commands and clock ticks.
pub struct Controller<E: AudioEngine> {
    engine: E,
    playlist: Playlist,
    session: PlaybackSession,
    events: EventBus,
}

impl<E: AudioEngine> Controller<E> {
    pub fn new(engine: E, playlist: Playlist) -> Self {
        Self {
            engine,
            playlist,
            session: PlaybackSession::default(),
            events: EventBus::default(),
        }
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Subscribe to state-change notifications.
    pub fn subscribe(&mut self) -> Receiver<PlayerEvent> {
        self.events.subscribe()
    }

    /// Single-button transport surface.
    ///
    /// Starts the current track when stopped, pauses when playing, resumes
    /// when paused. The transport has one control surface, so intent is
    /// inferred from the current state; `pause`/`resume` exist as explicit
    /// secondary operations for programmatic callers.
    pub fn play(&mut self) -> Result<(), PlayerError> {
        match self.session.state {
            PlaybackState::Stopped => self.start_current(),
            PlaybackState::Playing => {
                self.pause();
                Ok(())
            }
            PlaybackState::Paused => {
                self.resume();
                Ok(())
            }
        }
    }

    pub fn pause(&mut self) {
        if self.session.state == PlaybackState::Playing {
            self.engine.pause();
            self.set_state(PlaybackState::Paused);
        }
    }

    pub fn resume(&mut self) {
        if self.session.state == PlaybackState::Paused {
            self.engine.resume();
            self.set_state(PlaybackState::Playing);
        }
    }

    pub fn stop(&mut self) {
        if self.session.state != PlaybackState::Stopped {
            self.engine.stop();
            self.set_state(PlaybackState::Stopped);
        }
    }

    /// Stop the current track and start the next one.
    ///
    /// No-op at the end of the playlist: cursor and state stay unchanged.
    pub fn next(&mut self) -> Result<(), PlayerError> {
        if self.playlist.advance().is_none() {
            return Ok(());
        }
        self.engine.stop();
        self.start_current()
    }

    /// Stop the current track and start the previous one.
    ///
    /// No-op at index 0: cursor and state stay unchanged.
    pub fn previous(&mut self) -> Result<(), PlayerError> {
        if self.playlist.retreat().is_none() {
            return Ok(());
        }
        self.engine.stop();
        self.start_current()
    }

    /// Jump to a normalized position in the current track.
    ///
    /// The fraction is clamped to `[0, 1]`; the engine rewinds and restarts
    /// at the target offset, which resumes audible playback even from
    /// `Paused`. The elapsed counter is set to the target so the tick clock
    /// stays consistent with the jump. No-op when nothing is loaded.
    pub fn seek(&mut self, fraction: f64) {
        if self.session.state == PlaybackState::Stopped || self.session.track_index.is_none() {
            return;
        }
        let Some(duration) = self.session.duration else {
            return;
        };

        let target = seek::resolve_target(fraction, duration);
        self.engine.play(target);
        self.session.elapsed = target;
        self.set_state(PlaybackState::Playing);
        self.events.emit(PlayerEvent::Seeked { position: target });
    }

    /// One clock tick: advance the elapsed counter by `step` while playing.
    ///
    /// A tick that fires after a stop or pause observes the current state
    /// and does nothing.
    pub fn tick(&mut self, step: Duration) {
        if self.session.state == PlaybackState::Playing {
            self.session.elapsed += step;
        }
    }

    /// Adopt the engine's true position as the elapsed time.
    ///
    /// Alternate path to the tick approximation, for backends that expose
    /// position readback.
    pub fn sync_position(&mut self) {
        if self.session.state != PlaybackState::Playing {
            return;
        }
        if let Some(position) = self.engine.position() {
            self.session.elapsed = position;
        }
    }

    /// End-of-track reconciliation.
    ///
    /// While playing, a drained engine means the track finished on the
    /// mixing thread: advance to the next track, or stop at the end of the
    /// playlist.
    pub fn poll_engine(&mut self) -> Result<(), PlayerError> {
        if self.session.state != PlaybackState::Playing || self.engine.is_busy() {
            return Ok(());
        }

        if self.playlist.advance().is_some() {
            self.engine.stop();
            self.start_current()
        } else {
            self.stop();
            Ok(())
        }
    }

    /// Replace the playlist, e.g. after rescanning a directory.
    ///
    /// Playback stops and the session resets; the new cursor starts at 0.
    pub fn set_playlist(&mut self, playlist: Playlist) {
        self.stop();
        self.playlist = playlist;
        self.session = PlaybackSession::default();
    }

    /// Project the session into what the display layer renders.
    pub fn display_state(&self) -> DisplayState {
        let title = self
            .session
            .track_index
            .and_then(|i| self.playlist.get(i))
            .map(|t| t.display.as_str());
        display::render(title, &self.session)
    }

    /// Load the track under the cursor and enter `Playing` from the start.
    fn start_current(&mut self) -> Result<(), PlayerError> {
        let Some(track) = self.playlist.current() else {
            // Empty playlist: transport operations are inert, never errors.
            return Ok(());
        };
        let index = self.playlist.cursor();
        let path = track.path.clone();
        let title = track.display.clone();
        let tagged_duration = track.duration;

        if let Err(source) = self.engine.load(&path) {
            // Abort the transition; prior elapsed/duration stay as they were.
            self.set_state(PlaybackState::Stopped);
            return Err(PlayerError::LoadFailed { title, source });
        }

        let duration = self.engine.duration(&path).or(tagged_duration);
        self.session.begin(index, duration);
        self.engine.play(Duration::ZERO);
        self.events.emit(PlayerEvent::TrackChanged { index, title });
        self.set_state(PlaybackState::Playing);
        Ok(())
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.session.state != state {
            tracing::debug!(?state, "transport state changed");
            self.session.state = state;
            self.events.emit(PlayerEvent::StateChanged { state });
        }
    }
}
