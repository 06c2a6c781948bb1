//! The audio engine capability.
//!
//! The controller drives playback exclusively through the [`AudioEngine`]
//! trait: a non-blocking capability whose mixing runs on its own thread.
//! Every call is fire-and-forget; only [`AudioEngine::load`] can fail.
//! [`RodioEngine`] is the `rodio`-backed implementation.

mod backend;

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

pub use backend::RodioEngine;

/// Errors surfaced by an engine backend at load time.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path:?}")]
    Decode { path: PathBuf },

    #[error("no audio output device")]
    NoOutputDevice,
}

/// Opaque playback capability.
///
/// Implementations are assumed internally asynchronous: `play` returns
/// immediately and audio continues on the backend's own mixing thread. The
/// controller never blocks on any of these calls.
pub trait AudioEngine {
    /// Prepare `path` for playback. The previous track, if any, is dropped.
    fn load(&mut self, path: &Path) -> Result<(), EngineError>;

    /// Start (or restart) the loaded track at `start_at` from its beginning.
    fn play(&mut self, start_at: Duration);

    fn pause(&mut self);

    fn resume(&mut self);

    fn stop(&mut self);

    /// Whether the backend still has audio queued for the loaded track.
    fn is_busy(&self) -> bool;

    /// Total duration of the file at `path`, when it can be determined.
    fn duration(&self, path: &Path) -> Option<Duration>;

    /// True playback position readback, for backends that support it.
    ///
    /// The default capability does not expose one; elapsed time is then
    /// approximated by the tick clock instead.
    fn position(&self) -> Option<Duration> {
        None
    }
}
