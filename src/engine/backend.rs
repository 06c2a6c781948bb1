//! `rodio`-backed [`AudioEngine`] implementation.
//!
//! A loaded track is materialized as a `Sink` on the default output stream.
//! Seeking rebuilds the sink with `Source::skip_duration`, which works for
//! the common formats and keeps the backend free of format-specific code.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::file::AudioFile;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use super::{AudioEngine, EngineError};

pub struct RodioEngine {
    stream: OutputStream,
    sink: Option<Sink>,
    loaded: Option<PathBuf>,
    /// Sink untouched since `load`: still positioned at the track start.
    fresh: bool,
}

impl RodioEngine {
    /// Open the default output device.
    pub fn new() -> Result<Self, EngineError> {
        let stream =
            OutputStreamBuilder::open_default_stream().map_err(|_| EngineError::NoOutputDevice)?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a library embedded in an interactive app.
        let mut stream = stream;
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            loaded: None,
            fresh: false,
        })
    }
}

/// Create a paused `Sink` for `path` that starts playback at `start_at`.
fn create_sink_at(
    handle: &OutputStream,
    path: &Path,
    start_at: Duration,
) -> Result<Sink, EngineError> {
    let file = File::open(path).map_err(|source| EngineError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let source = Decoder::new(BufReader::new(file))
        .map_err(|_| EngineError::Decode {
            path: path.to_path_buf(),
        })?
        // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
        .skip_duration(start_at);

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}

/// Whether the prepared sink may be reused for this `play` request.
///
/// Only a sink untouched since `load` is guaranteed to sit at the track
/// start; once playback has begun, any restart needs a fresh decoder so
/// the rewind actually happens, offset zero included.
fn sink_is_reusable(fresh: bool, start_at: Duration) -> bool {
    fresh && start_at == Duration::ZERO
}

impl AudioEngine for RodioEngine {
    fn load(&mut self, path: &Path) -> Result<(), EngineError> {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        let sink = create_sink_at(&self.stream, path, Duration::ZERO)?;
        self.sink = Some(sink);
        self.loaded = Some(path.to_path_buf());
        self.fresh = true;
        Ok(())
    }

    fn play(&mut self, start_at: Duration) {
        if self.sink.is_none() || !sink_is_reusable(self.fresh, start_at) {
            let Some(path) = self.loaded.clone() else {
                return;
            };
            if let Some(s) = self.sink.take() {
                s.stop();
            }
            match create_sink_at(&self.stream, &path, start_at) {
                Ok(sink) => self.sink = Some(sink),
                Err(e) => {
                    // Only `load` fails by contract; a vanished file at seek
                    // time leaves the engine silent.
                    tracing::warn!("failed to rebuild sink: {e}");
                    return;
                }
            }
        }

        self.fresh = false;
        if let Some(s) = self.sink.as_ref() {
            s.play();
        }
    }

    fn pause(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.pause();
        }
    }

    fn resume(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.play();
        }
    }

    fn stop(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }

    fn is_busy(&self) -> bool {
        self.sink.as_ref().map(|s| !s.empty()).unwrap_or(false)
    }

    fn duration(&self, path: &Path) -> Option<Duration> {
        lofty::read_from_path(path)
            .ok()
            .map(|tagged| tagged.properties().duration())
    }

    fn position(&self) -> Option<Duration> {
        self.sink.as_ref().map(|s| s.get_pos())
    }
}
