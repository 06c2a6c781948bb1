use std::path::PathBuf;
use std::time::Duration;

/// One playable audio file plus its display metadata.
#[derive(Debug, Clone)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    pub duration: Option<Duration>,
    pub display: String,
}

impl Track {
    /// Resolve a sibling `<stem>.png` as this track's cover art.
    ///
    /// Path resolution only; decoding and fallback images are the display
    /// layer's concern. Returns `None` when no such file exists.
    pub fn cover_art_path(&self) -> Option<PathBuf> {
        let candidate = self.path.with_extension("png");
        candidate.is_file().then_some(candidate)
    }
}

/// Ordered, cursor-addressable sequence of tracks.
///
/// The cursor stays within `[0, len - 1]`; movement never wraps around. An
/// empty playlist is a valid, inert state: `current` returns `None` and the
/// cursor does not move.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    tracks: Vec<Track>,
    cursor: usize,
}

impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Current cursor position. Meaningless when the playlist is empty.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The track under the cursor, or `None` when the playlist is empty.
    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.cursor)
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Advance the cursor by one and return the new current track.
    ///
    /// Returns `None` when the cursor did not move: already at the last
    /// track, or the playlist is empty.
    pub fn advance(&mut self) -> Option<&Track> {
        if self.cursor + 1 < self.tracks.len() {
            self.cursor += 1;
            self.current()
        } else {
            None
        }
    }

    /// Move the cursor back by one and return the new current track.
    ///
    /// Returns `None` when the cursor did not move (floor at index 0).
    pub fn retreat(&mut self) -> Option<&Track> {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.current()
        } else {
            None
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}
