use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::ItemKey;
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::{Playlist, Track};

/// Failure to list the scanned directory.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read directory {path:?}: {source}")]
    DirUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn make_display(title: &str, artist: Option<&str>) -> String {
    match artist {
        Some(a) if !a.trim().is_empty() => format!("{} - {}", a.trim(), title),
        _ => title.to_string(),
    }
}

pub(super) fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

/// Scan the immediate entries of `dir` into a `Playlist`.
///
/// Only files whose extension matches `settings.extensions` are kept, in
/// directory listing order; the cursor starts at 0. An unreadable directory
/// is a [`ScanError`]; a readable directory with no matching files is an
/// empty (valid, inert) playlist.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Result<Playlist, ScanError> {
    let mut tracks: Vec<Track> = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(settings.follow_links)
    {
        let entry = entry.map_err(|e| ScanError::DirUnreadable {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;

        let path = entry.path();
        if path.is_file() && is_audio_file(path, settings) {
            tracks.push(read_track(path));
        }
    }

    tracing::debug!(dir = %dir.display(), tracks = tracks.len(), "scanned directory");
    Ok(Playlist::new(tracks))
}

fn read_track(path: &Path) -> Track {
    let default_title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();

    let mut title = default_title;
    let mut artist: Option<String> = None;
    let mut duration: Option<Duration> = None;

    if let Ok(tagged) = lofty::read_from_path(path) {
        duration = Some(tagged.properties().duration());

        if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
            if let Some(v) = tag.get_string(&ItemKey::TrackTitle) {
                if !v.trim().is_empty() {
                    title = v.to_string();
                }
            }
            if let Some(v) = tag.get_string(&ItemKey::TrackArtist) {
                let v = v.trim();
                if !v.is_empty() {
                    artist = Some(v.to_string());
                }
            }
        }
    }

    let display = make_display(&title, artist.as_deref());

    Track {
        path: path.to_path_buf(),
        title,
        artist,
        duration,
        display,
    }
}
