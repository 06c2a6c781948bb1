use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tonearm/config.toml` or `~/.config/tonearm/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TONEARM__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub clock: ClockSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library: LibrarySettings::default(),
            clock: ClockSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks when listing the directory.
    pub follow_links: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClockSettings {
    /// Interval of the elapsed-time tick (milliseconds).
    pub tick_ms: u64,
    /// Interval at which the shared display state is republished (milliseconds).
    pub refresh_ms: u64,
    /// Reconcile elapsed time from the engine's position readback instead of
    /// counting ticks. Only effective when the backend exposes a position.
    pub use_engine_position: bool,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            refresh_ms: 200,
            use_engine_position: false,
        }
    }
}
