//! tonearm: a headless playback controller for local music folders.
//!
//! The crate scans a directory into a [`library::Playlist`], drives an
//! opaque [`engine::AudioEngine`] through a transport state machine
//! ([`player::Controller`]) and keeps an approximate elapsed-time counter
//! for a periodically-polling display layer. [`runtime::Player`] wraps the
//! controller in a single owning thread fed by an mpsc command channel.

pub mod config;
pub mod engine;
pub mod library;
pub mod player;
pub mod runtime;
