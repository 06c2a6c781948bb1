use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use super::session::PlaybackState;

/// Notifications emitted by the controller on observable changes.
///
/// The display layer (and the cover-art collaborator) subscribe instead of
/// being poked directly by the transport logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    /// The transport state changed.
    StateChanged { state: PlaybackState },
    /// A different track became current.
    TrackChanged { index: usize, title: String },
    /// Playback jumped to an absolute position within the current track.
    Seeked { position: Duration },
}

/// Fan-out of [`PlayerEvent`]s over plain mpsc channels.
///
/// Receivers whose other end was dropped are pruned on the next emit.
#[derive(Default)]
pub(super) struct EventBus {
    subscribers: Vec<Sender<PlayerEvent>>,
}

impl EventBus {
    pub(super) fn subscribe(&mut self) -> Receiver<PlayerEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub(super) fn emit(&mut self, event: PlayerEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
