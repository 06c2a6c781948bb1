//! Threaded front end for the controller.
//!
//! One owning thread receives transport commands and timer ticks over a
//! single mpsc channel, so no session state is ever touched from more than
//! one logical thread of control. The display layer polls the shared
//! [`DisplayHandle`] that the thread republishes on every pass.

mod thread;

use std::sync::mpsc::{self, SendError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use crate::config::ClockSettings;
use crate::engine::AudioEngine;
use crate::player::{Controller, DisplayState};

pub use thread::TransportCmd;


/// Shared, periodically republished snapshot of the display projection.
pub type DisplayHandle = Arc<Mutex<DisplayState>>;

/// Handle to the player thread.
pub struct Player {
    tx: Sender<TransportCmd>,
    display: DisplayHandle,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl Player {
    /// Move `controller` onto its own thread.
    ///
    /// Subscribe to the controller's events before calling this; the
    /// controller is owned by the thread afterwards.
    pub fn new<E>(controller: Controller<E>, clock: ClockSettings) -> Self
    where
        E: AudioEngine + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<TransportCmd>();
        let display: DisplayHandle = Arc::new(Mutex::new(DisplayState::default()));

        let join = thread::spawn_player_thread(controller, rx, display.clone(), clock);

        Self {
            tx,
            display,
            join: Mutex::new(Some(join)),
        }
    }

    /// Handle the display layer polls on its refresh interval.
    pub fn display_handle(&self) -> DisplayHandle {
        self.display.clone()
    }

    /// Queue a transport command; never blocks on the engine.
    pub fn send(&self, cmd: TransportCmd) -> Result<(), SendError<TransportCmd>> {
        self.tx.send(cmd)
    }

    /// Stop playback, quit the thread and wait for it to finish.
    pub fn shutdown(&self) {
        let _ = self.send(TransportCmd::Quit);

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}
