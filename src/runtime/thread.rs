use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::config::ClockSettings;
use crate::engine::AudioEngine;
use crate::player::{Clock, Controller};

use super::DisplayHandle;

/// Transport operations accepted from the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportCmd {
    /// The single-surface transport button: start, pause or resume
    /// depending on the current state.
    Play,
    Pause,
    Resume,
    Stop,
    Next,
    Previous,
    /// Normalized seek request; clamped to `[0, 1]`.
    Seek(f64),
    /// Stop playback and quit the thread.
    Quit,
}

pub(super) fn spawn_player_thread<E>(
    mut controller: Controller<E>,
    rx: Receiver<TransportCmd>,
    display: DisplayHandle,
    settings: ClockSettings,
) -> JoinHandle<()>
where
    E: AudioEngine + Send + 'static,
{
    thread::spawn(move || {
        let mut clock = Clock::new(Duration::from_millis(settings.tick_ms));
        let refresh = Duration::from_millis(settings.refresh_ms);

        loop {
            // The receive timeout doubles as the refresh timer.
            match rx.recv_timeout(refresh) {
                Ok(cmd) => {
                    let result = match cmd {
                        TransportCmd::Play => controller.play(),
                        TransportCmd::Pause => {
                            controller.pause();
                            Ok(())
                        }
                        TransportCmd::Resume => {
                            controller.resume();
                            Ok(())
                        }
                        TransportCmd::Stop => {
                            controller.stop();
                            Ok(())
                        }
                        TransportCmd::Next => controller.next(),
                        TransportCmd::Previous => controller.previous(),
                        TransportCmd::Seek(fraction) => {
                            controller.seek(fraction);
                            Ok(())
                        }
                        TransportCmd::Quit => {
                            controller.stop();
                            publish(&display, &controller);
                            break;
                        }
                    };
                    if let Err(e) = result {
                        tracing::warn!("transport command failed: {e}");
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            // Timer work runs on every pass so a steady stream of commands
            // cannot starve the clock.
            if settings.use_engine_position {
                controller.sync_position();
            } else {
                for _ in 0..clock.due_ticks(Instant::now()) {
                    controller.tick(clock.interval());
                }
            }

            if let Err(e) = controller.poll_engine() {
                tracing::warn!("auto-advance failed: {e}");
            }

            publish(&display, &controller);
        }
    })
}

fn publish<E: AudioEngine>(display: &DisplayHandle, controller: &Controller<E>) {
    if let Ok(mut d) = display.lock() {
        *d = controller.display_state();
    }
}
