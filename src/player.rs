//! Playback core: the transport state machine, the elapsed-time clock and
//! seek reconciliation.
//!
//! [`Controller`] owns the [`PlaybackSession`] and is the single source of
//! truth for what should be happening; everything else observes it, either
//! by polling [`Controller::display_state`] or by subscribing to
//! [`PlayerEvent`]s.

mod clock;
mod controller;
mod display;
mod events;
mod seek;
mod session;

pub use clock::Clock;
pub use controller::{Controller, PlayerError};
pub use display::DisplayState;
pub use events::PlayerEvent;
pub use session::{PlaybackSession, PlaybackState};
