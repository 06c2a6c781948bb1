//! Track library: the `Track` model, the cursor-addressable `Playlist`
//! and the directory scanner that builds one.

mod model;
mod scan;

pub use model::{Playlist, Track};
pub use scan::{ScanError, scan};
