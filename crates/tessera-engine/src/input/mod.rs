//! Input subsystem.
//!
//! Public API is platform-agnostic. Hosts translate platform events into
//! `Event`s and hand them to a `Stage`.

mod types;

pub use types::{Event, Key};
