//! Time subsystem.
//!
//! - one `FrameClock` per stage
//! - call `tick()` once per frame to obtain `FrameTime`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
