//! Program lifecycle: layered screens and the stage that steps a program.

mod error;
mod lifecycle;
mod screen;
mod spec;
mod stage;

pub use error::ProgramError;
pub use lifecycle::Program;
pub use screen::Screen;
pub use spec::{LayerSpec, ScreenSpec};
pub use stage::{InputAttachment, Stage};
