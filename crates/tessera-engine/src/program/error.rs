use std::fmt;

use crate::canvas::CanvasError;

/// Error returned when building a stage or screen, or attaching input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramError {
    /// `main_layer` does not name one of the layers.
    InvalidMainLayer { main_layer: usize, layer_count: usize },
    /// The stage already has an input attachment.
    InputAlreadyAttached,
    Canvas(CanvasError),
}

impl fmt::Display for ProgramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgramError::InvalidMainLayer { main_layer, layer_count } => {
                write!(f, "main layer {main_layer} out of range for {layer_count} layers")
            }
            ProgramError::InputAlreadyAttached => write!(f, "input is already attached to this stage"),
            ProgramError::Canvas(e) => write!(f, "layer canvas: {e}"),
        }
    }
}

impl std::error::Error for ProgramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProgramError::Canvas(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CanvasError> for ProgramError {
    fn from(e: CanvasError) -> Self {
        ProgramError::Canvas(e)
    }
}
