use std::fmt;

/// Error returned by [`Canvas::new`](super::Canvas::new).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    /// Width or height below 1.
    InvalidSize { width: i64, height: i64 },
    /// The pixel store could not be allocated.
    Allocation { bytes: usize },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasError::InvalidSize { width, height } => {
                write!(f, "invalid canvas size {width}x{height}: both sides must be at least 1")
            }
            CanvasError::Allocation { bytes } => write!(f, "failed to allocate {bytes} bytes of pixel memory"),
        }
    }
}

impl std::error::Error for CanvasError {}
