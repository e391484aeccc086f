use std::fmt;

/// Error returned when building or recoloring a [`Shape`](super::Shape).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// No rows, or a first row with no glyphs.
    Empty,
    /// A row whose glyph count differs from the first row.
    UnequalRows { row: usize, expected: usize, found: usize },
    /// A glyph missing from the color table.
    UnknownGlyph { row: usize, column: usize, glyph: String },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Empty => write!(f, "shape has no pixels"),
            ShapeError::UnequalRows { row, expected, found } => {
                write!(f, "shape row {row} has {found} glyphs, expected {expected}")
            }
            ShapeError::UnknownGlyph { row, column, glyph } => {
                write!(f, "unknown glyph {glyph:?} at row {row}, column {column}")
            }
        }
    }
}

impl std::error::Error for ShapeError {}
