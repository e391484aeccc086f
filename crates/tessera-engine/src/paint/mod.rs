//! Color model.
//!
//! - `Color`: straight-alpha RGBA with fractional channels
//! - `HsbColor` conversions
//! - color functions (`Frac -> Color`) and gradients
//! - glyph color tables for pixel art
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod color_func;
pub mod color_table;
pub mod gradient;
pub mod hsb;

pub use color::Color;
pub use color_func::{ColorFrac, ColorFracHandle, ColorFunc, ColorFuncOptions};
pub use color_table::ColorTable;
pub use gradient::{ColorStop, Gradient, SpreadMode};
pub use hsb::HsbColor;
