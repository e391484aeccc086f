//! Geometry types shared across the canvas, tiles, and program layers.
//!
//! Canonical canvas space:
//! - one unit per pixel
//! - origin top-left
//! - +X right, +Y down
//!
//! Floating types (`Point`, `Vector`, `Size`, `Rect`) use `f64`. Integer
//! counterparts (`IntPoint`, `IntVector`, `IntSize`, `IntRect`) use `i64` and
//! truncate toward zero when converted from floating values.

mod angle;
mod direction;
mod int_point;
mod int_rect;
mod int_size;
mod int_vector;
mod path;
mod point;
mod polar;
mod rect;
mod size;
mod transform;
mod vector;

pub use angle::{Angle, degrees_to_radians, radians_to_degrees};
pub use direction::Direction;
pub use int_point::IntPoint;
pub use int_rect::IntRect;
pub use int_size::IntSize;
pub use int_vector::IntVector;
pub use path::{Path, PathElement, Polyline};
pub use point::Point;
pub use polar::Polar;
pub use rect::{Rect, RectEdge};
pub use size::Size;
pub use transform::Transform;
pub use vector::{Vector, cross, dot};
