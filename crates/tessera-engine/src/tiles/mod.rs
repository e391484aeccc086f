//! Pixel-art tiles drawn onto a [`Canvas`](crate::canvas::Canvas).
//!
//! - `Shape`: a glyph grid colored through a `ColorTable`
//! - `Sprite`: a shape with a position and an edge policy
//! - `Board`: a grid of optional tile values

mod board;
mod error;
mod shape;
mod sprite;

pub use board::{Board, TileValue};
pub use error::ShapeError;
pub use shape::{Shape, ShapeMode};
pub use sprite::{SimpleSprite, Sprite};
