//! Tessera engine crate.
//!
//! A pixel-art drawing kernel: 2D geometry, color math, a strided RGBA
//! canvas with vector drawing, glyph shapes on tile boards, and the
//! lifecycle contract for programs that draw frame by frame.

pub mod numeric;
pub mod coords;
pub mod paint;
pub mod canvas;
pub mod tiles;

pub mod input;
pub mod time;
pub mod program;

pub mod logging;
