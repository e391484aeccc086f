//! Scalar helpers shared by geometry, color, and drawing code.
//!
//! - `Frac` values and clamping/snapping helpers
//! - linear interpolation (`Interpolate`)
//! - random fractions and choices
//! - the easing function table

mod easing;
mod frac;
mod lerp;
mod random;

pub use easing::Easing;
pub use frac::{
    Frac,
    assert_frac,
    clamped,
    clamped_to,
    fmod,
    fractional_part,
    imod,
    is_even,
    is_odd,
    ledge,
    snapped,
};
pub use lerp::{Interpolate, lerp, lerp_from_frac, lerp_to_frac};
pub use random::{random_choice, random_frac, random_index};
