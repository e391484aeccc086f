//! Color functions: `Frac -> Color` mappings built from stops.
//!
//! Every builder takes [`ColorFuncOptions`]. A fraction outside `0 ..= 1` on
//! a side that is not extended yields [`Color::CLEAR`]; on an extended side it
//! is clamped to the nearest end.

use crate::coords::Angle;
use crate::numeric::{Frac, Interpolate, clamped};

use super::{Color, HsbColor};

pub type ColorFunc = Box<dyn Fn(Frac) -> Color>;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ColorFuncOptions {
    pub extend_start: bool,
    pub extend_end: bool,
}

impl ColorFuncOptions {
    pub const NONE: ColorFuncOptions = ColorFuncOptions { extend_start: false, extend_end: false };
    pub const EXTEND_START: ColorFuncOptions = ColorFuncOptions { extend_start: true, extend_end: false };
    pub const EXTEND_END: ColorFuncOptions = ColorFuncOptions { extend_start: false, extend_end: true };
    pub const EXTEND_BOTH: ColorFuncOptions = ColorFuncOptions { extend_start: true, extend_end: true };
}

/// A color pinned at a position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorFrac {
    pub color: Color,
    pub frac: Frac,
}

impl ColorFrac {
    pub const fn new(color: Color, frac: Frac) -> Self {
        Self { color, frac }
    }
}

/// A color stop with a handle biasing where the blend toward the next stop
/// reaches its midpoint (`0.5` is unbiased).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorFracHandle {
    pub color: Color,
    pub frac: Frac,
    pub handle: Frac,
}

impl ColorFracHandle {
    pub const fn new(color: Color, frac: Frac, handle: Frac) -> Self {
        Self { color, frac, handle }
    }
}

/// Gates `frac` against `options`: `None` when it falls outside `0 ..= 1` on
/// a side that is not extended, otherwise the clamped fraction.
pub fn clamp_at(frac: Frac, options: ColorFuncOptions) -> Option<Frac> {
    if frac < 0.0 && !options.extend_start {
        return None;
    }
    if frac > 1.0 && !options.extend_end {
        return None;
    }
    Some(clamped(frac))
}

/// Linear blend of RGB and alpha. `frac` is clamped first.
pub fn blend(from: Color, to: Color, frac: Frac) -> Color {
    let f = clamped(frac);
    let c = from * (1.0 - f) + to * f;
    c.with_alpha(from.alpha.interpolate(&to.alpha, f))
}

/// [`blend`] with an explicit output alpha.
pub fn blend_with_alpha(from: Color, to: Color, frac: Frac, alpha: Frac) -> Color {
    let f = clamped(frac);
    (from * (1.0 - f) + to * f).with_alpha(alpha)
}

/// [`blend`], gated by `options`.
pub fn blend_gated(from: Color, to: Color, frac: Frac, options: ColorFuncOptions) -> Color {
    match clamp_at(frac, options) {
        Some(_) => blend(from, to, frac),
        None => Color::CLEAR,
    }
}

pub fn blend_fn(from: Color, to: Color, options: ColorFuncOptions) -> ColorFunc {
    Box::new(move |frac| blend_gated(from, to, frac, options))
}

pub fn make_one_color(color: Color, options: ColorFuncOptions) -> ColorFunc {
    Box::new(move |frac| match clamp_at(frac, options) {
        Some(_) => color,
        None => Color::CLEAR,
    })
}

pub fn make_two_color(color1: Color, color2: Color, options: ColorFuncOptions) -> ColorFunc {
    blend_fn(color1, color2, options)
}

pub fn make_three_color(color1: Color, color2: Color, color3: Color, options: ColorFuncOptions) -> ColorFunc {
    blend_colors(vec![color1, color2, color3], options)
}

/// Evenly spaced stops. Zero colors behave as a single black stop.
pub fn blend_colors(colors: Vec<Color>, options: ColorFuncOptions) -> ColorFunc {
    match colors.len() {
        0 => make_one_color(Color::BLACK, options),
        1 => make_one_color(colors[0], options),
        2 => make_two_color(colors[0], colors[1], options),
        count => Box::new(move |frac| {
            if clamp_at(frac, options).is_none() {
                return Color::CLEAR;
            }
            if frac >= 1.0 {
                return colors[count - 1];
            }
            if frac <= 0.0 {
                return colors[0];
            }
            let segments = (count - 1) as f64;
            let mut s = frac * segments;
            // Land exactly on a stop when the product drifts by an ulp.
            if (s - s.round()).abs() < 1e-9 {
                s = s.round();
            }
            let segment = (s.floor() as usize).min(count - 2);
            blend(colors[segment], colors[segment + 1], s - segment as f64)
        }),
    }
}

/// Stops at explicit positions, in the given order.
///
/// The query is mapped from `0 ..= 1` onto `first.frac ..= last.frac`, then
/// the first pair of neighbours bracketing it supplies the blend. A query that
/// no pair brackets yields black.
pub fn blend_color_fracs(color_fracs: Vec<ColorFrac>, options: ColorFuncOptions) -> ColorFunc {
    match color_fracs.len() {
        0 => make_one_color(Color::BLACK, options),
        1 => make_one_color(color_fracs[0].color, options),
        count => Box::new(move |frac| {
            if clamp_at(frac, options).is_none() {
                return Color::CLEAR;
            }
            let first = color_fracs[0];
            let last = color_fracs[count - 1];
            let f = first.frac.interpolate(&last.frac, clamped(frac));
            if f >= last.frac {
                return last.color;
            }
            if f <= first.frac {
                return first.color;
            }
            for pair in color_fracs.windows(2) {
                let (cf1, cf2) = (pair[0], pair[1]);
                if f >= cf1.frac && f < cf2.frac {
                    let local = (f - cf1.frac) / (cf2.frac - cf1.frac);
                    return blend(cf1.color, cf2.color, local);
                }
            }
            Color::BLACK
        }),
    }
}

/// Stops with handles. Each pair whose handle is off-center gets an extra
/// stop at the handle position carrying the pair's midpoint color.
pub fn blend_color_frac_handles(handles: Vec<ColorFracHandle>, options: ColorFuncOptions) -> ColorFunc {
    let mut color_fracs = Vec::with_capacity(handles.len() * 2);
    if let Some(first) = handles.first() {
        color_fracs.push(ColorFrac::new(first.color, first.frac));
    }
    for pair in handles.windows(2) {
        let (h1, h2) = (pair[0], pair[1]);
        if (h1.handle - 0.5).abs() > 0.001 {
            let mid = blend(h1.color, h2.color, 0.5);
            color_fracs.push(ColorFrac::new(mid, h1.frac.interpolate(&h2.frac, h1.handle)));
        }
        color_fracs.push(ColorFrac::new(h2.color, h2.frac));
    }
    blend_color_fracs(color_fracs, options)
}

pub fn reverse(f: ColorFunc) -> ColorFunc {
    Box::new(move |frac| f(1.0 - frac))
}

/// Full-brightness sweep from the pure hue toward white.
pub fn tints(hue: Angle, options: ColorFuncOptions) -> ColorFunc {
    Box::new(move |frac| match clamp_at(frac, options) {
        Some(f) => Color::from(HsbColor::new(hue, 1.0 - f, 1.0, 1.0)),
        None => Color::CLEAR,
    })
}

/// Full-saturation sweep from the pure hue toward black.
pub fn shades(hue: Angle, options: ColorFuncOptions) -> ColorFunc {
    Box::new(move |frac| match clamp_at(frac, options) {
        Some(f) => Color::from(HsbColor::new(hue, 1.0, 1.0 - f, 1.0)),
        None => Color::CLEAR,
    })
}

/// Sweep from the pure hue toward mid gray.
pub fn tones(hue: Angle, options: ColorFuncOptions) -> ColorFunc {
    Box::new(move |frac| match clamp_at(frac, options) {
        Some(f) => Color::from(HsbColor::new(hue, 1.0 - f, 1.0_f64.interpolate(&0.5, f), 1.0)),
        None => Color::CLEAR,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_color_blend() {
        let f = blend_colors(vec![Color::RED, Color::GREEN.with_alpha(0.0)], ColorFuncOptions::NONE);
        assert_eq!(f(0.0), Color::RED);
        assert_eq!(f(1.0), Color::GREEN.with_alpha(0.0));
        assert_eq!(f(0.5), Color::new(0.5, 0.5, 0.0, 0.5));
    }

    #[test]
    fn gating_and_extension() {
        let gated = make_two_color(Color::RED, Color::BLUE, ColorFuncOptions::NONE);
        assert_eq!(gated(-0.1), Color::CLEAR);
        assert_eq!(gated(1.1), Color::CLEAR);

        let extended = make_two_color(Color::RED, Color::BLUE, ColorFuncOptions::EXTEND_BOTH);
        assert_eq!(extended(-0.1), Color::RED);
        assert_eq!(extended(1.1), Color::BLUE);

        let start_only = make_one_color(Color::WHITE, ColorFuncOptions::EXTEND_START);
        assert_eq!(start_only(-5.0), Color::WHITE);
        assert_eq!(start_only(5.0), Color::CLEAR);
    }

    #[test]
    fn segment_boundaries_hit_stops_exactly() {
        let colors = vec![Color::RED, Color::GREEN, Color::BLUE, Color::WHITE, Color::GOLD, Color::PINK];
        let n = colors.len();
        let f = blend_colors(colors.clone(), ColorFuncOptions::NONE);
        for (i, c) in colors.iter().enumerate() {
            let frac = i as f64 / (n - 1) as f64;
            assert_eq!(f(frac), *c, "stop {i}");
        }
    }

    #[test]
    fn three_color_midpoints() {
        let f = make_three_color(Color::BLACK, Color::WHITE, Color::BLACK, ColorFuncOptions::NONE);
        assert_eq!(f(0.5), Color::WHITE);
        assert_eq!(f(0.25), Color::rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn empty_list_is_black() {
        assert_eq!(blend_colors(Vec::new(), ColorFuncOptions::NONE)(0.3), Color::BLACK);
    }

    #[test]
    fn color_fracs_remap_onto_stop_range() {
        let stops = vec![
            ColorFrac::new(Color::BLACK, 0.0),
            ColorFrac::new(Color::WHITE, 0.25),
            ColorFrac::new(Color::BLACK, 1.0),
        ];
        let f = blend_color_fracs(stops, ColorFuncOptions::NONE);
        assert_eq!(f(0.0), Color::BLACK);
        assert_eq!(f(0.25), Color::WHITE);
        assert_eq!(f(0.125), Color::rgb(0.5, 0.5, 0.5));
        assert_eq!(f(1.0), Color::BLACK);
    }

    #[test]
    fn color_fracs_with_inset_stops() {
        let stops = vec![ColorFrac::new(Color::BLACK, 0.5), ColorFrac::new(Color::WHITE, 1.0)];
        let f = blend_color_fracs(stops, ColorFuncOptions::NONE);
        // 0.5 maps to 0.75, halfway between the stops.
        assert_eq!(f(0.5), Color::rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn out_of_order_stops_use_first_bracketing_pair() {
        let stops = vec![
            ColorFrac::new(Color::RED, 0.0),
            ColorFrac::new(Color::GREEN, 0.5),
            ColorFrac::new(Color::BLUE, 0.25),
            ColorFrac::new(Color::WHITE, 1.0),
        ];
        let f = blend_color_fracs(stops, ColorFuncOptions::NONE);
        assert_eq!(f(0.375), Color::rgb(0.25, 0.75, 0.0));
    }

    #[test]
    fn centered_handles_add_no_stops() {
        let handles = vec![
            ColorFracHandle::new(Color::BLACK, 0.0, 0.5),
            ColorFracHandle::new(Color::WHITE, 1.0, 0.5),
        ];
        let f = blend_color_frac_handles(handles, ColorFuncOptions::NONE);
        assert_eq!(f(0.5), Color::rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn biased_handle_moves_the_midpoint() {
        let handles = vec![
            ColorFracHandle::new(Color::BLACK, 0.0, 0.25),
            ColorFracHandle::new(Color::WHITE, 1.0, 0.5),
        ];
        let f = blend_color_frac_handles(handles, ColorFuncOptions::NONE);
        assert_eq!(f(0.25), Color::rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn reverse_flips() {
        let f = reverse(make_two_color(Color::RED, Color::BLUE, ColorFuncOptions::NONE));
        assert_eq!(f(0.0), Color::BLUE);
        assert_eq!(f(1.0), Color::RED);
    }

    #[test]
    fn hue_sweeps() {
        let red = Angle::ZERO;
        assert_eq!(tints(red, ColorFuncOptions::NONE)(0.0), Color::RED);
        assert_eq!(tints(red, ColorFuncOptions::NONE)(1.0), Color::WHITE);
        assert_eq!(shades(red, ColorFuncOptions::NONE)(1.0), Color::BLACK);
        assert_eq!(tones(red, ColorFuncOptions::NONE)(1.0), Color::rgb(0.5, 0.5, 0.5));
        assert_eq!(tints(red, ColorFuncOptions::NONE)(2.0), Color::CLEAR);
    }
}
