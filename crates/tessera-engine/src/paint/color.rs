use core::ops::{Add, Mul};
use std::fmt;

use rand::Rng;

use crate::numeric::{Frac, Interpolate, clamped, random_frac};

use super::HsbColor;

/// Straight-alpha RGBA color with `f64` channels in `0.0 ..= 1.0`.
///
/// Channels are not clamped on construction; arithmetic may leave the unit
/// interval and storage (e.g. a canvas pixel) clamps on write.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub red: Frac,
    pub green: Frac,
    pub blue: Frac,
    pub alpha: Frac,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const DARK_GRAY: Color = Color::rgb(0.2509803922, 0.2509803922, 0.2509803922);
    pub const LIGHT_GRAY: Color = Color::rgb(0.7529411765, 0.7529411765, 0.7529411765);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Color = Color::rgb(0.5019607843, 0.5019607843, 0.5019607843);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const DARK_GREEN: Color = Color::rgb(0.3411764801, 0.6235294342, 0.1686274558);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
    pub const ORANGE: Color = Color::rgb(1.0, 0.5781051517, 0.0);
    pub const PURPLE: Color = Color::rgb(0.5568627715, 0.3529411852, 0.9686274529);
    pub const BROWN: Color = Color::rgb(0.5058823824, 0.3372549117, 0.06666667014);
    /// Transparent black. Unlike "no color" it still takes part in blending.
    pub const CLEAR: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const PINK: Color = Color::rgb(1.0, 0.75294118, 0.79607843);
    pub const GOLD: Color = Color::from_bytes(251, 212, 55, 255);
    pub const BLUE_GREEN: Color = Color::from_bytes(0, 169, 149, 255);
    pub const MEDIUM_BLUE: Color = Color::from_bytes(0, 110, 185, 255);
    pub const DEEP_BLUE: Color = Color::from_bytes(60, 55, 149, 255);

    #[inline]
    pub const fn new(red: Frac, green: Frac, blue: Frac, alpha: Frac) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(red: Frac, green: Frac, blue: Frac) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Creates a color from straight byte channels (`0`–`255`).
    #[inline]
    pub const fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, a as f64 / 255.0)
    }

    #[inline]
    pub const fn from_white(white: Frac, alpha: Frac) -> Self {
        Self::new(white, white, white, alpha)
    }

    pub fn from_hsb(hsb: HsbColor) -> Self {
        Color::from(hsb)
    }

    /// Random opaque-RGB color with the given alpha.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, alpha: Frac) -> Self {
        Self::new(random_frac(rng), random_frac(rng), random_frac(rng), alpha)
    }

    #[inline]
    pub fn with_alpha(self, alpha: Frac) -> Self {
        Self { alpha, ..self }
    }

    /// Byte channels, each `round(clamp(c) * 255)`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        let q = |c: f64| (clamped(c) * 255.0).round() as u8;
        [q(self.red), q(self.green), q(self.blue), q(self.alpha)]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.red.is_finite() && self.green.is_finite() && self.blue.is_finite() && self.alpha.is_finite()
    }

    /// Clamps all channels to `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(clamped(self.red), clamped(self.green), clamped(self.blue), clamped(self.alpha))
    }

    // NOTE: linear luma weights, not gamma-corrected.
    #[inline]
    pub fn luminance(self) -> Frac {
        self.red * 0.2126 + self.green * 0.7152 + self.blue * 0.0722
    }

    /// Scales RGB; alpha is kept.
    #[inline]
    pub fn multiplied(self, rhs: Frac) -> Self {
        Self::new(self.red * rhs, self.green * rhs, self.blue * rhs, self.alpha)
    }

    /// Adds RGB; alpha comes from `self`.
    #[inline]
    pub fn added(self, rhs: Color) -> Self {
        Self::new(self.red + rhs.red, self.green + rhs.green, self.blue + rhs.blue, self.alpha)
    }

    /// Moves RGB toward white by `frac`.
    pub fn lightened(self, frac: Frac) -> Self {
        Self::new(
            self.red.interpolate(&1.0, frac),
            self.green.interpolate(&1.0, frac),
            self.blue.interpolate(&1.0, frac),
            self.alpha,
        )
    }

    /// Moves RGB toward black by `frac`.
    pub fn darkened(self, frac: Frac) -> Self {
        Self::new(
            self.red.interpolate(&0.0, frac),
            self.green.interpolate(&0.0, frac),
            self.blue.interpolate(&0.0, frac),
            self.alpha,
        )
    }

    /// Color dodge. `frac = 0` is the identity.
    pub fn dodged(self, frac: Frac) -> Self {
        let f = (1.0 - frac).max(1.0e-7);
        Self::new(
            (self.red / f).min(1.0),
            (self.green / f).min(1.0),
            (self.blue / f).min(1.0),
            self.alpha,
        )
    }

    /// Color burn. `frac = 0` is the identity.
    pub fn burned(self, frac: Frac) -> Self {
        let f = (1.0 - frac).max(1.0e-7);
        Self::new(
            (1.0 - (1.0 - self.red) / f).min(1.0),
            (1.0 - (1.0 - self.green) / f).min(1.0),
            (1.0 - (1.0 - self.blue) / f).min(1.0),
            self.alpha,
        )
    }

    pub fn lighten(frac: Frac) -> impl Fn(Color) -> Color {
        move |c| c.lightened(frac)
    }

    pub fn darken(frac: Frac) -> impl Fn(Color) -> Color {
        move |c| c.darkened(frac)
    }

    pub fn dodge(frac: Frac) -> impl Fn(Color) -> Color {
        move |c| c.dodged(frac)
    }

    pub fn burn(frac: Frac) -> impl Fn(Color) -> Color {
        move |c| c.burned(frac)
    }

    fn name(self) -> Option<&'static str> {
        let rgb = (self.red, self.green, self.blue);
        let name = match rgb {
            (0.0, 0.0, 0.0) if self.alpha == 0.0 => "clear",
            (0.0, 0.0, 0.0) => "black",
            (1.0, 1.0, 1.0) => "white",
            (0.5, 0.5, 0.5) => "gray",
            (1.0, 0.0, 0.0) => "red",
            (0.0, 1.0, 0.0) => "green",
            (0.0, 0.0, 1.0) => "blue",
            (0.0, 1.0, 1.0) => "cyan",
            (1.0, 0.0, 1.0) => "magenta",
            (1.0, 1.0, 0.0) => "yellow",
            _ => return None,
        };
        Some(name)
    }
}

/// Formats `x` with at most two decimals, trailing zeros trimmed.
pub(crate) fn fmt_frac(x: f64) -> String {
    let s = format!("{x:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some("clear") => return write!(f, "Color(clear)"),
            Some(name) => write!(f, "Color({name}")?,
            None => write!(
                f,
                "Color(r:{} g:{} b:{}",
                fmt_frac(self.red),
                fmt_frac(self.green),
                fmt_frac(self.blue)
            )?,
        }
        if self.alpha < 1.0 {
            write!(f, " a:{}", fmt_frac(self.alpha))?;
        }
        write!(f, ")")
    }
}

impl Interpolate for Color {
    fn interpolate(&self, to: &Color, at: Frac) -> Color {
        Color::new(
            self.red.interpolate(&to.red, at),
            self.green.interpolate(&to.green, at),
            self.blue.interpolate(&to.blue, at),
            self.alpha.interpolate(&to.alpha, at),
        )
    }
}

impl Mul<Frac> for Color {
    type Output = Color;
    #[inline]
    fn mul(self, rhs: Frac) -> Color {
        self.multiplied(rhs)
    }
}

impl Add for Color {
    type Output = Color;
    #[inline]
    fn add(self, rhs: Color) -> Color {
        self.added(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Color, b: Color) -> bool {
        let e = 1e-9;
        (a.red - b.red).abs() < e
            && (a.green - b.green).abs() < e
            && (a.blue - b.blue).abs() < e
            && (a.alpha - b.alpha).abs() < e
    }

    #[test]
    fn byte_constants() {
        assert_eq!(Color::GOLD.to_bytes(), [251, 212, 55, 255]);
        assert_eq!(Color::DEEP_BLUE.to_bytes(), [60, 55, 149, 255]);
    }

    #[test]
    fn luminance_weights() {
        assert!((Color::WHITE.luminance() - 1.0).abs() < 1e-12);
        assert_eq!(Color::RED.luminance(), 0.2126);
        assert_eq!(Color::BLACK.luminance(), 0.0);
    }

    #[test]
    fn add_keeps_left_alpha() {
        let c = Color::new(0.25, 0.0, 0.0, 0.5) + Color::new(0.25, 0.5, 0.0, 1.0);
        assert_eq!(c, Color::new(0.5, 0.5, 0.0, 0.5));
        assert_eq!((Color::WHITE * 0.5).alpha, 1.0);
    }

    #[test]
    fn lighten_and_darken() {
        assert!(approx_eq(Color::BLACK.lightened(0.5), Color::rgb(0.5, 0.5, 0.5)));
        assert!(approx_eq(Color::WHITE.darkened(0.25), Color::rgb(0.75, 0.75, 0.75)));
        assert!(approx_eq(Color::lighten(1.0)(Color::RED), Color::WHITE));
    }

    #[test]
    fn dodge_and_burn_identity_at_zero() {
        let c = Color::rgb(0.2, 0.4, 0.6);
        assert!(approx_eq(c.dodged(0.0), c));
        assert!(approx_eq(c.burned(0.0), c));
    }

    #[test]
    fn dodge_full_strength_does_not_divide_by_zero() {
        let c = Color::rgb(0.2, 0.0, 0.6).dodged(1.0);
        assert_eq!(c, Color::rgb(1.0, 0.0, 1.0));
        assert!(Color::rgb(0.2, 1.0, 0.6).burned(1.0).is_finite());
    }

    #[test]
    fn display_summary() {
        assert_eq!(Color::CLEAR.to_string(), "Color(clear)");
        assert_eq!(Color::RED.to_string(), "Color(red)");
        assert_eq!(Color::rgb(0.25, 0.5, 1.0).to_string(), "Color(r:0.25 g:0.5 b:1)");
        assert_eq!(Color::BLUE.with_alpha(0.5).to_string(), "Color(blue a:0.5)");
    }

    #[test]
    fn quantization_rounds() {
        assert_eq!(Color::new(0.5, 1.2, -0.3, 1.0).to_bytes(), [128, 255, 0, 255]);
    }
}
