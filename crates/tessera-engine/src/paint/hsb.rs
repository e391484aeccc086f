use std::f64::consts::TAU;
use std::fmt;

use crate::coords::Angle;
use crate::numeric::{Frac, clamped, fmod, imod};

use super::Color;
use super::color::fmt_frac;

/// Hue/saturation/brightness color.
///
/// `hue` is an angle; any value is accepted and folded into one turn on
/// conversion.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct HsbColor {
    pub hue: Angle,
    pub saturation: Frac,
    pub brightness: Frac,
    pub alpha: Frac,
}

impl HsbColor {
    #[inline]
    pub const fn new(hue: Angle, saturation: Frac, brightness: Frac, alpha: Frac) -> Self {
        Self { hue, saturation, brightness, alpha }
    }

    /// Hue given as a fraction of a full turn.
    #[inline]
    pub fn from_hue_frac(hue: Frac, saturation: Frac, brightness: Frac) -> Self {
        Self::new(Angle::from_radians(hue * TAU), saturation, brightness, 1.0)
    }

    /// Hue as a fraction of a full turn in `0 .. 1`.
    #[inline]
    pub fn hue_frac(self) -> Frac {
        fmod(self.hue.radians / TAU, 1.0)
    }
}

impl From<Color> for HsbColor {
    fn from(color: Color) -> Self {
        let (r, g, b) = (color.red, color.green, color.blue);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;

        let saturation = if max == 0.0 { 0.0 } else { d / max };
        let hue = if max == min {
            0.0
        } else if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };

        HsbColor::new(Angle::from_radians(hue * TAU), saturation, max, color.alpha)
    }
}

impl From<HsbColor> for Color {
    fn from(hsb: HsbColor) -> Self {
        let v = clamped(hsb.brightness);
        let s = clamped(hsb.saturation);
        if s <= 0.0 {
            return Color::new(v, v, v, hsb.alpha);
        }

        let h = hsb.hue_frac() * 6.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        let (red, green, blue) = match imod(sector as i64, 6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Color::new(red, green, blue, hsb.alpha)
    }
}

impl fmt::Display for HsbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HsbColor(h:{} s:{} b:{}",
            fmt_frac(self.hue_frac()),
            fmt_frac(self.saturation),
            fmt_frac(self.brightness)
        )?;
        if self.alpha < 1.0 {
            write!(f, " a:{}", fmt_frac(self.alpha))?;
        }
        write!(f, ")")
    }
}
