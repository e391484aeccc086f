use crate::numeric::{Frac, clamped, fmod};

use super::Color;
use super::color_func::blend;

/// Gradient spread behavior outside [0, 1].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    #[default]
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

impl SpreadMode {
    /// Folds any position into `0 ..= 1`.
    pub fn apply(self, frac: Frac) -> Frac {
        match self {
            SpreadMode::Pad => clamped(frac),
            SpreadMode::Repeat => fmod(frac, 1.0),
            SpreadMode::Reflect => {
                let t = fmod(frac, 2.0);
                if t > 1.0 { 2.0 - t } else { t }
            }
        }
    }
}

/// A single gradient stop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub color: Color,
    pub frac: Frac,
}

impl ColorStop {
    #[inline]
    pub const fn new(color: Color, frac: Frac) -> Self {
        Self { color, frac }
    }
}

/// Ordered color stops for linear fills.
///
/// Stops are expected in ascending `frac` order. Positions before the first
/// stop take its color, positions past the last take the last color.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl Gradient {
    pub fn new(stops: Vec<ColorStop>) -> Self {
        Self { stops, spread: SpreadMode::Pad }
    }

    /// `color1` at 0 to `color2` at 1.
    pub fn two(color1: Color, color2: Color) -> Self {
        Self::new(vec![ColorStop::new(color1, 0.0), ColorStop::new(color2, 1.0)])
    }

    pub fn with_spread(mut self, spread: SpreadMode) -> Self {
        self.spread = spread;
        self
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        !self.stops.is_empty()
            && self.stops.iter().all(|s| s.frac.is_finite() && s.color.is_finite())
            && self.stops.windows(2).all(|w| w[0].frac <= w[1].frac)
    }

    pub fn color_at(&self, frac: Frac) -> Color {
        let t = self.spread.apply(frac);
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Color::CLEAR;
        };
        if t <= first.frac {
            return first.color;
        }
        if t >= last.frac {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (s1, s2) = (pair[0], pair[1]);
            if t < s2.frac {
                let span = s2.frac - s1.frac;
                let local = if span > 0.0 { (t - s1.frac) / span } else { 1.0 };
                return blend(s1.color, s2.color, local);
            }
        }
        last.color
    }
}

impl From<Vec<(Color, Frac)>> for Gradient {
    fn from(stops: Vec<(Color, Frac)>) -> Self {
        Gradient::new(stops.into_iter().map(|(color, frac)| ColorStop::new(color, frac)).collect())
    }
}
