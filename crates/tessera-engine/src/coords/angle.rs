use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::f64::consts::{PI, TAU};

use rand::Rng;

/// An angle stored in radians.
///
/// Equality and ordering compare radians directly; there is no implicit
/// normalization into `0 .. 2π`.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Angle {
    pub radians: f64,
}

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees / 180.0 * PI
}

#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians / PI * 180.0
}

impl Angle {
    pub const ZERO: Angle = Angle { radians: 0.0 };
    /// One full turn.
    pub const ONE: Angle = Angle { radians: TAU };

    #[inline]
    pub const fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self { radians: degrees_to_radians(degrees) }
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        radians_to_degrees(self.radians)
    }

    #[inline]
    pub fn set_degrees(&mut self, degrees: f64) {
        self.radians = degrees_to_radians(degrees);
    }

    /// Radians divided by π: `1.0` is a half turn, `2.0` a full turn.
    #[inline]
    pub fn units(self) -> f64 {
        self.radians / PI
    }

    #[inline]
    pub fn from_units(units: f64) -> Self {
        Self { radians: units * PI }
    }

    #[inline]
    pub fn sin(self) -> f64 {
        self.radians.sin()
    }

    #[inline]
    pub fn cos(self) -> f64 {
        self.radians.cos()
    }

    /// A uniformly distributed angle in `0 .. 2π`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self { radians: rng.gen_range(0.0..TAU) }
    }
}

impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Angle {
        Angle::from_radians(-self.radians)
    }
}

impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians - rhs.radians)
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Angle) {
        self.radians += rhs.radians;
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Angle) {
        self.radians -= rhs.radians;
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn mul(self, rhs: f64) -> Angle {
        Angle::from_radians(self.radians * rhs)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;
    #[inline]
    fn mul(self, rhs: Angle) -> Angle {
        Angle::from_radians(self * rhs.radians)
    }
}

impl Div<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn div(self, rhs: f64) -> Angle {
        Angle::from_radians(self.radians / rhs)
    }
}

impl Div for Angle {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Angle) -> f64 {
        self.radians / rhs.radians
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_view_round_trips() {
        let a = Angle::from_degrees(90.0);
        assert!((a.radians - PI / 2.0).abs() < 1e-12);
        assert!((a.degrees() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn no_implicit_normalization() {
        let a = Angle::from_radians(3.0 * PI);
        let b = Angle::from_radians(PI);
        assert_ne!(a, b);
        assert!(b < a);
    }

    #[test]
    fn arithmetic() {
        let a = Angle::from_radians(1.0) + Angle::from_radians(0.5) - Angle::from_radians(0.25);
        assert_eq!(a.radians, 1.25);
        assert_eq!((a * 2.0).radians, 2.5);
        assert_eq!(Angle::ONE / Angle::from_radians(PI), 2.0);
        assert_eq!(Angle::ONE.units(), 2.0);
    }
}
