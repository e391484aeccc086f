use core::ops::{Add, AddAssign};

use super::{Angle, Point, Vector};

/// A displacement expressed as magnitude and direction.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Polar {
    pub magnitude: f64,
    pub angle: Angle,
}

impl Polar {
    #[inline]
    pub const fn new(magnitude: f64, angle: Angle) -> Self {
        Self { magnitude, angle }
    }

    #[inline]
    pub fn vector(self) -> Vector {
        Vector::from_angle(self.angle, self.magnitude)
    }

    #[inline]
    pub fn from_vector(v: Vector) -> Self {
        Self::new(v.magnitude(), v.angle())
    }
}

impl From<Vector> for Polar {
    fn from(v: Vector) -> Self {
        Polar::from_vector(v)
    }
}

impl From<Polar> for Vector {
    fn from(p: Polar) -> Self {
        p.vector()
    }
}

impl Add<Polar> for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Polar) -> Point {
        self + rhs.vector()
    }
}

impl AddAssign<Polar> for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Polar) {
        *self = *self + rhs;
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn vector_round_trip() {
        let p = Polar::from_vector(Vector::new(0.0, 2.0));
        assert_eq!(p.magnitude, 2.0);
        assert_eq!(p.angle, Angle::from_radians(FRAC_PI_2));
        let v = p.vector();
        assert!(v.dx.abs() < 1e-12 && (v.dy - 2.0).abs() < 1e-12);
    }

    #[test]
    fn point_plus_polar() {
        let q = Point::new(1.0, 1.0) + Polar::new(3.0, Angle::ZERO);
        assert_eq!(q, Point::new(4.0, 1.0));
    }
}
