use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::fmt;

use crate::numeric::{Frac, Interpolate};

use super::{Angle, IntVector, Point, Size};

/// A 2D displacement.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0.0, 0.0);
    pub const UP: Vector = Vector::new(0.0, -1.0);
    pub const LEFT: Vector = Vector::new(-1.0, 0.0);
    pub const DOWN: Vector = Vector::new(0.0, 1.0);
    pub const RIGHT: Vector = Vector::new(1.0, 0.0);
    pub const UNIT: Vector = Vector::new(1.0, 0.0);

    #[inline]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    #[inline]
    pub fn from_angle(theta: Angle, magnitude: f64) -> Self {
        Self::new(theta.cos() * magnitude, theta.sin() * magnitude)
    }

    #[inline]
    pub fn magnitude(self) -> f64 {
        self.dx.hypot(self.dy)
    }

    #[inline]
    pub fn angle(self) -> Angle {
        Angle::from_radians(self.dy.atan2(self.dx))
    }

    /// Unit-length vector with the same direction.
    ///
    /// # Panics
    /// Panics for a zero-length vector, which has no direction.
    #[inline]
    pub fn normalized(self) -> Self {
        let m = self.magnitude();
        assert!(m > 0.0, "cannot normalize a zero-length vector");
        self / m
    }

    #[inline]
    pub fn try_normalized(self) -> Option<Self> {
        let m = self.magnitude();
        if m > 0.0 { Some(self / m) } else { None }
    }

    #[inline]
    pub fn rotated(self, theta: Angle) -> Self {
        let (s, c) = theta.radians.sin_cos();
        Self::new(self.dx * c - self.dy * s, self.dx * s + self.dy * c)
    }

    #[inline]
    pub fn swapped(self) -> Self {
        Self::new(self.dy, self.dx)
    }

    #[inline]
    pub fn dot(self, other: Vector) -> f64 {
        dot(self, other)
    }

    #[inline]
    pub fn cross(self, other: Vector) -> f64 {
        cross(self, other)
    }

    #[inline]
    pub fn min(v1: Vector, v2: Vector) -> Vector {
        Vector::new(v1.dx.min(v2.dx), v1.dy.min(v2.dy))
    }

    #[inline]
    pub fn max(v1: Vector, v2: Vector) -> Vector {
        Vector::new(v1.dx.max(v2.dx), v1.dy.max(v2.dy))
    }

    /// Integer view, truncating toward zero.
    #[inline]
    pub fn int_view(self) -> IntVector {
        IntVector::from(self)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }
}

#[inline]
pub fn dot(v1: Vector, v2: Vector) -> f64 {
    v1.dx * v2.dx + v1.dy * v2.dy
}

#[inline]
pub fn cross(v1: Vector, v2: Vector) -> f64 {
    v1.dx * v2.dy - v1.dy * v2.dx
}

impl From<Point> for Vector {
    #[inline]
    fn from(p: Point) -> Self {
        Vector::new(p.x, p.y)
    }
}

impl From<Size> for Vector {
    #[inline]
    fn from(s: Size) -> Self {
        Vector::new(s.width, s.height)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({}, {})", self.dx, self.dy)
    }
}

impl Interpolate for Vector {
    fn interpolate(&self, to: &Vector, at: Frac) -> Vector {
        Vector::new(self.dx.interpolate(&to.dx, at), self.dy.interpolate(&to.dy, at))
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.dx, -self.dy)
    }
}

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.dx * rhs, self.dy * rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Vector) -> Vector {
        Vector::new(self * rhs.dx, self * rhs.dy)
    }
}

/// Componentwise product.
impl Mul for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Vector) -> Vector {
        Vector::new(self.dx * rhs.dx, self.dy * rhs.dy)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn div(self, rhs: f64) -> Vector {
        Vector::new(self.dx / rhs, self.dy / rhs)
    }
}

/// Componentwise quotient.
impl Div for Vector {
    type Output = Vector;
    #[inline]
    fn div(self, rhs: Vector) -> Vector {
        Vector::new(self.dx / rhs.dx, self.dy / rhs.dy)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    fn approx_eq(a: Vector, b: Vector) -> bool {
        (a.dx - b.dx).abs() < 1e-12 && (a.dy - b.dy).abs() < 1e-12
    }

    #[test]
    fn magnitude_of_three_four_is_five() {
        assert_eq!(Vector::new(3.0, 4.0).magnitude(), 5.0);
    }

    #[test]
    fn normalized_has_unit_length() {
        let n = Vector::new(3.0, 4.0).normalized();
        assert!(approx_eq(n, Vector::new(0.6, 0.8)));
    }

    #[test]
    #[should_panic(expected = "zero-length vector")]
    fn normalizing_zero_panics() {
        let _ = Vector::ZERO.normalized();
    }

    #[test]
    fn try_normalized_rejects_zero() {
        assert!(Vector::ZERO.try_normalized().is_none());
    }

    #[test]
    fn dot_and_cross() {
        let a = Vector::new(1.0, 2.0);
        let b = Vector::new(3.0, 4.0);
        assert_eq!(dot(a, b), 11.0);
        assert_eq!(cross(a, b), -2.0);
        assert_eq!(cross(b, a), 2.0);
    }

    #[test]
    fn rotation_by_quarter_turn() {
        let r = Vector::RIGHT.rotated(Angle::from_radians(FRAC_PI_2));
        assert!(approx_eq(r, Vector::DOWN));
    }

    #[test]
    fn componentwise_ops() {
        let a = Vector::new(2.0, 3.0);
        assert_eq!(a * Vector::new(4.0, 5.0), Vector::new(8.0, 15.0));
        assert_eq!(2.0 * a, Vector::new(4.0, 6.0));
        assert_eq!(-a + a, Vector::ZERO);
    }

    #[test]
    fn int_view_truncates_toward_zero() {
        let v = Vector::new(2.9, -2.9).int_view();
        assert_eq!(v, IntVector::new(2, -2));
    }
}
