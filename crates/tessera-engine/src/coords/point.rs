use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::fmt;

use crate::numeric::{Frac, Interpolate, lerp, snapped};

use super::{Angle, IntPoint, Size, Vector};

/// A 2D location in canvas space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point::new(0.0, 0.0);
    /// Sentinel used as the origin of the null rectangle.
    pub const INFINITE: Point = Point::new(f64::INFINITY, f64::INFINITY);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point `radius` away from `center` in direction `theta`.
    #[inline]
    pub fn from_polar(center: Point, theta: Angle, radius: f64) -> Self {
        Self::new(center.x + theta.cos() * radius, center.y + theta.sin() * radius)
    }

    #[inline]
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn angle(self) -> Angle {
        Angle::from_radians(self.y.atan2(self.x))
    }

    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        (other - self).magnitude()
    }

    pub fn rotated_around(self, theta: Angle, center: Point) -> Point {
        center + (self - center).rotated(theta)
    }

    /// Snaps both coordinates to pixel centers.
    #[inline]
    pub fn snapped(self) -> Point {
        Point::new(snapped(self.x), snapped(self.y))
    }

    #[inline]
    pub fn min(p1: Point, p2: Point) -> Point {
        Point::new(p1.x.min(p2.x), p1.y.min(p2.y))
    }

    #[inline]
    pub fn max(p1: Point, p2: Point) -> Point {
        Point::new(p1.x.max(p2.x), p1.y.max(p2.y))
    }

    /// Maps `0 ..= size` onto `-1 ..= 1` on both axes.
    pub fn to_normalized_coordinates(self, size: Size) -> Point {
        Point::new(
            lerp(self.x, (0.0, size.width), (-1.0, 1.0)),
            lerp(self.y, (0.0, size.height), (-1.0, 1.0)),
        )
    }

    /// Maps `-1 ..= 1` back onto `0 ..= size`.
    pub fn from_normalized_coordinates(self, size: Size) -> Point {
        Point::new(
            lerp(self.x, (-1.0, 1.0), (0.0, size.width)),
            lerp(self.y, (-1.0, 1.0), (0.0, size.height)),
        )
    }

    pub fn transform_coordinates(self, from: Size, to: Size) -> Point {
        Point::new(
            lerp(self.x, (0.0, from.width), (0.0, to.width)),
            lerp(self.y, (0.0, from.height), (0.0, to.height)),
        )
    }

    /// Integer view, truncating toward zero.
    #[inline]
    pub fn int_view(self) -> IntPoint {
        IntPoint::from(self)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Vector> for Point {
    #[inline]
    fn from(v: Vector) -> Self {
        Point::new(v.dx, v.dy)
    }
}

impl From<IntPoint> for Point {
    #[inline]
    fn from(p: IntPoint) -> Self {
        Point::new(p.x as f64, p.y as f64)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

impl Interpolate for Point {
    fn interpolate(&self, to: &Point, at: Frac) -> Point {
        Point::new(self.x.interpolate(&to.x, at), self.y.interpolate(&to.y, at))
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Sub for Point {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Vector) -> Point {
        Point::new(self.x - rhs.dx, self.y - rhs.dy)
    }
}

impl AddAssign<Vector> for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl SubAssign<Vector> for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector) {
        *self = *self - rhs;
    }
}

impl Add<Point> for Vector {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.dx + rhs.x, self.dy + rhs.y)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: Point) -> Point {
        Point::new(self * rhs.x, self * rhs.y)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn point_minus_point_is_vector() {
        let v = Point::new(5.0, 7.0) - Point::new(2.0, 3.0);
        assert_eq!(v, Vector::new(3.0, 4.0));
        assert_eq!(Point::new(2.0, 3.0) + v, Point::new(5.0, 7.0));
    }

    #[test]
    fn distance() {
        assert_eq!(Point::ZERO.distance_to(Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn rotate_around_center() {
        let p = Point::new(2.0, 1.0).rotated_around(Angle::from_radians(PI), Point::new(1.0, 1.0));
        assert!((p.x - 0.0).abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalized_coordinates_round_trip() {
        let size = Size::new(40.0, 20.0);
        let n = Point::new(30.0, 5.0).to_normalized_coordinates(size);
        assert_eq!(n, Point::new(0.5, -0.5));
        assert_eq!(n.from_normalized_coordinates(size), Point::new(30.0, 5.0));
    }

    #[test]
    fn infinite_sentinel_equals_itself() {
        assert_eq!(Point::INFINITE, Point::INFINITE);
        assert!(!Point::INFINITE.is_finite());
    }
}
