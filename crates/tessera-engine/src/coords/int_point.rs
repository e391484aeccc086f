use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::fmt;

use super::{IntVector, Point};

/// Integer location: a pixel coordinate or a grid cell.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntPoint {
    pub x: i64,
    pub y: i64,
}

impl IntPoint {
    pub const ZERO: IntPoint = IntPoint::new(0, 0);
    /// Sentinel used as the origin of the null integer rectangle.
    pub const MAX: IntPoint = IntPoint::new(i64::MAX, i64::MAX);

    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn min(p1: IntPoint, p2: IntPoint) -> IntPoint {
        IntPoint::new(p1.x.min(p2.x), p1.y.min(p2.y))
    }

    #[inline]
    pub fn max(p1: IntPoint, p2: IntPoint) -> IntPoint {
        IntPoint::new(p1.x.max(p2.x), p1.y.max(p2.y))
    }

    /// Center of this pixel in floating canvas space.
    #[inline]
    pub fn center(self) -> Point {
        Point::new(self.x as f64 + 0.5, self.y as f64 + 0.5)
    }
}

/// Truncates toward zero.
impl From<Point> for IntPoint {
    #[inline]
    fn from(p: Point) -> Self {
        IntPoint::new(p.x as i64, p.y as i64)
    }
}

impl From<IntVector> for IntPoint {
    #[inline]
    fn from(v: IntVector) -> Self {
        IntPoint::new(v.dx, v.dy)
    }
}

impl fmt::Display for IntPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntPoint({}, {})", self.x, self.y)
    }
}

impl Neg for IntPoint {
    type Output = IntPoint;
    #[inline]
    fn neg(self) -> IntPoint {
        IntPoint::new(-self.x, -self.y)
    }
}

impl Sub for IntPoint {
    type Output = IntVector;
    #[inline]
    fn sub(self, rhs: IntPoint) -> IntVector {
        IntVector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<IntVector> for IntPoint {
    type Output = IntPoint;
    #[inline]
    fn add(self, rhs: IntVector) -> IntPoint {
        IntPoint::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Sub<IntVector> for IntPoint {
    type Output = IntPoint;
    #[inline]
    fn sub(self, rhs: IntVector) -> IntPoint {
        IntPoint::new(self.x - rhs.dx, self.y - rhs.dy)
    }
}

impl AddAssign<IntVector> for IntPoint {
    #[inline]
    fn add_assign(&mut self, rhs: IntVector) {
        *self = *self + rhs;
    }
}

impl SubAssign<IntVector> for IntPoint {
    #[inline]
    fn sub_assign(&mut self, rhs: IntVector) {
        *self = *self - rhs;
    }
}

impl Add for IntPoint {
    type Output = IntPoint;
    #[inline]
    fn add(self, rhs: IntPoint) -> IntPoint {
        IntPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<i64> for IntPoint {
    type Output = IntPoint;
    #[inline]
    fn mul(self, rhs: i64) -> IntPoint {
        IntPoint::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_truncates_toward_zero() {
        assert_eq!(IntPoint::from(Point::new(3.99, -3.99)), IntPoint::new(3, -3));
        assert_eq!(IntPoint::from(Point::new(-0.5, 0.5)), IntPoint::ZERO);
    }

    #[test]
    fn point_arithmetic() {
        let p = IntPoint::new(4, 6);
        assert_eq!(p - IntPoint::new(1, 2), IntVector::new(3, 4));
        assert_eq!(p + IntVector::LEFT, IntPoint::new(3, 6));
        assert_eq!(p * 2, IntPoint::new(8, 12));
    }

    #[test]
    fn pixel_center() {
        assert_eq!(IntPoint::new(2, 3).center(), Point::new(2.5, 3.5));
    }
}
