use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::fmt;

use super::{IntPoint, IntSize, Vector};

/// Integer displacement, in whole pixels or whole grid cells.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntVector {
    pub dx: i64,
    pub dy: i64,
}

impl IntVector {
    pub const ZERO: IntVector = IntVector::new(0, 0);
    pub const UP: IntVector = IntVector::new(0, -1);
    pub const LEFT: IntVector = IntVector::new(-1, 0);
    pub const DOWN: IntVector = IntVector::new(0, 1);
    pub const RIGHT: IntVector = IntVector::new(1, 0);

    #[inline]
    pub const fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }

    #[inline]
    pub fn min(v1: IntVector, v2: IntVector) -> IntVector {
        IntVector::new(v1.dx.min(v2.dx), v1.dy.min(v2.dy))
    }

    #[inline]
    pub fn max(v1: IntVector, v2: IntVector) -> IntVector {
        IntVector::new(v1.dx.max(v2.dx), v1.dy.max(v2.dy))
    }
}

/// Truncates toward zero.
impl From<Vector> for IntVector {
    #[inline]
    fn from(v: Vector) -> Self {
        IntVector::new(v.dx as i64, v.dy as i64)
    }
}

impl From<IntPoint> for IntVector {
    #[inline]
    fn from(p: IntPoint) -> Self {
        IntVector::new(p.x, p.y)
    }
}

impl From<IntSize> for IntVector {
    #[inline]
    fn from(s: IntSize) -> Self {
        IntVector::new(s.width, s.height)
    }
}

impl From<IntVector> for Vector {
    #[inline]
    fn from(v: IntVector) -> Self {
        Vector::new(v.dx as f64, v.dy as f64)
    }
}

impl fmt::Display for IntVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntVector({}, {})", self.dx, self.dy)
    }
}

impl Neg for IntVector {
    type Output = IntVector;
    #[inline]
    fn neg(self) -> IntVector {
        IntVector::new(-self.dx, -self.dy)
    }
}

impl Add for IntVector {
    type Output = IntVector;
    #[inline]
    fn add(self, rhs: IntVector) -> IntVector {
        IntVector::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Sub for IntVector {
    type Output = IntVector;
    #[inline]
    fn sub(self, rhs: IntVector) -> IntVector {
        IntVector::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl AddAssign for IntVector {
    #[inline]
    fn add_assign(&mut self, rhs: IntVector) {
        *self = *self + rhs;
    }
}

impl SubAssign for IntVector {
    #[inline]
    fn sub_assign(&mut self, rhs: IntVector) {
        *self = *self - rhs;
    }
}

impl Mul<i64> for IntVector {
    type Output = IntVector;
    #[inline]
    fn mul(self, rhs: i64) -> IntVector {
        IntVector::new(self.dx * rhs, self.dy * rhs)
    }
}

/// Componentwise product.
impl Mul for IntVector {
    type Output = IntVector;
    #[inline]
    fn mul(self, rhs: IntVector) -> IntVector {
        IntVector::new(self.dx * rhs.dx, self.dy * rhs.dy)
    }
}
