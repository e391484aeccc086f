use core::ops::{Div, Mul};
use std::fmt;
use std::ops::RangeInclusive;

use super::{IntPoint, IntRect, IntVector, Size};

/// Integer width and height (pixels, or grid cells for a board).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntSize {
    pub width: i64,
    pub height: i64,
}

impl IntSize {
    /// Marks a dimension as unconstrained in aspect-fit/fill targets.
    pub const NONE: i64 = -1;
    pub const ZERO: IntSize = IntSize::new(0, 0);

    #[inline]
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn both(n: i64) -> Self {
        Self::new(n, n)
    }

    /// Last valid column index.
    #[inline]
    pub fn max_x(self) -> i64 {
        self.width - 1
    }

    /// Last valid row index.
    #[inline]
    pub fn max_y(self) -> i64 {
        self.height - 1
    }

    #[inline]
    pub fn range_x(self) -> RangeInclusive<i64> {
        0..=self.max_x()
    }

    #[inline]
    pub fn range_y(self) -> RangeInclusive<i64> {
        0..=self.max_y()
    }

    #[inline]
    pub fn bounds(self) -> IntRect {
        IntRect::from_origin_size(IntPoint::ZERO, self)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn area(self) -> i64 {
        self.width * self.height
    }

    #[inline]
    pub fn aspect(self) -> f64 {
        self.width as f64 / self.height as f64
    }

    #[inline]
    pub fn max(self) -> i64 {
        self.width.max(self.height)
    }

    #[inline]
    pub fn min(self) -> i64 {
        self.width.min(self.height)
    }

    pub fn scale_for_aspect_fit(self, target: IntSize) -> f64 {
        Size::from(self).scale_for_aspect_fit(Size::from(target))
    }

    pub fn scale_for_aspect_fill(self, target: IntSize) -> f64 {
        Size::from(self).scale_for_aspect_fill(Size::from(target))
    }

    /// Aspect-fit size, truncated back to integers.
    pub fn aspect_fit(self, target: IntSize) -> IntSize {
        IntSize::from(Size::from(self).aspect_fit(Size::from(target)))
    }

    pub fn aspect_fill(self, target: IntSize) -> IntSize {
        IntSize::from(Size::from(self).aspect_fill(Size::from(target)))
    }
}

/// Truncates toward zero.
impl From<Size> for IntSize {
    #[inline]
    fn from(s: Size) -> Self {
        IntSize::new(s.width as i64, s.height as i64)
    }
}

impl From<IntVector> for IntSize {
    #[inline]
    fn from(v: IntVector) -> Self {
        IntSize::new(v.dx, v.dy)
    }
}

impl fmt::Display for IntSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntSize({}, {})", self.width, self.height)
    }
}

impl Mul<i64> for IntSize {
    type Output = IntSize;
    #[inline]
    fn mul(self, rhs: i64) -> IntSize {
        IntSize::new(self.width * rhs, self.height * rhs)
    }
}

/// Componentwise product, e.g. grid size times tile size.
impl Mul for IntSize {
    type Output = IntSize;
    #[inline]
    fn mul(self, rhs: IntSize) -> IntSize {
        IntSize::new(self.width * rhs.width, self.height * rhs.height)
    }
}

impl Div<i64> for IntSize {
    type Output = IntSize;
    #[inline]
    fn div(self, rhs: i64) -> IntSize {
        IntSize::new(self.width / rhs, self.height / rhs)
    }
}
