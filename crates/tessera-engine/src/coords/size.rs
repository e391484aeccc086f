use core::ops::{Div, Mul};
use std::fmt;

use crate::numeric::{Frac, Interpolate};

use super::{IntSize, Rect, Vector};

/// Width and height. Non-negative by convention.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Marks a dimension as unconstrained in aspect-fit/fill targets.
    pub const NONE: f64 = -1.0;
    pub const ZERO: Size = Size::new(0.0, 0.0);
    pub const INFINITE: Size = Size::new(f64::INFINITY, f64::INFINITY);

    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn both(n: f64) -> Self {
        Self::new(n, n)
    }

    #[inline]
    pub fn aspect(self) -> f64 {
        self.width / self.height
    }

    #[inline]
    pub fn bounds(self) -> Rect {
        Rect::from_origin_size(super::Point::ZERO, self)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    #[inline]
    pub fn max(self) -> f64 {
        self.width.max(self.height)
    }

    #[inline]
    pub fn min(self) -> f64 {
        self.width.min(self.height)
    }

    /// Scale that makes `self` fit entirely inside `target`.
    ///
    /// A dimension of `target` equal to [`Size::NONE`] is unconstrained.
    pub fn scale_for_aspect_fit(self, target: Size) -> f64 {
        if target.width != Size::NONE && target.height != Size::NONE {
            (target.width / self.width).min(target.height / self.height)
        } else if target.width != Size::NONE {
            target.width / self.width
        } else {
            target.height / self.height
        }
    }

    /// Scale that makes `self` cover `target` completely.
    pub fn scale_for_aspect_fill(self, target: Size) -> f64 {
        if target.width != Size::NONE && target.height != Size::NONE {
            (target.width / self.width).max(target.height / self.height)
        } else if target.width != Size::NONE {
            target.width / self.width
        } else {
            target.height / self.height
        }
    }

    pub fn aspect_fit(self, target: Size) -> Size {
        self * self.scale_for_aspect_fit(target)
    }

    pub fn aspect_fill(self, target: Size) -> Size {
        self * self.scale_for_aspect_fill(target)
    }

    /// Integer view, truncating toward zero.
    #[inline]
    pub fn int_view(self) -> IntSize {
        IntSize::from(self)
    }
}

impl From<Vector> for Size {
    #[inline]
    fn from(v: Vector) -> Self {
        Size::new(v.dx, v.dy)
    }
}

impl From<IntSize> for Size {
    #[inline]
    fn from(s: IntSize) -> Self {
        Size::new(s.width as f64, s.height as f64)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size({}, {})", self.width, self.height)
    }
}

impl Interpolate for Size {
    fn interpolate(&self, to: &Size, at: Frac) -> Size {
        Size::new(self.width.interpolate(&to.width, at), self.height.interpolate(&to.height, at))
    }
}

impl Mul<f64> for Size {
    type Output = Size;
    #[inline]
    fn mul(self, rhs: f64) -> Size {
        Size::new(self.width * rhs, self.height * rhs)
    }
}

impl Div<f64> for Size {
    type Output = Size;
    #[inline]
    fn div(self, rhs: f64) -> Size {
        Size::new(self.width / rhs, self.height / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_when_either_dimension_is_zero() {
        assert!(Size::new(0.0, 4.0).is_empty());
        assert!(Size::new(4.0, 0.0).is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }

    #[test]
    fn aspect_fit_and_fill() {
        let s = Size::new(200.0, 100.0);
        let target = Size::new(100.0, 100.0);
        assert_eq!(s.aspect_fit(target), Size::new(100.0, 50.0));
        assert_eq!(s.aspect_fill(target), Size::new(200.0, 100.0));
    }

    #[test]
    fn unconstrained_dimension() {
        let s = Size::new(200.0, 100.0);
        assert_eq!(s.scale_for_aspect_fit(Size::new(Size::NONE, 50.0)), 0.5);
        assert_eq!(s.scale_for_aspect_fill(Size::new(50.0, Size::NONE)), 0.25);
    }
}
