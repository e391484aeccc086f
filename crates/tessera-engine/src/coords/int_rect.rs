use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;

use super::{IntPoint, IntSize, IntVector, Rect, RectEdge};

/// Integer rectangle over pixel or grid coordinates.
///
/// Unlike [`Rect`], `max_x`/`max_y` name the last covered column/row
/// (`min + size - 1`). The null rectangle has its origin at
/// [`IntPoint::MAX`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntRect {
    pub origin: IntPoint,
    pub size: IntSize,
}

macro_rules! anchor {
    ($get:ident, $set:ident, $x:ident, $set_x:ident, $y:ident, $set_y:ident) => {
        #[inline]
        pub fn $get(self) -> IntPoint {
            IntPoint::new(self.$x(), self.$y())
        }

        #[inline]
        pub fn $set(&mut self, p: IntPoint) {
            self.$set_x(p.x);
            self.$set_y(p.y);
        }
    };
}

impl IntRect {
    pub const ZERO: IntRect = IntRect::from_origin_size(IntPoint::ZERO, IntSize::ZERO);
    pub const NULL: IntRect = IntRect::from_origin_size(IntPoint::MAX, IntSize::ZERO);

    #[inline]
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self { origin: IntPoint::new(x, y), size: IntSize::new(width, height) }
    }

    #[inline]
    pub const fn from_origin_size(origin: IntPoint, size: IntSize) -> Self {
        Self { origin, size }
    }

    /// Rect covering columns `min_x ..= max_x` and rows `min_y ..= max_y`.
    #[inline]
    pub fn from_min_max(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        Self::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1)
    }

    #[inline]
    pub fn min_x(self) -> i64 {
        self.origin.x
    }

    #[inline]
    pub fn set_min_x(&mut self, v: i64) {
        self.origin.x = v;
    }

    #[inline]
    pub fn mid_x(self) -> i64 {
        self.origin.x + self.size.width / 2
    }

    #[inline]
    pub fn set_mid_x(&mut self, v: i64) {
        self.origin.x = v - self.size.width / 2;
    }

    #[inline]
    pub fn max_x(self) -> i64 {
        self.origin.x + self.size.width - 1
    }

    /// Moves the rect so its last column is `v`; width is preserved.
    #[inline]
    pub fn set_max_x(&mut self, v: i64) {
        self.origin.x = v - self.size.width + 1;
    }

    #[inline]
    pub fn min_y(self) -> i64 {
        self.origin.y
    }

    #[inline]
    pub fn set_min_y(&mut self, v: i64) {
        self.origin.y = v;
    }

    #[inline]
    pub fn mid_y(self) -> i64 {
        self.origin.y + self.size.height / 2
    }

    #[inline]
    pub fn set_mid_y(&mut self, v: i64) {
        self.origin.y = v - self.size.height / 2;
    }

    #[inline]
    pub fn max_y(self) -> i64 {
        self.origin.y + self.size.height - 1
    }

    #[inline]
    pub fn set_max_y(&mut self, v: i64) {
        self.origin.y = v - self.size.height + 1;
    }

    #[inline]
    pub fn width(self) -> i64 {
        self.size.width
    }

    #[inline]
    pub fn height(self) -> i64 {
        self.size.height
    }

    // Anchor points; setters move the rect and keep its size.
    anchor!(min_x_min_y, set_min_x_min_y, min_x, set_min_x, min_y, set_min_y);
    anchor!(mid_x_min_y, set_mid_x_min_y, mid_x, set_mid_x, min_y, set_min_y);
    anchor!(max_x_min_y, set_max_x_min_y, max_x, set_max_x, min_y, set_min_y);
    anchor!(min_x_mid_y, set_min_x_mid_y, min_x, set_min_x, mid_y, set_mid_y);
    anchor!(mid_x_mid_y, set_mid_x_mid_y, mid_x, set_mid_x, mid_y, set_mid_y);
    anchor!(max_x_mid_y, set_max_x_mid_y, max_x, set_max_x, mid_y, set_mid_y);
    anchor!(min_x_max_y, set_min_x_max_y, min_x, set_min_x, max_y, set_max_y);
    anchor!(mid_x_max_y, set_mid_x_max_y, mid_x, set_mid_x, max_y, set_max_y);
    anchor!(max_x_max_y, set_max_x_max_y, max_x, set_max_x, max_y, set_max_y);

    #[inline]
    pub fn range_x(self) -> RangeInclusive<i64> {
        self.min_x()..=self.max_x()
    }

    #[inline]
    pub fn range_y(self) -> RangeInclusive<i64> {
        self.min_y()..=self.max_y()
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.origin == IntPoint::MAX
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.is_null() || self.size.is_empty()
    }

    pub fn standardized(self) -> IntRect {
        if self.is_null() {
            return self;
        }
        let mut r = self;
        if r.size.width < 0 {
            r.origin.x += r.size.width;
            r.size.width = -r.size.width;
        }
        if r.size.height < 0 {
            r.origin.y += r.size.height;
            r.size.height = -r.size.height;
        }
        r
    }

    pub fn offset(self, dx: i64, dy: i64) -> IntRect {
        if self.is_null() {
            return self;
        }
        IntRect::from_origin_size(self.origin + IntVector::new(dx, dy), self.size)
    }

    pub fn inset(self, dx: i64, dy: i64) -> IntRect {
        if self.is_null() {
            return self;
        }
        let r = self.standardized();
        let width = r.size.width - 2 * dx;
        let height = r.size.height - 2 * dy;
        if width < 0 || height < 0 {
            return IntRect::NULL;
        }
        IntRect::new(r.origin.x + dx, r.origin.y + dy, width, height)
    }

    // Set operations work on exclusive ends (`min + size`) so they stay exact.

    pub fn union(self, other: IntRect) -> IntRect {
        if self.is_null() {
            return other.standardized();
        }
        if other.is_null() {
            return self.standardized();
        }
        let r1 = self.standardized();
        let r2 = other.standardized();
        let x1 = r1.min_x().min(r2.min_x());
        let y1 = r1.min_y().min(r2.min_y());
        let x2 = (r1.min_x() + r1.width()).max(r2.min_x() + r2.width());
        let y2 = (r1.min_y() + r1.height()).max(r2.min_y() + r2.height());
        IntRect::new(x1, y1, x2 - x1, y2 - y1)
    }

    pub fn intersection(self, other: IntRect) -> IntRect {
        if self.is_null() || other.is_null() {
            return IntRect::NULL;
        }
        let r1 = self.standardized();
        let r2 = other.standardized();
        let x1 = r1.min_x().max(r2.min_x());
        let y1 = r1.min_y().max(r2.min_y());
        let x2 = (r1.min_x() + r1.width()).min(r2.min_x() + r2.width());
        let y2 = (r1.min_y() + r1.height()).min(r2.min_y() + r2.height());
        if x2 <= x1 || y2 <= y1 {
            return IntRect::NULL;
        }
        IntRect::new(x1, y1, x2 - x1, y2 - y1)
    }

    #[inline]
    pub fn intersects(self, other: IntRect) -> bool {
        !self.intersection(other).is_null()
    }

    /// `true` when `p` names a covered cell. Always false for null or empty
    /// rects.
    pub fn contains_point(self, p: IntPoint) -> bool {
        if self.is_empty() {
            return false;
        }
        let r = self.standardized();
        p.x >= r.min_x() && p.x <= r.max_x() && p.y >= r.min_y() && p.y <= r.max_y()
    }

    pub fn contains_rect(self, other: IntRect) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        let r1 = self.standardized();
        let r2 = other.standardized();
        r2.min_x() >= r1.min_x()
            && r2.min_y() >= r1.min_y()
            && r2.min_x() + r2.width() <= r1.min_x() + r1.width()
            && r2.min_y() + r2.height() <= r1.min_y() + r1.height()
    }

    /// Splits into `(slice, remainder)`, `distance` cells thick from `edge`.
    pub fn divide(self, distance: i64, edge: RectEdge) -> (IntRect, IntRect) {
        if self.is_null() {
            return (IntRect::NULL, IntRect::NULL);
        }
        let r = self.standardized();
        let extent = match edge {
            RectEdge::MinX | RectEdge::MaxX => r.width(),
            RectEdge::MinY | RectEdge::MaxY => r.height(),
        };
        if distance <= 0 {
            return (IntRect::NULL, r);
        }
        if distance >= extent {
            return (r, IntRect::NULL);
        }
        let (x, y, w, h) = (r.origin.x, r.origin.y, r.width(), r.height());
        let rest = extent - distance;
        match edge {
            RectEdge::MinX => (IntRect::new(x, y, distance, h), IntRect::new(x + distance, y, rest, h)),
            RectEdge::MaxX => (IntRect::new(x + rest, y, distance, h), IntRect::new(x, y, rest, h)),
            RectEdge::MinY => (IntRect::new(x, y, w, distance), IntRect::new(x, y + distance, w, rest)),
            RectEdge::MaxY => (IntRect::new(x, y + rest, w, distance), IntRect::new(x, y, w, rest)),
        }
    }

    #[inline]
    pub fn is_valid_point(self, p: IntPoint) -> bool {
        self.range_x().contains(&p.x) && self.range_y().contains(&p.y)
    }

    /// # Panics
    /// Panics when `p` lies outside `self`.
    #[inline]
    pub fn check_point(self, p: IntPoint) {
        assert!(self.is_valid_point(p), "point {p} out of bounds {self}");
    }

    pub fn clamp_point(self, p: IntPoint) -> IntPoint {
        IntPoint::new(
            p.x.clamp(self.min_x(), self.max_x().max(self.min_x())),
            p.y.clamp(self.min_y(), self.max_y().max(self.min_y())),
        )
    }

    /// A uniformly chosen covered cell, or `None` for an empty rect.
    pub fn random_point<R: Rng + ?Sized>(self, rng: &mut R) -> Option<IntPoint> {
        if self.is_empty() {
            return None;
        }
        let r = self.standardized();
        Some(IntPoint::new(rng.gen_range(r.range_x()), rng.gen_range(r.range_y())))
    }

    /// Every covered cell in row-major order.
    pub fn points(self) -> impl Iterator<Item = IntPoint> {
        let r = if self.is_empty() { IntRect::ZERO } else { self.standardized() };
        let xs = r.range_x();
        r.range_y().flat_map(move |y| xs.clone().map(move |x| IntPoint::new(x, y)))
    }
}

/// Truncates toward zero.
impl From<Rect> for IntRect {
    fn from(r: Rect) -> Self {
        if r.is_null() {
            return IntRect::NULL;
        }
        IntRect::new(r.origin.x as i64, r.origin.y as i64, r.size.width as i64, r.size.height as i64)
    }
}

impl From<IntRect> for Rect {
    fn from(r: IntRect) -> Self {
        if r.is_null() {
            return Rect::NULL;
        }
        Rect::new(r.origin.x as f64, r.origin.y as f64, r.size.width as f64, r.size.height as f64)
    }
}

impl fmt::Display for IntRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "IntRect(null)");
        }
        write!(
            f,
            "IntRect({}, {}, {}, {})",
            self.origin.x, self.origin.y, self.size.width, self.size.height
        )
    }
}
