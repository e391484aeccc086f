use std::fmt;

use rand::Rng;

use crate::numeric::{Frac, Interpolate, clamped_to, random_frac};

use super::{Point, Size, Vector};

/// The side of a rectangle that [`Rect::divide`] measures from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RectEdge {
    MinX,
    MinY,
    MaxX,
    MaxY,
}

/// Axis-aligned rectangle (top-left origin).
///
/// A rectangle whose origin is [`Point::INFINITE`] is the *null* rectangle:
/// "no rectangle at all", distinct from a zero-size rectangle at a real
/// location. Null is the identity of [`Rect::union`] and absorbs
/// [`Rect::intersection`].
///
/// Derived accessors read the stored fields as-is. Set operations standardize
/// their operands first.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

macro_rules! anchor {
    ($get:ident, $set:ident, $x:ident, $set_x:ident, $y:ident, $set_y:ident) => {
        #[inline]
        pub fn $get(self) -> Point {
            Point::new(self.$x(), self.$y())
        }

        #[inline]
        pub fn $set(&mut self, p: Point) {
            self.$set_x(p.x);
            self.$set_y(p.y);
        }
    };
}

impl Rect {
    pub const ZERO: Rect = Rect::from_origin_size(Point::ZERO, Size::ZERO);
    pub const NULL: Rect = Rect::from_origin_size(Point::INFINITE, Size::ZERO);
    pub const INFINITE: Rect = Rect::from_origin_size(
        Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        Size::INFINITE,
    );

    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { origin: Point::new(x, y), size: Size::new(width, height) }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn from_min_max(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Smallest rect spanning both points.
    pub fn from_points(p1: Point, p2: Point) -> Self {
        let lo = Point::min(p1, p2);
        let hi = Point::max(p1, p2);
        Self::from_min_max(lo.x, lo.y, hi.x, hi.y)
    }

    // ── edges ──────────────────────────────────────────────────────────

    #[inline]
    pub fn min_x(self) -> f64 {
        self.origin.x
    }

    #[inline]
    pub fn set_min_x(&mut self, v: f64) {
        self.origin.x = v;
    }

    #[inline]
    pub fn mid_x(self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    #[inline]
    pub fn set_mid_x(&mut self, v: f64) {
        self.origin.x = v - self.size.width / 2.0;
    }

    #[inline]
    pub fn max_x(self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Moves the rect so its right edge lands on `v`; width is preserved.
    #[inline]
    pub fn set_max_x(&mut self, v: f64) {
        self.origin.x = v - self.size.width;
    }

    #[inline]
    pub fn min_y(self) -> f64 {
        self.origin.y
    }

    #[inline]
    pub fn set_min_y(&mut self, v: f64) {
        self.origin.y = v;
    }

    #[inline]
    pub fn mid_y(self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    #[inline]
    pub fn set_mid_y(&mut self, v: f64) {
        self.origin.y = v - self.size.height / 2.0;
    }

    #[inline]
    pub fn max_y(self) -> f64 {
        self.origin.y + self.size.height
    }

    #[inline]
    pub fn set_max_y(&mut self, v: f64) {
        self.origin.y = v - self.size.height;
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.size.width
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.size.height
    }

    anchor!(min_x_min_y, set_min_x_min_y, min_x, set_min_x, min_y, set_min_y);
    anchor!(mid_x_min_y, set_mid_x_min_y, mid_x, set_mid_x, min_y, set_min_y);
    anchor!(max_x_min_y, set_max_x_min_y, max_x, set_max_x, min_y, set_min_y);
    anchor!(min_x_mid_y, set_min_x_mid_y, min_x, set_min_x, mid_y, set_mid_y);
    anchor!(mid_x_mid_y, set_mid_x_mid_y, mid_x, set_mid_x, mid_y, set_mid_y);
    anchor!(max_x_mid_y, set_max_x_mid_y, max_x, set_max_x, mid_y, set_mid_y);
    anchor!(min_x_max_y, set_min_x_max_y, min_x, set_min_x, max_y, set_max_y);
    anchor!(mid_x_max_y, set_mid_x_max_y, mid_x, set_mid_x, max_y, set_max_y);
    anchor!(max_x_max_y, set_max_x_max_y, max_x, set_max_x, max_y, set_max_y);

    // ── predicates ─────────────────────────────────────────────────────

    #[inline]
    pub fn is_null(self) -> bool {
        self.origin.x == f64::INFINITY && self.origin.y == f64::INFINITY
    }

    /// Null, or zero width, or zero height.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.is_null() || self.size.is_empty()
    }

    #[inline]
    pub fn is_infinite(self) -> bool {
        self == Rect::INFINITE
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.width.is_finite() && self.size.height.is_finite()
    }

    // ── normalization ──────────────────────────────────────────────────

    /// Flips negative width/height and shifts the origin so the covered
    /// area is unchanged.
    pub fn standardized(self) -> Rect {
        if self.is_null() {
            return self;
        }
        let mut r = self;
        if r.size.width < 0.0 {
            r.origin.x += r.size.width;
            r.size.width = -r.size.width;
        }
        if r.size.height < 0.0 {
            r.origin.y += r.size.height;
            r.size.height = -r.size.height;
        }
        r
    }

    /// Smallest rect with integral edges containing `self`.
    pub fn integral(self) -> Rect {
        if self.is_null() {
            return self;
        }
        let r = self.standardized();
        Rect::from_min_max(
            r.min_x().floor(),
            r.min_y().floor(),
            r.max_x().ceil(),
            r.max_y().ceil(),
        )
    }

    pub fn offset(self, dx: f64, dy: f64) -> Rect {
        if self.is_null() {
            return self;
        }
        Rect::from_origin_size(self.origin + Vector::new(dx, dy), self.size)
    }

    /// Shrinks (or grows, for negative insets) every side. Shrinking past
    /// zero yields [`Rect::NULL`].
    pub fn inset(self, dx: f64, dy: f64) -> Rect {
        if self.is_null() {
            return self;
        }
        let r = self.standardized();
        let width = r.size.width - 2.0 * dx;
        let height = r.size.height - 2.0 * dy;
        if width < 0.0 || height < 0.0 {
            return Rect::NULL;
        }
        Rect::new(r.origin.x + dx, r.origin.y + dy, width, height)
    }

    // ── set operations ─────────────────────────────────────────────────

    pub fn union(self, other: Rect) -> Rect {
        if self.is_null() {
            return other.standardized();
        }
        if other.is_null() {
            return self.standardized();
        }
        let r1 = self.standardized();
        let r2 = other.standardized();
        Rect::from_min_max(
            r1.min_x().min(r2.min_x()),
            r1.min_y().min(r2.min_y()),
            r1.max_x().max(r2.max_x()),
            r1.max_y().max(r2.max_y()),
        )
    }

    /// Overlapping area, or [`Rect::NULL`] when the rects only touch or are
    /// disjoint.
    pub fn intersection(self, other: Rect) -> Rect {
        if self.is_null() || other.is_null() {
            return Rect::NULL;
        }
        let r1 = self.standardized();
        let r2 = other.standardized();
        let (x1, x2) = (r1.min_x().max(r2.min_x()), r1.max_x().min(r2.max_x()));
        let (y1, y2) = (r1.min_y().max(r2.min_y()), r1.max_y().min(r2.max_y()));
        if x2 < x1 || y2 < y1 {
            return Rect::NULL;
        }
        // Shared edge between two rects with area.
        let edge_x = x1 == x2 && r1.size.width > 0.0 && r2.size.width > 0.0;
        let edge_y = y1 == y2 && r1.size.height > 0.0 && r2.size.height > 0.0;
        if edge_x || edge_y {
            return Rect::NULL;
        }
        Rect::from_min_max(x1, y1, x2, y2)
    }

    #[inline]
    pub fn intersects(self, other: Rect) -> bool {
        !self.intersection(other).is_null()
    }

    /// Half-open containment: `[min, max)`. Always false for null or empty
    /// rects.
    pub fn contains_point(self, p: Point) -> bool {
        if self.is_empty() {
            return false;
        }
        let r = self.standardized();
        p.x >= r.min_x() && p.y >= r.min_y() && p.x < r.max_x() && p.y < r.max_y()
    }

    /// `true` when `other` lies entirely within `self`, i.e. when
    /// `self.union(other) == self`.
    pub fn contains_rect(self, other: Rect) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        let r1 = self.standardized();
        let r2 = other.standardized();
        r2.min_x() >= r1.min_x()
            && r2.min_y() >= r1.min_y()
            && r2.max_x() <= r1.max_x()
            && r2.max_y() <= r1.max_y()
    }

    /// Splits into `(slice, remainder)` where `slice` is `distance` thick,
    /// measured from `edge`.
    ///
    /// A non-positive distance yields `(NULL, self)`; a distance covering the
    /// whole extent yields `(self, NULL)`.
    pub fn divide(self, distance: f64, edge: RectEdge) -> (Rect, Rect) {
        if self.is_null() {
            return (Rect::NULL, Rect::NULL);
        }
        let r = self.standardized();
        let extent = match edge {
            RectEdge::MinX | RectEdge::MaxX => r.size.width,
            RectEdge::MinY | RectEdge::MaxY => r.size.height,
        };
        if distance <= 0.0 {
            return (Rect::NULL, r);
        }
        if distance >= extent {
            return (r, Rect::NULL);
        }
        let (x, y, w, h) = (r.origin.x, r.origin.y, r.size.width, r.size.height);
        match edge {
            RectEdge::MinX => {
                (Rect::new(x, y, distance, h), Rect::from_min_max(x + distance, y, r.max_x(), r.max_y()))
            }
            RectEdge::MaxX => {
                let split = r.max_x() - distance;
                (Rect::from_min_max(split, y, r.max_x(), r.max_y()), Rect::new(x, y, split - x, h))
            }
            RectEdge::MinY => {
                (Rect::new(x, y, w, distance), Rect::from_min_max(x, y + distance, r.max_x(), r.max_y()))
            }
            RectEdge::MaxY => {
                let split = r.max_y() - distance;
                (Rect::from_min_max(x, split, r.max_x(), r.max_y()), Rect::new(x, y, w, split - y))
            }
        }
    }

    // ── points ─────────────────────────────────────────────────────────

    /// Closed containment: `[min, max]` on both axes.
    #[inline]
    pub fn is_valid_point(self, p: Point) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }

    /// # Panics
    /// Panics when `p` lies outside `self`.
    #[inline]
    pub fn check_point(self, p: Point) {
        assert!(self.is_valid_point(p), "point {p} out of bounds {self}");
    }

    pub fn clamp_point(self, p: Point) -> Point {
        Point::new(
            clamped_to(p.x, self.min_x(), self.max_x()),
            clamped_to(p.y, self.min_y(), self.max_y()),
        )
    }

    pub fn random_point<R: Rng + ?Sized>(self, rng: &mut R) -> Point {
        Point::new(
            self.min_x() + random_frac(rng) * self.size.width,
            self.min_y() + random_frac(rng) * self.size.height,
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "Rect(null)");
        }
        write!(
            f,
            "Rect({}, {}, {}, {})",
            self.origin.x, self.origin.y, self.size.width, self.size.height
        )
    }
}

impl Interpolate for Rect {
    fn interpolate(&self, to: &Rect, at: Frac) -> Rect {
        Rect::from_origin_size(
            self.origin.interpolate(&to.origin, at),
            self.size.interpolate(&to.size, at),
        )
    }
}
