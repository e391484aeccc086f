use std::fmt;

use super::{Angle, Point, Vector};

/// 2×3 affine transform.
///
/// Maps `(x, y)` to `(a·x + c·y + tx, b·x + d·y + ty)`.
/// `t1.concatenating(t2)` applies `t1` first, then `t2`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    pub fn rotation(theta: Angle) -> Self {
        let (s, c) = theta.radians.sin_cos();
        Self::new(c, s, -s, c, 0.0, 0.0)
    }

    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// `self` followed by `other`.
    pub fn concatenating(&self, other: &Transform) -> Transform {
        Transform::new(
            self.a * other.a + self.b * other.c,
            self.a * other.b + self.b * other.d,
            self.c * other.a + self.d * other.c,
            self.c * other.b + self.d * other.d,
            self.tx * other.a + self.ty * other.c + other.tx,
            self.tx * other.b + self.ty * other.d + other.ty,
        )
    }

    /// Rotation applied before `self`.
    pub fn rotated(&self, theta: Angle) -> Transform {
        Transform::rotation(theta).concatenating(self)
    }

    /// Scale applied before `self`.
    pub fn scaled_by(&self, sx: f64, sy: f64) -> Transform {
        Transform::scale(sx, sy).concatenating(self)
    }

    /// Translation applied before `self`.
    pub fn translated_by(&self, v: Vector) -> Transform {
        Transform::translation(v.dx, v.dy).concatenating(self)
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    pub fn try_inverted(&self) -> Option<Transform> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        Some(Transform::new(
            self.d / det,
            -self.b / det,
            -self.c / det,
            self.a / det,
            (self.c * self.ty - self.d * self.tx) / det,
            (self.b * self.tx - self.a * self.ty) / det,
        ))
    }

    /// # Panics
    /// Panics when the transform is singular.
    pub fn inverted(&self) -> Transform {
        match self.try_inverted() {
            Some(t) => t,
            None => panic!("cannot invert singular transform {self}"),
        }
    }

    #[inline]
    pub fn apply_to_point(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    /// Linear part only; translation does not move vectors.
    #[inline]
    pub fn apply_to_vector(&self, v: Vector) -> Vector {
        Vector::new(self.a * v.dx + self.c * v.dy, self.b * v.dx + self.d * v.dy)
    }

    /// Largest factor by which the transform stretches a unit length.
    pub fn max_scale(&self) -> f64 {
        let sx = self.a.hypot(self.b);
        let sy = self.c.hypot(self.d);
        sx.max(sy)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transform(a: {}, b: {}, c: {}, d: {}, tx: {}, ty: {})",
            self.a, self.b, self.c, self.d, self.tx, self.ty
        )
    }
}
