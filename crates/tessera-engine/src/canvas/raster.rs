//! Path coverage.
//!
//! A [`Rasterizer`] turns a path into a per-pixel [`CoverageMask`] in device
//! space. The canvas owns the compositing step, so a rasterizer never touches
//! pixel memory.

use std::f64::consts::TAU;

use crate::coords::{Path, Point, Polyline, Transform, Vector};

use super::{FillRule, LineCap, LineJoin, StrokeStyle};

/// Per-pixel coverage in `0 ..= 1`, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageMask {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl CoverageMask {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, data: vec![0.0; width * height] }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn coverage_at(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.width + x]
    }

    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&c| c <= 0.0)
    }

    /// Pixels with non-zero coverage as `(x, y, coverage)`.
    pub fn covered(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0.0)
            .map(move |(i, &c)| (i % self.width, i / self.width, c))
    }

    fn row_mut(&mut self, y: usize) -> &mut [f64] {
        &mut self.data[y * self.width..(y + 1) * self.width]
    }
}

/// Backend that computes path coverage.
pub trait Rasterizer {
    /// Coverage of the interior of `path` after mapping it through
    /// `transform`. Open subpaths are closed implicitly.
    fn fill_coverage(
        &self,
        path: &Path,
        transform: &Transform,
        fill_rule: FillRule,
        width: usize,
        height: usize,
    ) -> CoverageMask;

    /// Coverage of the outline of `path` stroked with `style` in user space,
    /// then mapped through `transform`. Only the geometric fields of `style`
    /// are used.
    fn stroke_coverage(
        &self,
        path: &Path,
        transform: &Transform,
        style: &StrokeStyle,
        width: usize,
        height: usize,
    ) -> CoverageMask;
}

/// Scanline rasterizer with vertical supersampling and exact horizontal
/// span coverage.
///
/// Strokes are outlined as a union of segment quads, caps and joins, each
/// wound the same way and filled with the non-zero rule.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SoftwareRasterizer {
    /// Sample rows per pixel row.
    pub subsamples: usize,
    /// Largest allowed distance, in device pixels, between a curve and its
    /// flattened polyline.
    pub tolerance: f64,
}

impl Default for SoftwareRasterizer {
    fn default() -> Self {
        Self { subsamples: 4, tolerance: 0.1 }
    }
}

impl SoftwareRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    fn fill_polygons(&self, polygons: &[Vec<Point>], fill_rule: FillRule, width: usize, height: usize) -> CoverageMask {
        let mut mask = CoverageMask::new(width, height);
        let edges: Vec<(Point, Point)> = polygons
            .iter()
            .filter(|poly| poly.len() > 2)
            .flat_map(|poly| poly.iter().zip(poly.iter().cycle().skip(1)).map(|(a, b)| (*a, *b)))
            .filter(|(a, b)| a.y != b.y && a.is_finite() && b.is_finite())
            .collect();
        if edges.is_empty() {
            return mask;
        }

        let (min_y, max_y) = edges
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (a, b)| (lo.min(a.y).min(b.y), hi.max(a.y).max(b.y)));
        let first_row = min_y.floor().max(0.0) as usize;
        let last_row = (max_y.ceil().max(0.0) as usize).min(height);

        let samples = self.subsamples.max(1);
        let weight = 1.0 / samples as f64;
        let mut crossings: Vec<(f64, i32)> = Vec::new();

        for y in first_row..last_row {
            let row = mask.row_mut(y);
            for s in 0..samples {
                let sy = y as f64 + (s as f64 + 0.5) * weight;
                crossings.clear();
                for (a, b) in &edges {
                    let (lo, hi, winding) = if a.y < b.y { (a, b, 1) } else { (b, a, -1) };
                    if sy >= lo.y && sy < hi.y {
                        let x = lo.x + (sy - lo.y) * (hi.x - lo.x) / (hi.y - lo.y);
                        crossings.push((x, winding));
                    }
                }
                crossings.sort_by(|l, r| l.0.total_cmp(&r.0));

                let mut winding = 0;
                for pair in crossings.windows(2) {
                    winding += pair[0].1;
                    let inside = match fill_rule {
                        FillRule::NonZero => winding != 0,
                        FillRule::EvenOdd => winding & 1 != 0,
                    };
                    if inside {
                        add_span(row, pair[0].0, pair[1].0, weight);
                    }
                }
            }
            for c in row.iter_mut() {
                *c = c.min(1.0);
            }
        }
        mask
    }
}

/// Adds the horizontal overlap of `[x0, x1)` with each pixel, scaled by `weight`.
fn add_span(row: &mut [f64], x0: f64, x1: f64, weight: f64) {
    let width = row.len() as f64;
    let (x0, x1) = (x0.clamp(0.0, width), x1.clamp(0.0, width));
    if x1 <= x0 {
        return;
    }
    let first = x0.floor() as usize;
    let last = (x1.ceil() as usize).min(row.len());
    for (px, c) in row.iter_mut().enumerate().take(last).skip(first) {
        let left = px as f64;
        let overlap = x1.min(left + 1.0) - x0.max(left);
        if overlap > 0.0 {
            *c += overlap * weight;
        }
    }
}

impl Rasterizer for SoftwareRasterizer {
    fn fill_coverage(
        &self,
        path: &Path,
        transform: &Transform,
        fill_rule: FillRule,
        width: usize,
        height: usize,
    ) -> CoverageMask {
        let polygons: Vec<Vec<Point>> =
            path.transformed(transform).flatten(self.tolerance).into_iter().map(|p| p.points).collect();
        self.fill_polygons(&polygons, fill_rule, width, height)
    }

    fn stroke_coverage(
        &self,
        path: &Path,
        transform: &Transform,
        style: &StrokeStyle,
        width: usize,
        height: usize,
    ) -> CoverageMask {
        if !(style.line_width > 0.0) {
            return CoverageMask::new(width, height);
        }
        let tolerance = self.tolerance / transform.max_scale().max(1e-9);
        let outliner = Outliner { half_width: style.line_width / 2.0, style, tolerance };
        let mut polygons = Vec::new();
        for polyline in path.flatten(tolerance) {
            outliner.outline(&polyline, &mut polygons);
        }
        for poly in &mut polygons {
            for p in poly.iter_mut() {
                *p = transform.apply_to_point(*p);
            }
            orient_positive(poly);
        }
        self.fill_polygons(&polygons, FillRule::NonZero, width, height)
    }
}

struct Outliner<'a> {
    half_width: f64,
    style: &'a StrokeStyle,
    tolerance: f64,
}

impl Outliner<'_> {
    fn outline(&self, polyline: &Polyline, out: &mut Vec<Vec<Point>>) {
        let mut points: Vec<Point> = Vec::with_capacity(polyline.points.len());
        for &p in &polyline.points {
            if points.last() != Some(&p) {
                points.push(p);
            }
        }
        if polyline.closed && points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        match points.as_slice() {
            [] => return,
            [p] => {
                self.dot(*p, out);
                return;
            }
            _ => {}
        }

        let closed = polyline.closed && points.len() > 2;
        let n = points.len();
        let segment_count = if closed { n } else { n - 1 };
        let direction = |i: usize| (points[(i + 1) % n] - points[i]).normalized();

        for i in 0..segment_count {
            let (p0, p1) = (points[i], points[(i + 1) % n]);
            let offset = normal(direction(i)) * self.half_width;
            out.push(vec![p0 + offset, p1 + offset, p1 - offset, p0 - offset]);
        }

        let join_range = if closed { 0..n } else { 1..n - 1 };
        for i in join_range {
            let incoming = direction((i + n - 1) % n);
            let outgoing = direction(i);
            self.join(points[i], incoming, outgoing, out);
        }

        if !closed {
            self.cap(points[0], -direction(0), out);
            self.cap(points[n - 1], direction(n - 2), out);
        }
    }

    /// A zero-length subpath: round and square caps still mark the point.
    fn dot(&self, p: Point, out: &mut Vec<Vec<Point>>) {
        let hw = self.half_width;
        match self.style.line_cap {
            LineCap::Butt => {}
            LineCap::Round => out.push(self.circle(p)),
            LineCap::Square => out.push(vec![
                Point::new(p.x - hw, p.y - hw),
                Point::new(p.x + hw, p.y - hw),
                Point::new(p.x + hw, p.y + hw),
                Point::new(p.x - hw, p.y + hw),
            ]),
        }
    }

    /// Cap at `p`, where `outward` points away from the stroke.
    fn cap(&self, p: Point, outward: Vector, out: &mut Vec<Vec<Point>>) {
        match self.style.line_cap {
            LineCap::Butt => {}
            LineCap::Round => out.push(self.circle(p)),
            LineCap::Square => {
                let side = normal(outward) * self.half_width;
                let ahead = outward * self.half_width;
                out.push(vec![p + side, p + side + ahead, p - side + ahead, p - side]);
            }
        }
    }

    fn join(&self, v: Point, incoming: Vector, outgoing: Vector, out: &mut Vec<Vec<Point>>) {
        let cross = incoming.cross(outgoing);
        let dot = incoming.dot(outgoing);
        if cross.abs() < 1e-12 && dot > 0.0 {
            return;
        }
        if self.style.line_join == LineJoin::Round {
            out.push(self.circle(v));
            return;
        }
        // The outer side of the turn.
        let side = if cross > 0.0 { -1.0 } else { 1.0 };
        let n1 = normal(incoming) * side;
        let n2 = normal(outgoing) * side;
        let a = v + n1 * self.half_width;
        let b = v + n2 * self.half_width;

        if self.style.line_join == LineJoin::Miter {
            let cos_half = ((1.0 + dot) / 2.0).max(0.0).sqrt();
            if cos_half > 1e-9 && 1.0 / cos_half <= self.style.miter_limit {
                if let Some(bisector) = (n1 + n2).try_normalized() {
                    let tip = v + bisector * (self.half_width / cos_half);
                    out.push(vec![v, a, tip, b]);
                    return;
                }
            }
        }
        out.push(vec![v, a, b]);
    }

    fn circle(&self, center: Point) -> Vec<Point> {
        let r = self.half_width;
        let step = if self.tolerance < r { 2.0 * (1.0 - self.tolerance / r).acos() } else { TAU };
        let count = ((TAU / step).ceil() as usize).clamp(8, 256);
        (0..count)
            .map(|i| {
                let theta = TAU * i as f64 / count as f64;
                Point::new(center.x + r * theta.cos(), center.y + r * theta.sin())
            })
            .collect()
    }
}

/// Unit normal, a quarter turn from `d`.
#[inline]
fn normal(d: Vector) -> Vector {
    Vector::new(-d.dy, d.dx)
}

fn signed_area(poly: &[Point]) -> f64 {
    poly.iter()
        .zip(poly.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum::<f64>()
        / 2.0
}

fn orient_positive(poly: &mut [Point]) {
    if signed_area(poly) < 0.0 {
        poly.reverse();
    }
}
