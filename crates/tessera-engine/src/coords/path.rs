use super::{Angle, Point, Rect, Transform, Vector};

/// One recorded path command.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathElement {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { control: Point, to: Point },
    CurveTo { control1: Point, control2: Point, to: Point },
    Close,
}

impl PathElement {
    fn map_points(self, mut f: impl FnMut(Point) -> Point) -> PathElement {
        match self {
            PathElement::MoveTo(p) => PathElement::MoveTo(f(p)),
            PathElement::LineTo(p) => PathElement::LineTo(f(p)),
            PathElement::QuadTo { control, to } => PathElement::QuadTo { control: f(control), to: f(to) },
            PathElement::CurveTo { control1, control2, to } => PathElement::CurveTo {
                control1: f(control1),
                control2: f(control2),
                to: f(to),
            },
            PathElement::Close => PathElement::Close,
        }
    }
}

/// A flattened subpath.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub closed: bool,
}

/// A vector path: a recorded list of move/line/curve/close commands.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    elements: Vec<PathElement>,
}

/// Control-point distance used by the cubic approximation of a quarter ellipse.
const KAPPA: f64 = 0.552_284_749_830_793_4;

const MAX_CURVE_SEGMENTS: usize = 256;

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements(elements: Vec<PathElement>) -> Self {
        Self { elements }
    }

    /// Closed rectangle, clockwise on screen starting at `min_x_min_y`.
    pub fn rect(rect: Rect) -> Self {
        let r = rect.standardized();
        let mut path = Path::new();
        path.move_to(r.min_x_min_y())
            .line_to(r.max_x_min_y())
            .line_to(r.max_x_max_y())
            .line_to(r.min_x_max_y())
            .close();
        path
    }

    /// Ellipse inscribed in `rect`, built from four cubic segments.
    pub fn ellipse(rect: Rect) -> Self {
        let r = rect.standardized();
        let (cx, cy) = (r.mid_x(), r.mid_y());
        let (rx, ry) = (r.width() / 2.0, r.height() / 2.0);
        let (ox, oy) = (rx * KAPPA, ry * KAPPA);
        let mut path = Path::new();
        path.move_to(Point::new(cx + rx, cy))
            .curve_to(Point::new(cx + rx, cy + oy), Point::new(cx + ox, cy + ry), Point::new(cx, cy + ry))
            .curve_to(Point::new(cx - ox, cy + ry), Point::new(cx - rx, cy + oy), Point::new(cx - rx, cy))
            .curve_to(Point::new(cx - rx, cy - oy), Point::new(cx - ox, cy - ry), Point::new(cx, cy - ry))
            .curve_to(Point::new(cx + ox, cy - ry), Point::new(cx + rx, cy - oy), Point::new(cx + rx, cy))
            .close();
        path
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.elements.push(PathElement::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.elements.push(PathElement::LineTo(p));
        self
    }

    /// Moves to the first point, then draws lines through the rest.
    pub fn lines(&mut self, points: &[Point]) -> &mut Self {
        if let Some((first, rest)) = points.split_first() {
            self.move_to(*first);
            for p in rest {
                self.line_to(*p);
            }
        }
        self
    }

    pub fn quad_to(&mut self, control: Point, to: Point) -> &mut Self {
        self.elements.push(PathElement::QuadTo { control, to });
        self
    }

    pub fn curve_to(&mut self, control1: Point, control2: Point, to: Point) -> &mut Self {
        self.elements.push(PathElement::CurveTo { control1, control2, to });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.elements.push(PathElement::Close);
        self
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn transformed(&self, t: &Transform) -> Path {
        Path {
            elements: self.elements.iter().map(|e| e.map_points(|p| t.apply_to_point(p))).collect(),
        }
    }

    pub fn scaled(&self, s: Vector) -> Path {
        self.transformed(&Transform::scale(s.dx, s.dy))
    }

    pub fn translated(&self, v: Vector) -> Path {
        self.transformed(&Transform::translation(v.dx, v.dy))
    }

    /// Rotation about the origin.
    pub fn rotated(&self, theta: Angle) -> Path {
        self.transformed(&Transform::rotation(theta))
    }

    /// Bounds of every recorded point including control points, or
    /// [`Rect::NULL`] for a path with no points.
    pub fn bounding_rect(&self) -> Rect {
        let mut lo = Point::INFINITE;
        let mut hi = -Point::INFINITE;
        let mut any = false;
        for e in &self.elements {
            e.map_points(|p| {
                lo = Point::min(lo, p);
                hi = Point::max(hi, p);
                any = true;
                p
            });
        }
        if any { Rect::from_points(lo, hi) } else { Rect::NULL }
    }

    /// Flattens curves into line segments whose deviation from the true
    /// curve stays within `tolerance`.
    ///
    /// Each `MoveTo` starts a new polyline. Drawing commands with no current
    /// point start one implicitly. After `Close`, the next drawing command
    /// starts from the closed subpath's first point.
    pub fn flatten(&self, tolerance: f64) -> Vec<Polyline> {
        let tolerance = tolerance.max(1e-6);
        let mut out: Vec<Polyline> = Vec::new();
        let mut current: Option<Polyline> = None;
        let mut start = Point::ZERO;

        fn begin(current: &mut Option<Polyline>, out: &mut Vec<Polyline>, at: Point) {
            if let Some(done) = current.take() {
                if done.points.len() > 1 {
                    out.push(done);
                }
            }
            *current = Some(Polyline { points: vec![at], closed: false });
        }

        for e in &self.elements {
            match *e {
                PathElement::MoveTo(p) => {
                    begin(&mut current, &mut out, p);
                    start = p;
                }
                PathElement::Close => {
                    if let Some(mut done) = current.take() {
                        done.closed = true;
                        if done.points.len() > 1 {
                            out.push(done);
                        }
                    }
                }
                _ => {
                    if current.is_none() {
                        begin(&mut current, &mut out, start);
                    }
                    let Some(poly) = current.as_mut() else { continue };
                    let from = poly.points[poly.points.len() - 1];
                    match *e {
                        PathElement::LineTo(p) => poly.points.push(p),
                        PathElement::QuadTo { control, to } => {
                            let dd = (from - control * 2.0 + Vector::from(to)).magnitude();
                            let n = segment_count(dd / 4.0, tolerance);
                            for i in 1..=n {
                                let t = i as f64 / n as f64;
                                let mt = 1.0 - t;
                                poly.points.push(Point::new(
                                    mt * mt * from.x + 2.0 * mt * t * control.x + t * t * to.x,
                                    mt * mt * from.y + 2.0 * mt * t * control.y + t * t * to.y,
                                ));
                            }
                        }
                        PathElement::CurveTo { control1, control2, to } => {
                            let d1 = (from - control1 * 2.0 + Vector::from(control2)).magnitude();
                            let d2 = (control1 - control2 * 2.0 + Vector::from(to)).magnitude();
                            let n = segment_count(0.75 * d1.max(d2), tolerance);
                            for i in 1..=n {
                                let t = i as f64 / n as f64;
                                let mt = 1.0 - t;
                                let (w0, w1, w2, w3) = (mt * mt * mt, 3.0 * mt * mt * t, 3.0 * mt * t * t, t * t * t);
                                poly.points.push(Point::new(
                                    w0 * from.x + w1 * control1.x + w2 * control2.x + w3 * to.x,
                                    w0 * from.y + w1 * control1.y + w2 * control2.y + w3 * to.y,
                                ));
                            }
                        }
                        PathElement::MoveTo(_) | PathElement::Close => {}
                    }
                }
            }
        }
        if let Some(done) = current {
            if done.points.len() > 1 {
                out.push(done);
            }
        }
        out
    }
}

fn segment_count(deviation: f64, tolerance: f64) -> usize {
    let n = (deviation / tolerance).sqrt().ceil();
    if n.is_finite() { (n as usize).clamp(1, MAX_CURVE_SEGMENTS) } else { 1 }
}

impl From<Vec<PathElement>> for Path {
    fn from(elements: Vec<PathElement>) -> Self {
        Path::from_elements(elements)
    }
}

impl FromIterator<PathElement> for Path {
    fn from_iter<I: IntoIterator<Item = PathElement>>(iter: I) -> Self {
        Path::from_elements(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_path_flattens_to_closed_quad() {
        let polys = Path::rect(Rect::new(1.0, 2.0, 3.0, 4.0)).flatten(0.25);
        assert_eq!(polys.len(), 1);
        assert!(polys[0].closed);
        assert_eq!(
            polys[0].points,
            vec![Point::new(1.0, 2.0), Point::new(4.0, 2.0), Point::new(4.0, 6.0), Point::new(1.0, 6.0)]
        );
    }

    #[test]
    fn move_to_starts_new_subpath() {
        let mut path = Path::new();
        path.move_to(Point::ZERO)
            .line_to(Point::new(1.0, 0.0))
            .move_to(Point::new(5.0, 5.0))
            .line_to(Point::new(6.0, 5.0));
        let polys = path.flatten(0.25);
        assert_eq!(polys.len(), 2);
        assert!(!polys[0].closed && !polys[1].closed);
    }

    #[test]
    fn lone_move_to_produces_nothing() {
        let mut path = Path::new();
        path.move_to(Point::ZERO);
        assert!(path.flatten(0.25).is_empty());
    }

    #[test]
    fn curves_stay_near_the_ellipse() {
        let polys = Path::ellipse(Rect::new(0.0, 0.0, 20.0, 20.0)).flatten(0.1);
        assert_eq!(polys.len(), 1);
        let center = Point::new(10.0, 10.0);
        for p in &polys[0].points {
            let r = p.distance_to(center);
            assert!((r - 10.0).abs() < 0.1, "radius {r}");
        }
        assert!(polys[0].points.len() > 8);
    }

    #[test]
    fn quad_endpoints_are_exact() {
        let mut path = Path::new();
        path.move_to(Point::ZERO).quad_to(Point::new(5.0, 10.0), Point::new(10.0, 0.0));
        let polys = path.flatten(0.5);
        assert_eq!(polys[0].points.first(), Some(&Point::ZERO));
        assert_eq!(polys[0].points.last(), Some(&Point::new(10.0, 0.0)));
    }

    #[test]
    fn bounding_rect_covers_control_points() {
        let mut path = Path::new();
        path.move_to(Point::new(1.0, 1.0)).quad_to(Point::new(5.0, -3.0), Point::new(9.0, 1.0));
        assert_eq!(path.bounding_rect(), Rect::new(1.0, -3.0, 8.0, 4.0));
        assert!(Path::new().bounding_rect().is_null());
    }

    #[test]
    fn translate_moves_every_point() {
        let path = Path::rect(Rect::new(0.0, 0.0, 2.0, 2.0)).translated(Vector::new(3.0, 4.0));
        assert_eq!(path.bounding_rect(), Rect::new(3.0, 4.0, 2.0, 2.0));
    }
}
