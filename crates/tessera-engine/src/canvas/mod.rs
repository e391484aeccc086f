//! Directly addressable RGBA8 canvas.
//!
//! - `Canvas`: owned pixel surface with bounds-checked pixel access
//! - vector drawing (lines, paths, gradients) through a pluggable `Rasterizer`
//! - graphics state save/restore around every drawing call
//! - a memoised `image::RgbaImage` snapshot invalidated by every mutation

mod buffer;
mod composite;
mod error;
mod raster;
mod style;

pub use buffer::{PAGE_SIZE, Pixel, PixelBuffer, ROW_ALIGNMENT, align_up};
pub use composite::composite;
pub use error::CanvasError;
pub use raster::{CoverageMask, Rasterizer, SoftwareRasterizer};
pub use style::{BlendMode, FillRule, FillStyle, GraphicsState, LineCap, LineJoin, StrokeStyle};

use std::fmt;
use std::ops::{Bound, RangeBounds, RangeInclusive};

use image::{Rgba, RgbaImage};

use crate::coords::{IntPoint, IntRect, IntSize, Path, Point, Rect, Transform};
use crate::numeric::snapped;
use crate::paint::{Color, Gradient};

/// A fixed-size RGBA8 drawing surface.
///
/// Pixels are stored with straight alpha. [`Canvas::color_at`] returns what
/// [`Canvas::set_point`] wrote, up to 8-bit quantisation.
pub struct Canvas {
    size: IntSize,
    buffer: PixelBuffer,
    clear_color: Option<Color>,
    state: GraphicsState,
    saved_states: Vec<GraphicsState>,
    rasterizer: Box<dyn Rasterizer>,
    image: Option<RgbaImage>,
}

impl Canvas {
    pub fn new(size: IntSize, clear_color: Option<Color>) -> Result<Self, CanvasError> {
        Self::with_rasterizer(size, clear_color, Box::new(SoftwareRasterizer::default()))
    }

    pub fn with_rasterizer(
        size: IntSize,
        clear_color: Option<Color>,
        rasterizer: Box<dyn Rasterizer>,
    ) -> Result<Self, CanvasError> {
        if size.width < 1 || size.height < 1 {
            return Err(CanvasError::InvalidSize { width: size.width, height: size.height });
        }
        let buffer = PixelBuffer::new(size.width as usize, size.height as usize)?;
        log::debug!(
            "canvas: allocated {}x{} stride={} bytes={}",
            size.width,
            size.height,
            buffer.bytes_per_row(),
            buffer.allocation_size()
        );
        Ok(Self {
            size,
            buffer,
            clear_color,
            state: GraphicsState::default(),
            saved_states: Vec::new(),
            rasterizer,
            image: None,
        })
    }

    #[inline]
    pub fn size(&self) -> IntSize {
        self.size
    }

    #[inline]
    pub fn bounds(&self) -> IntRect {
        self.size.bounds()
    }

    #[inline]
    pub fn bytes_per_row(&self) -> usize {
        self.buffer.bytes_per_row()
    }

    /// Raw strided pixel rows: R, G, B, A bytes per pixel, `bytes_per_row`
    /// bytes per row.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    #[inline]
    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, clear_color: Option<Color>) {
        self.clear_color = clear_color;
    }

    pub fn set_rasterizer(&mut self, rasterizer: Box<dyn Rasterizer>) {
        self.rasterizer = rasterizer;
    }

    // ── pixels ────────────────────────────────────────────────────────────

    /// Writes one pixel, replacing whatever was there.
    ///
    /// Panics when `point` is outside [`Canvas::bounds`].
    pub fn set_point(&mut self, point: IntPoint, color: Color) {
        self.bounds().check_point(point);
        self.invalidate_image();
        self.buffer.set_pixel(point.x as usize, point.y as usize, Pixel::from_color(color));
    }

    /// Panics when `point` is outside [`Canvas::bounds`].
    pub fn color_at(&self, point: IntPoint) -> Color {
        self.bounds().check_point(point);
        self.buffer.pixel(point.x as usize, point.y as usize).to_color()
    }

    pub fn try_color_at(&self, point: IntPoint) -> Option<Color> {
        self.bounds()
            .contains_point(point)
            .then(|| self.buffer.pixel(point.x as usize, point.y as usize).to_color())
    }

    /// [`Canvas::set_point`] at the pixel containing `point`.
    pub fn set_point_f(&mut self, point: Point, color: Color) {
        self.set_point(self.pixel_for(point), color);
    }

    /// [`Canvas::color_at`] for the pixel containing `point`.
    pub fn color_at_f(&self, point: Point) -> Color {
        self.color_at(self.pixel_for(point))
    }

    fn pixel_for(&self, point: Point) -> IntPoint {
        let frame = Rect::from(self.bounds());
        assert!(frame.contains_point(point), "point {point} out of bounds {frame}");
        IntPoint::from(point)
    }

    // ── clearing ──────────────────────────────────────────────────────────

    /// Resets every pixel to transparent black, then fills with `color`
    /// unless it is [`Color::CLEAR`].
    pub fn clear_to(&mut self, color: Color) {
        self.invalidate_image();
        self.buffer.zero();
        if color != Color::CLEAR {
            self.buffer.fill(Pixel::from_color(color));
        }
    }

    /// [`Canvas::clear_to`] the clear color; does nothing without one.
    pub fn clear(&mut self) {
        if let Some(color) = self.clear_color {
            self.clear_to(color);
        }
    }

    // ── graphics state ────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> &GraphicsState {
        &self.state
    }

    pub fn save_state(&mut self) {
        self.saved_states.push(self.state);
    }

    /// Panics without a matching [`Canvas::save_state`].
    pub fn restore_state(&mut self) {
        match self.saved_states.pop() {
            Some(state) => self.state = state,
            None => panic!("restore_state without a matching save_state"),
        }
    }

    #[inline]
    pub fn transform(&self) -> Transform {
        self.state.transform
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.state.transform = transform;
    }

    /// Applies `transform` to user space before the current transform.
    pub fn concat_transform(&mut self, transform: &Transform) {
        self.state.transform = transform.concatenating(&self.state.transform);
    }

    pub fn set_stroke_style(&mut self, stroke: StrokeStyle) {
        self.state.stroke = stroke;
    }

    pub fn set_fill_style(&mut self, fill: FillStyle) {
        self.state.fill = fill;
    }

    // ── vector drawing ────────────────────────────────────────────────────

    /// Strokes `path` with the current stroke style.
    pub fn stroke(&mut self, path: &Path) {
        let (w, h) = self.extent();
        let style = self.state.stroke;
        let mask = self.rasterizer.stroke_coverage(path, &self.state.transform, &style, w, h);
        self.composite_mask(&mask, |_, _| style.color, style.blend_mode);
    }

    /// Fills `path` with the current fill style.
    pub fn fill(&mut self, path: &Path) {
        let (w, h) = self.extent();
        let style = self.state.fill;
        let mask = self.rasterizer.fill_coverage(path, &self.state.transform, style.fill_rule, w, h);
        self.composite_mask(&mask, |_, _| style.color, style.blend_mode);
    }

    pub fn stroke_path(&mut self, path: &Path, style: &StrokeStyle) {
        self.save_state();
        self.state.stroke = *style;
        self.stroke(path);
        self.restore_state();
    }

    pub fn fill_path(&mut self, path: &Path, style: &FillStyle) {
        self.save_state();
        self.state.fill = *style;
        self.fill(path);
        self.restore_state();
    }

    pub fn draw_line(&mut self, from: Point, to: Point, color: Color, line_width: f64, line_cap: LineCap) {
        let mut path = Path::new();
        path.move_to(from).line_to(to);
        self.stroke_path(&path, &StrokeStyle::new(color, line_width).with_cap(line_cap));
    }

    /// Fills `path` with a linear gradient running from `start` (position 0)
    /// to `end` (position 1), both in user space.
    ///
    /// Draws nothing when `start == end` or the current transform is singular.
    pub fn fill_gradient(&mut self, path: &Path, gradient: &Gradient, start: Point, end: Point, blend_mode: BlendMode) {
        let axis = end - start;
        let length_squared = axis.dot(axis);
        let Some(inverse) = self.state.transform.try_inverted() else {
            log::debug!("canvas: gradient skipped, transform is singular");
            return;
        };
        if length_squared <= 0.0 {
            return;
        }
        let (w, h) = self.extent();
        let mask = self.rasterizer.fill_coverage(path, &self.state.transform, FillRule::NonZero, w, h);
        self.composite_mask(
            &mask,
            |x, y| {
                let p = inverse.apply_to_point(Point::new(x as f64 + 0.5, y as f64 + 0.5));
                gradient.color_at((p - start).dot(axis) / length_squared)
            },
            blend_mode,
        );
    }

    /// A one-pixel-tall run across the inclusive column range at row `y`.
    pub fn draw_horizontal_line(&mut self, x_range: RangeInclusive<i64>, y: i64, color: Color) {
        let (lo, hi) = (*x_range.start(), *x_range.end());
        if lo > hi {
            return;
        }
        let y = y as f64 + 0.5;
        self.draw_line(Point::new(lo as f64, y), Point::new(hi as f64 + 1.0, y), color, 1.0, LineCap::Butt);
    }

    /// A one-pixel-wide run down the inclusive row range at column `x`.
    pub fn draw_vertical_line(&mut self, y_range: RangeInclusive<i64>, x: i64, color: Color) {
        let (lo, hi) = (*y_range.start(), *y_range.end());
        if lo > hi {
            return;
        }
        let x = x as f64 + 0.5;
        self.draw_line(Point::new(x, lo as f64), Point::new(x, hi as f64 + 1.0), color, 1.0, LineCap::Butt);
    }

    /// Horizontal run over a fractional range on the row containing `y`.
    ///
    /// The run starts at `floor(start)`. It ends at `ceil(end)` for an
    /// exclusive end and at `ceil(end + 1)` for an inclusive one. An
    /// unbounded side reaches the canvas edge.
    pub fn draw_horizontal_line_f(&mut self, x_range: impl RangeBounds<f64>, y: f64, color: Color) {
        let (lo, hi) = span(&x_range, self.size.width as f64);
        if lo >= hi {
            return;
        }
        let y = snapped(y);
        self.draw_line(Point::new(lo, y), Point::new(hi, y), color, 1.0, LineCap::Butt);
    }

    /// Vertical counterpart of [`Canvas::draw_horizontal_line_f`].
    pub fn draw_vertical_line_f(&mut self, y_range: impl RangeBounds<f64>, x: f64, color: Color) {
        let (lo, hi) = span(&y_range, self.size.height as f64);
        if lo >= hi {
            return;
        }
        let x = snapped(x);
        self.draw_line(Point::new(x, lo), Point::new(x, hi), color, 1.0, LineCap::Butt);
    }

    pub fn fill_rect(&mut self, rect: IntRect, color: Color) {
        let rect = rect.standardized();
        if rect.is_null() || rect.is_empty() {
            return;
        }
        self.fill_path(&Path::rect(Rect::from(rect)), &FillStyle::new(color));
    }

    fn extent(&self) -> (usize, usize) {
        (self.buffer.width(), self.buffer.height())
    }

    fn composite_mask(&mut self, mask: &CoverageMask, mut source: impl FnMut(usize, usize) -> Color, mode: BlendMode) {
        self.invalidate_image();
        for (x, y, coverage) in mask.covered() {
            let dst = self.buffer.pixel(x, y).to_color();
            let out = composite(dst, source(x, y), coverage, mode);
            self.buffer.set_pixel(x, y, Pixel::from_color(out));
        }
    }

    // ── snapshot ──────────────────────────────────────────────────────────

    #[inline]
    pub fn is_image_valid(&self) -> bool {
        self.image.is_some()
    }

    /// The pixels as an image, rebuilt only after a mutation.
    pub fn image(&mut self) -> &RgbaImage {
        let buffer = &self.buffer;
        self.image.get_or_insert_with(|| {
            RgbaImage::from_fn(buffer.width() as u32, buffer.height() as u32, |x, y| {
                let p = buffer.pixel(x as usize, y as usize);
                Rgba([p.r, p.g, p.b, p.a])
            })
        })
    }

    fn invalidate_image(&mut self) {
        self.image = None;
    }
}

/// Pixel-aligned `[start, end)` covering a fractional range.
fn span(range: &impl RangeBounds<f64>, extent: f64) -> (f64, f64) {
    let lo = match range.start_bound() {
        Bound::Included(&v) | Bound::Excluded(&v) => v.floor(),
        Bound::Unbounded => 0.0,
    };
    let hi = match range.end_bound() {
        Bound::Included(&v) => (v + 1.0).ceil(),
        Bound::Excluded(&v) => v.ceil(),
        Bound::Unbounded => extent,
    };
    (lo, hi)
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("size", &self.size)
            .field("bytes_per_row", &self.buffer.bytes_per_row())
            .field("clear_color", &self.clear_color)
            .field("state", &self.state)
            .field("image_valid", &self.image.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn canvas(w: i64, h: i64) -> Canvas {
        Canvas::new(IntSize::new(w, h), Some(Color::BLACK)).unwrap()
    }

    fn within_byte(a: Color, b: Color) -> bool {
        let e = 1.0 / 255.0;
        (a.red - b.red).abs() <= e
            && (a.green - b.green).abs() <= e
            && (a.blue - b.blue).abs() <= e
            && (a.alpha - b.alpha).abs() <= e
    }

    #[test]
    fn rejects_empty_size() {
        assert_eq!(
            Canvas::new(IntSize::new(0, 5), None).unwrap_err(),
            CanvasError::InvalidSize { width: 0, height: 5 }
        );
    }

    #[test]
    fn oversized_canvas_reports_allocation_error() {
        let err = Canvas::new(IntSize::new(1 << 40, 1 << 40), None).unwrap_err();
        assert!(matches!(err, CanvasError::Allocation { .. }), "{err}");
    }

    #[test]
    fn set_then_read_round_trips_within_a_byte() {
        let mut c = canvas(16, 16);
        let mut rng = StdRng::seed_from_u64(3);
        for y in 0..16 {
            for x in 0..16 {
                let alpha = crate::numeric::random_frac(&mut rng);
                let color = Color::random(&mut rng, alpha);
                let p = IntPoint::new(x, y);
                c.set_point(p, color);
                assert!(within_byte(c.color_at(p), color), "{} vs {}", c.color_at(p), color);
            }
        }
    }

    #[test]
    fn translucent_pixels_keep_their_color() {
        let mut c = canvas(2, 2);
        c.set_point(IntPoint::new(1, 1), Color::new(1.0, 0.5, 0.0, 0.2));
        let back = c.color_at(IntPoint::new(1, 1));
        assert!(within_byte(back, Color::new(1.0, 0.5, 0.0, 0.2)));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn set_point_outside_bounds_panics() {
        canvas(4, 4).set_point(IntPoint::new(4, 0), Color::WHITE);
    }

    #[test]
    fn try_color_at_checks_bounds() {
        let c = canvas(3, 3);
        assert_eq!(c.try_color_at(IntPoint::new(2, 2)), Some(Color::CLEAR));
        assert_eq!(c.try_color_at(IntPoint::new(-1, 0)), None);
    }

    #[test]
    fn float_points_truncate() {
        let mut c = canvas(4, 4);
        c.set_point_f(Point::new(2.9, 1.2), Color::RED);
        assert_eq!(c.color_at(IntPoint::new(2, 1)), Color::RED);
        assert_eq!(c.color_at_f(Point::new(2.1, 1.9)), Color::RED);
    }

    #[test]
    fn clear_uses_clear_color() {
        let mut c = canvas(5, 3);
        c.set_clear_color(Some(Color::WHITE));
        c.clear();
        assert!(c.bounds().points().all(|p| c.color_at(p) == Color::WHITE));

        c.clear_to(Color::CLEAR);
        assert!(c.as_bytes().iter().all(|&b| b == 0));

        c.set_point(IntPoint::ZERO, Color::RED);
        c.set_clear_color(None);
        c.clear();
        assert_eq!(c.color_at(IntPoint::ZERO), Color::RED);
    }

    #[test]
    fn horizontal_line_covers_inclusive_range() {
        let mut c = canvas(8, 3);
        c.clear_to(Color::BLACK);
        c.draw_horizontal_line(2..=5, 1, Color::WHITE);
        for x in 0..8 {
            let expected = if (2..=5).contains(&x) { Color::WHITE } else { Color::BLACK };
            assert_eq!(c.color_at(IntPoint::new(x, 1)), expected, "x = {x}");
            assert_eq!(c.color_at(IntPoint::new(x, 0)), Color::BLACK);
            assert_eq!(c.color_at(IntPoint::new(x, 2)), Color::BLACK);
        }
    }

    #[test]
    fn vertical_line_covers_inclusive_range() {
        let mut c = canvas(3, 6);
        c.clear_to(Color::BLACK);
        c.draw_vertical_line(1..=3, 2, Color::GREEN);
        for y in 0..6 {
            let expected = if (1..=3).contains(&y) { Color::GREEN } else { Color::BLACK };
            assert_eq!(c.color_at(IntPoint::new(2, y)), expected, "y = {y}");
        }
    }

    #[test]
    fn fractional_lines_round_outward() {
        let row = |c: &Canvas, y: i64| (0..8).filter(|&x| c.color_at(IntPoint::new(x, y)) == Color::WHITE).collect::<Vec<_>>();

        let mut c = canvas(8, 4);
        c.clear_to(Color::BLACK);
        c.draw_horizontal_line_f(1.3..4.2, 1.7, Color::WHITE);
        assert_eq!(row(&c, 1), vec![1, 2, 3, 4]);
        assert!(row(&c, 2).is_empty());

        c.draw_horizontal_line_f(1.3..=4.2, 2.0, Color::WHITE);
        assert_eq!(row(&c, 2), vec![1, 2, 3, 4, 5]);

        c.draw_horizontal_line_f(.., 3.9, Color::WHITE);
        assert_eq!(row(&c, 3).len(), 8);

        c.draw_horizontal_line_f(3.0..3.0, 0.0, Color::WHITE);
        assert!(row(&c, 0).is_empty());
    }

    #[test]
    fn fractional_vertical_line() {
        let mut c = canvas(3, 6);
        c.clear_to(Color::BLACK);
        c.draw_vertical_line_f(0.5..=2.0, 1.2, Color::GREEN);
        for y in 0..6 {
            let expected = if (0..=2).contains(&y) { Color::GREEN } else { Color::BLACK };
            assert_eq!(c.color_at(IntPoint::new(1, y)), expected, "y = {y}");
        }
    }

    #[test]
    fn fill_rect_and_transform() {
        let mut c = canvas(6, 6);
        c.clear_to(Color::BLACK);
        c.save_state();
        c.concat_transform(&Transform::translation(2.0, 1.0));
        c.fill_rect(IntRect::new(0, 0, 2, 2), Color::BLUE);
        c.restore_state();
        assert_eq!(c.transform(), Transform::IDENTITY);
        assert_eq!(c.color_at(IntPoint::new(2, 1)), Color::BLUE);
        assert_eq!(c.color_at(IntPoint::new(3, 2)), Color::BLUE);
        assert_eq!(c.color_at(IntPoint::new(1, 1)), Color::BLACK);
        assert_eq!(c.color_at(IntPoint::new(4, 3)), Color::BLACK);
    }

    #[test]
    fn drawing_calls_do_not_leak_state() {
        let mut c = canvas(4, 4);
        let before = *c.state();
        c.draw_line(Point::new(0.0, 0.5), Point::new(4.0, 0.5), Color::RED, 3.0, LineCap::Round);
        c.fill_path(&Path::rect(Rect::new(0.0, 0.0, 1.0, 1.0)), &FillStyle::new(Color::GREEN).with_rule(FillRule::EvenOdd));
        assert_eq!(*c.state(), before);
    }

    #[test]
    #[should_panic(expected = "restore_state")]
    fn unbalanced_restore_panics() {
        canvas(1, 1).restore_state();
    }

    #[test]
    fn gradient_fill_runs_along_axis() {
        let mut c = canvas(4, 1);
        c.clear_to(Color::BLACK);
        let gradient = Gradient::two(Color::BLACK, Color::WHITE);
        c.fill_gradient(
            &Path::rect(Rect::new(0.0, 0.0, 4.0, 1.0)),
            &gradient,
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            BlendMode::Normal,
        );
        let reds: Vec<u8> = (0..4).map(|x| c.color_at(IntPoint::new(x, 0)).to_bytes()[0]).collect();
        // Pixel centres sit at 1/8, 3/8, 5/8 and 7/8 of the axis.
        assert_eq!(reds, vec![32, 96, 159, 223]);
    }

    #[test]
    fn image_is_memoised_until_mutation() {
        let mut c = canvas(3, 2);
        c.clear_to(Color::RED);
        assert!(!c.is_image_valid());
        assert_eq!(c.image().get_pixel(2, 1), &Rgba([255, 0, 0, 255]));
        assert!(c.is_image_valid());
        c.set_point(IntPoint::new(0, 0), Color::BLUE);
        assert!(!c.is_image_valid());
        assert_eq!(c.image().get_pixel(0, 0), &Rgba([0, 0, 255, 255]));
        assert_eq!(c.image().dimensions(), (3, 2));
    }
}
