use crate::canvas::Canvas;
use crate::coords::{IntPoint, IntSize, IntVector};
use crate::numeric::imod;
use crate::paint::{Color, ColorTable};

use super::ShapeError;

/// Edge policy for shape pixels that land outside the canvas.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum ShapeMode {
    /// Out-of-bounds pixels are a contract violation and panic.
    #[default]
    Fence,
    /// Pixels leaving one side re-enter on the opposite side.
    Wrap,
    /// Out-of-bounds pixels are skipped.
    Clip,
}

/// A fixed-size pixel-art glyph grid.
///
/// Rows are strings of glyphs looked up in a [`ColorTable`]. The looked-up
/// colors are cached per pixel and re-derived whenever the table changes;
/// `rows` and `size` never change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    colors: ColorTable,
    offset: IntVector,
    size: IntSize,
    rows: Vec<String>,
    unpacked: Vec<Vec<Option<Color>>>,
}

impl Shape {
    pub fn new<S: Into<String>>(
        colors: ColorTable,
        offset: IntVector,
        rows: impl IntoIterator<Item = S>,
    ) -> Result<Self, ShapeError> {
        let rows: Vec<String> = rows.into_iter().map(Into::into).collect();
        let width = match rows.first() {
            Some(first) => colors.split_row(first).len(),
            None => 0,
        };
        if width == 0 {
            return Err(ShapeError::Empty);
        }
        let size = IntSize::new(width as i64, rows.len() as i64);
        let unpacked = unpack(&colors, &rows, width)?;
        Ok(Self { colors, offset, size, rows, unpacked })
    }

    /// A shape over [`ColorTable::standard`] anchored at its top-left pixel.
    pub fn standard<S: Into<String>>(rows: impl IntoIterator<Item = S>) -> Result<Self, ShapeError> {
        Self::new(ColorTable::standard(), IntVector::ZERO, rows)
    }

    #[inline]
    pub fn size(&self) -> IntSize {
        self.size
    }

    #[inline]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    #[inline]
    pub fn offset(&self) -> IntVector {
        self.offset
    }

    pub fn set_offset(&mut self, offset: IntVector) {
        self.offset = offset;
    }

    #[inline]
    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    /// Swaps the color table and re-derives every pixel color. On error the
    /// shape is left unchanged.
    pub fn set_colors(&mut self, colors: ColorTable) -> Result<(), ShapeError> {
        self.unpacked = unpack(&colors, &self.rows, self.size.width as usize)?;
        self.colors = colors;
        Ok(())
    }

    /// Color of one glyph cell; `None` paints nothing.
    ///
    /// Panics when the cell is outside [`Shape::size`].
    pub fn color_at(&self, column: usize, row: usize) -> Option<Color> {
        self.unpacked[row][column]
    }

    /// Paints every non-`None` cell at `position - offset + (column, row)`.
    pub fn draw(&self, canvas: &mut Canvas, position: IntPoint, mode: ShapeMode) {
        let size = canvas.size();
        let origin = position - self.offset;
        for (row_index, row) in self.unpacked.iter().enumerate() {
            let Some(y) = place(origin.y + row_index as i64, size.height, mode) else { continue };
            for (column_index, cell) in row.iter().enumerate() {
                let Some(color) = *cell else { continue };
                let Some(x) = place(origin.x + column_index as i64, size.width, mode) else { continue };
                canvas.set_point(IntPoint::new(x, y), color);
            }
        }
    }
}

/// Applies the edge policy to one coordinate along an axis of `extent` pixels.
fn place(v: i64, extent: i64, mode: ShapeMode) -> Option<i64> {
    match mode {
        ShapeMode::Fence => Some(v),
        ShapeMode::Wrap => Some(imod(v, extent)),
        ShapeMode::Clip => (0..extent).contains(&v).then_some(v),
    }
}

fn unpack(colors: &ColorTable, rows: &[String], width: usize) -> Result<Vec<Vec<Option<Color>>>, ShapeError> {
    rows.iter()
        .enumerate()
        .map(|(row, text)| {
            let glyphs = colors.split_row(text);
            if glyphs.len() != width {
                return Err(ShapeError::UnequalRows { row, expected: width, found: glyphs.len() });
            }
            glyphs
                .into_iter()
                .enumerate()
                .map(|(column, glyph)| {
                    colors
                        .get(glyph)
                        .ok_or_else(|| ShapeError::UnknownGlyph { row, column, glyph: glyph.to_string() })
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_canvas(w: i64, h: i64) -> Canvas {
        let mut canvas = Canvas::new(IntSize::new(w, h), Some(Color::WHITE)).unwrap();
        canvas.clear();
        canvas
    }

    fn bar() -> Shape {
        Shape::standard(["💣💣💣💣"]).unwrap()
    }

    #[test]
    fn size_counts_glyphs_not_bytes() {
        let shape = Shape::standard(["❔\u{2764}\u{FE0F}💣", "🍏🍏🍏"]).unwrap();
        assert_eq!(shape.size(), IntSize::new(3, 2));
        assert_eq!(shape.color_at(0, 0), None);
        assert_eq!(shape.color_at(1, 0), Some(Color::RED));
        assert_eq!(shape.color_at(2, 1), Some(Color::GREEN));
    }

    #[test]
    fn construction_errors() {
        assert_eq!(Shape::standard(Vec::<String>::new()), Err(ShapeError::Empty));
        assert_eq!(
            Shape::standard(["💣💣", "💣"]),
            Err(ShapeError::UnequalRows { row: 1, expected: 2, found: 1 })
        );
        assert_eq!(
            Shape::standard(["💣x"]),
            Err(ShapeError::UnknownGlyph { row: 0, column: 1, glyph: "x".to_string() })
        );
    }

    #[test]
    fn set_colors_rederives_pixels() {
        let mut shape = bar();
        let mut table = ColorTable::standard();
        table.set("💣", Some(Color::BLUE));
        shape.set_colors(table).unwrap();
        assert_eq!(shape.color_at(3, 0), Some(Color::BLUE));
        assert_eq!(shape.size(), IntSize::new(4, 1));

        let before = shape.clone();
        assert!(shape.set_colors(ColorTable::new()).is_err());
        assert_eq!(shape, before);
    }

    #[test]
    fn wrap_reappears_on_the_left() {
        let mut canvas = white_canvas(10, 10);
        bar().draw(&mut canvas, IntPoint::new(8, 3), ShapeMode::Wrap);
        for x in 0..10 {
            let expected = if [8, 9, 0, 1].contains(&x) { Color::BLACK } else { Color::WHITE };
            assert_eq!(canvas.color_at(IntPoint::new(x, 3)), expected, "x = {x}");
        }
        assert!((0..10).all(|x| canvas.color_at(IntPoint::new(x, 2)) == Color::WHITE));
    }

    #[test]
    fn wrap_handles_negative_coordinates() {
        let mut canvas = white_canvas(10, 10);
        bar().draw(&mut canvas, IntPoint::new(-1, -1), ShapeMode::Wrap);
        for x in [9, 0, 1, 2] {
            assert_eq!(canvas.color_at(IntPoint::new(x, 9)), Color::BLACK, "x = {x}");
        }
    }

    #[test]
    fn clip_drops_overflow() {
        let mut canvas = white_canvas(10, 10);
        bar().draw(&mut canvas, IntPoint::new(8, 3), ShapeMode::Clip);
        for x in 0..10 {
            let expected = if x >= 8 { Color::BLACK } else { Color::WHITE };
            assert_eq!(canvas.color_at(IntPoint::new(x, 3)), expected, "x = {x}");
        }
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn fence_panics_on_overflow() {
        let mut canvas = white_canvas(10, 10);
        bar().draw(&mut canvas, IntPoint::new(8, 3), ShapeMode::Fence);
    }

    #[test]
    fn offset_shifts_the_anchor_and_none_is_see_through() {
        let mut canvas = white_canvas(5, 5);
        let shape = Shape::new(ColorTable::standard(), IntVector::new(1, 1), ["💣❔💣"]).unwrap();
        shape.draw(&mut canvas, IntPoint::new(2, 2), ShapeMode::Fence);
        assert_eq!(canvas.color_at(IntPoint::new(1, 1)), Color::BLACK);
        assert_eq!(canvas.color_at(IntPoint::new(2, 1)), Color::WHITE);
        assert_eq!(canvas.color_at(IntPoint::new(3, 1)), Color::BLACK);
    }
}
