use crate::canvas::Canvas;
use crate::coords::{IntPoint, IntRect, IntSize, IntVector};
use crate::paint::Color;

use super::{Shape, ShapeMode};

/// A value that can occupy a board cell.
pub trait TileValue {
    fn shape(&self) -> &Shape;
}

/// A grid of optional tiles, each drawn as a `tile_size` block of pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Board<V> {
    size: IntSize,
    tile_size: IntSize,
    cells: Vec<Vec<Option<V>>>,
}

impl<V: TileValue> Board<V> {
    /// An empty board of `size` cells.
    pub fn new(size: IntSize, tile_size: IntSize) -> Self {
        let cells = (0..size.height.max(0)).map(|_| (0..size.width.max(0)).map(|_| None).collect()).collect();
        Self { size, tile_size, cells }
    }

    #[inline]
    pub fn size(&self) -> IntSize {
        self.size
    }

    #[inline]
    pub fn tile_size(&self) -> IntSize {
        self.tile_size
    }

    #[inline]
    pub fn bounds(&self) -> IntRect {
        self.size.bounds()
    }

    /// Pixel size needed to draw the whole board.
    #[inline]
    pub fn canvas_size(&self) -> IntSize {
        self.size * self.tile_size
    }

    /// The tile at `point`, or `None` when the cell is empty or outside the board.
    pub fn get(&self, point: IntPoint) -> Option<&V> {
        if !self.bounds().contains_point(point) {
            return None;
        }
        self.cells[point.y as usize][point.x as usize].as_ref()
    }

    /// Panics when `point` is outside [`Board::bounds`].
    pub fn value_at(&self, point: IntPoint) -> Option<&V> {
        self.bounds().check_point(point);
        self.cells[point.y as usize][point.x as usize].as_ref()
    }

    /// Panics when `point` is outside [`Board::bounds`].
    pub fn set_point(&mut self, point: IntPoint, value: Option<V>) {
        self.bounds().check_point(point);
        self.cells[point.y as usize][point.x as usize] = value;
    }

    /// Rows of cells, top to bottom.
    #[inline]
    pub fn cells(&self) -> &[Vec<Option<V>>] {
        &self.cells
    }

    pub fn clear_cells(&mut self) {
        for row in &mut self.cells {
            row.iter_mut().for_each(|cell| *cell = None);
        }
    }

    /// Draws every cell at `cell * tile_size`. Occupied cells draw their
    /// shape; empty cells are painted with the canvas clear color, or
    /// [`Color::CLEAR`] when it has none.
    pub fn draw(&self, canvas: &mut Canvas) {
        let empty = canvas.clear_color().unwrap_or(Color::CLEAR);
        for point in self.bounds().points() {
            let offset = IntPoint::new(point.x * self.tile_size.width, point.y * self.tile_size.height);
            match &self.cells[point.y as usize][point.x as usize] {
                Some(value) => value.shape().draw(canvas, offset, ShapeMode::Fence),
                None => {
                    for tile_point in self.tile_size.bounds().points() {
                        canvas.set_point(offset + IntVector::from(tile_point), empty);
                    }
                }
            }
        }
    }
}
