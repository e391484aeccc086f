use crate::canvas::Canvas;
use crate::coords::IntPoint;

use super::{Shape, ShapeMode};

/// A shape placed somewhere with an edge policy.
pub trait Sprite {
    fn shape(&self) -> &Shape;
    fn position(&self) -> IntPoint;
    fn mode(&self) -> ShapeMode;

    fn draw(&self, canvas: &mut Canvas) {
        self.shape().draw(canvas, self.position(), self.mode());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimpleSprite {
    pub shape: Shape,
    pub position: IntPoint,
    pub mode: ShapeMode,
}

impl SimpleSprite {
    /// At the origin, fenced.
    pub fn new(shape: Shape) -> Self {
        Self { shape, position: IntPoint::ZERO, mode: ShapeMode::Fence }
    }

    pub fn with_position(mut self, position: IntPoint) -> Self {
        self.position = position;
        self
    }

    pub fn with_mode(mut self, mode: ShapeMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Sprite for SimpleSprite {
    fn shape(&self) -> &Shape {
        &self.shape
    }

    fn position(&self) -> IntPoint {
        self.position
    }

    fn mode(&self) -> ShapeMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::IntSize;
    use crate::paint::Color;

    #[test]
    fn draw_delegates_to_shape() {
        let shape = Shape::standard(["🦋🦋"]).unwrap();
        let sprite = SimpleSprite::new(shape).with_position(IntPoint::new(3, 0)).with_mode(ShapeMode::Wrap);
        let mut canvas = Canvas::new(IntSize::new(4, 1), None).unwrap();
        sprite.draw(&mut canvas);
        assert_eq!(canvas.color_at(IntPoint::new(3, 0)), Color::BLUE);
        assert_eq!(canvas.color_at(IntPoint::new(0, 0)), Color::BLUE);
        assert_eq!(canvas.color_at(IntPoint::new(1, 0)), Color::CLEAR);
    }
}
