use crate::coords::IntSize;
use crate::paint::Color;

/// Configuration of one screen layer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayerSpec {
    /// Color the layer is cleared to before each frame; `None` keeps the
    /// previous frame's pixels.
    pub clear_color: Option<Color>,
}

impl LayerSpec {
    pub fn new(clear_color: Option<Color>) -> Self {
        Self { clear_color }
    }
}

impl Default for LayerSpec {
    fn default() -> Self {
        Self { clear_color: Some(Color::BLACK) }
    }
}

/// Layer stack and canvas size for a screen.
///
/// Layers are drawn back to front; `main_layer` is the one programs draw
/// into by default, and the layer below it is the background.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSpec {
    pub canvas_size: IntSize,
    pub main_layer: usize,
    pub layer_specs: Vec<LayerSpec>,
}

impl ScreenSpec {
    pub const DEFAULT_CANVAS_SIZE: IntSize = IntSize::new(40, 40);

    pub fn new(main_layer: usize, layer_specs: Vec<LayerSpec>) -> Self {
        Self { canvas_size: Self::DEFAULT_CANVAS_SIZE, main_layer, layer_specs }
    }

    pub fn with_canvas_size(mut self, canvas_size: IntSize) -> Self {
        self.canvas_size = canvas_size;
        self
    }
}

impl Default for ScreenSpec {
    /// A faint white trail layer under a transparent main layer.
    fn default() -> Self {
        Self::new(
            1,
            vec![LayerSpec::new(Some(Color::WHITE.with_alpha(0.05))), LayerSpec::new(Some(Color::CLEAR))],
        )
    }
}
