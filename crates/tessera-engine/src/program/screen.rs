use crate::canvas::Canvas;
use crate::coords::IntSize;

use super::{ProgramError, ScreenSpec};

/// The layer canvases described by a [`ScreenSpec`].
#[derive(Debug)]
pub struct Screen {
    spec: ScreenSpec,
    layers: Vec<Canvas>,
}

impl Screen {
    pub fn new(spec: ScreenSpec) -> Result<Self, ProgramError> {
        let layer_count = spec.layer_specs.len();
        if spec.main_layer >= layer_count {
            return Err(ProgramError::InvalidMainLayer { main_layer: spec.main_layer, layer_count });
        }
        let layers = spec
            .layer_specs
            .iter()
            .map(|layer| Canvas::new(spec.canvas_size, layer.clear_color))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("screen: built {} layers of {}", layers.len(), spec.canvas_size);
        Ok(Self { spec, layers })
    }

    #[inline]
    pub fn spec(&self) -> &ScreenSpec {
        &self.spec
    }

    #[inline]
    pub fn canvas_size(&self) -> IntSize {
        self.spec.canvas_size
    }

    /// The main layer.
    pub fn canvas(&mut self) -> &mut Canvas {
        &mut self.layers[self.spec.main_layer]
    }

    /// The layer just below the main layer, if any.
    pub fn background_canvas(&mut self) -> Option<&mut Canvas> {
        let index = self.spec.main_layer.checked_sub(1)?;
        self.layers.get_mut(index)
    }

    pub fn layer(&self, index: usize) -> Option<&Canvas> {
        self.layers.get(index)
    }

    pub fn layer_mut(&mut self, index: usize) -> Option<&mut Canvas> {
        self.layers.get_mut(index)
    }

    /// All layers, back to front.
    #[inline]
    pub fn layers(&self) -> &[Canvas] {
        &self.layers
    }

    /// Mutable access to snapshot images (`Canvas::image` memoises).
    #[inline]
    pub fn layers_mut(&mut self) -> &mut [Canvas] {
        &mut self.layers
    }

    /// Clears every layer that has a clear color.
    pub fn clear_all(&mut self) {
        for layer in &mut self.layers {
            layer.clear();
        }
    }
}
