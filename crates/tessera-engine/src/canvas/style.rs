use crate::coords::Transform;
use crate::paint::Color;

/// Shape drawn at the open ends of a stroked subpath.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum LineCap {
    /// The stroke ends flush with the endpoint.
    #[default]
    Butt,
    /// A half-disc of the line width.
    Round,
    /// The stroke extends half the line width past the endpoint.
    Square,
}

/// Shape drawn where two stroked segments meet.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Rule deciding which regions of a self-overlapping path are inside.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// How source color combines with what is already on the canvas.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// Source over destination.
    #[default]
    Normal,
    /// Source replaces destination under the covered area.
    Copy,
    Multiply,
    Screen,
    /// Covered area is erased to transparent.
    Clear,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub line_width: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    /// Longest allowed ratio of miter length to line width before a miter
    /// join falls back to a bevel.
    pub miter_limit: f64,
    pub blend_mode: BlendMode,
}

impl StrokeStyle {
    pub fn new(color: Color, line_width: f64) -> Self {
        Self { color, line_width, ..Self::default() }
    }

    pub fn with_cap(mut self, line_cap: LineCap) -> Self {
        self.line_cap = line_cap;
        self
    }

    pub fn with_join(mut self, line_join: LineJoin) -> Self {
        self.line_join = line_join;
        self
    }

    pub fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = blend_mode;
        self
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            line_width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            miter_limit: 10.0,
            blend_mode: BlendMode::Normal,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FillStyle {
    pub color: Color,
    pub fill_rule: FillRule,
    pub blend_mode: BlendMode,
}

impl FillStyle {
    pub fn new(color: Color) -> Self {
        Self { color, ..Self::default() }
    }

    pub fn with_rule(mut self, fill_rule: FillRule) -> Self {
        self.fill_rule = fill_rule;
        self
    }

    pub fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = blend_mode;
        self
    }
}

impl Default for FillStyle {
    fn default() -> Self {
        Self { color: Color::BLACK, fill_rule: FillRule::NonZero, blend_mode: BlendMode::Normal }
    }
}

/// Drawing attributes saved and restored as a unit.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct GraphicsState {
    /// User space to device (pixel) space.
    pub transform: Transform,
    pub stroke: StrokeStyle,
    pub fill: FillStyle,
}
