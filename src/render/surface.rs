use crate::color::rgba::Color;
use crate::foundation::core::Point;

/// One stroked line painted with a two-stop linear gradient.
///
/// `start_color` sits at `start` and `end_color` at `end`; both ends use round caps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientLine {
    pub start: Point,
    pub end: Point,
    pub start_color: Color,
    pub end_color: Color,
    pub width: f64,
}

/// Host drawing capability consumed by the reveal renderer.
pub trait DrawSurface {
    fn draw_gradient_line(&mut self, line: &GradientLine);
}

/// Surface that keeps every draw call, for inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    lines: Vec<GradientLine>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[GradientLine] {
        &self.lines
    }

    /// Forget recorded calls, keeping the allocation for the next frame.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_gradient_line(&mut self, line: &GradientLine) {
        self.lines.push(*line);
    }
}
