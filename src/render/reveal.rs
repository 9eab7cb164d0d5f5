use crate::color::palette::Palette;
use crate::foundation::error::{RevealError, RevealResult};
use crate::foundation::math::clamp_unit;
use crate::geometry::flatten::{FlattenedPath, Segment};
use crate::render::surface::{DrawSurface, GradientLine};

/// Draws the part of a flattened path that the current progress has reached.
///
/// A segment is revealed once `start_fraction * total_length < total_length * progress`, so the
/// segment the progress is currently crossing is drawn whole rather than clipped. Nothing is
/// revealed at progress 0, everything at progress 1, and a zero-length path never reveals.
#[derive(Clone, Debug)]
pub struct RevealRenderer {
    path: FlattenedPath,
    palette: Palette,
    stroke_width: f64,
}

impl RevealRenderer {
    pub fn new(path: FlattenedPath, palette: Palette, stroke_width: f64) -> RevealResult<Self> {
        if !stroke_width.is_finite() || stroke_width <= 0.0 {
            return Err(RevealError::invalid_argument(format!(
                "stroke width must be finite and > 0, got {stroke_width}"
            )));
        }
        Ok(Self {
            path,
            palette,
            stroke_width,
        })
    }

    pub fn path(&self) -> &FlattenedPath {
        &self.path
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn is_revealed(&self, segment: &Segment, progress: f64) -> bool {
        let total = self.path.total_length;
        let current_length = total * clamp_unit(progress);
        segment.start_fraction * total < current_length
    }

    pub fn revealed(&self, progress: f64) -> impl Iterator<Item = &Segment> + '_ {
        self.path
            .segments
            .iter()
            .filter(move |s| self.is_revealed(s, progress))
    }

    pub fn revealed_count(&self, progress: f64) -> usize {
        self.revealed(progress).count()
    }

    /// Gradient line for `segment`, colored by its position along the path.
    pub fn line_for(&self, segment: &Segment) -> GradientLine {
        GradientLine {
            start: segment.start,
            end: segment.end,
            start_color: self.palette.sample(segment.start_fraction),
            end_color: self.palette.sample(segment.end_fraction),
            width: self.stroke_width,
        }
    }

    /// Issue one draw call per revealed segment, in path order. Returns the number drawn.
    ///
    /// `progress` outside `0..=1` is clamped and NaN counts as 0.
    pub fn render(&self, progress: f64, surface: &mut dyn DrawSurface) -> usize {
        let mut drawn = 0;
        for segment in self.revealed(progress) {
            surface.draw_gradient_line(&self.line_for(segment));
            drawn += 1;
        }
        drawn
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/reveal.rs"]
mod tests;
