use crate::color::oklab::Oklab;
use crate::color::rgba::Color;
use crate::foundation::error::{RevealError, RevealResult};
use crate::foundation::math::{Lerp, clamp_unit};
use serde::{Deserialize, Serialize};

/// Channel space used to blend two neighbouring palette stops.
///
/// `Srgb` blends the straight-alpha sRGB-encoded channels directly (no premultiplication, no
/// gamma decoding). `Oklab` blends in the perceptual Oklab space, which keeps mid-points between
/// saturated hues from going muddy. Alpha is always blended linearly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationSpace {
    #[default]
    Srgb,
    Oklab,
}

impl InterpolationSpace {
    pub fn mix(self, a: Color, b: Color, t: f64) -> Color {
        match self {
            Self::Srgb => Color::lerp(&a, &b, t),
            Self::Oklab => Oklab::from_color(a).mix(Oklab::from_color(b), t).to_color(),
        }
    }
}

/// Ordered color stops, evenly spaced at `i / (len - 1)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
    space: InterpolationSpace,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> RevealResult<Self> {
        if colors.len() < 2 {
            return Err(RevealError::invalid_argument(format!(
                "palette needs at least 2 colors, got {}",
                colors.len()
            )));
        }
        if let Some(idx) = colors.iter().position(|c| !c.is_finite()) {
            return Err(RevealError::invalid_argument(format!(
                "palette color {idx} has non-finite channels"
            )));
        }
        Ok(Self {
            colors,
            space: InterpolationSpace::default(),
        })
    }

    pub fn with_space(mut self, space: InterpolationSpace) -> Self {
        self.space = space;
        self
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn space(&self) -> InterpolationSpace {
        self.space
    }

    /// Number of color stops; construction guarantees at least two.
    pub fn stop_count(&self) -> usize {
        self.colors.len()
    }

    /// Color at `position` along the palette.
    ///
    /// Fails with [`RevealError::InvalidArgument`] when `position` is outside `0..=1` or NaN.
    pub fn color_at(&self, position: f64) -> RevealResult<Color> {
        if !(0.0..=1.0).contains(&position) {
            return Err(RevealError::invalid_argument(format!(
                "palette position must be within [0, 1], got {position}"
            )));
        }
        Ok(self.sample(position))
    }

    /// Infallible variant of [`Palette::color_at`] that clamps its input.
    pub(crate) fn sample(&self, position: f64) -> Color {
        let position = clamp_unit(position);
        let last = self.colors.len() - 1;
        if position == 1.0 {
            return self.colors[last];
        }

        let scaled = last as f64 * position;
        let lower = (scaled.floor() as usize).min(last - 1);
        let t = scaled - lower as f64;
        if t == 0.0 {
            return self.colors[lower];
        }
        self.space
            .mix(self.colors[lower], self.colors[lower + 1], t)
    }
}

/// One-shot interpolation over a borrowed palette in sRGB channel space.
pub fn color_at(position: f64, palette: &[Color]) -> RevealResult<Color> {
    Palette::new(palette.to_vec())?.color_at(position)
}

#[cfg(test)]
#[path = "../../tests/unit/color/palette.rs"]
mod tests;
