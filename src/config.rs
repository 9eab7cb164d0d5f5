use crate::animation::ease::Ease;
use crate::color::palette::InterpolationSpace;
use crate::color::rgba::Color;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{RevealError, RevealResult};
use crate::geometry::flatten::{DEFAULT_TOLERANCE, FlattenMethod, validate_tolerance};
use crate::layout::fit::Padding;
use crate::presets;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Everything needed to build a [`crate::RevealSession`].
///
/// Every field has a default, so `{}` is a valid JSON config and yields the "Hello" preset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// SVG path data.
    pub path_d: String,
    /// Gradient stops, at least two.
    pub palette: Vec<Color>,
    pub interpolation: InterpolationSpace,
    pub tolerance: f64,
    pub flatten_method: FlattenMethod,
    pub stroke_width: f64,
    /// Length of one reveal leg; a full forward and back cycle takes twice this.
    pub duration_ms: u64,
    pub ease: Ease,
    pub canvas: Canvas,
    pub padding: Padding,
    pub fps: Fps,
    pub background: Color,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::hello()
    }
}

impl RevealConfig {
    /// The "Hello" handwriting preset.
    pub fn hello() -> Self {
        Self {
            path_d: presets::HELLO_PATH_D.to_string(),
            palette: presets::hello_palette(),
            interpolation: InterpolationSpace::default(),
            tolerance: DEFAULT_TOLERANCE,
            flatten_method: FlattenMethod::default(),
            stroke_width: 30.0,
            duration_ms: 5000,
            ease: Ease::default(),
            canvas: Canvas {
                width: 960,
                height: 440,
            },
            padding: Padding::default(),
            fps: Fps { num: 30, den: 1 },
            background: Color::from_rgba8(18, 20, 28, 255),
        }
    }

    pub fn from_json_str(s: &str) -> RevealResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| RevealError::serde(format!("parse config JSON: {e}")))
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> RevealResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| RevealError::serde(format!("parse config JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> RevealResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RevealError::invalid_argument(format!("open config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn to_json_pretty(&self) -> RevealResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check ranges that serde cannot express. Path data and palette contents are checked when
    /// the session parses them.
    pub fn validate(&self) -> RevealResult<()> {
        if self.path_d.trim().is_empty() {
            return Err(RevealError::invalid_argument("path_d must be non-empty"));
        }
        if self.palette.len() < 2 {
            return Err(RevealError::invalid_argument(format!(
                "palette needs at least 2 colors, got {}",
                self.palette.len()
            )));
        }
        validate_tolerance(self.tolerance)?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(RevealError::invalid_argument(format!(
                "stroke_width must be finite and > 0, got {}",
                self.stroke_width
            )));
        }
        if self.duration_ms == 0 {
            return Err(RevealError::invalid_argument("duration_ms must be > 0"));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(RevealError::invalid_argument("fps num/den must be > 0"));
        }
        self.canvas.validate()?;
        if !self.background.is_finite() {
            return Err(RevealError::invalid_argument("background must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
