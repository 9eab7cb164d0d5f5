use crate::foundation::core::{Affine, Canvas, Rect, Vec2};
use crate::foundation::error::{RevealError, RevealResult};
use serde::{Deserialize, Serialize};

/// Insets around the drawing area, in output pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub const ZERO: Self = Self::uniform(0.0);

    pub const fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 32.0,
            right: 32.0,
            bottom: 32.0,
            left: 64.0,
        }
    }
}

/// Map path-space `bounds` into the padded canvas, preserving aspect ratio and centering.
///
/// Zero-extent bounds along an axis do not constrain the scale on that axis; a point-sized path
/// is only translated.
pub fn fit_transform(bounds: Rect, canvas: Canvas, padding: Padding) -> RevealResult<Affine> {
    let pads = [padding.top, padding.right, padding.bottom, padding.left];
    if pads.iter().any(|p| !p.is_finite() || *p < 0.0) {
        return Err(RevealError::invalid_argument(
            "padding must be finite and >= 0",
        ));
    }

    let avail_w = f64::from(canvas.width) - padding.left - padding.right;
    let avail_h = f64::from(canvas.height) - padding.top - padding.bottom;
    if avail_w <= 0.0 || avail_h <= 0.0 {
        return Err(RevealError::invalid_argument(format!(
            "padding leaves no drawing area on a {}x{} canvas",
            canvas.width, canvas.height
        )));
    }

    let target_center = Vec2::new(
        padding.left + avail_w * 0.5,
        padding.top + avail_h * 0.5,
    );
    let source_center = bounds.center().to_vec2();

    let sx = if bounds.width() > 0.0 {
        avail_w / bounds.width()
    } else {
        f64::INFINITY
    };
    let sy = if bounds.height() > 0.0 {
        avail_h / bounds.height()
    } else {
        f64::INFINITY
    };
    let scale = sx.min(sy);
    let scale = if scale.is_finite() { scale } else { 1.0 };

    Ok(Affine::translate(target_center) * Affine::scale(scale) * Affine::translate(-source_center))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;
