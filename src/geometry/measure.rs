use crate::foundation::core::BezPath;
use kurbo::{Line, ParamCurveArclen};

/// Arc-length accuracy used for [`total_length`].
pub const DEFAULT_ARCLEN_ACCURACY: f64 = 1e-3;

/// Total arc length of every contour in `path`, including implicit closing lines.
pub fn total_length(path: &BezPath) -> f64 {
    arc_length(path, DEFAULT_ARCLEN_ACCURACY)
}

pub fn arc_length(path: &BezPath, accuracy: f64) -> f64 {
    path.segments().map(|seg| seg.arclen(accuracy)).sum()
}

/// Sum of Euclidean lengths of a chain of straight pieces.
pub fn polyline_length<'a>(lines: impl IntoIterator<Item = &'a Line>) -> f64 {
    lines.into_iter().map(|l| l.p0.distance(l.p1)).sum()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/measure.rs"]
mod tests;
