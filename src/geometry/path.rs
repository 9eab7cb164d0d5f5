use crate::foundation::core::{BezPath, Point, Rect};
use crate::foundation::error::{RevealError, RevealResult};
use crate::geometry::flatten::{FlattenMethod, FlattenedPath, flatten, validate_tolerance};
use crate::geometry::measure::total_length;
use kurbo::{PathEl, Shape};

/// An immutable parsed path with its bounds and arc length cached.
#[derive(Clone, Debug)]
pub struct RevealPath {
    path: BezPath,
    bounds: Rect,
    length: f64,
}

impl RevealPath {
    /// Parse SVG path data (`M`, `L`, `H`, `V`, `C`, `S`, `Q`, `T`, `A`, `Z`, relative forms too).
    #[tracing::instrument(skip(d), fields(len = d.len()))]
    pub fn parse(d: &str) -> RevealResult<Self> {
        let d = d.trim();
        if d.is_empty() {
            return Err(RevealError::invalid_argument(
                "path data must be non-empty",
            ));
        }
        let path = BezPath::from_svg(d)
            .map_err(|e| RevealError::invalid_argument(format!("invalid path data: {e}")))?;
        Self::from_bez(path)
    }

    pub fn from_bez(path: BezPath) -> RevealResult<Self> {
        match path.elements().first() {
            Some(PathEl::MoveTo(_)) => {}
            Some(_) => {
                return Err(RevealError::invalid_argument(
                    "path must start with a move command",
                ));
            }
            None => {
                return Err(RevealError::invalid_argument(
                    "path has no drawing commands",
                ));
            }
        }
        if !path.elements().iter().all(el_is_finite) {
            return Err(RevealError::invalid_argument(
                "path coordinates must be finite",
            ));
        }

        let bounds = path.bounding_box();
        let length = total_length(&path);
        tracing::debug!(
            elements = path.elements().len(),
            length,
            "parsed path"
        );
        Ok(Self {
            path,
            bounds,
            length,
        })
    }

    pub fn bez(&self) -> &BezPath {
        &self.path
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Arc length of every contour, computed once at construction.
    pub fn total_length(&self) -> f64 {
        self.length
    }

    pub fn is_degenerate(&self) -> bool {
        self.length <= 0.0
    }

    pub fn flatten(&self, tolerance: f64, method: FlattenMethod) -> RevealResult<FlattenedPath> {
        validate_tolerance(tolerance)?;
        let segments = flatten(&self.path, tolerance, method)?;
        Ok(FlattenedPath {
            segments,
            total_length: self.length,
            tolerance,
        })
    }
}

fn el_is_finite(el: &PathEl) -> bool {
    let ok = |p: &Point| p.is_finite();
    match el {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => ok(p),
        PathEl::QuadTo(p1, p2) => ok(p1) && ok(p2),
        PathEl::CurveTo(p1, p2, p3) => ok(p1) && ok(p2) && ok(p3),
        PathEl::ClosePath => true,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
