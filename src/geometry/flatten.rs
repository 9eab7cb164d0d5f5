use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{RevealError, RevealResult};
use crate::geometry::measure::polyline_length;
use kurbo::{CubicBez, Line, ParamCurve, ParamCurveNearest, PathEl, PathSeg};
use serde::{Deserialize, Serialize};

/// Default maximum deviation between a flattened line and the true curve, in path units.
pub const DEFAULT_TOLERANCE: f64 = 0.5;

/// Smallest accepted flatten tolerance, in path units.
///
/// Below this the subdivision depth cap would be reached on ordinary curves and the
/// flattened result could no longer honor the requested tolerance.
pub const MIN_TOLERANCE: f64 = 1e-6;

/// Halving depth at which a cubic is emitted as a chord regardless of flatness. With
/// [`MIN_TOLERANCE`] this covers control polygons up to roughly `1e8` path units.
const MAX_SUBDIVISION_DEPTH: u32 = 24;

/// A straight piece of a flattened path, tagged with its position along the path.
///
/// Fractions are cumulative polyline length divided by total polyline length, so
/// `start_fraction <= end_fraction` and both lie in `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub start_fraction: f64,
    pub end_fraction: f64,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn line(&self) -> Line {
        Line::new(self.start, self.end)
    }
}

/// Curve subdivision strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlattenMethod {
    /// `kurbo::flatten`: analytic subdivision counts per curve.
    #[default]
    Analytic,
    /// Recursive de Casteljau halving until the control polygon is within tolerance of the chord.
    Subdivision,
}

/// Flatten `path` into fraction-annotated segments in traversal order.
///
/// Moves between contours and zero-length pieces produce no segment. A path whose polyline
/// length is zero yields an empty list.
#[tracing::instrument(skip(path), fields(elements = path.elements().len()))]
pub fn flatten(path: &BezPath, tolerance: f64, method: FlattenMethod) -> RevealResult<Vec<Segment>> {
    validate_tolerance(tolerance)?;
    let lines = flatten_lines(path, tolerance, method);
    let segments = annotate(&lines);
    if segments.is_empty() {
        tracing::warn!("path has zero length; nothing will be revealed");
    } else {
        tracing::debug!(segments = segments.len(), "flattened path");
    }
    Ok(segments)
}

pub(crate) fn validate_tolerance(tolerance: f64) -> RevealResult<()> {
    if !tolerance.is_finite() || tolerance < MIN_TOLERANCE {
        return Err(RevealError::invalid_argument(format!(
            "flatten tolerance must be finite and >= {MIN_TOLERANCE}, got {tolerance}"
        )));
    }
    Ok(())
}

/// Raw straight pieces approximating `path`, without fraction annotation.
pub fn flatten_lines(path: &BezPath, tolerance: f64, method: FlattenMethod) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut push = |p0: Point, p1: Point| {
        if p0 != p1 {
            lines.push(Line::new(p0, p1));
        }
    };

    match method {
        FlattenMethod::Analytic => {
            let mut subpath_start = Point::ZERO;
            let mut last = Point::ZERO;
            kurbo::flatten(path.iter(), tolerance, |el| match el {
                PathEl::MoveTo(p) => {
                    subpath_start = p;
                    last = p;
                }
                PathEl::LineTo(p) => {
                    push(last, p);
                    last = p;
                }
                PathEl::ClosePath => {
                    push(last, subpath_start);
                    last = subpath_start;
                }
                // flatten never emits curves
                PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
            });
        }
        FlattenMethod::Subdivision => {
            let mut capped = 0;
            for seg in path.segments() {
                capped += match seg {
                    PathSeg::Line(l) => {
                        push(l.p0, l.p1);
                        0
                    }
                    PathSeg::Quad(q) => subdivide_cubic(q.raise(), tolerance, 0, &mut push),
                    PathSeg::Cubic(c) => subdivide_cubic(c, tolerance, 0, &mut push),
                };
            }
            if capped > 0 {
                tracing::warn!(
                    capped,
                    tolerance,
                    "subdivision depth limit reached; some chords exceed the tolerance"
                );
            }
        }
    }

    lines
}

/// Emits chords for `c` and returns how many were forced out by the depth limit
/// rather than by flatness.
fn subdivide_cubic(
    c: CubicBez,
    tolerance: f64,
    depth: u32,
    emit: &mut impl FnMut(Point, Point),
) -> usize {
    if is_flat(&c, tolerance) {
        emit(c.p0, c.p3);
        return 0;
    }
    if depth >= MAX_SUBDIVISION_DEPTH {
        emit(c.p0, c.p3);
        return 1;
    }
    let (left, right) = c.subdivide();
    subdivide_cubic(left, tolerance, depth + 1, emit)
        + subdivide_cubic(right, tolerance, depth + 1, emit)
}

/// The curve lies in the convex hull of its control points, so when both inner control points
/// are within `tolerance` of the chord the whole curve is too.
fn is_flat(c: &CubicBez, tolerance: f64) -> bool {
    let chord = Line::new(c.p0, c.p3);
    let d1 = chord.nearest(c.p1, 1e-9).distance_sq;
    let d2 = chord.nearest(c.p2, 1e-9).distance_sq;
    d1.max(d2) <= tolerance * tolerance
}

fn annotate(lines: &[Line]) -> Vec<Segment> {
    let total = polyline_length(lines);
    if total <= 0.0 || !total.is_finite() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(lines.len());
    let mut travelled = 0.0;
    for line in lines {
        let start_fraction = (travelled / total).min(1.0);
        travelled += line.p0.distance(line.p1);
        let end_fraction = (travelled / total).min(1.0);
        out.push(Segment {
            start: line.p0,
            end: line.p1,
            start_fraction,
            end_fraction,
        });
    }
    if let Some(last) = out.last_mut() {
        last.end_fraction = 1.0;
    }
    out
}

const FRACTION_GAP_EPS: f64 = 1e-9;

/// Segments of one path plus the lengths the reveal logic needs, computed once.
#[derive(Clone, Debug, PartialEq)]
pub struct FlattenedPath {
    pub(crate) segments: Vec<Segment>,
    pub(crate) total_length: f64,
    pub(crate) tolerance: f64,
}

impl FlattenedPath {
    /// Wrap externally produced segments.
    ///
    /// Fractions must lie in `0..=1` with `start <= end`, the first segment must start at 0,
    /// the last must end at 1, and each segment must start where the previous one ended
    /// (within `1e-9`).
    pub fn from_parts(segments: Vec<Segment>, total_length: f64) -> RevealResult<Self> {
        if !total_length.is_finite() || total_length < 0.0 {
            return Err(RevealError::invalid_argument(format!(
                "total length must be finite and >= 0, got {total_length}"
            )));
        }
        for (i, s) in segments.iter().enumerate() {
            let in_unit = |f: f64| (0.0..=1.0).contains(&f);
            if !in_unit(s.start_fraction)
                || !in_unit(s.end_fraction)
                || s.start_fraction > s.end_fraction
            {
                return Err(RevealError::invalid_argument(format!(
                    "segment {i} has invalid fractions [{}, {}]",
                    s.start_fraction, s.end_fraction
                )));
            }
        }
        if segments
            .windows(2)
            .any(|w| w[1].start_fraction < w[0].start_fraction)
        {
            return Err(RevealError::invalid_argument(
                "segment start fractions must be non-decreasing",
            ));
        }
        if let Some(i) = segments
            .windows(2)
            .position(|w| (w[1].start_fraction - w[0].end_fraction).abs() > FRACTION_GAP_EPS)
        {
            return Err(RevealError::invalid_argument(format!(
                "segment {} does not start where segment {i} ends",
                i + 1
            )));
        }
        if let (Some(first), Some(last)) = (segments.first(), segments.last())
            && (first.start_fraction != 0.0 || last.end_fraction != 1.0)
        {
            return Err(RevealError::invalid_argument(format!(
                "segment fractions must span [0, 1], got [{}, {}]",
                first.start_fraction, last.end_fraction
            )));
        }
        Ok(Self {
            segments,
            total_length,
            tolerance: DEFAULT_TOLERANCE,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Arc length of the source path.
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Length of the flattened polyline; within the tolerance of [`FlattenedPath::total_length`].
    pub fn polyline_length(&self) -> f64 {
        self.segments.iter().map(Segment::length).sum()
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Zero-length paths never reveal anything.
    pub fn is_degenerate(&self) -> bool {
        self.segments.is_empty() || self.total_length <= 0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/flatten.rs"]
mod tests;
