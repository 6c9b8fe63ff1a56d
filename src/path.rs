use log::debug;

use crate::error::PathError;
use crate::segment::Segment;

/// An ordered chain of segments sharing knots pairwise, queried through
/// the distance traveled `s` from the path start instead of per-segment
/// local parameters.
///
/// The cumulative-offset table and total length are computed once at
/// assembly; the path is immutable afterwards. Re-planning means building
/// a new path, not mutating this one.
#[derive(Clone, Debug)]
pub struct Path {
    segments: Vec<Segment>,
    /// offsets[i] is the distance traveled at the start of segment i.
    offsets: Vec<f64>,
    total_length: f64,
}

impl Path {
    // Tolerance absorbing floating roundoff at the ends of [0, length].
    const RANGE_TOL: f64 = 1e-3;

    /// Assembles a path from at least one segment. Pairwise knot sharing
    /// is the caller's guarantee; the builder reuses identical boundary
    /// values at shared knots, so continuity is not re-derived from
    /// floating-point data here.
    pub fn new(segments: Vec<Segment>) -> Result<Self, PathError> {
        if segments.is_empty() {
            return Err(PathError::InsufficientKnots { count: 0 });
        }
        let mut offsets = Vec::with_capacity(segments.len());
        let mut total_length = 0.0;
        for segment in &segments {
            offsets.push(total_length);
            total_length += segment.length();
        }
        debug!(
            "assembled path: {} segments, total length {:.6}",
            segments.len(),
            total_length
        );
        Ok(Self {
            segments,
            offsets,
            total_length,
        })
    }

    /// Total distance traveled over the whole path.
    pub fn length(&self) -> f64 {
        self.total_length
    }

    /// Number of chained segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// The chained segments in traversal order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Curve point at distance `s` from the path start.
    pub fn point_at(&self, s: f64) -> Result<(f64, f64), PathError> {
        let (segment, t) = self.locate(s)?;
        Ok(segment.evaluate(t))
    }

    /// First-derivative vector at distance `s` from the path start.
    pub fn tangent_at(&self, s: f64) -> Result<(f64, f64), PathError> {
        let (segment, t) = self.locate(s)?;
        Ok(segment.tangent(t))
    }

    /// Second-derivative vector at distance `s` from the path start.
    pub fn curvature_at(&self, s: f64) -> Result<(f64, f64), PathError> {
        let (segment, t) = self.locate(s)?;
        Ok(segment.curvature_vector(t))
    }

    /// Points spaced evenly in distance traveled, both endpoints included.
    /// The actual spacing is the largest value not exceeding `spacing`
    /// that divides the total length evenly.
    pub fn sample_by_distance(&self, spacing: f64) -> Result<Vec<(f64, f64)>, PathError> {
        if !(spacing > 0.0) {
            return Err(PathError::OutOfRange {
                value: spacing,
                max: self.total_length,
            });
        }
        let count = (self.total_length / spacing).ceil().max(1.0) as usize;
        let step = self.total_length / count as f64;
        let mut points = Vec::with_capacity(count + 1);
        for i in 0..=count {
            points.push(self.point_at(step * i as f64)?);
        }
        Ok(points)
    }

    /// Resolves `s` to the owning segment and the local parameter inside
    /// it. A query exactly at an interior segment boundary resolves to the
    /// start of the later segment, so repeated queries are deterministic.
    fn locate(&self, s: f64) -> Result<(&Segment, f64), PathError> {
        if s < -Self::RANGE_TOL || s > self.total_length + Self::RANGE_TOL {
            return Err(PathError::OutOfRange {
                value: s,
                max: self.total_length,
            });
        }
        let s = s.clamp(0.0, self.total_length);
        // Last offset <= s; offsets[0] = 0, so the index is always valid.
        let index = self.offsets.partition_point(|&offset| offset <= s) - 1;
        let segment = &self.segments[index];
        let t = segment.parameter_at_displacement(s - self.offsets[index])?;
        Ok((segment, t))
    }
}
