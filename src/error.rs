use thiserror::Error;

/// Errors reported by segment construction, path assembly and
/// displacement queries. All of them are surfaced to the caller;
/// nothing is retried or silently clamped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// The two knots of a segment coincide, which would produce a
    /// zero-length curve piece.
    #[error("degenerate segment: knots ({x0}, {y0}) and ({x1}, {y1}) coincide")]
    DegenerateSegment { x0: f64, y0: f64, x1: f64, y1: f64 },

    /// A displacement or arc-length query landed outside the valid
    /// domain beyond the roundoff tolerance.
    #[error("displacement {value} outside valid range [0, {max}]")]
    OutOfRange { value: f64, max: f64 },

    /// The displacement root-finder returned a parameter outside [0, 1]
    /// or failed to converge. Typical cause is a non-monotonic arc-length
    /// function from a zero or reversing tangent mid-segment.
    #[error("arc-length inversion failed at displacement {displacement}: parameter {parameter}")]
    InversionFailed { parameter: f64, displacement: f64 },

    /// Fewer than two knots were supplied, so there is no segment to solve.
    #[error("at least 2 knots are required to build a path, got {count}")]
    InsufficientKnots { count: usize },
}
