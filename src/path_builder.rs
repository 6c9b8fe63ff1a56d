use log::debug;

use crate::error::PathError;
use crate::knot::Knot;
use crate::path::Path;
use crate::segment::Segment;

/// Accumulates knots in traversal order and emits a validated [`Path`].
///
/// `build` solves one segment per adjacent knot pair, reusing the exact
/// same boundary values at shared knots, which is what guarantees the
/// chained curve is continuous up to the second derivative.
#[derive(Default, Clone, Debug)]
pub struct PathBuilder {
    knots: Vec<Knot>,
}

impl PathBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a knot in traversal order.
    pub fn add(&mut self, knot: Knot) -> &mut Self {
        self.knots.push(knot);
        self
    }

    /// Number of knots accumulated so far.
    pub fn knot_count(&self) -> usize {
        self.knots.len()
    }

    /// Solves every segment and chains them into a path.
    ///
    /// Fails with [`PathError::InsufficientKnots`] below 2 knots and with
    /// [`PathError::DegenerateSegment`] if an adjacent pair coincides.
    pub fn build(&self) -> Result<Path, PathError> {
        if self.knots.len() < 2 {
            return Err(PathError::InsufficientKnots {
                count: self.knots.len(),
            });
        }
        let mut segments = Vec::with_capacity(self.knots.len() - 1);
        for pair in self.knots.windows(2) {
            segments.push(Segment::new(pair[0], pair[1])?);
        }
        debug!(
            "built {} segments from {} knots",
            segments.len(),
            self.knots.len()
        );
        Path::new(segments)
    }
}
