/// A point the path must pass through, in traversal order, together with
/// the boundary derivatives imposed on the adjacent segments there.
///
/// Both derivative vectors default to `(0.0, 0.0)`. A zero-magnitude
/// tangent is accepted: it is occasionally intentional (a planned stop),
/// but it makes the segment cusp-prone and its arc length may stop being
/// strictly monotonic, which displacement inversion then reports.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct Knot {
    /// (x, y) position.
    pub pos: (f64, f64),
    /// First-derivative (tangent) vector at this knot.
    pub tangent: (f64, f64),
    /// Second-derivative vector at this knot.
    pub second_derivative: (f64, f64),
}

impl Knot {
    /// Creates a knot at `(x, y)` with zero tangent and second derivative.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            pos: (x, y),
            tangent: (0.0, 0.0),
            second_derivative: (0.0, 0.0),
        }
    }

    /// Sets the tangent from Cartesian components.
    pub fn with_tangent(mut self, dx: f64, dy: f64) -> Self {
        self.tangent = (dx, dy);
        self
    }

    /// Sets the tangent from a polar specification:
    /// `angle` in radians, `magnitude` in length units.
    pub fn with_polar_tangent(self, angle: f64, magnitude: f64) -> Self {
        self.with_tangent(magnitude * angle.cos(), magnitude * angle.sin())
    }

    /// Sets the second-derivative vector.
    pub fn with_second_derivative(mut self, ddx: f64, ddy: f64) -> Self {
        self.second_derivative = (ddx, ddy);
        self
    }
}
