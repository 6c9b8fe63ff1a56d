use log::trace;
use nalgebra::{Matrix6, Vector6};

use crate::arc_length;
use crate::error::PathError;
use crate::knot::Knot;
use crate::polynomial::PolynomialCurve;

/// The quintic curve piece spanning exactly two adjacent knots, with
/// local parameter `t` in [0, 1].
///
/// Construction solves one 6x6 linear system per spatial axis against the
/// fixed boundary matrix, then caches the derivative polynomials and the
/// total arc length. A segment is immutable afterwards, so shared
/// read-only access from multiple threads is safe.
#[derive(Clone, Debug)]
pub struct Segment {
    x: PolynomialCurve,
    y: PolynomialCurve,
    dx: PolynomialCurve,
    dy: PolynomialCurve,
    ddx: PolynomialCurve,
    ddy: PolynomialCurve,
    length: f64,
}

impl Segment {
    // Iteration bound of the displacement root search.
    const BISECTION_DEPTH: usize = 100;

    // Minimal knot separation; anything below counts as coincident knots.
    const S_MIN: f64 = 1e-12;

    // Quadrature tolerance, comfortably below the 1e-6 accuracy the
    // displacement integral must reach for unit-scale geometry.
    const QUADRATURE_TOL: f64 = 1e-9;

    // Convergence target for the root search residual.
    const EPSILON: f64 = 1e-9;

    // Tolerance absorbing floating roundoff at the displacement domain edges.
    const RANGE_TOL: f64 = 1e-3;

    // Snap window around displacement 0 and L, in length units. Constant
    // on purpose, independent of the segment length.
    const SNAP_TOL: f64 = 0.01;

    // Accepted overshoot of the inverted parameter beyond [0, 1].
    const PARAM_TOL: f64 = 0.01;

    /// Boundary-condition matrix: rows impose value, first and second
    /// derivative at t=0, then the same three at t=1; columns are the
    /// `t^5..t^0` coefficient slots. Fixed and nonsingular regardless of
    /// the knot values.
    fn boundary_matrix() -> Matrix6<f64> {
        Matrix6::new(
            0.0, 0.0, 0.0, 0.0, 0.0, 1.0, //
            0.0, 0.0, 0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 2.0, 0.0, 0.0, //
            1.0, 1.0, 1.0, 1.0, 1.0, 1.0, //
            5.0, 4.0, 3.0, 2.0, 1.0, 0.0, //
            20.0, 12.0, 6.0, 2.0, 0.0, 0.0,
        )
    }

    /// Solves the quintic spanning `start` to `end` from their boundary
    /// data and caches derivatives and arc length.
    ///
    /// Fails with [`PathError::DegenerateSegment`] if the knots coincide.
    pub fn new(start: Knot, end: Knot) -> Result<Self, PathError> {
        let (x0, y0) = start.pos;
        let (x1, y1) = end.pos;
        let separation = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
        if separation < Self::S_MIN {
            return Err(PathError::DegenerateSegment { x0, y0, x1, y1 });
        }

        let lu = Self::boundary_matrix().lu();
        let solve_axis = |p0: f64, d0: f64, dd0: f64, p1: f64, d1: f64, dd1: f64| {
            let rhs = Vector6::new(p0, d0, dd0, p1, d1, dd1);
            let c = lu
                .solve(&rhs)
                .expect("fixed boundary matrix is nonsingular");
            PolynomialCurve::new([c[0], c[1], c[2], c[3], c[4], c[5]])
        };

        let x = solve_axis(
            x0,
            start.tangent.0,
            start.second_derivative.0,
            x1,
            end.tangent.0,
            end.second_derivative.0,
        );
        let y = solve_axis(
            y0,
            start.tangent.1,
            start.second_derivative.1,
            y1,
            end.tangent.1,
            end.second_derivative.1,
        );

        let mut segment = Self {
            x,
            y,
            dx: x.first_derivative(),
            dy: y.first_derivative(),
            ddx: x.second_derivative(),
            ddy: y.second_derivative(),
            length: 0.0,
        };
        segment.length = segment.displacement_at_parameter(1.0);
        trace!(
            "solved segment ({x0}, {y0}) -> ({x1}, {y1}), length {:.6}",
            segment.length
        );
        Ok(segment)
    }

    /// Curve point at `t`, clamped to [0, 1].
    pub fn evaluate(&self, t: f64) -> (f64, f64) {
        let t = t.clamp(0.0, 1.0);
        (self.x.evaluate(t), self.y.evaluate(t))
    }

    /// First-derivative vector at `t`, clamped to [0, 1].
    pub fn tangent(&self, t: f64) -> (f64, f64) {
        let t = t.clamp(0.0, 1.0);
        (self.dx.evaluate(t), self.dy.evaluate(t))
    }

    /// Second-derivative vector at `t`, clamped to [0, 1].
    pub fn curvature_vector(&self, t: f64) -> (f64, f64) {
        let t = t.clamp(0.0, 1.0);
        (self.ddx.evaluate(t), self.ddy.evaluate(t))
    }

    /// Tangent magnitude at `t`, the arc-length integrand.
    pub fn speed(&self, t: f64) -> f64 {
        let (dx, dy) = self.tangent(t);
        (dx * dx + dy * dy).sqrt()
    }

    /// Total arc length, computed once at construction.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Distance traveled along the curve from t=0 up to `t`,
    /// by adaptive quadrature of [`Self::speed`].
    pub fn displacement_at_parameter(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        arc_length::integrate(&|u| self.speed(u), 0.0, t, Self::QUADRATURE_TOL)
    }

    /// Inverse mapping: the parameter at which the distance traveled
    /// reaches `s0`.
    ///
    /// Queries within a fixed snap window of 0 or of the total length
    /// return exactly `t = 0` or `t = 1`; the bracketing interval of the
    /// root search collapses at the domain edges, so they are not
    /// root-found. Everywhere else the root of
    /// `displacement_at_parameter(t) - s0` is bisected on [0, 1], which
    /// converges whenever the arc length grows monotonically, i.e. the
    /// tangent never vanishes mid-segment.
    ///
    /// Fails with [`PathError::OutOfRange`] outside `[0, L]` beyond a
    /// roundoff tolerance, and with [`PathError::InversionFailed`] when
    /// the search lands outside [0, 1] or does not converge.
    pub fn parameter_at_displacement(&self, s0: f64) -> Result<f64, PathError> {
        if s0 < -Self::RANGE_TOL || s0 > self.length + Self::RANGE_TOL {
            return Err(PathError::OutOfRange {
                value: s0,
                max: self.length,
            });
        }
        if s0.abs() <= Self::SNAP_TOL {
            return Ok(0.0);
        }
        if (s0 - self.length).abs() <= Self::SNAP_TOL {
            return Ok(1.0);
        }

        let result = arc_length::bisect(
            &|t| self.displacement_at_parameter(t) - s0,
            0.0,
            1.0,
            Self::EPSILON,
            Self::BISECTION_DEPTH,
        );
        let t = result.root;
        let in_range = (-Self::PARAM_TOL..=1.0 + Self::PARAM_TOL).contains(&t);
        if !in_range || result.residual.abs() > Self::SNAP_TOL {
            return Err(PathError::InversionFailed {
                parameter: t,
                displacement: s0,
            });
        }
        Ok(t)
    }
}
