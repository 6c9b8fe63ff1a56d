//! Bounded numeric helpers behind the displacement <-> parameter mapping:
//! adaptive Simpson quadrature for the arc-length integral and bracketed
//! bisection for its inverse. Both are synchronous loops with hard
//! iteration bounds; non-convergence is left to the caller to report.

// Recursion bound for the adaptive quadrature.
const MAX_QUADRATURE_DEPTH: usize = 20;

/// Integrates `f` over `[a, b]` with adaptive Simpson quadrature,
/// refining until the Richardson estimate of the error drops below
/// `tolerance` or the depth bound is hit.
pub(crate) fn integrate<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, tolerance: f64) -> f64 {
    if a >= b {
        return 0.0;
    }
    let whole = simpson_step(f, a, b);
    refine(f, a, b, tolerance, whole, MAX_QUADRATURE_DEPTH)
}

fn simpson_step<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> f64 {
    let mid = 0.5 * (a + b);
    (b - a) / 6.0 * (f(a) + 4.0 * f(mid) + f(b))
}

fn refine<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    tolerance: f64,
    whole: f64,
    depth: usize,
) -> f64 {
    let mid = 0.5 * (a + b);
    let left = simpson_step(f, a, mid);
    let right = simpson_step(f, mid, b);
    let combined = left + right;
    if depth == 0 || (combined - whole).abs() < 15.0 * tolerance {
        combined + (combined - whole) / 15.0
    } else {
        let half_tol = 0.5 * tolerance;
        refine(f, a, mid, half_tol, left, depth - 1) + refine(f, mid, b, half_tol, right, depth - 1)
    }
}

/// Outcome of a bounded bisection run: the midpoint the bracket collapsed
/// to and the function value left there.
pub(crate) struct BisectionResult {
    pub root: f64,
    pub residual: f64,
}

/// Bracketed bisection of `f` on `[lo, hi]`, assuming `f(lo) <= 0`
/// and `f(hi) >= 0`. Stops once `|f|` drops below `epsilon` or after
/// `max_iterations` halvings, whichever comes first.
pub(crate) fn bisect<F: Fn(f64) -> f64>(
    f: &F,
    mut lo: f64,
    mut hi: f64,
    epsilon: f64,
    max_iterations: usize,
) -> BisectionResult {
    let mut root = 0.5 * (lo + hi);
    let mut residual = f(root);
    for _ in 0..max_iterations {
        if residual.abs() <= epsilon {
            break;
        }
        if residual < 0.0 {
            lo = root;
        } else {
            hi = root;
        }
        root = 0.5 * (lo + hi);
        residual = f(root);
    }
    BisectionResult { root, residual }
}

#[cfg(test)]
mod tests {
    use super::{bisect, integrate};
    use approx::assert_relative_eq;

    #[test]
    fn integrates_polynomials_exactly() {
        // Simpson is exact for cubics; the adaptive layer covers the rest.
        assert_relative_eq!(integrate(&|t| 3.0 * t * t, 0.0, 1.0, 1e-9), 1.0);
        assert_relative_eq!(
            integrate(&|t: f64| t.powi(5), 0.0, 2.0, 1e-9),
            64.0 / 6.0,
            epsilon = 1e-7
        );
    }

    #[test]
    fn integrates_nonpolynomial_integrand() {
        // Quarter circle of radius 1: arc length pi/2.
        let speed = |t: f64| {
            let angle = t * std::f64::consts::FRAC_PI_2;
            let dx = -angle.sin() * std::f64::consts::FRAC_PI_2;
            let dy = angle.cos() * std::f64::consts::FRAC_PI_2;
            (dx * dx + dy * dy).sqrt()
        };
        assert_relative_eq!(
            integrate(&speed, 0.0, 1.0, 1e-9),
            std::f64::consts::FRAC_PI_2,
            epsilon = 1e-8
        );
    }

    #[test]
    fn empty_interval_integrates_to_zero() {
        assert_eq!(integrate(&|_| 1.0, 0.5, 0.5, 1e-9), 0.0);
    }

    #[test]
    fn bisection_finds_bracketed_root() {
        let result = bisect(&|t| t * t - 2.0, 0.0, 2.0, 1e-12, 100);
        assert_relative_eq!(result.root, 2f64.sqrt(), epsilon = 1e-10);
        assert!(result.residual.abs() <= 1e-12);
    }

    #[test]
    fn bisection_respects_iteration_bound() {
        let result = bisect(&|t| t - 0.3, 0.0, 1.0, 0.0, 4);
        // Four halvings cannot do better than 2^-5 of the bracket.
        assert!((result.root - 0.3).abs() <= 1.0 / 16.0);
    }
}
