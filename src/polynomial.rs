/// A single-variable polynomial of degree at most 5, stored as six
/// coefficients from the `t^5` slot down to the constant slot.
///
/// Evaluation and differentiation are closed-form; no iterative work
/// happens per call.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PolynomialCurve {
    coeffs: [f64; 6],
}

impl PolynomialCurve {
    /// Creates a polynomial from coefficients `[a, b, c, d, e, f]` of
    /// `a*t^5 + b*t^4 + c*t^3 + d*t^2 + e*t + f`.
    pub fn new(coeffs: [f64; 6]) -> Self {
        Self { coeffs }
    }

    /// Coefficients from the degree-5 slot down to the constant slot.
    pub fn coefficients(&self) -> [f64; 6] {
        self.coeffs
    }

    /// Evaluates the polynomial at `t` in Horner form. Callers restrict
    /// the domain to [0, 1]; this type accepts any real `t`.
    pub fn evaluate(&self, t: f64) -> f64 {
        self.coeffs.iter().fold(0.0, |acc, &c| acc * t + c)
    }

    /// Analytic first derivative, degree at most 4, kept in the same
    /// fixed 6-slot representation with the leading slot zeroed.
    pub fn first_derivative(&self) -> Self {
        let [a, b, c, d, e, _] = self.coeffs;
        Self::new([0.0, 5.0 * a, 4.0 * b, 3.0 * c, 2.0 * d, e])
    }

    /// Analytic second derivative, degree at most 3.
    pub fn second_derivative(&self) -> Self {
        self.first_derivative().first_derivative()
    }
}

#[cfg(test)]
mod tests {
    use super::PolynomialCurve;
    use approx::assert_relative_eq;

    #[test]
    fn evaluates_in_horner_form() {
        // p(t) = 2t^5 - t^3 + 4t + 1
        let p = PolynomialCurve::new([2.0, 0.0, -1.0, 0.0, 4.0, 1.0]);
        assert_relative_eq!(p.evaluate(0.0), 1.0);
        assert_relative_eq!(p.evaluate(1.0), 6.0);
        assert_relative_eq!(p.evaluate(2.0), 2.0 * 32.0 - 8.0 + 8.0 + 1.0);
        assert_relative_eq!(p.evaluate(-1.0), -2.0 + 1.0 - 4.0 + 1.0);
    }

    #[test]
    fn first_derivative_drops_leading_coefficient() {
        let p = PolynomialCurve::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let d = p.first_derivative();
        assert_eq!(d.coefficients(), [0.0, 5.0, 8.0, 9.0, 8.0, 5.0]);
    }

    #[test]
    fn second_derivative_matches_double_differentiation() {
        let p = PolynomialCurve::new([1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        // p = t^5, p'' = 20 t^3
        let dd = p.second_derivative();
        assert_eq!(dd.coefficients(), [0.0, 0.0, 20.0, 0.0, 0.0, 0.0]);
        assert_relative_eq!(dd.evaluate(2.0), 160.0);
    }

    #[test]
    fn constant_polynomial_has_zero_derivative() {
        let p = PolynomialCurve::new([0.0, 0.0, 0.0, 0.0, 0.0, 7.5]);
        assert_relative_eq!(p.evaluate(0.3), 7.5);
        assert_eq!(p.first_derivative().coefficients(), [0.0; 6]);
    }
}
