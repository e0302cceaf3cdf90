//! Natural cubic spline interpolation.
//!
//! The spline blender feeds ten samples from two half-parabolas into an exact
//! interpolating spline, so the fitted curve passes through every sample and
//! keeps a genuine local maximum at the shared vertex.

use crate::error::ProfileError;
use serde::{Deserialize, Serialize};

/// A natural cubic spline through a set of strictly increasing knots.
///
/// Piecewise cubic with continuous first and second derivatives; second
/// derivatives vanish at both boundary knots. Evaluation outside the knot
/// range extends the boundary polynomial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at each knot, fixed at construction.
    d2: Vec<f64>,
}

impl CubicSpline {
    /// Fit an exact interpolating spline through `(xs[i], ys[i])`.
    ///
    /// The abscissas must be strictly increasing; duplicates are rejected
    /// rather than nudged apart.
    pub fn interpolating(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, ProfileError> {
        if xs.len() != ys.len() {
            return Err(ProfileError::KnotLengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(ProfileError::TooFewKnots(xs.len()));
        }
        for i in 1..xs.len() {
            if xs[i] <= xs[i - 1] {
                return Err(ProfileError::NonMonotonicKnots(i));
            }
        }

        let n = xs.len();
        let mut d2 = vec![0.0; n];
        let mut u = vec![0.0; n - 1];

        // Forward sweep of the tridiagonal system for the natural spline.
        for i in 1..n - 1 {
            let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
            let p = sig * d2[i - 1] + 2.0;
            d2[i] = (sig - 1.0) / p;
            u[i] = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i])
                - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
            u[i] = (6.0 * u[i] / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
        }

        // Back substitution.
        for k in (0..n - 2).rev() {
            d2[k + 1] = d2[k + 1] * d2[k + 2] + u[k + 1];
        }

        Ok(Self { xs, ys, d2 })
    }

    /// Evaluate the spline at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();

        // Binary search for the enclosing knot interval.
        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.xs[mid] > x {
                hi = mid;
            } else {
                lo = mid;
            }
        }

        let h = self.xs[hi] - self.xs[lo];
        let a = (self.xs[hi] - x) / h;
        let b = (x - self.xs[lo]) / h;

        a * self.ys[lo]
            + b * self.ys[hi]
            + ((a * a * a - a) * self.d2[lo] + (b * b * b - b) * self.d2[hi]) * (h * h) / 6.0
    }

    /// The knot abscissas.
    pub fn knots(&self) -> &[f64] {
        &self.xs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn passes_through_every_knot() {
        let xs = vec![0.0, 0.5, 1.3, 2.0, 3.1];
        let ys = vec![0.0, 1.2, 0.4, -0.3, 0.9];
        let spline = CubicSpline::interpolating(xs.clone(), ys.clone()).unwrap();

        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(spline.eval(x), y, max_relative = 1e-12);
        }
    }

    #[test]
    fn straight_data_stays_straight() {
        // A natural spline through collinear points reproduces the line.
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys = vec![1.0, 2.0, 3.0, 4.0];
        let spline = CubicSpline::interpolating(xs, ys).unwrap();

        assert_relative_eq!(spline.eval(0.5), 1.5, epsilon = 1e-10);
        assert_relative_eq!(spline.eval(2.75), 3.75, epsilon = 1e-10);
    }

    #[test]
    fn rejects_duplicate_abscissas() {
        let err = CubicSpline::interpolating(vec![0.0, 1.0, 1.0], vec![0.0, 1.0, 2.0])
            .expect_err("duplicate knots should fail");
        assert_eq!(err, ProfileError::NonMonotonicKnots(2));
    }

    #[test]
    fn rejects_mismatched_or_short_inputs() {
        assert_eq!(
            CubicSpline::interpolating(vec![0.0, 1.0], vec![0.0]).unwrap_err(),
            ProfileError::KnotLengthMismatch { xs: 2, ys: 1 }
        );
        assert_eq!(
            CubicSpline::interpolating(vec![0.0], vec![0.0]).unwrap_err(),
            ProfileError::TooFewKnots(1)
        );
    }
}
