//! Interpolation algorithms for energy profile curves.
//!
//! An elementary reaction step is described by two plateau energies and an
//! optional transition-state energy between them. The functions here turn
//! those discrete values into a continuous barrier shape:
//!
//! * [`quadratic_connect`] fits the unique parabola joining two points with a
//!   horizontal tangent at the second one,
//! * [`locate_peak`] solves analytically for the peak position of a
//!   vertex-form parabola through both plateaus,
//! * [`spline_blend`] pins the peak position instead and blends two
//!   half-parabolas with an exact interpolating spline.

use log::debug;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;
use crate::sampling::linspace;
use crate::spline::CubicSpline;

/// Below this magnitude the leading coefficient of the peak-position
/// quadratic is treated as zero and the equation solved as linear.
const DEGENERATE_LEAD: f64 = 1e-12;

/// Samples taken on each half-parabola before the spline fit.
const HALF_SAMPLES: usize = 5;

/// A quadratic polynomial `a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parabola {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Parabola {
    pub fn eval(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }
}

/// A parabola in vertex form `m·(x − x0)² + y0`, with its vertex at the peak.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VertexParabola {
    pub m: f64,
    pub x0: f64,
    pub y0: f64,
}

impl VertexParabola {
    pub fn eval(&self, x: f64) -> f64 {
        let dx = x - self.x0;
        self.m * dx * dx + self.y0
    }
}

/// The interpolated barrier segment between two plateaus.
///
/// Both interpolation strategies are kept as-is behind this one type; they
/// produce visibly different shapes for the same energies and neither is
/// considered more correct than the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BarrierShape {
    Quadratic(VertexParabola),
    Spline(CubicSpline),
}

impl BarrierShape {
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            BarrierShape::Quadratic(parabola) => parabola.eval(x),
            BarrierShape::Spline(spline) => spline.eval(x),
        }
    }
}

/// Fit the unique parabola with `f(x1) = y1`, `f(x2) = y2` and `f'(x2) = 0`.
///
/// The horizontal tangent makes the second point the vertex, which is how
/// every caller uses it: `(x2, y2)` is always a peak. Fails only for
/// `x1 == x2`, where the constraint system is singular.
pub fn quadratic_connect(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Parabola, ProfileError> {
    let lhs = Matrix3::new(
        x1 * x1,
        x1,
        1.0,
        x2 * x2,
        x2,
        1.0,
        2.0 * x2,
        1.0,
        0.0,
    );
    let rhs = Vector3::new(y1, y2, 0.0);

    let coeffs = lhs
        .lu()
        .solve(&rhs)
        .ok_or(ProfileError::DegenerateConnect(x1))?;

    Ok(Parabola {
        a: coeffs[0],
        b: coeffs[1],
        c: coeffs[2],
    })
}

/// Solve for the peak position of a vertex-form parabola
/// `y = m·(x − x2)² + y2` passing through `(x1, y1)` and `(x3, y3)`.
///
/// Equating the two point constraints with `k = (y3 − y2)/(y1 − y2)` gives a
/// quadratic in `x2` with coefficients `a = k − 1`, `b = 2·x3 − 2·k·x1`,
/// `c = k·x1² − x3²`. The root lying inside `[min(x1, x3), max(x1, x3)]` is
/// the peak position; complex roots, no in-interval root, or two distinct
/// in-interval roots are domain errors naming the offending tuple.
///
/// When the plateaus are level (`y1 == y3`), `k = 1` collapses the quadratic
/// to a linear equation whose solution is the interval midpoint.
pub fn locate_peak(
    x1: f64,
    y1: f64,
    x3: f64,
    y3: f64,
    y2: f64,
) -> Result<(f64, VertexParabola), ProfileError> {
    if !(y2 > y1.max(y3)) {
        return Err(ProfileError::AbnormalEnergies(vec![y1, y2, y3]));
    }

    let lo = x1.min(x3);
    let hi = x1.max(x3);

    let k = (y3 - y2) / (y1 - y2);
    let a = k - 1.0;
    let b = 2.0 * x3 - 2.0 * k * x1;
    let c = k * x1 * x1 - x3 * x3;

    let no_root = ProfileError::NoValidRoot { lo, hi, y1, y2, y3 };

    let x2 = if a.abs() < DEGENERATE_LEAD {
        // Level plateaus: the linear solve lands on the midpoint.
        -c / b
    } else {
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Err(no_root);
        }
        let sq = discriminant.sqrt();
        let roots = [(-b + sq) / (2.0 * a), (-b - sq) / (2.0 * a)];

        let mut qualified = roots.into_iter().filter(|r| lo <= *r && *r <= hi);
        let first = qualified.next().ok_or(no_root.clone())?;
        match qualified.next() {
            Some(second) if (second - first).abs() > DEGENERATE_LEAD => {
                return Err(ProfileError::AmbiguousRoot(first, second));
            }
            _ => first,
        }
    };

    if !x2.is_finite() || (x1 - x2).abs() < DEGENERATE_LEAD {
        return Err(no_root);
    }

    let m = (y1 - y2) / ((x1 - x2) * (x1 - x2));
    debug!("peak located at x2 = {x2:.6} (m = {m:.6})");

    Ok((x2, VertexParabola { m, x0: x2, y0: y2 }))
}

/// Build a smooth barrier through `(x1, y1)`, the peak and `(x3, y3)` without
/// solving for the peak position: `x2 = (x1 + x3)·x2_ratio` is fixed up
/// front, two vertex parabolas are sampled on either side of it, and an exact
/// interpolating spline is fitted through the combined samples.
///
/// The right half is sampled strictly past `x2`, so the knot set is strictly
/// increasing by construction and the shared vertex appears exactly once.
pub fn spline_blend(
    x1: f64,
    y1: f64,
    x3: f64,
    y3: f64,
    y2: f64,
    x2_ratio: f64,
) -> Result<(f64, CubicSpline), ProfileError> {
    if !(0.0 < x2_ratio && x2_ratio < 1.0) {
        return Err(ProfileError::InvalidRatio(x2_ratio));
    }
    if !(y2 > y1.max(y3)) {
        return Err(ProfileError::AbnormalEnergies(vec![y1, y2, y3]));
    }

    let x2 = (x1 + x3) * x2_ratio;

    let left = quadratic_connect(x1, y1, x2, y2)?;
    let right = quadratic_connect(x3, y3, x2, y2)?;

    let mut xs = Vec::with_capacity(2 * HALF_SAMPLES);
    let mut ys = Vec::with_capacity(2 * HALF_SAMPLES);

    for x in linspace(x1, x2, HALF_SAMPLES) {
        xs.push(x);
        ys.push(left.eval(x));
    }
    // One extra knot on the right half, then drop the one sitting at x2.
    for x in linspace(x2, x3, HALF_SAMPLES + 1).into_iter().skip(1) {
        xs.push(x);
        ys.push(right.eval(x));
    }

    let spline = CubicSpline::interpolating(xs, ys)?;
    Ok((x2, spline))
}
