//! Error types for profile interpolation and grid geometry.
//!
//! All failures are immediate validation or domain errors raised before any
//! partial state is handed back to the caller.

use thiserror::Error;

/// Errors raised while interpolating and assembling energy profile curves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("invalid interpolation kind `{0}`, expected `spline` or `quadratic`")]
    InvalidInterpKind(String),

    #[error("expected 2 or 3 state energies, got {0}")]
    InvalidEnergyCount(usize),

    #[error("abnormal energies {0:?}: the transition state must lie above both endpoints")]
    AbnormalEnergies(Vec<f64>),

    #[error("at least 2 sample points per segment are required, got {0}")]
    TooFewSamples(usize),

    #[error("cannot fit a connecting parabola through equal abscissas x1 = x2 = {0}")]
    DegenerateConnect(f64),

    #[error(
        "no peak position in [{lo}, {hi}] for energies ({y1}, {y2}, {y3}): \
         the tuple cannot form a barrier"
    )]
    NoValidRoot {
        lo: f64,
        hi: f64,
        y1: f64,
        y2: f64,
        y3: f64,
    },

    #[error("ambiguous peak position: both {0} and {1} solve the vertex constraints")]
    AmbiguousRoot(f64, f64),

    #[error("x2 ratio {0} is out of range (0, 1)")]
    InvalidRatio(f64),

    #[error("spline needs at least 2 knots, got {0}")]
    TooFewKnots(usize),

    #[error("spline knot arrays differ in length: {xs} abscissas, {ys} ordinates")]
    KnotLengthMismatch { xs: usize, ys: usize },

    #[error("spline abscissas must be strictly increasing (violation at index {0})")]
    NonMonotonicKnots(usize),

    #[error("curve is already part of the chain; append a duplicate() of it instead")]
    DuplicateCurve,
}

/// Errors raised by lattice grid composition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("cannot merge supercells with different cell vectors")]
    BasisMismatch,

    #[error("expansion factors must be at least 1")]
    ZeroExpansion,
}
