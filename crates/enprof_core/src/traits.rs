use num_traits::{Float, FromPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in the sampling helpers.
/// Must support float arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// Translation axis for profile geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// In-place translation along a single axis.
///
/// Returns `&mut Self` so translations can be chained:
/// `curve.translate(1.0, Axis::X).translate(-0.5, Axis::Y)`.
pub trait Translate {
    fn translate(&mut self, distance: f64, axis: Axis) -> &mut Self;
}
