//! The `enprof_core` crate is the geometry engine behind energy profile and
//! lattice grid diagrams. It turns discrete state energies into smooth
//! reaction-coordinate curves, stitches them into multi-step pathways, and
//! composes lattice supercells, leaving all drawing to a rendering frontend.
//!
//! Key components:
//! - **Interpolate**: quadratic and spline-blended barrier construction with
//!   analytic peak location.
//! - **Profile**: sampled point generation for 2- and 3-state elementary
//!   steps.
//! - **Curve / Chain**: the elementary curve entity with its eigen points,
//!   and end-to-end chain composition.
//! - **Grid**: node, edge and supercell geometry for structure diagrams.

pub mod chain;
pub mod curve;
pub mod error;
pub mod grid;
pub mod interpolate;
pub mod profile;
pub mod sampling;
pub mod spline;
pub mod traits;
