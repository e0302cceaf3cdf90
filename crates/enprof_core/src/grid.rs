//! Lattice grid geometry for 2D and 3D structure diagrams.
//!
//! Nodes, edges and supercells carry plain coordinates plus inert display
//! metadata; a supercell maps fractional coordinates through its basis once
//! at construction and can then be shifted, cloned and tiled into larger
//! cells. No rendering happens here.

pub mod edges;
pub mod nodes;
pub mod supercell;

pub use edges::{Edge2D, Edge3D};
pub use nodes::{Node2D, Node3D};
pub use supercell::{SuperCell2D, SuperCell3D};
