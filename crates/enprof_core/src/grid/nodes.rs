//! Grid nodes.

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Display metadata for a node; inert in the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
    pub color: String,
    /// Marker area in points².
    pub size: f64,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            color: "#000000".to_owned(),
            size: 400.0,
        }
    }
}

/// A node in a 2D lattice grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node2D {
    pub coordinate: Vector2<f64>,
    pub style: NodeStyle,
}

impl Node2D {
    pub fn new(coordinate: [f64; 2]) -> Self {
        Self {
            coordinate: Vector2::from(coordinate),
            style: NodeStyle::default(),
        }
    }

    /// Move the node along `vector` in place.
    pub fn shift(&mut self, vector: &Vector2<f64>) -> &mut Self {
        self.coordinate += vector;
        self
    }

    /// A copy of this node moved by `offset`.
    pub fn clone_at(&self, offset: &Vector2<f64>) -> Self {
        let mut node = self.clone();
        node.shift(offset);
        node
    }

    /// Lift into 3D space with z = 0.
    pub fn to3d(&self) -> Node3D {
        Node3D {
            coordinate: Vector3::new(self.coordinate.x, self.coordinate.y, 0.0),
            style: self.style.clone(),
        }
    }
}

/// A node in a 3D lattice grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node3D {
    pub coordinate: Vector3<f64>,
    pub style: NodeStyle,
}

impl Node3D {
    pub fn new(coordinate: [f64; 3]) -> Self {
        Self {
            coordinate: Vector3::from(coordinate),
            style: NodeStyle::default(),
        }
    }

    pub fn shift(&mut self, vector: &Vector3<f64>) -> &mut Self {
        self.coordinate += vector;
        self
    }

    pub fn clone_at(&self, offset: &Vector3<f64>) -> Self {
        let mut node = self.clone();
        node.shift(offset);
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_moves_in_place_and_chains() {
        let mut node = Node2D::new([1.0, 2.0]);
        node.shift(&Vector2::new(0.5, -1.0))
            .shift(&Vector2::new(0.5, 0.0));
        assert_eq!(node.coordinate, Vector2::new(2.0, 1.0));
    }

    #[test]
    fn clone_at_leaves_the_original_untouched() {
        let node = Node2D::new([1.0, 1.0]);
        let moved = node.clone_at(&Vector2::new(1.0, 0.0));

        assert_eq!(node.coordinate, Vector2::new(1.0, 1.0));
        assert_eq!(moved.coordinate, Vector2::new(2.0, 1.0));
        assert_eq!(moved.style, node.style);
    }

    #[test]
    fn lifting_to_3d_zeroes_the_new_axis() {
        let node = Node2D::new([0.5, 0.25]).to3d();
        assert_eq!(node.coordinate, Vector3::new(0.5, 0.25, 0.0));
    }
}
