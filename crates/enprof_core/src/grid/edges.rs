//! Edges between grid nodes.

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::grid::nodes::{Node2D, Node3D};
use crate::sampling::linspace;

/// Display metadata for an edge; inert in the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    pub color: String,
    pub width: f64,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            color: "#000000".to_owned(),
            width: 1.0,
        }
    }
}

/// An edge between two 2D nodes.
///
/// The endpoint coordinates are captured from the nodes at construction;
/// the edge does not stay linked to them afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge2D {
    pub start: Vector2<f64>,
    pub end: Vector2<f64>,
    /// Extra sample points between the endpoints.
    pub n: usize,
    pub style: EdgeStyle,
}

impl Edge2D {
    pub fn between(start: &Node2D, end: &Node2D) -> Self {
        Self {
            start: start.coordinate,
            end: end.coordinate,
            n: 0,
            // An edge inherits the color of the node it starts from.
            style: EdgeStyle {
                color: start.style.color.clone(),
                ..EdgeStyle::default()
            },
        }
    }

    /// Sampled x values from start to end, `n + 2` points.
    pub fn x(&self) -> Vec<f64> {
        linspace(self.start.x, self.end.x, self.n + 2)
    }

    /// Sampled y values from start to end, `n + 2` points.
    pub fn y(&self) -> Vec<f64> {
        linspace(self.start.y, self.end.y, self.n + 2)
    }

    pub fn shift(&mut self, vector: &Vector2<f64>) -> &mut Self {
        self.start += vector;
        self.end += vector;
        self
    }

    pub fn clone_at(&self, offset: &Vector2<f64>) -> Self {
        let mut edge = self.clone();
        edge.shift(offset);
        edge
    }

    pub fn to3d(&self) -> Edge3D {
        Edge3D {
            start: Vector3::new(self.start.x, self.start.y, 0.0),
            end: Vector3::new(self.end.x, self.end.y, 0.0),
            n: self.n,
            style: self.style.clone(),
        }
    }
}

/// An edge between two 3D nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge3D {
    pub start: Vector3<f64>,
    pub end: Vector3<f64>,
    pub n: usize,
    pub style: EdgeStyle,
}

impl Edge3D {
    pub fn between(start: &Node3D, end: &Node3D) -> Self {
        Self {
            start: start.coordinate,
            end: end.coordinate,
            n: 0,
            style: EdgeStyle {
                color: start.style.color.clone(),
                ..EdgeStyle::default()
            },
        }
    }

    pub fn x(&self) -> Vec<f64> {
        linspace(self.start.x, self.end.x, self.n + 2)
    }

    pub fn y(&self) -> Vec<f64> {
        linspace(self.start.y, self.end.y, self.n + 2)
    }

    pub fn z(&self) -> Vec<f64> {
        linspace(self.start.z, self.end.z, self.n + 2)
    }

    pub fn shift(&mut self, vector: &Vector3<f64>) -> &mut Self {
        self.start += vector;
        self.end += vector;
        self
    }

    pub fn clone_at(&self, offset: &Vector3<f64>) -> Self {
        let mut edge = self.clone();
        edge.shift(offset);
        edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampling_covers_both_endpoints() {
        let a = Node2D::new([0.0, 0.0]);
        let b = Node2D::new([2.0, 1.0]);
        let mut edge = Edge2D::between(&a, &b);
        edge.n = 3;

        let x = edge.x();
        let y = edge.y();
        assert_eq!(x.len(), 5);
        assert_eq!(x[0], 0.0);
        assert_eq!(*x.last().unwrap(), 2.0);
        assert_eq!(y[0], 0.0);
        assert_eq!(*y.last().unwrap(), 1.0);
    }

    #[test]
    fn edge_detaches_from_its_nodes() {
        let mut a = Node2D::new([0.0, 0.0]);
        let b = Node2D::new([1.0, 0.0]);
        let edge = Edge2D::between(&a, &b);

        a.shift(&Vector2::new(5.0, 5.0));
        assert_eq!(edge.start, Vector2::new(0.0, 0.0));
    }

    #[test]
    fn shift_moves_both_endpoints() {
        let a = Node3D::new([0.0, 0.0, 0.0]);
        let b = Node3D::new([1.0, 1.0, 1.0]);
        let mut edge = Edge3D::between(&a, &b);

        edge.shift(&Vector3::new(1.0, 0.0, -1.0));
        assert_eq!(edge.start, Vector3::new(1.0, 0.0, -1.0));
        assert_eq!(edge.end, Vector3::new(2.0, 1.0, 0.0));
        assert_eq!(edge.z(), vec![-1.0, 0.0]);
    }
}
