//! Supercell composition for lattice grids.
//!
//! A supercell bundles nodes and edges expressed in fractional coordinates
//! and maps them through its cell-vector basis exactly once at construction.
//! Cells can then be shifted, cloned to another position, merged, and tiled
//! into larger cells along their basis vectors.

use log::debug;
use nalgebra::{Matrix2, Matrix3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::grid::edges::{Edge2D, Edge3D};
use crate::grid::nodes::{Node2D, Node3D};

/// A 2D supercell. Cell vectors are the matrix rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperCell2D {
    pub nodes: Vec<Node2D>,
    pub edges: Vec<Edge2D>,
    cell_vectors: Matrix2<f64>,
}

impl SuperCell2D {
    /// A supercell with the identity basis: fractional coordinates are
    /// already Cartesian.
    pub fn new(nodes: Vec<Node2D>, edges: Vec<Edge2D>) -> Self {
        Self::with_basis(nodes, edges, Matrix2::identity())
    }

    /// Map the fractional node and edge coordinates through `cell_vectors`.
    pub fn with_basis(
        mut nodes: Vec<Node2D>,
        mut edges: Vec<Edge2D>,
        cell_vectors: Matrix2<f64>,
    ) -> Self {
        let transform = cell_vectors.transpose();
        for node in &mut nodes {
            node.coordinate = transform * node.coordinate;
        }
        for edge in &mut edges {
            edge.start = transform * edge.start;
            edge.end = transform * edge.end;
        }

        Self {
            nodes,
            edges,
            cell_vectors,
        }
    }

    pub fn cell_vectors(&self) -> &Matrix2<f64> {
        &self.cell_vectors
    }

    /// Move every component along `vector` in place.
    pub fn shift(&mut self, vector: &Vector2<f64>) -> &mut Self {
        for node in &mut self.nodes {
            node.shift(vector);
        }
        for edge in &mut self.edges {
            edge.shift(vector);
        }
        self
    }

    /// A copy of this supercell moved by `offset`.
    pub fn clone_at(&self, offset: &Vector2<f64>) -> Self {
        let mut cell = self.clone();
        cell.shift(offset);
        cell
    }

    /// Concatenate the components of two cells sharing the same basis.
    ///
    /// The incoming coordinates are kept as-is; the basis mapping was
    /// already applied when each cell was constructed.
    pub fn merge(mut self, other: SuperCell2D) -> Result<Self, GridError> {
        if self.cell_vectors != other.cell_vectors {
            return Err(GridError::BasisMismatch);
        }
        self.nodes.extend(other.nodes);
        self.edges.extend(other.edges);
        Ok(self)
    }

    /// Tile the cell `nx` times along the first basis vector and `ny` times
    /// along the second.
    pub fn expand(&self, nx: usize, ny: usize) -> Result<Self, GridError> {
        if nx == 0 || ny == 0 {
            return Err(GridError::ZeroExpansion);
        }

        let va: Vector2<f64> = self.cell_vectors.row(0).transpose();
        let vb: Vector2<f64> = self.cell_vectors.row(1).transpose();

        let mut row = self.clone();
        for i in 1..nx {
            row = row.merge(self.clone_at(&(va * i as f64)))?;
        }

        let mut expanded = row.clone();
        for j in 1..ny {
            expanded = expanded.merge(row.clone_at(&(vb * j as f64)))?;
        }

        debug!(
            "expanded supercell {nx}x{ny}: {} nodes, {} edges",
            expanded.nodes.len(),
            expanded.edges.len()
        );
        Ok(expanded)
    }

    /// Map into 3D space; the third basis vector is the unit z axis.
    pub fn to3d(&self) -> SuperCell3D {
        let b = &self.cell_vectors;
        let basis = Matrix3::new(
            b[(0, 0)],
            b[(0, 1)],
            0.0,
            b[(1, 0)],
            b[(1, 1)],
            0.0,
            0.0,
            0.0,
            1.0,
        );

        SuperCell3D {
            nodes: self.nodes.iter().map(Node2D::to3d).collect(),
            edges: self.edges.iter().map(Edge2D::to3d).collect(),
            cell_vectors: basis,
        }
    }
}

/// A 3D supercell. Cell vectors are the matrix rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperCell3D {
    pub nodes: Vec<Node3D>,
    pub edges: Vec<Edge3D>,
    cell_vectors: Matrix3<f64>,
}

impl SuperCell3D {
    pub fn new(nodes: Vec<Node3D>, edges: Vec<Edge3D>) -> Self {
        Self::with_basis(nodes, edges, Matrix3::identity())
    }

    pub fn with_basis(
        mut nodes: Vec<Node3D>,
        mut edges: Vec<Edge3D>,
        cell_vectors: Matrix3<f64>,
    ) -> Self {
        let transform = cell_vectors.transpose();
        for node in &mut nodes {
            node.coordinate = transform * node.coordinate;
        }
        for edge in &mut edges {
            edge.start = transform * edge.start;
            edge.end = transform * edge.end;
        }

        Self {
            nodes,
            edges,
            cell_vectors,
        }
    }

    /// Construct from a 2D supercell laid flat in the z = 0 plane.
    pub fn from2d(supercell: &SuperCell2D) -> Self {
        supercell.to3d()
    }

    pub fn cell_vectors(&self) -> &Matrix3<f64> {
        &self.cell_vectors
    }

    pub fn shift(&mut self, vector: &Vector3<f64>) -> &mut Self {
        for node in &mut self.nodes {
            node.shift(vector);
        }
        for edge in &mut self.edges {
            edge.shift(vector);
        }
        self
    }

    pub fn clone_at(&self, offset: &Vector3<f64>) -> Self {
        let mut cell = self.clone();
        cell.shift(offset);
        cell
    }

    pub fn merge(mut self, other: SuperCell3D) -> Result<Self, GridError> {
        if self.cell_vectors != other.cell_vectors {
            return Err(GridError::BasisMismatch);
        }
        self.nodes.extend(other.nodes);
        self.edges.extend(other.edges);
        Ok(self)
    }

    /// Tile the cell along all three basis vectors.
    pub fn expand(&self, nx: usize, ny: usize, nz: usize) -> Result<Self, GridError> {
        if nx == 0 || ny == 0 || nz == 0 {
            return Err(GridError::ZeroExpansion);
        }

        let va: Vector3<f64> = self.cell_vectors.row(0).transpose();
        let vb: Vector3<f64> = self.cell_vectors.row(1).transpose();
        let vc: Vector3<f64> = self.cell_vectors.row(2).transpose();

        let mut row = self.clone();
        for i in 1..nx {
            row = row.merge(self.clone_at(&(va * i as f64)))?;
        }

        let mut layer = row.clone();
        for j in 1..ny {
            layer = layer.merge(row.clone_at(&(vb * j as f64)))?;
        }

        let mut expanded = layer.clone();
        for k in 1..nz {
            expanded = expanded.merge(layer.clone_at(&(vc * k as f64)))?;
        }

        Ok(expanded)
    }
}
