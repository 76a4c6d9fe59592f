//! # Mesh Data Structure
//!
//! Core mesh representation with vertices and triangle indices.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Precision is only reduced
/// at the final text-export boundary (fixed 6-decimal formatting); the
/// serde encoding used between pipeline stages round-trips at full
/// precision.
///
/// Vertex order is significant: it is the sole addressing scheme for faces
/// (an index is a 0-based position in the vertex sequence). The invariant
/// that every triangle index is less than the vertex count must hold after
/// every generation and transform step.
///
/// # Example
///
/// ```rust
/// use procmesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.check_indices().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle, fixed winding order)
    triangles: Vec<[u32; 3]>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Creates a mesh from existing vertex and triangle sets.
    pub fn from_parts(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Replaces the vertex set, keeping the face set.
    ///
    /// Used by the transform stage, which produces a new vertex set of the
    /// same length. Panics in debug builds if the length changes, since
    /// that would silently invalidate face indices.
    pub fn replace_vertices(&mut self, vertices: Vec<DVec3>) {
        debug_assert_eq!(vertices.len(), self.vertices.len());
        self.vertices = vertices;
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Checks that every triangle index is in range.
    ///
    /// Generators and the transform stage uphold this invariant, so a
    /// failure here means corrupted input rather than a recoverable
    /// condition.
    pub fn check_indices(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();

        for tri in &self.triangles {
            for &index in tri {
                if index as usize >= vertex_count {
                    return Err(MeshError::InvalidIndex {
                        index,
                        vertex_count,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_add_triangle() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangle(0), [0, 1, 2]);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_check_indices_valid() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        assert!(mesh.check_indices().is_ok());
    }

    #[test]
    fn test_mesh_check_indices_out_of_range() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2); // Indices 1 and 2 do not exist
        let err = mesh.check_indices().unwrap_err();
        match err {
            MeshError::InvalidIndex {
                index,
                vertex_count,
            } => {
                assert_eq!(index, 1);
                assert_eq!(vertex_count, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_mesh_replace_vertices() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.replace_vertices(vec![DVec3::Y, DVec3::Z]);
        assert_eq!(mesh.vertex(0), DVec3::Y);
        assert_eq!(mesh.vertex(1), DVec3::Z);
    }

    #[test]
    fn test_mesh_interchange_round_trip() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.1, -2.5, 1.0 / 3.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_triangle(0, 1, 2);

        // Nested-array encoding: vertices as [[x, y, z], ...], triangles
        // as [[a, b, c], ...]. Must round-trip at full f64 precision.
        let encoded = serde_json::to_string(&mesh).unwrap();
        let decoded: Mesh = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, mesh);

        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value["vertices"][1], serde_json::json!([1.0, 0.0, 0.0]));
        assert_eq!(value["triangles"][0], serde_json::json!([0, 1, 2]));
    }
}
