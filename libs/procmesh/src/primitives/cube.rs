//! # Cube Primitive
//!
//! Generates the mesh for an axis-aligned cube.

use crate::mesh::Mesh;
use glam::DVec3;

/// Creates a cube mesh.
///
/// # Arguments
///
/// * `scale` - Side length
/// * `center` - Center of the cube
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face). Corners are laid
/// out bottom ring first, starting at the (-,-,-) corner, then the top
/// ring in the same order; the first triangle is `[0, 1, 2]`. This layout
/// is part of the export contract (golden OBJ output depends on it).
///
/// # Example
///
/// ```rust
/// use procmesh::primitives::generate_cube;
/// use glam::DVec3;
///
/// let mesh = generate_cube(10.0, DVec3::ZERO);
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn generate_cube(scale: f64, center: DVec3) -> Mesh {
    let h = scale / 2.0;
    let mut mesh = Mesh::with_capacity(8, 12);

    // Bottom ring (z = -h), counter-clockwise seen from above
    let v0 = mesh.add_vertex(center + DVec3::new(-h, -h, -h));
    let v1 = mesh.add_vertex(center + DVec3::new(h, -h, -h));
    let v2 = mesh.add_vertex(center + DVec3::new(h, h, -h));
    let v3 = mesh.add_vertex(center + DVec3::new(-h, h, -h));

    // Top ring (z = +h), same order
    let v4 = mesh.add_vertex(center + DVec3::new(-h, -h, h));
    let v5 = mesh.add_vertex(center + DVec3::new(h, -h, h));
    let v6 = mesh.add_vertex(center + DVec3::new(h, h, h));
    let v7 = mesh.add_vertex(center + DVec3::new(-h, h, h));

    // 2 triangles per face, consistent winding

    // Bottom face (z = -h)
    mesh.add_triangle(v0, v1, v2);
    mesh.add_triangle(v0, v2, v3);

    // Top face (z = +h)
    mesh.add_triangle(v4, v6, v5);
    mesh.add_triangle(v4, v7, v6);

    // Front face (y = -h)
    mesh.add_triangle(v0, v4, v5);
    mesh.add_triangle(v0, v5, v1);

    // Right face (x = +h)
    mesh.add_triangle(v1, v5, v6);
    mesh.add_triangle(v1, v6, v2);

    // Back face (y = +h)
    mesh.add_triangle(v2, v6, v7);
    mesh.add_triangle(v2, v7, v3);

    // Left face (x = -h)
    mesh.add_triangle(v3, v7, v4);
    mesh.add_triangle(v3, v4, v0);

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_counts() {
        let mesh = generate_cube(10.0, DVec3::ZERO);
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_cube_counts_independent_of_parameters() {
        let mesh = generate_cube(0.25, DVec3::new(5.0, -3.0, 7.5));
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_cube_bounding_box() {
        let mesh = generate_cube(10.0, DVec3::ZERO);
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::splat(-5.0));
        assert_eq!(max, DVec3::splat(5.0));
    }

    #[test]
    fn test_cube_center_offset() {
        let center = DVec3::new(1.0, 2.0, 3.0);
        let mesh = generate_cube(2.0, center);
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, center - DVec3::ONE);
        assert_eq!(max, center + DVec3::ONE);
    }

    #[test]
    fn test_cube_first_vertex_and_face() {
        // The OBJ golden output depends on this exact layout.
        let mesh = generate_cube(1.0, DVec3::ZERO);
        assert_eq!(mesh.vertex(0), DVec3::splat(-0.5));
        assert_eq!(mesh.triangle(0), [0, 1, 2]);
    }

    #[test]
    fn test_cube_indices_in_range() {
        let mesh = generate_cube(10.0, DVec3::ZERO);
        assert!(mesh.check_indices().is_ok());
    }
}
