//! # Plane Primitive
//!
//! Generates the mesh for a flat subdivided grid.

use crate::mesh::Mesh;
use glam::DVec3;

/// Creates a plane mesh.
///
/// # Arguments
///
/// * `resolution` - Number of cells along each grid direction
/// * `scale` - Side length of the square extent
/// * `center` - Center of the plane; the grid lies at constant `center.z`
///
/// # Returns
///
/// A `(resolution + 1) x (resolution + 1)` grid of vertices spanning
/// `[-scale/2, scale/2]` in X and Y, with 2 triangles per cell. Vertices
/// are laid out row-major, X fastest.
///
/// # Example
///
/// ```rust
/// use procmesh::primitives::generate_plane;
/// use glam::DVec3;
///
/// let mesh = generate_plane(4, 2.0, DVec3::ZERO);
/// assert_eq!(mesh.vertex_count(), 25);
/// assert_eq!(mesh.triangle_count(), 32);
/// ```
pub fn generate_plane(resolution: u32, scale: f64, center: DVec3) -> Mesh {
    let res = resolution as usize;
    let side = res + 1;
    let half = scale / 2.0;

    let mut mesh = Mesh::with_capacity(side * side, 2 * res * res);

    for i in 0..side {
        let y = center.y - half + scale * i as f64 / resolution as f64;
        for j in 0..side {
            let x = center.x - half + scale * j as f64 / resolution as f64;
            mesh.add_vertex(DVec3::new(x, y, center.z));
        }
    }

    for i in 0..res {
        for j in 0..res {
            let a = (i * side + j) as u32;
            let b = a + 1;
            let c = ((i + 1) * side + j) as u32;
            let d = c + 1;

            mesh.add_triangle(a, b, d);
            mesh.add_triangle(a, d, c);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_counts() {
        let mesh = generate_plane(4, 2.0, DVec3::ZERO);
        assert_eq!(mesh.vertex_count(), 25);
        assert_eq!(mesh.triangle_count(), 32);
    }

    #[test]
    fn test_plane_vertex_count_closed_form() {
        for res in [4u32, 8, 16] {
            let mesh = generate_plane(res, 1.0, DVec3::ZERO);
            assert_eq!(mesh.vertex_count(), ((res + 1) * (res + 1)) as usize);
        }
    }

    #[test]
    fn test_plane_extent() {
        let mesh = generate_plane(8, 4.0, DVec3::ZERO);
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-2.0, -2.0, 0.0));
        assert_eq!(max, DVec3::new(2.0, 2.0, 0.0));
    }

    #[test]
    fn test_plane_constant_z() {
        let center = DVec3::new(0.5, -0.5, 7.0);
        let mesh = generate_plane(6, 3.0, center);
        for v in mesh.vertices() {
            assert_eq!(v.z, 7.0);
        }
    }

    #[test]
    fn test_plane_indices_in_range() {
        let mesh = generate_plane(5, 1.0, DVec3::ZERO);
        assert!(mesh.check_indices().is_ok());
    }
}
