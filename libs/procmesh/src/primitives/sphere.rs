//! # Sphere Primitive
//!
//! Generates the mesh for a sphere using latitude/longitude tessellation.

use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a sphere mesh using latitude/longitude tessellation.
///
/// # Arguments
///
/// * `resolution` - Subdivision count along both parametric directions
/// * `scale` - Sphere radius
/// * `center` - Center of the sphere
///
/// # Returns
///
/// A mesh with `(resolution + 1) * resolution` vertices and
/// `2 * resolution * resolution` triangles.
///
/// # Algorithm
///
/// Latitude rings `i = 0..=resolution` at polar angle
/// `lat = PI * (i / resolution - 0.5)`, each with `resolution` longitude
/// samples at `lon = 2 * PI * j / resolution`. Quads between adjacent
/// rings wrap around in longitude only.
///
/// The first and last rings collapse to the poles as `resolution`
/// coincident-in-theory-but-distinct vertices, so the quads touching a
/// pole contain degenerate triangles. This duplication is deliberate and
/// kept for compatibility with existing exported geometry; callers that
/// need watertight poles must weld them downstream.
///
/// # Example
///
/// ```rust
/// use procmesh::primitives::generate_sphere;
/// use glam::DVec3;
///
/// let mesh = generate_sphere(16, 5.0, DVec3::ZERO);
/// assert_eq!(mesh.vertex_count(), 17 * 16);
/// ```
pub fn generate_sphere(resolution: u32, scale: f64, center: DVec3) -> Mesh {
    let res = resolution as usize;
    let mut mesh = Mesh::with_capacity((res + 1) * res, 2 * res * res);

    for i in 0..=res {
        let lat = PI * (i as f64 / resolution as f64 - 0.5);
        let (sin_lat, cos_lat) = lat.sin_cos();

        for j in 0..res {
            let lon = 2.0 * PI * j as f64 / resolution as f64;
            let (sin_lon, cos_lon) = lon.sin_cos();

            let v = DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat);
            mesh.add_vertex(scale * v + center);
        }
    }

    // Quads between ring i and ring i+1; wraparound on longitude only
    for i in 0..res {
        for j in 0..res {
            let j_next = (j + 1) % res;

            let a0 = (i * res + j) as u32;
            let a1 = (i * res + j_next) as u32;
            let b0 = ((i + 1) * res + j) as u32;
            let b1 = ((i + 1) * res + j_next) as u32;

            mesh.add_triangle(a0, b0, b1);
            mesh.add_triangle(a0, b1, a1);
        }
    }

    mesh
}
