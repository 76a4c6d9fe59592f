//! # Cylinder and Cone Primitives
//!
//! Generates meshes for capped cylinders and cones. Both shapes share the
//! same layout: cap-center vertices first, then the circle rings, with
//! side and cap triangles fanning out from the center vertices.

use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a capped cylinder mesh.
///
/// # Arguments
///
/// * `resolution` - Number of segments around the circumference
/// * `scale` - Height; the circle radius is `scale / 2`
/// * `center` - Center of the cylinder
///
/// # Returns
///
/// A mesh with `2 + 2 * resolution` vertices: bottom-center at index 0,
/// top-center at index 1, then the bottom circle, then the top circle.
/// Caps fan from the center vertices; side quads wrap around in longitude.
///
/// # Example
///
/// ```rust
/// use procmesh::primitives::generate_cylinder;
/// use glam::DVec3;
///
/// let mesh = generate_cylinder(32, 10.0, DVec3::ZERO);
/// assert_eq!(mesh.vertex_count(), 2 + 64);
/// ```
pub fn generate_cylinder(resolution: u32, scale: f64, center: DVec3) -> Mesh {
    let res = resolution as usize;
    let radius = scale / 2.0;
    let z_bottom = center.z - scale / 2.0;
    let z_top = center.z + scale / 2.0;

    let mut mesh = Mesh::with_capacity(2 + 2 * res, 4 * res);

    let bottom_center = mesh.add_vertex(DVec3::new(center.x, center.y, z_bottom));
    let top_center = mesh.add_vertex(DVec3::new(center.x, center.y, z_top));

    for j in 0..res {
        let theta = 2.0 * PI * j as f64 / resolution as f64;
        let (sin_theta, cos_theta) = theta.sin_cos();
        mesh.add_vertex(DVec3::new(
            center.x + radius * cos_theta,
            center.y + radius * sin_theta,
            z_bottom,
        ));
    }

    for j in 0..res {
        let theta = 2.0 * PI * j as f64 / resolution as f64;
        let (sin_theta, cos_theta) = theta.sin_cos();
        mesh.add_vertex(DVec3::new(
            center.x + radius * cos_theta,
            center.y + radius * sin_theta,
            z_top,
        ));
    }

    let bottom_ring = |j: usize| (2 + j) as u32;
    let top_ring = |j: usize| (2 + res + j) as u32;

    for j in 0..res {
        let j_next = (j + 1) % res;

        // Caps fan from the center vertices
        mesh.add_triangle(bottom_center, bottom_ring(j_next), bottom_ring(j));
        mesh.add_triangle(top_center, top_ring(j), top_ring(j_next));

        // Side quad, split into 2 triangles
        mesh.add_triangle(bottom_ring(j), bottom_ring(j_next), top_ring(j_next));
        mesh.add_triangle(bottom_ring(j), top_ring(j_next), top_ring(j));
    }

    mesh
}

/// Creates a cone mesh.
///
/// # Arguments
///
/// * `resolution` - Number of segments around the base circle
/// * `scale` - Height; the base radius is `scale / 2`
/// * `center` - Center of the cone's bounding extent
///
/// # Returns
///
/// A mesh with `2 + resolution` vertices: base-center at index 0, apex at
/// index 1 (replacing the cylinder's top-center and top ring), then the
/// base circle. The base cap fans from the base-center, the side from the
/// apex.
pub fn generate_cone(resolution: u32, scale: f64, center: DVec3) -> Mesh {
    let res = resolution as usize;
    let radius = scale / 2.0;
    let z_base = center.z - scale / 2.0;
    let z_apex = center.z + scale / 2.0;

    let mut mesh = Mesh::with_capacity(2 + res, 2 * res);

    let base_center = mesh.add_vertex(DVec3::new(center.x, center.y, z_base));
    let apex = mesh.add_vertex(DVec3::new(center.x, center.y, z_apex));

    for j in 0..res {
        let theta = 2.0 * PI * j as f64 / resolution as f64;
        let (sin_theta, cos_theta) = theta.sin_cos();
        mesh.add_vertex(DVec3::new(
            center.x + radius * cos_theta,
            center.y + radius * sin_theta,
            z_base,
        ));
    }

    let base_ring = |j: usize| (2 + j) as u32;

    for j in 0..res {
        let j_next = (j + 1) % res;

        mesh.add_triangle(base_center, base_ring(j_next), base_ring(j));
        mesh.add_triangle(base_ring(j), base_ring(j_next), apex);
    }

    mesh
}
