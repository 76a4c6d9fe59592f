//! # Primitives
//!
//! Mesh generation for parametric primitive solids.
//!
//! ## Module Structure (SRP)
//!
//! - `cube` - Axis-aligned box (8 corners, 12 triangles)
//! - `sphere` - Latitude/longitude tessellation
//! - `cylinder` - Capped cylinder and cone (shared circle layout)
//! - `plane` - Flat grid at constant Z
//! - `torus` - Doubly-periodic parametric grid

pub mod cube;
pub mod cylinder;
pub mod plane;
pub mod sphere;
pub mod torus;

pub use cube::generate_cube;
pub use cylinder::{generate_cone, generate_cylinder};
pub use plane::generate_plane;
pub use sphere::generate_sphere;
pub use torus::generate_torus;

use crate::mesh::Mesh;
use crate::params::{ShapeKind, ShapeParams};

/// Generates the primitive described by the given parameters.
///
/// Dispatch is an exhaustive match over [`ShapeKind`], so every shape has
/// a generator and adding a shape without one fails to compile.
///
/// Parameters are validated at construction ([`ShapeParams::new`]); inside
/// the documented domain generation cannot fail, so this returns a mesh
/// directly. Every generated mesh upholds the index invariant: all
/// triangle indices are strictly less than the vertex count.
///
/// # Example
///
/// ```rust
/// use procmesh::{generate, ShapeKind, ShapeParams};
/// use glam::DVec3;
///
/// let params = ShapeParams::new(ShapeKind::Cube, 8, 1.0, DVec3::ZERO).unwrap();
/// let mesh = generate(&params);
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn generate(params: &ShapeParams) -> Mesh {
    let resolution = params.resolution();
    let scale = params.scale();
    let center = params.center();

    match params.shape() {
        ShapeKind::Cube => generate_cube(scale, center),
        ShapeKind::Sphere => generate_sphere(resolution, scale, center),
        ShapeKind::Cylinder => generate_cylinder(resolution, scale, center),
        ShapeKind::Cone => generate_cone(resolution, scale, center),
        ShapeKind::Plane => generate_plane(resolution, scale, center),
        ShapeKind::Torus => generate_torus(resolution, scale, center),
    }
}
