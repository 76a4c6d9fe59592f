//! # Vertex Transformation
//!
//! Applies per-axis scale and Euler rotation to a vertex set.

use glam::{DMat3, DVec3};

use crate::mesh::Mesh;
use crate::params::TransformParams;

/// Transforms a vertex set.
///
/// Order of operations is fixed and load-bearing:
///
/// 1. component-wise scale by `(scale_x, scale_y, scale_z)`,
/// 2. rotation about the origin (NOT the mesh centroid), applied as three
///    separate rotation-matrix multiplications in the sequence X-axis,
///    then Y-axis, then Z-axis. Rotations do not commute, so the stages
///    must not be collapsed into a single combined matrix.
///
/// Angles are in degrees. A stage whose angle is exactly 0 degrees is
/// skipped; this is an identity optimization and never changes the result.
///
/// Always succeeds for well-formed input. The input is copied, not
/// mutated: the returned vertex set has the same length as the input, so
/// any face set addressing the input remains valid for the output.
///
/// # Example
///
/// ```rust
/// use procmesh::{transform, TransformParams};
/// use glam::DVec3;
///
/// let vertices = vec![DVec3::new(1.0, 0.0, 0.0)];
/// let params = TransformParams::new(DVec3::new(0.0, 0.0, 90.0), DVec3::ONE).unwrap();
/// let rotated = transform(&vertices, &params);
/// assert!((rotated[0] - DVec3::new(0.0, 1.0, 0.0)).length() < 1e-12);
/// ```
pub fn transform(vertices: &[DVec3], params: &TransformParams) -> Vec<DVec3> {
    let scale = params.scale();
    let mut out: Vec<DVec3> = vertices.iter().map(|v| *v * scale).collect();

    let rotation = params.rotation_degrees();
    let stages = [
        (rotation.x, DMat3::from_rotation_x as fn(f64) -> DMat3),
        (rotation.y, DMat3::from_rotation_y),
        (rotation.z, DMat3::from_rotation_z),
    ];

    for (degrees, matrix_for) in stages {
        if degrees == 0.0 {
            continue;
        }
        let matrix = matrix_for(degrees.to_radians());
        for v in &mut out {
            *v = matrix * *v;
        }
    }

    out
}

/// Transforms a mesh in place, replacing its vertex set.
///
/// The face set is untouched; the transform preserves vertex count, so
/// face indices stay valid.
pub fn transform_mesh(mesh: &mut Mesh, params: &TransformParams) {
    let vertices = transform(mesh.vertices(), params);
    mesh.replace_vertices(vertices);
}
