//! # OBJ Export
//!
//! Serializes a mesh to Wavefront OBJ text.

use config::constants::EXPORT_DECIMALS;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Serializes a mesh as OBJ text.
///
/// Layout: a header comment line, a blank line, one `v x y z` line per
/// vertex with 6 decimal places, a blank line, then one `f a b c` line per
/// triangle. OBJ face indices are 1-based, so 1 is added to every index.
///
/// # Errors
///
/// Returns [`MeshError::InvalidIndex`] if any face references a vertex
/// outside the vertex set. That is a data-integrity failure from an
/// upstream stage, never a formatting concern, and produces no partial
/// output.
///
/// # Example
///
/// ```rust
/// use procmesh::{export_obj, generate_cube};
/// use glam::DVec3;
///
/// let mesh = generate_cube(1.0, DVec3::ZERO);
/// let text = export_obj(&mesh).unwrap();
/// assert!(text.contains("v -0.500000 -0.500000 -0.500000"));
/// ```
pub fn export_obj(mesh: &Mesh) -> Result<String, MeshError> {
    mesh.check_indices()?;

    let mut out = String::with_capacity(64 + 32 * mesh.vertex_count() + 16 * mesh.triangle_count());

    out.push_str("# Exported by procmesh\n\n");

    for v in mesh.vertices() {
        out.push_str(&format!(
            "v {:.p$} {:.p$} {:.p$}\n",
            v.x,
            v.y,
            v.z,
            p = EXPORT_DECIMALS
        ));
    }

    out.push('\n');

    for tri in mesh.triangles() {
        out.push_str(&format!(
            "f {} {} {}\n",
            tri[0] + 1,
            tri[1] + 1,
            tri[2] + 1
        ));
    }

    Ok(out)
}
