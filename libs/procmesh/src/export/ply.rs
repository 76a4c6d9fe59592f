//! # PLY Export
//!
//! Serializes a mesh to ASCII PLY text.

use config::constants::EXPORT_DECIMALS;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Serializes a mesh as ASCII PLY text.
///
/// The header declares `format ascii 1.0`, the vertex and face element
/// counts, `float` x/y/z properties, and a face property list typed
/// `uchar int vertex_indices`, terminated by `end_header`. The body is one
/// `x y z` line per vertex (6 decimal places) followed by one `3 a b c`
/// line per triangle. PLY face indices stay 0-based; the literal count
/// prefix is always `3` since all faces are triangles.
///
/// # Errors
///
/// Returns [`MeshError::InvalidIndex`] if any face references a vertex
/// outside the vertex set (data-integrity failure, no partial output).
pub fn export_ply(mesh: &Mesh) -> Result<String, MeshError> {
    mesh.check_indices()?;

    let mut out = String::with_capacity(256 + 32 * mesh.vertex_count() + 16 * mesh.triangle_count());

    out.push_str("ply\n");
    out.push_str("format ascii 1.0\n");
    out.push_str("comment Exported by procmesh\n");
    out.push_str(&format!("element vertex {}\n", mesh.vertex_count()));
    out.push_str("property float x\n");
    out.push_str("property float y\n");
    out.push_str("property float z\n");
    out.push_str(&format!("element face {}\n", mesh.triangle_count()));
    out.push_str("property list uchar int vertex_indices\n");
    out.push_str("end_header\n");

    for v in mesh.vertices() {
        out.push_str(&format!(
            "{:.p$} {:.p$} {:.p$}\n",
            v.x,
            v.y,
            v.z,
            p = EXPORT_DECIMALS
        ));
    }

    for tri in mesh.triangles() {
        out.push_str(&format!("3 {} {} {}\n", tri[0], tri[1], tri[2]));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{generate_cube, generate_sphere};
    use glam::DVec3;

    #[test]
    fn test_ply_header() {
        let mesh = generate_cube(1.0, DVec3::ZERO);
        let text = export_ply(&mesh).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "ply");
        assert_eq!(lines[1], "format ascii 1.0");
        assert_eq!(lines[3], "element vertex 8");
        assert_eq!(lines[4], "property float x");
        assert_eq!(lines[5], "property float y");
        assert_eq!(lines[6], "property float z");
        assert_eq!(lines[7], "element face 12");
        assert_eq!(lines[8], "property list uchar int vertex_indices");
        assert_eq!(lines[9], "end_header");
    }

    #[test]
    fn test_ply_element_counts_match_mesh() {
        let mesh = generate_sphere(8, 1.0, DVec3::ZERO);
        let text = export_ply(&mesh).unwrap();
        assert!(text.contains(&format!("element vertex {}", mesh.vertex_count())));
        assert!(text.contains(&format!("element face {}", mesh.triangle_count())));
    }

    #[test]
    fn test_ply_face_lines_count_prefixed() {
        let mesh = generate_cube(1.0, DVec3::ZERO);
        let text = export_ply(&mesh).unwrap();
        let body: Vec<&str> = text
            .lines()
            .skip_while(|l| *l != "end_header")
            .skip(1)
            .collect();

        // 8 vertex lines, then 12 face lines each prefixed with literal 3
        assert_eq!(body.len(), 8 + 12);
        for face_line in &body[8..] {
            assert!(face_line.starts_with("3 "), "bad face line: {face_line}");
        }
        // Indices stay 0-based
        assert_eq!(body[8], "3 0 1 2");
    }

    #[test]
    fn test_ply_rejects_out_of_range_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(7, 0, 0);
        let err = export_ply(&mesh).unwrap_err();
        assert!(matches!(err, MeshError::InvalidIndex { .. }));
    }
}
