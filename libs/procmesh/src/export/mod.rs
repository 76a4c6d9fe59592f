//! # Mesh Export
//!
//! Serializes vertex/triangle pairs to standard text mesh formats.
//!
//! ## Module Structure (SRP)
//!
//! - `obj` - Wavefront OBJ (1-based indices)
//! - `ply` - ASCII PLY (0-based indices, count-prefixed face lines)

pub mod obj;
pub mod ply;

pub use obj::export_obj;
pub use ply::export_ply;

use std::fs;
use std::path::Path;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::params::ExportFormat;

/// Serializes a mesh in the requested format.
///
/// Both formats emit coordinates with fixed 6-decimal precision; this is
/// the only place the pipeline gives up full f64 precision.
///
/// # Errors
///
/// Returns [`MeshError::InvalidIndex`] if the face set references a vertex
/// outside the vertex set.
///
/// # Example
///
/// ```rust
/// use procmesh::{export, generate_cube, ExportFormat};
/// use glam::DVec3;
///
/// let mesh = generate_cube(1.0, DVec3::ZERO);
/// let text = export(&mesh, ExportFormat::Obj).unwrap();
/// assert!(text.starts_with('#'));
/// ```
pub fn export(mesh: &Mesh, format: ExportFormat) -> Result<String, MeshError> {
    match format {
        ExportFormat::Obj => export_obj(mesh),
        ExportFormat::Ply => export_ply(mesh),
    }
}

/// Serializes a mesh and writes it to disk.
///
/// # Errors
///
/// Returns [`MeshError::InvalidIndex`] for malformed face data or
/// [`MeshError::Io`] if the file cannot be written.
pub fn export_to_file<P: AsRef<Path>>(
    mesh: &Mesh,
    format: ExportFormat,
    path: P,
) -> Result<(), MeshError> {
    let text = export(mesh, format)?;
    fs::write(path, text)?;
    Ok(())
}
