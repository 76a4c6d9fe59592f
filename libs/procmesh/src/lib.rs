//! # Procmesh
//!
//! Procedural primitive mesh toolkit: generation, transformation, and
//! text export.
//!
//! ## Architecture
//!
//! ```text
//! Generator (ShapeParams → Mesh)
//!     → Transformer (TransformParams, optional)
//!     → Exporter (OBJ / PLY text)
//! ```
//!
//! The three stages are pure functions over value data: each call copies
//! its input, mutates no shared state, and is independently reentrant.
//! The transformer also accepts vertex sets from other sources since it
//! only requires a generic vertex array. Between stages, a [`Mesh`]
//! encodes/decodes losslessly as nested numeric arrays via serde.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use procmesh::{
//!     export, generate, transform_mesh, ExportFormat, ShapeKind, ShapeParams, TransformParams,
//! };
//!
//! let params = ShapeParams::new(ShapeKind::Torus, 16, 2.0, DVec3::ZERO)?;
//! let mut mesh = generate(&params);
//!
//! let spin = TransformParams::new(DVec3::new(0.0, 0.0, 45.0), DVec3::ONE)?;
//! transform_mesh(&mut mesh, &spin);
//!
//! let text = export(&mesh, ExportFormat::Obj)?;
//! assert!(text.starts_with('#'));
//! # Ok::<(), procmesh::MeshError>(())
//! ```

pub mod error;
pub mod export;
pub mod mesh;
pub mod params;
pub mod primitives;
pub mod scalar;
pub mod transform;

pub use error::MeshError;
pub use export::{export, export_obj, export_ply, export_to_file};
pub use mesh::Mesh;
pub use params::{ExportFormat, ShapeKind, ShapeParams, TransformParams};
pub use primitives::{
    generate, generate_cone, generate_cube, generate_cylinder, generate_plane, generate_sphere,
    generate_torus,
};
pub use transform::{transform, transform_mesh};
