//! # Pipeline Parameters
//!
//! Typed configuration structs for each pipeline stage.
//!
//! Hosts describe parameters as dynamic dictionaries with ranges and
//! defaults; here each stage gets an explicit struct with documented valid
//! ranges, validated once at construction and never at arbitrary mutation
//! time.

use config::constants::{DEFAULT_RESOLUTION, DEFAULT_SCALE, MIN_RESOLUTION};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

// =============================================================================
// SHAPE KIND
// =============================================================================

/// The supported primitive solids.
///
/// A closed set: per-shape dispatch is an exhaustive match, so adding a
/// shape is a compile-time-checked concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Cube,
    Sphere,
    Cylinder,
    Cone,
    Plane,
    Torus,
}

impl ShapeKind {
    /// All shape kinds, in a fixed order.
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Cube,
        ShapeKind::Sphere,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Plane,
        ShapeKind::Torus,
    ];
}

// =============================================================================
// SHAPE PARAMETERS
// =============================================================================

/// Validated parameters for primitive generation.
///
/// # Valid ranges
///
/// * `resolution` - subdivision count along parametric directions; must be
///   at least [`MIN_RESOLUTION`]. Documented as even; odd values are inside
///   the accepted domain but produce asymmetric tessellation.
/// * `scale` - overall size; must be strictly positive.
/// * `center` - offset added uniformly to every generated vertex;
///   unrestricted.
///
/// # Example
///
/// ```rust
/// use procmesh::{ShapeKind, ShapeParams};
/// use glam::DVec3;
///
/// let params = ShapeParams::new(ShapeKind::Sphere, 16, 2.0, DVec3::ZERO).unwrap();
/// assert_eq!(params.resolution(), 16);
///
/// assert!(ShapeParams::new(ShapeKind::Sphere, 3, 2.0, DVec3::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    shape: ShapeKind,
    resolution: u32,
    scale: f64,
    center: DVec3,
}

impl ShapeParams {
    /// Creates shape parameters, validating the documented ranges.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidParameter`] if `resolution` is below
    /// [`MIN_RESOLUTION`] or `scale` is not strictly positive.
    pub fn new(
        shape: ShapeKind,
        resolution: u32,
        scale: f64,
        center: DVec3,
    ) -> Result<Self, MeshError> {
        if resolution < MIN_RESOLUTION {
            return Err(MeshError::invalid_parameter(format!(
                "resolution must be at least {MIN_RESOLUTION}: {resolution}"
            )));
        }

        if scale <= 0.0 {
            return Err(MeshError::invalid_parameter(format!(
                "scale must be positive: {scale}"
            )));
        }

        Ok(Self {
            shape,
            resolution,
            scale,
            center,
        })
    }

    /// Creates parameters with the configured defaults for the given shape.
    pub fn with_defaults(shape: ShapeKind) -> Self {
        Self {
            shape,
            resolution: DEFAULT_RESOLUTION,
            scale: DEFAULT_SCALE,
            center: DVec3::ZERO,
        }
    }

    /// Returns the shape kind.
    #[inline]
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    /// Returns the subdivision count.
    #[inline]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Returns the overall size.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the center offset.
    #[inline]
    pub fn center(&self) -> DVec3 {
        self.center
    }
}

// =============================================================================
// TRANSFORM PARAMETERS
// =============================================================================

/// Validated parameters for vertex-set transformation.
///
/// Rotation angles are in degrees, applied about the origin (not the mesh
/// centroid) in the fixed sequence X, then Y, then Z. Scale factors are
/// applied component-wise before any rotation and must be strictly
/// positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformParams {
    rotation_degrees: DVec3,
    scale: DVec3,
}

impl TransformParams {
    /// Creates transform parameters, validating the scale factors.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidParameter`] if any scale factor is not
    /// strictly positive.
    pub fn new(rotation_degrees: DVec3, scale: DVec3) -> Result<Self, MeshError> {
        if scale.x <= 0.0 || scale.y <= 0.0 || scale.z <= 0.0 {
            return Err(MeshError::invalid_parameter(format!(
                "scale factors must be positive: {scale:?}"
            )));
        }

        Ok(Self {
            rotation_degrees,
            scale,
        })
    }

    /// The identity transform: no rotation, unit scale.
    pub fn identity() -> Self {
        Self {
            rotation_degrees: DVec3::ZERO,
            scale: DVec3::ONE,
        }
    }

    /// Returns the per-axis rotation angles in degrees.
    #[inline]
    pub fn rotation_degrees(&self) -> DVec3 {
        self.rotation_degrees
    }

    /// Returns the per-axis scale factors.
    #[inline]
    pub fn scale(&self) -> DVec3 {
        self.scale
    }
}

// =============================================================================
// EXPORT FORMAT
// =============================================================================

/// Text mesh export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Wavefront OBJ (1-based face indices).
    Obj,
    /// ASCII PLY (0-based face indices, count-prefixed face lines).
    Ply,
}

impl ExportFormat {
    /// Maps a host-supplied selector string to a format.
    ///
    /// Unknown selectors fall back to OBJ. This is the documented default
    /// behavior, not an error: the output is byte-identical to requesting
    /// "obj" explicitly.
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "ply" => ExportFormat::Ply,
            _ => ExportFormat::Obj,
        }
    }

    /// Returns the conventional file extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Obj => "obj",
            ExportFormat::Ply => "ply",
        }
    }
}
