//! # Configuration Constants
//!
//! Centralized constants for the procedural mesh pipeline. Parameter
//! domains, precision values, and export formatting are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Tessellation parameter domain and defaults
//! - **Shape**: Default shape parameters
//! - **Export**: Text serialization formatting

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Minimum subdivision count along parametric directions.
///
/// Shapes generated below this resolution degenerate (a sphere with fewer
/// than 4 longitude samples collapses its rings). Shape parameters reject
/// smaller values at construction.
pub const MIN_RESOLUTION: u32 = 4;

/// Default subdivision count for hosts that do not specify one.
///
/// Resolution is documented as even; 16 gives a reasonable balance of
/// smoothness and vertex count for interactive use.
pub const DEFAULT_RESOLUTION: u32 = 16;

// =============================================================================
// SHAPE CONSTANTS
// =============================================================================

/// Default overall size for generated shapes.
pub const DEFAULT_SCALE: f64 = 1.0;

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// Decimal places for vertex coordinates in text mesh export.
///
/// Both OBJ and PLY emit coordinates with exactly this many decimal places.
/// This is part of the exported-file contract, not a tunable preference:
/// golden files and downstream parsers depend on it.
pub const EXPORT_DECIMALS: usize = 6;

// =============================================================================
// TESTS
// =============================================================================
