//! # Config Crate
//!
//! Centralized configuration constants for the procedural mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, MIN_RESOLUTION, EXPORT_DECIMALS};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Use the resolution floor when validating shape parameters
//! assert!(MIN_RESOLUTION >= 4);
//!
//! // Fixed decimal precision for text mesh export
//! assert_eq!(EXPORT_DECIMALS, 6);
//! ```

pub mod constants;
