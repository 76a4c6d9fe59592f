//! # Mesh Errors
//!
//! Error types for mesh generation, transformation, and export.

use thiserror::Error;

/// Errors that can occur in the mesh pipeline.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Shape or transform parameter outside its documented domain.
    ///
    /// Raised at parameter construction, before any geometry is produced.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Face index referencing a vertex outside the vertex set.
    ///
    /// Generation and transformation preserve index validity, so this
    /// surfacing at export time indicates an upstream bug. It is reported
    /// loudly rather than truncated away.
    #[error("Face index {index} out of range (vertex count: {vertex_count})")]
    InvalidIndex { index: u32, vertex_count: usize },

    /// I/O failure while writing an exported mesh to disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_parameter("resolution must be at least 4");
        assert!(err.to_string().contains("Invalid parameter"));
    }

    #[test]
    fn test_invalid_index_display() {
        let err = MeshError::InvalidIndex {
            index: 9,
            vertex_count: 8,
        };
        let text = err.to_string();
        assert!(text.contains('9'));
        assert!(text.contains('8'));
    }
}
