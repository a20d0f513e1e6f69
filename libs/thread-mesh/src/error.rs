//! # Mesh Errors
//!
//! Error types for thread profile generation and ring stack stitching.

use thiserror::Error;

/// Errors that can occur during mesh generation.
///
/// All variants are detected at entry to the responsible routine and returned
/// synchronously; generation is a pure function with no partial state, so the
/// same invalid input always fails the same way.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Caller supplied a non-positive dimension or an internally inconsistent
    /// parameter combination
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Ring stack handed to the stitcher violates its structural contract
    #[error("Malformed ring stack: {message}")]
    MalformedStack { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates a malformed ring stack error.
    pub fn malformed_stack(message: impl Into<String>) -> Self {
        Self::MalformedStack {
            message: message.into(),
        }
    }
}
