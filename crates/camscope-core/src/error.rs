//! Error types for camscope.

use thiserror::Error;

/// The main error type for camscope operations.
#[derive(Error, Debug)]
pub enum CamscopeError {
    /// A loaded pose record does not have the expected shape.
    ///
    /// Fails the whole source; already-loaded groups are unaffected.
    #[error("invalid pose source: {0}")]
    InputShape(String),

    /// A pose could not be inverted.
    ///
    /// Fails a single camera only.
    #[error("pose matrix is singular (determinant {determinant:e})")]
    SingularMatrix { determinant: f64 },

    /// Frustum parameters outside their documented domain.
    #[error("invalid frustum parameters: fov_x={fov_x}, near={near}, far={far}")]
    InvalidFrustum { fov_x: f64, near: f64, far: f64 },

    /// Viewer options failed validation.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// A group with the given id was not found.
    #[error("group '{0}' not found")]
    GroupNotFound(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for camscope operations.
pub type Result<T> = std::result::Result<T, CamscopeError>;
