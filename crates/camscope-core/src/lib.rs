//! Core geometry for camscope.
//!
//! This crate holds the pure numeric pipeline behind the viewer:
//! - [`transform`]: row-major pose matrices and inversion
//! - [`frustum`]: local frustum corners and the 12-segment wireframe
//! - [`convention`]: pose inversion and up-axis correction, in fixed order
//! - [`bounds`]: bounding boxes over wireframes and scene framing
//! - [`crop`]: fixed-aspect export rectangles
//! - [`color`]: group palette
//! - [`options`]: viewer configuration
//!
//! Everything here is synchronous and deterministic.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod bounds;
pub mod color;
pub mod convention;
pub mod crop;
pub mod error;
pub mod frustum;
pub mod options;
pub mod transform;

pub use bounds::{compute_bounds, compute_fit_pose, BoundingBox, FitPose};
pub use color::group_color;
pub use convention::{normalize_pose, UpAxisMode};
pub use crop::{compute_crop, CropRect, DEFAULT_EXPORT_ASPECT};
pub use error::{CamscopeError, Result};
pub use frustum::{
    build_edges, compute_local_corners, transform_geometry, FrustumEdges, FrustumKey,
    FrustumParams,
};
pub use options::ViewerOptions;
pub use transform::{build_matrix, invert};

// Re-export glam types for convenience
pub use glam::{DMat4, DVec3, Vec3};
