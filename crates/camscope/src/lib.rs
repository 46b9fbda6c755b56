//! camscope: visualize sets of camera poses as 3D wireframe frustums.
//!
//! This crate computes everything a viewer needs from already-parsed pose
//! data: per-camera world matrices, frustum line lists, the scene bounding
//! box with a framing viewpoint, and the crop rectangle for image export.
//! Windowing, drawing and file handling are left to the caller.
//!
//! # Quick Start
//!
//! ```no_run
//! use camscope::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let record: serde_json::Value = serde_json::from_str(
//!         r#"{ "camera_angle_x": 0.7, "frames": [
//!             { "file_path": "r_0", "transform_matrix":
//!                 [[1,0,0,0],[0,1,0,0],[0,0,1,0],[0,0,0,1]] } ] }"#,
//!     )?;
//!
//!     let mut scene = Scene::new();
//!     load_source(&mut scene, "transforms_train.json", &record)?;
//!
//!     let options = ViewerOptions::default();
//!     let framed = frame_scene(&scene, &options, &mut GeometryCache::new())?;
//!     let vertices = framed.line_vertices();
//!     assert_eq!(vertices.len(), 24);
//!     Ok(())
//! }
//! ```

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

mod init;
mod view;

pub use init::init_logging;
pub use view::{export_crop, frame_scene, load_source, FramedScene};

// Re-export core types
pub use camscope_core::{
    bounds::{compute_bounds, compute_fit_pose, BoundingBox, FitPose},
    color::group_color,
    convention::{normalize_pose, UpAxisMode},
    crop::{compute_crop, CropRect, DEFAULT_EXPORT_ASPECT},
    error::{CamscopeError, Result},
    frustum::{
        build_edges, compute_local_corners, transform_geometry, FrustumEdges, FrustumParams,
        MIN_ASPECT,
    },
    options::ViewerOptions,
    transform::{build_matrix, invert},
    DMat4, DVec3, Vec3,
};

// Re-export scene types
pub use camscope_scene::{
    build_camera_geometry, compose_visible, group_name_from_path, line_vertices, CameraFailure,
    CameraGeometry, CameraId, CameraSpec, Composition, GeometryCache, Group, GroupId, LineVertex,
    LoadOutcome, PoseFrame, PoseSource, RenderCamera, Scene,
};
