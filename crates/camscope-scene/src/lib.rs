//! Scene composition for camscope.
//!
//! Pose sources are validated into [`PoseSource`]s, stored as named
//! [`Group`]s in a [`Scene`], and flattened by [`compose_visible`] into
//! [`RenderCamera`]s. [`build_camera_geometry`] turns those into world-space
//! wireframes and [`line_vertices`] into a GPU line list.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod compose;
pub mod geometry;
pub mod group;
pub mod scene;
pub mod source;

pub use compose::{compose_visible, CameraFailure, CameraId, Composition, RenderCamera};
pub use geometry::{
    build_camera_geometry, line_vertices, scene_bounds, vertex_bytes, CameraGeometry,
    GeometryCache, LineVertex,
};
pub use group::{CameraSpec, Group, GroupId};
pub use scene::{LoadOutcome, Scene};
pub use source::{group_name_from_path, PoseFrame, PoseSource};
