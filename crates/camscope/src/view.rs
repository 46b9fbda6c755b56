//! One-call scene framing and export helpers.
//!
//! [`frame_scene`] runs the whole pipeline in its fixed order: compose
//! (pose inversion, then up-axis correction), build world geometry, bound it,
//! and fit the viewer to the bounds.

use camscope_core::bounds::{compute_fit_pose, BoundingBox, FitPose};
use camscope_core::crop::{compute_crop, CropRect};
use camscope_core::error::Result;
use camscope_core::options::ViewerOptions;
use camscope_scene::{
    build_camera_geometry, group_name_from_path, line_vertices, scene_bounds, CameraFailure,
    CameraGeometry, GeometryCache, LineVertex, LoadOutcome, RenderCamera, Scene,
};
use serde_json::Value;

/// Everything the renderer needs for one frame of the scene.
#[derive(Debug)]
pub struct FramedScene {
    /// Render cameras in group order, then frame order.
    pub cameras: Vec<RenderCamera>,
    /// Cameras skipped because their pose could not be inverted.
    pub failures: Vec<CameraFailure>,
    /// World wireframes, parallel to `cameras`.
    pub geometry: Vec<CameraGeometry>,
    pub bounds: BoundingBox,
    /// Viewer placement, or `None` when there is nothing to frame.
    pub fit: Option<FitPose>,
}

impl FramedScene {
    /// Returns the line-list vertex buffer for all cameras.
    #[must_use]
    pub fn line_vertices(&self) -> Vec<LineVertex> {
        line_vertices(&self.geometry)
    }
}

/// Composes, builds and frames the visible cameras of `scene`.
///
/// # Errors
///
/// Returns an error if `options` fail validation.
pub fn frame_scene(
    scene: &Scene,
    options: &ViewerOptions,
    cache: &mut GeometryCache,
) -> Result<FramedScene> {
    options.validate()?;

    let composition = scene.compose(options.invert_poses, options.up_axis);
    let geometry = build_camera_geometry(&composition.cameras, options, cache)?;
    let bounds = scene_bounds(&geometry);
    let fit = compute_fit_pose(&bounds, options.fit_vertical_fov);

    log::debug!(
        "framed {} cameras ({} skipped)",
        composition.cameras.len(),
        composition.failures.len()
    );

    Ok(FramedScene {
        cameras: composition.cameras,
        failures: composition.failures,
        geometry,
        bounds,
        fit,
    })
}

/// Loads a parsed record into `scene` under the name derived from
/// `file_name`.
///
/// # Errors
///
/// Returns [`camscope_core::CamscopeError::InputShape`] for a malformed
/// record.
pub fn load_source(scene: &mut Scene, file_name: &str, record: &Value) -> Result<LoadOutcome> {
    scene.load_json(&group_name_from_path(file_name), record)
}

/// Returns the export rectangle for a rendered surface.
#[must_use]
pub fn export_crop(surface_width: u32, surface_height: u32, options: &ViewerOptions) -> CropRect {
    compute_crop(surface_width, surface_height, options.export_aspect)
}
