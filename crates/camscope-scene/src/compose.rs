//! Scene composition: groups to render cameras.

use std::fmt;

use camscope_core::convention::{normalize_pose, UpAxisMode};
use camscope_core::error::CamscopeError;
use camscope_core::transform::translation;
use glam::{DMat4, DVec3, Vec3};

use crate::group::{Group, GroupId};

/// Identifies a camera by group and frame index.
///
/// Displays as `{group}:{frame}` and stays stable as long as the group keeps
/// its id and frame order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CameraId {
    pub group: GroupId,
    pub frame: usize,
}

impl fmt::Display for CameraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.frame)
    }
}

/// A camera ready for drawing, with normalization already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCamera {
    pub id: CameraId,
    /// `{group name}/{frame identifier}`.
    pub label: String,
    /// Camera-to-world matrix in the viewer's convention.
    pub world: DMat4,
    pub color: Vec3,
    /// Horizontal FOV of the owning group.
    pub fov_x: f64,
}

impl RenderCamera {
    /// Returns the camera origin in world space, used for label placement.
    #[must_use]
    pub fn origin(&self) -> DVec3 {
        translation(&self.world)
    }
}

/// A camera that could not be normalized.
#[derive(Debug)]
pub struct CameraFailure {
    pub id: CameraId,
    pub label: String,
    pub error: CamscopeError,
}

/// Output of [`compose_visible`].
///
/// Cameras whose pose cannot be inverted are skipped and listed in
/// `failures`; the rest of their group is still composed.
#[derive(Debug, Default)]
pub struct Composition {
    /// Cameras in group order, then frame order.
    pub cameras: Vec<RenderCamera>,
    pub failures: Vec<CameraFailure>,
}

/// Flattens all visible groups into render cameras.
///
/// Hidden groups are skipped entirely. Each pose goes through
/// [`normalize_pose`] (inversion first, then the up-axis correction) and is
/// stamped with its group's color.
#[must_use]
pub fn compose_visible(groups: &[Group], invert_poses: bool, up: UpAxisMode) -> Composition {
    let mut composition = Composition::default();

    for group in groups.iter().filter(|g| g.is_visible()) {
        for (frame, camera) in group.cameras().iter().enumerate() {
            let id = CameraId {
                group: group.id(),
                frame,
            };
            let label = format!("{}/{}", group.name(), camera.label);

            match normalize_pose(&camera.pose, invert_poses, up) {
                Ok(world) => composition.cameras.push(RenderCamera {
                    id,
                    label,
                    world,
                    color: group.color(),
                    fov_x: camera.fov_x,
                }),
                Err(error) => {
                    log::warn!("skipping camera '{label}': {error}");
                    composition.failures.push(CameraFailure { id, label, error });
                }
            }
        }
    }

    composition
}
