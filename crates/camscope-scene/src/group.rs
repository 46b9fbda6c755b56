//! Camera groups.
//!
//! A group holds the cameras loaded from one source. Its name is the merge
//! key: reloading a source under an existing name swaps the cameras but keeps
//! the group's id, color and visibility.

use std::fmt;

use glam::{DMat4, Vec3};

use crate::source::PoseSource;

/// Opaque group identifier, unique within a [`crate::Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub(crate) u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// One camera of a group.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraSpec {
    /// Horizontal field of view in radians (shared across the group).
    pub fov_x: f64,
    /// Source pose, before normalization.
    pub pose: DMat4,
    /// Frame identifier (source `file_path` or a synthesized name).
    pub label: String,
}

/// Builds the camera list for a validated source.
#[must_use]
pub fn cameras_from_source(source: &PoseSource) -> Vec<CameraSpec> {
    source
        .frames
        .iter()
        .enumerate()
        .map(|(index, frame)| CameraSpec {
            fov_x: source.fov_x,
            pose: frame.pose,
            label: frame.identifier(index),
        })
        .collect()
}

/// A named set of cameras sharing a color and visibility.
#[derive(Debug, Clone)]
pub struct Group {
    id: GroupId,
    name: String,
    color: Vec3,
    visible: bool,
    cameras: Vec<CameraSpec>,
}

impl Group {
    pub(crate) fn new(
        id: GroupId,
        name: impl Into<String>,
        color: Vec3,
        cameras: Vec<CameraSpec>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            visible: true,
            cameras,
        }
    }

    /// Returns the group id.
    #[must_use]
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Returns the unique name of this group.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the color assigned when the group was created.
    #[must_use]
    pub fn color(&self) -> Vec3 {
        self.color
    }

    /// Returns whether this group is visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Sets whether this group is visible.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Returns the cameras in source order.
    #[must_use]
    pub fn cameras(&self) -> &[CameraSpec] {
        &self.cameras
    }

    /// Replaces the cameras, keeping id, color and visibility.
    pub(crate) fn replace_cameras(&mut self, cameras: Vec<CameraSpec>) {
        self.cameras = cameras;
    }

    /// Returns the number of cameras.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    /// Returns true if this group has no cameras.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }
}
