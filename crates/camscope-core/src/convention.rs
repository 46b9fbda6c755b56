//! Axis-convention normalization for source poses.

use glam::{DMat4, DVec4};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::transform::invert;

/// Which source axis is vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UpAxisMode {
    /// Source is already Y-up; poses are used as-is.
    #[default]
    AsIs,
    /// Source is Z-up; a -90 degree rotation about X maps Z onto Y.
    ZToY,
}

impl UpAxisMode {
    /// Returns the constant correction applied to every pose in this mode.
    #[must_use]
    pub fn correction(self) -> DMat4 {
        match self {
            UpAxisMode::AsIs => DMat4::IDENTITY,
            UpAxisMode::ZToY => Z_UP_TO_Y_UP,
        }
    }

    /// Returns display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            UpAxisMode::AsIs => "as-is",
            UpAxisMode::ZToY => "Z-up to Y-up",
        }
    }
}

/// Rotation of -90 degrees about X, written with exact entries:
/// `X -> X`, `Y -> -Z`, `Z -> Y`.
pub const Z_UP_TO_Y_UP: DMat4 = DMat4::from_cols(
    DVec4::new(1.0, 0.0, 0.0, 0.0),
    DVec4::new(0.0, 0.0, -1.0, 0.0),
    DVec4::new(0.0, 1.0, 0.0, 0.0),
    DVec4::new(0.0, 0.0, 0.0, 1.0),
);

/// Produces a world-space camera matrix from a source pose.
///
/// Inversion (when requested) always happens before the up-axis correction
/// is pre-multiplied. This is the only place that ordering is encoded.
///
/// # Errors
///
/// Returns [`crate::CamscopeError::SingularMatrix`] when `invert_pose` is set
/// and the pose cannot be inverted.
pub fn normalize_pose(pose: &DMat4, invert_pose: bool, up: UpAxisMode) -> Result<DMat4> {
    let c2w = if invert_pose { invert(pose)? } else { *pose };
    Ok(match up {
        UpAxisMode::AsIs => c2w,
        UpAxisMode::ZToY => Z_UP_TO_Y_UP * c2w,
    })
}
