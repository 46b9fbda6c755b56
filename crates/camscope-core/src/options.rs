//! Viewer configuration.
//!
//! These are the numbers the surrounding UI edits (near/far sliders, aspect,
//! frustum scale, invert and up-axis toggles). The core only reads them.

use serde::{Deserialize, Serialize};

use crate::convention::UpAxisMode;
use crate::crop::DEFAULT_EXPORT_ASPECT;
use crate::error::{CamscopeError, Result};
use crate::frustum::FrustumParams;

/// Viewer options that drive geometry generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    /// Near plane distance of drawn frustums (before scale).
    pub near: f64,

    /// Far plane distance of drawn frustums (before scale).
    pub far: f64,

    /// Aspect ratio (width / height) of drawn frustums.
    pub aspect: f64,

    /// Uniform scale applied to near and far.
    pub frustum_scale: f64,

    /// Whether source poses are world-to-camera and must be inverted.
    pub invert_poses: bool,

    /// Up-axis convention of the source poses.
    pub up_axis: UpAxisMode,

    /// Aspect ratio of exported images.
    pub export_aspect: f64,

    /// Vertical field of view of the viewer, used when framing the scene.
    pub fit_vertical_fov: f64,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            near: 0.1,
            far: 2.0,
            aspect: 1.5,
            frustum_scale: 1.0,
            invert_poses: false,
            up_axis: UpAxisMode::AsIs,
            export_aspect: DEFAULT_EXPORT_ASPECT,
            fit_vertical_fov: 50f64.to_radians(),
        }
    }
}

impl ViewerOptions {
    /// Checks that all values are within their domains.
    pub fn validate(&self) -> Result<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.near) {
            return Err(CamscopeError::InvalidOptions(format!(
                "near must be positive, got {}",
                self.near
            )));
        }
        if !(self.far.is_finite() && self.far > self.near) {
            return Err(CamscopeError::InvalidOptions(format!(
                "far ({}) must exceed near ({})",
                self.far, self.near
            )));
        }
        if !positive(self.frustum_scale) {
            return Err(CamscopeError::InvalidOptions(format!(
                "frustum scale must be positive, got {}",
                self.frustum_scale
            )));
        }
        if !positive(self.export_aspect) {
            return Err(CamscopeError::InvalidOptions(format!(
                "export aspect must be positive, got {}",
                self.export_aspect
            )));
        }
        if !(positive(self.fit_vertical_fov) && self.fit_vertical_fov < std::f64::consts::PI) {
            return Err(CamscopeError::InvalidOptions(format!(
                "fit vertical fov must be in (0, pi), got {}",
                self.fit_vertical_fov
            )));
        }
        Ok(())
    }

    /// Returns frustum parameters for a group with the given horizontal FOV.
    ///
    /// Near and far are multiplied by the frustum scale.
    pub fn frustum_params(&self, fov_x: f64) -> Result<FrustumParams> {
        FrustumParams::new(
            fov_x,
            self.aspect,
            self.near * self.frustum_scale,
            self.far * self.frustum_scale,
        )
    }

    /// Parses and validates options from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Serializes options to a pretty-printed JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
