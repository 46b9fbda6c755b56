//! Validated pose sources.
//!
//! A source is an already-parsed JSON record of the form
//! `{ "camera_angle_x": <radians>, "frames": [{ "file_path"?: <string>,
//! "transform_matrix": [[..4], [..4], [..4], [..4]] }, ...] }`.
//! [`PoseSource::from_json`] is the single validation step: it either yields a
//! fully typed source or an input-shape error for the whole record.

use std::path::Path;

use camscope_core::error::{CamscopeError, Result};
use camscope_core::transform::build_matrix;
use glam::DMat4;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct RawFrame {
    #[serde(default)]
    file_path: Option<String>,
    transform_matrix: [[f64; 4]; 4],
}

/// One frame of a pose source.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseFrame {
    /// Frame identifier from the source, if it had one.
    pub file_path: Option<String>,
    /// Pose built from the row-major `transform_matrix`.
    pub pose: DMat4,
}

impl PoseFrame {
    /// Returns the frame identifier, synthesizing one from `index` when the
    /// source had none.
    #[must_use]
    pub fn identifier(&self, index: usize) -> String {
        match &self.file_path {
            Some(path) => path.clone(),
            None => synthesized_frame_name(index),
        }
    }
}

/// A validated pose source: one shared horizontal FOV and ordered frames.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseSource {
    /// Horizontal field of view in radians, shared by every frame.
    pub fov_x: f64,
    /// Frames in source order.
    pub frames: Vec<PoseFrame>,
}

impl PoseSource {
    /// Validates a parsed JSON record.
    ///
    /// # Errors
    ///
    /// Returns [`CamscopeError::InputShape`] if `frames` is missing or not an
    /// array, if `camera_angle_x` is missing or outside `(0, pi)`,
    /// or if any frame lacks a 4x4 numeric `transform_matrix`.
    pub fn from_json(value: &Value) -> Result<Self> {
        let record = value
            .as_object()
            .ok_or_else(|| shape_error("record is not an object"))?;

        let frames = match record.get("frames") {
            Some(Value::Array(frames)) => frames,
            Some(_) => return Err(shape_error("'frames' is not an array")),
            None => return Err(shape_error("missing 'frames'")),
        };

        let fov_x = record
            .get("camera_angle_x")
            .and_then(Value::as_f64)
            .ok_or_else(|| shape_error("missing or non-numeric 'camera_angle_x'"))?;
        if !(fov_x.is_finite() && fov_x > 0.0 && fov_x < std::f64::consts::PI) {
            return Err(shape_error(format!(
                "'camera_angle_x' must be in (0, pi), got {fov_x}"
            )));
        }

        let frames = frames
            .iter()
            .enumerate()
            .map(|(index, frame)| {
                let raw = RawFrame::deserialize(frame)
                    .map_err(|err| shape_error(format!("frame {index}: {err}")))?;
                Ok(PoseFrame {
                    file_path: raw.file_path,
                    pose: build_matrix(&raw.transform_matrix),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { fov_x, frames })
    }

    /// Returns the number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if the source has no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Returns the identifier used for a frame without a `file_path`.
#[must_use]
pub fn synthesized_frame_name(index: usize) -> String {
    format!("frame_{index}")
}

/// Derives a group name from a file name or path: the file stem, without
/// directories or extension.
///
/// Reloading a file with the same derived name replaces that group.
#[must_use]
pub fn group_name_from_path(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map_or_else(|| path.to_string(), str::to_string)
}

fn shape_error(message: impl Into<String>) -> CamscopeError {
    CamscopeError::InputShape(message.into())
}
