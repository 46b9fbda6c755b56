//! Fixed-aspect cropping for image export.

use serde::{Deserialize, Serialize};

/// Default export aspect ratio (4:3).
pub const DEFAULT_EXPORT_ASPECT: f64 = 4.0 / 3.0;

/// A pixel rectangle inside a rendered surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Returns true if the rectangle lies within a `width` x `height` surface.
    #[must_use]
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        u64::from(self.x) + u64::from(self.width) <= u64::from(width)
            && u64::from(self.y) + u64::from(self.height) <= u64::from(height)
    }

    /// Returns true if the rectangle has no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Computes the largest centered rectangle of `target_aspect` (width /
/// height) inside a `surface_width` x `surface_height` surface.
///
/// A non-finite or non-positive aspect yields the full surface.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compute_crop(surface_width: u32, surface_height: u32, target_aspect: f64) -> CropRect {
    if !target_aspect.is_finite() || target_aspect <= 0.0 {
        log::debug!("export aspect {target_aspect} unusable, exporting full surface");
        return CropRect {
            x: 0,
            y: 0,
            width: surface_width,
            height: surface_height,
        };
    }

    let w = f64::from(surface_width);
    let h = f64::from(surface_height);

    // Float-to-int casts saturate, and both values are already clamped by min.
    let width = (h * target_aspect).floor().min(w) as u32;
    let height = (w / target_aspect).floor().min(h) as u32;

    CropRect {
        x: (surface_width - width) / 2,
        y: (surface_height - height) / 2,
        width,
        height,
    }
}
