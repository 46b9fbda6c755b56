//! Scene bounds and viewer framing.

use glam::DVec3;

use crate::frustum::FrustumEdges;

/// Smallest near plane produced by [`compute_fit_pose`].
pub const MIN_FIT_NEAR: f64 = 0.01;

/// Lower bound on the fit viewing distance, used for zero-extent boxes.
pub const MIN_FIT_DISTANCE: f64 = 0.01;

/// Margin applied to the containment distance when placing the eye.
pub const FIT_MARGIN: f64 = 1.5;

/// An axis-aligned bounding box.
///
/// The empty box has `min = +inf` and `max = -inf`, so extending it with any
/// point yields a box around that point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: DVec3,
    pub max: DVec3,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoundingBox {
    /// Creates an empty bounding box.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: DVec3::splat(f64::INFINITY),
            max: DVec3::splat(f64::NEG_INFINITY),
        }
    }

    /// Returns true if no point has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grows the box to contain `point`. Non-finite points are ignored.
    pub fn extend(&mut self, point: DVec3) {
        if point.is_finite() {
            self.min = self.min.min(point);
            self.max = self.max.max(point);
        }
    }

    /// Returns the union of two boxes.
    #[must_use]
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Returns the center, or `None` for an empty box.
    #[must_use]
    pub fn center(&self) -> Option<DVec3> {
        (!self.is_empty()).then(|| (self.min + self.max) * 0.5)
    }

    /// Returns the size along each axis (zero for an empty box).
    #[must_use]
    pub fn extent(&self) -> DVec3 {
        if self.is_empty() {
            DVec3::ZERO
        } else {
            self.max - self.min
        }
    }

    /// Returns true if `point` lies inside or on the box.
    #[must_use]
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Computes the bounding box of every finite endpoint of `geometries`.
pub fn compute_bounds<'a, I>(geometries: I) -> BoundingBox
where
    I: IntoIterator<Item = &'a FrustumEdges>,
{
    let mut bounds = BoundingBox::empty();
    for edges in geometries {
        for point in edges.points() {
            bounds.extend(*point);
        }
    }
    bounds
}

/// Viewer placement that frames a bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitPose {
    /// Viewer position.
    pub eye: DVec3,
    /// Point the viewer looks at (box center).
    pub target: DVec3,
    /// Near clipping plane.
    pub near: f64,
    /// Far clipping plane.
    pub far: f64,
}

/// Computes a viewer pose that frames `bounds`.
///
/// The eye looks at the box center from the `(1, 1, 1)` diagonal at
/// [`FIT_MARGIN`] times the distance needed to contain the largest box
/// dimension within `vertical_fov`. Returns `None` for an empty box, in which
/// case the caller keeps its current view, and for a `vertical_fov` outside
/// `(0, pi)`.
#[must_use]
pub fn compute_fit_pose(bounds: &BoundingBox, vertical_fov: f64) -> Option<FitPose> {
    if !(vertical_fov > 0.0 && vertical_fov < std::f64::consts::PI) {
        log::debug!("fit skipped for vertical fov {vertical_fov}");
        return None;
    }
    let target = bounds.center()?;
    let max_dim = bounds.extent().max_element();

    let distance = (max_dim * 0.5 / (vertical_fov * 0.5).tan()).max(MIN_FIT_DISTANCE);
    let direction = DVec3::ONE.normalize();
    let eye = target + direction * distance * FIT_MARGIN;

    Some(FitPose {
        eye,
        target,
        near: (distance / 1000.0).max(MIN_FIT_NEAR),
        far: distance * 1000.0,
    })
}
