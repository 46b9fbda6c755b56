//! Frustum wireframe geometry.
//!
//! A frustum is described in camera-local space: the camera sits at the
//! origin, looks down `-Z` and has `+Y` as up. Corners are always ordered
//! near-bottom-left, near-bottom-right, near-top-right, near-top-left, then
//! the same order on the far plane.

use glam::{DMat4, DVec3};

use crate::error::{CamscopeError, Result};

/// Smallest aspect ratio used when computing frustum heights.
///
/// Zero, negative and NaN aspects are clamped to this value rather than
/// rejected, so corners stay finite.
pub const MIN_ASPECT: f64 = 1e-6;

/// Number of corners of a frustum.
pub const CORNER_COUNT: usize = 8;

/// Number of wireframe segments of a frustum.
pub const SEGMENT_COUNT: usize = 12;

/// Number of line-list endpoints of a frustum (two per segment).
pub const EDGE_POINT_COUNT: usize = SEGMENT_COUNT * 2;

/// Corner index pairs, in output order: near rectangle, far rectangle, then
/// the four edges connecting near to far.
pub const EDGE_INDICES: [[usize; 2]; SEGMENT_COUNT] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// Parameters that define a frustum's local shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumParams {
    /// Horizontal field of view in radians.
    pub fov_x: f64,
    /// Aspect ratio (width / height). Clamped to [`MIN_ASPECT`] when used.
    pub aspect: f64,
    /// Near plane distance.
    pub near: f64,
    /// Far plane distance.
    pub far: f64,
}

impl FrustumParams {
    /// Creates validated frustum parameters.
    ///
    /// The aspect ratio is not validated; see [`MIN_ASPECT`].
    ///
    /// # Errors
    ///
    /// Returns [`CamscopeError::InvalidFrustum`] unless `0 < fov_x < pi`,
    /// `near > 0` and `far > near`, all finite. At `fov_x >= pi` the
    /// half-width changes sign and the corner order would flip.
    pub fn new(fov_x: f64, aspect: f64, near: f64, far: f64) -> Result<Self> {
        let valid = fov_x.is_finite()
            && near.is_finite()
            && far.is_finite()
            && fov_x > 0.0
            && fov_x < std::f64::consts::PI
            && near > 0.0
            && far > near;
        if !valid {
            return Err(CamscopeError::InvalidFrustum { fov_x, near, far });
        }
        Ok(Self {
            fov_x,
            aspect,
            near,
            far,
        })
    }

    /// Returns the same parameters with a different horizontal FOV.
    #[must_use]
    pub fn with_fov_x(self, fov_x: f64) -> Self {
        Self { fov_x, ..self }
    }

    /// Returns a structural key suitable for hashing.
    #[must_use]
    pub fn key(&self) -> FrustumKey {
        FrustumKey([
            self.fov_x.to_bits(),
            self.aspect.to_bits(),
            self.near.to_bits(),
            self.far.to_bits(),
        ])
    }

    /// Computes the local-space corners of this frustum.
    #[must_use]
    pub fn local_corners(&self) -> [DVec3; CORNER_COUNT] {
        compute_local_corners(self.fov_x, self.aspect, self.near, self.far)
    }

    /// Computes the local-space wireframe of this frustum.
    #[must_use]
    pub fn local_edges(&self) -> FrustumEdges {
        build_edges(&self.local_corners())
    }
}

/// Value-equality key for [`FrustumParams`], built from the bit patterns of
/// its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrustumKey([u64; 4]);

/// Returns `aspect` clamped to [`MIN_ASPECT`].
#[must_use]
pub fn clamp_aspect(aspect: f64) -> f64 {
    // f64::max ignores a NaN operand
    let clamped = aspect.max(MIN_ASPECT);
    if clamped != aspect {
        log::debug!("frustum aspect {aspect} clamped to {clamped}");
    }
    clamped
}

/// Computes the eight local-space corners of a frustum.
///
/// At distance `d` the half-width is `d * tan(fov_x / 2)` and the half-height
/// is the half-width divided by the clamped aspect. The corner order holds for
/// `0 < fov_x < pi` and `0 < near < far`, the domain [`FrustumParams::new`]
/// enforces.
#[must_use]
pub fn compute_local_corners(
    fov_x: f64,
    aspect: f64,
    near: f64,
    far: f64,
) -> [DVec3; CORNER_COUNT] {
    let aspect = clamp_aspect(aspect);
    let tan_half = (fov_x * 0.5).tan();

    let plane = |d: f64| {
        let half_w = d * tan_half;
        let half_h = half_w / aspect;
        [
            DVec3::new(-half_w, -half_h, -d),
            DVec3::new(half_w, -half_h, -d),
            DVec3::new(half_w, half_h, -d),
            DVec3::new(-half_w, half_h, -d),
        ]
    };

    let [n0, n1, n2, n3] = plane(near);
    let [f0, f1, f2, f3] = plane(far);
    [n0, n1, n2, n3, f0, f1, f2, f3]
}

/// Builds the 12-segment line list connecting frustum corners.
#[must_use]
pub fn build_edges(corners: &[DVec3; CORNER_COUNT]) -> FrustumEdges {
    let mut points = [DVec3::ZERO; EDGE_POINT_COUNT];
    for (i, [a, b]) in EDGE_INDICES.iter().enumerate() {
        points[2 * i] = corners[*a];
        points[2 * i + 1] = corners[*b];
    }
    FrustumEdges { points }
}

/// A frustum wireframe as a line list of 24 endpoints (12 segments).
///
/// Segment order follows [`EDGE_INDICES`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumEdges {
    points: [DVec3; EDGE_POINT_COUNT],
}

impl FrustumEdges {
    /// Returns all endpoints in line-list order.
    #[must_use]
    pub fn points(&self) -> &[DVec3; EDGE_POINT_COUNT] {
        &self.points
    }

    /// Iterates over the segments as `(start, end)` pairs.
    pub fn segments(&self) -> impl Iterator<Item = (DVec3, DVec3)> + '_ {
        self.points.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Returns a copy with `matrix` applied to every endpoint.
    #[must_use]
    pub fn transform(&self, matrix: &DMat4) -> Self {
        Self {
            points: self.points.map(|p| matrix.transform_point3(p)),
        }
    }
}

/// Applies `matrix` to every endpoint of `edges`, leaving `edges` untouched.
#[must_use]
pub fn transform_geometry(edges: &FrustumEdges, matrix: &DMat4) -> FrustumEdges {
    edges.transform(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn params() -> FrustumParams {
        FrustumParams::new(0.7, 1.5, 0.1, 2.0).unwrap()
    }

    #[test]
    fn test_corner_order() {
        let c = params().local_corners();
        // near-bottom-left, near-bottom-right, near-top-right, near-top-left
        assert!(c[0].x < 0.0 && c[0].y < 0.0);
        assert!(c[1].x > 0.0 && c[1].y < 0.0);
        assert!(c[2].x > 0.0 && c[2].y > 0.0);
        assert!(c[3].x < 0.0 && c[3].y > 0.0);
        for i in 0..4 {
            assert_eq!(c[i].z, -0.1);
            assert_eq!(c[i + 4].z, -2.0);
            assert_eq!(c[i].x.signum(), c[i + 4].x.signum());
            assert_eq!(c[i].y.signum(), c[i + 4].y.signum());
        }
    }

    #[test]
    fn test_corner_extents() {
        let c = compute_local_corners(std::f64::consts::FRAC_PI_2, 2.0, 1.0, 4.0);
        // tan(45 deg) = 1
        assert!((c[2].x - 1.0).abs() < 1e-12);
        assert!((c[2].y - 0.5).abs() < 1e-12);
        assert!((c[6].x - 4.0).abs() < 1e-12);
        assert!((c[6].y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_aspect_is_clamped() {
        for aspect in [0.0, -3.0, f64::NAN, 1e-300] {
            let corners = compute_local_corners(0.7, aspect, 0.1, 2.0);
            assert!(corners.iter().all(|p| p.is_finite()), "aspect {aspect}");
            let expected = compute_local_corners(0.7, MIN_ASPECT, 0.1, 2.0);
            assert_eq!(corners, expected);
        }
    }

    #[test]
    fn test_edge_layout() {
        let corners = params().local_corners();
        let edges = build_edges(&corners);
        assert_eq!(edges.points().len(), EDGE_POINT_COUNT);
        assert_eq!(edges.segments().count(), SEGMENT_COUNT);

        let segments: Vec<_> = edges.segments().collect();
        assert_eq!(segments[0], (corners[0], corners[1]));
        assert_eq!(segments[3], (corners[3], corners[0]));
        assert_eq!(segments[7], (corners[7], corners[4]));
        assert_eq!(segments[8], (corners[0], corners[4]));
        assert_eq!(segments[11], (corners[3], corners[7]));
    }

    #[test]
    fn test_transform_does_not_mutate_template() {
        let template = params().local_edges();
        let before = template;
        let offset = DMat4::from_translation(DVec3::new(2.0, 1.0, 2.0));
        let moved = transform_geometry(&template, &offset);
        assert_eq!(template, before);
        assert_eq!(moved.points()[0], template.points()[0] + DVec3::new(2.0, 1.0, 2.0));
    }

    #[test]
    fn test_invalid_params() {
        assert!(FrustumParams::new(0.0, 1.0, 0.1, 1.0).is_err());
        assert!(FrustumParams::new(0.7, 1.0, 0.0, 1.0).is_err());
        assert!(FrustumParams::new(0.7, 1.0, 1.0, 1.0).is_err());
        assert!(FrustumParams::new(0.7, 1.0, 0.1, f64::INFINITY).is_err());
        assert!(FrustumParams::new(std::f64::consts::PI, 1.0, 0.1, 1.0).is_err());
        assert!(FrustumParams::new(4.0, 1.0, 0.1, 1.0).is_err());
        assert!(FrustumParams::new(3.1, 1.0, 0.1, 1.0).is_ok());
        // aspect is clamped at use, not rejected
        assert!(FrustumParams::new(0.7, 0.0, 0.1, 1.0).is_ok());
    }

    #[test]
    fn test_key_equality() {
        assert_eq!(params().key(), params().key());
        assert_ne!(params().key(), params().with_fov_x(0.8).key());
    }

    proptest! {
        #[test]
        fn prop_corners_finite_and_ordered(
            fov_x in 0.01f64..3.1,
            aspect in 0.01f64..10.0,
            near in 0.001f64..10.0,
            depth in 0.001f64..100.0,
        ) {
            let far = near + depth;
            let corners = compute_local_corners(fov_x, aspect, near, far);
            prop_assert_eq!(corners.len(), CORNER_COUNT);
            prop_assert!(corners.iter().all(|p| p.is_finite()));
            for i in 0..4 {
                prop_assert!(-corners[i].z < -corners[i + 4].z);
            }
        }

        #[test]
        fn prop_edges_always_24(raw in proptest::collection::vec(-1e3f64..1e3, 24)) {
            let mut corners = [DVec3::ZERO; CORNER_COUNT];
            for (i, c) in corners.iter_mut().enumerate() {
                *c = DVec3::new(raw[3 * i], raw[3 * i + 1], raw[3 * i + 2]);
            }
            let edges = build_edges(&corners);
            prop_assert_eq!(edges.points().len(), 24);
            for (i, (a, b)) in edges.segments().enumerate() {
                prop_assert_eq!(a, corners[EDGE_INDICES[i][0]]);
                prop_assert_eq!(b, corners[EDGE_INDICES[i][1]]);
            }
        }
    }
}
