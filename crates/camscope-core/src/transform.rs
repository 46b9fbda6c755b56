//! Pose matrices.
//!
//! Poses arrive as row-major 4x4 arrays (the layout used by NeRF-style
//! `transform_matrix` entries). `glam` stores matrices column-major, so
//! [`build_matrix`] transposes on the way in and [`to_rows`] on the way out.

use glam::{DMat4, DVec3};

use crate::error::{CamscopeError, Result};

/// Determinant magnitude at or below which a pose is treated as singular.
pub const SINGULAR_EPSILON: f64 = 1e-12;

/// Builds a matrix from row-major rows.
///
/// Any real matrix is accepted; no rigidity check is made.
#[must_use]
pub fn build_matrix(rows: &[[f64; 4]; 4]) -> DMat4 {
    DMat4::from_cols_array_2d(rows).transpose()
}

/// Returns the row-major rows of a matrix.
#[must_use]
pub fn to_rows(matrix: &DMat4) -> [[f64; 4]; 4] {
    matrix.transpose().to_cols_array_2d()
}

/// Inverts a matrix.
///
/// # Errors
///
/// Returns [`CamscopeError::SingularMatrix`] when the determinant is not
/// finite or its magnitude is at most [`SINGULAR_EPSILON`].
pub fn invert(matrix: &DMat4) -> Result<DMat4> {
    let determinant = matrix.determinant();
    if !determinant.is_finite() || determinant.abs() <= SINGULAR_EPSILON {
        return Err(CamscopeError::SingularMatrix { determinant });
    }
    Ok(matrix.inverse())
}

/// Returns the translation part of an affine matrix.
#[must_use]
pub fn translation(matrix: &DMat4) -> DVec3 {
    matrix.w_axis.truncate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_mat_close(a: &DMat4, b: &DMat4, eps: f64) {
        let a = a.to_cols_array();
        let b = b.to_cols_array();
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() <= eps, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn test_build_matrix_is_row_major() {
        let m = build_matrix(&[
            [1.0, 0.0, 0.0, 2.0],
            [0.0, 1.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, 2.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(translation(&m), DVec3::new(2.0, 1.0, 2.0));
        assert_eq!(m.transform_point3(DVec3::ZERO), DVec3::new(2.0, 1.0, 2.0));
    }

    #[test]
    fn test_identity_keeps_point() {
        let m = build_matrix(&to_rows(&DMat4::IDENTITY));
        let p = DVec3::new(0.0, 0.0, -1.0);
        assert_eq!(m.transform_point3(p), p);
    }

    #[test]
    fn test_rows_round_trip() {
        let rows = [
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ];
        assert_eq!(to_rows(&build_matrix(&rows)), rows);
    }

    #[test]
    fn test_invert_singular() {
        let mut rows = to_rows(&DMat4::IDENTITY);
        rows[2] = [0.0; 4];
        let err = invert(&build_matrix(&rows)).unwrap_err();
        assert!(matches!(err, CamscopeError::SingularMatrix { .. }));

        let nan = DMat4::from_cols_array(&[f64::NAN; 16]);
        assert!(invert(&nan).is_err());
    }

    #[test]
    fn test_invert_rigid_pose() {
        let pose =
            DMat4::from_rotation_y(0.3) * DMat4::from_translation(DVec3::new(1.0, -2.0, 0.5));
        let inv = invert(&pose).unwrap();
        assert_mat_close(&(pose * inv), &DMat4::IDENTITY, 1e-9);
    }

    proptest! {
        #[test]
        fn prop_invert_round_trip(
            angle in -3.1f64..3.1,
            axis in (-1.0f64..1.0, -1.0f64..1.0, 0.1f64..1.0),
            t in (-50.0f64..50.0, -50.0f64..50.0, -50.0f64..50.0),
            scale in 0.2f64..5.0,
        ) {
            let axis = DVec3::new(axis.0, axis.1, axis.2).normalize();
            let pose = DMat4::from_scale_rotation_translation(
                DVec3::splat(scale),
                glam::DQuat::from_axis_angle(axis, angle),
                DVec3::new(t.0, t.1, t.2),
            );
            let inv = invert(&pose).unwrap();
            let back = invert(&inv).unwrap();
            assert_mat_close(&back, &pose, 1e-6);
            assert_mat_close(&(pose * inv), &DMat4::IDENTITY, 1e-6);
        }
    }
}
