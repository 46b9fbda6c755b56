//! World-space frustum geometry and line buffers for render cameras.
//!
//! Local wireframes are built once per distinct [`FrustumParams`] and shared;
//! each camera's world geometry is that template with its world matrix
//! applied.

use std::collections::HashMap;
use std::sync::Arc;

use camscope_core::bounds::{compute_bounds, BoundingBox};
use camscope_core::error::Result;
use camscope_core::frustum::{FrustumEdges, FrustumKey, FrustumParams};
use camscope_core::options::ViewerOptions;
use glam::Vec3;

use crate::compose::{CameraId, RenderCamera};

/// Cache of local-space frustum wireframes keyed by parameter value.
///
/// Templates are never evicted on their own. Every distinct near, far, aspect
/// or scale value adds one, so callers that drive those from continuous
/// controls should [`clear`](Self::clear) the cache when the values change.
#[derive(Debug, Default)]
pub struct GeometryCache {
    templates: HashMap<FrustumKey, Arc<FrustumEdges>>,
}

impl GeometryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared template for `params`, building it on first use.
    pub fn template(&mut self, params: &FrustumParams) -> Arc<FrustumEdges> {
        Arc::clone(self.templates.entry(params.key()).or_insert_with(|| {
            log::debug!("building frustum template for {params:?}");
            Arc::new(params.local_edges())
        }))
    }

    /// Returns the number of cached templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if no template is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Drops all templates.
    pub fn clear(&mut self) {
        self.templates.clear();
    }
}

/// World-space wireframe of one camera.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraGeometry {
    pub id: CameraId,
    pub color: Vec3,
    pub edges: FrustumEdges,
}

/// Builds world-space wireframes for `cameras`, in the same order.
///
/// Each camera uses its group's horizontal FOV with the near, far, aspect and
/// scale from `options`.
///
/// # Errors
///
/// Returns [`camscope_core::CamscopeError::InvalidFrustum`] if `options`
/// yield invalid frustum parameters.
pub fn build_camera_geometry(
    cameras: &[RenderCamera],
    options: &ViewerOptions,
    cache: &mut GeometryCache,
) -> Result<Vec<CameraGeometry>> {
    cameras
        .iter()
        .map(|camera| {
            let params = options.frustum_params(camera.fov_x)?;
            let template = cache.template(&params);
            Ok(CameraGeometry {
                id: camera.id,
                color: camera.color,
                edges: template.transform(&camera.world),
            })
        })
        .collect()
}

/// Computes the bounding box over camera wireframes.
#[must_use]
pub fn scene_bounds(geometry: &[CameraGeometry]) -> BoundingBox {
    compute_bounds(geometry.iter().map(|g| &g.edges))
}

/// A line-list vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Flattens wireframes into a line-list vertex buffer: 24 vertices per
/// camera, cameras in input order.
#[must_use]
pub fn line_vertices(geometry: &[CameraGeometry]) -> Vec<LineVertex> {
    geometry
        .iter()
        .flat_map(|g| {
            let color = g.color.to_array();
            g.edges.points().iter().map(move |p| LineVertex {
                position: p.as_vec3().to_array(),
                color,
            })
        })
        .collect()
}

/// Returns a vertex buffer as raw bytes.
#[must_use]
pub fn vertex_bytes(vertices: &[LineVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::GroupId;
    use camscope_core::frustum::EDGE_POINT_COUNT;
    use glam::{DMat4, DVec3};

    fn camera(frame: usize, fov_x: f64, world: DMat4) -> RenderCamera {
        RenderCamera {
            id: CameraId {
                group: GroupId(0),
                frame,
            },
            label: format!("g/{frame}"),
            world,
            color: Vec3::new(0.2, 0.4, 0.6),
            fov_x,
        }
    }

    #[test]
    fn test_templates_shared_by_params() {
        let mut cache = GeometryCache::new();
        let options = ViewerOptions::default();
        let cameras = [
            camera(0, 0.7, DMat4::IDENTITY),
            camera(1, 0.7, DMat4::from_translation(DVec3::X)),
            camera(2, 0.9, DMat4::IDENTITY),
        ];
        let geometry = build_camera_geometry(&cameras, &options, &mut cache).unwrap();
        assert_eq!(geometry.len(), 3);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_cache_does_not_change_results() {
        let options = ViewerOptions::default();
        let cameras = [camera(0, 0.7, DMat4::from_rotation_z(0.3))];
        let mut warm = GeometryCache::new();
        let _ = build_camera_geometry(&cameras, &options, &mut warm).unwrap();
        let cached = build_camera_geometry(&cameras, &options, &mut warm).unwrap();
        let fresh = build_camera_geometry(&cameras, &options, &mut GeometryCache::new()).unwrap();
        assert_eq!(cached, fresh);

        let params = options.frustum_params(0.7).unwrap();
        assert_eq!(*warm.template(&params), params.local_edges());
    }

    #[test]
    fn test_clear_after_parameter_sweep() {
        let mut cache = GeometryCache::new();
        let cameras = [camera(0, 0.7, DMat4::IDENTITY)];
        for step in 1..=5 {
            let options = ViewerOptions {
                frustum_scale: f64::from(step),
                ..ViewerOptions::default()
            };
            build_camera_geometry(&cameras, &options, &mut cache).unwrap();
        }
        assert_eq!(cache.len(), 5);
        cache.clear();
        assert!(cache.is_empty());

        let options = ViewerOptions::default();
        let geometry = build_camera_geometry(&cameras, &options, &mut cache).unwrap();
        assert_eq!(cache.len(), 1);
        let params = options.frustum_params(0.7).unwrap();
        assert_eq!(geometry[0].edges, params.local_edges());
    }

    #[test]
    fn test_invalid_options() {
        let options = ViewerOptions {
            near: 1.0,
            far: 0.5,
            ..ViewerOptions::default()
        };
        let cameras = [camera(0, 0.7, DMat4::IDENTITY)];
        assert!(build_camera_geometry(&cameras, &options, &mut GeometryCache::new()).is_err());
    }

    #[test]
    fn test_line_vertices() {
        let options = ViewerOptions::default();
        let cameras = [
            camera(0, 0.7, DMat4::IDENTITY),
            camera(1, 0.7, DMat4::from_translation(DVec3::new(2.0, 1.0, 2.0))),
        ];
        let geometry =
            build_camera_geometry(&cameras, &options, &mut GeometryCache::new()).unwrap();
        let vertices = line_vertices(&geometry);
        assert_eq!(vertices.len(), 2 * EDGE_POINT_COUNT);
        assert_eq!(vertices[0].color, [0.2, 0.4, 0.6]);
        let second = geometry[1].edges.points()[0].as_vec3().to_array();
        assert_eq!(vertices[EDGE_POINT_COUNT].position, second);
        assert_eq!(
            vertex_bytes(&vertices).len(),
            vertices.len() * std::mem::size_of::<LineVertex>()
        );
    }

    #[test]
    fn test_scene_bounds() {
        assert!(scene_bounds(&[]).is_empty());
        let options = ViewerOptions::default();
        let cameras = [camera(0, 0.7, DMat4::from_translation(DVec3::new(2.0, 1.0, 2.0)))];
        let geometry =
            build_camera_geometry(&cameras, &options, &mut GeometryCache::new()).unwrap();
        let bounds = scene_bounds(&geometry);
        // origin sits behind the near plane, so it is outside the wireframe box
        assert!(bounds.max.z < 2.0);
        assert!((bounds.max.z - (2.0 - options.near)).abs() < 1e-12);
        assert!((bounds.min.z - (2.0 - options.far)).abs() < 1e-12);
    }
}
