//! Point sampling - projecting a raw event into every coordinate space.
//!
//! The engine stores and emits positions in four spaces at once (page,
//! client, local, world) so downstream consumers never re-derive a
//! projection from a stale transform. Sampling is a pure function of the raw
//! event and the tracked surface; it must not fail for any event whose
//! target is that surface.

use serde::{Deserialize, Serialize};

use crate::types::{PointerPoint, RawPointerEvent, SurfaceId, Vec2, Vec3};

/// Collaborator that converts a raw event into one [`PointerPoint`].
pub trait PointSampler {
    fn sample(&self, raw: &RawPointerEvent, surface: SurfaceId) -> PointerPoint;
}

/// Viewport geometry for one tracked surface.
///
/// Conversion formula, client to local:
/// `local = (client - surface_origin - pan_offset) / zoom`
/// and local to world:
/// `world = local * world_scale + world_offset`, at depth `plane_z`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
    /// Client-space position of the surface's top-left corner (e.g. below a
    /// header bar, right of a tool dock).
    pub surface_origin: Vec2,
    /// Current pan offset of the surface content, in client pixels.
    pub pan_offset: Vec2,
    /// Zoom factor; local units are client pixels divided by this.
    pub zoom: f32,
    /// Scale from local units to world units.
    pub world_scale: f32,
    /// World-space translation of the surface's local origin.
    pub world_offset: Vec2,
    /// Depth of the viewing plane in world space.
    pub plane_z: f32,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self {
            surface_origin: Vec2::ZERO,
            pan_offset: Vec2::ZERO,
            zoom: 1.0,
            world_scale: 1.0,
            world_offset: Vec2::ZERO,
            plane_z: 0.0,
        }
    }
}

/// [`PointSampler`] for a single pannable, zoomable surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewportSampler {
    pub transform: ViewportTransform,
}

impl ViewportSampler {
    pub fn new(transform: ViewportTransform) -> Self {
        Self { transform }
    }

    fn client_to_local(&self, client: Vec2) -> Vec2 {
        let t = &self.transform;
        Vec2::new(
            (client.x - t.surface_origin.x - t.pan_offset.x) / t.zoom,
            (client.y - t.surface_origin.y - t.pan_offset.y) / t.zoom,
        )
    }

    fn local_to_world(&self, local: Vec2) -> Vec3 {
        let t = &self.transform;
        Vec3::new(
            local.x * t.world_scale + t.world_offset.x,
            local.y * t.world_scale + t.world_offset.y,
            t.plane_z,
        )
    }
}

impl PointSampler for ViewportSampler {
    fn sample(&self, raw: &RawPointerEvent, _surface: SurfaceId) -> PointerPoint {
        let local = self.client_to_local(raw.client);
        PointerPoint::new(raw.page, raw.client, local, self.local_to_world(local))
    }
}
