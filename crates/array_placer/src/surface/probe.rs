//! Surface probe boundary: the trait host scenes implement, plus two ready-made probes.
use glam::Vec3;
use mint::Vector3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Point and normal returned by a successful probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    pub point: Vec3,
    pub normal: Vec3,
}

impl SurfaceHit {
    pub fn new(point: impl Into<Vec3>, normal: impl Into<Vec3>) -> Self {
        Self {
            point: point.into(),
            normal: normal.into(),
        }
    }
}

/// Which surfaces a probe may report. The engine only forwards this to the probe.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceFilter {
    /// Bitmask of accepted surface layers.
    pub layer_mask: u32,
    /// Object ids the probe must ignore, typically the prototypes themselves.
    pub excluded: Vec<String>,
}

impl Default for SurfaceFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl SurfaceFilter {
    /// Accept every layer and exclude nothing.
    pub fn all() -> Self {
        Self {
            layer_mask: u32::MAX,
            excluded: Vec::new(),
        }
    }

    pub fn with_layers(mut self, layer_mask: u32) -> Self {
        self.layer_mask = layer_mask;
        self
    }

    pub fn excluding(mut self, id: impl Into<String>) -> Self {
        self.excluded.push(id.into());
        self
    }

    /// Whether a surface on `layers` with identifier `id` passes the filter.
    pub fn accepts(&self, layers: u32, id: &str) -> bool {
        self.layer_mask & layers != 0 && !self.excluded.iter().any(|e| e == id)
    }
}

/// Spatial intersection service supplied by the host scene.
pub trait SurfaceProbe: Send + Sync {
    /// Cast a ray from `origin` along unit `direction` up to `max_distance`.
    fn probe(
        &self,
        origin: Vector3<f32>,
        direction: Vector3<f32>,
        max_distance: f32,
        filter: &SurfaceFilter,
    ) -> Option<SurfaceHit>;
}

/// A probe that forwards to a user-provided closure.
pub struct FnSurface<F>
where
    F: Fn(Vec3, Vec3, f32, &SurfaceFilter) -> Option<SurfaceHit> + Send + Sync,
{
    f: F,
}

impl<F> FnSurface<F>
where
    F: Fn(Vec3, Vec3, f32, &SurfaceFilter) -> Option<SurfaceHit> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> SurfaceProbe for FnSurface<F>
where
    F: Fn(Vec3, Vec3, f32, &SurfaceFilter) -> Option<SurfaceHit> + Send + Sync,
{
    #[inline]
    fn probe(
        &self,
        origin: Vector3<f32>,
        direction: Vector3<f32>,
        max_distance: f32,
        filter: &SurfaceFilter,
    ) -> Option<SurfaceHit> {
        (self.f)(origin.into(), direction.into(), max_distance, filter)
    }
}

/// An infinite plane, handy for flat ground, ramps and tests.
#[derive(Debug, Clone)]
pub struct PlaneSurface {
    pub id: String,
    pub point: Vec3,
    /// Unit normal of the plane's upper side.
    pub normal: Vec3,
    pub layers: u32,
}

impl PlaneSurface {
    /// Plane through `point` with `normal`; a zero normal falls back to world up.
    pub fn new(id: impl Into<String>, point: Vec3, normal: Vec3) -> Self {
        Self {
            id: id.into(),
            point,
            normal: normal.try_normalize().unwrap_or(Vec3::Y),
            layers: 1,
        }
    }

    /// Horizontal ground at height `y`.
    pub fn ground(y: f32) -> Self {
        Self::new("ground", Vec3::new(0.0, y, 0.0), Vec3::Y)
    }

    pub fn with_layers(mut self, layers: u32) -> Self {
        self.layers = layers;
        self
    }
}

impl SurfaceProbe for PlaneSurface {
    fn probe(
        &self,
        origin: Vector3<f32>,
        direction: Vector3<f32>,
        max_distance: f32,
        filter: &SurfaceFilter,
    ) -> Option<SurfaceHit> {
        if !filter.accepts(self.layers, &self.id) {
            return None;
        }

        let origin = Vec3::from(origin);
        let direction = Vec3::from(direction);
        let denom = direction.dot(self.normal);
        if denom.abs() <= f32::EPSILON {
            return None;
        }

        let t = (self.point - origin).dot(self.normal) / denom;
        if !(0.0..=max_distance).contains(&t) {
            return None;
        }

        // Report the side facing the ray.
        let normal = if denom > 0.0 { -self.normal } else { self.normal };
        Some(SurfaceHit::new(origin + direction * t, normal))
    }
}
