//! Surface conformance: snapping generated poses onto a host surface.
//!
//! One downward probe is issued per pose. A hit replaces the position and, depending on
//! [`ConformanceMode`], tilts the orientation to the surface. A miss leaves the pose exactly
//! as the generator produced it.
use glam::{Quat, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, Error, Result};
use crate::pose::{look_rotation, Pose, DEGENERATE_LENGTH_SQUARED};

pub mod probe;

pub use probe::{FnSurface, PlaneSurface, SurfaceFilter, SurfaceHit, SurfaceProbe};

/// Slopes below this angle (degrees) count as flat and are not rotated.
const FLAT_SLOPE_EPSILON_DEG: f32 = 1e-3;

/// How a hit adjusts orientation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ConformanceMode {
    /// Only the position follows the surface.
    #[default]
    SnapOnly,
    /// Tilt up toward the surface normal when the slope is within `max_angle_deg`.
    AlignToSlope { max_angle_deg: f32 },
    /// Rebuild the orientation with the normal as up.
    AlignToSurfaceNormal,
}

impl ConformanceMode {
    /// Whether this mode may override pattern-derived orientation.
    pub fn aligns_orientation(&self) -> bool {
        !matches!(self, ConformanceMode::SnapOnly)
    }
}

/// Surface conformance configuration.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ConformanceSettings {
    pub mode: ConformanceMode,
    pub filter: SurfaceFilter,
    /// Height above the candidate the probe starts from.
    pub probe_height: f32,
    /// Distance below the candidate the probe still reaches.
    pub probe_depth: f32,
}

impl Default for ConformanceSettings {
    fn default() -> Self {
        Self {
            mode: ConformanceMode::SnapOnly,
            filter: SurfaceFilter::all(),
            probe_height: 1000.0,
            probe_depth: 1000.0,
        }
    }
}

impl ConformanceSettings {
    pub fn new(mode: ConformanceMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn with_filter(mut self, filter: SurfaceFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_probe_range(mut self, probe_height: f32, probe_depth: f32) -> Self {
        self.probe_height = probe_height;
        self.probe_depth = probe_depth;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_finite("conformance.probe_height", self.probe_height)?;
        ensure_finite("conformance.probe_depth", self.probe_depth)?;
        if self.probe_height + self.probe_depth <= 0.0 {
            return Err(Error::InvalidConfig(
                "conformance probe range must be > 0".into(),
            ));
        }
        if let ConformanceMode::AlignToSlope { max_angle_deg } = self.mode {
            ensure_finite("conformance.max_angle_deg", max_angle_deg)?;
        }
        Ok(())
    }
}

/// A pose after conformance, with the hit that produced it.
#[derive(Debug, Clone, Copy)]
pub struct Conformed {
    pub pose: Pose,
    pub hit: Option<SurfaceHit>,
}

/// Probe below `pose` and adjust it to the surface.
pub fn conform(
    pose: Pose,
    settings: &ConformanceSettings,
    surface: &dyn SurfaceProbe,
) -> Conformed {
    let origin = pose.position + Vec3::Y * settings.probe_height;
    let max_distance = settings.probe_height + settings.probe_depth;
    let Some(hit) = surface.probe(
        origin.into(),
        Vec3::NEG_Y.into(),
        max_distance,
        &settings.filter,
    ) else {
        return Conformed { pose, hit: None };
    };

    let mut conformed = pose;
    conformed.position = hit.point;
    if let Some(normal) = hit.normal.try_normalize() {
        conformed.orientation = aligned_orientation(pose.orientation, normal, settings.mode);
    }

    Conformed {
        pose: conformed,
        hit: Some(hit),
    }
}

fn aligned_orientation(orientation: Quat, normal: Vec3, mode: ConformanceMode) -> Quat {
    match mode {
        ConformanceMode::SnapOnly => orientation,
        ConformanceMode::AlignToSlope { max_angle_deg } => {
            let slope = slope_angle_deg(normal);
            if slope > FLAT_SLOPE_EPSILON_DEG && slope <= max_angle_deg {
                (Quat::from_rotation_arc(Vec3::Y, normal) * orientation).normalize()
            } else {
                orientation
            }
        }
        ConformanceMode::AlignToSurfaceNormal => {
            let forward = normal.cross(Vec3::Y);
            if forward.length_squared() <= DEGENERATE_LENGTH_SQUARED {
                return orientation;
            }
            look_rotation(forward, normal).unwrap_or(orientation)
        }
    }
}

/// Angle in degrees between a unit normal and world up.
pub fn slope_angle_deg(normal: Vec3) -> f32 {
    normal.dot(Vec3::Y).clamp(-1.0, 1.0).acos().to_degrees()
}
