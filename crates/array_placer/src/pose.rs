//! Pose types produced by the pattern generators and orientation helpers shared by them.
//!
//! Orientation convention: local `+Z` is forward and `+Y` is up. A pose orientation is a
//! world-space rotation applied on top of the prototype's own rotation, so
//! [`Quat::IDENTITY`] keeps the prototype as authored.
use glam::{Mat3, Quat, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Squared length below which direction vectors are treated as degenerate.
pub(crate) const DEGENERATE_LENGTH_SQUARED: f32 = 1e-12;

/// One generated placement: where, how rotated, how scaled, and its place in the sequence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// World-space position.
    pub position: Vec3,
    /// World-space rotation applied on top of the prototype rotation. Always unit length.
    pub orientation: Quat,
    /// Uniform scale multiplier. Generators emit `1.0`; the instancing stage refines it.
    pub scale_factor: f32,
    /// 0-based sequence index within one generation call.
    pub index: usize,
    /// Normalized arc-length position in `[0, 1]` for path poses, `None` otherwise.
    pub parameter: Option<f32>,
}

impl Pose {
    /// Create a pose at `position` with identity orientation and unit scale.
    pub fn new(index: usize, position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
            scale_factor: 1.0,
            index,
            parameter: None,
        }
    }

    /// Set the orientation.
    pub fn with_orientation(mut self, orientation: Quat) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the normalized path parameter.
    pub fn with_parameter(mut self, parameter: f32) -> Self {
        self.parameter = Some(parameter);
        self
    }
}

/// A point on a resampled path.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    pub position: Vec3,
    pub orientation: Quat,
    /// Normalized arc-length position in `[0, 1]`.
    pub parameter: f32,
}

impl PathSample {
    /// Convert into a [`Pose`] carrying the path parameter.
    pub fn into_pose(self, index: usize) -> Pose {
        Pose::new(index, self.position)
            .with_orientation(self.orientation)
            .with_parameter(self.parameter)
    }
}

/// Rotation that maps local `+Z` onto `forward` and keeps local `+Y` as close to `up` as possible.
///
/// Returns `None` when `forward` is zero-length or parallel to `up`.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Option<Quat> {
    let f = forward.try_normalize()?;
    let right = up.cross(f);
    if right.length_squared() <= DEGENERATE_LENGTH_SQUARED {
        return None;
    }
    let right = right.normalize();
    let true_up = f.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, true_up, f)).normalize())
}
