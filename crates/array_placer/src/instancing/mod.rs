//! Instantiation pipeline: turning conformed poses into instance descriptors.
//!
//! For each pose this stage picks a prototype, evaluates the scale curve at the pose's path
//! parameter, applies rotation and scale jitter drawn from the jitter stream, and formats the
//! instance name. It performs no geometry of its own. Draws happen in a fixed order per pose
//! (prototype pick, rotation x/y/z, scale) so the output depends only on the poses, the
//! stream state and the settings.
use glam::{EulerRot, Quat, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_finite_vec3, Error, Result};
use crate::pose::Pose;
use crate::random::RandomStream;

pub mod curve;
pub mod name;

pub use curve::ScaleCurve;
pub use name::NameTemplate;

pub type PrototypeId = String;

/// A source object to duplicate. Resolved and owned by the host scene.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub id: PrototypeId,
    /// Display name substituted for `{name}`.
    pub name: String,
    /// Authored rotation of the prototype.
    pub rotation: Quat,
    /// Authored scale of the prototype.
    pub scale: Vec3,
}

impl Prototype {
    pub fn new(id: impl Into<PrototypeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }
}

/// How poses are assigned to prototypes when more than one is supplied.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrototypeSelection {
    /// Prototype `index % len`.
    #[default]
    Cycle,
    /// Uniform pick from the jitter stream.
    Random,
}

/// Random per-instance variation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JitterSettings {
    /// Per-axis rotation range in degrees; each axis draws from `[-range, range]`.
    pub rotation_deg: Option<Vec3>,
    /// Uniform scale multiplier drawn from `[min, max]`.
    pub scale: Option<(f32, f32)>,
}

impl JitterSettings {
    pub fn with_rotation_deg(mut self, range: Vec3) -> Self {
        self.rotation_deg = Some(range);
        self
    }

    pub fn with_scale(mut self, min: f32, max: f32) -> Self {
        self.scale = Some((min, max));
        self
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(range) = self.rotation_deg {
            ensure_finite_vec3("jitter.rotation_deg", range)?;
        }
        if let Some((min, max)) = self.scale {
            ensure_finite("jitter.scale.min", min)?;
            ensure_finite("jitter.scale.max", max)?;
            if min > max {
                return Err(Error::InvalidConfig(format!(
                    "jitter scale range is inverted: {min} > {max}"
                )));
            }
        }
        Ok(())
    }

    fn rotation(&self, rng: &mut dyn RandomStream) -> Quat {
        let Some(range) = self.rotation_deg else {
            return Quat::IDENTITY;
        };
        let range = range.abs();
        let x = rng.uniform_range(-range.x, range.x).to_radians();
        let y = rng.uniform_range(-range.y, range.y).to_radians();
        let z = rng.uniform_range(-range.z, range.z).to_radians();
        Quat::from_euler(EulerRot::YXZ, y, x, z)
    }

    fn scale(&self, rng: &mut dyn RandomStream) -> f32 {
        match self.scale {
            Some((min, max)) => rng.uniform_range(min, max),
            None => 1.0,
        }
    }
}

/// Configuration for the instantiation stage.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceSettings {
    pub name_template: NameTemplate,
    /// Evaluated at the path parameter of path poses; ignored for other patterns.
    pub scale_curve: Option<ScaleCurve>,
    pub jitter: JitterSettings,
    pub selection: PrototypeSelection,
}

impl InstanceSettings {
    pub fn with_name_template(mut self, template: impl Into<String>) -> Self {
        self.name_template = NameTemplate::new(template);
        self
    }

    pub fn with_scale_curve(mut self, curve: ScaleCurve) -> Self {
        self.scale_curve = Some(curve);
        self
    }

    pub fn with_jitter(mut self, jitter: JitterSettings) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_selection(mut self, selection: PrototypeSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(curve) = &self.scale_curve {
            curve.validate()?;
        }
        self.jitter.validate()
    }

    fn curve_factor(&self, pose: &Pose) -> f32 {
        match (&self.scale_curve, pose.parameter) {
            (Some(curve), Some(t)) => curve.evaluate(t),
            _ => 1.0,
        }
    }
}

/// Everything the host scene needs to create one instance.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceDescriptor {
    pub source_prototype_id: PrototypeId,
    pub position: Vec3,
    pub orientation: Quat,
    pub scale: Vec3,
    pub name: String,
    /// 0-based sequence index of the originating pose.
    pub index: usize,
}

/// Build descriptors for `poses`. Returns nothing when `prototypes` is empty.
pub fn instantiate(
    poses: &[Pose],
    prototypes: &[Prototype],
    settings: &InstanceSettings,
    jitter: &mut dyn RandomStream,
) -> Vec<InstanceDescriptor> {
    if prototypes.is_empty() {
        return Vec::new();
    }

    poses
        .iter()
        .map(|pose| {
            let prototype = match settings.selection {
                PrototypeSelection::Cycle => &prototypes[pose.index % prototypes.len()],
                PrototypeSelection::Random => &prototypes[jitter.uniform_index(prototypes.len())],
            };
            let rotation_jitter = settings.jitter.rotation(jitter);
            let factor =
                pose.scale_factor * settings.curve_factor(pose) * settings.jitter.scale(jitter);

            InstanceDescriptor {
                source_prototype_id: prototype.id.clone(),
                position: pose.position,
                orientation: (pose.orientation * prototype.rotation * rotation_jitter)
                    .normalize(),
                scale: prototype.scale * factor,
                name: settings.name_template.format(&prototype.name, pose.index + 1),
                index: pose.index,
            }
        })
        .collect()
}
