//! Linear pattern: duplicates stepped along a constant offset.
use glam::{Quat, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite_vec3, Error, Result};
use crate::pattern::PatternGenerator;
use crate::pose::Pose;
use crate::random::RandomStream;

/// Axes in which the linear offset is expressed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OffsetSpace {
    #[default]
    World,
    /// Offset is rotated by [`LinearPattern::rotation`] before stepping.
    Local,
}

/// `count` duplicates at `origin + offset * i` for `i = 1..=count`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPattern {
    /// Number of duplicates; the prototype itself is not included.
    pub count: usize,
    /// Step between consecutive duplicates.
    pub offset: Vec3,
    pub space: OffsetSpace,
    /// Position of the prototype.
    pub origin: Vec3,
    /// Prototype rotation, used to express the offset in local axes.
    pub rotation: Quat,
}

impl LinearPattern {
    pub fn new(count: usize, offset: Vec3) -> Self {
        Self {
            count,
            offset,
            space: OffsetSpace::World,
            origin: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    /// Interpret the offset in the local axes of a prototype rotated by `rotation`.
    pub fn with_local_axes(mut self, rotation: Quat) -> Self {
        self.space = OffsetSpace::Local;
        self.rotation = rotation;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_finite_vec3("linear.offset", self.offset)?;
        ensure_finite_vec3("linear.origin", self.origin)?;
        if !self.rotation.is_finite() {
            return Err(Error::InvalidConfig(
                "linear.rotation must have finite components".into(),
            ));
        }
        Ok(())
    }

    fn step(&self) -> Vec3 {
        match self.space {
            OffsetSpace::World => self.offset,
            OffsetSpace::Local => self.rotation.normalize() * self.offset,
        }
    }
}

impl PatternGenerator for LinearPattern {
    fn generate(&self, _rng: &mut dyn RandomStream) -> Vec<Pose> {
        let step = self.step();
        (1..=self.count)
            .map(|i| Pose::new(i - 1, self.origin + step * i as f32))
            .collect()
    }

    fn requested_count(&self) -> Option<usize> {
        Some(self.count)
    }
}
