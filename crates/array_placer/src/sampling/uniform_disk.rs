//! Uniform random sampling inside a disk.
use std::f32::consts::TAU;

use glam::Vec2;
use mint::Vector2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::random::RandomStream;
use crate::sampling::DiskSampling;

/// How radii are drawn when sampling a disk.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiskDistribution {
    /// Angle and radius are both uniform. Density is biased toward the center.
    #[default]
    PolarUniform,
    /// Radius is drawn as `R * sqrt(u)` so density is uniform per unit area.
    AreaUniform,
}

/// Independent uniform draws inside a disk, without any separation guarantee.
#[derive(Debug, Clone, Default)]
pub struct UniformDiskSampling {
    pub distribution: DiskDistribution,
}

impl UniformDiskSampling {
    pub fn new(distribution: DiskDistribution) -> Self {
        Self { distribution }
    }
}

impl DiskSampling for UniformDiskSampling {
    fn generate(
        &self,
        radius: f32,
        count: usize,
        rng: &mut dyn RandomStream,
    ) -> Vec<Vector2<f32>> {
        if count == 0 || !radius.is_finite() || radius < 0.0 {
            return Vec::new();
        }

        (0..count)
            .map(|_| sample_disk_point(radius, self.distribution, rng).into())
            .collect()
    }
}

/// Draw one point inside the disk. Consumes exactly two values from `rng`.
pub(crate) fn sample_disk_point(
    radius: f32,
    distribution: DiskDistribution,
    rng: &mut dyn RandomStream,
) -> Vec2 {
    let angle = rng.uniform() * TAU;
    let u = rng.uniform();
    let r = match distribution {
        DiskDistribution::PolarUniform => u * radius,
        DiskDistribution::AreaUniform => u.sqrt() * radius,
    };
    Vec2::new(angle.cos() * r, angle.sin() * r)
}
