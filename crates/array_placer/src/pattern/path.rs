//! Path pattern: duplicates every `spacing` units along a polyline.
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_finite_vec3, Result};
use crate::pattern::PatternGenerator;
use crate::pose::Pose;
use crate::random::RandomStream;
use crate::sampling::Polyline;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PathPattern {
    pub path: Polyline,
    /// Arc-length distance between consecutive duplicates.
    pub spacing: f32,
    /// Orient duplicates along the path tangent.
    pub align_to_path: bool,
}

impl PathPattern {
    pub fn new(points: Vec<Vec3>, spacing: f32) -> Self {
        Self {
            path: Polyline::new(points),
            spacing,
            align_to_path: false,
        }
    }

    pub fn with_loop(mut self, closed: bool) -> Self {
        self.path.closed = closed;
        self
    }

    pub fn with_align_to_path(mut self, align_to_path: bool) -> Self {
        self.align_to_path = align_to_path;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_finite("path.spacing", self.spacing)?;
        for point in &self.path.points {
            ensure_finite_vec3("path.points", *point)?;
        }
        Ok(())
    }
}

impl PatternGenerator for PathPattern {
    fn generate(&self, _rng: &mut dyn RandomStream) -> Vec<Pose> {
        self.path
            .resample(self.spacing, self.align_to_path)
            .into_iter()
            .enumerate()
            .map(|(i, sample)| sample.into_pose(i))
            .collect()
    }

    /// Path poses are driven by spacing, not by a requested count.
    fn requested_count(&self) -> Option<usize> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededStream;

    #[test]
    fn poses_carry_normalized_parameter() {
        let pattern = PathPattern::new(vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 8.0)], 2.0)
            .with_align_to_path(true);
        let poses = pattern.generate(&mut SeededStream::new(0));
        let params: Vec<f32> = poses.iter().filter_map(|p| p.parameter).collect();
        assert_eq!(params, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(poses.iter().enumerate().all(|(i, p)| p.index == i));
    }

    #[test]
    fn too_few_points_is_empty() {
        let pattern = PathPattern::new(vec![Vec3::ZERO], 1.0);
        assert!(pattern.generate(&mut SeededStream::new(0)).is_empty());
    }

    #[test]
    fn validate_rejects_non_finite_points() {
        let pattern = PathPattern::new(vec![Vec3::ZERO, Vec3::splat(f32::INFINITY)], 1.0);
        assert!(pattern.validate().is_err());
    }
}
