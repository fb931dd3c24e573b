//! Grid pattern: a rectangular lattice in the XZ plane, optionally brick-offset.
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_finite_vec3, Result};
use crate::pattern::PatternGenerator;
use crate::pose::Pose;
use crate::random::RandomStream;

/// `count_x * count_z` duplicates. Negative spacing mirrors the lattice.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GridPattern {
    pub count_x: usize,
    pub count_z: usize,
    pub spacing_x: f32,
    pub spacing_z: f32,
    /// Shift odd rows by half a column.
    pub alternate_rows: bool,
    pub origin: Vec3,
}

impl GridPattern {
    pub fn new(count_x: usize, count_z: usize, spacing_x: f32, spacing_z: f32) -> Self {
        Self {
            count_x,
            count_z,
            spacing_x,
            spacing_z,
            alternate_rows: false,
            origin: Vec3::ZERO,
        }
    }

    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_alternate_rows(mut self, alternate_rows: bool) -> Self {
        self.alternate_rows = alternate_rows;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_finite("grid.spacing_x", self.spacing_x)?;
        ensure_finite("grid.spacing_z", self.spacing_z)?;
        ensure_finite_vec3("grid.origin", self.origin)
    }
}

impl PatternGenerator for GridPattern {
    /// Column-major order: `x` outer, `z` inner.
    fn generate(&self, _rng: &mut dyn RandomStream) -> Vec<Pose> {
        let mut poses = Vec::with_capacity(self.count_x.saturating_mul(self.count_z));
        for x in 0..self.count_x {
            for z in 0..self.count_z {
                let mut px = x as f32 * self.spacing_x;
                if self.alternate_rows && z % 2 == 1 {
                    px += self.spacing_x * 0.5;
                }
                let offset = Vec3::new(px, 0.0, z as f32 * self.spacing_z);
                poses.push(Pose::new(poses.len(), self.origin + offset));
            }
        }
        poses
    }

    fn requested_count(&self) -> Option<usize> {
        Some(self.count_x.saturating_mul(self.count_z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededStream;

    fn xz(poses: &[Pose]) -> Vec<(f32, f32)> {
        poses.iter().map(|p| (p.position.x, p.position.z)).collect()
    }

    #[test]
    fn three_by_three_lattice() {
        let poses = GridPattern::new(3, 3, 2.0, 2.0).generate(&mut SeededStream::new(0));
        assert_eq!(poses.len(), 9);
        let mut expected = Vec::new();
        for x in [0.0, 2.0, 4.0] {
            for z in [0.0, 2.0, 4.0] {
                expected.push((x, z));
            }
        }
        assert_eq!(xz(&poses), expected);
        assert!(poses.iter().enumerate().all(|(i, p)| p.index == i));
    }

    #[test]
    fn alternate_rows_shift_odd_rows() {
        let poses = GridPattern::new(2, 2, 2.0, 1.0)
            .with_alternate_rows(true)
            .generate(&mut SeededStream::new(0));
        assert_eq!(xz(&poses), vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.0)]);
    }

    #[test]
    fn negative_spacing_mirrors() {
        let poses = GridPattern::new(2, 2, -3.0, -1.0)
            .with_origin(Vec3::new(10.0, 5.0, 0.0))
            .generate(&mut SeededStream::new(0));
        assert_eq!(
            xz(&poses),
            vec![(10.0, 0.0), (10.0, -1.0), (7.0, 0.0), (7.0, -1.0)]
        );
        assert!(poses.iter().all(|p| p.position.y == 5.0));
    }

    #[test]
    fn empty_dimension_yields_no_poses() {
        let poses = GridPattern::new(0, 4, 1.0, 1.0).generate(&mut SeededStream::new(0));
        assert!(poses.is_empty());
    }
}
