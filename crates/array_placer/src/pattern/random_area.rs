//! Random-Area pattern: duplicates scattered inside a horizontal disk.
//!
//! With overlap avoidance the disk is filled by [`PoissonDiskSampling`] and may hold fewer
//! points than requested. Without it, or when the separation is negligible, points are drawn
//! independently by [`UniformDiskSampling`].
use glam::{Vec2, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_finite_vec3, Result};
use crate::pattern::PatternGenerator;
use crate::pose::Pose;
use crate::random::RandomStream;
use crate::sampling::{DiskDistribution, DiskSampling, PoissonDiskSampling, UniformDiskSampling};

/// Separations at or below this fall back to uniform sampling.
pub const MIN_SEPARATION_THRESHOLD: f32 = 0.01;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RandomAreaPattern {
    pub center: Vec3,
    pub radius: f32,
    /// Target number of duplicates.
    pub count: usize,
    /// Minimum distance between duplicates when avoiding overlap.
    pub min_distance: f32,
    pub avoid_overlap: bool,
    /// Radius distribution for uniform draws, including the Poisson top-up pass.
    pub distribution: DiskDistribution,
}

impl RandomAreaPattern {
    pub fn new(radius: f32, count: usize) -> Self {
        Self {
            center: Vec3::ZERO,
            radius,
            count,
            min_distance: 1.0,
            avoid_overlap: false,
            distribution: DiskDistribution::default(),
        }
    }

    pub fn with_center(mut self, center: Vec3) -> Self {
        self.center = center;
        self
    }

    /// Enable overlap avoidance with the given minimum separation.
    pub fn with_min_distance(mut self, min_distance: f32) -> Self {
        self.min_distance = min_distance;
        self.avoid_overlap = true;
        self
    }

    pub fn with_avoid_overlap(mut self, avoid_overlap: bool) -> Self {
        self.avoid_overlap = avoid_overlap;
        self
    }

    pub fn with_distribution(mut self, distribution: DiskDistribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Whether generation goes through the Poisson disk sampler.
    pub fn uses_poisson(&self) -> bool {
        self.avoid_overlap && self.min_distance > MIN_SEPARATION_THRESHOLD
    }

    pub fn validate(&self) -> Result<()> {
        ensure_finite_vec3("random_area.center", self.center)?;
        ensure_finite("random_area.radius", self.radius)?;
        ensure_finite("random_area.min_distance", self.min_distance)
    }
}

impl PatternGenerator for RandomAreaPattern {
    fn generate(&self, rng: &mut dyn RandomStream) -> Vec<Pose> {
        if self.count == 0 || !self.radius.is_finite() || self.radius < 0.0 {
            return Vec::new();
        }

        let points = if self.uses_poisson() {
            PoissonDiskSampling::new(self.min_distance)
                .with_top_up_distribution(self.distribution)
                .generate(self.radius, self.count, rng)
        } else {
            UniformDiskSampling::new(self.distribution).generate(self.radius, self.count, rng)
        };

        points
            .into_iter()
            .map(Vec2::from)
            .enumerate()
            .map(|(i, p)| Pose::new(i, self.center + Vec3::new(p.x, 0.0, p.y)))
            .collect()
    }

    fn requested_count(&self) -> Option<usize> {
        Some(self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededStream;

    fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
        Vec2::new(a.x - b.x, a.z - b.z).length()
    }

    #[test]
    fn poisson_points_stay_in_disk_and_apart() {
        let center = Vec3::new(5.0, 2.0, -5.0);
        let pattern = RandomAreaPattern::new(8.0, 40)
            .with_center(center)
            .with_min_distance(1.5);
        let poses = pattern.generate(&mut SeededStream::new(11));

        assert!(!poses.is_empty() && poses.len() <= 40);
        assert_eq!(poses[0].position, center);
        for (i, a) in poses.iter().enumerate() {
            assert!(horizontal_distance(a.position, center) <= 8.0 + 1e-4);
            assert_eq!(a.position.y, center.y);
            for b in &poses[i + 1..] {
                assert!(horizontal_distance(a.position, b.position) >= 1.5 - 1e-4);
            }
        }
    }

    #[test]
    fn same_seed_reproduces_positions() {
        let pattern = RandomAreaPattern::new(6.0, 25).with_min_distance(1.0);
        let a = pattern.generate(&mut SeededStream::new(77));
        let b = pattern.generate(&mut SeededStream::new(77));
        assert_eq!(a, b);
    }

    #[test]
    fn negligible_separation_uses_uniform_sampling() {
        let pattern = RandomAreaPattern::new(1.0, 30).with_min_distance(0.01);
        assert!(!pattern.uses_poisson());
        let poses = pattern.generate(&mut SeededStream::new(3));
        assert_eq!(poses.len(), 30);
    }

    #[test]
    fn uniform_mode_delivers_exact_count() {
        let pattern = RandomAreaPattern::new(2.0, 12);
        assert!(!pattern.uses_poisson());
        let poses = pattern.generate(&mut SeededStream::new(8));
        assert_eq!(poses.len(), 12);
        assert!(poses
            .iter()
            .all(|p| horizontal_distance(p.position, Vec3::ZERO) <= 2.0 + 1e-5));
    }

    #[test]
    fn overcrowded_disk_under_delivers() {
        let pattern = RandomAreaPattern::new(2.0, 100).with_min_distance(1.0);
        let poses = pattern.generate(&mut SeededStream::new(21));
        assert!(poses.len() < 100);
    }

    #[test]
    fn zero_count_or_negative_radius_is_empty() {
        let mut rng = SeededStream::new(0);
        assert!(RandomAreaPattern::new(5.0, 0).generate(&mut rng).is_empty());
        assert!(RandomAreaPattern::new(-1.0, 5).generate(&mut rng).is_empty());
    }
}
