//! Poisson disk sampling constrained to a disk.
//!
//! Bridson-style dart throwing seeded at the disk center, followed by a bounded top-up
//! pass of uniform candidates once the active list runs dry. Packing may end below the
//! requested count; callers compare the returned length with what they asked for.
use std::collections::HashMap;
use std::f32::consts::TAU;

use glam::Vec2;
use mint::Vector2;

use crate::random::RandomStream;
use crate::sampling::uniform_disk::{sample_disk_point, DiskDistribution};
use crate::sampling::DiskSampling;

/// Candidate attempts around one active point before it is retired.
pub const MAX_ATTEMPTS: usize = 30;

/// Top-up attempts per requested point after the active list is exhausted.
pub const TOP_UP_ATTEMPTS_PER_POINT: usize = 5;

/// Poisson disk sampling strategy for a disk.
#[derive(Debug, Clone)]
pub struct PoissonDiskSampling {
    /// Minimum distance between accepted samples in world units.
    pub min_distance: f32,
    /// Distribution of the top-up candidates.
    pub top_up_distribution: DiskDistribution,
}

impl PoissonDiskSampling {
    /// Create a new PoissonDiskSampling with the given minimum separation.
    pub fn new(min_distance: f32) -> Self {
        Self {
            min_distance,
            top_up_distribution: DiskDistribution::default(),
        }
    }

    /// Set the distribution used by the top-up pass.
    pub fn with_top_up_distribution(mut self, distribution: DiskDistribution) -> Self {
        self.top_up_distribution = distribution;
        self
    }
}

impl DiskSampling for PoissonDiskSampling {
    fn generate(
        &self,
        radius: f32,
        count: usize,
        rng: &mut dyn RandomStream,
    ) -> Vec<Vector2<f32>> {
        if count == 0
            || !self.min_distance.is_finite()
            || self.min_distance <= 0.0
            || !radius.is_finite()
            || radius < 0.0
        {
            return Vec::new();
        }

        let sampler = PoissonDiskSampler::new(self.min_distance, radius);
        sampler
            .generate(count, self.top_up_distribution, rng)
            .into_iter()
            .map(Into::into)
            .collect()
    }
}

/// Per-call sampling state. Dropped when the call returns.
struct PoissonDiskSampler {
    min_distance: f32,
    min_distance_squared: f32,
    cell_size: f32,
    radius: f32,
    /// Sparse background grid over the disk's bounding square; one point per cell at most.
    grid: HashMap<(i64, i64), Vec2>,
    active: Vec<Vec2>,
    accepted: Vec<Vec2>,
}

impl PoissonDiskSampler {
    fn new(min_distance: f32, radius: f32) -> Self {
        debug_assert!(min_distance > 0.0);
        Self {
            min_distance,
            min_distance_squared: min_distance * min_distance,
            cell_size: min_distance / std::f32::consts::SQRT_2,
            radius,
            grid: HashMap::new(),
            active: Vec::new(),
            accepted: Vec::new(),
        }
    }

    /// Cells are keyed relative to the disk center so points near it keep full precision.
    #[inline]
    fn point_to_cell(&self, point: Vec2) -> (i64, i64) {
        let x = (point.x / self.cell_size).floor() as i64;
        let y = (point.y / self.cell_size).floor() as i64;
        (x, y)
    }

    #[inline]
    fn in_disk(&self, point: Vec2) -> bool {
        point.length_squared() <= self.radius * self.radius
    }

    fn is_valid_point(&self, point: Vec2) -> bool {
        if !self.in_disk(point) {
            return false;
        }

        let (gx, gy) = self.point_to_cell(point);
        for y in gy.saturating_sub(2)..=gy.saturating_add(2) {
            for x in gx.saturating_sub(2)..=gx.saturating_add(2) {
                if let Some(existing) = self.grid.get(&(x, y)) {
                    if point.distance_squared(*existing) < self.min_distance_squared {
                        return false;
                    }
                }
            }
        }

        true
    }

    fn add_point(&mut self, point: Vec2) {
        let cell = self.point_to_cell(point);
        self.grid.insert(cell, point);
        self.active.push(point);
        self.accepted.push(point);
    }

    fn generate_around_point(&self, rng: &mut dyn RandomStream, point: Vec2) -> Option<Vec2> {
        for _ in 0..MAX_ATTEMPTS {
            let angle = rng.uniform() * TAU;
            let distance = self.min_distance + rng.uniform() * self.min_distance;
            let candidate = point + Vec2::new(angle.cos(), angle.sin()) * distance;

            if self.is_valid_point(candidate) {
                return Some(candidate);
            }
        }

        None
    }

    /// Accept uniform candidates that keep `min_distance` to every accepted point.
    fn top_up(&mut self, count: usize, distribution: DiskDistribution, rng: &mut dyn RandomStream) {
        let attempts = count.saturating_mul(TOP_UP_ATTEMPTS_PER_POINT);
        for _ in 0..attempts {
            if self.accepted.len() >= count {
                break;
            }
            let candidate = sample_disk_point(self.radius, distribution, rng);
            let clear = self
                .accepted
                .iter()
                .all(|p| p.distance_squared(candidate) >= self.min_distance_squared);
            if clear {
                self.accepted.push(candidate);
            }
        }
    }

    fn generate(
        mut self,
        count: usize,
        distribution: DiskDistribution,
        rng: &mut dyn RandomStream,
    ) -> Vec<Vec2> {
        self.add_point(Vec2::ZERO);

        while !self.active.is_empty() && self.accepted.len() < count {
            let slot = rng.uniform_index(self.active.len());
            let active = self.active[slot];
            match self.generate_around_point(rng, active) {
                Some(p) => self.add_point(p),
                None => {
                    self.active.swap_remove(slot);
                }
            }
        }

        if self.accepted.len() < count {
            self.top_up(count, distribution, rng);
        }

        self.accepted
    }
}
