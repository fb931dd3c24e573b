//! Sampling strategies used by the pattern generators.
//!
//! Disk samplers propose horizontal offsets inside a disk centered on the origin for the
//! Random-Area pattern; [`path`] resamples polylines at fixed arc-length spacing for the
//! Path pattern.
use mint::Vector2;

use crate::random::RandomStream;

pub mod path;
pub mod poisson_disk;
pub mod uniform_disk;

pub use path::Polyline;
pub use poisson_disk::PoissonDiskSampling;
pub use uniform_disk::{DiskDistribution, UniformDiskSampling};

/// Trait for sampling up to `count` offsets inside a disk of `radius` around the origin.
///
/// Returned points use `x` for world X and `y` for world Z.
pub trait DiskSampling: Send + Sync {
    fn generate(
        &self,
        radius: f32,
        count: usize,
        rng: &mut dyn RandomStream,
    ) -> Vec<Vector2<f32>>;
}
