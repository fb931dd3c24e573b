//! Pattern generators turning parameter structs into ordered pose sequences.
//!
//! Each pattern is an immutable parameter struct. Generation reads only its own fields and
//! the supplied random stream, so calling it twice with equal inputs yields equal poses.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pose::Pose;
use crate::random::RandomStream;

pub mod circular;
pub mod grid;
pub mod linear;
pub mod path;
pub mod random_area;

pub use circular::CircularPattern;
pub use grid::GridPattern;
pub use linear::{LinearPattern, OffsetSpace};
pub use path::PathPattern;
pub use random_area::RandomAreaPattern;

/// Trait for pose generation.
pub trait PatternGenerator: Send + Sync {
    /// Generate raw, un-conformed poses in sequence index order.
    fn generate(&self, rng: &mut dyn RandomStream) -> Vec<Pose>;

    /// Number of poses the caller asked for, when the pattern has an explicit count.
    fn requested_count(&self) -> Option<usize>;
}

/// Placement parameters for one of the supported patterns.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Linear(LinearPattern),
    Circular(CircularPattern),
    Grid(GridPattern),
    Path(PathPattern),
    RandomArea(RandomAreaPattern),
}

impl Pattern {
    /// Short label used in logs and events.
    pub fn label(&self) -> &'static str {
        match self {
            Pattern::Linear(_) => "linear",
            Pattern::Circular(_) => "circular",
            Pattern::Grid(_) => "grid",
            Pattern::Path(_) => "path",
            Pattern::RandomArea(_) => "random_area",
        }
    }

    /// Rejects parameters that are not merely degenerate but uninterpretable (NaN, infinity).
    pub fn validate(&self) -> Result<()> {
        match self {
            Pattern::Linear(p) => p.validate(),
            Pattern::Circular(p) => p.validate(),
            Pattern::Grid(p) => p.validate(),
            Pattern::Path(p) => p.validate(),
            Pattern::RandomArea(p) => p.validate(),
        }
    }

    /// Generate poses, letting the caller veto directional facing set by the pattern itself.
    ///
    /// Only the circular pattern's face-center option is affected; it is dropped when surface
    /// alignment is going to rotate the poses.
    pub fn generate_with_facing(&self, facing: bool, rng: &mut dyn RandomStream) -> Vec<Pose> {
        match self {
            Pattern::Circular(p) => p.generate_with_facing(p.face_center && facing),
            other => other.generate(rng),
        }
    }
}

impl PatternGenerator for Pattern {
    fn generate(&self, rng: &mut dyn RandomStream) -> Vec<Pose> {
        match self {
            Pattern::Linear(p) => p.generate(rng),
            Pattern::Circular(p) => p.generate(rng),
            Pattern::Grid(p) => p.generate(rng),
            Pattern::Path(p) => p.generate(rng),
            Pattern::RandomArea(p) => p.generate(rng),
        }
    }

    fn requested_count(&self) -> Option<usize> {
        match self {
            Pattern::Linear(p) => p.requested_count(),
            Pattern::Circular(p) => p.requested_count(),
            Pattern::Grid(p) => p.requested_count(),
            Pattern::Path(p) => p.requested_count(),
            Pattern::RandomArea(p) => p.requested_count(),
        }
    }
}

impl From<LinearPattern> for Pattern {
    fn from(value: LinearPattern) -> Self {
        Pattern::Linear(value)
    }
}

impl From<CircularPattern> for Pattern {
    fn from(value: CircularPattern) -> Self {
        Pattern::Circular(value)
    }
}

impl From<GridPattern> for Pattern {
    fn from(value: GridPattern) -> Self {
        Pattern::Grid(value)
    }
}

impl From<PathPattern> for Pattern {
    fn from(value: PathPattern) -> Self {
        Pattern::Path(value)
    }
}

impl From<RandomAreaPattern> for Pattern {
    fn from(value: RandomAreaPattern) -> Self {
        Pattern::RandomArea(value)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::random::SeededStream;

    #[test]
    fn labels_and_counts_dispatch_to_variants() {
        let linear: Pattern = LinearPattern::new(3, Vec3::X).into();
        assert_eq!(linear.label(), "linear");
        assert_eq!(linear.requested_count(), Some(3));

        let grid: Pattern = GridPattern::new(2, 4, 1.0, 1.0).into();
        assert_eq!(grid.requested_count(), Some(8));

        let path: Pattern = PathPattern::new(vec![Vec3::ZERO, Vec3::X], 0.5).into();
        assert_eq!(path.requested_count(), None);
    }

    #[test]
    fn facing_veto_only_changes_circular_orientation() {
        let circle: Pattern = CircularPattern::full_circle(4, 2.0).with_face_center(true).into();
        let mut rng = SeededStream::new(0);
        let faced = circle.generate(&mut rng);
        let plain = circle.generate_with_facing(false, &mut rng);

        assert_eq!(faced.len(), plain.len());
        assert!(plain.iter().all(|p| p.orientation == glam::Quat::IDENTITY));
        assert!(faced.iter().any(|p| p.orientation != glam::Quat::IDENTITY));
        for (a, b) in faced.iter().zip(&plain) {
            assert_eq!(a.position, b.position);
        }
    }

    #[test]
    fn validate_rejects_non_finite_parameters() {
        let bad: Pattern = LinearPattern::new(2, Vec3::new(f32::NAN, 0.0, 0.0)).into();
        assert!(bad.validate().is_err());
        let good: Pattern = LinearPattern::new(0, Vec3::X).into();
        assert!(good.validate().is_ok());
    }
}
