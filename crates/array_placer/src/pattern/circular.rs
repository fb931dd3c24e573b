//! Circular pattern: duplicates spread along an arc by linear angle interpolation.
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_finite_vec3, Result};
use crate::pattern::PatternGenerator;
use crate::pose::{look_rotation, Pose};
use crate::random::RandomStream;

/// `count` duplicates from `start_angle_deg` to `end_angle_deg` at `radius` around `center`.
///
/// Angles are measured in the XZ plane from +X toward +Z. The sweep always interpolates
/// linearly between the two angles, so `start > end` runs backward rather than taking the
/// shorter arc.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CircularPattern {
    pub count: usize,
    pub radius: f32,
    pub center: Vec3,
    pub start_angle_deg: f32,
    pub end_angle_deg: f32,
    /// Orient each duplicate to look at the center.
    pub face_center: bool,
}

impl CircularPattern {
    /// Sweep from 0° to 360°. With `t = i / (count - 1)` the last duplicate lands on the first.
    pub fn full_circle(count: usize, radius: f32) -> Self {
        Self::arc(count, radius, 0.0, 360.0)
    }

    pub fn arc(count: usize, radius: f32, start_angle_deg: f32, end_angle_deg: f32) -> Self {
        Self {
            count,
            radius,
            center: Vec3::ZERO,
            start_angle_deg,
            end_angle_deg,
            face_center: false,
        }
    }

    pub fn with_center(mut self, center: Vec3) -> Self {
        self.center = center;
        self
    }

    pub fn with_face_center(mut self, face_center: bool) -> Self {
        self.face_center = face_center;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_finite("circular.radius", self.radius)?;
        ensure_finite_vec3("circular.center", self.center)?;
        ensure_finite("circular.start_angle_deg", self.start_angle_deg)?;
        ensure_finite("circular.end_angle_deg", self.end_angle_deg)
    }

    /// Angle in degrees of the `i`-th duplicate.
    pub fn angle_at(&self, i: usize) -> f32 {
        let t = if self.count > 1 {
            i as f32 / (self.count - 1) as f32
        } else {
            0.0
        };
        self.start_angle_deg + (self.end_angle_deg - self.start_angle_deg) * t
    }

    /// Generate with an explicit facing decision instead of [`Self::face_center`].
    pub fn generate_with_facing(&self, facing: bool) -> Vec<Pose> {
        (0..self.count)
            .map(|i| {
                let angle = self.angle_at(i).to_radians();
                let offset = Vec3::new(angle.cos(), 0.0, angle.sin()) * self.radius;
                let pose = Pose::new(i, self.center + offset);
                if facing {
                    // Horizontal facing only; degenerate at radius 0.
                    match look_rotation(-offset, Vec3::Y) {
                        Some(rotation) => pose.with_orientation(rotation),
                        None => pose,
                    }
                } else {
                    pose
                }
            })
            .collect()
    }
}

impl PatternGenerator for CircularPattern {
    fn generate(&self, _rng: &mut dyn RandomStream) -> Vec<Pose> {
        self.generate_with_facing(self.face_center)
    }

    fn requested_count(&self) -> Option<usize> {
        Some(self.count)
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec2};

    use super::*;
    use crate::random::SeededStream;

    fn generate(p: &CircularPattern) -> Vec<Pose> {
        p.generate(&mut SeededStream::new(0))
    }

    #[test]
    fn positions_lie_on_the_radius_with_equal_steps() {
        let center = Vec3::new(3.0, 1.0, -2.0);
        let pattern = CircularPattern::arc(7, 5.0, 10.0, 130.0).with_center(center);
        let poses = generate(&pattern);
        assert_eq!(poses.len(), 7);

        for pose in &poses {
            let d = pose.position - center;
            assert!((Vec2::new(d.x, d.z).length() - 5.0).abs() < 1e-4);
            assert!(d.y.abs() < 1e-6);
        }

        let step = (130.0 - 10.0) / 6.0;
        for i in 1..7 {
            assert!((pattern.angle_at(i) - pattern.angle_at(i - 1) - step).abs() < 1e-4);
        }
    }

    #[test]
    fn reverse_sweep_interpolates_linearly() {
        let pattern = CircularPattern::arc(3, 1.0, 350.0, 10.0);
        assert_eq!(pattern.angle_at(1), 180.0);
        let poses = generate(&pattern);
        assert!((poses[1].position - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn single_duplicate_sits_at_start_angle() {
        let poses = generate(&CircularPattern::arc(1, 2.0, 90.0, 180.0));
        assert_eq!(poses.len(), 1);
        assert!((poses[0].position - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-5);
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(generate(&CircularPattern::full_circle(0, 1.0)).is_empty());
    }

    #[test]
    fn face_center_points_forward_at_center() {
        let center = Vec3::new(1.0, 0.0, 1.0);
        let pattern = CircularPattern::full_circle(5, 3.0)
            .with_center(center)
            .with_face_center(true);
        for pose in generate(&pattern) {
            let forward = pose.orientation * Vec3::Z;
            let expected = (center - pose.position).normalize();
            assert!((forward - expected).length() < 1e-4);
            assert!(pose.orientation.is_normalized());
        }
    }

    #[test]
    fn zero_radius_facing_falls_back_to_identity() {
        let pattern = CircularPattern::full_circle(3, 0.0).with_face_center(true);
        assert!(generate(&pattern)
            .iter()
            .all(|p| p.orientation == Quat::IDENTITY));
    }
}
