//! Arc-length resampling of piecewise-linear paths.
//!
//! A [`Polyline`] is walked segment by segment; control points are never smoothed.
//! Samples land every `spacing` units of cumulative length, and their orientation
//! follows a finite-difference tangent when requested.
use glam::{Quat, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pose::{look_rotation, PathSample, DEGENERATE_LENGTH_SQUARED};

/// Arc-length step used to estimate tangents.
pub const TANGENT_EPSILON: f32 = 0.01;

/// Ordered control points joined by straight segments, optionally closed into a loop.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<Vec3>,
    /// Adds a closing segment from the last point back to the first.
    pub closed: bool,
}

impl Polyline {
    pub fn new(points: Vec<Vec3>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    /// Set whether the path loops back to its first point.
    pub fn with_loop(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    /// Total length including the closing segment when looping.
    pub fn length(&self) -> f32 {
        ArcLengthTable::new(self).total()
    }

    /// Point at arc-length `distance`. See [`ArcLengthTable::point_at`].
    pub fn point_at(&self, distance: f32) -> Vec3 {
        ArcLengthTable::new(self).point_at(distance)
    }

    /// Unit tangent at arc-length `distance`, or `None` when the path is degenerate there.
    pub fn tangent_at(&self, distance: f32) -> Option<Vec3> {
        ArcLengthTable::new(self).tangent_at(distance)
    }

    /// Resample at fixed arc-length `spacing`.
    ///
    /// Produces `ceil(length / spacing) + 1` samples, the last one clamped to the path end.
    /// On a looping path that last sample wraps onto the first point with parameter `1.0`.
    /// Fewer than two control points or a non-positive spacing yields no samples.
    pub fn resample(&self, spacing: f32, align_to_path: bool) -> Vec<PathSample> {
        if self.points.len() < 2 || !spacing.is_finite() || spacing <= 0.0 {
            return Vec::new();
        }

        let table = ArcLengthTable::new(self);
        let length = table.total();
        if !length.is_finite() {
            return Vec::new();
        }

        let step_count = (length / spacing).ceil() as usize;
        let mut samples = Vec::with_capacity(step_count + 1);
        for i in 0..=step_count {
            let distance = (i as f32 * spacing).min(length);

            let orientation = if align_to_path {
                table
                    .tangent_at(distance)
                    .map(orientation_along)
                    .unwrap_or(Quat::IDENTITY)
            } else {
                Quat::IDENTITY
            };

            let parameter = if length > 0.0 { distance / length } else { 0.0 };
            samples.push(PathSample {
                position: table.point_at(distance),
                orientation,
                parameter,
            });
        }

        samples
    }
}

/// Rotation pointing local `+Z` along `tangent`, keeping world up where possible.
fn orientation_along(tangent: Vec3) -> Quat {
    look_rotation(tangent, Vec3::Y).unwrap_or_else(|| Quat::from_rotation_arc(Vec3::Z, tangent))
}

/// Cumulative segment lengths of a polyline, built once per resampling call.
struct ArcLengthTable<'a> {
    points: &'a [Vec3],
    closed: bool,
    /// `cumulative[i]` is the length up to the start of segment `i`; the last entry is the total.
    cumulative: Vec<f32>,
}

impl<'a> ArcLengthTable<'a> {
    fn new(polyline: &'a Polyline) -> Self {
        let points = polyline.points.as_slice();
        let closed = polyline.closed && points.len() >= 2;
        let segment_count = match points.len() {
            0 | 1 => 0,
            n if closed => n,
            n => n - 1,
        };

        let mut cumulative = Vec::with_capacity(segment_count + 1);
        let mut acc = 0.0f32;
        cumulative.push(acc);
        for i in 0..segment_count {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            acc += a.distance(b);
            cumulative.push(acc);
        }

        Self {
            points,
            closed,
            cumulative,
        }
    }

    fn total(&self) -> f32 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Walks segments to the one containing `distance` and interpolates within it.
    ///
    /// Looping paths wrap `distance` around the total length, so anything at or past the end
    /// lands back on the loop; open paths clamp to their first and last points.
    fn point_at(&self, distance: f32) -> Vec3 {
        let Some(&first) = self.points.first() else {
            return Vec3::ZERO;
        };
        let total = self.total();
        if total <= 0.0 || !distance.is_finite() {
            return first;
        }

        let d = if self.closed {
            distance.rem_euclid(total)
        } else if distance >= total {
            return self.points[self.points.len() - 1];
        } else {
            distance.max(0.0)
        };

        let idx = self.cumulative.partition_point(|&c| c < d);
        if idx == 0 {
            return first;
        }
        let segment = idx - 1;
        let a = self.points[segment];
        let b = self.points[(segment + 1) % self.points.len()];
        let start = self.cumulative[segment];
        let seg_len = self.cumulative[idx] - start;
        let t = if seg_len > 0.0 {
            ((d - start) / seg_len).clamp(0.0, 1.0)
        } else {
            0.0
        };
        a.lerp(b, t)
    }

    /// Forward difference over [`TANGENT_EPSILON`], falling back to the backward difference
    /// at the end of an open path.
    fn tangent_at(&self, distance: f32) -> Option<Vec3> {
        let here = self.point_at(distance);
        let forward = self.point_at(distance + TANGENT_EPSILON) - here;
        if forward.length_squared() > DEGENERATE_LENGTH_SQUARED {
            return Some(forward.normalize());
        }
        let backward = here - self.point_at(distance - TANGENT_EPSILON);
        if backward.length_squared() > DEGENERATE_LENGTH_SQUARED {
            return Some(backward.normalize());
        }
        None
    }
}
