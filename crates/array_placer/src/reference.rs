//! Origins derived from caller-supplied reference points.
//!
//! Selection handling stays with the host: it hands over plain positions (selected objects,
//! a cursor hit) and these helpers reduce them to a pattern origin or center.
use glam::Vec3;

/// Average of `points`, or `None` when empty.
pub fn centroid(points: &[Vec3]) -> Option<Vec3> {
    if points.is_empty() {
        return None;
    }
    let sum: Vec3 = points.iter().copied().sum();
    Some(sum / points.len() as f32)
}

/// Axis-aligned `(min, max)` bounds of `points`, or `None` when empty.
pub fn bounds(points: &[Vec3]) -> Option<(Vec3, Vec3)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centroid_averages_points() {
        let c = centroid(&[Vec3::ZERO, Vec3::new(2.0, 4.0, -2.0)]).expect("centroid");
        assert_eq!(c, Vec3::new(1.0, 2.0, -1.0));
        assert!(centroid(&[]).is_none());
    }

    #[test]
    fn bounds_span_all_points() {
        let (min, max) = bounds(&[
            Vec3::new(1.0, 0.0, 5.0),
            Vec3::new(-3.0, 2.0, 0.0),
            Vec3::new(0.0, -1.0, 1.0),
        ])
        .expect("bounds");
        assert_eq!(min, Vec3::new(-3.0, -1.0, 0.0));
        assert_eq!(max, Vec3::new(1.0, 2.0, 5.0));
        assert!(bounds(&[]).is_none());
    }
}
