//! Cache for generated pose sequences.
//!
//! Hosts that regenerate a preview on every parameter tweak can keep a [`PatternCache`] keyed by
//! their own identifier (an array object's name, say). An entry is reused when both the pattern
//! parameters and the seed match what produced it, and regenerated otherwise.
use std::collections::HashMap;
use std::sync::Arc;

use crate::pattern::{Pattern, PatternGenerator};
use crate::pose::Pose;
use crate::random::SeededStream;

struct PoseEntry {
    pattern: Pattern,
    seed: u64,
    poses: Arc<Vec<Pose>>,
}

/// Cache for generated poses, keyed by caller id and invalidated by parameter changes.
#[derive(Default)]
pub struct PatternCache {
    entries: HashMap<String, PoseEntry>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poses cached under `key`, regardless of whether they are still current.
    pub fn get(&self, key: &str) -> Option<Arc<Vec<Pose>>> {
        self.entries.get(key).map(|e| Arc::clone(&e.poses))
    }

    /// Removes the entry for `key`, returning its poses if it existed.
    pub fn remove(&mut self, key: &str) -> Option<Arc<Vec<Pose>>> {
        self.entries.remove(key).map(|e| e.poses)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets the poses for `pattern` and `seed`, generating and caching them if necessary.
    pub fn get_or_generate(&mut self, key: &str, pattern: &Pattern, seed: u64) -> Arc<Vec<Pose>> {
        if let Some(entry) = self.entries.get(key) {
            if entry.seed == seed && entry.pattern == *pattern {
                return Arc::clone(&entry.poses);
            }
        }

        let poses = Arc::new(pattern.generate(&mut SeededStream::new(seed)));
        self.entries.insert(
            key.to_string(),
            PoseEntry {
                pattern: pattern.clone(),
                seed,
                poses: Arc::clone(&poses),
            },
        );
        poses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{GridPattern, RandomAreaPattern};

    #[test]
    fn reuses_entry_for_unchanged_parameters() {
        let mut cache = PatternCache::new();
        let pattern: Pattern = RandomAreaPattern::new(4.0, 10).into();
        let a = cache.get_or_generate("array", &pattern, 3);
        let b = cache.get_or_generate("array", &pattern, 3);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn regenerates_when_seed_or_pattern_changes() {
        let mut cache = PatternCache::new();
        let pattern: Pattern = RandomAreaPattern::new(4.0, 10).into();
        let a = cache.get_or_generate("array", &pattern, 3);
        let b = cache.get_or_generate("array", &pattern, 4);
        assert!(!Arc::ptr_eq(&a, &b));
        assert_ne!(*a, *b);

        let grid: Pattern = GridPattern::new(2, 2, 1.0, 1.0).into();
        let c = cache.get_or_generate("array", &grid, 4);
        assert_eq!(c.len(), 4);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn remove_and_clear_drop_entries() {
        let mut cache = PatternCache::new();
        let grid: Pattern = GridPattern::new(1, 3, 1.0, 1.0).into();
        cache.get_or_generate("a", &grid, 0);
        cache.get_or_generate("b", &grid, 0);
        assert!(cache.remove("a").is_some());
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        cache.clear();
        assert!(cache.is_empty());
    }
}
