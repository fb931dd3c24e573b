//! Piecewise-linear scale curve evaluated over the normalized path parameter.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Keyframes `(t, value)` sorted by `t`, linearly interpolated and clamped at both ends.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaleCurve {
    keys: Vec<(f32, f32)>,
}

impl ScaleCurve {
    /// Build from arbitrary keyframes; they are sorted by `t`.
    pub fn new(mut keys: Vec<(f32, f32)>) -> Self {
        keys.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { keys }
    }

    pub fn constant(value: f32) -> Self {
        Self::new(vec![(0.0, value)])
    }

    /// Ramp from `from` at `t = 0` to `to` at `t = 1`.
    pub fn linear(from: f32, to: f32) -> Self {
        Self::new(vec![(0.0, from), (1.0, to)])
    }

    pub fn with_key(mut self, t: f32, value: f32) -> Self {
        self.keys.push((t, value));
        self.keys.sort_by(|a, b| a.0.total_cmp(&b.0));
        self
    }

    pub fn keys(&self) -> &[(f32, f32)] {
        &self.keys
    }

    /// Value at `t`. An empty curve evaluates to `1.0`; a NaN `t` gives the first key's value.
    pub fn evaluate(&self, t: f32) -> f32 {
        let (Some(&(t0, v0)), Some(&(tn, vn))) = (self.keys.first(), self.keys.last()) else {
            return 1.0;
        };
        if t.is_nan() || t <= t0 {
            return v0;
        }
        if t >= tn {
            return vn;
        }
        if self.keys.len() < 2 {
            return v0;
        }

        // Non-finite keys can break the partition; keep `idx` on an interior segment.
        let idx = self
            .keys
            .partition_point(|&(k, _)| k <= t)
            .clamp(1, self.keys.len() - 1);
        let (ta, va) = self.keys[idx - 1];
        let (tb, vb) = self.keys[idx];
        let span = tb - ta;
        if span <= 0.0 {
            return vb;
        }
        va + (vb - va) * ((t - ta) / span)
    }

    pub fn validate(&self) -> Result<()> {
        if self
            .keys
            .iter()
            .any(|(t, v)| !t.is_finite() || !v.is_finite())
        {
            return Err(Error::InvalidConfig(
                "scale curve keys must be finite".into(),
            ));
        }
        Ok(())
    }
}
