//! Placement requests: everything one run needs, passed by value into the runner.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::instancing::{InstanceSettings, Prototype};
use crate::pattern::Pattern;
use crate::surface::ConformanceSettings;

/// A single placement job.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRequest {
    /// Pattern and its parameters.
    pub pattern: Pattern,
    /// Prototypes to duplicate.
    pub prototypes: Vec<Prototype>,
    /// Surface conformance; `None` keeps generated positions as they are.
    pub conformance: Option<ConformanceSettings>,
    /// Scale curve, jitter, naming and prototype selection.
    pub instancing: InstanceSettings,
    /// Seed of the position stream; the jitter stream is derived from it.
    pub seed: u64,
}

impl PlacementRequest {
    /// Create a new request with required fields.
    pub fn new(pattern: impl Into<Pattern>, prototypes: Vec<Prototype>) -> Self {
        Self {
            pattern: pattern.into(),
            prototypes,
            conformance: None,
            instancing: InstanceSettings::default(),
            seed: 0,
        }
    }

    /// Conform every pose to the surface supplied to the runner.
    pub fn with_conformance(mut self, conformance: ConformanceSettings) -> Self {
        self.conformance = Some(conformance);
        self
    }

    pub fn with_instancing(mut self, instancing: InstanceSettings) -> Self {
        self.instancing = instancing;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the request, returning an error if it cannot be run.
    pub fn validate(&self) -> Result<()> {
        if self.prototypes.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one prototype is required".into(),
            ));
        }
        self.pattern.validate()?;
        if let Some(conformance) = &self.conformance {
            conformance.validate()?;
        }
        self.instancing.validate()
    }
}
