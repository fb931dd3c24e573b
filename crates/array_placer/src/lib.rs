#![forbid(unsafe_code)]
//! array_placer: Procedural array placement with Poisson-disk sampling and surface conformance.
//!
//! Modules:
//! - pattern: Linear, Circular, Grid, Path and Random-Area pose generators
//! - sampling: disk samplers (Poisson disk, uniform) and arc-length path resampling
//! - surface: host surface probing and pose conformance (snap, slope and normal alignment)
//! - instancing: prototype selection, scale curve, jitter and naming of instance descriptors
//! - placement: requests, the runner and run events
//!
//! The host scene supplies prototypes and a [`surface::SurfaceProbe`] and consumes the
//! resulting [`instancing::InstanceDescriptor`]s; nothing here touches a scene graph.
pub mod cache;
pub mod error;
pub mod instancing;
pub mod pattern;
pub mod placement;
pub mod pose;
pub mod random;
pub mod reference;
pub mod sampling;
pub mod surface;

/// Convenient re-exports for common types. Import with `use array_placer::prelude::*;`.
pub mod prelude {
    pub use crate::cache::PatternCache;
    pub use crate::error::{Error, Result};
    pub use crate::instancing::{
        instantiate, InstanceDescriptor, InstanceSettings, JitterSettings, NameTemplate,
        Prototype, PrototypeId, PrototypeSelection, ScaleCurve,
    };
    pub use crate::pattern::{
        CircularPattern, GridPattern, LinearPattern, OffsetSpace, PathPattern, Pattern,
        PatternGenerator, RandomAreaPattern,
    };
    pub use crate::placement::events::{
        EventSink, FnSink, MultiSink, PlacementEvent, PlacementEventKind, VecSink,
    };
    pub use crate::placement::plan::PlacementRequest;
    pub use crate::placement::runner::{
        run_placement, run_placement_with_events, PlacementResult, PlacementRunner,
    };
    pub use crate::pose::{look_rotation, PathSample, Pose};
    pub use crate::random::{RandomStream, SeededStream, JITTER_SEED_OFFSET};
    pub use crate::reference::{bounds, centroid};
    pub use crate::sampling::{
        DiskDistribution, DiskSampling, PoissonDiskSampling, Polyline, UniformDiskSampling,
    };
    pub use crate::surface::{
        conform, slope_angle_deg, ConformanceMode, ConformanceSettings, Conformed, FnSurface,
        PlaneSurface, SurfaceFilter, SurfaceHit, SurfaceProbe,
    };
}
