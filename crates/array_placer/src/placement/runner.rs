//! High-level runner: pattern generation, surface conformance and instancing for one request.
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::instancing::{instantiate, InstanceDescriptor};
use crate::pattern::PatternGenerator;
use crate::placement::events::{EventSink, PlacementEvent, PlacementEventKind};
use crate::placement::plan::PlacementRequest;
use crate::pose::Pose;
use crate::random::SeededStream;
use crate::surface::{conform, SurfaceProbe};

/// Result of running a placement request.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementResult {
    /// Descriptors in sequence index order.
    pub descriptors: Vec<InstanceDescriptor>,
    /// Final poses, after conformance, matching `descriptors` one to one.
    pub poses: Vec<Pose>,
    /// Count the pattern asked for, when it has one.
    pub requested: Option<usize>,
    /// Poses whose probe found no surface.
    pub surface_misses: usize,
}

impl PlacementResult {
    /// Number of delivered instances.
    pub fn delivered(&self) -> usize {
        self.descriptors.len()
    }

    /// How many requested instances could not be placed.
    pub fn shortfall(&self) -> usize {
        self.requested
            .map_or(0, |requested| requested.saturating_sub(self.delivered()))
    }

    /// Whether fewer instances were delivered than requested. Not a failure.
    pub fn is_under_delivered(&self) -> bool {
        self.shortfall() > 0
    }
}

/// Runs placement requests against an optional host surface.
pub struct PlacementRunner<'a> {
    /// Surface used by requests that ask for conformance.
    pub surface: Option<&'a dyn SurfaceProbe>,
}

impl<'a> PlacementRunner<'a> {
    /// Runner without a surface; conformance requests fall back to generated positions.
    pub fn new() -> Self {
        Self { surface: None }
    }

    pub fn with_surface(surface: &'a dyn SurfaceProbe) -> Self {
        Self {
            surface: Some(surface),
        }
    }

    /// Validates and runs `request`.
    pub fn run(&self, request: &PlacementRequest) -> Result<PlacementResult> {
        request.validate()?;
        Ok(run_placement(request, self.surface, None))
    }

    pub fn run_with_events(
        &self,
        request: &PlacementRequest,
        sink: &mut dyn EventSink,
    ) -> Result<PlacementResult> {
        request.validate()?;
        Ok(run_placement(request, self.surface, Some(sink)))
    }
}

impl Default for PlacementRunner<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `request` without validating it first.
///
/// Degenerate parameters produce an empty result rather than an error.
pub fn run_placement(
    request: &PlacementRequest,
    surface: Option<&dyn SurfaceProbe>,
    sink: Option<&mut dyn EventSink>,
) -> PlacementResult {
    if let Some(s) = sink {
        run_placement_with_events(request, surface, s)
    } else {
        run_placement_with_events(request, surface, &mut ())
    }
}

pub fn run_placement_with_events(
    request: &PlacementRequest,
    surface: Option<&dyn SurfaceProbe>,
    sink: &mut dyn EventSink,
) -> PlacementResult {
    let label = request.pattern.label();
    let requested = request.pattern.requested_count();

    if sink.wants(PlacementEventKind::RunStarted) {
        sink.send(PlacementEvent::RunStarted {
            pattern: label,
            requested,
            seed: request.seed,
        });
    }

    if request.prototypes.is_empty() {
        warn!("Placement '{}' has no prototypes; skipping.", label);
        if sink.wants(PlacementEventKind::Warning) {
            sink.send(PlacementEvent::Warning {
                context: format!("pattern:{label}"),
                message: "Request has no prototypes; skipping".into(),
            });
        }
        let result = PlacementResult {
            requested,
            ..Default::default()
        };
        finish(sink, &result);
        return result;
    }

    let conformance = match (&request.conformance, surface) {
        (Some(settings), Some(surface)) => Some((settings, surface)),
        (Some(_), None) => {
            warn!(
                "Placement '{}' requests surface conformance but no surface was supplied.",
                label
            );
            if sink.wants(PlacementEventKind::Warning) {
                sink.send(PlacementEvent::Warning {
                    context: format!("pattern:{label}"),
                    message: "No surface supplied; keeping generated positions".into(),
                });
            }
            None
        }
        (None, _) => None,
    };

    let facing = conformance.is_none_or(|(settings, _)| !settings.mode.aligns_orientation());
    let mut position_stream = SeededStream::new(request.seed);
    let raw = request
        .pattern
        .generate_with_facing(facing, &mut position_stream);

    info!(
        "Placement '{}' | seed: {} | requested: {:?} | generated: {}.",
        label,
        request.seed,
        requested,
        raw.len()
    );
    if raw.is_empty() {
        warn!("Placement '{}' generated no poses.", label);
    }
    if sink.wants(PlacementEventKind::PosesGenerated) {
        sink.send(PlacementEvent::PosesGenerated { count: raw.len() });
    }

    if let Some(requested) = requested {
        if raw.len() < requested {
            warn!(
                "Placement '{}' delivered {} of {} requested instances.",
                label,
                raw.len(),
                requested
            );
            if sink.wants(PlacementEventKind::UnderDelivered) {
                sink.send(PlacementEvent::UnderDelivered {
                    requested,
                    delivered: raw.len(),
                });
            }
        }
    }

    let mut surface_misses = 0;
    let poses: Vec<Pose> = match conformance {
        Some((settings, surface)) => raw
            .into_iter()
            .map(|pose| {
                let conformed = conform(pose, settings, surface);
                if conformed.hit.is_none() {
                    surface_misses += 1;
                    debug!("Probe missed below pose {} at {}.", pose.index, pose.position);
                    if sink.wants(PlacementEventKind::SurfaceMissed) {
                        sink.send(PlacementEvent::SurfaceMissed {
                            index: pose.index,
                            position: pose.position,
                        });
                    }
                }
                conformed.pose
            })
            .collect(),
        None => raw,
    };

    let mut jitter_stream = SeededStream::jitter_for(request.seed);
    let descriptors = instantiate(
        &poses,
        &request.prototypes,
        &request.instancing,
        &mut jitter_stream,
    );

    if sink.wants(PlacementEventKind::InstanceCreated) {
        for descriptor in &descriptors {
            sink.send(PlacementEvent::InstanceCreated {
                descriptor: descriptor.clone(),
            });
        }
    }

    let result = PlacementResult {
        descriptors,
        poses,
        requested,
        surface_misses,
    };
    finish(sink, &result);
    result
}

fn finish(sink: &mut dyn EventSink, result: &PlacementResult) {
    if sink.wants(PlacementEventKind::RunFinished) {
        sink.send(PlacementEvent::RunFinished {
            result: result.clone(),
        });
    }
}
