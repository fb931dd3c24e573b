//! Event types and sinks for observing placement runs.
//!
//! This module defines [`PlacementEvent`] and a set of sinks to emit, collect, or forward
//! events while executing a [`crate::placement::plan::PlacementRequest`] via
//! [`crate::placement::runner::PlacementRunner`] or [`crate::placement::runner::run_placement`].
use glam::Vec3;

use crate::instancing::InstanceDescriptor;
use crate::placement::runner::PlacementResult;

/// Describes events emitted by placement runs.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum PlacementEvent {
    /// Emitted when a run starts.
    RunStarted {
        /// Pattern label, e.g. `"grid"`.
        pattern: &'static str,
        /// Requested count when the pattern has one.
        requested: Option<usize>,
        /// Seed of the position stream.
        seed: u64,
    },

    /// Emitted once the generator returned its raw poses.
    PosesGenerated {
        /// Number of raw poses.
        count: usize,
    },

    /// Emitted when the surface probe found nothing below a pose.
    SurfaceMissed {
        /// Sequence index of the pose.
        index: usize,
        /// Un-conformed position that was kept.
        position: Vec3,
    },

    /// Emitted for every descriptor handed to the host.
    InstanceCreated {
        descriptor: InstanceDescriptor,
    },

    /// Emitted when a pattern with a target count produced fewer poses.
    UnderDelivered {
        requested: usize,
        delivered: usize,
    },

    /// Non-fatal warning generated during a run.
    Warning {
        /// Context string (e.g. pattern label).
        context: String,
        /// Human-readable message.
        message: String,
    },

    /// Emitted when the run finishes.
    RunFinished {
        result: PlacementResult,
    },
}

/// Discriminant of [`PlacementEvent`], used by sinks to opt out of event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementEventKind {
    RunStarted,
    PosesGenerated,
    SurfaceMissed,
    InstanceCreated,
    UnderDelivered,
    Warning,
    RunFinished,
}

impl PlacementEvent {
    pub fn kind(&self) -> PlacementEventKind {
        match self {
            PlacementEvent::RunStarted { .. } => PlacementEventKind::RunStarted,
            PlacementEvent::PosesGenerated { .. } => PlacementEventKind::PosesGenerated,
            PlacementEvent::SurfaceMissed { .. } => PlacementEventKind::SurfaceMissed,
            PlacementEvent::InstanceCreated { .. } => PlacementEventKind::InstanceCreated,
            PlacementEvent::UnderDelivered { .. } => PlacementEventKind::UnderDelivered,
            PlacementEvent::Warning { .. } => PlacementEventKind::Warning,
            PlacementEvent::RunFinished { .. } => PlacementEventKind::RunFinished,
        }
    }
}

/// A generic event sink that accepts [`PlacementEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: PlacementEvent);

    /// Whether the sink wants events of `kind`. Lets the runner skip building them.
    fn wants(&self, _kind: PlacementEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: PlacementEvent) {}

    #[inline]
    fn wants(&self, _kind: PlacementEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(PlacementEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(PlacementEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(PlacementEvent),
{
    #[inline]
    fn send(&mut self, event: PlacementEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally restricted to some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<PlacementEvent>,
    only: Option<Vec<PlacementEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect only events of the listed kinds.
    pub fn only(kinds: &[PlacementEventKind]) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.to_vec()),
        }
    }

    pub fn into_inner(self) -> Vec<PlacementEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[PlacementEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: PlacementEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }

    fn wants(&self, kind: PlacementEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: PlacementEvent) {
        let kind = event.kind();
        let targets: Vec<usize> = (0..self.sinks.len())
            .filter(|&i| self.sinks[i].wants(kind))
            .collect();
        let Some((&last, rest)) = targets.split_last() else {
            return;
        };
        for &i in rest {
            self.sinks[i].send(event.clone());
        }
        self.sinks[last].send(event);
    }

    fn wants(&self, kind: PlacementEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}
