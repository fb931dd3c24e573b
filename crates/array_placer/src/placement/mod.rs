//! Placement requests, the runner that executes them, and run events.
pub mod events;
pub mod plan;
pub mod runner;
