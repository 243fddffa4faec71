//! Per-agent movement planning for an arena-survival game.
//!
//! This crate wires the pure decision math from `autopilot-core` into a
//! per-tick session API. Consumers build an [`ArenaSnapshot`] from their
//! world state each tick and ask an [`Autopilot`] for a movement heading;
//! the planner commits to a direction for a short window, optionally pauses
//! to "think" between plans, and re-evaluates the full candidate catalog
//! only at window boundaries.
//!
//! Modules are organized by responsibility:
//! - [`planner`] hosts the planning timer and session state
//! - [`snapshot`] defines the per-tick input borrowed from the host
//! - [`features`] holds the optional-behavior toggles
//! - [`observer`] lets hosts receive structured planning reports
//! - [`realtime`] adds a self-clocked wrapper for hosts without a sim clock
pub mod features;
pub mod observer;
pub mod planner;
pub mod realtime;
pub mod snapshot;

pub use features::PilotFeatures;
pub use observer::{PlanObserver, PlanReport};
pub use planner::Autopilot;
pub use realtime::RealtimeAutopilot;
pub use snapshot::ArenaSnapshot;

// Re-export the core vocabulary so most hosts only need one dependency.
pub use autopilot_core::{
    Direction, Enemy, Heading, Hole, Meteor, Path, PlanParams, ScoredDirection, Tuning,
    TuningError, Vec3,
};
