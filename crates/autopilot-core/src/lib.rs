//! Deterministic movement-decision math for an arena-survival agent.
//!
//! `autopilot-core` defines the candidate direction catalog, the difficulty
//! mapping, hazard prediction, and path scoring/selection as pure APIs that
//! can be reused by the session layer and offline tools. Nothing here logs,
//! performs I/O, or keeps state between calls; the per-agent planning timer
//! lives in the `autopilot` crate.
pub mod config;
pub mod difficulty;
pub mod direction;
pub mod predict;
pub mod score;
pub mod select;
pub mod world;

pub use config::{Tuning, TuningError};
pub use difficulty::{PlanParams, plan_params};
pub use direction::{Direction, Heading};
pub use predict::{PredictedHazard, predict_enemy_positions, predict_meteor_positions};
pub use score::{ScoreContext, evaluate_path};
pub use select::{Path, ScoredDirection, evaluate_all, select_best_path};
pub use world::{Enemy, Hole, Meteor, Vec3};
