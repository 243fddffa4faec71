//! Observer hook for committed plans.
//!
//! Planning decisions are interesting to hosts (debug overlays, replay
//! capture) but the scorer itself must stay side-effect free. The planner
//! therefore hands a structured [`PlanReport`] to an injected observer at
//! the moment a plan is committed; ticks that merely replay the committed
//! path never reach the observer.

use autopilot_core::{Path, PlanParams, ScoredDirection};

/// Structured record of one planning decision.
#[derive(Clone, Debug)]
pub struct PlanReport {
    /// Session clock at the moment the plan was committed, in seconds.
    pub now: f64,
    pub ai_level: i32,
    /// Parameters the difficulty mapper derived for this plan.
    pub params: PlanParams,
    /// Every candidate with its score, in catalog order.
    pub candidates: Vec<ScoredDirection>,
    pub chosen: Path,
}

/// Receives every committed plan.
pub trait PlanObserver: Send {
    fn plan_committed(&mut self, report: &PlanReport);
}
