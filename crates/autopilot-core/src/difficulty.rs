//! Maps the integer difficulty level onto continuous planning parameters.
//!
//! A single `ai_level` (1–10 by convention, neither validated nor clamped
//! here) drives everything the planner varies by difficulty: how long a plan
//! is committed to, how far hazard prediction is trusted, how fast meteors
//! are assumed to fall, and how long the agent pauses to "think" between
//! plans. All functions are pure; values outside 1–10 extrapolate the same
//! formulas without failure.

use crate::config::Tuning;

/// Fraction of the planning horizon trusted at skill 0.
const LOOKAHEAD_BASE: f64 = 0.3;
/// Additional trusted fraction gained at skill 1.
const LOOKAHEAD_RANGE: f64 = 0.6;

/// Continuous parameters derived from one `(ai_level, score)` pair.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanParams {
    /// Normalised difficulty, `ai_level / 10`.
    pub skill: f64,

    /// How long the chosen path is followed before re-planning, in seconds.
    /// Lower skill commits longer and reacts less.
    pub path_duration: f64,

    /// Fraction of `path_duration` over which hazard extrapolation is
    /// trusted; beyond it hazards freeze at their last trusted position.
    pub lookahead_percent: f64,

    /// Assumed meteor fall speed, ramping with the running score to stay in
    /// step with the host's own difficulty ramp.
    pub meteor_fall_speed: f64,

    /// Pause inserted after a finished path before the next plan, in
    /// seconds. Zero when thinking time is disabled or at level 10 and up.
    pub wait_time: f64,
}

/// Derives the planning parameters for one plan.
pub fn plan_params(
    ai_level: i32,
    current_score: f64,
    thinking_time: bool,
    tuning: &Tuning,
) -> PlanParams {
    let skill = f64::from(ai_level) / 10.0;
    let wait_ms = if thinking_time {
        (Tuning::THINK_BASE_MS - ai_level * Tuning::THINK_MS_PER_LEVEL).max(0)
    } else {
        0
    };

    PlanParams {
        skill,
        path_duration: tuning.path_duration_max - skill * tuning.path_duration_range,
        lookahead_percent: LOOKAHEAD_BASE + skill * LOOKAHEAD_RANGE,
        meteor_fall_speed: tuning.base_fall_speed + current_score * tuning.fall_speed_per_point,
        wait_time: f64::from(wait_ms) / 1000.0,
    }
}
