//! The planning timer: decides when a fresh plan is computed and replays the
//! committed one in between.

use autopilot_core::{
    Direction, Heading, Path, ScoreContext, ScoredDirection, Tuning, TuningError, plan_params,
    predict_enemy_positions, predict_meteor_positions, select_best_path,
};

use crate::features::PilotFeatures;
use crate::observer::{PlanObserver, PlanReport};
use crate::snapshot::ArenaSnapshot;

/// Per-agent movement planner.
///
/// One `Autopilot` owns the session state for exactly one agent: the
/// committed [`Path`] and the two timestamps that drive the
/// Idle → Following → Waiting cycle. It is designed to be called once per
/// simulation tick from a single logical thread of control; agents driven
/// concurrently must each own their own instance.
///
/// # Time
///
/// `now` is an explicit argument in seconds on an arbitrary monotonic scale
/// chosen by the caller, which keeps the planner deterministic and testable.
/// Hosts that don't track simulation time can use
/// [`crate::RealtimeAutopilot`] instead.
///
/// # Cost
///
/// A full re-plan evaluates 9 candidates over at most 11 samples against
/// every hazard; ticks inside a commitment window replay the cached heading
/// in O(1).
pub struct Autopilot {
    tuning: Tuning,
    features: PilotFeatures,
    current_path: Option<Path>,
    path_started_at: f64,
    wait_until: f64,
    observer: Option<Box<dyn PlanObserver>>,
}

impl Autopilot {
    /// Creates a planner with the default tuning and all features enabled.
    pub fn new() -> Self {
        Self {
            tuning: Tuning::default(),
            features: PilotFeatures::default(),
            current_path: None,
            path_started_at: 0.0,
            wait_until: 0.0,
            observer: None,
        }
    }

    /// Creates a planner with a host-supplied tuning.
    pub fn with_tuning(tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            tuning,
            ..Self::new()
        })
    }

    /// Installs an observer that receives every committed plan.
    pub fn set_observer(&mut self, observer: Box<dyn PlanObserver>) {
        self.observer = Some(observer);
    }

    pub fn features(&self) -> PilotFeatures {
        self.features
    }

    pub fn set_hole_avoidance(&mut self, enabled: bool) {
        self.features.set(PilotFeatures::HOLE_AVOIDANCE, enabled);
    }

    pub fn set_thinking_time(&mut self, enabled: bool) {
        self.features.set(PilotFeatures::THINKING_TIME, enabled);
    }

    pub fn set_enemy_avoidance(&mut self, enabled: bool) {
        self.features.set(PilotFeatures::ENEMY_AVOIDANCE, enabled);
    }

    /// The committed path, if the planner is currently following one.
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_ref()
    }

    /// Chooses the movement heading for this tick.
    ///
    /// Inside a commitment window the previously chosen heading is replayed
    /// unchanged. Once the window has run its course the planner either
    /// pauses (zero heading, while thinking time remains) or evaluates the
    /// full catalog and commits a fresh path.
    pub fn suggest_move(&mut self, snapshot: &ArenaSnapshot<'_>, now: f64) -> Heading {
        if let Some(path) = &self.current_path {
            if now < self.path_started_at + path.duration {
                return path.heading;
            }
        }

        if now < self.wait_until {
            // Thinking pause between the finished path and the next plan.
            return Heading::ZERO;
        }

        self.plan(snapshot, now)
    }

    /// Forces the planner back to the idle state, e.g. on game restart.
    pub fn reset(&mut self) {
        self.current_path = None;
        self.path_started_at = 0.0;
        self.wait_until = 0.0;
    }

    fn plan(&mut self, snapshot: &ArenaSnapshot<'_>, now: f64) -> Heading {
        let thinking = self.features.contains(PilotFeatures::THINKING_TIME);
        let params = plan_params(
            snapshot.ai_level,
            snapshot.current_score,
            thinking,
            &self.tuning,
        );

        let meteors = predict_meteor_positions(
            snapshot.meteors,
            params.meteor_fall_speed,
            params.path_duration * params.lookahead_percent,
        );
        let enemies = if self.features.contains(PilotFeatures::ENEMY_AVOIDANCE) {
            predict_enemy_positions(
                snapshot.enemies,
                snapshot.position,
                params.path_duration,
                self.tuning.pursuit_speed,
            )
        } else {
            Vec::new()
        };

        let ctx = ScoreContext {
            start: snapshot.position,
            meteors: &meteors,
            enemies: &enemies,
            holes: snapshot.holes,
            ai_level: snapshot.ai_level,
            path_duration: params.path_duration,
            avoid_holes: self.features.contains(PilotFeatures::HOLE_AVOIDANCE),
            tuning: &self.tuning,
        };

        let (path, candidates) = select_with_logging(&ctx);

        self.path_started_at = now;
        self.wait_until = now + path.duration + params.wait_time;
        self.current_path = Some(path);

        if let Some(observer) = self.observer.as_mut() {
            let report = PlanReport {
                now,
                ai_level: snapshot.ai_level,
                params,
                candidates,
                chosen: path,
            };
            observer.plan_committed(&report);
        }

        path.heading
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new()
    }
}

fn select_with_logging(ctx: &ScoreContext<'_>) -> (Path, Vec<ScoredDirection>) {
    tracing::debug!(
        "Autopilot: Evaluating {} candidates ({} meteors, {} enemies, {} holes)",
        Direction::CATALOG.len(),
        ctx.meteors.len(),
        ctx.enemies.len(),
        ctx.holes.len()
    );

    let (path, candidates) = select_best_path(&Direction::CATALOG, ctx);

    // Handle an empty candidate set (should not happen with the fixed catalog)
    if candidates.is_empty() {
        tracing::warn!("Autopilot: No candidates evaluated, falling back to stay");
        return (path, candidates);
    }

    for candidate in &candidates {
        tracing::debug!(
            "  Candidate {}: score={:.1}",
            candidate.direction,
            candidate.score
        );
    }
    tracing::debug!(
        "Autopilot: Best direction = {} (score={:.1}, committed for {:.2}s)",
        path.direction,
        path.score,
        path.duration
    );

    (path, candidates)
}
