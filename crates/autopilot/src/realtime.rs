use std::time::Instant;

use autopilot_core::Heading;

use crate::planner::Autopilot;
use crate::snapshot::ArenaSnapshot;

/// An [`Autopilot`] paired with its own monotonic clock.
///
/// Thin convenience for hosts that don't track simulation time themselves;
/// everything else should construct an [`Autopilot`] and pass `now`
/// explicitly. One value per agent; the wrapper is no more shareable across
/// concurrent callers than the planner it owns.
pub struct RealtimeAutopilot {
    pilot: Autopilot,
    started: Instant,
}

impl RealtimeAutopilot {
    pub fn new() -> Self {
        Self::from_pilot(Autopilot::new())
    }

    /// Wraps a pre-configured planner.
    pub fn from_pilot(pilot: Autopilot) -> Self {
        Self {
            pilot,
            started: Instant::now(),
        }
    }

    /// Elapsed-clock version of [`Autopilot::suggest_move`].
    pub fn suggest_move(&mut self, snapshot: &ArenaSnapshot<'_>) -> Heading {
        let now = self.started.elapsed().as_secs_f64();
        self.pilot.suggest_move(snapshot, now)
    }

    pub fn reset(&mut self) {
        self.pilot.reset();
    }

    /// Access to toggles, tuning, and the observer slot.
    pub fn pilot_mut(&mut self) -> &mut Autopilot {
        &mut self.pilot
    }

    pub fn pilot(&self) -> &Autopilot {
        &self.pilot
    }
}

impl Default for RealtimeAutopilot {
    fn default() -> Self {
        Self::new()
    }
}
