use bitflags::bitflags;

bitflags! {
    /// Optional planner behaviors, flipped through the setters on
    /// [`crate::Autopilot`].
    ///
    /// All features start enabled; disabling one removes the corresponding
    /// scoring/pausing behavior entirely rather than weakening it.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PilotFeatures: u8 {
        /// Penalise paths that cross ground holes.
        const HOLE_AVOIDANCE  = 1 << 0;
        /// Insert a reaction pause between a finished path and the next plan.
        const THINKING_TIME   = 1 << 1;
        /// Predict pursuing enemies and keep distance from them.
        const ENEMY_AVOIDANCE = 1 << 2;
    }
}

impl Default for PilotFeatures {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_features_start_enabled() {
        let features = PilotFeatures::default();
        assert!(features.contains(PilotFeatures::HOLE_AVOIDANCE));
        assert!(features.contains(PilotFeatures::THINKING_TIME));
        assert!(features.contains(PilotFeatures::ENEMY_AVOIDANCE));
    }
}
