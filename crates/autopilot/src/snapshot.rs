use autopilot_core::{Enemy, Hole, Meteor, Vec3};

/// Per-tick view of the arena, borrowed from the host game.
///
/// The host owns every list; nothing here is retained across ticks and
/// hazard identity is never tracked. Enemies and holes default to absent,
/// which disables the corresponding scoring terms for the tick regardless of
/// the feature toggles.
#[derive(Clone, Copy, Debug)]
pub struct ArenaSnapshot<'a> {
    /// Current agent position.
    pub position: Vec3,
    pub meteors: &'a [Meteor],
    pub enemies: &'a [Enemy],
    pub holes: &'a [Hole],
    /// Running game score; drives the meteor fall-speed ramp.
    pub current_score: f64,
    /// Integer difficulty level, conventionally 1–10. Not clamped.
    pub ai_level: i32,
}

impl<'a> ArenaSnapshot<'a> {
    pub fn new(position: Vec3, meteors: &'a [Meteor], ai_level: i32) -> Self {
        Self {
            position,
            meteors,
            enemies: &[],
            holes: &[],
            current_score: 0.0,
            ai_level,
        }
    }

    pub fn with_enemies(mut self, enemies: &'a [Enemy]) -> Self {
        self.enemies = enemies;
        self
    }

    pub fn with_holes(mut self, holes: &'a [Hole]) -> Self {
        self.holes = holes;
        self
    }

    pub fn with_score(mut self, current_score: f64) -> Self {
        self.current_score = current_score;
        self
    }
}
