/// Gameplay constants and tunable parameters consumed by the planner.
///
/// The defaults describe the canonical arena: an 18×18 unit square centred on
/// the origin, an agent that covers 12 units per second, and meteors whose
/// fall speed ramps with the running score. Hosts with different arena
/// geometry or pacing override individual fields and call [`Tuning::validate`]
/// before handing the tuning to a planner.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuning {
    /// Half-extent of the square arena. The legal end zone for a path stops
    /// one unit inside this boundary.
    pub world_half: f64,

    /// Ground speed assumed when simulating candidate paths, in units per
    /// second. Decoupled from whatever speed the host actually applies to the
    /// returned heading.
    pub ground_speed: f64,

    /// Assumed constant pursuit speed of enemies, in units per second.
    pub pursuit_speed: f64,

    /// Meteor fall speed at score zero, in units per second.
    pub base_fall_speed: f64,

    /// Additional fall speed per point of score. Must stay numerically
    /// consistent with the host's own difficulty ramp or predictions drift.
    pub fall_speed_per_point: f64,

    /// Safety floor for enemy spacing. Paths that start closer than this are
    /// penalised; paths that widen an already-safe gap are rewarded.
    pub min_enemy_distance: f64,

    /// Commitment window at skill 0 (the longest a plan is followed).
    /// Defaults give 0.3–0.8 s windows across levels 1–10; a sluggish
    /// long-commitment variant (1.6/1.0) works too but leaves low-level
    /// agents overshooting the arena on every candidate.
    pub path_duration_max: f64,

    /// How much the commitment window shrinks at skill 1.
    pub path_duration_range: f64,
}

impl Tuning {
    // ===== fixed constants used by the scorer and mapper =====
    /// Sample count along a candidate path (9 instants including both ends).
    pub const PATH_SAMPLES: usize = 8;
    /// Sample count for hole crossing checks (11 instants including both ends).
    pub const HOLE_SAMPLES: usize = 10;
    /// Nominal height of the agent above the ground plane.
    pub const PLAYER_HEIGHT: f64 = 1.0;
    /// Margin between the arena wall and the legal end zone for a path.
    pub const INNER_MARGIN: f64 = 1.0;
    /// Thinking pause at level 0, in milliseconds.
    pub const THINK_BASE_MS: i32 = 500;
    /// Thinking pause shed per difficulty level, in milliseconds.
    pub const THINK_MS_PER_LEVEL: i32 = 50;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WORLD_HALF: f64 = 9.0;
    pub const DEFAULT_GROUND_SPEED: f64 = 12.0;
    pub const DEFAULT_PURSUIT_SPEED: f64 = 2.6;
    pub const DEFAULT_BASE_FALL_SPEED: f64 = 8.0;
    pub const DEFAULT_FALL_SPEED_PER_POINT: f64 = 0.15;
    pub const DEFAULT_MIN_ENEMY_DISTANCE: f64 = 5.0;
    pub const DEFAULT_PATH_DURATION_MAX: f64 = 0.8;
    pub const DEFAULT_PATH_DURATION_RANGE: f64 = 0.5;

    pub fn new() -> Self {
        Self {
            world_half: Self::DEFAULT_WORLD_HALF,
            ground_speed: Self::DEFAULT_GROUND_SPEED,
            pursuit_speed: Self::DEFAULT_PURSUIT_SPEED,
            base_fall_speed: Self::DEFAULT_BASE_FALL_SPEED,
            fall_speed_per_point: Self::DEFAULT_FALL_SPEED_PER_POINT,
            min_enemy_distance: Self::DEFAULT_MIN_ENEMY_DISTANCE,
            path_duration_max: Self::DEFAULT_PATH_DURATION_MAX,
            path_duration_range: Self::DEFAULT_PATH_DURATION_RANGE,
        }
    }

    /// Rejects tunings that would break planner invariants.
    ///
    /// Positive speeds keep the simulated paths and pursuit estimates
    /// meaningful, the arena must leave room inside the boundary margin, and
    /// the duration formula must yield a positive commitment window at every
    /// skill value in (0, 1].
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.ground_speed <= 0.0 {
            return Err(TuningError::NonPositiveGroundSpeed(self.ground_speed));
        }
        if self.pursuit_speed <= 0.0 {
            return Err(TuningError::NonPositivePursuitSpeed(self.pursuit_speed));
        }
        if self.world_half <= Self::INNER_MARGIN {
            return Err(TuningError::WorldTooSmall(self.world_half));
        }
        if self.path_duration_range >= self.path_duration_max {
            return Err(TuningError::EmptyCommitWindow {
                max: self.path_duration_max,
                range: self.path_duration_range,
            });
        }
        Ok(())
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum TuningError {
    #[error("ground speed must be positive, got {0}")]
    NonPositiveGroundSpeed(f64),

    #[error("pursuit speed must be positive, got {0}")]
    NonPositivePursuitSpeed(f64),

    #[error("world half-extent {0} leaves no room inside the boundary margin")]
    WorldTooSmall(f64),

    #[error("path duration range {range} must be smaller than the maximum {max}")]
    EmptyCommitWindow { max: f64, range: f64 },
}
