use core::fmt;

/// Real-valued world coordinate or velocity.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Straight-line distance to `other` ignoring the vertical axis.
    ///
    /// Airborne hazards are handled through height bands and falloff factors,
    /// so almost all of the scoring works on ground-plane distances.
    pub fn horizontal_distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// A falling hazard, supplied fresh by the host every tick.
///
/// Meteors that do not report a velocity fall straight down at the current
/// fall speed; see [`crate::predict::predict_meteor_positions`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meteor {
    pub position: Vec3,
    pub velocity: Option<Vec3>,
}

impl Meteor {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: None,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = Some(velocity);
        self
    }
}

/// A pursuing hostile. Enemies never report their own velocity; a pursuit
/// estimate is derived from their position relative to the agent.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub position: Vec3,
}

impl Enemy {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }
}

/// Axis-aligned square danger region on the ground plane.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hole {
    pub x: f64,
    pub z: f64,
    pub half_size: f64,
}

impl Hole {
    pub fn new(x: f64, z: f64, half_size: f64) -> Self {
        Self { x, z, half_size }
    }

    /// Whether the ground-plane point `(x, z)` lies inside this hole.
    pub fn contains(&self, x: f64, z: f64) -> bool {
        (x - self.x).abs() <= self.half_size && (z - self.z).abs() <= self.half_size
    }
}
