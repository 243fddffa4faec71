//! Constant-velocity extrapolation of hazard positions.
//!
//! Each hazard gets a straight-line velocity and a cap on how far forward
//! that line is trusted. Past the cap the hazard freezes at its last trusted
//! position instead of being ignored.

use crate::world::{Enemy, Meteor, Vec3};

/// Below this separation an enemy is treated as coincident with the agent
/// and gets a zero pursuit velocity.
const COINCIDENT_EPSILON: f64 = 1e-3;

/// A hazard snapshot plus the window within which extrapolation is trusted.
///
/// Derived fresh for every plan; never persisted across ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredictedHazard {
    pub position: Vec3,
    pub velocity: Vec3,
    pub prediction_time: f64,
}

impl PredictedHazard {
    /// Extrapolated position at `t` seconds from now, frozen at the trusted
    /// horizon.
    pub fn position_at(&self, t: f64) -> Vec3 {
        let t = t.min(self.prediction_time);
        Vec3::new(
            self.position.x + self.velocity.x * t,
            self.position.y + self.velocity.y * t,
            self.position.z + self.velocity.z * t,
        )
    }
}

/// Projects each meteor forward. Meteors without an explicit velocity fall
/// straight down at `fall_speed`; every hazard in the batch shares the same
/// `prediction_time` stamp.
pub fn predict_meteor_positions(
    meteors: &[Meteor],
    fall_speed: f64,
    prediction_time: f64,
) -> Vec<PredictedHazard> {
    meteors
        .iter()
        .map(|meteor| PredictedHazard {
            position: meteor.position,
            velocity: meteor
                .velocity
                .unwrap_or_else(|| Vec3::new(0.0, -fall_speed, 0.0)),
            prediction_time,
        })
        .collect()
}

/// Derives a pursuit estimate for each enemy: constant `pursuit_speed`
/// toward the agent's current position, trusted for the whole path duration.
///
/// An enemy sitting on top of the agent gets a zero velocity rather than a
/// NaN heading.
pub fn predict_enemy_positions(
    enemies: &[Enemy],
    agent: Vec3,
    path_duration: f64,
    pursuit_speed: f64,
) -> Vec<PredictedHazard> {
    enemies
        .iter()
        .map(|enemy| {
            let dx = agent.x - enemy.position.x;
            let dy = agent.y - enemy.position.y;
            let dz = agent.z - enemy.position.z;
            let distance = (dx * dx + dy * dy + dz * dz).sqrt();
            let velocity = if distance < COINCIDENT_EPSILON {
                Vec3::ORIGIN
            } else {
                Vec3::new(
                    dx / distance * pursuit_speed,
                    dy / distance * pursuit_speed,
                    dz / distance * pursuit_speed,
                )
            };
            PredictedHazard {
                position: enemy.position,
                velocity,
                prediction_time: path_duration,
            }
        })
        .collect()
}
