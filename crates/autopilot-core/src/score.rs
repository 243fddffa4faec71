//! Path scoring: simulates one candidate direction over the planning horizon
//! and accumulates a scalar desirability score from independent terms.
//!
//! Every term is monotonic and saturating; only the collision and
//! out-of-bounds penalties are allowed to dominate unboundedly. The scorer
//! performs no logging and keeps no state, and there is no failure mode:
//! the snapshot types make a hazard without a position unrepresentable.

use crate::config::Tuning;
use crate::direction::{Direction, Heading};
use crate::predict::PredictedHazard;
use crate::world::{Hole, Vec3};

/// Flat bonus for any non-zero direction; breaks ties in favour of moving.
const MOVEMENT_BONUS: f64 = 30.0;

// Meteor risk tiers (horizontal distance at a sample instant).
const METEOR_HIT_RADIUS: f64 = 1.6;
const METEOR_NEAR_RADIUS: f64 = 3.5;
const METEOR_FAR_RADIUS: f64 = 5.0;
const METEOR_HIT_PENALTY: f64 = 1000.0;
const METEOR_NEAR_WEIGHT: f64 = 200.0;
const METEOR_FAR_WEIGHT: f64 = 30.0;
/// Vertical band within which a meteor threatens the agent at all.
const METEOR_HEIGHT_BAND: f64 = 4.0;
/// Height offset at which the threat weight fades to zero.
const METEOR_HEIGHT_FADE: f64 = 2.0;
/// Reward per unit of clearance from the nearest threatening meteor.
const METEOR_CLEARANCE_BONUS: f64 = 5.0;
const METEOR_CLEARANCE_CAP: f64 = 50.0;

// Enemy risk tiers (horizontal distance at a sample instant).
const ENEMY_HIT_RADIUS: f64 = 2.0;
const ENEMY_NEAR_RADIUS: f64 = 4.0;
const ENEMY_MID_RADIUS: f64 = 6.0;
const ENEMY_FAR_RADIUS: f64 = 8.0;
const ENEMY_HIT_PENALTY: f64 = 1500.0;
const ENEMY_NEAR_WEIGHT: f64 = 400.0;
const ENEMY_MID_WEIGHT: f64 = 50.0;
const ENEMY_FAR_WEIGHT: f64 = 10.0;

// Enemy spacing relative to the safety floor.
const SPACING_SHORTFALL_PENALTY: f64 = 300.0;
const SPACING_GAIN_BONUS: f64 = 150.0;
const SPACING_LOSS_PENALTY: f64 = 200.0;
const SPACING_EXCESS_BONUS: f64 = 40.0;
const SPACING_EXCESS_CAP: f64 = 5.0;
const SPACING_COMFORT_THRESHOLD: f64 = 2.0;
const SPACING_COMFORT_BONUS: f64 = 30.0;
const SPACING_WIDEN_BONUS: f64 = 20.0;
const SPACING_WIDEN_CAP: f64 = 3.0;

const CENTER_WEIGHT: f64 = 2.0;
const EDGE_CLEARANCE_THRESHOLD: f64 = 2.0;
const EDGE_WEIGHT: f64 = 150.0;

// Stillness: idling under threat is punished per nearby meteor, idling in a
// nominally safe spot still costs a little.
const STILLNESS_THREAT_RADIUS: f64 = 6.0;
const STILLNESS_HEIGHT_BAND: f64 = 5.0;
const STILLNESS_THREAT_PENALTY: f64 = 50.0;
const STILLNESS_THREAT_CAP: usize = 5;
const STILLNESS_IDLE_PENALTY: f64 = 10.0;

const HOLE_PENALTY_PER_LEVEL: f64 = 20.0;
const BOUNDS_WEIGHT: f64 = 500.0;

/// Everything the scorer needs to evaluate one candidate direction.
///
/// Borrowed per plan; the same context scores all nine candidates, so one
/// prediction batch serves the whole selection pass.
pub struct ScoreContext<'a> {
    /// Agent position at the start of the candidate path.
    pub start: Vec3,
    pub meteors: &'a [PredictedHazard],
    /// Empty when enemy avoidance is disabled for this plan.
    pub enemies: &'a [PredictedHazard],
    pub holes: &'a [Hole],
    pub ai_level: i32,
    pub path_duration: f64,
    /// Gates the hole term; the other terms always apply.
    pub avoid_holes: bool,
    pub tuning: &'a Tuning,
}

impl ScoreContext<'_> {
    fn sample_position(&self, heading: Heading, t: f64) -> (f64, f64) {
        let speed = self.tuning.ground_speed;
        (
            self.start.x + heading.dx * speed * t,
            self.start.z + heading.dz * speed * t,
        )
    }
}

/// Scores one candidate direction. Higher is better; the scale is arbitrary
/// but consistent across candidates within one plan.
pub fn evaluate_path(direction: Direction, ctx: &ScoreContext<'_>) -> f64 {
    let heading = direction.heading();
    let mut score = 0.0;

    if !direction.is_stay() {
        score += MOVEMENT_BONUS;
    }

    for i in 0..=Tuning::PATH_SAMPLES {
        let t = (i as f64) / (Tuning::PATH_SAMPLES as f64) * ctx.path_duration;
        let (px, pz) = ctx.sample_position(heading, t);
        score += meteor_term(ctx, px, pz, t);
        score += enemy_sample_term(ctx, px, pz, t);
    }

    score += enemy_spacing_term(ctx, heading);

    let (end_x, end_z) = ctx.sample_position(heading, ctx.path_duration);
    score += bounds_term(ctx, end_x, end_z);

    let inner = ctx.tuning.world_half - Tuning::INNER_MARGIN;
    let clamped_x = end_x.clamp(-inner, inner);
    let clamped_z = end_z.clamp(-inner, inner);
    score += center_term(clamped_x, clamped_z);
    score += edge_term(ctx, clamped_x, clamped_z);

    if direction.is_stay() {
        score += stillness_term(ctx);
    }
    if ctx.avoid_holes {
        score += hole_term(ctx, heading);
    }

    score
}

/// Tiered meteor risk at one sample instant, plus a saturating reward for
/// clearance from the nearest threatening meteor.
fn meteor_term(ctx: &ScoreContext<'_>, px: f64, pz: f64, t: f64) -> f64 {
    let mut term = 0.0;
    let mut nearest = f64::INFINITY;

    for hazard in ctx.meteors {
        let position = hazard.position_at(t);
        let height_offset = (position.y - Tuning::PLAYER_HEIGHT).abs();
        if height_offset >= METEOR_HEIGHT_BAND {
            continue;
        }
        let height_factor = (1.0 - height_offset / METEOR_HEIGHT_FADE).max(0.0);

        let dx = position.x - px;
        let dz = position.z - pz;
        let distance = (dx * dx + dz * dz).sqrt();
        nearest = nearest.min(distance);

        if distance < METEOR_HIT_RADIUS {
            term -= METEOR_HIT_PENALTY * height_factor;
        } else if distance < METEOR_NEAR_RADIUS {
            term -= METEOR_NEAR_WEIGHT * height_factor / distance.max(0.5);
        } else if distance < METEOR_FAR_RADIUS {
            term -= METEOR_FAR_WEIGHT * height_factor / distance;
        }
    }

    if nearest.is_finite() {
        term += (nearest * METEOR_CLEARANCE_BONUS).min(METEOR_CLEARANCE_CAP);
    }
    term
}

/// Tiered enemy proximity risk at one sample instant.
fn enemy_sample_term(ctx: &ScoreContext<'_>, px: f64, pz: f64, t: f64) -> f64 {
    let mut term = 0.0;
    for hazard in ctx.enemies {
        let position = hazard.position_at(t);
        let dx = position.x - px;
        let dz = position.z - pz;
        let distance = (dx * dx + dz * dz).sqrt();

        if distance < ENEMY_HIT_RADIUS {
            term -= ENEMY_HIT_PENALTY;
        } else if distance < ENEMY_NEAR_RADIUS {
            term -= ENEMY_NEAR_WEIGHT / distance.max(0.5);
        } else if distance < ENEMY_MID_RADIUS {
            term -= ENEMY_MID_WEIGHT / distance;
        } else if distance < ENEMY_FAR_RADIUS {
            term -= ENEMY_FAR_WEIGHT / distance;
        }
    }
    term
}

/// Two-tier spacing term against the closest enemy.
///
/// Below the safety floor the shortfall is punished and any further approach
/// punished harder than retreat is rewarded; above the floor the excess earns
/// a capped bonus and widening an already-safe gap earns a little more.
fn enemy_spacing_term(ctx: &ScoreContext<'_>, heading: Heading) -> f64 {
    if ctx.enemies.is_empty() {
        return 0.0;
    }

    let start_min = ctx
        .enemies
        .iter()
        .map(|hazard| hazard.position.horizontal_distance(ctx.start))
        .fold(f64::INFINITY, f64::min);

    let (end_x, end_z) = ctx.sample_position(heading, ctx.path_duration);
    let end_min = ctx
        .enemies
        .iter()
        .map(|hazard| {
            let position = hazard.position_at(ctx.path_duration);
            let dx = position.x - end_x;
            let dz = position.z - end_z;
            (dx * dx + dz * dz).sqrt()
        })
        .fold(f64::INFINITY, f64::min);

    let floor = ctx.tuning.min_enemy_distance;
    let delta = end_min - start_min;
    let mut term = 0.0;

    if start_min < floor {
        term -= SPACING_SHORTFALL_PENALTY * (floor - start_min);
        if delta > 0.0 {
            term += SPACING_GAIN_BONUS * delta;
        } else if delta < 0.0 {
            term -= SPACING_LOSS_PENALTY * (-delta);
        }
    } else {
        let excess = start_min - floor;
        term += SPACING_EXCESS_BONUS * excess.min(SPACING_EXCESS_CAP);
        if excess > SPACING_COMFORT_THRESHOLD {
            term += SPACING_COMFORT_BONUS;
        }
        term += SPACING_WIDEN_BONUS * delta.max(0.0).min(SPACING_WIDEN_CAP);
    }
    term
}

/// Mild pull toward the arena centre, evaluated at the clamped end position.
fn center_term(end_x: f64, end_z: f64) -> f64 {
    -CENTER_WEIGHT * (end_x * end_x + end_z * end_z).sqrt()
}

/// Penalty for ending a path close to a wall.
fn edge_term(ctx: &ScoreContext<'_>, end_x: f64, end_z: f64) -> f64 {
    let world_half = ctx.tuning.world_half;
    let clearance = (world_half - end_x.abs()).min(world_half - end_z.abs());
    if clearance < EDGE_CLEARANCE_THRESHOLD {
        -EDGE_WEIGHT * (EDGE_CLEARANCE_THRESHOLD - clearance)
    } else {
        0.0
    }
}

/// Penalty applied only to the zero direction. Idling under falling threats
/// is punished per nearby meteor; idling in the clear still costs a token
/// amount so the agent keeps drifting.
fn stillness_term(ctx: &ScoreContext<'_>) -> f64 {
    let threats = ctx
        .meteors
        .iter()
        .filter(|hazard| {
            hazard.position.horizontal_distance(ctx.start) < STILLNESS_THREAT_RADIUS
                && (hazard.position.y - Tuning::PLAYER_HEIGHT).abs() < STILLNESS_HEIGHT_BAND
        })
        .count();

    if threats > 0 {
        -STILLNESS_THREAT_PENALTY * threats.min(STILLNESS_THREAT_CAP) as f64
    } else {
        -STILLNESS_IDLE_PENALTY
    }
}

/// Flat penalty, scaled by difficulty, if the path ever crosses a hole.
fn hole_term(ctx: &ScoreContext<'_>, heading: Heading) -> f64 {
    if ctx.holes.is_empty() {
        return 0.0;
    }
    for i in 0..=Tuning::HOLE_SAMPLES {
        let t = (i as f64) / (Tuning::HOLE_SAMPLES as f64) * ctx.path_duration;
        let (px, pz) = ctx.sample_position(heading, t);
        if ctx.holes.iter().any(|hole| hole.contains(px, pz)) {
            return -HOLE_PENALTY_PER_LEVEL * f64::from(ctx.ai_level);
        }
    }
    0.0
}

/// Steep rejection of paths whose unclamped end position leaves the legal
/// arena, applied before the end position is clamped for the shaping terms.
fn bounds_term(ctx: &ScoreContext<'_>, end_x: f64, end_z: f64) -> f64 {
    let inner = ctx.tuning.world_half - Tuning::INNER_MARGIN;
    let mut term = 0.0;
    for coordinate in [end_x, end_z] {
        let overshoot = coordinate.abs() - inner;
        if overshoot > 0.0 {
            term -= BOUNDS_WEIGHT * overshoot;
        }
    }
    term
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::PredictedHazard;

    fn context<'a>(
        tuning: &'a Tuning,
        meteors: &'a [PredictedHazard],
        enemies: &'a [PredictedHazard],
        holes: &'a [Hole],
    ) -> ScoreContext<'a> {
        ScoreContext {
            start: Vec3::new(0.0, 1.0, 0.0),
            meteors,
            enemies,
            holes,
            ai_level: 10,
            path_duration: 0.3,
            avoid_holes: true,
            tuning,
        }
    }

    fn stationary(x: f64, y: f64, z: f64) -> PredictedHazard {
        PredictedHazard {
            position: Vec3::new(x, y, z),
            velocity: Vec3::ORIGIN,
            prediction_time: 1.0,
        }
    }

    #[test]
    fn staying_in_an_empty_arena_costs_the_idle_penalty() {
        let tuning = Tuning::default();
        let ctx = context(&tuning, &[], &[], &[]);
        let score = evaluate_path(Direction::Stay, &ctx);
        assert!((score - (-10.0)).abs() < 1e-9);
    }

    #[test]
    fn moving_beats_staying_in_an_empty_arena() {
        let tuning = Tuning::default();
        let ctx = context(&tuning, &[], &[], &[]);
        let stay = evaluate_path(Direction::Stay, &ctx);
        for direction in &Direction::CATALOG[1..] {
            assert!(evaluate_path(*direction, &ctx) > stay, "{direction} lost to stay");
        }
    }

    #[test]
    fn meteor_on_the_agent_fires_the_hit_penalty_for_every_direction() {
        let tuning = Tuning::default();
        let meteors = [stationary(0.0, 1.0, 0.0)];
        let ctx = context(&tuning, &meteors, &[], &[]);
        let stay = evaluate_path(Direction::Stay, &ctx);
        // Stay sits in the hit radius at all nine samples.
        assert!(stay < -9.0 * METEOR_HIT_PENALTY + 9.0 * METEOR_CLEARANCE_CAP);
        for direction in &Direction::CATALOG[1..] {
            assert!(evaluate_path(*direction, &ctx) > stay);
        }
    }

    #[test]
    fn meteors_above_the_band_are_ignored() {
        let tuning = Tuning::default();
        let meteors = [stationary(0.0, 20.0, 0.0)];
        let ctx = context(&tuning, &meteors, &[], &[]);
        let with_high_meteor = evaluate_path(Direction::Left, &ctx);
        let empty_ctx = context(&tuning, &[], &[], &[]);
        let without = evaluate_path(Direction::Left, &empty_ctx);
        assert!((with_high_meteor - without).abs() < 1e-9);
    }

    #[test]
    fn hole_toggle_changes_stay_score_by_exactly_the_level_penalty() {
        let tuning = Tuning::default();
        let holes = [Hole::new(0.0, 0.0, 2.0)];
        for level in [1, 4, 10] {
            let meteors: [PredictedHazard; 0] = [];
            let mut ctx = context(&tuning, &meteors, &[], &holes);
            ctx.ai_level = level;
            let avoiding = evaluate_path(Direction::Stay, &ctx);
            ctx.avoid_holes = false;
            let ignoring = evaluate_path(Direction::Stay, &ctx);
            let difference = ignoring - avoiding;
            assert!(
                (difference - HOLE_PENALTY_PER_LEVEL * f64::from(level)).abs() < 1e-9,
                "level {level}: difference {difference}"
            );
        }
    }

    #[test]
    fn paths_crossing_a_hole_mid_flight_are_penalised_once() {
        let tuning = Tuning::default();
        // Left path covers x in [0, -3.6]; hole sits squarely on it.
        let holes = [Hole::new(-2.0, 0.0, 0.5)];
        let ctx = context(&tuning, &[], &[], &holes);
        let left = evaluate_path(Direction::Left, &ctx);
        let right = evaluate_path(Direction::Right, &ctx);
        assert!((right - left - HOLE_PENALTY_PER_LEVEL * 10.0).abs() < 1e-9);
    }

    #[test]
    fn fleeing_an_unsafe_enemy_beats_approaching_it() {
        let tuning = Tuning::default();
        let enemies = [stationary(3.0, 1.0, 0.0)];
        let ctx = context(&tuning, &[], &enemies, &[]);
        let flee = evaluate_path(Direction::Left, &ctx);
        let approach = evaluate_path(Direction::Right, &ctx);
        assert!(flee > approach);
    }

    #[test]
    fn widening_an_already_safe_gap_beats_narrowing_it() {
        let tuning = Tuning::default();
        // Exactly on the safety floor: the above-floor branch applies.
        let enemies = [stationary(5.0, 1.0, 0.0)];
        let ctx = context(&tuning, &[], &enemies, &[]);
        let widen = evaluate_path(Direction::Left, &ctx);
        let narrow = evaluate_path(Direction::Right, &ctx);
        assert!(widen > narrow);
    }

    #[test]
    fn leaving_the_arena_is_rejected_steeply() {
        let tuning = Tuning::default();
        let ctx = ScoreContext {
            start: Vec3::new(7.5, 1.0, 0.0),
            meteors: &[],
            enemies: &[],
            holes: &[],
            ai_level: 10,
            path_duration: 0.3,
            avoid_holes: true,
            tuning: &tuning,
        };
        // Right ends at x = 11.1, overshooting the inner boundary by 3.1.
        let outward = evaluate_path(Direction::Right, &ctx);
        let inward = evaluate_path(Direction::Left, &ctx);
        assert!(inward > outward);
        assert!(outward < -1000.0);
    }

    #[test]
    fn enemy_risk_tiers_escalate_with_proximity() {
        let tuning = Tuning::default();
        let far = [stationary(7.0, 1.0, 0.0)];
        let mid = [stationary(5.0, 1.0, 0.0)];
        let near = [stationary(3.0, 1.0, 0.0)];
        let hugging = [stationary(1.0, 1.0, 0.0)];

        let mut previous = f64::INFINITY;
        for enemies in [&far[..], &mid[..], &near[..], &hugging[..]] {
            let ctx = context(&tuning, &[], enemies, &[]);
            let score = evaluate_path(Direction::Stay, &ctx);
            assert!(score < previous, "closer enemy should score lower");
            previous = score;
        }
    }
}
