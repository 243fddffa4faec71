//! End-to-end decision scenarios: hazards, toggles, and report contents.

use std::sync::{Arc, Mutex};

use autopilot::{
    ArenaSnapshot, Autopilot, Direction, Enemy, Hole, Meteor, PlanObserver, PlanReport, Vec3,
};

#[derive(Clone, Default)]
struct RecordingObserver {
    reports: Arc<Mutex<Vec<PlanReport>>>,
}

impl PlanObserver for RecordingObserver {
    fn plan_committed(&mut self, report: &PlanReport) {
        self.reports.lock().unwrap().push(report.clone());
    }
}

fn pilot_with_recorder() -> (Autopilot, Arc<Mutex<Vec<PlanReport>>>) {
    let recorder = RecordingObserver::default();
    let reports = Arc::clone(&recorder.reports);
    let mut pilot = Autopilot::new();
    pilot.set_observer(Box::new(recorder));
    (pilot, reports)
}

fn candidate_score(report: &PlanReport, direction: Direction) -> f64 {
    report
        .candidates
        .iter()
        .find(|candidate| candidate.direction == direction)
        .expect("candidate missing from report")
        .score
}

#[test]
fn level_ten_in_an_empty_arena_moves_with_minimum_commitment() {
    let (mut pilot, reports) = pilot_with_recorder();
    let snapshot = ArenaSnapshot::new(Vec3::new(0.0, 1.0, 0.0), &[], 10);

    let heading = pilot.suggest_move(&snapshot, 0.0);
    assert!(!heading.is_zero());

    let reports = reports.lock().unwrap();
    let report = &reports[0];
    assert!((report.params.path_duration - 0.3).abs() < 1e-9);
    assert!((report.params.lookahead_percent - 0.9).abs() < 1e-9);
    assert_eq!(report.params.wait_time, 0.0);
    assert_eq!(report.candidates.len(), 9);
    assert_eq!(report.candidates[0].direction, Direction::Stay);
    assert!((candidate_score(report, Direction::Stay) - (-10.0)).abs() < 1e-9);
}

#[test]
fn meteor_parked_on_the_agent_forces_an_escape() {
    let (mut pilot, reports) = pilot_with_recorder();
    let meteors = [Meteor::new(Vec3::new(0.0, 1.0, 0.0)).with_velocity(Vec3::ORIGIN)];
    let snapshot = ArenaSnapshot::new(Vec3::new(0.0, 1.0, 0.0), &meteors, 10);

    let heading = pilot.suggest_move(&snapshot, 0.0);
    assert!(!heading.is_zero());

    let reports = reports.lock().unwrap();
    let report = &reports[0];
    assert_ne!(report.chosen.direction, Direction::Stay);
    // Every candidate starts under the meteor, so every score shows the hit.
    for candidate in &report.candidates {
        assert!(candidate.score < -500.0);
    }
}

#[test]
fn enemy_avoidance_toggle_gates_the_enemy_terms() {
    let enemies = [Enemy::new(Vec3::new(3.0, 1.0, 0.0))];
    let position = Vec3::new(0.0, 1.0, 0.0);

    let (mut avoiding, avoiding_reports) = pilot_with_recorder();
    avoiding.set_thinking_time(false);
    let snapshot = ArenaSnapshot::new(position, &[], 10).with_enemies(&enemies);
    let heading = avoiding.suggest_move(&snapshot, 0.0);
    // Enemy sits at +x; the chosen path must not move toward it.
    assert!(heading.dx < 0.0);

    let (mut oblivious, oblivious_reports) = pilot_with_recorder();
    oblivious.set_thinking_time(false);
    oblivious.set_enemy_avoidance(false);
    oblivious.suggest_move(&snapshot, 0.0);

    let avoiding_reports = avoiding_reports.lock().unwrap();
    let oblivious_reports = oblivious_reports.lock().unwrap();
    let stay_with = candidate_score(&avoiding_reports[0], Direction::Stay);
    let stay_without = candidate_score(&oblivious_reports[0], Direction::Stay);
    assert!(stay_with < -500.0);
    assert!((stay_without - (-10.0)).abs() < 1e-9);
}

#[test]
fn hole_avoidance_toggle_shifts_stay_by_exactly_the_level_penalty() {
    let holes = [Hole::new(0.0, 0.0, 2.0)];
    let position = Vec3::new(0.0, 1.0, 0.0);
    let ai_level = 5;

    let (mut avoiding, avoiding_reports) = pilot_with_recorder();
    let snapshot = ArenaSnapshot::new(position, &[], ai_level).with_holes(&holes);
    avoiding.suggest_move(&snapshot, 0.0);

    let (mut oblivious, oblivious_reports) = pilot_with_recorder();
    oblivious.set_hole_avoidance(false);
    oblivious.suggest_move(&snapshot, 0.0);

    let avoiding_reports = avoiding_reports.lock().unwrap();
    let oblivious_reports = oblivious_reports.lock().unwrap();
    let penalised = candidate_score(&avoiding_reports[0], Direction::Stay);
    let unpenalised = candidate_score(&oblivious_reports[0], Direction::Stay);
    assert!((unpenalised - penalised - 20.0 * f64::from(ai_level)).abs() < 1e-9);
}

#[test]
fn score_ramp_speeds_up_predicted_meteors() {
    // A meteor high above the agent is harmless at score 0 but drops into
    // the threat band within the lookahead window once the score has pushed
    // the assumed fall speed up.
    let meteors = [Meteor::new(Vec3::new(0.0, 9.0, 0.0))];
    let position = Vec3::new(0.0, 1.0, 0.0);

    let (mut calm, calm_reports) = pilot_with_recorder();
    let slow = ArenaSnapshot::new(position, &meteors, 10);
    calm.suggest_move(&slow, 0.0);

    let (mut frantic, frantic_reports) = pilot_with_recorder();
    let fast = ArenaSnapshot::new(position, &meteors, 10).with_score(200.0);
    frantic.suggest_move(&fast, 0.0);

    let calm_reports = calm_reports.lock().unwrap();
    let frantic_reports = frantic_reports.lock().unwrap();
    let stay_calm = candidate_score(&calm_reports[0], Direction::Stay);
    let stay_frantic = candidate_score(&frantic_reports[0], Direction::Stay);
    assert!(stay_frantic < stay_calm);
}
