//! Whole-tick scenarios spanning decision, physics, goals and camera.

use std::f32::consts::FRAC_PI_4;

use glam::Vec2;
use leash::Status;

use super::helpers::{lone_dog_config, squadron_config, ScriptedRandom};
use crate::actor::Actor;
use crate::config::{FlightConfig, GoalConfig, GroundConfig, SteeringConfig};
use crate::entity::{Activity, EntityId};
use crate::goal::{Goal, SpawnRegion};
use crate::physics::{FlightBody, FlightModel, FIXED_DT};
use crate::scene::Scene;
use crate::world::World;

// =============================================================================
// Goal collection
// =============================================================================

#[test]
fn controller_tick_collects_goal_at_forty_units() {
    let mut dog = Actor::dog(
        EntityId::new(1),
        "harley",
        Vec2::new(500.0, 960.0),
        SteeringConfig::default(),
        GroundConfig::default(),
    )
    .unwrap();
    dog.state_mut().grounded = true;
    // Sniff keeps the dog in place for the tick.
    let mut rng = ScriptedRandom::new().indices([3]).durations([100]);
    let goal = Goal::new(Vec2::new(500.0, 920.0), &GoalConfig::default()).unwrap();
    let mut world = World::with_goals(vec![goal]);

    dog.advance(&mut world, FIXED_DT, &mut rng);

    let goal = &world.goals[0];
    assert!(goal.is_collected());
    assert!(goal.respawn_timer() > 0);
    assert_eq!(goal.last_collector(), Some(EntityId::new(1)));
    assert_eq!(dog.state().score, 1);
}

#[test]
fn collected_goal_waits_for_respawn() {
    let config = GoalConfig {
        respawn_ticks: 5,
        spawn_region: SpawnRegion::point(Vec2::new(1000.0, 960.0)),
        ..GoalConfig::default()
    };
    let mut scene = Scene::from_config(&lone_dog_config(1000.0)).unwrap();
    scene.add_goal(Goal::new(Vec2::new(1000.0, 960.0), &config).unwrap());
    if let Some(dog) = scene.actor_mut(EntityId::new(1)) {
        dog.replace_brain(crate::actor::Brain::Manual);
    }

    scene.step(FIXED_DT);
    assert_eq!(scene.total_score(), 1);

    // Standing on the spot: no second pickup until the countdown ends.
    for _ in 0..3 {
        scene.step(FIXED_DT);
        assert_eq!(scene.total_score(), 1);
        assert!(scene.goals()[0].is_collected());
    }

    scene.step(FIXED_DT);
    assert!(scene.goals()[0].is_active());
    scene.step(FIXED_DT);
    assert_eq!(scene.total_score(), 2);
}

// =============================================================================
// Flight
// =============================================================================

#[test]
fn zero_speed_step_adds_exactly_gravity() {
    let model = FlightModel::new(FlightConfig::default()).unwrap();
    let mut body = FlightBody::new(0.0);

    model.integrate(&mut body);

    assert_eq!(body.velocity.y, model.config().gravity);
}

#[test]
fn stall_threshold_on_both_sides() {
    let model = FlightModel::new(FlightConfig::default()).unwrap();

    let mut slow = FlightBody::new(FRAC_PI_4 + 0.1);
    slow.velocity = Vec2::new(1.5, 0.0);
    model.integrate(&mut slow);
    assert!(slow.stalled);

    let mut fast = FlightBody::new(FRAC_PI_4 + 0.1);
    fast.velocity = Vec2::new(6.0, 0.0);
    model.integrate(&mut fast);
    assert!(!fast.stalled);
}

#[test]
fn squadron_stays_together_under_speed_cap() {
    let mut scene = Scene::from_config(&squadron_config(11)).unwrap();
    let start = distance_between(&scene, 1, 2);

    for _ in 0..30 {
        scene.step(FIXED_DT);
    }

    let wingman = scene.actor(EntityId::new(2)).unwrap().snapshot();
    assert!(wingman.status.is_some());
    assert!(distance_between(&scene, 1, 2) < start + 200.0);
    assert!(wingman.velocity.length() <= 12.0 + 1e-3);
}

fn distance_between(scene: &Scene, a: u64, b: u64) -> f32 {
    let a = scene.actor(EntityId::new(a)).unwrap().position();
    let b = scene.actor(EntityId::new(b)).unwrap().position();
    a.distance(b)
}

// =============================================================================
// Whole scene
// =============================================================================

#[test]
fn default_park_runs_a_minute() {
    let mut scene = Scene::from_config(&crate::config::SceneConfig::default()).unwrap();

    for _ in 0..3600 {
        scene.step(FIXED_DT);
    }

    assert_eq!(scene.tick(), 3600);
    for snapshot in scene.snapshots() {
        assert!(snapshot.position.is_finite());
        assert!(snapshot.velocity.length() <= 16.0 + 1e-3);
        assert!(snapshot.position.x > 0.0 && snapshot.position.x < 1920.0);
        assert!(snapshot.position.y <= 960.0 + 1e-3);
    }
}

#[test]
fn dogs_crowd_apart() {
    let mut config = lone_dog_config(900.0);
    let mut second = config.dogs[0].clone();
    second.name = "shanti".to_owned();
    second.position.x = 950.0;
    config.dogs.push(second);
    let mut scene = Scene::from_config(&config).unwrap();

    scene.step(FIXED_DT);

    let snapshots = scene.snapshots();
    assert_eq!(snapshots[0].activity, Activity::SteerAway);
    assert_eq!(snapshots[1].activity, Activity::SteerAway);
    assert!(snapshots[0].velocity.x < 0.0);
    assert!(snapshots[1].velocity.x > 0.0);
}

#[test]
fn flyer_tree_reports_running_while_seeking() {
    let mut scene = Scene::from_config(&squadron_config(3)).unwrap();
    let goal = Goal::new(Vec2::new(900.0, 400.0), &GoalConfig::default()).unwrap();
    scene.add_goal(goal);

    scene.step(FIXED_DT);

    let leader = scene.actor(EntityId::new(1)).unwrap().snapshot();
    assert_eq!(leader.status, Some(Status::Running));
}

#[test]
fn scripted_floats_drive_spawn_position() {
    let region = SpawnRegion::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0));
    let mut rng = ScriptedRandom::new().floats([25.0, 75.0]);
    assert_eq!(region.sample(&mut rng), Vec2::new(25.0, 75.0));
}

#[test]
fn dogs_spawned_on_one_spot_both_steer_away() {
    let mut config = lone_dog_config(900.0);
    let mut twin = config.dogs[0].clone();
    twin.name = "shanti".to_owned();
    config.dogs.push(twin);
    let mut scene = Scene::from_config(&config).unwrap();

    scene.step(FIXED_DT);

    for actor in scene.actors() {
        assert_eq!(actor.state().activity, Activity::SteerAway, "{}", actor.state().name);
    }
}
