//! A controllable entity: state, a brain and a locomotion model.
//!
//! [`Actor::advance`] is the single per-tick entry point. It always runs in
//! the same order: the brain decides (writing velocity, state or intent),
//! then the locomotion model integrates, then any goals in reach are
//! collected.

use std::fmt;

use glam::Vec2;
use leash::{Behavior, Node};
use tracing::trace;

use crate::ai::SteeringController;
use crate::config::{FlightConfig, GroundConfig, SteeringConfig};
use crate::entity::{ActorSnapshot, ActorState, Activity, EntityId, Facing};
use crate::error::{ensure_within_max, ConfigError};
use crate::goal::collect_goals;
use crate::physics::{FlightBody, FlightModel, GroundModel};
use crate::random::RandomSource;
use crate::world::World;

/// What decides an actor's next move.
pub enum Brain {
    /// The timed steering state machine
    Steering(SteeringController),
    /// A behavior tree evaluated from the root every tick
    Tree(Node<ActorState, World>),
    /// Host-written intent only (the player)
    Manual,
}

impl fmt::Debug for Brain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Steering(controller) => f.debug_tuple("Steering").field(controller).finish(),
            Self::Tree(_) => f.write_str("Tree(..)"),
            Self::Manual => f.write_str("Manual"),
        }
    }
}

/// How an actor moves once it has decided.
#[derive(Debug, Clone)]
pub enum Locomotion {
    /// Walking, jumping or floating
    Ground(GroundModel),
    /// Aerodynamic flight
    Flight {
        /// Coefficients
        model: FlightModel,
        /// Heading, stall and bank state
        body: FlightBody,
    },
}

/// One simulated entity.
#[derive(Debug)]
pub struct Actor {
    state: ActorState,
    brain: Brain,
    locomotion: Locomotion,
}

impl Actor {
    /// Assemble an actor from parts.
    #[must_use]
    pub fn new(state: ActorState, brain: Brain, locomotion: Locomotion) -> Self {
        Self {
            state,
            brain,
            locomotion,
        }
    }

    /// A steering-controlled ground actor.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either config is invalid or if the run
    /// speed or jump impulse exceeds the ground max speed.
    pub fn dog(
        id: EntityId,
        name: impl Into<String>,
        position: Vec2,
        steering: SteeringConfig,
        ground: GroundConfig,
    ) -> Result<Self, ConfigError> {
        ensure_within_max("steering.speed", steering.speed, ground.max_speed)?;
        ensure_within_max("steering.jump_impulse", steering.jump_impulse, ground.max_speed)?;
        let brain = Brain::Steering(SteeringController::new(steering)?);
        let locomotion = Locomotion::Ground(GroundModel::new(ground)?);
        Ok(Self::new(
            ActorState::new(id, name, position),
            brain,
            locomotion,
        ))
    }

    /// A tree-controlled flyer.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`FlightConfig::validate`].
    pub fn flyer(
        id: EntityId,
        name: impl Into<String>,
        position: Vec2,
        heading: f32,
        flight: FlightConfig,
        tree: Node<ActorState, World>,
    ) -> Result<Self, ConfigError> {
        let model = FlightModel::new(flight)?;
        let body = FlightBody::new(heading);
        let mut state = ActorState::new(id, name, position);
        if body.heading.cos() < 0.0 {
            state.facing = Facing::Left;
        }
        Ok(Self::new(
            state,
            Brain::Tree(tree),
            Locomotion::Flight { model, body },
        ))
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> EntityId {
        self.state.id
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.state.position
    }

    /// Full state record.
    #[must_use]
    pub fn state(&self) -> &ActorState {
        &self.state
    }

    /// Mutable state record, for hosts placing or nudging actors.
    pub fn state_mut(&mut self) -> &mut ActorState {
        &mut self.state
    }

    /// The brain in charge.
    #[must_use]
    pub fn brain(&self) -> &Brain {
        &self.brain
    }

    /// Swap the brain, returning the old one.
    pub fn replace_brain(&mut self, brain: Brain) -> Brain {
        self.state.intent = None;
        std::mem::replace(&mut self.brain, brain)
    }

    /// Desired velocity for a [`Brain::Manual`] actor.
    pub fn set_intent(&mut self, intent: Option<Vec2>) {
        self.state.intent = intent;
    }

    /// How this actor moves.
    #[must_use]
    pub fn locomotion(&self) -> &Locomotion {
        &self.locomotion
    }

    /// Flight state, for flyers.
    #[must_use]
    pub fn flight_body(&self) -> Option<&FlightBody> {
        match &self.locomotion {
            Locomotion::Flight { body, .. } => Some(body),
            Locomotion::Ground(_) => None,
        }
    }

    /// Mutable flight state, for flyers.
    pub fn flight_body_mut(&mut self) -> Option<&mut FlightBody> {
        match &mut self.locomotion {
            Locomotion::Flight { body, .. } => Some(body),
            Locomotion::Ground(_) => None,
        }
    }

    /// Read-only view for renderers.
    #[must_use]
    pub fn snapshot(&self) -> ActorSnapshot {
        let state = &self.state;
        let body = self.flight_body();
        ActorSnapshot {
            id: state.id,
            name: state.name.clone(),
            position: state.position,
            velocity: state.velocity,
            facing: state.facing,
            heading: body.map(|b| b.heading),
            activity: state.activity,
            status: state.last_status,
            stalled: body.is_some_and(|b| b.stalled),
            bank_angle: body.map_or(0.0, |b| b.bank_angle),
            grounded: state.grounded,
            score: state.score,
        }
    }

    /// Decide, integrate, collect. Returns the points collected this tick.
    pub fn advance(&mut self, world: &mut World, dt: f32, rng: &mut dyn RandomSource) -> u32 {
        self.decide(world, rng);
        self.integrate(dt);
        collect_goals(&mut self.state, &mut world.goals)
    }

    fn decide(&mut self, world: &World, rng: &mut dyn RandomSource) {
        let state = &mut self.state;
        match &mut self.brain {
            Brain::Steering(controller) => controller.decide(state, world, rng),
            Brain::Tree(tree) => {
                state.intent = None;
                state.activity = Activity::Idle;
                let status = tree.execute(state, world);
                trace!(actor = %state.id, ?status, "tree evaluated");
                state.last_status = Some(status);
            }
            Brain::Manual => {}
        }
    }

    fn integrate(&mut self, dt: f32) {
        let state = &mut self.state;
        match &mut self.locomotion {
            Locomotion::Ground(model) => {
                model.apply_intent(state);
                model.integrate(state);
            }
            Locomotion::Flight { model, body } => {
                match state.intent {
                    Some(intent) => model.steer_towards(body, intent, dt),
                    None => model.apply_thrust(body, model.config().cruise_thrust),
                }
                model.integrate(body);
                state.velocity = body.velocity;
                state.position += body.velocity;
                state.grounded = false;
                if let Some(facing) = Facing::from_dx(body.velocity.x) {
                    state.facing = facing;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::default_tree;
    use crate::config::{GoalConfig, PilotConfig};
    use crate::goal::Goal;
    use crate::random::seeded;
    use crate::tests::ScriptedRandom;
    use leash::Status;

    mod construction_tests {
        use super::*;

        #[test]
        fn dog_speed_above_max_rejected() {
            let result = Actor::dog(
                EntityId::new(1),
                "harley",
                Vec2::ZERO,
                SteeringConfig::with_speed(20.0),
                GroundConfig::default(),
            );
            assert!(matches!(
                result,
                Err(ConfigError::ExceedsMaxSpeed {
                    field: "steering.speed",
                    ..
                })
            ));
        }

        #[test]
        fn jump_impulse_above_max_rejected() {
            let result = Actor::dog(
                EntityId::new(1),
                "harley",
                Vec2::ZERO,
                SteeringConfig {
                    jump_impulse: 30.0,
                    ..SteeringConfig::default()
                },
                GroundConfig::default(),
            );
            assert!(result.is_err());
        }

        #[test]
        fn flyer_rejects_bad_flight_config() {
            let result = Actor::flyer(
                EntityId::new(1),
                "camel",
                Vec2::ZERO,
                0.0,
                FlightConfig {
                    max_speed: -1.0,
                    ..FlightConfig::default()
                },
                default_tree(&PilotConfig::default(), None),
            );
            assert!(result.is_err());
        }
    }

    mod advance_tests {
        use super::*;

        #[test]
        fn dog_collects_goal_in_one_tick() {
            let mut dog = Actor::dog(
                EntityId::new(1),
                "harley",
                Vec2::new(500.0, 960.0),
                SteeringConfig::default(),
                GroundConfig::default(),
            )
            .unwrap();
            dog.state_mut().activity = Activity::Sniff;
            dog.state_mut().activity_timer = 100;
            dog.state_mut().grounded = true;
            let goal = Goal::new(Vec2::new(540.0, 960.0), &GoalConfig::default()).unwrap();
            let mut world = World::with_goals(vec![goal]);
            let mut rng = ScriptedRandom::new();

            let earned = dog.advance(&mut world, crate::physics::FIXED_DT, &mut rng);

            assert_eq!(earned, 1);
            assert_eq!(dog.state().score, 1);
            assert!(world.goals[0].is_collected());
            assert!(world.goals[0].respawn_timer() > 0);
            assert_eq!(world.goals[0].last_collector(), Some(EntityId::new(1)));
        }

        #[test]
        fn tree_status_is_recorded() {
            let mut flyer = Actor::flyer(
                EntityId::new(3),
                "camel",
                Vec2::new(100.0, 300.0),
                0.0,
                FlightConfig::default(),
                default_tree(&PilotConfig::default(), None),
            )
            .unwrap();
            let goal = Goal::new(Vec2::new(400.0, 300.0), &GoalConfig::default()).unwrap();
            let mut world = World::with_goals(vec![goal]);

            flyer.advance(&mut world, crate::physics::FIXED_DT, &mut seeded(0));

            let snapshot = flyer.snapshot();
            assert_eq!(snapshot.status, Some(Status::Running));
            assert_eq!(snapshot.activity, Activity::Run);
            assert!(snapshot.heading.is_some());
            assert!(snapshot.velocity.x > 0.0);
        }

        #[test]
        fn manual_brain_follows_intent() {
            let mut dog = Actor::dog(
                EntityId::new(1),
                "harley",
                Vec2::new(500.0, 960.0),
                SteeringConfig::default(),
                GroundConfig::default(),
            )
            .unwrap();
            dog.replace_brain(Brain::Manual);
            dog.set_intent(Some(Vec2::new(-4.0, 0.0)));
            let mut world = World::default();

            dog.advance(&mut world, crate::physics::FIXED_DT, &mut seeded(0));

            assert!((dog.position().x - 496.0).abs() < 1e-4);
            assert_eq!(dog.state().facing, Facing::Left);
        }

        #[test]
        fn flyer_without_intent_keeps_engine_running() {
            let mut flyer = Actor::flyer(
                EntityId::new(3),
                "camel",
                Vec2::new(100.0, 300.0),
                0.0,
                FlightConfig::default(),
                default_tree(&PilotConfig::default(), None),
            )
            .unwrap();
            let mut world = World::default();

            flyer.advance(&mut world, crate::physics::FIXED_DT, &mut seeded(0));

            let body = flyer.flight_body().unwrap();
            assert!((body.thrust - 0.2).abs() < f32::EPSILON);
            assert_eq!(flyer.snapshot().status, Some(Status::Failure));
        }
    }

    #[test]
    fn ground_actor_snapshot_has_no_flight_fields() {
        let dog = Actor::dog(
            EntityId::new(1),
            "harley",
            Vec2::ZERO,
            SteeringConfig::default(),
            GroundConfig::default(),
        )
        .unwrap();
        let snapshot = dog.snapshot();
        assert_eq!(snapshot.heading, None);
        assert!(!snapshot.stalled);
        assert_eq!(snapshot.status, None);
    }
}
