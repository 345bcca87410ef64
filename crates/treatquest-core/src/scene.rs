//! Scene driver: owns every actor, the world and the camera, and runs the
//! tick loop.
//!
//! One [`Scene::step`] is:
//!
//! 1. **SNAPSHOT**: rebuild the peer list from start-of-tick actor state
//! 2. **ADVANCE**: each actor, in id order, decides, integrates and collects
//! 3. **RESPAWN**: collected goals count down and reappear
//! 4. **CAMERA**: the camera follows its target's updated position
//! 5. **TICK**: the tick counter advances
//!
//! # Determinism
//!
//! All randomness is drawn from one `ChaCha8Rng` seeded at construction and
//! actors are advanced in ascending id order, so the same config and seed
//! always produce the same run.
//!
//! # Example
//!
//! ```
//! use treatquest_core::config::SceneConfig;
//! use treatquest_core::physics::FIXED_DT;
//! use treatquest_core::scene::Scene;
//!
//! let mut scene = Scene::from_config(&SceneConfig::default()).unwrap();
//! for _ in 0..10 {
//!     scene.step(FIXED_DT);
//! }
//! assert_eq!(scene.tick(), 10);
//! ```

use glam::Vec2;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::actor::Actor;
use crate::ai::default_tree;
use crate::camera::Camera;
use crate::config::{
    CameraConfig, FlightConfig, GoalConfig, GroundConfig, PilotConfig, SceneConfig, SteeringConfig,
};
use crate::entity::{ActorSnapshot, EntityId};
use crate::error::ConfigError;
use crate::goal::Goal;
use crate::random::seeded;
use crate::world::{Environment, Peer, World};

// =============================================================================
// Scene
// =============================================================================

/// A running simulation.
#[derive(Debug)]
pub struct Scene {
    actors: Vec<Actor>,
    world: World,
    camera: Option<Camera>,
    player: Option<EntityId>,
    rng: ChaCha8Rng,
    seed: u64,
    next_id: u64,
}

impl Scene {
    /// Empty scene with no camera.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            actors: Vec::new(),
            world: World::default(),
            camera: None,
            player: None,
            rng: seeded(seed),
            seed,
            next_id: 1,
        }
    }

    /// Build a populated scene.
    ///
    /// Dogs get ids first, then flyers, both in config order. Goals are placed
    /// at random inside their spawn regions.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for any invalid tunable, a wingman index that
    /// does not name another flyer, or a player index past the last actor.
    pub fn from_config(config: &SceneConfig) -> Result<Self, ConfigError> {
        let mut scene = Self::new(config.seed);
        scene.world.environment = config.environment;

        for dog in &config.dogs {
            scene.spawn_dog(
                dog.name.clone(),
                dog.position,
                dog.steering.clone(),
                dog.ground.clone(),
            )?;
        }

        let first_flyer = scene.next_id;
        for (index, flyer) in config.flyers.iter().enumerate() {
            let leader = match flyer.wingman_of {
                Some(leader) if leader < config.flyers.len() && leader != index => {
                    Some(EntityId::new(first_flyer + leader as u64))
                }
                Some(leader) => {
                    return Err(ConfigError::UnknownWingman {
                        flyer: index,
                        index: leader,
                    })
                }
                None => None,
            };
            scene.spawn_flyer(
                flyer.name.clone(),
                flyer.position,
                flyer.heading,
                flyer.flight.clone(),
                &flyer.pilot,
                leader,
            )?;
        }

        for batch in &config.goals {
            for _ in 0..batch.count {
                scene.spawn_goal(&batch.config)?;
            }
        }

        if let Some(camera) = &config.camera {
            scene.attach_camera(camera.clone())?;
        }
        if let Some(index) = config.player {
            let count = scene.actors.len();
            let id = scene
                .actors
                .get(index)
                .map(Actor::id)
                .ok_or(ConfigError::UnknownPlayer { index, count })?;
            scene.switch_player(id);
            if let (Some(camera), Some(actor)) = (scene.camera.as_mut(), scene.actors.get(index)) {
                camera.snap_to(actor.position());
            }
        }

        debug!(
            seed = config.seed,
            actors = scene.actors.len(),
            goals = scene.world.goals.len(),
            "scene built"
        );
        Ok(scene)
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a steering-controlled ground actor.
    ///
    /// # Errors
    ///
    /// See [`Actor::dog`].
    pub fn spawn_dog(
        &mut self,
        name: impl Into<String>,
        position: Vec2,
        steering: SteeringConfig,
        ground: GroundConfig,
    ) -> Result<EntityId, ConfigError> {
        let actor = Actor::dog(EntityId::new(self.next_id), name, position, steering, ground)?;
        Ok(self.insert(actor))
    }

    /// Add a flyer running [`default_tree`], optionally flying wing on `leader`.
    ///
    /// # Errors
    ///
    /// See [`Actor::flyer`] and [`PilotConfig::validate`].
    pub fn spawn_flyer(
        &mut self,
        name: impl Into<String>,
        position: Vec2,
        heading: f32,
        flight: FlightConfig,
        pilot: &PilotConfig,
        leader: Option<EntityId>,
    ) -> Result<EntityId, ConfigError> {
        pilot.validate()?;
        let tree = default_tree(pilot, leader);
        let actor = Actor::flyer(
            EntityId::new(self.next_id),
            name,
            position,
            heading,
            flight,
            tree,
        )?;
        Ok(self.insert(actor))
    }

    /// Add a prebuilt actor under a fresh id, replacing whatever id it had.
    pub fn spawn(&mut self, mut actor: Actor) -> EntityId {
        actor.state_mut().id = EntityId::new(self.next_id);
        self.insert(actor)
    }

    fn insert(&mut self, actor: Actor) -> EntityId {
        let id = self.allocate_id();
        debug_assert_eq!(actor.id(), id);
        self.actors.push(actor);
        id
    }

    /// Place one goal at random inside its spawn region.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`GoalConfig::validate`].
    pub fn spawn_goal(&mut self, config: &GoalConfig) -> Result<usize, ConfigError> {
        let goal = Goal::spawn(config, &mut self.rng)?;
        Ok(self.add_goal(goal))
    }

    /// Add a goal; returns its index.
    pub fn add_goal(&mut self, goal: Goal) -> usize {
        self.world.goals.push(goal);
        self.world.goals.len() - 1
    }

    /// Install (or replace) the camera, keeping the current player bound.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`CameraConfig::validate`].
    pub fn attach_camera(&mut self, config: CameraConfig) -> Result<(), ConfigError> {
        let mut camera = Camera::new(config)?;
        if let Some(player) = self.player {
            camera.set_target(player);
        }
        self.camera = Some(camera);
        Ok(())
    }

    /// Make `id` the player and point the camera at it.
    ///
    /// Returns `false` (changing nothing) if no actor has that id.
    pub fn switch_player(&mut self, id: EntityId) -> bool {
        if self.actor(id).is_none() {
            return false;
        }
        self.player = Some(id);
        if let Some(camera) = self.camera.as_mut() {
            camera.set_target(id);
        }
        debug!(player = %id, "player switched");
        true
    }

    /// Advance one tick.
    pub fn step(&mut self, dt: f32) {
        // SNAPSHOT
        self.world.peers = self.actors.iter().map(|a| Peer::from(a.state())).collect();

        // ADVANCE
        for actor in &mut self.actors {
            actor.advance(&mut self.world, dt, &mut self.rng);
        }

        // RESPAWN
        for goal in &mut self.world.goals {
            if goal.tick_respawn(&mut self.rng) {
                trace!(position = ?goal.position(), "goal respawned");
            }
        }

        // CAMERA
        let actors = &self.actors;
        if let Some(camera) = self.camera.as_mut() {
            camera.update(dt, |id| {
                actors
                    .iter()
                    .find(|actor| actor.id() == id)
                    .map(Actor::position)
            });
        }

        // TICK
        self.world.tick += 1;
    }

    /// Ticks completed.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.world.tick
    }

    /// Seed the scene was built with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// All actors in id order.
    #[must_use]
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Look up an actor.
    #[must_use]
    pub fn actor(&self, id: EntityId) -> Option<&Actor> {
        self.actors.iter().find(|actor| actor.id() == id)
    }

    /// Look up an actor for modification (e.g. to steer the player).
    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|actor| actor.id() == id)
    }

    /// The current player, if any.
    #[must_use]
    pub fn player(&self) -> Option<EntityId> {
        self.player
    }

    /// World snapshot (goals, last peers, environment).
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Goals, active or not.
    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        &self.world.goals
    }

    /// Host-writable environmental flags.
    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.world.environment
    }

    /// The camera, if the scene has one.
    #[must_use]
    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    /// Read-only views of every actor, in id order.
    #[must_use]
    pub fn snapshots(&self) -> Vec<ActorSnapshot> {
        self.actors.iter().map(Actor::snapshot).collect()
    }

    /// Sum of all actor scores.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.actors
            .iter()
            .fold(0u32, |total, actor| total.saturating_add(actor.state().score))
    }
}

// =============================================================================
// Tests
// =============================================================================
