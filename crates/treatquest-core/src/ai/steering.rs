//! Timed, randomized decision controller for ground actors.
//!
//! Each tick, in order:
//!
//! 1. count the state timer down
//! 2. sleep if configured to and it is night (nothing else runs)
//! 3. steer away from a crowding peer (skips steps 4 and 5)
//! 4. re-roll the state once the timer hits zero
//! 5. while running, turn toward the nearest goal in range and maybe jump
//!    for one that sits overhead
//! 6. push back inward if outside the play area
//!
//! All randomness comes from the [`RandomSource`] passed in, so a scripted
//! source pins down every transition.

use tracing::{debug, trace};

use crate::config::SteeringConfig;
use crate::entity::{ActorState, Activity, Facing};
use crate::error::ConfigError;
use crate::random::RandomSource;
use crate::world::World;

/// Per-actor steering controller.
#[derive(Debug, Clone, PartialEq)]
pub struct SteeringController {
    config: SteeringConfig,
}

impl SteeringController {
    /// Build from a validated config.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`SteeringConfig::validate`].
    pub fn new(config: SteeringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The tunables in use.
    #[must_use]
    pub fn config(&self) -> &SteeringConfig {
        &self.config
    }

    /// Run one decision tick for `actor`.
    pub fn decide(&self, actor: &mut ActorState, world: &World, rng: &mut dyn RandomSource) {
        actor.activity_timer = actor.activity_timer.saturating_sub(1);

        if self.config.sleep_at_night {
            if world.environment.night {
                if actor.activity != Activity::Sleep {
                    debug!(actor = %actor.id, "falling asleep");
                }
                actor.activity = Activity::Sleep;
                actor.velocity.x = 0.0;
                return;
            }
            if actor.activity == Activity::Sleep {
                actor.activity_timer = 0;
            }
        }

        if self.avoid_crowding(actor, world) {
            self.clamp_to_play_area(actor);
            return;
        }
        if actor.activity == Activity::SteerAway {
            actor.activity_timer = 0;
        }

        if actor.activity_timer == 0 {
            self.reroll(actor, rng);
        }

        if actor.activity == Activity::Run {
            self.attract_to_goal(actor, world, rng);
        }

        self.clamp_to_play_area(actor);
    }

    /// Draw a new state and duration, then enter it.
    ///
    /// Draw order: table index, duration, then (for `run`) a coin for facing.
    fn reroll(&self, actor: &mut ActorState, rng: &mut dyn RandomSource) {
        let table = &Activity::REROLL_TABLE;
        let next = table[rng.index(table.len()).min(table.len() - 1)];
        let duration = rng.range_u32(self.config.min_duration, self.config.max_duration);
        actor.activity_timer = duration;

        actor.activity = match next {
            Activity::Run => {
                actor.facing = if rng.coin() { Facing::Right } else { Facing::Left };
                actor.velocity.x = actor.facing.sign() * self.config.speed;
                Activity::Run
            }
            Activity::Jump if actor.grounded => {
                self.jump(actor);
                Activity::Jump
            }
            // An airborne actor cannot jump again; it coasts instead.
            Activity::Jump => Activity::Idle,
            Activity::Sniff => {
                actor.velocity.x = 0.0;
                Activity::Sniff
            }
            other => other,
        };
        debug!(actor = %actor.id, activity = %actor.activity, duration, "state re-rolled");
    }

    fn jump(&self, actor: &mut ActorState) {
        actor.velocity.y = -self.config.jump_impulse;
        actor.grounded = false;
    }

    /// Returns `true` when a peer was close enough to steer away from.
    fn avoid_crowding(&self, actor: &mut ActorState, world: &World) -> bool {
        let Some(radius) = self.config.crowding_radius else {
            return false;
        };
        let Some((peer, distance)) = world.nearest_peer(actor.id, actor.position, radius) else {
            return false;
        };
        let away = Facing::from_dx(actor.position.x - peer.position.x)
            .unwrap_or_else(|| actor.facing.flipped());
        trace!(actor = %actor.id, peer = %peer.id, distance, "steering away");
        actor.facing = away;
        actor.velocity.x = away.sign() * self.config.speed;
        actor.activity = Activity::SteerAway;
        true
    }

    fn attract_to_goal(&self, actor: &mut ActorState, world: &World, rng: &mut dyn RandomSource) {
        let Some((goal, _)) = world.nearest_active_goal(actor.position, self.config.attraction_radius)
        else {
            return;
        };
        let target = goal.position();
        if let Some(facing) = Facing::from_dx(target.x - actor.position.x) {
            actor.facing = facing;
        }
        actor.velocity.x = actor.facing.sign() * self.config.speed;

        let overhead = actor.position.y - target.y > self.config.climb_jump_height;
        if overhead && actor.grounded && rng.unit() < self.config.climb_jump_chance {
            trace!(actor = %actor.id, "climb jump");
            self.jump(actor);
        }
    }

    fn clamp_to_play_area(&self, actor: &mut ActorState) {
        let speed = self.config.speed;
        if actor.position.x < self.config.play_area_min_x {
            actor.facing = Facing::Right;
            actor.velocity.x = speed;
        } else if actor.position.x > self.config.play_area_max_x {
            actor.facing = Facing::Left;
            actor.velocity.x = -speed;
        }
    }
}
