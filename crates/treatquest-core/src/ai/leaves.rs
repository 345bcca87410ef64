//! Geometric leaf behaviors over [`ActorState`] and [`World`].
//!
//! Leaves never move the actor themselves. They write a desired velocity into
//! [`ActorState::intent`] (and a state tag) and let the locomotion model act
//! on it after the tree has finished.

use glam::Vec2;
use leash::{Behavior, Status};
use tracing::trace;

use crate::config::PilotConfig;
use crate::entity::{ActorState, Activity, EntityId};
use crate::math::direction_and_distance;
use crate::world::World;

/// Fly toward the nearest active goal in range.
///
/// `Failure` with no goal in range, `Running` while closing in, `Success`
/// once within the arrival distance.
#[derive(Debug, Clone, PartialEq)]
pub struct SeekNearestGoal {
    speed: f32,
    radius: f32,
    arrive_distance: f32,
}

impl SeekNearestGoal {
    /// Leaf using the seek fields of `pilot`.
    #[must_use]
    pub fn new(pilot: &PilotConfig) -> Self {
        Self {
            speed: pilot.cruise_speed,
            radius: pilot.seek_radius,
            arrive_distance: pilot.arrive_distance,
        }
    }
}

impl Behavior<ActorState, World> for SeekNearestGoal {
    fn execute(&mut self, actor: &mut ActorState, world: &World) -> Status {
        let Some((goal, distance)) = world.nearest_active_goal(actor.position, self.radius) else {
            return Status::Failure;
        };
        if distance <= self.arrive_distance {
            return Status::Success;
        }
        let Some((direction, _)) = direction_and_distance(actor.position, goal.position()) else {
            return Status::Success;
        };
        actor.intent = Some(direction * self.speed);
        actor.activity = Activity::Run;
        Status::Running
    }
}

/// Veer away from the nearest peer inside the avoidance radius.
///
/// `Success` after writing an evasive intent, `Failure` when nobody is close.
/// A peer sitting exactly on the actor is escaped by reversing the actor's
/// own velocity, or its facing when at rest.
#[derive(Debug, Clone, PartialEq)]
pub struct AvoidCollision {
    speed: f32,
    radius: f32,
}

impl AvoidCollision {
    /// Leaf using the avoidance fields of `pilot`.
    #[must_use]
    pub fn new(pilot: &PilotConfig) -> Self {
        Self {
            speed: pilot.cruise_speed,
            radius: pilot.avoid_radius,
        }
    }
}

impl Behavior<ActorState, World> for AvoidCollision {
    fn execute(&mut self, actor: &mut ActorState, world: &World) -> Status {
        let Some((peer, distance)) = world.nearest_peer(actor.id, actor.position, self.radius) else {
            return Status::Failure;
        };
        // On top of the peer: back out along our own track.
        let away = match direction_and_distance(actor.position, peer.position) {
            Some((toward, _)) => -toward,
            None => match actor.velocity.try_normalize() {
                Some(heading) => -heading,
                None => Vec2::new(actor.facing.flipped().sign(), 0.0),
            },
        };
        trace!(actor = %actor.id, peer = %peer.id, distance, "avoiding");
        actor.intent = Some(away * self.speed);
        actor.activity = Activity::SteerAway;
        Status::Success
    }
}

/// Hold a slot relative to a leader.
///
/// The slot offset is given for a leader facing right and mirrored when it
/// faces left. `Failure` without a visible leader, `Running` while moving
/// into the slot, `Success` (matching the leader's velocity) once inside the
/// tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintainFormation {
    leader: Option<EntityId>,
    offset: Vec2,
    speed: f32,
    tolerance: f32,
}

impl MaintainFormation {
    /// Leaf following `leader` with the formation fields of `pilot`.
    #[must_use]
    pub fn new(leader: Option<EntityId>, pilot: &PilotConfig) -> Self {
        Self {
            leader,
            offset: pilot.formation_offset,
            speed: pilot.cruise_speed,
            tolerance: pilot.formation_tolerance,
        }
    }

    /// Who this wingman follows.
    #[must_use]
    pub fn leader(&self) -> Option<EntityId> {
        self.leader
    }
}

impl Behavior<ActorState, World> for MaintainFormation {
    fn execute(&mut self, actor: &mut ActorState, world: &World) -> Status {
        let Some(leader) = self
            .leader
            .filter(|id| *id != actor.id)
            .and_then(|id| world.peer(id))
        else {
            return Status::Failure;
        };
        let slot = leader.position + Vec2::new(self.offset.x * leader.facing.sign(), self.offset.y);
        match direction_and_distance(actor.position, slot) {
            Some((direction, distance)) if distance > self.tolerance => {
                actor.intent = Some(direction * self.speed);
                Status::Running
            }
            _ => {
                actor.intent = Some(leader.velocity);
                Status::Success
            }
        }
    }
}
