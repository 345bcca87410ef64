//! The per-tick world snapshot decisions read.
//!
//! The host (here, [`Scene`](crate::scene::Scene)) owns the goal list and
//! rebuilds the peer list every tick, so brains only ever see a consistent
//! start-of-tick view of the other actors.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::entity::{ActorState, EntityId, Facing};
use crate::goal::Goal;

/// Start-of-tick view of another actor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peer {
    /// Who this is
    pub id: EntityId,
    /// Where it was at the start of the tick
    pub position: Vec2,
    /// How it was moving at the start of the tick
    pub velocity: Vec2,
    /// Which way it was facing
    pub facing: Facing,
}

impl From<&ActorState> for Peer {
    fn from(state: &ActorState) -> Self {
        Self {
            id: state.id,
            position: state.position,
            velocity: state.velocity,
            facing: state.facing,
        }
    }
}

/// Environmental flags written by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    /// Local night time (sleep-at-night actors doze off)
    pub night: bool,
}

/// Everything a brain may look at while deciding.
#[derive(Debug, Clone, Default)]
pub struct World {
    /// All goals, active or not
    pub goals: Vec<Goal>,
    /// Every actor as it stood at the start of the tick
    pub peers: Vec<Peer>,
    /// Host-supplied flags
    pub environment: Environment,
    /// Ticks completed so far
    pub tick: u64,
}

impl World {
    /// Empty world with the given goals.
    #[must_use]
    pub fn with_goals(goals: Vec<Goal>) -> Self {
        Self {
            goals,
            ..Self::default()
        }
    }

    /// Nearest active goal strictly within `radius` of `from`, with its distance.
    #[must_use]
    pub fn nearest_active_goal(&self, from: Vec2, radius: f32) -> Option<(&Goal, f32)> {
        self.goals
            .iter()
            .filter(|goal| goal.is_active())
            .map(|goal| (goal, from.distance(goal.position())))
            .filter(|(_, distance)| *distance < radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Nearest peer other than `exclude` strictly within `radius` of `from`.
    ///
    /// A peer sitting exactly on `from` is reported at distance zero; callers
    /// pick their own escape direction for it.
    #[must_use]
    pub fn nearest_peer(&self, exclude: EntityId, from: Vec2, radius: f32) -> Option<(&Peer, f32)> {
        self.peers
            .iter()
            .filter(|peer| peer.id != exclude)
            .map(|peer| (peer, from.distance(peer.position)))
            .filter(|(_, distance)| *distance < radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Start-of-tick view of `id`, if present.
    #[must_use]
    pub fn peer(&self, id: EntityId) -> Option<&Peer> {
        self.peers.iter().find(|peer| peer.id == id)
    }
}
