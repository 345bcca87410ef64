//! Per-actor state records.

use glam::Vec2;
use leash::Status;
use serde::{Deserialize, Serialize};

use super::{Activity, EntityId, Facing};

/// Mutable record a brain decides on and a locomotion model integrates.
///
/// Leaf behaviors and the steering controller write `velocity`, `facing`,
/// `activity` and `intent`; the integrators own `position` and `grounded`.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorState {
    /// Stable identifier
    pub id: EntityId,
    /// Display name
    pub name: String,
    /// World position
    pub position: Vec2,
    /// Velocity in units per tick
    pub velocity: Vec2,
    /// Horizontal orientation
    pub facing: Facing,
    /// Current discrete state
    pub activity: Activity,
    /// Ticks left before the steering controller re-rolls `activity`
    pub activity_timer: u32,
    /// Resting on the ground line
    pub grounded: bool,
    /// Sum of collected goal values
    pub score: u32,
    /// Desired velocity written by a tree leaf or the host
    pub intent: Option<Vec2>,
    /// Root status of the last tree evaluation
    pub last_status: Option<Status>,
}

impl ActorState {
    /// A resting actor at `position`.
    #[must_use]
    pub fn new(id: EntityId, name: impl Into<String>, position: Vec2) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            velocity: Vec2::ZERO,
            facing: Facing::default(),
            activity: Activity::Idle,
            activity_timer: 0,
            grounded: false,
            score: 0,
            intent: None,
            last_status: None,
        }
    }

    /// Builder-style velocity override.
    #[must_use]
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Builder-style facing override.
    #[must_use]
    pub fn with_facing(mut self, facing: Facing) -> Self {
        self.facing = facing;
        self
    }

    /// Builder-style grounded override.
    #[must_use]
    pub fn with_grounded(mut self, grounded: bool) -> Self {
        self.grounded = grounded;
        self
    }
}

/// Read-only per-tick view of an actor for renderers and reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorSnapshot {
    /// Stable identifier
    pub id: EntityId,
    /// Display name
    pub name: String,
    /// World position
    pub position: Vec2,
    /// Velocity in units per tick
    pub velocity: Vec2,
    /// Horizontal orientation
    pub facing: Facing,
    /// Heading in radians (flyers only)
    pub heading: Option<f32>,
    /// Discrete state tag
    pub activity: Activity,
    /// Root status of the last tree evaluation (tree-driven actors only)
    pub status: Option<Status>,
    /// Stalled flag (flyers only, false otherwise)
    pub stalled: bool,
    /// Visual bank angle in radians (flyers only, zero otherwise)
    pub bank_angle: f32,
    /// Resting on the ground line
    pub grounded: bool,
    /// Sum of collected goal values
    pub score: u32,
}
