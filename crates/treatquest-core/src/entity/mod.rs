//! Actor identity and the discrete state every actor carries.
//!
//! - [`EntityId`]: stable identifier, also the deterministic update order
//! - [`Activity`]: the enumerated state tag (`run`, `sniff`, `jump`, ...)
//! - [`Facing`]: horizontal orientation of ground actors
//! - [`ActorState`]: the mutable per-actor record decisions write into
//! - [`ActorSnapshot`]: the read-only view handed to renderers
//!
//! # Example
//!
//! ```
//! use treatquest_core::entity::{Activity, ActorState, EntityId};
//! use treatquest_core::math::Vector2;
//!
//! let dog = ActorState::new(EntityId::new(1), "harley", Vector2::new(640.0, 930.0));
//!
//! assert_eq!(dog.id.as_u64(), 1);
//! assert_eq!(dog.activity, Activity::Idle);
//! assert_eq!(dog.activity_timer, 0);
//! ```

pub mod components;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use components::{ActorSnapshot, ActorState};

/// Unique identifier for an actor.
///
/// Ids are assigned once at scene setup and never reused. Actors are updated
/// in ascending id order, which keeps runs deterministic.
///
/// ```
/// use treatquest_core::entity::EntityId;
///
/// assert!(EntityId::new(1) < EntityId::new(2));
/// assert_eq!(u64::from(EntityId::new(7)), 7);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(u64);

impl EntityId {
    /// Wrap a raw id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw id.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl From<EntityId> for u64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

/// Discrete state tag.
///
/// The steering controller owns transitions between these; tree-driven and
/// manual actors report `Idle` unless a leaf says otherwise.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    /// Moving at configured speed in the facing direction
    Run,
    /// Stopped, nose to the ground
    Sniff,
    /// Airborne after an upward impulse
    Jump,
    /// Coasting with whatever horizontal velocity is left
    Idle,
    /// Stopped for the night
    Sleep,
    /// Moving away from a crowding peer
    SteerAway,
}

impl Activity {
    /// Weighted re-roll table: `run` is three times as likely as the rest.
    pub const REROLL_TABLE: [Self; 6] = [
        Self::Run,
        Self::Run,
        Self::Run,
        Self::Sniff,
        Self::Jump,
        Self::Idle,
    ];
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Run => "run",
            Self::Sniff => "sniff",
            Self::Jump => "jump",
            Self::Idle => "idle",
            Self::Sleep => "sleep",
            Self::SteerAway => "steer-away",
        };
        f.write_str(name)
    }
}

/// Horizontal facing of a ground actor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    /// Toward negative x
    Left,
    /// Toward positive x
    #[default]
    Right,
}

impl Facing {
    /// `-1.0` for left, `1.0` for right.
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// Facing that points along `dx`; `None` when `dx` is zero.
    #[must_use]
    pub fn from_dx(dx: f32) -> Option<Self> {
        if dx > 0.0 {
            Some(Self::Right)
        } else if dx < 0.0 {
            Some(Self::Left)
        } else {
            None
        }
    }

    /// The other way.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
