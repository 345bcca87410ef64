//! Collectible goals (treats).
//!
//! Goals are created at scene setup and never destroyed. Collection flips a
//! goal inactive and starts its respawn countdown; when the countdown runs out
//! the goal reappears at a fresh position drawn from its spawn region. While
//! inactive a goal can neither be targeted nor collected.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GoalConfig;
use crate::entity::{ActorState, EntityId};
use crate::error::{ensure_finite, ConfigError};
use crate::random::RandomSource;

/// Axis-aligned region a goal respawns in (inclusive bounds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRegion {
    /// Smallest corner
    pub min: Vec2,
    /// Largest corner
    pub max: Vec2,
}

impl SpawnRegion {
    /// Region spanning `min..=max`.
    #[must_use]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// A single point: every respawn lands on it.
    #[must_use]
    pub const fn point(at: Vec2) -> Self {
        Self { min: at, max: at }
    }

    /// Uniform position inside the region. Draws x then y.
    pub fn sample(&self, rng: &mut dyn RandomSource) -> Vec2 {
        let x = rng.range_f32(self.min.x, self.max.x);
        let y = rng.range_f32(self.min.y, self.max.y);
        Vec2::new(x, y)
    }

    /// Reject non-finite or inverted bounds.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotFinite`] or [`ConfigError::InvertedRange`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite("spawn_region.min.x", self.min.x)?;
        ensure_finite("spawn_region.min.y", self.min.y)?;
        ensure_finite("spawn_region.max.x", self.max.x)?;
        ensure_finite("spawn_region.max.y", self.max.y)?;
        if self.min.x > self.max.x {
            return Err(ConfigError::InvertedRange {
                field: "spawn_region.x",
                min: self.min.x,
                max: self.max.x,
            });
        }
        if self.min.y > self.max.y {
            return Err(ConfigError::InvertedRange {
                field: "spawn_region.y",
                min: self.min.y,
                max: self.max.y,
            });
        }
        Ok(())
    }
}

/// A collectible with a point value and a respawn countdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    position: Vec2,
    collected: bool,
    respawn_timer: u32,
    last_collector: Option<EntityId>,
    value: u32,
    radius: f32,
    respawn_ticks: u32,
    region: SpawnRegion,
}

impl Goal {
    /// An active goal at `position`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from validating `config`.
    pub fn new(position: Vec2, config: &GoalConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            position,
            collected: false,
            respawn_timer: 0,
            last_collector: None,
            value: config.value,
            radius: config.radius,
            respawn_ticks: config.respawn_ticks,
            region: config.spawn_region,
        })
    }

    /// An active goal at a random spot in the configured spawn region.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from validating `config`.
    pub fn spawn(config: &GoalConfig, rng: &mut dyn RandomSource) -> Result<Self, ConfigError> {
        config.validate()?;
        let position = config.spawn_region.sample(rng);
        Self::new(position, config)
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Whether the goal may be targeted and collected.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.collected
    }

    /// Whether the goal is waiting to respawn.
    #[must_use]
    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Ticks until respawn (zero while active).
    #[must_use]
    pub fn respawn_timer(&self) -> u32 {
        self.respawn_timer
    }

    /// Who collected this goal most recently.
    #[must_use]
    pub fn last_collector(&self) -> Option<EntityId> {
        self.last_collector
    }

    /// Points awarded on collection.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Collection distance.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Collect for `by`, returning the points earned.
    ///
    /// Returns `None` (and changes nothing) if the goal is already collected.
    pub fn try_collect(&mut self, by: EntityId) -> Option<u32> {
        if self.collected {
            return None;
        }
        self.collected = true;
        self.respawn_timer = self.respawn_ticks;
        self.last_collector = Some(by);
        debug!(collector = %by, value = self.value, "goal collected");
        Some(self.value)
    }

    /// Count down one tick; respawn when the countdown ends.
    ///
    /// Returns `true` on the tick the goal becomes active again.
    pub fn tick_respawn(&mut self, rng: &mut dyn RandomSource) -> bool {
        if !self.collected {
            return false;
        }
        self.respawn_timer = self.respawn_timer.saturating_sub(1);
        if self.respawn_timer > 0 {
            return false;
        }
        self.position = self.region.sample(rng);
        self.collected = false;
        true
    }
}

/// Collect every active goal within its radius of `actor`.
///
/// The actor's score increases by the summed value, which is also returned.
/// Both saturate at `u32::MAX`.
pub fn collect_goals(actor: &mut ActorState, goals: &mut [Goal]) -> u32 {
    let mut earned: u32 = 0;
    for goal in goals.iter_mut().filter(|g| g.is_active()) {
        if actor.position.distance(goal.position) < goal.radius {
            earned = earned.saturating_add(goal.try_collect(actor.id).unwrap_or(0));
        }
    }
    actor.score = actor.score.saturating_add(earned);
    earned
}
