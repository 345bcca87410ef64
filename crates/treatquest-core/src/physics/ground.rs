//! Kinematic integrator for ground actors.

use tracing::trace;

use crate::config::GroundConfig;
use crate::entity::{ActorState, Facing};
use crate::error::ConfigError;
use crate::math::clamp_speed;

/// Gravity, speed clamp and ground-line snapping.
///
/// With zero gravity and no ground line this is free floating motion.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundModel {
    config: GroundConfig,
}

impl GroundModel {
    /// Build from a validated config.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`GroundConfig::validate`].
    pub fn new(config: GroundConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The tunables in use.
    #[must_use]
    pub fn config(&self) -> &GroundConfig {
        &self.config
    }

    /// Adopt a desired velocity written by a leaf or the host.
    ///
    /// On a ground line only the horizontal part is taken (vertical motion
    /// belongs to gravity and jumps); in open space the whole vector is.
    pub fn apply_intent(&self, state: &mut ActorState) {
        let Some(intent) = state.intent else {
            return;
        };
        if self.config.ground_y.is_some() {
            state.velocity.x = intent.x;
        } else {
            state.velocity = intent;
        }
        if let Some(facing) = Facing::from_dx(intent.x) {
            state.facing = facing;
        }
    }

    /// Advance one tick.
    pub fn integrate(&self, state: &mut ActorState) {
        state.velocity.y += self.config.gravity;
        state.velocity = clamp_speed(state.velocity, self.config.max_speed);
        state.position += state.velocity;

        match self.config.ground_y {
            Some(ground_y) if state.position.y >= ground_y => {
                state.position.y = ground_y;
                if state.velocity.y > 0.0 {
                    state.velocity.y = 0.0;
                }
                if !state.grounded {
                    trace!(actor = %state.id, "landed");
                }
                state.grounded = true;
            }
            _ => state.grounded = false,
        }
    }
}
