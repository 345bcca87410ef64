//! Biplane flight model.
//!
//! Side-view aerodynamics in screen space (y grows downward). Heading is in
//! radians with nose-up positive, so the thrust direction is
//! `(cos h, -sin h)`. Lift and stall read the pitch `asin(sin h)`, which
//! mirrors a left-facing heading into `[-π/2, π/2]` so that level flight in
//! either direction is pitch zero.
//!
//! One [`FlightModel::integrate`] call is one tick:
//!
//! 1. `speed = |v|`
//! 2. `lift = k_l * speed² * cos(pitch)`, `drag = k_d * speed²` (both zero at rest)
//! 3. `v.y += gravity - lift`
//! 4. `v -= drag * v / speed`
//! 5. stall if `speed < stall_speed` and `pitch > stall_angle`, dropping the nose
//! 6. clamp `|v|` to `max_speed`
//! 7. ease the bank angle toward `h * bank_factor`
//!
//! The integrator is explicit with no sub-stepping; tests check qualitative
//! behavior rather than exact trajectories.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::FlightConfig;
use crate::error::ConfigError;
use crate::math::{clamp_speed, lerp, wrap_angle, EPSILON};

/// Unit vector along a heading.
#[must_use]
pub fn heading_vector(heading: f32) -> Vec2 {
    Vec2::new(heading.cos(), -heading.sin())
}

/// Heading that points along `direction`.
#[must_use]
pub fn heading_of(direction: Vec2) -> f32 {
    (-direction.y).atan2(direction.x)
}

/// Nose elevation above the horizon for a heading, in `[-π/2, π/2]`.
#[must_use]
pub fn pitch_of(heading: f32) -> f32 {
    heading.sin().clamp(-1.0, 1.0).asin()
}

/// Per-flyer physical state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlightBody {
    /// Velocity in units per tick
    pub velocity: Vec2,
    /// Heading in radians, nose-up positive, kept in `(-π, π]`
    pub heading: f32,
    /// Last thrust applied
    pub thrust: f32,
    /// Below stall speed in a steep climb
    pub stalled: bool,
    /// Visual roll; lags heading and never feeds back into physics
    pub bank_angle: f32,
}

impl FlightBody {
    /// A body at rest with the given heading.
    #[must_use]
    pub fn new(heading: f32) -> Self {
        Self {
            heading: wrap_angle(heading),
            ..Self::default()
        }
    }

    /// Current airspeed.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Integrator holding one set of aerodynamic coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightModel {
    config: FlightConfig,
}

impl FlightModel {
    /// Build from a validated config.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`FlightConfig::validate`], e.g. a
    /// zero max speed or a stall speed at or above max speed.
    pub fn new(config: FlightConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The coefficients in use.
    #[must_use]
    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    /// Push along the current heading.
    pub fn apply_thrust(&self, body: &mut FlightBody, amount: f32) {
        body.thrust = amount;
        body.velocity += heading_vector(body.heading) * amount;
    }

    /// Pitch by `direction` (clamped to `[-1, 1]`, positive is nose up).
    ///
    /// Authority drops to `stall_turn_factor` while stalled.
    pub fn turn(&self, body: &mut FlightBody, direction: f32, dt: f32) {
        let mut rate = self.config.turn_rate * dt;
        if body.stalled {
            rate *= self.config.stall_turn_factor;
        }
        body.heading = wrap_angle(body.heading + direction.clamp(-1.0, 1.0) * rate);
    }

    /// Turn toward `desired` as far as this tick allows, then apply cruise
    /// thrust. A zero `desired` leaves the body untouched.
    pub fn steer_towards(&self, body: &mut FlightBody, desired: Vec2, dt: f32) {
        if desired.length() <= EPSILON {
            return;
        }
        let error = wrap_angle(heading_of(desired) - body.heading);
        let mut max_step = self.config.turn_rate * dt;
        if body.stalled {
            max_step *= self.config.stall_turn_factor;
        }
        let direction = if max_step > EPSILON {
            (error / max_step).clamp(-1.0, 1.0)
        } else {
            error.signum()
        };
        self.turn(body, direction, dt);
        self.apply_thrust(body, self.config.cruise_thrust);
    }

    /// Advance one tick.
    pub fn integrate(&self, body: &mut FlightBody) {
        let config = &self.config;
        let speed = body.speed();
        let pitch = pitch_of(body.heading);

        let (lift, drag) = if speed > EPSILON {
            let speed_sq = speed * speed;
            (
                config.lift_coefficient * speed_sq * pitch.cos(),
                config.drag_coefficient * speed_sq,
            )
        } else {
            (0.0, 0.0)
        };

        body.velocity.y += config.gravity - lift;
        if speed > EPSILON {
            body.velocity -= body.velocity / speed * drag;
        }

        let stalling = speed < config.stall_speed && pitch > config.stall_angle;
        if stalling != body.stalled {
            debug!(speed, pitch, stalled = stalling, "stall state changed");
        }
        body.stalled = stalling;
        if stalling {
            body.velocity.y += config.stall_drop;
        }

        body.velocity = clamp_speed(body.velocity, config.max_speed);

        let target_bank = body.heading * config.bank_factor;
        body.bank_angle = lerp(body.bank_angle, target_bank, config.bank_lerp);
    }
}
