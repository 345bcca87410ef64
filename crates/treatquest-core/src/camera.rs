//! Lag-following viewport.
//!
//! The camera watches one actor by id; it never holds or mutates the actor
//! itself. Each [`Camera::update`] closes `lerp` of the gap between the
//! current top-left and the top-left that would center the target, unless the
//! target is still inside the deadzone around the current focus. The result
//! is always clamped so the viewport stays inside the world; on an axis where
//! the world is smaller than the viewport the camera centers on the world.
//!
//! `update` is meant to run once per fixed-rate tick; the lerp is not scaled
//! by elapsed time.

use glam::{IVec2, Vec2};
use tracing::debug;

use crate::config::CameraConfig;
use crate::entity::EntityId;
use crate::error::ConfigError;
use crate::math::Rect;

/// Smoothed, clamped tracking camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec2,
    config: CameraConfig,
    target: Option<EntityId>,
}

impl Camera {
    /// Camera at the world's top-left corner with no target.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`CameraConfig::validate`].
    pub fn new(config: CameraConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut camera = Self {
            position: config.world.min(),
            config,
            target: None,
        };
        camera.clamp_to_world();
        Ok(camera)
    }

    /// Top-left corner of the viewport in world space.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// World point at the center of the viewport.
    #[must_use]
    pub fn focus(&self) -> Vec2 {
        self.position + self.config.viewport() * 0.5
    }

    /// Tunables in use.
    #[must_use]
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// The actor being followed.
    #[must_use]
    pub fn target(&self) -> Option<EntityId> {
        self.target
    }

    /// Follow `id` from now on.
    pub fn set_target(&mut self, id: EntityId) {
        if self.target != Some(id) {
            debug!(target = %id, "camera retargeted");
        }
        self.target = Some(id);
    }

    /// Stop following; updates become no-ops.
    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Jump straight to centering `point`, skipping the lerp.
    pub fn snap_to(&mut self, point: Vec2) {
        self.position = point - self.config.viewport() * 0.5;
        self.clamp_to_world();
    }

    /// Track the bound target, resolving its position through `locate`.
    ///
    /// No-op without a target or when `locate` cannot find it. The lerp
    /// factor is per tick, so `_dt` does not scale the step.
    pub fn update(&mut self, _dt: f32, locate: impl Fn(EntityId) -> Option<Vec2>) {
        if let Some(position) = self.target.and_then(locate) {
            self.follow(position);
        }
    }

    /// One lerp step toward centering `target`, then clamp.
    pub fn follow(&mut self, target: Vec2) {
        if target.distance(self.focus()) > self.config.deadzone {
            let desired = target - self.config.viewport() * 0.5;
            self.position = self.position.lerp(desired, self.config.lerp);
        }
        self.clamp_to_world();
    }

    /// World point to screen pixel (truncating toward zero).
    #[must_use]
    pub fn apply(&self, point: Vec2) -> IVec2 {
        (point - self.position).as_ivec2()
    }

    /// World rectangle to screen space, shifted by the truncated camera position.
    #[must_use]
    pub fn apply_rect(&self, rect: Rect) -> Rect {
        rect.translated(-self.position.trunc())
    }

    fn clamp_to_world(&mut self) {
        let world = self.config.world;
        let viewport = self.config.viewport();
        self.position.x = clamp_axis(self.position.x, world.x, world.width, viewport.x);
        self.position.y = clamp_axis(self.position.y, world.y, world.height, viewport.y);
    }
}

fn clamp_axis(value: f32, start: f32, extent: f32, view: f32) -> f32 {
    if extent < view {
        start + (extent - view) * 0.5
    } else {
        value.clamp(start, start + extent - view)
    }
}
