//! Minimal 2D math for the simulation.
//!
//! [`Vector2`] is `glam::Vec2`; the helpers here add the zero-guarded
//! operations the integrators need so no division by a vanishing length ever
//! produces NaN.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D vector used for positions, velocities and forces.
pub type Vector2 = Vec2;

/// Lengths at or below this are treated as zero.
pub const EPSILON: f32 = 1e-6;

/// Unit direction from `from` to `to` and the distance between them.
///
/// Returns `None` when the points coincide.
#[must_use]
pub fn direction_and_distance(from: Vec2, to: Vec2) -> Option<(Vec2, f32)> {
    let delta = to - from;
    let distance = delta.length();
    if distance > EPSILON {
        Some((delta / distance, distance))
    } else {
        None
    }
}

/// Uniformly rescales `velocity` so its length does not exceed `max_speed`.
#[must_use]
pub fn clamp_speed(velocity: Vec2, max_speed: f32) -> Vec2 {
    let speed = velocity.length();
    if speed > max_speed && speed > EPSILON {
        velocity * (max_speed / speed)
    } else {
        velocity
    }
}

/// Moves `current` toward `target` by `factor` of the remaining gap.
#[must_use]
pub fn lerp(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Wraps an angle into `(-π, π]`.
#[must_use]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Axis-aligned rectangle in world or screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    #[must_use]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Bottom-right corner.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Size as a vector.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Check if a point is inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// The same rectangle shifted by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_of_coincident_points_is_none() {
        assert!(direction_and_distance(Vec2::ONE, Vec2::ONE).is_none());
    }

    #[test]
    fn direction_is_unit_length() {
        let (dir, dist) = direction_and_distance(Vec2::ZERO, Vec2::new(3.0, 4.0)).unwrap();
        assert!((dist - 5.0).abs() < 1e-6);
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!((dir.x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn clamp_speed_rescales_uniformly() {
        let clamped = clamp_speed(Vec2::new(30.0, 40.0), 10.0);
        assert!((clamped.length() - 10.0).abs() < 1e-4);
        assert!((clamped.x / clamped.y - 0.75).abs() < 1e-6);
    }

    #[test]
    fn clamp_speed_leaves_slow_vectors_alone() {
        let v = Vec2::new(1.0, -2.0);
        assert_eq!(clamp_speed(v, 10.0), v);
        assert_eq!(clamp_speed(Vec2::ZERO, 10.0), Vec2::ZERO);
    }

    #[test]
    fn wrap_angle_stays_in_half_open_interval() {
        assert!((wrap_angle(3.0 * PI) - PI).abs() < 1e-5);
        assert!((wrap_angle(-PI) - PI).abs() < 1e-5);
        assert!((wrap_angle(0.5) - 0.5).abs() < 1e-6);
        assert!((wrap_angle(TAU + 0.25) - 0.25).abs() < 1e-5);
    }

    #[test]
    fn rect_translation_keeps_size() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        let moved = rect.translated(Vec2::new(-10.0, 5.0));
        assert_eq!(moved.min(), Vec2::new(0.0, 25.0));
        assert_eq!(moved.size(), rect.size());
        assert!(rect.contains(Vec2::new(40.0, 60.0)));
        assert!(!rect.contains(Vec2::new(41.0, 60.0)));
    }
}
