//! # Treatquest Core
//!
//! Simulation substrate for the Treatquest arcade scenes: autonomous dogs in
//! a park, tree-driven biplanes, and the camera that follows them.
//!
//! ## Architecture
//!
//! - **Decision**: a timed steering state machine ([`ai::SteeringController`])
//!   or a behavior tree built from [`leash`] composites and the leaves in
//!   [`ai::leaves`]
//! - **Locomotion**: ground kinematics ([`physics::GroundModel`]) or
//!   aerodynamic flight ([`physics::FlightModel`])
//! - **Viewport**: a lag-following, world-clamped [`camera::Camera`]
//! - **Driver**: [`scene::Scene`] runs decide → integrate → collect for every
//!   actor in id order, then respawns goals and moves the camera
//!
//! Construction validates every tunable and reports [`ConfigError`]; ticking
//! never fails.
//!
//! ## Usage
//!
//! ```
//! use treatquest_core::config::SceneConfig;
//! use treatquest_core::physics::FIXED_DT;
//! use treatquest_core::scene::Scene;
//!
//! let mut scene = Scene::from_config(&SceneConfig::default())?;
//! for _ in 0..60 {
//!     scene.step(FIXED_DT);
//! }
//! let snapshots = scene.snapshots();
//! assert_eq!(snapshots.len(), 2);
//! # Ok::<(), treatquest_core::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod actor;
pub mod ai;
pub mod camera;
pub mod config;
pub mod entity;
pub mod error;
pub mod goal;
pub mod math;
pub mod physics;
pub mod random;
pub mod scene;
pub mod world;

#[cfg(test)]
mod tests;

pub use actor::{Actor, Brain, Locomotion};
pub use camera::Camera;
pub use entity::{ActorSnapshot, ActorState, Activity, EntityId, Facing};
pub use error::ConfigError;
pub use goal::Goal;
pub use math::Vector2;
pub use random::RandomSource;
pub use scene::Scene;
pub use world::{Environment, Peer, World};

pub use leash;
