//! Locomotion integrators.
//!
//! - [`ground`]: plain kinematics for walking and jumping actors
//! - [`flight`]: aerodynamic model for biplanes
//!
//! Both are explicit single-step integrators run once per tick after the
//! brain has decided. Velocities are in units per tick; `dt` only scales
//! rates quoted per second (turning).

pub mod flight;
pub mod ground;

pub use flight::{FlightBody, FlightModel};
pub use ground::GroundModel;

/// Nominal tick length in seconds (60 Hz).
pub const FIXED_DT: f32 = 1.0 / 60.0;
