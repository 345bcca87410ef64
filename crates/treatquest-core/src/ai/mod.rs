//! Decision making.
//!
//! Two interchangeable brains drive actors:
//!
//! - [`SteeringController`]: the timed run/sniff/jump/idle state machine with
//!   goal attraction, crowding avoidance and a play-area clamp
//! - behavior trees built from [`leash`] composites over the leaves in
//!   [`leaves`], assembled by [`default_tree`]

pub mod leaves;
pub mod steering;
pub mod tree;

pub use leaves::{AvoidCollision, MaintainFormation, SeekNearestGoal};
pub use steering::SteeringController;
pub use tree::default_tree;
