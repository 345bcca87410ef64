//! Stock behavior trees.

use leash::builder::{node, selector, sequence};
use leash::Node;

use super::leaves::{AvoidCollision, MaintainFormation, SeekNearestGoal};
use crate::config::PilotConfig;
use crate::entity::{ActorState, EntityId};
use crate::world::World;

/// Avoid first; otherwise seek the nearest goal and then fall in behind
/// `leader`.
///
/// ```text
/// Selector
/// ├── AvoidCollision
/// └── Sequence
///     ├── SeekNearestGoal
///     └── MaintainFormation
/// ```
#[must_use]
pub fn default_tree(pilot: &PilotConfig, leader: Option<EntityId>) -> Node<ActorState, World> {
    selector(vec![
        node(AvoidCollision::new(pilot)),
        sequence(vec![
            node(SeekNearestGoal::new(pilot)),
            node(MaintainFormation::new(leader, pilot)),
        ]),
    ])
}
