//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, the contract every tree node
//! implements. The trait is generic over the actor being driven (`A`, mutable
//! so leaves can write intent) and the world snapshot it reads (`W`).

use crate::Status;

/// A boxed, type-erased behavior node.
pub type Node<A, W> = Box<dyn Behavior<A, W>>;

/// A behavior tree node that can be evaluated against an actor and a world.
pub trait Behavior<A: ?Sized, W: ?Sized>: Send {
    /// Evaluate this node for one tick.
    ///
    /// # Arguments
    ///
    /// * `actor` - The entity being driven. Leaves may write its intended
    ///   velocity or other decision outputs.
    /// * `world` - Read-only snapshot of everything else for this tick.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior completed
    /// - `Status::Failure` if it could not apply
    /// - `Status::Running` if it needs more ticks
    fn execute(&mut self, actor: &mut A, world: &W) -> Status;

    /// Clears any persisted evaluation state so the next tick starts fresh.
    ///
    /// Leaves are stateless and keep the default no-op.
    fn reset(&mut self) {}
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<A, W>>` to also implement `Behavior<A, W>`,
/// enabling dynamic dispatch and heterogeneous child lists.
impl<A: ?Sized, W: ?Sized> Behavior<A, W> for Box<dyn Behavior<A, W>> {
    #[inline]
    fn execute(&mut self, actor: &mut A, world: &W) -> Status {
        (**self).execute(actor, world)
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset();
    }
}
