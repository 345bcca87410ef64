//! Closure-backed leaf nodes.
//!
//! Most leaves in a game are small enough that a dedicated type is overkill.
//! [`Condition`] turns a predicate into a node; [`Action`] wraps a closure
//! that may mutate the actor and report any [`Status`].

use crate::{Behavior, Status};

/// Leaf that succeeds when its predicate holds and fails otherwise.
///
/// Conditions never mutate the actor and never return `Running`.
pub struct Condition<F> {
    predicate: F,
}

impl<F> Condition<F> {
    /// Wraps a predicate.
    #[must_use]
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<A: ?Sized, W: ?Sized, F> Behavior<A, W> for Condition<F>
where
    F: FnMut(&A, &W) -> bool + Send,
{
    fn execute(&mut self, actor: &mut A, world: &W) -> Status {
        Status::from((self.predicate)(actor, world))
    }
}

/// Leaf that runs a closure with mutable access to the actor.
pub struct Action<F> {
    run: F,
}

impl<F> Action<F> {
    /// Wraps an action closure.
    #[must_use]
    pub fn new(run: F) -> Self {
        Self { run }
    }
}

impl<A: ?Sized, W: ?Sized, F> Behavior<A, W> for Action<F>
where
    F: FnMut(&mut A, &W) -> Status + Send,
{
    fn execute(&mut self, actor: &mut A, world: &W) -> Status {
        (self.run)(actor, world)
    }
}
