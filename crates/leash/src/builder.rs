//! Builder utilities for ergonomic behavior tree construction.
//!
//! Instead of writing `Box::new(Sequence::new(vec![...]))` you can write
//! `sequence(vec![...])`.

use crate::{Action, Behavior, Condition, Inverter, Node, Selector, Sequence, Status};

/// Creates a sequence node.
#[inline]
#[must_use]
pub fn sequence<A: ?Sized + 'static, W: ?Sized + 'static>(children: Vec<Node<A, W>>) -> Node<A, W> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
#[inline]
#[must_use]
pub fn selector<A: ?Sized + 'static, W: ?Sized + 'static>(children: Vec<Node<A, W>>) -> Node<A, W> {
    Box::new(Selector::new(children))
}

/// Creates an inverter node.
#[inline]
#[must_use]
pub fn inverter<A: ?Sized + 'static, W: ?Sized + 'static>(child: Node<A, W>) -> Node<A, W> {
    Box::new(Inverter::new(child))
}

/// Creates a condition leaf from a predicate.
#[inline]
#[must_use]
pub fn condition<A, W, F>(predicate: F) -> Node<A, W>
where
    A: ?Sized + 'static,
    W: ?Sized + 'static,
    F: FnMut(&A, &W) -> bool + Send + 'static,
{
    Box::new(Condition::new(predicate))
}

/// Creates an action leaf from a closure.
#[inline]
#[must_use]
pub fn action<A, W, F>(run: F) -> Node<A, W>
where
    A: ?Sized + 'static,
    W: ?Sized + 'static,
    F: FnMut(&mut A, &W) -> Status + Send + 'static,
{
    Box::new(Action::new(run))
}

/// Boxes any concrete behavior into a [`Node`].
#[inline]
#[must_use]
pub fn node<A, W, B>(behavior: B) -> Node<A, W>
where
    A: ?Sized + 'static,
    W: ?Sized + 'static,
    B: Behavior<A, W> + 'static,
{
    Box::new(behavior)
}
