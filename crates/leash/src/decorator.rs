//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result.

use crate::{Behavior, Node, Status};

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` passes through unchanged
pub struct Inverter<A: ?Sized, W: ?Sized> {
    child: Node<A, W>,
}

impl<A: ?Sized, W: ?Sized> Inverter<A, W> {
    /// Creates a new inverter that wraps the given child behavior.
    #[must_use]
    pub fn new(child: Node<A, W>) -> Self {
        Self { child }
    }
}

impl<A: ?Sized, W: ?Sized> Behavior<A, W> for Inverter<A, W> {
    fn execute(&mut self, actor: &mut A, world: &W) -> Status {
        self.child.execute(actor, world).invert()
    }

    fn reset(&mut self) {
        self.child.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Status);

    impl Behavior<(), ()> for Fixed {
        fn execute(&mut self, _actor: &mut (), _world: &()) -> Status {
            self.0
        }
    }

    #[test]
    fn inverter_flips_terminal_results() {
        let mut success: Inverter<(), ()> = Inverter::new(Box::new(Fixed(Status::Success)));
        let mut failure: Inverter<(), ()> = Inverter::new(Box::new(Fixed(Status::Failure)));

        assert_eq!(success.execute(&mut (), &()), Status::Failure);
        assert_eq!(failure.execute(&mut (), &()), Status::Success);
    }

    #[test]
    fn inverter_passes_running_through() {
        let mut running: Inverter<(), ()> = Inverter::new(Box::new(Fixed(Status::Running)));
        assert_eq!(running.execute(&mut (), &()), Status::Running);
    }
}
