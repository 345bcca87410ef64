//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors:
//! [`Sequence`] (AND-then logic) and [`Selector`] (priority OR logic).
//!
//! Both keep a cursor, the index of the child to evaluate next. The cursor
//! survives a `Running` return so multi-tick children are resumed, and is
//! reset to zero whenever the composite terminates.

use tracing::trace;

use crate::{Behavior, Node, Status};

/// Executes child behaviors in order until one fails.
///
/// # Semantics
///
/// - If a child returns `Failure`, the sequence resets its cursor and returns
///   `Failure` immediately; later siblings are not evaluated this tick
/// - If a child returns `Running`, the sequence returns `Running` and resumes
///   at that child on the next tick
/// - If a child returns `Success`, the sequence advances to the next child
/// - Once every child has succeeded in order, the sequence resets its cursor
///   and returns `Success`
///
/// An empty sequence succeeds.
pub struct Sequence<A: ?Sized, W: ?Sized> {
    children: Vec<Node<A, W>>,
    cursor: usize,
}

impl<A: ?Sized, W: ?Sized> Sequence<A, W> {
    /// Creates a new sequence with the given child behaviors.
    #[must_use]
    pub fn new(children: Vec<Node<A, W>>) -> Self {
        Self {
            children,
            cursor: 0,
        }
    }

    /// Index of the child the next tick will start from.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the sequence has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<A: ?Sized, W: ?Sized> Behavior<A, W> for Sequence<A, W> {
    fn execute(&mut self, actor: &mut A, world: &W) -> Status {
        if self.cursor > 0 {
            trace!(cursor = self.cursor, "sequence resuming");
        }
        while let Some(child) = self.children.get_mut(self.cursor) {
            match child.execute(actor, world) {
                Status::Success => self.cursor += 1,
                Status::Running => return Status::Running,
                Status::Failure => {
                    self.cursor = 0;
                    return Status::Failure;
                }
            }
        }
        self.cursor = 0;
        Status::Success
    }

    fn reset(&mut self) {
        self.cursor = 0;
        for child in &mut self.children {
            child.reset();
        }
    }
}

/// Executes child behaviors in order until one succeeds.
///
/// # Semantics
///
/// - If a child returns `Success`, the selector resets its cursor and returns
///   `Success` immediately; later siblings are not evaluated this tick
/// - If a child returns `Running`, the selector returns `Running` and resumes
///   at that child on the next tick
/// - If a child returns `Failure`, the selector advances to the next child
/// - Once every child has failed, the selector resets its cursor and returns
///   `Failure`
///
/// An empty selector fails.
pub struct Selector<A: ?Sized, W: ?Sized> {
    children: Vec<Node<A, W>>,
    cursor: usize,
}

impl<A: ?Sized, W: ?Sized> Selector<A, W> {
    /// Creates a new selector with the given child behaviors.
    #[must_use]
    pub fn new(children: Vec<Node<A, W>>) -> Self {
        Self {
            children,
            cursor: 0,
        }
    }

    /// Index of the child the next tick will start from.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the selector has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<A: ?Sized, W: ?Sized> Behavior<A, W> for Selector<A, W> {
    fn execute(&mut self, actor: &mut A, world: &W) -> Status {
        if self.cursor > 0 {
            trace!(cursor = self.cursor, "selector resuming");
        }
        while let Some(child) = self.children.get_mut(self.cursor) {
            match child.execute(actor, world) {
                Status::Failure => self.cursor += 1,
                Status::Running => return Status::Running,
                Status::Success => {
                    self.cursor = 0;
                    return Status::Success;
                }
            }
        }
        self.cursor = 0;
        Status::Failure
    }

    fn reset(&mut self) {
        self.cursor = 0;
        for child in &mut self.children {
            child.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestActor {
        value: i32,
        calls: Vec<&'static str>,
    }

    /// Leaf that records its name and replays a scripted list of statuses,
    /// repeating the last one when the script runs out.
    struct Scripted {
        name: &'static str,
        script: Vec<Status>,
        step: usize,
    }

    impl Scripted {
        fn new(name: &'static str, script: Vec<Status>) -> Box<Self> {
            Box::new(Self {
                name,
                script,
                step: 0,
            })
        }

        fn always(name: &'static str, status: Status) -> Box<Self> {
            Self::new(name, vec![status])
        }
    }

    impl Behavior<TestActor, ()> for Scripted {
        fn execute(&mut self, actor: &mut TestActor, _world: &()) -> Status {
            actor.calls.push(self.name);
            let index = self.step.min(self.script.len() - 1);
            self.step += 1;
            self.script[index]
        }
    }

    struct Increment;
    impl Behavior<TestActor, ()> for Increment {
        fn execute(&mut self, actor: &mut TestActor, _world: &()) -> Status {
            actor.value += 1;
            Status::Success
        }
    }

    mod sequence_tests {
        use super::*;

        #[test]
        fn all_success() {
            let mut seq: Sequence<TestActor, ()> =
                Sequence::new(vec![Box::new(Increment), Box::new(Increment)]);

            let mut actor = TestActor::default();
            assert_eq!(seq.execute(&mut actor, &()), Status::Success);
            assert_eq!(actor.value, 2);
            assert_eq!(seq.cursor(), 0);
        }

        #[test]
        fn short_circuits_on_failure() {
            let mut seq: Sequence<TestActor, ()> = Sequence::new(vec![
                Scripted::always("a", Status::Success),
                Scripted::always("b", Status::Failure),
                Scripted::always("c", Status::Success),
            ]);

            let mut actor = TestActor::default();
            assert_eq!(seq.execute(&mut actor, &()), Status::Failure);
            assert_eq!(actor.calls, vec!["a", "b"]);
            assert_eq!(seq.cursor(), 0);
        }

        #[test]
        fn running_then_success_resumes_and_resets() {
            let mut seq: Sequence<TestActor, ()> = Sequence::new(vec![
                Scripted::always("first", Status::Success),
                Scripted::new("second", vec![Status::Running, Status::Success]),
            ]);
            let mut actor = TestActor::default();

            assert_eq!(seq.execute(&mut actor, &()), Status::Running);
            assert_eq!(seq.cursor(), 1);

            assert_eq!(seq.execute(&mut actor, &()), Status::Success);
            assert_eq!(seq.cursor(), 0);

            // The first child is not re-run on the resumed tick.
            assert_eq!(actor.calls, vec!["first", "second", "second"]);
        }

        #[test]
        fn failure_after_running_restarts_from_first_child() {
            let mut seq: Sequence<TestActor, ()> = Sequence::new(vec![
                Scripted::always("first", Status::Success),
                Scripted::new("second", vec![Status::Running, Status::Failure]),
            ]);
            let mut actor = TestActor::default();

            assert_eq!(seq.execute(&mut actor, &()), Status::Running);
            assert_eq!(seq.execute(&mut actor, &()), Status::Failure);
            assert_eq!(seq.cursor(), 0);

            actor.calls.clear();
            seq.execute(&mut actor, &());
            assert_eq!(actor.calls.first(), Some(&"first"));
        }

        #[test]
        fn empty_succeeds() {
            let mut seq: Sequence<TestActor, ()> = Sequence::new(vec![]);
            assert!(seq.is_empty());
            assert_eq!(seq.execute(&mut TestActor::default(), &()), Status::Success);
        }

        #[test]
        fn reset_clears_cursor() {
            let mut seq: Sequence<TestActor, ()> = Sequence::new(vec![
                Scripted::always("a", Status::Success),
                Scripted::always("b", Status::Running),
            ]);
            let mut actor = TestActor::default();
            seq.execute(&mut actor, &());
            assert_eq!(seq.cursor(), 1);

            seq.reset();
            assert_eq!(seq.cursor(), 0);
        }
    }

    mod selector_tests {
        use super::*;

        #[test]
        fn short_circuits_on_success() {
            let mut sel: Selector<TestActor, ()> = Selector::new(vec![
                Scripted::always("a", Status::Failure),
                Scripted::always("b", Status::Success),
                Scripted::always("c", Status::Success),
            ]);

            let mut actor = TestActor::default();
            assert_eq!(sel.execute(&mut actor, &()), Status::Success);
            assert_eq!(actor.calls, vec!["a", "b"]);
            assert_eq!(sel.cursor(), 0);
        }

        #[test]
        fn fails_when_all_fail() {
            let mut sel: Selector<TestActor, ()> = Selector::new(vec![
                Scripted::always("a", Status::Failure),
                Scripted::always("b", Status::Failure),
            ]);

            let mut actor = TestActor::default();
            assert_eq!(sel.execute(&mut actor, &()), Status::Failure);
            assert_eq!(actor.calls, vec!["a", "b"]);
            assert_eq!(sel.cursor(), 0);
        }

        #[test]
        fn running_child_is_resumed() {
            let mut sel: Selector<TestActor, ()> = Selector::new(vec![
                Scripted::always("low", Status::Failure),
                Scripted::new("mid", vec![Status::Running, Status::Running, Status::Success]),
            ]);
            let mut actor = TestActor::default();

            assert_eq!(sel.execute(&mut actor, &()), Status::Running);
            assert_eq!(sel.cursor(), 1);
            assert_eq!(sel.execute(&mut actor, &()), Status::Running);
            assert_eq!(sel.execute(&mut actor, &()), Status::Success);
            assert_eq!(sel.cursor(), 0);

            assert_eq!(actor.calls, vec!["low", "mid", "mid", "mid"]);
        }

        #[test]
        fn empty_fails() {
            let mut sel: Selector<TestActor, ()> = Selector::new(vec![]);
            assert_eq!(sel.execute(&mut TestActor::default(), &()), Status::Failure);
        }
    }

    mod nested_tests {
        use super::*;

        #[test]
        fn running_propagates_through_nested_composites() {
            let inner: Sequence<TestActor, ()> = Sequence::new(vec![
                Scripted::always("seek", Status::Success) as Node<TestActor, ()>,
                Scripted::new("formation", vec![Status::Running, Status::Success]),
            ]);
            let mut tree: Selector<TestActor, ()> = Selector::new(vec![
                Scripted::always("avoid", Status::Failure) as Node<TestActor, ()>,
                Box::new(inner),
            ]);
            let mut actor = TestActor::default();

            assert_eq!(tree.execute(&mut actor, &()), Status::Running);
            assert_eq!(tree.cursor(), 1);
            assert_eq!(tree.execute(&mut actor, &()), Status::Success);
            assert_eq!(tree.cursor(), 0);

            assert_eq!(actor.calls, vec!["avoid", "seek", "formation", "formation"]);
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn status_strategy() -> impl Strategy<Value = Status> {
            prop_oneof![
                Just(Status::Success),
                Just(Status::Failure),
                Just(Status::Running),
            ]
        }

        fn children(scripts: &[Vec<Status>]) -> Vec<Node<TestActor, ()>> {
            scripts
                .iter()
                .map(|script| Scripted::new("child", script.clone()) as Node<TestActor, ()>)
                .collect()
        }

        proptest! {
            #[test]
            fn sequence_cursor_resets_on_terminal_status(
                scripts in prop::collection::vec(
                    prop::collection::vec(status_strategy(), 1..6), 1..5),
                ticks in 1usize..12,
            ) {
                let mut seq: Sequence<TestActor, ()> = Sequence::new(children(&scripts));
                let mut actor = TestActor::default();
                for _ in 0..ticks {
                    let status = seq.execute(&mut actor, &());
                    if status.is_terminal() {
                        prop_assert_eq!(seq.cursor(), 0);
                    } else {
                        prop_assert!(seq.cursor() < seq.len());
                    }
                }
            }

            #[test]
            fn selector_cursor_resets_on_terminal_status(
                scripts in prop::collection::vec(
                    prop::collection::vec(status_strategy(), 1..6), 1..5),
                ticks in 1usize..12,
            ) {
                let mut sel: Selector<TestActor, ()> = Selector::new(children(&scripts));
                let mut actor = TestActor::default();
                for _ in 0..ticks {
                    let status = sel.execute(&mut actor, &());
                    if status.is_terminal() {
                        prop_assert_eq!(sel.cursor(), 0);
                    } else {
                        prop_assert!(sel.cursor() < sel.len());
                    }
                }
            }
        }
    }
}
