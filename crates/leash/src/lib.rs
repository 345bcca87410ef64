//! # Leash
//!
//! Composable behavior trees with running-state persistence.
//!
//! Nodes are evaluated top-down once per tick against a mutable actor and a
//! read-only world. Unlike purely instantaneous trees, a leaf may report
//! [`Status::Running`] for work that spans several ticks ("fly until within
//! range"). Composites remember which child was running through a cursor and
//! resume there on the next tick instead of restarting from the first child.
//!
//! ## Architecture
//!
//! - [`Behavior`]: the node contract, generic over actor `A` and world `W`
//! - [`Status`]: `Success`, `Failure` or `Running`
//! - Composites: [`Sequence`] (and-then), [`Selector`] (try in priority order)
//! - Decorators: [`Inverter`]
//! - Closure leaves: [`Condition`], [`Action`]
//!
//! ## Cursor Rules
//!
//! The cursor is the only state a tree keeps between ticks:
//!
//! - preserved whenever a composite returns `Running`
//! - reset to zero whenever a composite returns `Success` or `Failure`
//!
//! ## Example
//!
//! ```
//! use leash::builder::{action, condition, sequence};
//! use leash::{Behavior, Status};
//!
//! struct Counter {
//!     value: u32,
//! }
//!
//! let mut tree = sequence(vec![
//!     condition(|actor: &Counter, _world: &()| actor.value < 10),
//!     action(|actor: &mut Counter, _world: &()| {
//!         actor.value += 1;
//!         Status::Success
//!     }),
//! ]);
//!
//! let mut counter = Counter { value: 0 };
//! assert_eq!(tree.execute(&mut counter, &()), Status::Success);
//! assert_eq!(counter.value, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod leaf;
pub mod status;

pub use behavior::{Behavior, Node};
pub use composite::{Selector, Sequence};
pub use decorator::Inverter;
pub use leaf::{Action, Condition};
pub use status::Status;
