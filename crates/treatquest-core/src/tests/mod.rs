//! Crate-level tests.
//!
//! - `determinism.rs`: same seed, same run
//! - `integration.rs`: full-tick scenarios across modules
//! - `helpers.rs`: scripted randomness and scene builders

mod helpers;
mod integration;

pub use helpers::*;
