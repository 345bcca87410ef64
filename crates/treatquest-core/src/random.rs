//! Injectable randomness.
//!
//! Every random decision in the core (state re-rolls, durations, facing,
//! climb jumps, respawn positions) goes through [`RandomSource`]. Production
//! code uses a seeded [`ChaCha8Rng`] so runs are reproducible; tests can pass
//! a scripted source and assert exact outcomes.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of the random draws the simulation makes.
///
/// The trait is object safe; the core takes `&mut dyn RandomSource`.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// Uniform index in `0..len`. Returns 0 when `len` is 0.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform integer in `[min, max]`.
    fn range_u32(&mut self, min: u32, max: u32) -> u32;

    /// Uniform float in `[min, max]`.
    fn range_f32(&mut self, min: f32, max: f32) -> f32;

    /// Fair coin flip.
    fn coin(&mut self) -> bool {
        self.unit() < 0.5
    }
}

impl<R: RngCore> RandomSource for R {
    fn unit(&mut self) -> f32 {
        self.gen::<f32>()
    }

    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.gen_range(0..len)
        }
    }

    fn range_u32(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            min
        } else {
            self.gen_range(min..=max)
        }
    }

    fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            min
        } else {
            self.gen_range(min..=max)
        }
    }
}

/// Deterministic generator for the given seed.
#[must_use]
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
