//! Test helpers: a scripted random source and small scene builders.

use std::collections::VecDeque;

use glam::Vec2;

use crate::config::{DogSpec, FlyerSpec, GoalConfig, GoalSpawn, SceneConfig};
use crate::random::RandomSource;

// =============================================================================
// Scripted randomness
// =============================================================================

/// A [`RandomSource`] that replays queued values.
///
/// Each kind of draw has its own queue. When a queue runs dry the fallback
/// is the lowest legal value for indices and ranges and `0.99` for unit
/// draws, so chance rolls fail unless a test asks otherwise.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    indices: VecDeque<usize>,
    durations: VecDeque<u32>,
    units: VecDeque<f32>,
    floats: VecDeque<f32>,
    draws: usize,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indices(mut self, values: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(values);
        self
    }

    pub fn durations(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.durations.extend(values);
        self
    }

    pub fn units(mut self, values: impl IntoIterator<Item = f32>) -> Self {
        self.units.extend(values);
        self
    }

    pub fn floats(mut self, values: impl IntoIterator<Item = f32>) -> Self {
        self.floats.extend(values);
        self
    }

    /// Total draws made so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f32 {
        self.draws += 1;
        self.units.pop_front().unwrap_or(0.99)
    }

    fn index(&mut self, len: usize) -> usize {
        self.draws += 1;
        self.indices
            .pop_front()
            .unwrap_or(0)
            .min(len.saturating_sub(1))
    }

    fn range_u32(&mut self, min: u32, max: u32) -> u32 {
        self.draws += 1;
        self.durations
            .pop_front()
            .map_or(min, |value| value.clamp(min, max.max(min)))
    }

    fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        self.draws += 1;
        self.floats
            .pop_front()
            .map_or(min, |value| value.clamp(min, max.max(min)))
    }
}

// =============================================================================
// Scene builders
// =============================================================================

/// One default dog at `x` on the ground line, no goals, no camera.
pub fn lone_dog_config(x: f32) -> SceneConfig {
    SceneConfig {
        dogs: vec![DogSpec {
            name: "harley".to_owned(),
            position: Vec2::new(x, 960.0),
            steering: Default::default(),
            ground: Default::default(),
        }],
        goals: Vec::new(),
        camera: None,
        player: None,
        ..SceneConfig::default()
    }
}

/// A leader and a wingman biplane over a few treats, camera on the leader.
pub fn squadron_config(seed: u64) -> SceneConfig {
    SceneConfig {
        seed,
        dogs: Vec::new(),
        flyers: vec![
            FlyerSpec {
                name: "camel".to_owned(),
                position: Vec2::new(600.0, 400.0),
                heading: 0.0,
                flight: Default::default(),
                pilot: Default::default(),
                wingman_of: None,
            },
            FlyerSpec {
                name: "pup".to_owned(),
                position: Vec2::new(450.0, 470.0),
                heading: 0.0,
                flight: Default::default(),
                pilot: Default::default(),
                wingman_of: Some(0),
            },
        ],
        goals: vec![GoalSpawn {
            count: 4,
            config: GoalConfig::default(),
        }],
        player: Some(0),
        ..SceneConfig::default()
    }
}
