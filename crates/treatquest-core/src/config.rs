//! Tunables for every subsystem.
//!
//! Each config is a plain serde struct whose `Default` carries the values
//! the park and flight scenes were tuned with. Quantities are per tick at the
//! nominal 60 Hz rate unless the field says otherwise. Call `validate` (the
//! constructors that take a config do so for you) to reject malformed values
//! up front.

use std::f32::consts::FRAC_PI_4;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{
    ensure_finite, ensure_fraction, ensure_non_negative, ensure_positive, ensure_probability,
    ConfigError,
};
use crate::goal::SpawnRegion;
use crate::math::Rect;
use crate::world::Environment;

/// Width of the dog park in world units.
pub const PARK_WIDTH: f32 = 1920.0;
/// Height of the dog park in world units.
pub const PARK_HEIGHT: f32 = 1080.0;

// =============================================================================
// Steering
// =============================================================================

/// Tunables for the timed decision/steering controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringConfig {
    /// Horizontal run speed
    pub speed: f32,
    /// Goals farther than this are ignored by goal attraction
    pub attraction_radius: f32,
    /// Peers closer than this trigger crowding avoidance (`None` disables it)
    pub crowding_radius: Option<f32>,
    /// Upward velocity applied by a jump
    pub jump_impulse: f32,
    /// A goal must be this far above the entity to prompt a climb jump
    pub climb_jump_height: f32,
    /// Per-tick chance of a climb jump while a goal is overhead
    pub climb_jump_chance: f32,
    /// Shortest state duration in ticks
    pub min_duration: u32,
    /// Longest state duration in ticks
    pub max_duration: u32,
    /// Left edge of the horizontal play area
    pub play_area_min_x: f32,
    /// Right edge of the horizontal play area
    pub play_area_max_x: f32,
    /// Sleep while the environment reports night
    pub sleep_at_night: bool,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            speed: 3.5,
            attraction_radius: 400.0,
            crowding_radius: Some(100.0),
            jump_impulse: 13.0,
            climb_jump_height: 50.0,
            climb_jump_chance: 0.15,
            min_duration: 60,
            max_duration: 200,
            play_area_min_x: 100.0,
            play_area_max_x: PARK_WIDTH - 100.0,
            sleep_at_night: false,
        }
    }
}

impl SteeringConfig {
    /// Same defaults with a different run speed.
    #[must_use]
    pub fn with_speed(speed: f32) -> Self {
        Self {
            speed,
            ..Default::default()
        }
    }

    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("steering.speed", self.speed)?;
        ensure_non_negative("steering.attraction_radius", self.attraction_radius)?;
        if let Some(radius) = self.crowding_radius {
            ensure_non_negative("steering.crowding_radius", radius)?;
        }
        ensure_non_negative("steering.jump_impulse", self.jump_impulse)?;
        ensure_non_negative("steering.climb_jump_height", self.climb_jump_height)?;
        ensure_probability("steering.climb_jump_chance", self.climb_jump_chance)?;
        if self.min_duration == 0 || self.min_duration > self.max_duration {
            return Err(ConfigError::InvalidDuration {
                field: "steering.duration",
                min: self.min_duration,
                max: self.max_duration,
            });
        }
        ensure_finite("steering.play_area_min_x", self.play_area_min_x)?;
        ensure_finite("steering.play_area_max_x", self.play_area_max_x)?;
        if self.play_area_min_x > self.play_area_max_x {
            return Err(ConfigError::InvertedRange {
                field: "steering.play_area",
                min: self.play_area_min_x,
                max: self.play_area_max_x,
            });
        }
        Ok(())
    }
}

// =============================================================================
// Ground kinematics
// =============================================================================

/// Tunables for the plain kinematic (walking/jumping) integrator.
///
/// Zero gravity with no ground line gives the floating variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Y coordinate of the ground line (`None` for open space)
    pub ground_y: Option<f32>,
    /// Velocity magnitude never exceeds this
    pub max_speed: f32,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            ground_y: Some(PARK_HEIGHT - 120.0),
            max_speed: 16.0,
        }
    }
}

impl GroundConfig {
    /// Floating variant: no gravity, no ground.
    #[must_use]
    pub fn zero_gravity(max_speed: f32) -> Self {
        Self {
            gravity: 0.0,
            ground_y: None,
            max_speed,
        }
    }

    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_negative("ground.gravity", self.gravity)?;
        if let Some(ground_y) = self.ground_y {
            ensure_finite("ground.ground_y", ground_y)?;
        }
        ensure_positive("ground.max_speed", self.max_speed)
    }
}

// =============================================================================
// Flight
// =============================================================================

/// Aerodynamic coefficients for the biplane integrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Lift per speed squared
    pub lift_coefficient: f32,
    /// Drag per speed squared
    pub drag_coefficient: f32,
    /// Below this speed a steep climb stalls
    pub stall_speed: f32,
    /// Speed is clamped to this after every step
    pub max_speed: f32,
    /// Heading change in radians per second at full stick
    pub turn_rate: f32,
    /// Share of turn authority left while stalled
    pub stall_turn_factor: f32,
    /// Extra downward velocity applied each stalled tick
    pub stall_drop: f32,
    /// Pitch above the horizon (radians) beyond which a slow plane stalls
    pub stall_angle: f32,
    /// Target bank angle as a share of heading
    pub bank_factor: f32,
    /// Per-tick lerp factor toward the target bank angle
    pub bank_lerp: f32,
    /// Thrust applied each tick while steering toward an intent
    pub cruise_thrust: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            gravity: 0.15,
            lift_coefficient: 0.0003,
            drag_coefficient: 0.001,
            stall_speed: 3.0,
            max_speed: 12.0,
            turn_rate: 2.0,
            stall_turn_factor: 0.3,
            stall_drop: 0.3,
            stall_angle: FRAC_PI_4,
            bank_factor: 0.5,
            bank_lerp: 0.1,
            cruise_thrust: 0.2,
        }
    }
}

impl FlightConfig {
    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, including
    /// [`ConfigError::StallSpeedNotBelowMax`] when the stall speed leaves no
    /// flyable band.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_negative("flight.gravity", self.gravity)?;
        ensure_non_negative("flight.lift_coefficient", self.lift_coefficient)?;
        ensure_non_negative("flight.drag_coefficient", self.drag_coefficient)?;
        ensure_positive("flight.max_speed", self.max_speed)?;
        ensure_non_negative("flight.stall_speed", self.stall_speed)?;
        if self.stall_speed >= self.max_speed {
            return Err(ConfigError::StallSpeedNotBelowMax {
                stall_speed: self.stall_speed,
                max_speed: self.max_speed,
            });
        }
        ensure_positive("flight.turn_rate", self.turn_rate)?;
        ensure_probability("flight.stall_turn_factor", self.stall_turn_factor)?;
        ensure_non_negative("flight.stall_drop", self.stall_drop)?;
        ensure_finite("flight.stall_angle", self.stall_angle)?;
        ensure_finite("flight.bank_factor", self.bank_factor)?;
        ensure_fraction("flight.bank_lerp", self.bank_lerp)?;
        ensure_non_negative("flight.cruise_thrust", self.cruise_thrust)
    }
}

// =============================================================================
// Behavior-tree pilots
// =============================================================================

/// Parameters for the leaves of the default behavior tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PilotConfig {
    /// Speed of the intent written by every leaf
    pub cruise_speed: f32,
    /// Goals beyond this are not sought
    pub seek_radius: f32,
    /// Seeking succeeds once this close to the goal
    pub arrive_distance: f32,
    /// Peers closer than this are avoided
    pub avoid_radius: f32,
    /// Formation slot relative to a leader facing right
    pub formation_offset: Vec2,
    /// Within this distance of the slot the wingman counts as in formation
    pub formation_tolerance: f32,
}

impl Default for PilotConfig {
    fn default() -> Self {
        Self {
            cruise_speed: 6.0,
            seek_radius: 600.0,
            arrive_distance: 45.0,
            avoid_radius: 80.0,
            formation_offset: Vec2::new(-60.0, 30.0),
            formation_tolerance: 20.0,
        }
    }
}

impl PilotConfig {
    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("pilot.cruise_speed", self.cruise_speed)?;
        ensure_non_negative("pilot.seek_radius", self.seek_radius)?;
        ensure_non_negative("pilot.arrive_distance", self.arrive_distance)?;
        ensure_non_negative("pilot.avoid_radius", self.avoid_radius)?;
        ensure_finite("pilot.formation_offset.x", self.formation_offset.x)?;
        ensure_finite("pilot.formation_offset.y", self.formation_offset.y)?;
        ensure_non_negative("pilot.formation_tolerance", self.formation_tolerance)
    }
}

// =============================================================================
// Camera
// =============================================================================

/// Tunables for the tracking camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Viewport width in world units
    pub viewport_width: f32,
    /// Viewport height in world units
    pub viewport_height: f32,
    /// The camera never shows anything outside this rectangle
    pub world: Rect,
    /// Share of the remaining distance closed per update
    pub lerp: f32,
    /// The camera holds still while the target stays within this radius of focus
    pub deadzone: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            world: Rect::new(0.0, 0.0, 2000.0, 1200.0),
            lerp: 0.1,
            deadzone: 100.0,
        }
    }
}

impl CameraConfig {
    /// Viewport size as a vector.
    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("camera.viewport_width", self.viewport_width)?;
        ensure_positive("camera.viewport_height", self.viewport_height)?;
        ensure_finite("camera.world.x", self.world.x)?;
        ensure_finite("camera.world.y", self.world.y)?;
        ensure_positive("camera.world.width", self.world.width)?;
        ensure_positive("camera.world.height", self.world.height)?;
        ensure_fraction("camera.lerp", self.lerp)?;
        ensure_non_negative("camera.deadzone", self.deadzone)
    }
}

// =============================================================================
// Goals
// =============================================================================

/// Tunables for one kind of collectible goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalConfig {
    /// Points awarded to the collector
    pub value: u32,
    /// Collection happens within this distance
    pub radius: f32,
    /// Ticks a collected goal stays inactive
    pub respawn_ticks: u32,
    /// Where the goal reappears
    pub spawn_region: SpawnRegion,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            value: 1,
            radius: 45.0,
            respawn_ticks: 300,
            spawn_region: SpawnRegion::new(
                Vec2::new(150.0, PARK_HEIGHT - 220.0),
                Vec2::new(PARK_WIDTH - 150.0, PARK_HEIGHT - 130.0),
            ),
        }
    }
}

impl GoalConfig {
    /// The rare five-point golden treat.
    #[must_use]
    pub fn golden() -> Self {
        Self {
            value: 5,
            radius: 50.0,
            respawn_ticks: 2700,
            spawn_region: SpawnRegion::new(
                Vec2::new(200.0, PARK_HEIGHT - 220.0),
                Vec2::new(PARK_WIDTH - 200.0, PARK_HEIGHT - 130.0),
            ),
        }
    }

    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_negative("goal.radius", self.radius)?;
        if self.respawn_ticks == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "goal.respawn_ticks",
                min: 0,
                max: 0,
            });
        }
        self.spawn_region.validate()
    }
}

// =============================================================================
// Scene
// =============================================================================

/// One steering-controlled dog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogSpec {
    /// Display name, carried into snapshots
    pub name: String,
    /// Starting position
    pub position: Vec2,
    /// Controller tunables
    #[serde(default)]
    pub steering: SteeringConfig,
    /// Kinematic tunables
    #[serde(default)]
    pub ground: GroundConfig,
}

/// One behavior-tree-controlled biplane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlyerSpec {
    /// Display name, carried into snapshots
    pub name: String,
    /// Starting position
    pub position: Vec2,
    /// Starting heading in radians
    #[serde(default)]
    pub heading: f32,
    /// Aerodynamics
    #[serde(default)]
    pub flight: FlightConfig,
    /// Behavior-tree leaf parameters
    #[serde(default)]
    pub pilot: PilotConfig,
    /// Index (into `flyers`) of the leader to hold formation on
    #[serde(default)]
    pub wingman_of: Option<usize>,
}

/// A batch of identical goals scattered at scene setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSpawn {
    /// How many to place
    pub count: usize,
    /// What they are worth and where they respawn
    #[serde(default)]
    pub config: GoalConfig,
}

/// Everything needed to build a [`Scene`](crate::scene::Scene).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Master seed for every random draw
    pub seed: u64,
    /// Steering-controlled actors (ids assigned first, in order)
    pub dogs: Vec<DogSpec>,
    /// Tree-controlled flyers (ids assigned after the dogs)
    pub flyers: Vec<FlyerSpec>,
    /// Goal batches
    pub goals: Vec<GoalSpawn>,
    /// Camera, if the scene renders through one
    pub camera: Option<CameraConfig>,
    /// Index of the actor the camera follows
    pub player: Option<usize>,
    /// Initial environmental flags
    pub environment: Environment,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let ground = GroundConfig::default();
        let start_y = PARK_HEIGHT - 150.0;
        Self {
            seed: 0,
            dogs: vec![
                DogSpec {
                    name: "harley".to_owned(),
                    position: Vec2::new(PARK_WIDTH / 3.0, start_y),
                    steering: SteeringConfig::with_speed(3.5),
                    ground: ground.clone(),
                },
                DogSpec {
                    name: "shanti".to_owned(),
                    position: Vec2::new(2.0 * PARK_WIDTH / 3.0, start_y),
                    steering: SteeringConfig::with_speed(2.8),
                    ground,
                },
            ],
            flyers: Vec::new(),
            goals: vec![
                GoalSpawn {
                    count: 12,
                    config: GoalConfig::default(),
                },
                GoalSpawn {
                    count: 1,
                    config: GoalConfig::golden(),
                },
            ],
            camera: Some(CameraConfig {
                world: Rect::new(0.0, 0.0, PARK_WIDTH, PARK_HEIGHT),
                ..CameraConfig::default()
            }),
            player: Some(0),
            environment: Environment::default(),
        }
    }
}
