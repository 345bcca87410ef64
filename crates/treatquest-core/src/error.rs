//! Configuration errors.
//!
//! Runtime ticks are infallible: empty goal lists, missing peers or an
//! unbound camera degrade to no-ops. The only failures the core reports are
//! malformed tunables, and those are caught when a controller, integrator or
//! camera is constructed.

use thiserror::Error;

/// A tunable failed validation at construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A value was NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NotFinite {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f32,
    },

    /// A value that must be strictly positive was zero or negative.
    #[error("{field} must be positive, got {value}")]
    NotPositive {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f32,
    },

    /// A value that must be zero or more was negative.
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f32,
    },

    /// A value fell outside its closed interval.
    #[error("{field} must lie in [{min}, {max}], got {value}")]
    OutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f32,
        /// Lower bound
        min: f32,
        /// Upper bound
        max: f32,
    },

    /// Stall speed must leave room for flight below max speed.
    #[error("stall speed {stall_speed} must be below max speed {max_speed}")]
    StallSpeedNotBelowMax {
        /// Configured stall speed
        stall_speed: f32,
        /// Configured max speed
        max_speed: f32,
    },

    /// A speed or impulse would immediately violate the max-speed clamp.
    #[error("{field} ({value}) exceeds max speed {max_speed}")]
    ExceedsMaxSpeed {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f32,
        /// The max speed it was checked against
        max_speed: f32,
    },

    /// A continuous range had its bounds swapped.
    #[error("{field} is inverted: {min} > {max}")]
    InvertedRange {
        /// Name of the offending field
        field: &'static str,
        /// Lower bound as configured
        min: f32,
        /// Upper bound as configured
        max: f32,
    },

    /// A tick-count range was empty or started at zero.
    #[error("{field} must be a non-empty range of at least one tick, got {min}..={max}")]
    InvalidDuration {
        /// Name of the offending field
        field: &'static str,
        /// Lower bound as configured
        min: u32,
        /// Upper bound as configured
        max: u32,
    },

    /// A scene referenced a flyer that does not exist.
    #[error("flyer {flyer} follows unknown wingman index {index}")]
    UnknownWingman {
        /// Index of the flyer holding the reference
        flyer: usize,
        /// The dangling index
        index: usize,
    },

    /// A scene named a player actor index that does not exist.
    #[error("player index {index} is out of range for {count} actors")]
    UnknownPlayer {
        /// The dangling index
        index: usize,
        /// Number of actors in the scene
        count: usize,
    },
}

pub(crate) fn ensure_finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

pub(crate) fn ensure_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    ensure_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

pub(crate) fn ensure_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    ensure_finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

/// Accepts `[0, 1]`.
pub(crate) fn ensure_probability(field: &'static str, value: f32) -> Result<(), ConfigError> {
    ensure_finite(field, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}

/// Accepts `(0, 1]`: a lerp factor of zero would never move.
pub(crate) fn ensure_fraction(field: &'static str, value: f32) -> Result<(), ConfigError> {
    ensure_positive(field, value)?;
    ensure_probability(field, value)
}

pub(crate) fn ensure_within_max(
    field: &'static str,
    value: f32,
    max_speed: f32,
) -> Result<(), ConfigError> {
    if value <= max_speed {
        Ok(())
    } else {
        Err(ConfigError::ExceedsMaxSpeed {
            field,
            value,
            max_speed,
        })
    }
}
