//! Movement tuning configuration.
//!
//! Tunables are fixed once a controller is built. They deserialize from TOML,
//! usually as a table inside the host's config file.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Default acceleration in units per second squared.
pub const DEFAULT_ACCELERATION: f32 = 20.0;
/// Default dampening in units per second squared.
pub const DEFAULT_DAMPENING: f32 = 20.0;
/// Default maximum speed per axis in units per second.
pub const DEFAULT_MAX_SPEED: f32 = 5.0;
/// Default fraction of speed kept after a wall bounce.
pub const DEFAULT_BOUNCE_COEFFICIENT: f32 = 0.5;
/// Default sprite-scale to world-unit divisor.
pub const DEFAULT_SCALE_DIVISOR: f32 = 100.0;

/// Movement tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// How much velocity increases per second while steering
    pub acceleration: f32,
    /// How much velocity decreases per second while idle
    pub dampening: f32,
    /// Maximum speed along a steered axis
    pub max_speed: f32,
    /// Fraction of speed kept (and reversed) when hitting a wall
    pub bounce_coefficient: f32,
    /// Body scale is divided by this to get world units
    pub scale_divisor: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            acceleration: DEFAULT_ACCELERATION,
            dampening: DEFAULT_DAMPENING,
            max_speed: DEFAULT_MAX_SPEED,
            bounce_coefficient: DEFAULT_BOUNCE_COEFFICIENT,
            scale_divisor: DEFAULT_SCALE_DIVISOR,
        }
    }
}

impl MovementConfig {
    /// Creates a configuration with custom motion values.
    #[must_use]
    pub fn with_motion(
        acceleration: f32,
        dampening: f32,
        max_speed: f32,
        bounce_coefficient: f32,
    ) -> Self {
        Self {
            acceleration,
            dampening,
            max_speed,
            bounce_coefficient,
            ..Default::default()
        }
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the controller cannot work with.
    ///
    /// A bounce coefficient above 1 is accepted (walls add energy) but logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("acceleration", self.acceleration)?;
        non_negative("dampening", self.dampening)?;
        non_negative("max_speed", self.max_speed)?;
        non_negative("bounce_coefficient", self.bounce_coefficient)?;

        if !self.scale_divisor.is_finite() || self.scale_divisor <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "scale_divisor",
                value: self.scale_divisor,
                reason: "must be positive and finite",
            });
        }

        if self.bounce_coefficient > 1.0 {
            warn!(
                bounce_coefficient = self.bounce_coefficient,
                "Bounce coefficient above 1 adds energy on every wall hit"
            );
        }

        Ok(())
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(ConfigError::InvalidParameter {
            name,
            value,
            reason: "must be non-negative",
        });
    }
    Ok(())
}
