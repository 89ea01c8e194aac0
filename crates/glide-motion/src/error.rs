//! Error types for Glide.

use thiserror::Error;

/// Top-level error type for motion operations.
#[derive(Debug, Error)]
pub enum MotionError {
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration parsing and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file contents are not valid TOML for this config
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A tunable is outside its accepted range
    #[error("Invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f32,
        /// Why the value was rejected
        reason: &'static str,
    },
}

/// Result type alias for motion operations.
pub type MotionResult<T> = Result<T, MotionError>;
