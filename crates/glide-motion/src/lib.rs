//! # Glide Motion
//!
//! Per-frame movement controller for a single player-controlled body in a 2D
//! viewport.
//!
//! This crate provides:
//! - Directional input abstraction with rebindable keys
//! - Diagonal-normalized steering direction sampling
//! - Per-axis acceleration and dampening with exact settling
//! - Viewport bounds with lossy wall bouncing
//! - The controller that ties these together once per tick
//! - Tuning configuration (TOML) and error types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod accel;
pub mod body;
pub mod bounds;
pub mod config;
pub mod controller;
pub mod direction;
pub mod error;
pub mod input;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::accel::*;
    pub use crate::body::*;
    pub use crate::bounds::*;
    pub use crate::config::*;
    pub use crate::controller::*;
    pub use crate::direction::*;
    pub use crate::error::*;
    pub use crate::input::*;
}

pub use prelude::*;
