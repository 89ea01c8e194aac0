//! Physics body state shared with the host.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position and velocity of the controlled entity.
///
/// The host owns this storage. The controller rewrites `position` and
/// `velocity` once per tick and only reads `scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    /// Center position in world units
    pub position: Vec2,
    /// Velocity in world units per second
    pub velocity: Vec2,
    /// Visual scale in host units
    pub scale: Vec2,
}

impl BodyState {
    /// Creates a body at rest.
    #[must_use]
    pub fn new(position: Vec2, scale: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            scale,
        }
    }

    /// Half the body's size in world units.
    #[must_use]
    pub fn half_extents(&self, scale_divisor: f32) -> Vec2 {
        self.scale / scale_divisor / 2.0
    }

    /// Moves the body by its velocity over `dt` seconds.
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// Current speed.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}
