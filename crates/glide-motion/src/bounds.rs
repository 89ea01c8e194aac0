//! Viewport bounds and wall bouncing.
//!
//! Bounds are derived once from the camera's orthographic half-height. When
//! no camera is available the bounds stay unset and the entity moves freely.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Source of the camera's orthographic half-height.
pub trait ViewportProvider {
    /// Returns the half-height, or `None` when no camera is available.
    fn try_half_height(&self) -> Option<f32>;
}

/// Orthographic camera described by its half-height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicViewport {
    /// Orthographic size (half the visible height)
    pub half_height: f32,
}

impl OrthographicViewport {
    /// Creates a viewport with the given half-height.
    #[must_use]
    pub const fn new(half_height: f32) -> Self {
        Self { half_height }
    }
}

impl ViewportProvider for OrthographicViewport {
    fn try_half_height(&self) -> Option<f32> {
        Some(self.half_height)
    }
}

/// Host without a camera.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissingViewport;

impl ViewportProvider for MissingViewport {
    fn try_half_height(&self) -> Option<f32> {
        None
    }
}

impl ViewportProvider for Option<f32> {
    fn try_half_height(&self) -> Option<f32> {
        *self
    }
}

/// World-space walls of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    /// Upper wall (+y)
    pub top: f32,
    /// Lower wall (-y)
    pub bottom: f32,
    /// Left wall (-x)
    pub left: f32,
    /// Right wall (+x)
    pub right: f32,
}

impl ViewportBounds {
    /// Creates bounds from explicit walls.
    #[must_use]
    pub const fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Derives bounds from an orthographic half-height.
    ///
    /// Horizontal walls sit at twice the vertical extent, so the playfield is
    /// always 2:1 regardless of the window shape. Returns `None` for a
    /// half-height that is not positive and finite.
    #[must_use]
    pub fn from_half_height(size: f32) -> Option<Self> {
        if !size.is_finite() || size <= 0.0 {
            return None;
        }
        let top = size;
        let bottom = -size;
        Some(Self {
            top,
            bottom,
            left: bottom * 2.0,
            right: top * 2.0,
        })
    }

    /// Queries a provider and derives bounds from it.
    #[must_use]
    pub fn from_provider<V: ViewportProvider + ?Sized>(viewport: &V) -> Option<Self> {
        viewport
            .try_half_height()
            .and_then(Self::from_half_height)
    }

    /// Width of the playfield.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height of the playfield.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }
}

/// Walls touched during one resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeContacts {
    /// Hit the top wall
    pub top: bool,
    /// Hit the bottom wall
    pub bottom: bool,
    /// Hit the right wall
    pub right: bool,
    /// Hit the left wall
    pub left: bool,
}

impl EdgeContacts {
    /// Whether any wall was hit.
    #[must_use]
    pub fn any(&self) -> bool {
        self.top || self.bottom || self.right || self.left
    }

    /// Whether the vertical velocity was reflected.
    #[must_use]
    pub fn hit_vertical(&self) -> bool {
        self.top || self.bottom
    }

    /// Whether the horizontal velocity was reflected.
    #[must_use]
    pub fn hit_horizontal(&self) -> bool {
        self.right || self.left
    }
}

/// Pushes the body back inside the bounds and bounces it off any wall it
/// crossed.
///
/// Walls are checked in the order top, bottom, right, left; each check sees
/// the position and velocity left by the previous one. A single pass, so a
/// body larger than the viewport ends up clamped against the last wall
/// checked on that axis.
///
/// Does nothing when `bounds` is `None`.
pub fn resolve_bounds(
    position: &mut Vec2,
    velocity: &mut Vec2,
    half_extents: Vec2,
    bounds: Option<&ViewportBounds>,
    bounce_coefficient: f32,
) -> EdgeContacts {
    let mut contacts = EdgeContacts::default();
    let Some(bounds) = bounds else {
        return contacts;
    };

    // Compare against the clamp targets so a resolved body is a fixed point.
    let max_y = bounds.top - half_extents.y;
    if position.y > max_y {
        position.y = max_y;
        velocity.y *= -bounce_coefficient;
        contacts.top = true;
    }

    let min_y = bounds.bottom + half_extents.y;
    if position.y < min_y {
        position.y = min_y;
        velocity.y *= -bounce_coefficient;
        contacts.bottom = true;
    }

    let max_x = bounds.right - half_extents.x;
    if position.x > max_x {
        position.x = max_x;
        velocity.x *= -bounce_coefficient;
        contacts.right = true;
    }

    let min_x = bounds.left + half_extents.x;
    if position.x < min_x {
        position.x = min_x;
        velocity.x *= -bounce_coefficient;
        contacts.left = true;
    }

    contacts
}
