//! Steering direction sampling.

use glam::Vec2;

use crate::input::{InputSource, LogicalKey};

/// Per-axis scale applied when both axes are steered, cos(45°).
///
/// Keeps diagonal steering at the same magnitude as axial steering.
pub const DIAGONAL_SCALE: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// Samples the steering direction from the current input state.
///
/// Each axis is -1, 0 or +1 with opposing keys cancelling. When both axes are
/// non-zero each is scaled by [`DIAGONAL_SCALE`].
#[must_use]
pub fn sample_direction<I: InputSource + ?Sized>(input: &I) -> Vec2 {
    let mut direction = Vec2::ZERO;

    if input.is_pressed(LogicalKey::Up) {
        direction.y += 1.0;
    }
    if input.is_pressed(LogicalKey::Down) {
        direction.y -= 1.0;
    }
    if input.is_pressed(LogicalKey::Right) {
        direction.x += 1.0;
    }
    if input.is_pressed(LogicalKey::Left) {
        direction.x -= 1.0;
    }

    if direction.x != 0.0 && direction.y != 0.0 {
        direction *= DIAGONAL_SCALE;
    }

    direction
}
