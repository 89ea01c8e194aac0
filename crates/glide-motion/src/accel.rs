//! Per-axis acceleration and dampening.
//!
//! Each velocity component is advanced on its own. While steering, the
//! component ramps toward `max_speed * direction` and settles there exactly;
//! while idle it bleeds off toward zero and stops there exactly.

use crate::config::MovementConfig;

/// Advances one velocity component by one frame.
///
/// `direction` is the matching component of the sampled steering direction,
/// so it lies in [-1, 1] and is 0 when that axis is not steered.
pub fn accelerate_axis(velocity: &mut f32, direction: f32, config: &MovementConfig, dt: f32) {
    if direction == 0.0 {
        dampen(velocity, config.dampening, dt);
    } else {
        steer(velocity, direction, config, dt);
    }
}

fn steer(velocity: &mut f32, direction: f32, config: &MovementConfig, dt: f32) {
    let target = config.max_speed * direction;
    if *velocity == target {
        return;
    }

    let target_magnitude = config.max_speed * direction.abs();
    let heading = sign(direction);
    let step = direction * config.acceleration * dt;

    if velocity.abs() < target_magnitude || sign(*velocity) != heading {
        // Below target, or still moving the other way
        *velocity += step;
        if *velocity * heading > target_magnitude {
            *velocity = target;
        }
    } else {
        // Above target (e.g. diagonal after axial), ease back down
        let next = *velocity - step;
        *velocity = if next * heading < target_magnitude {
            target
        } else {
            next
        };
    }
}

fn dampen(velocity: &mut f32, dampening: f32, dt: f32) {
    if *velocity == 0.0 {
        return;
    }

    let was_positive = *velocity >= 0.0;
    *velocity -= dampening * dt * sign(*velocity);

    if (*velocity >= 0.0) != was_positive {
        *velocity = 0.0;
    }
}

/// Sign with zero mapping to zero, unlike `f32::signum`.
fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::DIAGONAL_SCALE;
    use proptest::prelude::*;

    const DT: f32 = 0.1;

    fn config() -> MovementConfig {
        MovementConfig::default()
    }

    #[test]
    fn test_accelerates_from_rest() {
        let mut v = 0.0;
        accelerate_axis(&mut v, 1.0, &config(), DT);
        assert!((v - 2.0).abs() < 1e-6);

        let mut v = 0.0;
        accelerate_axis(&mut v, -1.0, &config(), DT);
        assert!((v + 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_snaps_to_max_speed_instead_of_overshooting() {
        let mut v = 4.95;
        accelerate_axis(&mut v, 1.0, &config(), DT);
        assert_eq!(v, 5.0);
    }

    #[test]
    fn test_at_max_speed_is_noop() {
        let mut v = 5.0;
        accelerate_axis(&mut v, 1.0, &config(), DT);
        assert_eq!(v, 5.0);

        let mut v = -5.0 * DIAGONAL_SCALE;
        accelerate_axis(&mut v, -DIAGONAL_SCALE, &config(), DT);
        assert_eq!(v, -5.0 * DIAGONAL_SCALE);
    }

    #[test]
    fn test_reversal_passes_through_zero() {
        let cfg = config();
        let mut v = -5.0;
        let mut history = Vec::new();
        for _ in 0..6 {
            accelerate_axis(&mut v, 1.0, &cfg, DT);
            history.push(v);
        }
        let expected = [-3.0, -1.0, 1.0, 3.0, 5.0, 5.0];
        for (got, want) in history.iter().zip(expected) {
            assert!((got - want).abs() < 1e-5, "{history:?}");
        }
    }

    #[test]
    fn test_eases_down_to_diagonal_target() {
        let cfg = config();
        let target = 5.0 * DIAGONAL_SCALE;

        let mut v = 5.0;
        accelerate_axis(&mut v, DIAGONAL_SCALE, &cfg, DT);
        // 5.0 - 1.414 = 3.586, still above 3.536
        assert!(v > target);
        assert!((v - (5.0 - DIAGONAL_SCALE * 2.0)).abs() < 1e-5);

        accelerate_axis(&mut v, DIAGONAL_SCALE, &cfg, DT);
        assert_eq!(v, target);
    }

    #[test]
    fn test_large_step_down_does_not_cross_target() {
        let cfg = MovementConfig::with_motion(200.0, 20.0, 5.0, 0.5);
        let mut v = 5.0;
        accelerate_axis(&mut v, DIAGONAL_SCALE, &cfg, DT);
        assert_eq!(v, 5.0 * DIAGONAL_SCALE);
    }

    #[test]
    fn test_dampening_stops_exactly_at_zero() {
        let mut v = 0.3;
        accelerate_axis(&mut v, 0.0, &config(), DT);
        assert_eq!(v, 0.0);

        let mut v = -0.3;
        accelerate_axis(&mut v, 0.0, &config(), DT);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_dampening_reduces_speed() {
        let mut v = 5.0;
        accelerate_axis(&mut v, 0.0, &config(), DT);
        assert!((v - 3.0).abs() < 1e-6);

        let mut v = -5.0;
        accelerate_axis(&mut v, 0.0, &config(), DT);
        assert!((v + 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_rest_is_noop() {
        let mut v = 0.0;
        accelerate_axis(&mut v, 0.0, &config(), DT);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_settles_without_chatter() {
        let cfg = config();
        let mut v = 0.0;
        for _ in 0..50 {
            accelerate_axis(&mut v, 1.0, &cfg, 0.016);
        }
        assert_eq!(v, 5.0);

        for _ in 0..50 {
            accelerate_axis(&mut v, 0.0, &cfg, 0.016);
        }
        assert_eq!(v, 0.0);
    }

    fn direction_strategy() -> impl Strategy<Value = f32> {
        prop_oneof![
            Just(1.0_f32),
            Just(-1.0_f32),
            Just(DIAGONAL_SCALE),
            Just(-DIAGONAL_SCALE),
        ]
    }

    proptest! {
        #[test]
        fn prop_steering_never_exceeds_max_speed(
            start in -5.0_f32..=5.0,
            direction in direction_strategy(),
            acceleration in 0.0_f32..200.0,
            dt in 0.0_f32..0.5,
        ) {
            let cfg = MovementConfig::with_motion(acceleration, 20.0, 5.0, 0.5);
            let mut v = start;
            accelerate_axis(&mut v, direction, &cfg, dt);
            prop_assert!(v.abs() <= 5.0, "v = {}", v);
        }

        #[test]
        fn prop_dampening_never_crosses_zero(
            start in -10.0_f32..10.0,
            dampening in 0.0_f32..200.0,
            dt in 0.0_f32..0.5,
        ) {
            let cfg = MovementConfig::with_motion(20.0, dampening, 5.0, 0.5);
            let mut v = start;
            accelerate_axis(&mut v, 0.0, &cfg, dt);
            prop_assert!(v.abs() <= start.abs());
            prop_assert!(v == 0.0 || (v > 0.0) == (start > 0.0));
        }
    }
}
