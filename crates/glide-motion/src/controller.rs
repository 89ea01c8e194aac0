//! Movement controller for the player entity.
//!
//! One [`MovementController::tick`] per simulation step:
//! sample direction → accelerate each axis → resolve viewport bounds →
//! write position and velocity back to the body.

use glam::Vec2;
use tracing::{debug, info, trace, warn};

use crate::accel::accelerate_axis;
use crate::body::BodyState;
use crate::bounds::{resolve_bounds, EdgeContacts, ViewportBounds, ViewportProvider};
use crate::config::MovementConfig;
use crate::direction::sample_direction;
use crate::error::MotionResult;
use crate::input::InputSource;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickReport {
    /// Steering direction sampled this tick
    pub direction: Vec2,
    /// Walls the body bounced off
    pub contacts: EdgeContacts,
}

/// Outcome of reading the viewport at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewportStatus {
    Ready(ViewportBounds),
    /// A camera exists but its size is unusable
    Degenerate(f32),
    Missing,
}

impl ViewportStatus {
    fn read<V: ViewportProvider + ?Sized>(viewport: &V) -> Self {
        match viewport.try_half_height() {
            None => Self::Missing,
            Some(size) => ViewportBounds::from_half_height(size)
                .map_or(Self::Degenerate(size), Self::Ready),
        }
    }
}

/// Drives a single body from directional input.
#[derive(Debug, Clone)]
pub struct MovementController {
    config: MovementConfig,
    /// `None` when no viewport was available at construction.
    bounds: Option<ViewportBounds>,
}

impl MovementController {
    /// Creates a controller, validating the tuning and reading the viewport
    /// once.
    ///
    /// A missing viewport is not an error: the controller runs without walls.
    pub fn new<V: ViewportProvider + ?Sized>(
        config: MovementConfig,
        viewport: &V,
    ) -> MotionResult<Self> {
        config.validate()?;
        Ok(Self::build(config, viewport))
    }

    /// Creates a controller with the default tuning.
    #[must_use]
    pub fn with_defaults<V: ViewportProvider + ?Sized>(viewport: &V) -> Self {
        Self::build(MovementConfig::default(), viewport)
    }

    fn build<V: ViewportProvider + ?Sized>(config: MovementConfig, viewport: &V) -> Self {
        let bounds = match ViewportStatus::read(viewport) {
            ViewportStatus::Ready(b) => {
                info!(
                    top = b.top,
                    bottom = b.bottom,
                    left = b.left,
                    right = b.right,
                    "Viewport bounds established"
                );
                Some(b)
            }
            ViewportStatus::Degenerate(half_height) => {
                warn!(
                    half_height,
                    "Viewport half-height must be positive and finite, boundary resolution disabled"
                );
                None
            }
            ViewportStatus::Missing => {
                warn!("No viewport available, boundary resolution disabled");
                None
            }
        };
        Self { config, bounds }
    }

    /// The tuning in use.
    #[must_use]
    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// The viewport walls, if any.
    #[must_use]
    pub fn bounds(&self) -> Option<&ViewportBounds> {
        self.bounds.as_ref()
    }

    /// Whether the body is confined to a viewport.
    #[must_use]
    pub fn has_bounds(&self) -> bool {
        self.bounds.is_some()
    }

    /// Advances the body's velocity by one frame and keeps it inside the
    /// viewport.
    ///
    /// Position integration is left to the host body.
    pub fn tick<I: InputSource + ?Sized>(
        &self,
        body: &mut BodyState,
        input: &I,
        dt: f32,
    ) -> TickReport {
        let direction = sample_direction(input);

        let mut velocity = body.velocity;
        accelerate_axis(&mut velocity.x, direction.x, &self.config, dt);
        accelerate_axis(&mut velocity.y, direction.y, &self.config, dt);

        let mut position = body.position;
        let contacts = resolve_bounds(
            &mut position,
            &mut velocity,
            body.half_extents(self.config.scale_divisor),
            self.bounds.as_ref(),
            self.config.bounce_coefficient,
        );

        if contacts.any() {
            debug!(
                ?contacts,
                x = position.x,
                y = position.y,
                vx = velocity.x,
                vy = velocity.y,
                "Bounced off viewport edge"
            );
        }

        body.position = position;
        body.velocity = velocity;

        trace!(
            dx = direction.x,
            dy = direction.y,
            vx = velocity.x,
            vy = velocity.y,
            "Movement tick"
        );

        TickReport {
            direction,
            contacts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::{MissingViewport, OrthographicViewport};
    use crate::direction::DIAGONAL_SCALE;
    use crate::error::{ConfigError, MotionError};
    use crate::input::KeySnapshot;

    const DT: f32 = 0.1;

    fn right() -> KeySnapshot {
        KeySnapshot {
            right: true,
            ..Default::default()
        }
    }

    fn body_at(x: f32, y: f32) -> BodyState {
        // scale 20 / divisor 100 / 2 = 0.1 half-extent
        BodyState::new(Vec2::new(x, y), Vec2::new(20.0, 20.0))
    }

    #[test]
    fn test_missing_viewport_disables_bounds() {
        let controller = MovementController::with_defaults(&MissingViewport);
        assert!(!controller.has_bounds());

        let mut body = body_at(100.0, 100.0);
        body.velocity = Vec2::new(3.0, 0.0);
        let report = controller.tick(&mut body, &KeySnapshot::default(), DT);

        assert_eq!(body.position, Vec2::new(100.0, 100.0));
        assert!((body.velocity.x - 1.0).abs() < 1e-6);
        assert!(!report.contacts.any());
    }

    #[test]
    fn test_degenerate_viewport_is_not_missing() {
        assert_eq!(ViewportStatus::read(&MissingViewport), ViewportStatus::Missing);
        assert_eq!(
            ViewportStatus::read(&OrthographicViewport::new(-2.0)),
            ViewportStatus::Degenerate(-2.0)
        );
        assert!(matches!(
            ViewportStatus::read(&Some(f32::NAN)),
            ViewportStatus::Degenerate(size) if size.is_nan()
        ));
        assert_eq!(
            ViewportStatus::read(&OrthographicViewport::new(5.0)),
            ViewportStatus::Ready(ViewportBounds::new(5.0, -5.0, -10.0, 10.0))
        );

        let controller = MovementController::with_defaults(&OrthographicViewport::new(0.0));
        assert!(!controller.has_bounds());
    }

    #[test]
    fn test_bounds_from_viewport() {
        let controller = MovementController::with_defaults(&OrthographicViewport::new(5.0));
        assert_eq!(
            controller.bounds(),
            Some(&ViewportBounds::new(5.0, -5.0, -10.0, 10.0))
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MovementConfig {
            max_speed: -1.0,
            ..Default::default()
        };
        let err = MovementController::new(config, &MissingViewport)
            .expect_err("negative max speed");
        assert!(matches!(
            err,
            MotionError::Config(ConfigError::InvalidParameter {
                name: "max_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_tick_accelerates_and_reports_direction() {
        let controller = MovementController::with_defaults(&OrthographicViewport::new(5.0));
        let mut body = body_at(0.0, 0.0);

        let report = controller.tick(&mut body, &right(), DT);

        assert_eq!(report.direction, Vec2::new(1.0, 0.0));
        assert!((body.velocity.x - 2.0).abs() < 1e-6);
        assert_eq!(body.velocity.y, 0.0);
        // Tick does not integrate position
        assert_eq!(body.position, Vec2::ZERO);
    }

    #[test]
    fn test_diagonal_tick_caps_each_axis() {
        let controller = MovementController::with_defaults(&MissingViewport);
        let mut body = body_at(0.0, 0.0);
        let input = KeySnapshot {
            up: true,
            right: true,
            ..Default::default()
        };

        for _ in 0..20 {
            controller.tick(&mut body, &input, DT);
        }

        let cap = 5.0 * DIAGONAL_SCALE;
        assert_eq!(body.velocity, Vec2::new(cap, cap));
        assert!((body.speed() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_tick_bounces_off_top() {
        let controller = MovementController::with_defaults(&OrthographicViewport::new(5.0));
        let mut body = body_at(0.0, 5.05);
        body.velocity = Vec2::new(0.0, 3.0);
        let input = KeySnapshot {
            up: true,
            ..Default::default()
        };

        let report = controller.tick(&mut body, &input, DT);

        // Accelerated to 5.0 first, then reflected at half strength
        assert!(report.contacts.top);
        assert!((body.position.y - 4.9).abs() < 1e-6);
        assert_eq!(body.velocity.y, -2.5);
    }

    #[test]
    fn test_simulated_run_stays_inside_viewport() {
        let controller = MovementController::with_defaults(&OrthographicViewport::new(5.0));
        let bounds = *controller.bounds().expect("bounds set");
        let mut body = body_at(0.0, 0.0);
        let input = KeySnapshot {
            up: true,
            right: true,
            ..Default::default()
        };
        let half = body.half_extents(controller.config().scale_divisor);

        let mut bounced = false;
        for _ in 0..600 {
            let report = controller.tick(&mut body, &input, 1.0 / 60.0);
            bounced |= report.contacts.any();
            assert!(body.position.y <= bounds.top - half.y);
            assert!(body.position.x <= bounds.right - half.x);
            body.integrate(1.0 / 60.0);
        }
        assert!(bounced, "holding up-right for 10s should reach a wall");
    }

    #[test]
    fn test_release_comes_to_rest() {
        let controller = MovementController::with_defaults(&MissingViewport);
        let mut body = body_at(0.0, 0.0);
        body.velocity = Vec2::new(-4.0, 2.5);

        for _ in 0..10 {
            controller.tick(&mut body, &KeySnapshot::default(), DT);
        }

        assert_eq!(body.velocity, Vec2::ZERO);
    }
}
