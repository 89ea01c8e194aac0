//! Headless simulation host.
//!
//! Plays the part of the engine around the controller: owns the body,
//! integrates its position, feeds scripted input and steps time.

use anyhow::{Context, Result};
use glide_motion::{BodyState, MovementController};
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::script::ScriptedInput;
use crate::timing::FixedTimestep;

/// Totals for a finished run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Fixed ticks executed
    pub ticks: u64,
    /// Ticks in which the body touched at least one wall
    pub bounces: u64,
    /// Ticks in which the top or bottom wall reflected the body
    pub vertical_hits: u64,
    /// Ticks in which the left or right wall reflected the body
    pub horizontal_hits: u64,
    /// Simulated seconds
    pub elapsed: f32,
    /// Body state at the end of the run
    pub body: BodyState,
}

/// Controller, body and input driven by a fixed timestep.
pub struct Simulation {
    controller: MovementController,
    body: BodyState,
    input: ScriptedInput,
    timestep: FixedTimestep,
    ticks: u64,
    bounces: u64,
    vertical_hits: u64,
    horizontal_hits: u64,
    log_every: u32,
}

impl Simulation {
    /// Builds a simulation from a validated config.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let controller =
            MovementController::new(config.movement, &config.camera_half_height())
                .context("Invalid movement tuning")?;

        let input = ScriptedInput::new(config.script.clone());
        if input.end_time() > config.duration {
            warn!(
                script_end = input.end_time(),
                duration = config.duration,
                "Script runs past the end of the simulation"
            );
        }

        Ok(Self {
            controller,
            body: BodyState::new(config.start_position, config.body_scale),
            input,
            timestep: FixedTimestep::new(config.fixed_dt, config.max_frame_dt),
            ticks: 0,
            bounces: 0,
            vertical_hits: 0,
            horizontal_hits: 0,
            log_every: config.log_every,
        })
    }

    /// Simulated time at the start of the next tick.
    #[must_use]
    pub fn time(&self) -> f32 {
        // Derived from the tick count so segment starts do not drift
        self.ticks as f32 * self.timestep.fixed_dt()
    }

    /// Current body state.
    #[must_use]
    pub fn body(&self) -> &BodyState {
        &self.body
    }

    /// Advances one host frame, running as many fixed ticks as it covers.
    pub fn frame(&mut self, frame_dt: f32) {
        let updates = self.timestep.accumulate(frame_dt);
        let dt = self.timestep.fixed_dt();

        for _ in 0..updates {
            self.input.advance_to(self.time());

            let contacts = self.controller.tick(&mut self.body, &self.input, dt).contacts;
            if contacts.any() {
                self.bounces += 1;
            }
            if contacts.hit_vertical() {
                self.vertical_hits += 1;
            }
            if contacts.hit_horizontal() {
                self.horizontal_hits += 1;
            }
            self.body.integrate(dt);

            self.ticks += 1;

            if self.log_every > 0 && self.ticks % u64::from(self.log_every) == 0 {
                debug!(
                    t = self.time(),
                    x = self.body.position.x,
                    y = self.body.position.y,
                    vx = self.body.velocity.x,
                    vy = self.body.velocity.y,
                    "Body"
                );
            }
        }
    }

    /// Runs the configured number of frames.
    pub fn run(mut self, config: &EngineConfig) -> RunSummary {
        let frames = config.frame_count();
        info!(frames, fixed_dt = self.timestep.fixed_dt(), "Simulation starting");

        for _ in 0..frames {
            self.frame(config.frame_dt);
        }
        debug!(carried = self.timestep.pending(), "Unsimulated time at end of run");

        RunSummary {
            ticks: self.ticks,
            bounces: self.bounces,
            vertical_hits: self.vertical_hits,
            horizontal_hits: self.horizontal_hits,
            elapsed: self.time(),
            body: *self.body(),
        }
    }
}

/// Load-validate-run entry used by `main`.
pub fn run(mut config: EngineConfig) -> Result<RunSummary> {
    config.validate();
    let simulation = Simulation::new(&config)?;
    let summary = simulation.run(&config);

    info!(
        ticks = summary.ticks,
        bounces = summary.bounces,
        vertical_hits = summary.vertical_hits,
        horizontal_hits = summary.horizontal_hits,
        elapsed = summary.elapsed,
        x = summary.body.position.x,
        y = summary.body.position.y,
        "Simulation finished"
    );
    Ok(summary)
}
