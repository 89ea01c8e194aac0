//! Fixed timestep accumulation.
//!
//! Host frames arrive with arbitrary deltas; the controller runs in fixed
//! steps.

/// Most fixed updates run for a single frame.
const MAX_UPDATES_PER_FRAME: u32 = 10;

/// Fixed timestep accumulator.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// Fixed timestep delta
    fixed_dt: f32,
    /// Maximum frame delta to prevent spiral of death
    max_dt: f32,
    /// Unsimulated time carried between frames
    accumulator: f32,
}

impl FixedTimestep {
    /// Create an accumulator.
    ///
    /// # Arguments
    /// * `fixed_dt` - Simulation step in seconds (at least 1ms)
    /// * `max_dt` - Frame deltas are clamped to this
    #[must_use]
    pub fn new(fixed_dt: f32, max_dt: f32) -> Self {
        let fixed_dt = fixed_dt.max(0.001);
        Self {
            fixed_dt,
            max_dt: max_dt.max(fixed_dt),
            accumulator: 0.0,
        }
    }

    /// Get the fixed timestep value.
    #[must_use]
    pub fn fixed_dt(&self) -> f32 {
        self.fixed_dt
    }

    /// Time carried over to the next frame.
    #[must_use]
    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    /// Accumulate a frame delta.
    /// Returns the number of fixed updates that should be performed.
    pub fn accumulate(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, self.max_dt);
        let mut count = 0;

        while self.accumulator >= self.fixed_dt && count < MAX_UPDATES_PER_FRAME {
            self.accumulator -= self.fixed_dt;
            count += 1;
        }

        // Still behind: drop the backlog
        if self.accumulator > self.fixed_dt * 2.0 {
            self.accumulator = 0.0;
        }

        count
    }
}
