//! Scripted keyboard input for headless runs.

use glide_motion::{InputSource, KeyboardState, LogicalKey};
use tracing::debug;

use crate::config::ScriptSegment;

/// Replays a timeline of held keys through a [`KeyboardState`].
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    segments: Vec<ScriptSegment>,
    keyboard: KeyboardState,
    /// Indices of the segments active at the last `advance_to`
    active: Vec<usize>,
}

impl ScriptedInput {
    /// Creates a script with the default key bindings.
    #[must_use]
    pub fn new(segments: Vec<ScriptSegment>) -> Self {
        Self {
            segments,
            keyboard: KeyboardState::new(),
            active: Vec::new(),
        }
    }

    /// Sets the held keys to those of every segment active at `time`.
    pub fn advance_to(&mut self, time: f32) {
        let active: Vec<usize> = self
            .segments
            .iter()
            .enumerate()
            .filter(|(_, segment)| segment.is_active(time))
            .map(|(i, _)| i)
            .collect();

        if active == self.active {
            return;
        }

        self.keyboard.release_all();
        for &i in &active {
            for &key in &self.segments[i].keys {
                self.keyboard.update_key(key, true);
            }
        }

        debug!(time, segments = ?active, "Script input changed");
        self.active = active;
    }

    /// Time at which the last segment ends.
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.segments
            .iter()
            .map(|segment| segment.start + segment.duration)
            .fold(0.0, f32::max)
    }
}

impl InputSource for ScriptedInput {
    fn is_pressed(&self, key: LogicalKey) -> bool {
        self.keyboard.is_pressed(key)
    }
}
