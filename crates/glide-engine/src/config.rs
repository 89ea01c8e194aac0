//! Engine configuration.
//!
//! Provides the movement tuning, viewport, body and timing settings for a
//! headless run. Configuration can be loaded from and saved to a file.

use glam::Vec2;
use glide_motion::{KeyCode, MovementConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Configuration file name.
pub const CONFIG_FILE: &str = "glide.toml";

/// A span of time during which a set of keys is held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptSegment {
    /// Seconds from the start of the run
    pub start: f32,
    /// How long the keys stay held, in seconds
    pub duration: f32,
    /// Keys held during the segment
    pub keys: Vec<KeyCode>,
}

impl ScriptSegment {
    /// Creates a segment.
    #[must_use]
    pub fn new(start: f32, duration: f32, keys: Vec<KeyCode>) -> Self {
        Self {
            start,
            duration,
            keys,
        }
    }

    /// Whether the segment is active at `time`.
    #[must_use]
    pub fn is_active(&self, time: f32) -> bool {
        time >= self.start && time < self.start + self.duration
    }
}

/// Engine configuration parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === Viewport ===
    /// Whether the host has a camera to derive bounds from
    pub has_camera: bool,
    /// Camera orthographic half-height
    pub viewport_half_height: f32,

    // === Body ===
    /// Starting position in world units
    pub start_position: Vec2,
    /// Visual scale of the body in sprite units
    pub body_scale: Vec2,

    // === Timing ===
    /// Fixed simulation step in seconds
    pub fixed_dt: f32,
    /// Host frame delta in seconds
    pub frame_dt: f32,
    /// Largest frame delta fed to the accumulator
    pub max_frame_dt: f32,
    /// Total simulated time in seconds
    pub duration: f32,
    /// Log the body every N ticks (0 = never)
    pub log_every: u32,

    // === Movement ===
    /// Controller tuning
    pub movement: MovementConfig,

    // === Input ===
    /// Scripted key presses
    pub script: Vec<ScriptSegment>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            has_camera: true,
            viewport_half_height: 5.0,

            start_position: Vec2::ZERO,
            body_scale: Vec2::new(50.0, 50.0),

            fixed_dt: 1.0 / 60.0,
            frame_dt: 1.0 / 60.0,
            max_frame_dt: 0.25,
            duration: 10.0,
            log_every: 30,

            movement: MovementConfig::default(),

            script: default_script(),
        }
    }
}

/// Up-right into the corner, drift, cross to the left wall, then a cancelled
/// vertical pair while steering right.
fn default_script() -> Vec<ScriptSegment> {
    vec![
        ScriptSegment::new(0.0, 3.0, vec![KeyCode::W, KeyCode::D]),
        ScriptSegment::new(4.0, 3.5, vec![KeyCode::A]),
        ScriptSegment::new(8.0, 1.0, vec![KeyCode::W, KeyCode::S, KeyCode::ArrowRight]),
    ]
}

impl EngineConfig {
    /// Load configuration from a specific path.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    info!("Loaded config from {}", path.display());
                    config
                },
                Err(e) => {
                    warn!("Failed to parse config file: {e}");
                    Self::default()
                },
            },
            Err(e) => {
                warn!("Failed to read config file: {e}");
                Self::default()
            },
        }
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, contents)?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Clamp timing values to sensible ranges.
    ///
    /// Movement tuning is validated by the controller itself.
    pub fn validate(&mut self) {
        self.fixed_dt = self.fixed_dt.clamp(0.001, 0.1);
        self.frame_dt = self.frame_dt.clamp(0.001, 1.0);
        self.max_frame_dt = self.max_frame_dt.max(self.fixed_dt);
        self.duration = self.duration.clamp(0.0, 3600.0);
        self.body_scale = self.body_scale.max(Vec2::ZERO);
        self.script.retain(|segment| segment.duration > 0.0);
    }

    /// The camera half-height as the host would report it.
    #[must_use]
    pub fn camera_half_height(&self) -> Option<f32> {
        self.has_camera.then_some(self.viewport_half_height)
    }

    /// Number of host frames in the run.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        (self.duration / self.frame_dt).round() as u64
    }
}
