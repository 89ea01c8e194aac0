//! Input abstraction for directional steering.
//!
//! The controller only ever asks whether one of four logical keys is held.
//! Hosts either implement [`InputSource`] directly or feed physical key
//! events into a [`KeyboardState`], which maps them through rebindable
//! [`KeyBinding`]s.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Logical steering keys polled once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalKey {
    /// Steer toward +y (W by default)
    Up,
    /// Steer toward -y (S by default)
    Down,
    /// Steer toward +x (D by default)
    Right,
    /// Steer toward -x (A by default)
    Left,
}

impl LogicalKey {
    /// All logical keys in polling order.
    pub const ALL: [LogicalKey; 4] = [
        LogicalKey::Up,
        LogicalKey::Down,
        LogicalKey::Right,
        LogicalKey::Left,
    ];
}

/// Source of logical key state, polled by the controller each tick.
pub trait InputSource {
    /// Returns whether the logical key is currently held.
    fn is_pressed(&self, key: LogicalKey) -> bool;
}

/// Physical key codes a host can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// W key
    W,
    /// A key
    A,
    /// S key
    S,
    /// D key
    D,
    /// Up arrow
    ArrowUp,
    /// Down arrow
    ArrowDown,
    /// Left arrow
    ArrowLeft,
    /// Right arrow
    ArrowRight,
}

/// Key binding for one logical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Primary key for this action
    pub primary: KeyCode,
    /// Optional secondary key
    pub secondary: Option<KeyCode>,
}

impl KeyBinding {
    /// Create a new key binding with only a primary key.
    #[must_use]
    pub const fn new(primary: KeyCode) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    /// Create a new key binding with primary and secondary keys.
    #[must_use]
    pub const fn with_secondary(primary: KeyCode, secondary: KeyCode) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    /// Check if a key matches this binding.
    #[must_use]
    pub fn matches(&self, key: KeyCode) -> bool {
        self.primary == key || self.secondary == Some(key)
    }
}

/// Held-key tracker with rebindable logical mappings.
#[derive(Debug, Clone)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
    bindings: HashMap<LogicalKey, KeyBinding>,
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardState {
    /// Create a keyboard with the default WASD + arrow bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut keyboard = Self {
            held: HashSet::new(),
            bindings: HashMap::new(),
        };
        keyboard.set_default_bindings();
        keyboard
    }

    /// Restore the default bindings.
    pub fn set_default_bindings(&mut self) {
        self.bindings.clear();
        self.bindings.insert(
            LogicalKey::Up,
            KeyBinding::with_secondary(KeyCode::W, KeyCode::ArrowUp),
        );
        self.bindings.insert(
            LogicalKey::Down,
            KeyBinding::with_secondary(KeyCode::S, KeyCode::ArrowDown),
        );
        self.bindings.insert(
            LogicalKey::Right,
            KeyBinding::with_secondary(KeyCode::D, KeyCode::ArrowRight),
        );
        self.bindings.insert(
            LogicalKey::Left,
            KeyBinding::with_secondary(KeyCode::A, KeyCode::ArrowLeft),
        );
    }

    /// Rebind a logical key.
    pub fn rebind(&mut self, key: LogicalKey, binding: KeyBinding) {
        self.bindings.insert(key, binding);
    }

    /// Current binding for a logical key.
    #[must_use]
    pub fn binding(&self, key: LogicalKey) -> Option<&KeyBinding> {
        self.bindings.get(&key)
    }

    /// Record a physical key transition.
    pub fn update_key(&mut self, key: KeyCode, is_pressed: bool) {
        if is_pressed {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    /// Release every held key.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Check if a physical key is held.
    #[must_use]
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }
}

impl InputSource for KeyboardState {
    fn is_pressed(&self, key: LogicalKey) -> bool {
        self.bindings
            .get(&key)
            .is_some_and(|binding| self.held.iter().any(|&k| binding.matches(k)))
    }
}

/// Fixed snapshot of the four logical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeySnapshot {
    /// Up held
    pub up: bool,
    /// Down held
    pub down: bool,
    /// Right held
    pub right: bool,
    /// Left held
    pub left: bool,
}

impl KeySnapshot {
    /// Captures the current state of any input source.
    #[must_use]
    pub fn capture<I: InputSource + ?Sized>(input: &I) -> Self {
        Self {
            up: input.is_pressed(LogicalKey::Up),
            down: input.is_pressed(LogicalKey::Down),
            right: input.is_pressed(LogicalKey::Right),
            left: input.is_pressed(LogicalKey::Left),
        }
    }
}

impl InputSource for KeySnapshot {
    fn is_pressed(&self, key: LogicalKey) -> bool {
        match key {
            LogicalKey::Up => self.up,
            LogicalKey::Down => self.down,
            LogicalKey::Right => self.right,
            LogicalKey::Left => self.left,
        }
    }
}
