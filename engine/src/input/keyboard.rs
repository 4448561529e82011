//! Keyboard Input Module
//!
//! Polled keyboard state. The frame driver feeds press/release events in,
//! the simulation asks "is this key down right now" once per frame.
//! Decoupled from winit to use generic key codes.

use std::collections::HashSet;

/// Generic key codes, independent of windowing system.
///
/// Only the keys the walker demo reacts to get their own variant; everything
/// else collapses to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,

    // Arrow keys (camera orbit)
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Zoom
    PageUp,
    PageDown,

    // Control keys
    Escape,
    Enter,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Movement keys held this frame, already resolved from bindings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    /// Move away from the camera
    pub forward: bool,
    /// Move toward the camera
    pub backward: bool,
    /// Strafe left relative to the camera
    pub left: bool,
    /// Strafe right relative to the camera
    pub right: bool,
}

impl MovementKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any movement key is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Get the forward/backward movement direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Get the left/right movement direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }
}

/// Orbit camera keys held this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrbitKeys {
    /// Increase pitch
    pub pitch_up: bool,
    /// Decrease pitch
    pub pitch_down: bool,
    /// Decrease yaw
    pub yaw_left: bool,
    /// Increase yaw
    pub yaw_right: bool,
    /// Dolly in (closer, lower, fog nearer)
    pub zoom_in: bool,
    /// Dolly out (further, higher, fog further)
    pub zoom_out: bool,
}

impl OrbitKeys {
    pub fn any_pressed(&self) -> bool {
        self.pitch_up
            || self.pitch_down
            || self.yaw_left
            || self.yaw_right
            || self.zoom_in
            || self.zoom_out
    }
}

/// Complete keyboard state tracking.
///
/// Holds the set of keys that are down. There is no event queue: a key
/// pressed and released between two frames is never seen.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the pressed state of the key changed.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if key == KeyCode::Unknown {
            return false;
        }
        if pressed {
            self.pressed.insert(key)
        } else {
            self.pressed.remove(&key)
        }
    }

    /// Whether `key` is currently held.
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// The full set of held keys.
    pub fn pressed_keys(&self) -> &HashSet<KeyCode> {
        &self.pressed
    }

    /// Release every key (e.g. when the window loses focus).
    pub fn reset(&mut self) {
        self.pressed.clear();
    }
}
