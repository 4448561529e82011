//! Input Bindings Module
//!
//! Maps physical keys to logical actions so the simulation never looks at a
//! raw key code.

use std::collections::{HashMap, HashSet};

use super::KeyCode;

/// Logical input actions that can be bound to physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move forward (default: W)
    MoveForward,
    /// Move backward (default: S)
    MoveBack,
    /// Strafe left (default: A)
    MoveLeft,
    /// Strafe right (default: D)
    MoveRight,
    /// Jump (default: Space)
    Jump,
    /// Orbit pitch up (default: Arrow Up)
    OrbitUp,
    /// Orbit pitch down (default: Arrow Down)
    OrbitDown,
    /// Orbit yaw left (default: Arrow Left)
    OrbitLeft,
    /// Orbit yaw right (default: Arrow Right)
    OrbitRight,
    /// Dolly camera in (default: Page Up)
    ZoomIn,
    /// Dolly camera out (default: Page Down)
    ZoomOut,
}

impl InputAction {
    /// Every action, in declaration order.
    pub const ALL: [InputAction; 11] = [
        InputAction::MoveForward,
        InputAction::MoveBack,
        InputAction::MoveLeft,
        InputAction::MoveRight,
        InputAction::Jump,
        InputAction::OrbitUp,
        InputAction::OrbitDown,
        InputAction::OrbitLeft,
        InputAction::OrbitRight,
        InputAction::ZoomIn,
        InputAction::ZoomOut,
    ];
}

/// Maps physical keys to logical actions, supporting customizable key bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Map from physical key to logical action
    key_to_action: HashMap<KeyCode, InputAction>,
    /// Map from logical action to physical key (for reverse lookup and display)
    action_to_key: HashMap<InputAction, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create a new KeyBindings instance with default key mappings.
    ///
    /// Default bindings:
    /// - W/S/A/D = move forward/back/left/right
    /// - Space = Jump
    /// - Arrow keys = orbit camera
    /// - Page Up/Page Down = zoom in/out
    pub fn new() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(KeyCode::W, InputAction::MoveForward);
        bindings.bind(KeyCode::S, InputAction::MoveBack);
        bindings.bind(KeyCode::A, InputAction::MoveLeft);
        bindings.bind(KeyCode::D, InputAction::MoveRight);
        bindings.bind(KeyCode::Space, InputAction::Jump);
        bindings.bind(KeyCode::ArrowUp, InputAction::OrbitUp);
        bindings.bind(KeyCode::ArrowDown, InputAction::OrbitDown);
        bindings.bind(KeyCode::ArrowLeft, InputAction::OrbitLeft);
        bindings.bind(KeyCode::ArrowRight, InputAction::OrbitRight);
        bindings.bind(KeyCode::PageUp, InputAction::ZoomIn);
        bindings.bind(KeyCode::PageDown, InputAction::ZoomOut);

        bindings
    }

    /// Bindings with nothing bound.
    pub fn empty() -> Self {
        Self {
            key_to_action: HashMap::new(),
            action_to_key: HashMap::new(),
        }
    }

    /// Bind a physical key to a logical action.
    ///
    /// If the key was previously bound to another action, that binding is removed.
    /// If the action was previously bound to another key, that binding is also removed.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        if let Some(old_action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&old_action);
        }

        if let Some(old_key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&old_key);
        }

        self.key_to_action.insert(key, action);
        self.action_to_key.insert(action, key);
    }

    /// Remove the binding for a specific key.
    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&action);
        }
    }

    /// Remove the binding for a specific action.
    pub fn unbind_action(&mut self, action: InputAction) {
        if let Some(key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&key);
        }
    }

    /// Get the action bound to a physical key, if any.
    pub fn get_action(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }

    /// Get the key bound to a logical action, if any.
    pub fn get_key(&self, action: InputAction) -> Option<KeyCode> {
        self.action_to_key.get(&action).copied()
    }

    /// Check if a specific action is currently pressed, given a set of pressed keys.
    pub fn is_action_pressed(&self, action: InputAction, pressed_keys: &HashSet<KeyCode>) -> bool {
        self.action_to_key
            .get(&action)
            .is_some_and(|key| pressed_keys.contains(key))
    }
}
