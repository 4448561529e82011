//! Input Module
//!
//! Platform-agnostic keyboard polling. The window layer records key
//! presses into a [`KeyboardState`]; once per frame the simulation turns
//! that into a [`FrameInput`] snapshot through the active [`KeyBindings`].
//!
//! # Example
//!
//! ```rust,ignore
//! use slope_walker_engine::input::{FrameInput, KeyBindings, KeyCode, KeyboardState};
//!
//! let mut keyboard = KeyboardState::new();
//! keyboard.handle_key(KeyCode::W, true);
//!
//! let input = FrameInput::sample(Some(&keyboard), &KeyBindings::new());
//! assert!(input.movement.forward);
//! ```

pub mod bindings;
pub mod keyboard;

pub use bindings::{InputAction, KeyBindings};
pub use keyboard::{KeyCode, KeyboardState, MovementKeys, OrbitKeys};

/// Everything the simulation reads from the keyboard in one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub movement: MovementKeys,
    pub orbit: OrbitKeys,
    pub jump: bool,
}

impl FrameInput {
    /// Snapshot of all bound actions.
    ///
    /// A missing keyboard device is not an error: it reads as a frame with
    /// nothing pressed.
    pub fn sample(keyboard: Option<&KeyboardState>, bindings: &KeyBindings) -> Self {
        let Some(keyboard) = keyboard else {
            return Self::default();
        };
        let keys = keyboard.pressed_keys();
        let down = |action| bindings.is_action_pressed(action, keys);

        Self {
            movement: MovementKeys {
                forward: down(InputAction::MoveForward),
                backward: down(InputAction::MoveBack),
                left: down(InputAction::MoveLeft),
                right: down(InputAction::MoveRight),
            },
            orbit: OrbitKeys {
                pitch_up: down(InputAction::OrbitUp),
                pitch_down: down(InputAction::OrbitDown),
                yaw_left: down(InputAction::OrbitLeft),
                yaw_right: down(InputAction::OrbitRight),
                zoom_in: down(InputAction::ZoomIn),
                zoom_out: down(InputAction::ZoomOut),
            },
            jump: down(InputAction::Jump),
        }
    }

    /// Check if any bound action is active this frame.
    pub fn any_pressed(&self) -> bool {
        self.movement.any_pressed() || self.orbit.any_pressed() || self.jump
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keyboard_is_no_input() {
        let input = FrameInput::sample(None, &KeyBindings::new());
        assert_eq!(input, FrameInput::default());
        assert!(!input.any_pressed());
    }

    #[test]
    fn test_sample_resolves_bindings() {
        let mut keyboard = KeyboardState::new();
        keyboard.handle_key(KeyCode::D, true);
        keyboard.handle_key(KeyCode::ArrowRight, true);
        keyboard.handle_key(KeyCode::Space, true);

        let input = FrameInput::sample(Some(&keyboard), &KeyBindings::new());
        assert!(input.movement.right);
        assert!(!input.movement.left);
        assert!(input.orbit.yaw_right);
        assert!(input.jump);
    }

    #[test]
    fn test_sample_ignores_unbound_keys() {
        let mut keyboard = KeyboardState::new();
        keyboard.handle_key(KeyCode::Enter, true);

        let input = FrameInput::sample(Some(&keyboard), &KeyBindings::new());
        assert!(!input.any_pressed());
    }
}
