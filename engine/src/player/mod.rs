//! Player Module
//!
//! The walker: a box that follows the ground under it.
//!
//! # Components
//!
//! - [`SurfaceProbe`] - Downward sole ray plus the carried ground normal
//! - [`VerticalMotion`] - Grounded/airborne state, gravity and jump
//! - [`HorizontalMotion`] - Camera-relative walking projected onto the ground normal
//! - [`Player`] - Position, facing and vertical state of the walker

pub mod horizontal;
pub mod surface_probe;
pub mod vertical;

use glam::{Quat, Vec3};

pub use horizontal::{
    HorizontalMotion, HorizontalStep, MoveDirection, MOVE_SPEED, facing, step_displacement,
};
pub use surface_probe::{GroundContact, SOLE_RAY_LENGTH, SurfaceProbe};
pub use vertical::{
    GRAVITY, JUMP_VELOCITY, JumpPolicy, MotionState, PLAYER_HEIGHT_OFFSET, VerticalMotion,
    VerticalParams,
};

/// The player-controlled walker.
#[derive(Debug, Clone)]
pub struct Player {
    /// Centre of the player box in world space
    pub position: Vec3,
    /// Rotation about +Y only
    pub orientation: Quat,
    pub vertical: VerticalMotion,
}

impl Player {
    pub fn new(position: Vec3, vertical: VerticalMotion) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
            vertical,
        }
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical.velocity()
    }

    pub fn is_grounded(&self) -> bool {
        self.vertical.is_grounded()
    }

    /// Apply a horizontal step: move, and snap the facing if any direction
    /// was pressed.
    pub fn apply_step(&mut self, step: &HorizontalStep) {
        self.position += step.displacement;
        if let Some(facing) = step.facing {
            self.orientation = facing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_at_rest() {
        let player = Player::new(Vec3::new(0.0, 1.0, 0.0), VerticalMotion::default());
        assert_eq!(player.orientation, Quat::IDENTITY);
        assert_eq!(player.vertical_velocity(), 0.0);
        assert!(player.is_grounded());
    }

    #[test]
    fn test_apply_step_keeps_facing_without_input() {
        let mut player = Player::new(Vec3::ZERO, VerticalMotion::default());
        player.orientation = Quat::from_rotation_y(1.0);
        player.apply_step(&HorizontalStep {
            displacement: Vec3::ZERO,
            facing: None,
        });
        assert_eq!(player.orientation, Quat::from_rotation_y(1.0));
    }

    #[test]
    fn test_apply_step_moves_and_turns() {
        let mut player = Player::new(Vec3::ZERO, VerticalMotion::default());
        player.apply_step(&HorizontalStep {
            displacement: Vec3::new(0.0, 0.0, 0.05),
            facing: Some(Quat::from_rotation_y(0.5)),
        });
        assert_eq!(player.position, Vec3::new(0.0, 0.0, 0.05));
        assert_eq!(player.orientation, Quat::from_rotation_y(0.5));
    }
}
