//! Movement Configuration
//!
//! Walking speed, gravity, jump and ground probe tunables.

use serde::{Deserialize, Serialize};

use crate::player::{
    GRAVITY, JUMP_VELOCITY, JumpPolicy, MOVE_SPEED, PLAYER_HEIGHT_OFFSET, SOLE_RAY_LENGTH,
    VerticalParams,
};

/// Player movement parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Walk speed in meters per second
    pub move_speed: f32,
    /// Vertical acceleration, up positive
    pub gravity: f32,
    /// Upward velocity set by a jump
    pub jump_velocity: f32,
    /// Distance from the player's centre to the ground it stands on
    pub player_height_offset: f32,
    /// Reach of the downward ground probe
    pub sole_ray_length: f32,
    /// Behaviour of a held jump key after landing
    pub jump_policy: JumpPolicy,
    /// Upper bound on the frame delta fed to the simulation (`None` = no clamp)
    pub max_frame_delta: Option<f32>,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            player_height_offset: PLAYER_HEIGHT_OFFSET,
            sole_ray_length: SOLE_RAY_LENGTH,
            jump_policy: JumpPolicy::Repeat,
            max_frame_delta: None,
        }
    }
}

impl MovementConfig {
    pub fn vertical_params(&self) -> VerticalParams {
        VerticalParams {
            gravity: self.gravity,
            jump_velocity: self.jump_velocity,
            height_offset: self.player_height_offset,
        }
    }

    /// Frame delta after the optional clamp.
    pub fn clamp_delta(&self, delta_time: f32) -> f32 {
        match self.max_frame_delta {
            Some(max) => delta_time.min(max),
            None => delta_time,
        }
    }
}
