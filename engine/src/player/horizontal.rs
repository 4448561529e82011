//! Horizontal Motion
//!
//! Camera-relative walking. Each pressed direction produces a step of
//! `move_speed * dt` along local +X, rotated by the camera yaw plus a fixed
//! per-direction offset, and then crossed with the ground normal:
//!
//! ```text
//! step = (yaw(alpha + offset) * (speed * dt, 0, 0)) x normal
//! ```
//!
//! On flat ground (`normal = +Y`) the cross product turns the +X-based step
//! into a horizontal step of the same length, 90 degrees around. On a slope
//! it tilts the step along the surface; on a normal parallel to the step
//! (the initial +X normal before the first ground contact) it is zero.
//!
//! Directions compose additively and diagonals are not normalized.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Quat, Vec3};

use crate::input::MovementKeys;

/// Walk speed in meters per second
pub const MOVE_SPEED: f32 = 3.0;

/// One of the four walking directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Back,
    Left,
    Right,
}

impl MoveDirection {
    /// Evaluation order within a frame. The last pressed direction in this
    /// order decides the final facing.
    pub const ALL: [MoveDirection; 4] = [
        MoveDirection::Forward,
        MoveDirection::Back,
        MoveDirection::Left,
        MoveDirection::Right,
    ];

    /// Yaw added to the camera yaw for this direction.
    pub fn yaw_offset(self) -> f32 {
        match self {
            MoveDirection::Forward => 0.0,
            MoveDirection::Back => PI,
            MoveDirection::Left => -FRAC_PI_2,
            MoveDirection::Right => FRAC_PI_2,
        }
    }

    pub fn is_pressed(self, keys: &MovementKeys) -> bool {
        match self {
            MoveDirection::Forward => keys.forward,
            MoveDirection::Back => keys.backward,
            MoveDirection::Left => keys.left,
            MoveDirection::Right => keys.right,
        }
    }
}

/// Yaw-only facing for `direction` under a camera at `camera_yaw`.
pub fn facing(direction: MoveDirection, camera_yaw: f32) -> Quat {
    Quat::from_rotation_y(camera_yaw + direction.yaw_offset())
}

/// Displacement of a single direction's step, and the facing it implies.
pub fn step_displacement(
    direction: MoveDirection,
    camera_yaw: f32,
    ground_normal: Vec3,
    speed: f32,
    dt: f32,
) -> (Vec3, Quat) {
    let rotation = facing(direction, camera_yaw);
    let step = rotation * Vec3::new(speed * dt, 0.0, 0.0);
    (step.cross(ground_normal), rotation)
}

/// Result of one frame of horizontal motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalStep {
    /// Sum of all direction steps
    pub displacement: Vec3,
    /// Facing of the last applied direction; `None` when nothing was pressed
    pub facing: Option<Quat>,
}

/// Applies walking input to a position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalMotion {
    move_speed: f32,
}

impl Default for HorizontalMotion {
    fn default() -> Self {
        Self::new(MOVE_SPEED)
    }
}

impl HorizontalMotion {
    pub fn new(move_speed: f32) -> Self {
        Self { move_speed }
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn set_move_speed(&mut self, speed: f32) {
        self.move_speed = speed;
    }

    /// Combine every pressed direction into one step.
    pub fn step(
        &self,
        keys: &MovementKeys,
        camera_yaw: f32,
        ground_normal: Vec3,
        dt: f32,
    ) -> HorizontalStep {
        let mut displacement = Vec3::ZERO;
        let mut last_facing = None;

        for direction in MoveDirection::ALL {
            if !direction.is_pressed(keys) {
                continue;
            }
            let (delta, rotation) =
                step_displacement(direction, camera_yaw, ground_normal, self.move_speed, dt);
            displacement += delta;
            last_facing = Some(rotation);
        }

        HorizontalStep {
            displacement,
            facing: last_facing,
        }
    }
}
