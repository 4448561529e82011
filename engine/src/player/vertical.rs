//! Vertical Motion
//!
//! Grounded / airborne state machine for the player's Y coordinate.
//!
//! # Model
//!
//! - **Grounded**: the player's centre is snapped to `height_offset` above
//!   the probed ground and vertical velocity is zero.
//! - **Airborne**: semi-implicit Euler, velocity first, then position.
//! - **Jump**: an instant upward velocity, applied to the position in the
//!   same frame it triggers.
//!
//! There is no landing detection beyond the ground probe: the first frame
//! the sole ray reaches a surface the player snaps onto it.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Gravity acceleration in meters per second squared (up positive)
pub const GRAVITY: f32 = -9.81;

/// Jump velocity in meters per second
pub const JUMP_VELOCITY: f32 = 5.0;

/// Distance from the player's centre to its feet
pub const PLAYER_HEIGHT_OFFSET: f32 = 1.0;

/// Whether the player is standing on something this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    Grounded,
    Airborne,
}

/// What a held jump key does after landing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpPolicy {
    /// Jump again as soon as the player lands while the key is held.
    #[default]
    Repeat,
    /// A new jump needs the key released and pressed again.
    RequireRelease,
}

/// Tunables for [`VerticalMotion`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalParams {
    pub gravity: f32,
    pub jump_velocity: f32,
    pub height_offset: f32,
}

impl Default for VerticalParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            height_offset: PLAYER_HEIGHT_OFFSET,
        }
    }
}

/// Vertical velocity plus grounded/jump bookkeeping.
#[derive(Debug, Clone)]
pub struct VerticalMotion {
    params: VerticalParams,
    policy: JumpPolicy,
    /// Vertical velocity in m/s, up positive
    velocity: f32,
    state: MotionState,
    /// Set by a jump, cleared by the next ground contact
    jumping: bool,
    /// Jump key state seen on the previous call to `try_jump`
    jump_held: bool,
}

impl Default for VerticalMotion {
    fn default() -> Self {
        Self::new(VerticalParams::default(), JumpPolicy::default())
    }
}

impl VerticalMotion {
    pub fn new(params: VerticalParams, policy: JumpPolicy) -> Self {
        Self {
            params,
            policy,
            velocity: 0.0,
            state: MotionState::Grounded,
            jumping: false,
            jump_held: false,
        }
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn is_grounded(&self) -> bool {
        self.state == MotionState::Grounded
    }

    /// True between a jump and the next ground contact.
    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    pub fn params(&self) -> &VerticalParams {
        &self.params
    }

    pub fn policy(&self) -> JumpPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: JumpPolicy) {
        self.policy = policy;
    }

    /// Resolve this frame's vertical motion from the probe result.
    ///
    /// `ground_y` is the world Y of the ground under the player, or `None`
    /// when the sole ray found nothing.
    pub fn resolve(&mut self, position: &mut Vec3, ground_y: Option<f32>, dt: f32) -> MotionState {
        match ground_y {
            Some(ground_y) => {
                position.y = self.params.height_offset + ground_y;
                self.velocity = 0.0;
                self.jumping = false;
                self.set_state(MotionState::Grounded, position.y);
            }
            None => {
                self.velocity += self.params.gravity * dt;
                position.y += self.velocity * dt;
                self.set_state(MotionState::Airborne, position.y);
            }
        }
        self.state
    }

    /// Feed the jump key state; starts a jump when allowed.
    ///
    /// Returns true if a jump was triggered this frame.
    pub fn try_jump(&mut self, position: &mut Vec3, pressed: bool, dt: f32) -> bool {
        let fresh_press = !self.jump_held;
        self.jump_held = pressed;

        if !pressed || self.jumping {
            return false;
        }
        if self.policy == JumpPolicy::RequireRelease && !fresh_press {
            return false;
        }

        self.jumping = true;
        self.velocity = self.params.jump_velocity;
        position.y += self.velocity * dt;
        debug!(y = position.y, velocity = self.velocity, "jump");
        self.set_state(MotionState::Airborne, position.y);
        true
    }

    fn set_state(&mut self, next: MotionState, y: f32) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, y, "vertical state changed");
            self.state = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_defaults() {
        let motion = VerticalMotion::default();
        assert_eq!(motion.velocity(), 0.0);
        assert!(motion.is_grounded());
        assert!(!motion.is_jumping());
        assert_eq!(motion.policy(), JumpPolicy::Repeat);
    }

    #[test]
    fn test_grounded_snaps_to_offset() {
        let mut motion = VerticalMotion::default();
        let mut pos = Vec3::new(2.0, 1.3, -1.0);
        let state = motion.resolve(&mut pos, Some(0.4), DT);

        assert_eq!(state, MotionState::Grounded);
        assert!((pos.y - 1.4).abs() < 1e-6);
        assert_eq!(pos.x, 2.0);
        assert_eq!(pos.z, -1.0);
        assert_eq!(motion.velocity(), 0.0);
    }

    #[test]
    fn test_airborne_integrates_velocity_first() {
        let mut motion = VerticalMotion::default();
        let mut pos = Vec3::new(0.0, 10.0, 0.0);

        motion.resolve(&mut pos, None, DT);
        assert!((motion.velocity() - GRAVITY * DT).abs() < 1e-6);
        assert!((pos.y - (10.0 + GRAVITY * DT * DT)).abs() < 1e-5);
        assert_eq!(motion.state(), MotionState::Airborne);

        motion.resolve(&mut pos, None, DT);
        assert!((motion.velocity() - 2.0 * GRAVITY * DT).abs() < 1e-6);
        assert!((pos.y - (10.0 - 9.81 / 3600.0 * 3.0)).abs() < 1e-5);
    }

    #[test]
    fn test_jump_sets_velocity_and_moves() {
        let mut motion = VerticalMotion::default();
        let mut pos = Vec3::new(0.0, 1.0, 0.0);
        motion.resolve(&mut pos, Some(0.0), DT);

        assert!(motion.try_jump(&mut pos, true, DT));
        assert_eq!(motion.velocity(), JUMP_VELOCITY);
        assert!((pos.y - (1.0 + JUMP_VELOCITY * DT)).abs() < 1e-6);
        assert!(motion.is_jumping());
        assert_eq!(motion.state(), MotionState::Airborne);
    }

    #[test]
    fn test_no_double_jump() {
        let mut motion = VerticalMotion::default();
        let mut pos = Vec3::new(0.0, 1.0, 0.0);
        assert!(motion.try_jump(&mut pos, true, DT));

        motion.resolve(&mut pos, None, DT);
        let v = motion.velocity();
        assert!(!motion.try_jump(&mut pos, false, DT));
        assert!(!motion.try_jump(&mut pos, true, DT));
        assert_eq!(motion.velocity(), v);
    }

    #[test]
    fn test_landing_clears_jump_flag() {
        let mut motion = VerticalMotion::default();
        let mut pos = Vec3::new(0.0, 1.0, 0.0);
        motion.try_jump(&mut pos, true, DT);
        motion.resolve(&mut pos, Some(0.0), DT);

        assert!(!motion.is_jumping());
        assert!(motion.is_grounded());
    }

    #[test]
    fn test_repeat_policy_rejumps_while_held() {
        let mut motion = VerticalMotion::new(VerticalParams::default(), JumpPolicy::Repeat);
        let mut pos = Vec3::new(0.0, 1.0, 0.0);
        assert!(motion.try_jump(&mut pos, true, DT));
        motion.resolve(&mut pos, Some(0.0), DT);
        assert!(motion.try_jump(&mut pos, true, DT));
    }

    #[test]
    fn test_require_release_policy() {
        let mut motion = VerticalMotion::new(VerticalParams::default(), JumpPolicy::RequireRelease);
        let mut pos = Vec3::new(0.0, 1.0, 0.0);
        assert!(motion.try_jump(&mut pos, true, DT));

        motion.resolve(&mut pos, Some(0.0), DT);
        assert!(!motion.try_jump(&mut pos, true, DT));

        motion.try_jump(&mut pos, false, DT);
        assert!(motion.try_jump(&mut pos, true, DT));
    }

    #[test]
    fn test_jump_policy_serde_names() {
        let json = serde_json::to_string(&JumpPolicy::RequireRelease).unwrap();
        assert_eq!(json, "\"require_release\"");
        let parsed: JumpPolicy = serde_json::from_str("\"repeat\"").unwrap();
        assert_eq!(parsed, JumpPolicy::Repeat);
    }
}
