//! Orbit Camera
//!
//! Follow camera that circles the player on a sphere. Yaw (`alpha`) and
//! pitch (`beta`) orient a `(0, 0, radius)` arm; the camera sits at the end
//! of the arm, lifted by `height`, and looks at a point `target_height`
//! above the player.
//!
//! Rotation is unbounded: pitching past the pole flips the view, which is
//! how the demo has always behaved.
//!
//! Zoom moves height, target height and radius together (the radius three
//! times as fast) and drags the fog band with it, so zooming in also pulls
//! the fog closer.
//!
//! Conventions are left-handed, Y up: at `alpha = 0, beta = PI` the camera
//! is behind the player on -Z and looks toward +Z.

use std::f32::consts::PI;

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::input::OrbitKeys;
use crate::world::fog::FogSettings;

/// Orbit rotation rate in radians per second
pub const CAMERA_ROTATION_SPEED: f32 = 2.0;

/// Height / target height change per second while zooming
pub const CAMERA_ZOOM_SPEED: f32 = 2.0;

/// Radius zooms this many times faster than height
pub const RADIUS_ZOOM_FACTOR: f32 = 3.0;

/// Fog band shift per second while zooming
pub const FOG_STRETCH_SPEED: f32 = 10.0;

/// Spherical camera parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRig {
    /// Extra height of the camera above the arm end
    pub height: f32,
    /// Arm length
    pub radius: f32,
    /// Look-at height above the player's centre
    pub target_height: f32,
    /// Yaw in radians
    pub alpha: f32,
    /// Pitch in radians
    pub beta: f32,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self {
            height: 1.5,
            radius: 4.0,
            target_height: 0.5,
            alpha: 0.0,
            beta: PI,
        }
    }
}

impl OrbitRig {
    /// Arm rotation: pitch about X, then yaw about Y.
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.alpha, self.beta, 0.0)
    }

    /// Camera offset from the player, before the height lift.
    pub fn arm(&self) -> Vec3 {
        self.orientation() * Vec3::new(0.0, 0.0, self.radius)
    }

    /// Camera position and look-at target for a player at `player_position`.
    ///
    /// Depends only on its inputs; calling it twice gives the same pose.
    pub fn pose(&self, player_position: Vec3) -> CameraPose {
        CameraPose {
            position: player_position + self.arm() + Vec3::new(0.0, self.height, 0.0),
            target: player_position + Vec3::new(0.0, self.target_height, 0.0),
        }
    }
}

/// Rates for rotation and zoom input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSpeeds {
    pub rotation_speed: f32,
    pub zoom_speed: f32,
    pub radius_zoom_factor: f32,
    pub fog_stretch_speed: f32,
}

impl Default for OrbitSpeeds {
    fn default() -> Self {
        Self {
            rotation_speed: CAMERA_ROTATION_SPEED,
            zoom_speed: CAMERA_ZOOM_SPEED,
            radius_zoom_factor: RADIUS_ZOOM_FACTOR,
            fog_stretch_speed: FOG_STRETCH_SPEED,
        }
    }
}

/// World-space camera placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    /// Left-handed view matrix, +Y up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_lh(self.position, self.target, Vec3::Y)
    }

    /// Unit vector from the camera toward its target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: 0.8,
            near: 1.0,
            far: 10000.0,
        }
    }
}

impl Projection {
    /// Left-handed perspective matrix with a 0..1 depth range.
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_lh(self.fov_y, aspect.max(f32::EPSILON), self.near, self.far)
    }
}

/// Orbit rig plus its input rates and the pose computed last frame.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    rig: OrbitRig,
    speeds: OrbitSpeeds,
    pose: CameraPose,
}

impl OrbitCamera {
    pub fn new(rig: OrbitRig, speeds: OrbitSpeeds, player_position: Vec3) -> Self {
        Self {
            pose: rig.pose(player_position),
            rig,
            speeds,
        }
    }

    pub fn get_rig(&self) -> &OrbitRig {
        &self.rig
    }

    pub fn get_speeds(&self) -> &OrbitSpeeds {
        &self.speeds
    }

    /// Pose from the most recent [`update_pose`](Self::update_pose).
    pub fn get_pose(&self) -> CameraPose {
        self.pose
    }

    /// Camera yaw; horizontal movement is relative to it.
    pub fn get_yaw(&self) -> f32 {
        self.rig.alpha
    }

    /// Apply arrow-key orbit input.
    pub fn rotate(&mut self, keys: &OrbitKeys, delta_time: f32) {
        let step = self.speeds.rotation_speed * delta_time;
        if keys.pitch_up {
            self.rig.beta += step;
        }
        if keys.pitch_down {
            self.rig.beta -= step;
        }
        if keys.yaw_left {
            self.rig.alpha -= step;
        }
        if keys.yaw_right {
            self.rig.alpha += step;
        }
    }

    /// Apply zoom input, shifting `fog` along with the camera.
    pub fn zoom(&mut self, keys: &OrbitKeys, fog: &mut FogSettings, delta_time: f32) {
        if keys.zoom_in {
            self.zoom_by(-1.0, fog, delta_time);
        }
        if keys.zoom_out {
            self.zoom_by(1.0, fog, delta_time);
        }
    }

    fn zoom_by(&mut self, sign: f32, fog: &mut FogSettings, delta_time: f32) {
        let step = sign * self.speeds.zoom_speed * delta_time;
        self.rig.height += step;
        self.rig.radius += step * self.speeds.radius_zoom_factor;
        self.rig.target_height += step;
        fog.shift(sign * self.speeds.fog_stretch_speed * delta_time);
    }

    /// Recompute and store the pose for the player's current position.
    pub fn update_pose(&mut self, player_position: Vec3) -> CameraPose {
        self.pose = self.rig.pose(player_position);
        self.pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_default_pose_behind_player() {
        let pose = OrbitRig::default().pose(Vec3::new(0.0, 1.0, 0.0));
        assert!(approx(pose.position, Vec3::new(0.0, 2.5, -4.0)));
        assert!(approx(pose.target, Vec3::new(0.0, 1.5, 0.0)));
        assert!(pose.forward().z > 0.9);
    }

    #[test]
    fn test_yaw_quarter_turn() {
        let rig = OrbitRig {
            alpha: std::f32::consts::FRAC_PI_2,
            ..OrbitRig::default()
        };
        // Arm (0, 0, -4) at alpha 0 swings to (-4, 0, 0)
        assert!(approx(rig.arm(), Vec3::new(-4.0, 0.0, 0.0)));
    }

    #[test]
    fn test_pitch_up_raises_camera() {
        let mut camera = OrbitCamera::new(OrbitRig::default(), OrbitSpeeds::default(), Vec3::ZERO);
        let keys = OrbitKeys {
            pitch_up: true,
            ..OrbitKeys::default()
        };
        camera.rotate(&keys, 0.1);
        let pose = camera.update_pose(Vec3::ZERO);
        assert!(pose.position.y > 1.5);
        assert!((camera.get_rig().beta - (PI + 0.2)).abs() < 1e-6);
    }

    #[test]
    fn test_yaw_keys() {
        let mut camera = OrbitCamera::new(OrbitRig::default(), OrbitSpeeds::default(), Vec3::ZERO);
        camera.rotate(
            &OrbitKeys {
                yaw_right: true,
                ..OrbitKeys::default()
            },
            DT,
        );
        assert!((camera.get_yaw() - CAMERA_ROTATION_SPEED * DT).abs() < 1e-6);
        camera.rotate(
            &OrbitKeys {
                yaw_left: true,
                yaw_right: true,
                ..OrbitKeys::default()
            },
            DT,
        );
        assert!((camera.get_yaw() - CAMERA_ROTATION_SPEED * DT).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_is_unbounded() {
        let mut camera = OrbitCamera::new(OrbitRig::default(), OrbitSpeeds::default(), Vec3::ZERO);
        let keys = OrbitKeys {
            pitch_up: true,
            ..OrbitKeys::default()
        };
        for _ in 0..10 {
            camera.rotate(&keys, 1.0);
        }
        assert!((camera.get_rig().beta - (PI + 20.0)).abs() < 1e-4);
    }

    #[test]
    fn test_zoom_in_moves_rig_and_fog() {
        let mut camera = OrbitCamera::new(OrbitRig::default(), OrbitSpeeds::default(), Vec3::ZERO);
        let mut fog = FogSettings::default();
        let keys = OrbitKeys {
            zoom_in: true,
            ..OrbitKeys::default()
        };
        camera.zoom(&keys, &mut fog, 0.5);

        let rig = camera.get_rig();
        assert!((rig.height - 0.5).abs() < 1e-6);
        assert!((rig.target_height - (-0.5)).abs() < 1e-6);
        assert!((rig.radius - 1.0).abs() < 1e-6);
        assert!((fog.start - 95.0).abs() < 1e-4);
        assert!((fog.end - 195.0).abs() < 1e-4);
    }

    #[test]
    fn test_zoom_out_pushes_fog() {
        let mut camera = OrbitCamera::new(OrbitRig::default(), OrbitSpeeds::default(), Vec3::ZERO);
        let mut fog = FogSettings::default();
        let keys = OrbitKeys {
            zoom_out: true,
            ..OrbitKeys::default()
        };
        camera.zoom(&keys, &mut fog, 1.0);
        assert!((camera.get_rig().radius - 10.0).abs() < 1e-5);
        assert!((fog.start - 110.0).abs() < 1e-4);
    }

    #[test]
    fn test_view_matrix_maps_target_ahead() {
        let pose = OrbitRig::default().pose(Vec3::ZERO);
        let view = pose.view_matrix();
        let target_view = view.transform_point3(pose.target);
        // Left-handed: visible points have positive view-space Z
        assert!(target_view.z > 0.0);
        assert!(target_view.x.abs() < 1e-4);
    }

    #[test]
    fn test_projection_depth_range() {
        let proj = Projection::default().matrix(16.0 / 9.0);
        let near = proj.project_point3(Vec3::new(0.0, 0.0, 1.0));
        let far = proj.project_point3(Vec3::new(0.0, 0.0, 10000.0));
        assert!(near.z.abs() < 1e-4);
        assert!((far.z - 1.0).abs() < 1e-4);
    }
}
