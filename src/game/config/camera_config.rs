//! Camera Configuration
//!
//! Starting orbit and the rates the arrow / page keys drive it at.

use serde::{Deserialize, Serialize};

use crate::camera::{OrbitRig, OrbitSpeeds};

/// Orbit camera parameters. Angles are in radians.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub height: f32,
    pub radius: f32,
    pub target_height: f32,
    /// Initial yaw
    pub alpha: f32,
    /// Initial pitch
    pub beta: f32,
    /// Radians per second
    pub rotation_speed: f32,
    /// Height change per second while zooming
    pub zoom_speed: f32,
    pub radius_zoom_factor: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let rig = OrbitRig::default();
        let speeds = OrbitSpeeds::default();
        Self {
            height: rig.height,
            radius: rig.radius,
            target_height: rig.target_height,
            alpha: rig.alpha,
            beta: rig.beta,
            rotation_speed: speeds.rotation_speed,
            zoom_speed: speeds.zoom_speed,
            radius_zoom_factor: speeds.radius_zoom_factor,
        }
    }
}

impl CameraConfig {
    pub fn rig(&self) -> OrbitRig {
        OrbitRig {
            height: self.height,
            radius: self.radius,
            target_height: self.target_height,
            alpha: self.alpha,
            beta: self.beta,
        }
    }

    /// Input rates; the fog stretch rate lives in the fog section.
    pub fn speeds(&self, fog_stretch_speed: f32) -> OrbitSpeeds {
        OrbitSpeeds {
            rotation_speed: self.rotation_speed,
            zoom_speed: self.zoom_speed,
            radius_zoom_factor: self.radius_zoom_factor,
            fog_stretch_speed,
        }
    }
}
