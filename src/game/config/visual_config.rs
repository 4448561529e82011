//! Visual Configuration
//!
//! Fog band, clear colour, lighting and the renderer switches. The fog colour
//! defaults to the clear colour so distant geometry fades into the
//! background.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{FOG_STRETCH_SPEED, Projection};
use crate::world::FogSettings;

/// Background colour shared by the clear pass, grid base and fog
pub const CLEAR_COLOR: Vec3 = Vec3::new(0.2, 0.2, 0.3);

/// Linear fog parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FogConfig {
    /// Distance where fog begins
    pub start: f32,
    /// Distance where fog is opaque
    pub end: f32,
    /// How fast zooming drags the band (units per second)
    pub stretch_speed: f32,
    /// Fog colour; `None` uses the clear colour
    pub color: Option<Vec3>,
}

impl Default for FogConfig {
    fn default() -> Self {
        let fog = FogSettings::default();
        Self {
            start: fog.start,
            end: fog.end,
            stretch_speed: FOG_STRETCH_SPEED,
            color: None,
        }
    }
}

impl FogConfig {
    pub fn settings(&self, clear_color: Vec3) -> FogSettings {
        FogSettings {
            start: self.start,
            end: self.end,
            color: self.color.unwrap_or(clear_color),
        }
    }
}

/// Renderer options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Draw the sole ray (red) and normal ray (green)
    pub show_probe_rays: bool,
    pub vsync: bool,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Background colour (RGB, linear space)
    pub clear_color: Vec3,
    /// Hemispheric light intensity
    pub light_intensity: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let projection = Projection::default();
        Self {
            show_probe_rays: true,
            vsync: true,
            fov_degrees: projection.fov_y.to_degrees(),
            near: projection.near,
            far: projection.far,
            clear_color: CLEAR_COLOR,
            light_intensity: 0.5,
        }
    }
}

impl RenderConfig {
    pub fn projection(&self) -> Projection {
        Projection {
            fov_y: self.fov_degrees.to_radians(),
            near: self.near,
            far: self.far,
        }
    }
}
