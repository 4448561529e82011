//! Config Module
//!
//! Centralized configuration for the walker demo. Everything has a default,
//! so a config file only needs the fields it changes:
//!
//! ```json
//! { "movement": { "jump_policy": "require_release" }, "fog": { "end": 150.0 } }
//! ```

pub mod camera_config;
pub mod movement_config;
pub mod scene_config;
pub mod visual_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use camera_config::CameraConfig;
pub use movement_config::MovementConfig;
pub use scene_config::{DEFAULT_HEIGHTMAP_PATH, SceneConfig};
pub use visual_config::{CLEAR_COLOR, FogConfig, RenderConfig};

/// Errors that can occur while loading or validating a config file.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    Io(std::io::Error),
    /// JSON syntax or schema error.
    Json(serde_json::Error),
    /// The file parsed but a value is out of range.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

/// Complete demo configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    pub movement: MovementConfig,
    pub camera: CameraConfig,
    pub fog: FogConfig,
    pub scene: SceneConfig,
    pub render: RenderConfig,
}

impl WalkerConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse and validate JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.movement;
        let c = &self.camera;
        let f = &self.fog;
        let s = &self.scene;
        let r = &self.render;

        let finite = [
            ("movement.move_speed", m.move_speed),
            ("movement.gravity", m.gravity),
            ("movement.jump_velocity", m.jump_velocity),
            ("movement.player_height_offset", m.player_height_offset),
            ("movement.sole_ray_length", m.sole_ray_length),
            ("camera.height", c.height),
            ("camera.radius", c.radius),
            ("camera.target_height", c.target_height),
            ("camera.alpha", c.alpha),
            ("camera.beta", c.beta),
            ("camera.rotation_speed", c.rotation_speed),
            ("camera.zoom_speed", c.zoom_speed),
            ("camera.radius_zoom_factor", c.radius_zoom_factor),
            ("fog.start", f.start),
            ("fog.end", f.end),
            ("fog.stretch_speed", f.stretch_speed),
            ("scene.heightmap_size", s.heightmap_size),
            ("scene.heightmap_max_height", s.heightmap_max_height),
            ("render.fov_degrees", r.fov_degrees),
            ("render.near", r.near),
            ("render.far", r.far),
            ("render.light_intensity", r.light_intensity),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite, got {value}")));
            }
        }

        if m.sole_ray_length <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "movement.sole_ray_length must be positive, got {}",
                m.sole_ray_length
            )));
        }
        if let Some(max) = m.max_frame_delta {
            if !(max.is_finite() && max > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "movement.max_frame_delta must be positive, got {max}"
                )));
            }
        }
        if f.start > f.end {
            return Err(ConfigError::Invalid(format!(
                "fog.start ({}) is beyond fog.end ({})",
                f.start, f.end
            )));
        }
        if s.heightmap_subdivisions == 0 {
            return Err(ConfigError::Invalid(
                "scene.heightmap_subdivisions must be at least 1".to_string(),
            ));
        }
        if s.heightmap_size <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "scene.heightmap_size must be positive, got {}",
                s.heightmap_size
            )));
        }
        if !(r.fov_degrees > 0.0 && r.fov_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "render.fov_degrees must be in (0, 180), got {}",
                r.fov_degrees
            )));
        }
        if !(r.near > 0.0 && r.far > r.near) {
            return Err(ConfigError::Invalid(format!(
                "render clip range {}..{} is empty",
                r.near, r.far
            )));
        }
        Ok(())
    }
}
