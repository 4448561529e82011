//! Linear Fog
//!
//! Distance fog used for depth cueing. The orbit camera's zoom drags the
//! fog band along with it, so the settings are mutable at runtime.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Linear fog band: fully clear before `start`, fully fogged after `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FogSettings {
    /// Distance where fog begins
    pub start: f32,
    /// Distance where fog is opaque
    pub end: f32,
    /// Fog color (RGB, linear space), normally the clear color
    pub color: Vec3,
}

impl Default for FogSettings {
    fn default() -> Self {
        Self {
            start: 100.0,
            end: 200.0,
            color: Vec3::new(0.2, 0.2, 0.3),
        }
    }
}

impl FogSettings {
    /// Visibility of a surface at `distance`: 1.0 = no fog, 0.0 = only fog.
    ///
    /// A collapsed or inverted band (`end <= start`) acts as a hard cut at
    /// `start`.
    pub fn visibility(&self, distance: f32) -> f32 {
        let span = self.end - self.start;
        if span <= f32::EPSILON {
            return if distance < self.start { 1.0 } else { 0.0 };
        }
        ((self.end - distance) / span).clamp(0.0, 1.0)
    }

    /// Blend `color` toward the fog color for a surface at `distance`.
    pub fn apply(&self, color: Vec3, distance: f32) -> Vec3 {
        self.color.lerp(color, self.visibility(distance))
    }

    /// Move the whole band by `delta` (positive pushes it away).
    pub fn shift(&mut self, delta: f32) {
        self.start += delta;
        self.end += delta;
    }
}
