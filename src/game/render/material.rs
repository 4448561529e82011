//! Surface Materials
//!
//! How each mesh of the course is shaded. Plain data, no GPU handles: the
//! renderer packs it into model uniforms.

use glam::Vec3;

/// Line colour of the ground grid
pub const GROUND_LINE_COLOR: Vec3 = Vec3::new(0.73, 0.73, 0.76);

/// Line colour of block and heightmap grids
pub const BLOCK_LINE_COLOR: Vec3 = Vec3::new(0.76, 0.73, 0.76);

/// Player and nose colour
pub const PLAYER_COLOR: Vec3 = Vec3::new(1.0, 0.0, 0.0);

/// Player and nose opacity
pub const PLAYER_ALPHA: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceMaterial {
    /// Unlit world-space grid over a base colour
    Grid {
        main_color: Vec3,
        line_color: Vec3,
        /// World units between minor lines
        grid_ratio: f32,
        /// Every n-th line is a major line
        major_unit_frequency: f32,
        /// Strength of minor lines relative to major ones
        minor_unit_visibility: f32,
    },
    /// Hemispherically lit flat colour
    Solid { diffuse: Vec3, alpha: f32 },
}

impl SurfaceMaterial {
    /// Unit grid with a major line every 10 units.
    pub fn grid(main_color: Vec3, line_color: Vec3) -> Self {
        SurfaceMaterial::Grid {
            main_color,
            line_color,
            grid_ratio: 1.0,
            major_unit_frequency: 10.0,
            minor_unit_visibility: 0.4,
        }
    }

    pub fn solid(diffuse: Vec3, alpha: f32) -> Self {
        SurfaceMaterial::Solid { diffuse, alpha }
    }

    /// Whether this material has to go through the blended pipeline.
    pub fn is_translucent(&self) -> bool {
        match self {
            SurfaceMaterial::Grid { .. } => false,
            SurfaceMaterial::Solid { alpha, .. } => *alpha < 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translucency() {
        assert!(!SurfaceMaterial::grid(Vec3::ZERO, GROUND_LINE_COLOR).is_translucent());
        assert!(SurfaceMaterial::solid(PLAYER_COLOR, PLAYER_ALPHA).is_translucent());
        assert!(!SurfaceMaterial::solid(PLAYER_COLOR, 1.0).is_translucent());
    }
}
