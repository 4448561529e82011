//! Scene Configuration
//!
//! Where the heightmap comes from and how big the terrain patch built from
//! it is. The rest of the course layout is fixed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default heightmap image, relative to the working directory
pub const DEFAULT_HEIGHTMAP_PATH: &str = "assets/textures/heightmap.png";

/// Heightmap terrain parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Greyscale image; a procedural field is used if it cannot be read
    pub heightmap_path: PathBuf,
    /// Side length of the square terrain patch
    pub heightmap_size: f32,
    /// Grid cells per side
    pub heightmap_subdivisions: u32,
    /// Height of a white pixel
    pub heightmap_max_height: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            heightmap_path: PathBuf::from(DEFAULT_HEIGHTMAP_PATH),
            heightmap_size: 30.0,
            heightmap_subdivisions: 10,
            heightmap_max_height: 1.0,
        }
    }
}
