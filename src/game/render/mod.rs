//! Game Render Module
//!
//! Materials, uniforms, shader source and the renderer for the walker demo.

pub mod material;
pub mod renderer;
pub mod shader;
pub mod uniforms;

pub use material::{
    BLOCK_LINE_COLOR, GROUND_LINE_COLOR, PLAYER_ALPHA, PLAYER_COLOR, SurfaceMaterial,
};
pub use renderer::{NORMAL_RAY_COLOR, SOLE_RAY_COLOR, WalkerRenderer, probe_ray_lines};
pub use shader::SHADER_SOURCE;
pub use uniforms::{ModelUniforms, SceneUniforms};
