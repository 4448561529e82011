//! GPU Uniform Buffers
//!
//! Layouts shared with `SHADER_SOURCE`. Every field is a vec4 or mat4 so the
//! Rust and WGSL layouts line up without manual padding.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};

use super::material::SurfaceMaterial;
use crate::world::FogSettings;

/// Per-frame uniforms (group 0)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    /// xyz = camera position, w = hemispheric light intensity
    pub camera_pos: [f32; 4],
    /// rgb = fog colour
    pub fog_color: [f32; 4],
    /// x = fog start, y = fog end
    pub fog_params: [f32; 4],
}

static_assertions::assert_eq_size!(SceneUniforms, [u8; 112]);

impl Default for SceneUniforms {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Vec3::ZERO, &FogSettings::default(), 0.5)
    }
}

impl SceneUniforms {
    pub fn new(view_proj: Mat4, camera_pos: Vec3, fog: &FogSettings, light_intensity: f32) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            camera_pos: camera_pos.extend(light_intensity).to_array(),
            fog_color: fog.color.extend(1.0).to_array(),
            fog_params: [fog.start, fog.end, 0.0, 0.0],
        }
    }
}

/// Per-mesh uniforms (group 1)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ModelUniforms {
    /// Local-to-world (rotation + translation)
    pub model: [[f32; 4]; 4],
    /// rgb = grid main colour or solid diffuse, a = opacity
    pub base_color: [f32; 4],
    /// rgb = grid line colour, w = minor line visibility
    pub line_color: [f32; 4],
    /// x = 1 for grid materials, y = grid ratio, z = major unit frequency
    pub grid_params: [f32; 4],
}

static_assertions::assert_eq_size!(ModelUniforms, [u8; 112]);

impl ModelUniforms {
    pub fn new(position: Vec3, rotation: Quat, material: &SurfaceMaterial) -> Self {
        let model = Mat4::from_rotation_translation(rotation, position).to_cols_array_2d();
        match *material {
            SurfaceMaterial::Grid {
                main_color,
                line_color,
                grid_ratio,
                major_unit_frequency,
                minor_unit_visibility,
            } => Self {
                model,
                base_color: main_color.extend(1.0).to_array(),
                line_color: line_color.extend(minor_unit_visibility).to_array(),
                grid_params: [1.0, grid_ratio, major_unit_frequency, 0.0],
            },
            SurfaceMaterial::Solid { diffuse, alpha } => Self {
                model,
                base_color: diffuse.extend(alpha).to_array(),
                line_color: [0.0; 4],
                grid_params: [0.0; 4],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::render::material::{BLOCK_LINE_COLOR, PLAYER_ALPHA, PLAYER_COLOR};

    #[test]
    fn test_scene_uniforms_pack_fog() {
        let fog = FogSettings {
            start: 90.0,
            end: 190.0,
            color: Vec3::new(0.2, 0.2, 0.3),
        };
        let u = SceneUniforms::new(Mat4::IDENTITY, Vec3::new(1.0, 2.0, 3.0), &fog, 0.5);
        assert_eq!(u.camera_pos, [1.0, 2.0, 3.0, 0.5]);
        assert_eq!(u.fog_params[0], 90.0);
        assert_eq!(u.fog_params[1], 190.0);
        assert_eq!(u.fog_color[2], 0.3);
    }

    #[test]
    fn test_grid_material_packing() {
        let material = SurfaceMaterial::grid(Vec3::new(0.2, 0.2, 0.3), BLOCK_LINE_COLOR);
        let u = ModelUniforms::new(Vec3::new(0.0, -5.0, 10.0), Quat::IDENTITY, &material);
        assert_eq!(u.grid_params, [1.0, 1.0, 10.0, 0.0]);
        assert_eq!(u.line_color[3], 0.4);
        assert_eq!(u.base_color[3], 1.0);
        assert_eq!(u.model[3], [0.0, -5.0, 10.0, 1.0]);
    }

    #[test]
    fn test_solid_material_packing() {
        let material = SurfaceMaterial::solid(PLAYER_COLOR, PLAYER_ALPHA);
        let u = ModelUniforms::new(Vec3::ZERO, Quat::IDENTITY, &material);
        assert_eq!(u.base_color, [1.0, 0.0, 0.0, 0.5]);
        assert_eq!(u.grid_params[0], 0.0);
    }
}
