//! Demo Course
//!
//! Builds the static world the walker explores: a huge flat ground, a long
//! tilted ramp, a row of stepping stones, a tilted thin plate and a patch of
//! heightmap terrain. Also places the translucent player box and its nose.
//!
//! **No wgpu imports** - the renderer consumes [`CourseScene`] as plain data.

use std::path::Path;

use glam::{Quat, Vec3};
use tracing::{info, warn};

use crate::game::config::SceneConfig;
use crate::game::render::material::{
    BLOCK_LINE_COLOR, GROUND_LINE_COLOR, PLAYER_ALPHA, PLAYER_COLOR, SurfaceMaterial,
};
use crate::world::{
    HeightField, MeshHandle, SurfaceMesh, SurfaceSet, build_box, build_ground,
    build_heightmap_ground,
};

/// Player spawn point (centre of the player box)
pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Player box size
pub const PLAYER_SIZE: Vec3 = Vec3::new(1.0, 2.0, 1.0);

/// Edge length of the nose cube
pub const NOSE_SIZE: f32 = 0.3;

/// Nose position relative to the player's centre, in player space
pub const NOSE_OFFSET: Vec3 = Vec3::new(0.0, 0.5, 0.65);

/// Resolution of the procedural height field used when the image is missing
const FALLBACK_HEIGHTMAP_RESOLUTION: u32 = 64;

/// Stepping stones along x = -6: (name, y, z)
const STEPPING_STONES: [(&str, f32, f32); 5] = [
    ("block4a", -0.8, -6.0),
    ("block4b", -0.6, -4.0),
    ("block4c", -0.4, -2.0),
    ("block4d", -0.6, 0.0),
    ("block4e", -0.8, 2.0),
];

/// Every placed mesh of the demo, its material, and the player handles.
#[derive(Debug, Clone)]
pub struct CourseScene {
    pub surfaces: SurfaceSet,
    /// Indexed by `MeshHandle.0`
    pub materials: Vec<SurfaceMaterial>,
    pub player: MeshHandle,
    pub nose: MeshHandle,
    pub spawn: Vec3,
}

impl CourseScene {
    /// Wrap a set of world surfaces, give them grid materials over
    /// `clear_color`, and add the player and nose meshes at `spawn`.
    pub fn with_player(surfaces: SurfaceSet, spawn: Vec3, clear_color: Vec3) -> Self {
        let mut surfaces = surfaces;
        let mut materials: Vec<SurfaceMaterial> = surfaces
            .iter()
            .map(|(_, mesh)| {
                let line = if mesh.name == "ground" {
                    GROUND_LINE_COLOR
                } else {
                    BLOCK_LINE_COLOR
                };
                SurfaceMaterial::grid(clear_color, line)
            })
            .collect();

        let player = surfaces.add(SurfaceMesh::new(
            "player",
            build_box(PLAYER_SIZE.x, PLAYER_SIZE.y, PLAYER_SIZE.z),
            spawn,
            Quat::IDENTITY,
        ));
        materials.push(SurfaceMaterial::solid(PLAYER_COLOR, PLAYER_ALPHA));

        let nose = surfaces.add(SurfaceMesh::new(
            "nose",
            build_box(NOSE_SIZE, NOSE_SIZE, NOSE_SIZE),
            spawn + NOSE_OFFSET,
            Quat::IDENTITY,
        ));
        materials.push(SurfaceMaterial::solid(PLAYER_COLOR, PLAYER_ALPHA));

        Self {
            surfaces,
            materials,
            player,
            nose,
            spawn,
        }
    }

    /// Material of a mesh; unknown handles get a plain grid.
    pub fn material(&self, handle: MeshHandle) -> SurfaceMaterial {
        self.materials
            .get(handle.0)
            .copied()
            .unwrap_or_else(|| SurfaceMaterial::grid(Vec3::ZERO, BLOCK_LINE_COLOR))
    }

    /// Move the player box and carry the nose along with it.
    pub fn sync_player(&mut self, position: Vec3, orientation: Quat) {
        self.surfaces.set_transform(self.player, position, orientation);
        self.surfaces
            .set_transform(self.nose, position + orientation * NOSE_OFFSET, orientation);
    }
}

/// Load the heightmap image, falling back to procedural hills.
pub fn load_height_field(path: &Path) -> HeightField {
    match HeightField::from_image(path) {
        Ok(field) => {
            info!(
                path = %path.display(),
                width = field.width(),
                height = field.height(),
                "heightmap loaded"
            );
            field
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "heightmap unavailable, using procedural terrain"
            );
            HeightField::rolling_hills(FALLBACK_HEIGHTMAP_RESOLUTION, FALLBACK_HEIGHTMAP_RESOLUTION)
        }
    }
}

/// Place the fixed world surfaces around a given height field.
pub fn build_course_surfaces(config: &SceneConfig, field: &HeightField) -> SurfaceSet {
    let mut surfaces = SurfaceSet::new();

    surfaces.add(SurfaceMesh::new(
        "ground",
        build_ground(10000.0, 10000.0),
        Vec3::ZERO,
        Quat::IDENTITY,
    ));

    // Long ramp rising ahead of the spawn (toward +Z)
    surfaces.add(SurfaceMesh::new(
        "block1",
        build_box(1000.0, 10.0, 1000.0),
        Vec3::new(0.0, -5.0, 10.0),
        Quat::from_rotation_x((-10f32).to_radians()),
    ));

    surfaces.add(SurfaceMesh::new(
        "block2",
        build_box(2.0, 2.0, 2.0),
        Vec3::new(6.0, -0.6, -6.0),
        Quat::IDENTITY,
    ));

    surfaces.add(SurfaceMesh::new(
        "block3",
        build_box(2.0, 2.0, 10.0),
        Vec3::new(6.0, -1.05, -0.1),
        Quat::from_rotation_x(5f32.to_radians()),
    ));

    for (name, y, z) in STEPPING_STONES {
        surfaces.add(SurfaceMesh::new(
            name,
            build_box(2.0, 2.0, 2.0),
            Vec3::new(-6.0, y, z),
            Quat::IDENTITY,
        ));
    }

    // Zero-height plate
    surfaces.add(SurfaceMesh::new(
        "block5",
        build_box(4.0, 0.0, 4.0),
        Vec3::new(3.0, -0.2, 5.0),
        Quat::from_rotation_z(10f32.to_radians()),
    ));

    surfaces.add(SurfaceMesh::new(
        "heightmap",
        build_heightmap_ground(
            field,
            config.heightmap_size,
            config.heightmap_size,
            config.heightmap_subdivisions,
            0.0,
            config.heightmap_max_height,
        ),
        Vec3::new(-20.0, 0.0, 0.0),
        Quat::IDENTITY,
    ));

    surfaces
}

/// Build the complete demo course.
pub fn build_course(config: &SceneConfig, clear_color: Vec3) -> CourseScene {
    let field = load_height_field(&config.heightmap_path);
    let surfaces = build_course_surfaces(config, &field);
    let scene = CourseScene::with_player(surfaces, PLAYER_SPAWN, clear_color);

    let triangles: usize = scene
        .surfaces
        .iter()
        .map(|(_, mesh)| mesh.mesh.triangle_count())
        .sum();
    info!(meshes = scene.surfaces.len(), triangles, "course built");

    scene
}
