//! Camera Tests - Orbit Pose, Rotation and Zoom/Fog Coupling
//!
//! Tests for the orbit camera, both on its own and as driven by the
//! simulation's arrow and page keys.

use std::f32::consts::PI;

use glam::{Quat, Vec3};
use slope_walker_engine::camera::{OrbitCamera, OrbitRig, OrbitSpeeds, Projection};
use slope_walker_engine::game::config::WalkerConfig;
use slope_walker_engine::game::scenes::{CourseScene, WalkerSimulation};
use slope_walker_engine::input::{KeyCode, KeyboardState, OrbitKeys};
use slope_walker_engine::world::{FogSettings, SurfaceMesh, SurfaceSet, build_ground};

const DT: f32 = 1.0 / 60.0;

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

fn flat_sim() -> WalkerSimulation {
    let mut surfaces = SurfaceSet::new();
    surfaces.add(SurfaceMesh::new(
        "ground",
        build_ground(1000.0, 1000.0),
        Vec3::ZERO,
        Quat::IDENTITY,
    ));
    let scene = CourseScene::with_player(surfaces, Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO);
    WalkerSimulation::new(&WalkerConfig::default(), scene)
}

// ============================================================================
// Pose
// ============================================================================

#[test]
fn test_initial_pose() {
    let camera = OrbitCamera::new(
        OrbitRig::default(),
        OrbitSpeeds::default(),
        Vec3::new(0.0, 1.0, 0.0),
    );
    let pose = camera.get_pose();
    assert!(approx(pose.position, Vec3::new(0.0, 2.5, -4.0)));
    assert!(approx(pose.target, Vec3::new(0.0, 1.5, 0.0)));
    assert!(pose.forward().z > 0.9);
}

#[test]
fn test_pose_is_deterministic() {
    let rig = OrbitRig {
        alpha: 0.7,
        beta: 2.4,
        ..OrbitRig::default()
    };
    let player = Vec3::new(3.0, 1.2, -8.0);
    assert_eq!(rig.pose(player), rig.pose(player));
}

#[test]
fn test_pose_follows_player() {
    let rig = OrbitRig::default();
    let a = rig.pose(Vec3::ZERO);
    let b = rig.pose(Vec3::new(5.0, 2.0, -1.0));
    assert!(approx(b.position - a.position, Vec3::new(5.0, 2.0, -1.0)));
    assert!(approx(b.target - a.target, Vec3::new(5.0, 2.0, -1.0)));
}

#[test]
fn test_arm_length_is_radius() {
    let rig = OrbitRig {
        alpha: 1.1,
        beta: 2.0,
        radius: 7.0,
        ..OrbitRig::default()
    };
    assert!((rig.arm().length() - 7.0).abs() < 1e-4);
}

#[test]
fn test_quarter_yaw_moves_camera_to_side() {
    let rig = OrbitRig {
        alpha: PI / 2.0,
        ..OrbitRig::default()
    };
    let pose = rig.pose(Vec3::ZERO);
    assert!(approx(pose.position, Vec3::new(-4.0, 1.5, 0.0)));
}

// ============================================================================
// Rotation and zoom
// ============================================================================

#[test]
fn test_arrow_keys_rotate() {
    let mut camera = OrbitCamera::new(OrbitRig::default(), OrbitSpeeds::default(), Vec3::ZERO);
    let keys = OrbitKeys {
        yaw_right: true,
        pitch_up: true,
        ..OrbitKeys::default()
    };
    camera.rotate(&keys, 0.5);
    assert!((camera.get_rig().alpha - 1.0).abs() < 1e-6);
    assert!((camera.get_rig().beta - (PI + 1.0)).abs() < 1e-6);
    assert!((camera.get_yaw() - 1.0).abs() < 1e-6);
}

#[test]
fn test_zoom_in_pulls_fog() {
    let mut camera = OrbitCamera::new(OrbitRig::default(), OrbitSpeeds::default(), Vec3::ZERO);
    let mut fog = FogSettings::default();
    let keys = OrbitKeys {
        zoom_in: true,
        ..OrbitKeys::default()
    };
    camera.zoom(&keys, &mut fog, 0.25);

    let rig = camera.get_rig();
    assert!((rig.height - 1.0).abs() < 1e-6);
    assert!((rig.target_height - 0.0).abs() < 1e-6);
    assert!((rig.radius - 2.5).abs() < 1e-6);
    assert!((fog.start - 97.5).abs() < 1e-4);
    assert!((fog.end - 197.5).abs() < 1e-4);
}

#[test]
fn test_zoom_in_and_out_cancel() {
    let mut camera = OrbitCamera::new(OrbitRig::default(), OrbitSpeeds::default(), Vec3::ZERO);
    let mut fog = FogSettings::default();
    let keys = OrbitKeys {
        zoom_in: true,
        zoom_out: true,
        ..OrbitKeys::default()
    };
    camera.zoom(&keys, &mut fog, DT);
    let rig = camera.get_rig();
    assert!((rig.height - 1.5).abs() < 1e-5);
    assert!((rig.radius - 4.0).abs() < 1e-5);
    assert!((rig.target_height - 0.5).abs() < 1e-5);
    assert!((fog.start - 100.0).abs() < 1e-4);
}

#[test]
fn test_simulation_camera_tracks_player() {
    let mut sim = flat_sim();
    let mut keyboard = KeyboardState::new();
    keyboard.handle_key(KeyCode::W, true);
    for _ in 0..30 {
        sim.tick(DT, Some(&keyboard));
    }
    let expected = sim.camera().get_rig().pose(sim.player().position);
    assert_eq!(sim.camera().get_pose(), expected);
}

#[test]
fn test_simulation_yaw_steers_walking() {
    let mut sim = flat_sim();
    let mut keyboard = KeyboardState::new();
    keyboard.handle_key(KeyCode::ArrowRight, true);
    // Quarter turn at 2 rad/s
    let frames = ((PI / 2.0) / (2.0 * DT)).round() as usize;
    for _ in 0..frames {
        sim.tick(DT, Some(&keyboard));
    }
    keyboard.reset();
    keyboard.handle_key(KeyCode::W, true);

    let start = sim.player().position;
    for _ in 0..30 {
        sim.tick(DT, Some(&keyboard));
    }
    let moved = sim.player().position - start;
    // Facing the camera's forward: +X after a quarter yaw to the right
    assert!(moved.x > 1.4);
    assert!(moved.z.abs() < 0.1);
}

#[test]
fn test_projection_defaults() {
    let projection = Projection::default();
    assert_eq!(projection.near, 1.0);
    assert_eq!(projection.far, 10000.0);
    assert!(projection.matrix(16.0 / 9.0).is_finite());
}
