//! WalkerSimulation - the per-frame walker logic.
//!
//! Owns the course, the player, the ground probe and the orbit camera. Its
//! [`tick`](WalkerSimulation::tick) method is the single entry point for a
//! frame. **No wgpu imports** - this module is GPU-agnostic.
//!
//! Frame order:
//!
//! 1. probe the ground under the player and resolve vertical motion
//! 2. walk, using the normal sampled in step 1
//! 3. orbit/zoom the camera (zoom drags the fog)
//! 4. jump
//! 5. recompute the camera pose and move the player meshes
//!
//! Jumping after the probe means a jump always starts from the snapped
//! ground height and lifts the player out of probe range before the next
//! frame's probe.

use glam::Vec3;
use tracing::trace;

use crate::camera::{CameraPose, OrbitCamera};
use crate::game::config::{MovementConfig, WalkerConfig};
use crate::game::scenes::course::CourseScene;
use crate::input::{FrameInput, KeyBindings, KeyboardState};
use crate::player::{
    GroundContact, HorizontalMotion, MotionState, Player, SurfaceProbe, VerticalMotion,
};
use crate::world::{FogSettings, SurfaceFilter};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Delta actually simulated (after the optional clamp)
    pub delta_time: f32,
    /// Ground found by this frame's probe
    pub contact: Option<GroundContact>,
    /// Vertical state after the probe step
    pub state: MotionState,
    pub jumped: bool,
    /// Player position at the end of the frame
    pub position: Vec3,
    pub camera: CameraPose,
}

/// All per-frame state of the walker demo.
pub struct WalkerSimulation {
    scene: CourseScene,
    player: Player,
    probe: SurfaceProbe,
    horizontal: HorizontalMotion,
    camera: OrbitCamera,
    fog: FogSettings,
    bindings: KeyBindings,
    movement: MovementConfig,
    frame: u64,
}

impl WalkerSimulation {
    pub fn new(config: &WalkerConfig, scene: CourseScene) -> Self {
        let movement = config.movement.clone();
        let spawn = scene.spawn;

        let player = Player::new(
            spawn,
            VerticalMotion::new(movement.vertical_params(), movement.jump_policy),
        );
        let camera = OrbitCamera::new(
            config.camera.rig(),
            config.camera.speeds(config.fog.stretch_speed),
            spawn,
        );

        Self {
            scene,
            player,
            probe: SurfaceProbe::new(movement.sole_ray_length, SurfaceFilter::default()),
            horizontal: HorizontalMotion::new(movement.move_speed),
            camera,
            fog: config.fog.settings(config.render.clear_color),
            bindings: KeyBindings::new(),
            movement,
            frame: 0,
        }
    }

    /// Advance one frame.
    ///
    /// `keyboard` is `None` when no keyboard is attached; the frame then runs
    /// with no input. Negative deltas are treated as zero.
    pub fn tick(&mut self, delta_time: f32, keyboard: Option<&KeyboardState>) -> FrameReport {
        let dt = self.movement.clamp_delta(delta_time.max(0.0));
        let input = FrameInput::sample(keyboard, &self.bindings);

        let contact = self.probe.probe(self.player.position, &self.scene.surfaces);
        let state = self.player.vertical.resolve(
            &mut self.player.position,
            contact.map(|c| c.ground_y),
            dt,
        );

        let step = self.horizontal.step(
            &input.movement,
            self.camera.get_yaw(),
            self.probe.ground_normal(),
            dt,
        );
        self.player.apply_step(&step);

        self.camera.rotate(&input.orbit, dt);
        self.camera.zoom(&input.orbit, &mut self.fog, dt);

        let jumped = self
            .player
            .vertical
            .try_jump(&mut self.player.position, input.jump, dt);

        let camera = self.camera.update_pose(self.player.position);
        self.scene
            .sync_player(self.player.position, self.player.orientation);

        self.frame += 1;
        trace!(
            frame = self.frame,
            dt,
            hit = contact.is_some(),
            ground_y = contact.map(|c| c.ground_y),
            position = ?self.player.position,
            velocity = self.player.vertical_velocity(),
            camera = ?camera.position,
            "tick"
        );

        FrameReport {
            delta_time: dt,
            contact,
            state,
            jumped,
            position: self.player.position,
            camera,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn probe(&self) -> &SurfaceProbe {
        &self.probe
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn fog(&self) -> &FogSettings {
        &self.fog
    }

    pub fn scene(&self) -> &CourseScene {
        &self.scene
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Number of ticks run so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}
