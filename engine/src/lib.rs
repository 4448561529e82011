//! Slope Walker Engine Library
//!
//! A third-person box character walking over uneven terrain. The walker
//! stays glued to the ground with a single downward ray, moves along the
//! slope it stands on, and is followed by an orbit camera whose zoom also
//! stretches the fog.
//!
//! # Modules
//!
//! - [`physics`] - Rays and ray/triangle intersection
//! - [`world`] - Meshes, placed surfaces, heightmaps and fog
//! - [`input`] - Platform-agnostic keyboard state and bindings
//! - [`player`] - Ground probe, vertical and horizontal motion
//! - [`camera`] - Orbit follow camera and projection
//! - [`render`] - wgpu device setup and mesh/line pipelines
//! - [`game`] - Config, the demo course, per-frame simulation and renderer
//!
//! # Example
//!
//! ```rust,ignore
//! use slope_walker_engine::game::{WalkerConfig, WalkerSimulation, build_course};
//! use slope_walker_engine::input::{KeyCode, KeyboardState};
//!
//! let config = WalkerConfig::default();
//! let course = build_course(&config.scene, config.render.clear_color);
//! let mut sim = WalkerSimulation::new(&config, course);
//!
//! let mut keyboard = KeyboardState::new();
//! keyboard.handle_key(KeyCode::W, true);
//! let report = sim.tick(1.0 / 60.0, Some(&keyboard));
//! println!("player at {:?}", report.position);
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod player;
pub mod render;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used input types
pub use input::{FrameInput, KeyBindings, KeyCode, KeyboardState};
// Re-export player types
pub use player::{Player, SurfaceProbe};
// Re-export world types for convenience
pub use world::{FogSettings, SurfaceSet};
