//! Game Module
//!
//! The walker demo built on top of the engine: configuration, the course
//! scene and per-frame simulation, and rendering.

pub mod config;
pub mod render;
pub mod scenes;

pub use config::{ConfigError, WalkerConfig};
pub use render::{SHADER_SOURCE, WalkerRenderer};
pub use scenes::{CourseScene, FrameReport, WalkerSimulation, build_course};
