//! Scene Module
//!
//! The demo course and the simulation that runs the walker through it.

pub mod course;
pub mod walker_scene;

pub use course::{
    CourseScene, NOSE_OFFSET, PLAYER_SPAWN, build_course, build_course_surfaces, load_height_field,
};
pub use walker_scene::{FrameReport, WalkerSimulation};
