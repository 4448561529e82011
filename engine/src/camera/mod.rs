//! Camera Module
//!
//! Orbit follow camera for the walker.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod orbit;

pub use orbit::{
    CAMERA_ROTATION_SPEED, CAMERA_ZOOM_SPEED, CameraPose, FOG_STRETCH_SPEED, OrbitCamera,
    OrbitRig, OrbitSpeeds, Projection, RADIUS_ZOOM_FACTOR,
};
