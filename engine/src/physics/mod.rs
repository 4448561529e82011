//! Physics module
//!
//! Just enough physics for a walker: downward ray queries against triangle
//! meshes. No rigid bodies, no collision response.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, velocities in m/s, accelerations in m/s².
//!
//! # Submodules
//!
//! - [`collision`] - Ray-triangle and ray-AABB intersection

pub mod collision;

pub use collision::{Ray, TriangleHit, ray_aabb_intersect, ray_hits_aabb, ray_triangle_intersect};
