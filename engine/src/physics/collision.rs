//! Collision detection module
//!
//! Ray queries used by the ground probe. There is no collision
//! resolution here: everything answers "where does this ray first touch
//! something", nothing pushes anything apart.
//!
//! # Ray-AABB Intersection
//!
//! The slab method finds the entry and exit times for each axis. It is used
//! as the broad phase before testing individual triangles.
//!
//! # Ray-Triangle Intersection
//!
//! Möller-Trumbore: solves for the ray parameter and the barycentric
//! coordinates in one go, without computing the triangle's plane first.
//! Triangles are double-sided.
//!
//! # Example
//!
//! ```ignore
//! use slope_walker_engine::physics::collision::{Ray, ray_triangle_intersect};
//! use glam::Vec3;
//!
//! let ray = Ray::new(Vec3::new(0.2, 1.0, 0.2), Vec3::NEG_Y, 1.01);
//! let tri = [Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)];
//!
//! if let Some(hit) = ray_triangle_intersect(&ray, tri) {
//!     println!("Hit at distance {}", hit.distance);
//! }
//! ```

use glam::{Quat, Vec3};

/// Determinant threshold below which a ray counts as parallel to a triangle.
const PARALLEL_EPSILON: f32 = 1e-8;

/// Slack on barycentric bounds so a ray through a shared edge hits one side.
const BARYCENTRIC_EPSILON: f32 = 1e-6;

/// A finite ray: origin, unit direction and maximum reach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Normalized direction
    pub direction: Vec3,
    /// Hits further than this along `direction` are ignored
    pub length: f32,
}

impl Ray {
    /// Create a ray; `direction` is normalized, a zero direction stays zero
    /// and will never hit anything.
    pub fn new(origin: Vec3, direction: Vec3, length: f32) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
            length,
        }
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Far end of the ray.
    pub fn end(&self) -> Vec3 {
        self.at(self.length)
    }

    /// Express this ray in the local frame of an object placed at
    /// `translation` with `rotation` (unit scale). Distances are preserved.
    pub fn to_local(&self, translation: Vec3, rotation: Quat) -> Self {
        let inverse = rotation.inverse();
        Self {
            origin: inverse * (self.origin - translation),
            direction: inverse * self.direction,
            length: self.length,
        }
    }
}

/// Result of a ray-triangle test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Distance along the ray
    pub distance: f32,
    /// Barycentric weight of the second vertex
    pub u: f32,
    /// Barycentric weight of the third vertex
    pub v: f32,
}

impl TriangleHit {
    /// Interpolate a per-vertex attribute at the hit point.
    pub fn interpolate(&self, values: [Vec3; 3]) -> Vec3 {
        values[0] * (1.0 - self.u - self.v) + values[1] * self.u + values[2] * self.v
    }
}

/// Möller-Trumbore ray/triangle intersection.
///
/// # Returns
///
/// * `Some(hit)` - the ray touches the triangle within `[0, ray.length]`
/// * `None` - parallel, outside the triangle, behind the origin or too far
pub fn ray_triangle_intersect(ray: &Ray, triangle: [Vec3; 3]) -> Option<TriangleHit> {
    let [a, b, c] = triangle;
    let edge1 = b - a;
    let edge2 = c - a;

    let p = ray.direction.cross(edge2);
    let det = edge1.dot(p);
    if det.abs() < PARALLEL_EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;

    let s = ray.origin - a;
    let u = s.dot(p) * inv_det;
    if !(-BARYCENTRIC_EPSILON..=1.0 + BARYCENTRIC_EPSILON).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = ray.direction.dot(q) * inv_det;
    if v < -BARYCENTRIC_EPSILON || u + v > 1.0 + BARYCENTRIC_EPSILON {
        return None;
    }

    let distance = edge2.dot(q) * inv_det;
    if distance < 0.0 || distance > ray.length {
        return None;
    }

    Some(TriangleHit { distance, u, v })
}

/// Performs ray-AABB (Axis-Aligned Bounding Box) intersection test using the slab method.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the entry point (0 if the origin is inside)
/// * `None` - No intersection or intersection is behind the ray origin
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray_origin[axis];
        let dir = ray_dir[axis];
        let (lo, hi) = (aabb_min[axis], aabb_max[axis]);

        if dir.abs() < 1e-10 {
            // Parallel to this slab: must already be between its planes
            if origin < lo || origin > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / dir;
        let t1 = (lo - origin) * inv;
        let t2 = (hi - origin) * inv;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }

    if t_max >= t_min && t_max >= 0.0 {
        Some(t_min.max(0.0))
    } else {
        None
    }
}

/// Ray-AABB test limited to the ray's reach.
pub fn ray_hits_aabb(ray: &Ray, aabb_min: Vec3, aabb_max: Vec3) -> bool {
    ray_aabb_intersect(ray.origin, ray.direction, aabb_min, aabb_max)
        .is_some_and(|t| t <= ray.length)
}
