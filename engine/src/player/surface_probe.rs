//! Ground Probe
//!
//! Casts the "sole" ray straight down from the player's centre and keeps
//! the last sampled ground normal around for the horizontal movement step.
//!
//! The sole ray is slightly longer than the distance from the player's
//! centre to its feet, so a player standing on (or hovering up to 0.01
//! above) a surface gets a hit and anything higher counts as airborne.

use glam::Vec3;

use crate::physics::collision::Ray;
use crate::world::surfaces::{MeshHandle, SurfaceFilter, SurfaceSet};

/// Default sole ray reach: half the player height plus a small tolerance.
pub const SOLE_RAY_LENGTH: f32 = 1.01;

/// Ground found under the player this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    /// World-space Y of the picked point
    pub ground_y: f32,
    /// Picked point
    pub point: Vec3,
    /// World-space surface normal at the picked point
    pub normal: Vec3,
    /// Mesh the ray landed on
    pub mesh: MeshHandle,
}

/// Sole ray configuration plus the normal carried between frames.
#[derive(Debug, Clone)]
pub struct SurfaceProbe {
    sole_ray_length: f32,
    filter: SurfaceFilter,
    /// Origin = last picked point, direction = last picked normal
    normal_ray: Ray,
}

impl Default for SurfaceProbe {
    fn default() -> Self {
        Self::new(SOLE_RAY_LENGTH, SurfaceFilter::default())
    }
}

impl SurfaceProbe {
    /// Create a probe. Until the first hit the carried normal is +X, which
    /// makes horizontal movement degenerate, exactly like a player who has
    /// never touched ground.
    pub fn new(sole_ray_length: f32, filter: SurfaceFilter) -> Self {
        Self {
            sole_ray_length,
            filter,
            normal_ray: Ray::new(Vec3::ZERO, Vec3::X, 1.0),
        }
    }

    /// The downward ray for a player centred at `position`.
    pub fn sole_ray(&self, position: Vec3) -> Ray {
        Ray::new(position, Vec3::NEG_Y, self.sole_ray_length)
    }

    /// Ray carrying the most recently sampled ground normal.
    pub fn normal_ray(&self) -> &Ray {
        &self.normal_ray
    }

    /// Most recently sampled ground normal (world space).
    pub fn ground_normal(&self) -> Vec3 {
        self.normal_ray.direction
    }

    pub fn filter(&self) -> &SurfaceFilter {
        &self.filter
    }

    /// Cast the sole ray from `position`.
    ///
    /// On a hit the carried normal is replaced; on a miss it is left alone so
    /// airborne movement keeps using the last ground the player stood on.
    pub fn probe(&mut self, position: Vec3, surfaces: &SurfaceSet) -> Option<GroundContact> {
        let ray = self.sole_ray(position);
        let hit = surfaces.pick(&ray, &self.filter)?;

        self.normal_ray = Ray::new(hit.point, hit.world_normal, 1.0);

        Some(GroundContact {
            ground_y: hit.point.y,
            point: hit.point,
            normal: self.normal_ray.direction,
            mesh: hit.mesh,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::mesh::{build_box, build_ground};
    use crate::world::surfaces::SurfaceMesh;
    use glam::Quat;

    fn flat_world() -> SurfaceSet {
        let mut set = SurfaceSet::new();
        set.add(SurfaceMesh::new("ground", build_ground(100.0, 100.0), Vec3::ZERO, Quat::IDENTITY));
        set
    }

    #[test]
    fn test_initial_normal_is_x() {
        let probe = SurfaceProbe::default();
        assert_eq!(probe.ground_normal(), Vec3::X);
    }

    #[test]
    fn test_sole_ray_follows_position() {
        let probe = SurfaceProbe::default();
        let ray = probe.sole_ray(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(ray.origin, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(ray.direction, Vec3::NEG_Y);
        assert_eq!(ray.length, SOLE_RAY_LENGTH);
    }

    #[test]
    fn test_probe_standing_on_ground() {
        let mut probe = SurfaceProbe::default();
        let contact = probe.probe(Vec3::new(0.0, 1.0, 0.0), &flat_world()).unwrap();
        assert!(contact.ground_y.abs() < 1e-6);
        assert!((contact.normal - Vec3::Y).length() < 1e-6);
        assert!((probe.ground_normal() - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_probe_within_tolerance() {
        let mut probe = SurfaceProbe::default();
        assert!(probe.probe(Vec3::new(0.0, 1.005, 0.0), &flat_world()).is_some());
        assert!(probe.probe(Vec3::new(0.0, 1.02, 0.0), &flat_world()).is_none());
    }

    #[test]
    fn test_miss_keeps_last_normal() {
        let mut set = SurfaceSet::new();
        let tilt = Quat::from_rotation_z(10f32.to_radians());
        set.add(SurfaceMesh::new("block5", build_box(4.0, 0.0, 4.0), Vec3::ZERO, tilt));

        let mut probe = SurfaceProbe::default();
        probe.probe(Vec3::new(0.0, 1.0, 0.0), &set).unwrap();
        let sampled = probe.ground_normal();
        assert!((sampled - tilt * Vec3::Y).length() < 1e-5);

        assert!(probe.probe(Vec3::new(0.0, 5.0, 0.0), &set).is_none());
        assert_eq!(probe.ground_normal(), sampled);
    }

    #[test]
    fn test_probe_ignores_unlisted_meshes() {
        let mut set = flat_world();
        set.add(SurfaceMesh::new("player", build_box(1.0, 2.0, 1.0), Vec3::new(0.0, 1.3, 0.0), Quat::IDENTITY));

        let mut probe = SurfaceProbe::default();
        let contact = probe.probe(Vec3::new(0.0, 1.0, 0.0), &set).unwrap();
        assert_eq!(set.get(contact.mesh).unwrap().name, "ground");
    }
}
