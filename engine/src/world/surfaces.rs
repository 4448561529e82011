//! Scene Surfaces
//!
//! Named, placed meshes that rays can be cast against. The set holds every
//! mesh in the scene, including ones that must never count as ground (the
//! player's own box, decorations); a [`SurfaceFilter`] decides which names
//! a query considers.
//!
//! Meshes are placed with a translation and a rotation only. Hit normals are
//! the interpolated vertex normals, rotated into world space by the mesh's
//! rotation, so a tilted block reports its tilted top face.

use glam::{Quat, Vec3};

use super::mesh::MeshData;
use crate::physics::collision::{Ray, ray_hits_aabb, ray_triangle_intersect};

/// Index of a mesh inside a [`SurfaceSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub usize);

/// A mesh placed in the world.
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    pub name: String,
    pub mesh: MeshData,
    pub position: Vec3,
    pub rotation: Quat,
    /// Local-space bounds, cached for the broad phase
    bounds: (Vec3, Vec3),
}

impl SurfaceMesh {
    pub fn new(name: impl Into<String>, mesh: MeshData, position: Vec3, rotation: Quat) -> Self {
        let bounds = mesh.bounds();
        Self {
            name: name.into(),
            mesh,
            position,
            rotation,
            bounds,
        }
    }

    /// Local-to-world transform of a point.
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.rotation * local + self.position
    }

    /// Nearest hit of a world-space ray against this mesh.
    ///
    /// Returns `(distance, local_normal)`; the normal is normalized but still
    /// in mesh space.
    fn intersect(&self, ray: &Ray) -> Option<(f32, Vec3)> {
        let local = ray.to_local(self.position, self.rotation);
        if !ray_hits_aabb(&local, self.bounds.0, self.bounds.1) {
            return None;
        }

        let mut best: Option<(f32, Vec3)> = None;
        for i in 0..self.mesh.triangle_count() {
            let Some(hit) = ray_triangle_intersect(&local, self.mesh.triangle(i)) else {
                continue;
            };
            if best.is_some_and(|(d, _)| d <= hit.distance) {
                continue;
            }
            let normal = hit.interpolate(self.mesh.triangle_normals(i)).normalize_or_zero();
            best = Some((hit.distance, normal));
        }
        best
    }
}

/// Name allow-list for ray queries. A mesh matches when its name contains
/// any of the patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceFilter {
    patterns: Vec<String>,
}

impl Default for SurfaceFilter {
    /// Walkable surfaces: `ground`, `block*`, `heightmap`.
    fn default() -> Self {
        Self::new(["ground", "block", "heightmap"])
    }
}

impl SurfaceFilter {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Filter that accepts every mesh.
    pub fn any() -> Self {
        Self::new([""])
    }

    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| name.contains(p.as_str()))
    }
}

/// Result of a successful pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Mesh that was hit
    pub mesh: MeshHandle,
    /// World-space hit point
    pub point: Vec3,
    /// Distance from the ray origin
    pub distance: f32,
    /// Interpolated vertex normal in mesh space
    pub local_normal: Vec3,
    /// `local_normal` rotated by the mesh's rotation
    pub world_normal: Vec3,
}

/// All placed meshes of a scene.
#[derive(Debug, Clone, Default)]
pub struct SurfaceSet {
    meshes: Vec<SurfaceMesh>,
}

impl SurfaceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mesh and return its handle.
    pub fn add(&mut self, mesh: SurfaceMesh) -> MeshHandle {
        self.meshes.push(mesh);
        MeshHandle(self.meshes.len() - 1)
    }

    pub fn get(&self, handle: MeshHandle) -> Option<&SurfaceMesh> {
        self.meshes.get(handle.0)
    }

    /// Find a mesh by exact name.
    pub fn find(&self, name: &str) -> Option<MeshHandle> {
        self.meshes.iter().position(|m| m.name == name).map(MeshHandle)
    }

    /// Move a mesh. Unknown handles are ignored.
    pub fn set_transform(&mut self, handle: MeshHandle, position: Vec3, rotation: Quat) {
        if let Some(mesh) = self.meshes.get_mut(handle.0) {
            mesh.position = position;
            mesh.rotation = rotation;
        }
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MeshHandle, &SurfaceMesh)> {
        self.meshes.iter().enumerate().map(|(i, m)| (MeshHandle(i), m))
    }

    /// Nearest hit along `ray` among meshes accepted by `filter`.
    pub fn pick(&self, ray: &Ray, filter: &SurfaceFilter) -> Option<SurfaceHit> {
        let mut best: Option<SurfaceHit> = None;

        for (handle, surface) in self.iter() {
            if !filter.matches(&surface.name) {
                continue;
            }
            let Some((distance, local_normal)) = surface.intersect(ray) else {
                continue;
            };
            if best.is_some_and(|b| b.distance <= distance) {
                continue;
            }
            best = Some(SurfaceHit {
                mesh: handle,
                point: ray.at(distance),
                distance,
                local_normal,
                world_normal: surface.rotation * local_normal,
            });
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::mesh::{build_box, build_ground};

    fn down_ray(x: f32, y: f32, z: f32) -> Ray {
        Ray::new(Vec3::new(x, y, z), Vec3::NEG_Y, 1.01)
    }

    #[test]
    fn test_filter_default_names() {
        let filter = SurfaceFilter::default();
        assert!(filter.matches("ground"));
        assert!(filter.matches("block1"));
        assert!(filter.matches("block4c"));
        assert!(filter.matches("heightmap"));
        assert!(!filter.matches("player"));
        assert!(!filter.matches("nose"));
    }

    #[test]
    fn test_pick_flat_ground() {
        let mut set = SurfaceSet::new();
        set.add(SurfaceMesh::new("ground", build_ground(100.0, 100.0), Vec3::ZERO, Quat::IDENTITY));

        let hit = set.pick(&down_ray(3.0, 1.0, -2.0), &SurfaceFilter::default()).unwrap();
        assert!(hit.point.y.abs() < 1e-6);
        assert!((hit.distance - 1.0).abs() < 1e-6);
        assert!((hit.world_normal - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_pick_nearest_wins() {
        let mut set = SurfaceSet::new();
        set.add(SurfaceMesh::new("ground", build_ground(100.0, 100.0), Vec3::ZERO, Quat::IDENTITY));
        let block = set.add(SurfaceMesh::new(
            "block2",
            build_box(2.0, 2.0, 2.0),
            Vec3::new(0.0, -0.6, 0.0),
            Quat::IDENTITY,
        ));

        // Block top is at y = 0.4, ground at 0
        let hit = set.pick(&down_ray(0.0, 1.2, 0.0), &SurfaceFilter::default()).unwrap();
        assert_eq!(hit.mesh, block);
        assert!((hit.point.y - 0.4).abs() < 1e-5);
    }

    #[test]
    fn test_pick_respects_filter() {
        let mut set = SurfaceSet::new();
        set.add(SurfaceMesh::new("ground", build_ground(100.0, 100.0), Vec3::ZERO, Quat::IDENTITY));
        let player = set.add(SurfaceMesh::new(
            "player",
            build_box(1.0, 2.0, 1.0),
            Vec3::new(0.0, 1.3, 0.0),
            Quat::IDENTITY,
        ));

        // A ray starting inside the player box sees its own bottom face first
        let unfiltered = set.pick(&down_ray(0.0, 1.0, 0.0), &SurfaceFilter::any()).unwrap();
        assert_eq!(unfiltered.mesh, player);

        let filtered = set.pick(&down_ray(0.0, 1.0, 0.0), &SurfaceFilter::default()).unwrap();
        assert_eq!(set.get(filtered.mesh).unwrap().name, "ground");
    }

    #[test]
    fn test_pick_rotated_block_normal_in_world_space() {
        let mut set = SurfaceSet::new();
        let tilt = Quat::from_rotation_x(-10f32.to_radians());
        set.add(SurfaceMesh::new("block1", build_box(100.0, 10.0, 100.0), Vec3::new(0.0, -5.0, 0.0), tilt));

        let hit = set.pick(&down_ray(0.0, 1.0, 0.0), &SurfaceFilter::default()).unwrap();
        assert!((hit.local_normal - Vec3::Y).length() < 1e-6);
        let expected = tilt * Vec3::Y;
        assert!((hit.world_normal - expected).length() < 1e-5);
        assert!(hit.world_normal.z < 0.0);
    }

    #[test]
    fn test_pick_miss_out_of_reach() {
        let mut set = SurfaceSet::new();
        set.add(SurfaceMesh::new("ground", build_ground(100.0, 100.0), Vec3::ZERO, Quat::IDENTITY));
        assert!(set.pick(&down_ray(0.0, 1.5, 0.0), &SurfaceFilter::default()).is_none());
    }

    #[test]
    fn test_set_transform_moves_mesh() {
        let mut set = SurfaceSet::new();
        let handle = set.add(SurfaceMesh::new("ground", build_ground(2.0, 2.0), Vec3::ZERO, Quat::IDENTITY));
        set.set_transform(handle, Vec3::new(50.0, 0.0, 0.0), Quat::IDENTITY);

        assert!(set.pick(&down_ray(0.0, 1.0, 0.0), &SurfaceFilter::default()).is_none());
        assert!(set.pick(&down_ray(50.0, 1.0, 0.0), &SurfaceFilter::default()).is_some());
        assert_eq!(set.find("ground"), Some(handle));
    }
}
