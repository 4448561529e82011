//! Mesh Builders
//!
//! Local-space triangle meshes for the walker course: boxes, flat ground
//! quads and heightmap terrain. Every mesh carries per-vertex normals so the
//! ground probe can interpolate a smooth normal under the player.
//!
//! Conventions: Y is up, meshes are centred on their local origin (ground
//! meshes sit at local y = 0), triangles are listed as index triples.

use glam::Vec3;

use super::heightmap::HeightField;

/// Indexed triangle mesh in local space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Positions of triangle `index`.
    pub fn triangle(&self, index: usize) -> [Vec3; 3] {
        let base = index * 3;
        [
            self.positions[self.indices[base] as usize],
            self.positions[self.indices[base + 1] as usize],
            self.positions[self.indices[base + 2] as usize],
        ]
    }

    /// Vertex normals of triangle `index`.
    pub fn triangle_normals(&self, index: usize) -> [Vec3; 3] {
        let base = index * 3;
        [
            self.normals[self.indices[base] as usize],
            self.normals[self.indices[base + 1] as usize],
            self.normals[self.indices[base + 2] as usize],
        ]
    }

    /// Local-space bounding box `(min, max)`. An empty mesh returns zeros.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        if self.positions.is_empty() {
            return (Vec3::ZERO, Vec3::ZERO);
        }
        self.positions.iter().fold(
            (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
            |(lo, hi), p| (lo.min(*p), hi.max(*p)),
        )
    }

    /// Append a quad `a b c d` (in order around the face) with a flat normal.
    fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&corners);
        self.normals.extend(std::iter::repeat_n(normal, 4));
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Axis-aligned box centred on the origin.
///
/// Each face has its own four vertices so normals stay flat. A zero
/// dimension is allowed and produces a double-layered plate.
pub fn build_box(width: f32, height: f32, depth: f32) -> MeshData {
    let h = Vec3::new(width, height, depth) * 0.5;
    let mut mesh = MeshData::default();

    // +Y / -Y
    mesh.push_quad(
        [
            Vec3::new(-h.x, h.y, -h.z),
            Vec3::new(-h.x, h.y, h.z),
            Vec3::new(h.x, h.y, h.z),
            Vec3::new(h.x, h.y, -h.z),
        ],
        Vec3::Y,
    );
    mesh.push_quad(
        [
            Vec3::new(-h.x, -h.y, -h.z),
            Vec3::new(h.x, -h.y, -h.z),
            Vec3::new(h.x, -h.y, h.z),
            Vec3::new(-h.x, -h.y, h.z),
        ],
        Vec3::NEG_Y,
    );
    // +X / -X
    mesh.push_quad(
        [
            Vec3::new(h.x, -h.y, -h.z),
            Vec3::new(h.x, h.y, -h.z),
            Vec3::new(h.x, h.y, h.z),
            Vec3::new(h.x, -h.y, h.z),
        ],
        Vec3::X,
    );
    mesh.push_quad(
        [
            Vec3::new(-h.x, -h.y, -h.z),
            Vec3::new(-h.x, -h.y, h.z),
            Vec3::new(-h.x, h.y, h.z),
            Vec3::new(-h.x, h.y, -h.z),
        ],
        Vec3::NEG_X,
    );
    // +Z / -Z
    mesh.push_quad(
        [
            Vec3::new(-h.x, -h.y, h.z),
            Vec3::new(h.x, -h.y, h.z),
            Vec3::new(h.x, h.y, h.z),
            Vec3::new(-h.x, h.y, h.z),
        ],
        Vec3::Z,
    );
    mesh.push_quad(
        [
            Vec3::new(-h.x, -h.y, -h.z),
            Vec3::new(-h.x, h.y, -h.z),
            Vec3::new(h.x, h.y, -h.z),
            Vec3::new(h.x, -h.y, -h.z),
        ],
        Vec3::NEG_Z,
    );

    mesh
}

/// Flat ground quad at local y = 0, facing up.
pub fn build_ground(width: f32, depth: f32) -> MeshData {
    let (hx, hz) = (width * 0.5, depth * 0.5);
    let mut mesh = MeshData::default();
    mesh.push_quad(
        [
            Vec3::new(-hx, 0.0, -hz),
            Vec3::new(-hx, 0.0, hz),
            Vec3::new(hx, 0.0, hz),
            Vec3::new(hx, 0.0, -hz),
        ],
        Vec3::Y,
    );
    mesh
}

/// Terrain grid displaced by a height field.
///
/// The grid has `(subdivisions + 1)²` vertices spanning `width` x `depth`.
/// Row 0 of the height field maps to the +Z edge. Vertex height is
/// `min_height + (max_height - min_height) * luma`.
pub fn build_heightmap_ground(
    field: &HeightField,
    width: f32,
    depth: f32,
    subdivisions: u32,
    min_height: f32,
    max_height: f32,
) -> MeshData {
    let subdivisions = subdivisions.max(1);
    let steps = subdivisions as f32;
    let stride = subdivisions + 1;

    let mut mesh = MeshData::default();
    for row in 0..=subdivisions {
        for col in 0..=subdivisions {
            let u = col as f32 / steps;
            let v = row as f32 / steps;
            let x = u * width - width * 0.5;
            let z = (1.0 - v) * depth - depth * 0.5;
            let y = min_height + (max_height - min_height) * field.luma_at(u, v);
            mesh.positions.push(Vec3::new(x, y, z));
        }
    }

    for row in 0..subdivisions {
        for col in 0..subdivisions {
            let top_left = col + row * stride;
            let top_right = col + 1 + row * stride;
            let bottom_left = col + (row + 1) * stride;
            let bottom_right = col + 1 + (row + 1) * stride;
            mesh.indices
                .extend_from_slice(&[bottom_right, top_right, top_left]);
            mesh.indices
                .extend_from_slice(&[bottom_left, bottom_right, top_left]);
        }
    }

    mesh.normals = smooth_up_normals(&mesh.positions, &mesh.indices);
    mesh
}

/// Average of the unit face normals touching each vertex, every face
/// oriented to point up (+Y). Only valid for height-field style meshes.
fn smooth_up_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let mut face = (positions[b] - positions[a])
            .cross(positions[c] - positions[a])
            .normalize_or_zero();
        if face.y < 0.0 {
            face = -face;
        }
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    normals
        .into_iter()
        .map(|n| {
            let n = n.normalize_or_zero();
            if n == Vec3::ZERO { Vec3::Y } else { n }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_counts() {
        let mesh = build_box(1.0, 2.0, 1.0);
        assert_eq!(mesh.positions.len(), 24);
        assert_eq!(mesh.normals.len(), 24);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_box_bounds() {
        let (lo, hi) = build_box(2.0, 10.0, 4.0).bounds();
        assert_eq!(lo, Vec3::new(-1.0, -5.0, -2.0));
        assert_eq!(hi, Vec3::new(1.0, 5.0, 2.0));
    }

    #[test]
    fn test_box_faces_are_flat() {
        let mesh = build_box(2.0, 2.0, 2.0);
        for i in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle(i);
            let [na, nb, nc] = mesh.triangle_normals(i);
            assert_eq!(na, nb);
            assert_eq!(nb, nc);
            // Every corner lies on the face plane the normal points out of
            for p in [a, b, c] {
                assert!((p.dot(na) - 1.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_zero_height_box_is_plate() {
        let (lo, hi) = build_box(4.0, 0.0, 4.0).bounds();
        assert_eq!(lo.y, 0.0);
        assert_eq!(hi.y, 0.0);
    }

    #[test]
    fn test_ground_quad() {
        let mesh = build_ground(10.0, 20.0);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.normals.iter().all(|n| *n == Vec3::Y));
        let (lo, hi) = mesh.bounds();
        assert_eq!(lo, Vec3::new(-5.0, 0.0, -10.0));
        assert_eq!(hi, Vec3::new(5.0, 0.0, 10.0));
    }

    #[test]
    fn test_heightmap_grid_size() {
        let field = HeightField::flat(8, 8, 0.5);
        let mesh = build_heightmap_ground(&field, 30.0, 30.0, 10, 0.0, 1.0);
        assert_eq!(mesh.positions.len(), 11 * 11);
        assert_eq!(mesh.triangle_count(), 10 * 10 * 2);
    }

    #[test]
    fn test_heightmap_flat_field_height_and_normals() {
        let field = HeightField::flat(4, 4, 0.5);
        let mesh = build_heightmap_ground(&field, 30.0, 30.0, 4, 0.0, 2.0);
        for p in &mesh.positions {
            assert!((p.y - 1.0).abs() < 1e-6);
        }
        for n in &mesh.normals {
            assert!((*n - Vec3::Y).length() < 1e-5);
        }
    }

    #[test]
    fn test_heightmap_row_zero_is_far_edge() {
        let field = HeightField::flat(2, 2, 0.0);
        let mesh = build_heightmap_ground(&field, 30.0, 30.0, 2, 0.0, 1.0);
        assert_eq!(mesh.positions[0], Vec3::new(-15.0, 0.0, 15.0));
        assert_eq!(*mesh.positions.last().unwrap(), Vec3::new(15.0, 0.0, -15.0));
    }

    #[test]
    fn test_heightmap_normals_point_up() {
        let field = HeightField::rolling_hills(32, 32);
        let mesh = build_heightmap_ground(&field, 30.0, 30.0, 10, 0.0, 1.0);
        assert!(mesh.normals.iter().all(|n| n.y > 0.0));
        assert!(mesh.normals.iter().all(|n| (n.length() - 1.0).abs() < 1e-4));
    }
}
