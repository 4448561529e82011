//! World Module
//!
//! Static scene data the walker moves through: placed triangle meshes that
//! rays can be cast against, builders for those meshes, the heightmap
//! source and the fog band.
//!
//! 1 unit = 1 meter, Y is up.

pub mod fog;
pub mod heightmap;
pub mod mesh;
pub mod surfaces;

pub use fog::FogSettings;
pub use heightmap::{HeightField, HeightmapError};
pub use mesh::{MeshData, build_box, build_ground, build_heightmap_ground};
pub use surfaces::{MeshHandle, SurfaceFilter, SurfaceHit, SurfaceMesh, SurfaceSet};
