//! Render Module
//!
//! wgpu plumbing for the walker demo: device/surface setup and the mesh and
//! line pipelines. Scene-specific drawing lives in `game::render`.

pub mod gpu_context;
pub mod mesh_pass;

pub use gpu_context::{DEPTH_FORMAT, GpuContext, GpuContextConfig, GpuError};
pub use mesh_pass::{
    LineVertex, MeshBuffer, MeshVertex, PipelineKind, create_walker_pipeline, draw_mesh_buffer,
    uniform_bind_group, uniform_bind_group_layout,
};
