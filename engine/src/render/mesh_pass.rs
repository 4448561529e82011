//! Mesh Render Pass
//!
//! Vertex formats, GPU mesh buffers and pipeline construction for the
//! walker's three draw kinds: opaque surfaces, the translucent player and
//! debug lines. All pipelines share one scene bind group (group 0); mesh
//! pipelines add a per-mesh model bind group (group 1).

use glam::Vec3;

use super::gpu_context::{DEPTH_FORMAT, GpuContext};
use crate::physics::collision::Ray;
use crate::world::mesh::MeshData;

/// Vertex for mesh rendering (position, normal), local space
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

static_assertions::assert_eq_size!(MeshVertex, [u8; 24]);

const MESH_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

impl MeshVertex {
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &MESH_ATTRIBUTES,
        }
    }

    /// Interleave a mesh's positions and normals.
    pub fn from_mesh(mesh: &MeshData) -> Vec<MeshVertex> {
        mesh.positions
            .iter()
            .zip(&mesh.normals)
            .map(|(p, n)| MeshVertex {
                position: p.to_array(),
                normal: n.to_array(),
            })
            .collect()
    }
}

/// Vertex for debug lines (position, color), world space
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

static_assertions::assert_eq_size!(LineVertex, [u8; 24]);

const LINE_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

impl LineVertex {
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &LINE_ATTRIBUTES,
        }
    }

    /// Two vertices spanning `ray` from origin to its end.
    pub fn ray_segment(ray: &Ray, color: Vec3) -> [LineVertex; 2] {
        let color = color.to_array();
        [
            LineVertex {
                position: ray.origin.to_array(),
                color,
            },
            LineVertex {
                position: ray.end().to_array(),
                color,
            },
        ]
    }
}

/// A mesh buffer that can be drawn
pub struct MeshBuffer {
    pub label: String,
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl MeshBuffer {
    /// Upload a local-space mesh.
    pub fn from_mesh(gpu: &GpuContext, label: &str, mesh: &MeshData) -> Self {
        let vertices = MeshVertex::from_mesh(mesh);
        Self {
            label: label.to_string(),
            vertex_buffer: gpu.create_vertex_buffer(&format!("{label} Vertex Buffer"), &vertices),
            index_buffer: gpu.create_index_buffer(&format!("{label} Index Buffer"), &mesh.indices),
            index_count: mesh.indices.len() as u32,
        }
    }
}

/// Helper to draw a mesh buffer with whatever pipeline and bind groups are set
pub fn draw_mesh_buffer(render_pass: &mut wgpu::RenderPass<'_>, mesh_buffer: &MeshBuffer) {
    if mesh_buffer.index_count > 0 {
        render_pass.set_vertex_buffer(0, mesh_buffer.vertex_buffer.slice(..));
        render_pass.set_index_buffer(mesh_buffer.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..mesh_buffer.index_count, 0, 0..1);
    }
}

/// How a pipeline writes color and depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineKind {
    /// Triangles, depth write, no blending
    Opaque,
    /// Triangles, alpha blending, depth test without write
    Translucent,
    /// Line list, depth write, no blending
    Lines,
}

impl PipelineKind {
    fn topology(self) -> wgpu::PrimitiveTopology {
        match self {
            PipelineKind::Opaque | PipelineKind::Translucent => wgpu::PrimitiveTopology::TriangleList,
            PipelineKind::Lines => wgpu::PrimitiveTopology::LineList,
        }
    }

    fn blend(self) -> wgpu::BlendState {
        match self {
            PipelineKind::Translucent => wgpu::BlendState::ALPHA_BLENDING,
            PipelineKind::Opaque | PipelineKind::Lines => wgpu::BlendState::REPLACE,
        }
    }

    fn depth_write(self) -> bool {
        self != PipelineKind::Translucent
    }
}

/// Build a render pipeline for one of the walker's draw kinds.
///
/// Mesh pipelines use `vs_main`/`fs_main` with [`MeshVertex`]; line
/// pipelines use `vs_line`/`fs_line` with [`LineVertex`]. Nothing is culled:
/// the ground and the thin plate blocks are seen from both sides.
pub fn create_walker_pipeline(
    gpu: &GpuContext,
    label: &str,
    shader: &wgpu::ShaderModule,
    bind_group_layouts: &[&wgpu::BindGroupLayout],
    kind: PipelineKind,
) -> wgpu::RenderPipeline {
    let (vs_entry, fs_entry, vertex_layout) = match kind {
        PipelineKind::Lines => ("vs_line", "fs_line", LineVertex::layout()),
        PipelineKind::Opaque | PipelineKind::Translucent => {
            ("vs_main", "fs_main", MeshVertex::layout())
        }
    };

    let pipeline_layout = gpu
        .device
        .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{label} Pipeline Layout")),
            bind_group_layouts,
            push_constant_ranges: &[],
        });

    gpu.device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("{label} Pipeline")),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some(vs_entry),
                buffers: &[vertex_layout],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some(fs_entry),
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.format(),
                    blend: Some(kind.blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: kind.topology(),
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: kind.depth_write(),
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
}

/// Bind group layout with a single uniform buffer at binding 0.
pub fn uniform_bind_group_layout(gpu: &GpuContext, label: &str) -> wgpu::BindGroupLayout {
    gpu.device
        .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(label),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        })
}

/// Bind `buffer` as binding 0 of a [`uniform_bind_group_layout`].
pub fn uniform_bind_group(
    gpu: &GpuContext,
    label: &str,
    layout: &wgpu::BindGroupLayout,
    buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::mesh::build_box;

    #[test]
    fn test_vertices_interleave_mesh() {
        let mesh = build_box(1.0, 2.0, 1.0);
        let vertices = MeshVertex::from_mesh(&mesh);
        assert_eq!(vertices.len(), mesh.positions.len());
        assert_eq!(vertices[5].position, mesh.positions[5].to_array());
        assert_eq!(vertices[5].normal, mesh.normals[5].to_array());
    }

    #[test]
    fn test_ray_segment_spans_ray() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y, 1.01);
        let [a, b] = LineVertex::ray_segment(&ray, Vec3::X);
        assert_eq!(a.position, [0.0, 1.0, 0.0]);
        assert!((b.position[1] - (-0.01)).abs() < 1e-6);
        assert_eq!(a.color, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_layout_strides() {
        assert_eq!(MeshVertex::layout().array_stride, 24);
        assert_eq!(LineVertex::layout().array_stride, 24);
    }

    #[test]
    fn test_pipeline_kinds() {
        assert!(PipelineKind::Opaque.depth_write());
        assert!(!PipelineKind::Translucent.depth_write());
        assert_eq!(PipelineKind::Lines.topology(), wgpu::PrimitiveTopology::LineList);
    }
}
