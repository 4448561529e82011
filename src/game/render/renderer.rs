//! Walker Renderer
//!
//! Draws a [`WalkerSimulation`] each frame: opaque course meshes, then the
//! optional probe rays, then the translucent player box and nose.

use glam::{Mat4, Vec3};
use tracing::debug;

use super::shader::SHADER_SOURCE;
use super::uniforms::{ModelUniforms, SceneUniforms};
use crate::camera::Projection;
use crate::game::config::RenderConfig;
use crate::game::scenes::{CourseScene, WalkerSimulation};
use crate::player::SurfaceProbe;
use crate::render::{
    GpuContext, LineVertex, MeshBuffer, PipelineKind, create_walker_pipeline, draw_mesh_buffer,
    uniform_bind_group, uniform_bind_group_layout,
};
use crate::world::MeshHandle;

/// Colour of the downward sole ray
pub const SOLE_RAY_COLOR: Vec3 = Vec3::new(1.0, 0.0, 0.0);

/// Colour of the ground normal ray
pub const NORMAL_RAY_COLOR: Vec3 = Vec3::new(0.0, 1.0, 0.0);

const PROBE_LINE_VERTICES: usize = 4;

/// One uploaded course mesh and its model uniforms
struct RenderMesh {
    handle: MeshHandle,
    buffer: MeshBuffer,
    model_buffer: wgpu::Buffer,
    model_bind_group: wgpu::BindGroup,
}

pub struct WalkerRenderer {
    opaque_pipeline: wgpu::RenderPipeline,
    translucent_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    scene_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    opaque: Vec<RenderMesh>,
    translucent: Vec<RenderMesh>,
    line_buffer: wgpu::Buffer,
    projection: Projection,
    clear_color: Vec3,
    light_intensity: f32,
    show_probe_rays: bool,
}

impl WalkerRenderer {
    pub fn new(gpu: &GpuContext, scene: &CourseScene, config: &RenderConfig) -> Self {
        let shader = gpu
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Walker Shader"),
                source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
            });

        let scene_layout = uniform_bind_group_layout(gpu, "Scene Bind Group Layout");
        let model_layout = uniform_bind_group_layout(gpu, "Model Bind Group Layout");

        let opaque_pipeline = create_walker_pipeline(
            gpu,
            "Opaque",
            &shader,
            &[&scene_layout, &model_layout],
            PipelineKind::Opaque,
        );
        let translucent_pipeline = create_walker_pipeline(
            gpu,
            "Translucent",
            &shader,
            &[&scene_layout, &model_layout],
            PipelineKind::Translucent,
        );
        let line_pipeline =
            create_walker_pipeline(gpu, "Probe Lines", &shader, &[&scene_layout], PipelineKind::Lines);

        let scene_buffer = gpu.create_uniform_buffer("Scene Uniforms", &SceneUniforms::default());
        let scene_bind_group =
            uniform_bind_group(gpu, "Scene Bind Group", &scene_layout, &scene_buffer);

        let (opaque_handles, translucent_handles) = split_by_translucency(scene);
        let upload = |handle: MeshHandle| -> Option<RenderMesh> {
            let surface = scene.surfaces.get(handle)?;
            let uniforms =
                ModelUniforms::new(surface.position, surface.rotation, &scene.material(handle));
            let model_buffer =
                gpu.create_uniform_buffer(&format!("{} Model Uniforms", surface.name), &uniforms);
            let model_bind_group = uniform_bind_group(
                gpu,
                &format!("{} Model Bind Group", surface.name),
                &model_layout,
                &model_buffer,
            );
            Some(RenderMesh {
                handle,
                buffer: MeshBuffer::from_mesh(gpu, &surface.name, &surface.mesh),
                model_buffer,
                model_bind_group,
            })
        };
        let opaque: Vec<RenderMesh> = opaque_handles.into_iter().filter_map(&upload).collect();
        let translucent: Vec<RenderMesh> =
            translucent_handles.into_iter().filter_map(&upload).collect();

        let line_buffer = gpu.create_dynamic_vertex_buffer(
            "Probe Line Buffer",
            (PROBE_LINE_VERTICES * std::mem::size_of::<LineVertex>()) as u64,
        );

        debug!(
            opaque = opaque.len(),
            translucent = translucent.len(),
            "walker renderer ready"
        );

        Self {
            opaque_pipeline,
            translucent_pipeline,
            line_pipeline,
            scene_buffer,
            scene_bind_group,
            opaque,
            translucent,
            line_buffer,
            projection: config.projection(),
            clear_color: config.clear_color,
            light_intensity: config.light_intensity,
            show_probe_rays: config.show_probe_rays,
        }
    }

    pub fn show_probe_rays(&self) -> bool {
        self.show_probe_rays
    }

    pub fn set_show_probe_rays(&mut self, show: bool) {
        self.show_probe_rays = show;
    }

    /// Upload this frame's uniforms and draw the simulation.
    pub fn render(
        &mut self,
        gpu: &GpuContext,
        sim: &WalkerSimulation,
    ) -> Result<(), wgpu::SurfaceError> {
        let pose = sim.camera().get_pose();
        let view_proj = view_projection(&self.projection, gpu.aspect(), pose.view_matrix());
        let scene_uniforms =
            SceneUniforms::new(view_proj, pose.position, sim.fog(), self.light_intensity);
        gpu.write_buffer(&self.scene_buffer, &[scene_uniforms]);

        let scene = sim.scene();
        for mesh in self.opaque.iter().chain(&self.translucent) {
            if let Some(surface) = scene.surfaces.get(mesh.handle) {
                let uniforms = ModelUniforms::new(
                    surface.position,
                    surface.rotation,
                    &scene.material(mesh.handle),
                );
                gpu.write_buffer(&mesh.model_buffer, &[uniforms]);
            }
        }

        if self.show_probe_rays {
            let lines = probe_ray_lines(sim.probe(), sim.player().position);
            gpu.write_buffer(&self.line_buffer, &lines);
        }

        let output = gpu.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Walker Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Walker Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: self.clear_color.x as f64,
                            g: self.clear_color.y as f64,
                            b: self.clear_color.z as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &gpu.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_bind_group(0, &self.scene_bind_group, &[]);

            render_pass.set_pipeline(&self.opaque_pipeline);
            for mesh in &self.opaque {
                render_pass.set_bind_group(1, &mesh.model_bind_group, &[]);
                draw_mesh_buffer(&mut render_pass, &mesh.buffer);
            }

            if self.show_probe_rays {
                render_pass.set_pipeline(&self.line_pipeline);
                render_pass.set_vertex_buffer(0, self.line_buffer.slice(..));
                render_pass.draw(0..PROBE_LINE_VERTICES as u32, 0..1);
            }

            // Translucent last so the course shows through the player
            render_pass.set_pipeline(&self.translucent_pipeline);
            for mesh in &self.translucent {
                render_pass.set_bind_group(1, &mesh.model_bind_group, &[]);
                draw_mesh_buffer(&mut render_pass, &mesh.buffer);
            }
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

/// Course meshes split into (opaque, translucent) draw lists.
pub fn split_by_translucency(scene: &CourseScene) -> (Vec<MeshHandle>, Vec<MeshHandle>) {
    scene
        .surfaces
        .iter()
        .map(|(handle, _)| handle)
        .partition(|&handle| !scene.material(handle).is_translucent())
}

/// Line list for the sole ray under `position` and the last ground normal.
pub fn probe_ray_lines(probe: &SurfaceProbe, position: Vec3) -> [LineVertex; PROBE_LINE_VERTICES] {
    let [a, b] = LineVertex::ray_segment(&probe.sole_ray(position), SOLE_RAY_COLOR);
    let [c, d] = LineVertex::ray_segment(probe.normal_ray(), NORMAL_RAY_COLOR);
    [a, b, c, d]
}

/// Combined view-projection for a camera pose.
pub fn view_projection(projection: &Projection, aspect: f32, view: Mat4) -> Mat4 {
    projection.matrix(aspect) * view
}
