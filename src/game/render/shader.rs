//! Shader Source
//!
//! WGSL for the walker renderer: a grid/solid mesh shader with linear fog,
//! and a flat-colour line shader for the probe rays.

/// Mesh (`vs_main`/`fs_main`) and line (`vs_line`/`fs_line`) entry points
pub const SHADER_SOURCE: &str = r#"
struct SceneUniforms {
    view_proj: mat4x4<f32>,
    // xyz = camera position, w = light intensity
    camera_pos: vec4<f32>,
    fog_color: vec4<f32>,
    // x = start, y = end
    fog_params: vec4<f32>,
}

struct ModelUniforms {
    model: mat4x4<f32>,
    base_color: vec4<f32>,
    // w = minor line visibility
    line_color: vec4<f32>,
    // x = grid flag, y = grid ratio, z = major unit frequency
    grid_params: vec4<f32>,
}

@group(0) @binding(0) var<uniform> scene: SceneUniforms;
@group(1) @binding(0) var<uniform> model: ModelUniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) normal: vec3<f32>,
}

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let world = model.model * vec4<f32>(in.position, 1.0);
    out.world_pos = world.xyz;
    // Rotation + translation only, so the upper 3x3 is orthonormal
    out.normal = (model.model * vec4<f32>(in.normal, 0.0)).xyz;
    out.clip_position = scene.view_proj * world;
    return out;
}

// 1.0 on a grid line, 0.0 between lines. The axis the surface faces is
// skipped so walls and floors both show a 2D grid.
fn grid_lines(coord: vec3<f32>, n: vec3<f32>) -> f32 {
    let width = max(fwidth(coord), vec3<f32>(0.0001));
    let dist = abs(fract(coord - 0.5) - 0.5) / width;
    let line = vec3<f32>(1.0) - clamp(dist, vec3<f32>(0.0), vec3<f32>(1.0));
    let mask = vec3<f32>(1.0) - step(vec3<f32>(0.9), abs(n));
    return max(max(line.x * mask.x, line.y * mask.y), line.z * mask.z);
}

fn linear_fog(distance: f32) -> f32 {
    let start = scene.fog_params.x;
    let end = scene.fog_params.y;
    let span = end - start;
    // A collapsed band is a hard cut at `start`
    let hard_cut = select(0.0, 1.0, distance < start);
    let band = clamp((end - distance) / max(span, 0.0001), 0.0, 1.0);
    return select(band, hard_cut, span <= 0.0);
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let n = normalize(in.normal);

    // Derivatives first, in uniform control flow
    let ratio = max(model.grid_params.y, 0.0001);
    let major_every = max(model.grid_params.z, 1.0);
    let minor = grid_lines(in.world_pos / ratio, n);
    let major = grid_lines(in.world_pos / (ratio * major_every), n);

    let line_strength = max(major, minor * model.line_color.w);
    let grid_color = mix(model.base_color.rgb, model.line_color.rgb, line_strength);

    // Hemispheric light: sky +Y white, ground black
    let hemi = mix(0.0, 1.0, n.y * 0.5 + 0.5) * scene.camera_pos.w;
    let lit_color = model.base_color.rgb * hemi;

    let is_grid = model.grid_params.x > 0.5;
    let surface = select(lit_color, grid_color, is_grid);

    let distance = length(in.world_pos - scene.camera_pos.xyz);
    let color = mix(scene.fog_color.rgb, surface, linear_fog(distance));
    return vec4<f32>(color, model.base_color.a);
}

struct LineInput {
    @location(0) position: vec3<f32>,
    @location(1) color: vec3<f32>,
}

struct LineOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
}

@vertex
fn vs_line(in: LineInput) -> LineOutput {
    var out: LineOutput;
    out.clip_position = scene.view_proj * vec4<f32>(in.position, 1.0);
    out.color = in.color;
    return out;
}

@fragment
fn fs_line(in: LineOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(in.color, 1.0);
}
"#;
