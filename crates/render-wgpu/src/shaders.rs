/// WGSL shader for instanced, solid-colored rectangles in pixel space.
///
/// Each instance is one rectangle (`x, y, w, h`) plus a color; the six
/// corners of its two triangles come from the vertex index.
pub const RECT_SHADER: &str = r#"
struct Uniforms {
    projection: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct RectInput {
    @location(0) rect: vec4<f32>,
    @location(1) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_rect(@builtin(vertex_index) index: u32, rect: RectInput) -> VertexOutput {
    var corners = array<vec2<f32>, 6>(
        vec2<f32>(0.0, 0.0),
        vec2<f32>(1.0, 0.0),
        vec2<f32>(1.0, 1.0),
        vec2<f32>(0.0, 0.0),
        vec2<f32>(1.0, 1.0),
        vec2<f32>(0.0, 1.0),
    );
    let pixel = rect.rect.xy + corners[index] * rect.rect.zw;

    var out: VertexOutput;
    out.clip_position = uniforms.projection * vec4<f32>(pixel, 0.0, 1.0);
    out.color = rect.color;
    return out;
}

@fragment
fn fs_rect(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;

/// Vertices drawn per rectangle instance.
pub const RECT_VERTEX_COUNT: u32 = 6;
