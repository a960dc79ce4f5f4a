use glam::Mat4;

/// Orthographic projection from pixel coordinates to clip space.
///
/// Origin at the top-left corner, y pointing down, like window coordinates.
pub fn pixel_projection(width: u32, height: u32) -> Mat4 {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    Mat4::orthographic_rh(0.0, w, h, 0.0, -1.0, 1.0)
}
