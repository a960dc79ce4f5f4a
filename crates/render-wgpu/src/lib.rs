//! wgpu render backend for the frame loop.
//!
//! Clears the surface and draws filled rectangles in window pixel coordinates.
//!
//! # Invariants
//! - Implements the renderer-agnostic `Renderer` trait; the loop never touches wgpu.
//! - Surface errors during a frame are logged and the frame is dropped.
//! - Frame rate is governed by the pacer; presentation does not wait for vsync.

mod error;
mod gpu;
mod projection;
mod shaders;

pub use error::SurfaceInitError;
pub use gpu::WgpuSurface;
pub use projection::pixel_projection;
