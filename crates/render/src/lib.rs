//! Rendering Adapter: renderer-agnostic 2D drawing interface.
//!
//! # Invariants
//! - Rendering reads simulation state; it never mutates it.
//! - Every frame is issued in the same order: clear, fill square, present.
//!
//! Backends implement [`Renderer`]; the frame loop only ever calls [`draw_frame`].

mod renderer;

pub use renderer::{DrawCommand, RecordingRenderer, Renderer, Scene, draw_frame};

pub fn crate_info() -> &'static str {
    "movesquare-render v0.1.0"
}
