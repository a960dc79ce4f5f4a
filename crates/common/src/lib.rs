//! Shared value types: drawing bounds, motion parameters, colors, rectangles.
//!
//! # Invariants
//! - Plain data only; no behavior that depends on a window or a clock.

mod color;
mod types;

pub use color::Color;
pub use types::{Bounds, MoveParams, Rect};

pub fn crate_info() -> &'static str {
    "movesquare-common v0.1.0"
}
