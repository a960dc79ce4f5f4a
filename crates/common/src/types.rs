use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Visible drawing area in pixels.
///
/// Captured once from the window at startup and never updated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Bounds from integer window dimensions.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(width as f32, height as f32)
    }

    /// Largest square edge that still fits inside the bounds.
    pub fn max_square(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Whether a square of edge `size` at `position` lies fully inside.
    pub fn contains_square(&self, position: Vec2, size: f32) -> bool {
        position.x >= 0.0
            && position.y >= 0.0
            && position.x <= self.width - size
            && position.y <= self.height - size
    }
}

/// Per-frame motion parameters of the square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveParams {
    /// Pixels moved per frame along each active axis.
    pub speed: f32,
    /// Edge length of the square in pixels.
    pub size: f32,
}

impl Default for MoveParams {
    fn default() -> Self {
        Self {
            speed: 5.0,
            size: 50.0,
        }
    }
}

/// Axis-aligned rectangle with floating point origin and extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square with its top-left corner at `origin`.
    pub fn square(origin: Vec2, size: f32) -> Self {
        Self::new(origin.x, origin.y, size, size)
    }
}
