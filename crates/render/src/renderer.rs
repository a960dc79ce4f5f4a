use glam::Vec2;
use movesquare_common::{Color, Rect};
use serde::Serialize;

/// Immediate-mode 2D drawing surface.
///
/// Calls between two `present`s build one frame. Implementations own any
/// GPU or window resources; failures inside `present` are theirs to report.
pub trait Renderer {
    /// Color used by the following `clear` and `fill_rect` calls.
    fn set_draw_color(&mut self, color: Color);

    /// Fill the whole surface with the current draw color.
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle, in pixels, with the current draw color.
    fn fill_rect(&mut self, rect: Rect);

    /// Show the completed frame.
    fn present(&mut self);
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scene {
    pub background: Color,
    pub square: Rect,
    pub square_color: Color,
}

impl Scene {
    pub fn new(position: Vec2, size: f32, background: Color, square_color: Color) -> Self {
        Self {
            background,
            square: Rect::square(position, size),
            square_color,
        }
    }
}

/// Issue one frame: clear to the background, fill the square, present.
pub fn draw_frame<R: Renderer + ?Sized>(renderer: &mut R, scene: &Scene) {
    renderer.set_draw_color(scene.background);
    renderer.clear();
    renderer.set_draw_color(scene.square_color);
    renderer.fill_rect(scene.square);
    renderer.present();
}

/// A single recorded renderer call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DrawCommand {
    SetDrawColor(Color),
    Clear,
    FillRect(Rect),
    Present,
}

/// Renderer that records calls instead of drawing.
///
/// Backs headless runs and tests.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }

    /// Commands of the most recently presented frame, `Present` included.
    pub fn last_frame(&self) -> &[DrawCommand] {
        let Some(end) = self
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::Present)
        else {
            return &[];
        };
        let start = self.commands[..end]
            .iter()
            .rposition(|c| *c == DrawCommand::Present)
            .map_or(0, |i| i + 1);
        &self.commands[start..=end]
    }

    /// Human-readable dump of the last presented frame.
    pub fn describe(&self) -> String {
        let mut out = format!("=== Frame {} ===\n", self.frames);
        for cmd in self.last_frame() {
            let line = match cmd {
                DrawCommand::SetDrawColor(c) => format!("  color {c}\n"),
                DrawCommand::Clear => "  clear\n".to_string(),
                DrawCommand::FillRect(r) => format!(
                    "  fill_rect x={:.2} y={:.2} w={:.2} h={:.2}\n",
                    r.x, r.y, r.w, r.h
                ),
                DrawCommand::Present => "  present\n".to_string(),
            };
            out.push_str(&line);
        }
        out
    }
}

impl Renderer for RecordingRenderer {
    fn set_draw_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetDrawColor(color));
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
        self.frames += 1;
    }
}
