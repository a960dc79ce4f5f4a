use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;
use movesquare_common::{Bounds, Color, MoveParams};
use movesquare_input::{InputEvent, Key};
use movesquare_kernel::{FrameLoop, FrameOutcome, LoopConfig, Resources};
use movesquare_pacing::{SystemClock, ThreadSleeper};
use movesquare_render_wgpu::WgpuSurface;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser, Debug)]
#[command(
    name = "movesquare-desktop",
    about = "Move a square around a window with W/A/S/D"
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Window title
    #[arg(long, default_value = "Simple Game Loop")]
    title: String,

    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Target frames per second (0 = uncapped)
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Pixels moved per frame while a key is held
    #[arg(long, default_value_t = 5.0)]
    speed: f32,

    /// Square edge length in pixels
    #[arg(long, default_value_t = 50.0)]
    size: f32,

    /// Starting x of the square's top-left corner
    #[arg(long, default_value_t = 100.0)]
    x: f32,

    /// Starting y of the square's top-left corner
    #[arg(long, default_value_t = 100.0)]
    y: f32,

    /// Background color (#rrggbb)
    #[arg(long, default_value = "#000000", value_parser = parse_color)]
    background: Color,

    /// Square color (#rrggbb)
    #[arg(long, default_value = "#ff0000", value_parser = parse_color)]
    color: Color,

    /// Also move with the arrow keys
    #[arg(long)]
    arrow_keys: bool,

    /// Frames between frame-time statistics (debug level, 0 = off)
    #[arg(long, default_value_t = 300)]
    stats_interval: u64,
}

impl Cli {
    fn loop_config(&self) -> LoopConfig {
        LoopConfig {
            title: self.title.clone(),
            width: self.width,
            height: self.height,
            target_fps: self.fps,
            motion: MoveParams {
                speed: self.speed,
                size: self.size,
            },
            initial_position: Vec2::new(self.x, self.y),
            background: self.background,
            square_color: self.color,
            arrow_keys: self.arrow_keys,
            stats_interval: self.stats_interval,
        }
    }
}

fn parse_color(s: &str) -> Result<Color, String> {
    Color::from_hex(s).ok_or_else(|| format!("expected #rrggbb, got {s:?}"))
}

/// Physical key to loop key. Layout independent, like a scancode.
fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyA => Some(Key::A),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::KeyD => Some(Key::D),
        KeyCode::ArrowUp => Some(Key::ArrowUp),
        KeyCode::ArrowDown => Some(Key::ArrowDown),
        KeyCode::ArrowLeft => Some(Key::ArrowLeft),
        KeyCode::ArrowRight => Some(Key::ArrowRight),
        _ => None,
    }
}

fn key_event(code: KeyCode, state: ElementState) -> InputEvent {
    match (map_key(code), state) {
        (Some(key), ElementState::Pressed) => InputEvent::KeyDown(key),
        (Some(key), ElementState::Released) => InputEvent::KeyUp(key),
        (None, _) => InputEvent::Other,
    }
}

/// Window event to queued input event. `None` for window plumbing the loop never sees.
fn translate(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::CloseRequested => Some(InputEvent::Quit),
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(code),
                    state,
                    ..
                },
            ..
        } => Some(key_event(*code, *state)),
        WindowEvent::KeyboardInput { .. } => Some(InputEvent::Other),
        _ => None,
    }
}

struct DesktopApp {
    config: LoopConfig,
    events: VecDeque<InputEvent>,
    frame_loop: Option<FrameLoop<SystemClock, ThreadSleeper>>,
    resources: Resources<Arc<Window>, WgpuSurface>,
    failure: Option<anyhow::Error>,
}

impl DesktopApp {
    fn new(config: LoopConfig) -> Self {
        Self {
            config,
            events: VecDeque::new(),
            frame_loop: None,
            resources: Resources::new(),
            failure: None,
        }
    }

    /// Acquire window then surface, and capture the bounds once.
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );
        self.resources.set_window(window.clone());

        let size = window.inner_size();
        let surface = WgpuSurface::new(window, size.width, size.height)
            .context("failed to create drawing surface")?;
        let (width, height) = surface.size();
        tracing::info!(backend = ?surface.backend(), width, height, "surface ready");
        self.resources.set_surface(surface);

        let bounds = Bounds::from_size(size.width, size.height);
        let frame_loop = FrameLoop::new(&self.config, bounds, SystemClock::new(), ThreadSleeper)
            .context("configuration does not fit the window")?;
        tracing::debug!(target_frame = ?frame_loop.pacer().target(), "frame loop ready");
        self.frame_loop = Some(frame_loop);
        Ok(())
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if self.resources.release() {
            tracing::info!("window and surface released");
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for DesktopApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.resources.window().is_some() || self.resources.is_released() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            tracing::error!("initialization failed: {e:#}");
            self.failure = Some(e);
            self.shutdown(event_loop);
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let WindowEvent::Resized(size) = event {
            if let Some(surface) = self.resources.surface_mut() {
                surface.resize(size.width, size.height);
            }
            return;
        }
        if let Some(input) = translate(&event) {
            self.events.push_back(input);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(frame_loop), Some(surface)) =
            (self.frame_loop.as_mut(), self.resources.surface_mut())
        else {
            return;
        };

        if frame_loop.run_frame(&mut self.events, surface) == FrameOutcome::Stopped {
            self.shutdown(event_loop);
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.resources.release();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    let config = cli.loop_config();
    config.validate().context("invalid configuration")?;
    tracing::info!(
        title = %config.title,
        width = config.width,
        height = config.height,
        fps = config.target_fps,
        "movesquare-desktop starting"
    );

    let event_loop = EventLoop::new()
        .inspect_err(|e| tracing::error!("failed to initialize windowing: {e}"))
        .context("failed to initialize windowing")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DesktopApp::new(config);
    event_loop.run_app(&mut app)?;

    if let Some(err) = app.failure.take() {
        return Err(err);
    }
    tracing::info!("movesquare-desktop stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_and_arrows_map_to_keys() {
        assert_eq!(map_key(KeyCode::KeyW), Some(Key::W));
        assert_eq!(map_key(KeyCode::KeyD), Some(Key::D));
        assert_eq!(map_key(KeyCode::ArrowLeft), Some(Key::ArrowLeft));
        assert_eq!(map_key(KeyCode::Space), None);
    }

    #[test]
    fn key_state_picks_down_or_up() {
        assert_eq!(
            key_event(KeyCode::KeyS, ElementState::Pressed),
            InputEvent::KeyDown(Key::S)
        );
        assert_eq!(
            key_event(KeyCode::KeyS, ElementState::Released),
            InputEvent::KeyUp(Key::S)
        );
        assert_eq!(
            key_event(KeyCode::Enter, ElementState::Pressed),
            InputEvent::Other
        );
    }

    #[test]
    fn close_request_becomes_quit() {
        assert_eq!(translate(&WindowEvent::CloseRequested), Some(InputEvent::Quit));
        assert_eq!(translate(&WindowEvent::RedrawRequested), None);
    }

    #[test]
    fn default_flags_reproduce_default_config() {
        let cli = Cli::parse_from(["movesquare-desktop"]);
        assert_eq!(cli.loop_config(), LoopConfig::default());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "movesquare-desktop",
            "--width",
            "1024",
            "--fps",
            "30",
            "--speed",
            "2.5",
            "--color",
            "#00ff00",
            "--arrow-keys",
        ]);
        let config = cli.loop_config();
        assert_eq!(config.width, 1024);
        assert_eq!(config.target_fps, 30);
        assert_eq!(config.motion.speed, 2.5);
        assert_eq!(config.square_color, Color::rgb(0, 255, 0));
        assert!(config.arrow_keys);
    }

    #[test]
    fn bad_color_is_rejected() {
        assert!(Cli::try_parse_from(["movesquare-desktop", "--color", "red"]).is_err());
    }

    #[test]
    fn non_finite_start_position_fails_validation() {
        let cli = Cli::parse_from(["movesquare-desktop", "--x", "NaN"]);
        assert!(cli.loop_config().validate().is_err());
    }
}
