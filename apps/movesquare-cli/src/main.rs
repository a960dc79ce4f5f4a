use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use movesquare_common::{Bounds, Color, MoveParams, Rect};
use movesquare_input::{InputEvent, Key, ScriptedEvents};
use movesquare_kernel::{FrameLoop, FrameOutcome, LoopConfig, SimState};
use movesquare_pacing::{Clock, ManualClock, compute_frame_sleep, target_frame_duration};
use movesquare_render::{RecordingRenderer, Renderer};
use serde::Serialize;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "movesquare-cli", about = "Headless tools for the movesquare frame loop")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Run the frame loop against scripted key holds, without a window
    Simulate {
        /// Frames to run before quitting
        #[arg(short, long, default_value = "60")]
        frames: usize,
        /// Key holds as KEY:START-END frame ranges, end exclusive (e.g. "d:0-40,w:10-20")
        #[arg(short, long, default_value = "")]
        script: String,
        /// Simulated work per frame in milliseconds
        #[arg(long, default_value = "2.0")]
        work_ms: f64,
        /// Target frames per second (0 = uncapped)
        #[arg(long, default_value = "60")]
        fps: u32,
        /// Pixels moved per frame while a key is held
        #[arg(long, default_value = "5.0")]
        speed: f32,
        /// Square edge length in pixels
        #[arg(long, default_value = "50.0")]
        size: f32,
        /// Drawing area width
        #[arg(long, default_value = "800")]
        width: u32,
        /// Drawing area height
        #[arg(long, default_value = "600")]
        height: u32,
        /// Emit one JSON line per frame
        #[arg(long)]
        json: bool,
    },
    /// Show the sleep the pacer would request after a frame of the given length
    Pace {
        /// Frame work time in milliseconds
        #[arg(short, long)]
        work_ms: f64,
        /// Target frames per second (0 = uncapped)
        #[arg(long, default_value = "60")]
        fps: u32,
    },
}

/// One key held over a half-open frame range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Hold {
    key: Key,
    start: usize,
    end: usize,
}

fn parse_script(script: &str) -> anyhow::Result<Vec<Hold>> {
    script
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|entry| -> anyhow::Result<Hold> {
            let (name, range) = entry
                .split_once(':')
                .with_context(|| format!("missing ':' in hold {entry:?}"))?;
            let key = Key::from_name(name.trim())
                .with_context(|| format!("unknown key {name:?} in hold {entry:?}"))?;
            let (start, end) = range
                .split_once('-')
                .with_context(|| format!("missing '-' in hold {entry:?}"))?;
            let start: usize = start.trim().parse().context("bad start frame")?;
            let end: usize = end.trim().parse().context("bad end frame")?;
            if end <= start {
                bail!("hold {entry:?} ends before it starts");
            }
            Ok(Hold { key, start, end })
        })
        .collect()
}

/// Per-frame event batches: key down at `start`, key up at `end`.
fn script_batches(holds: &[Hold], frames: usize) -> Vec<Vec<InputEvent>> {
    let mut batches = vec![Vec::new(); frames];
    for hold in holds {
        if let Some(batch) = batches.get_mut(hold.start) {
            batch.push(InputEvent::KeyDown(hold.key));
        }
        if let Some(batch) = batches.get_mut(hold.end) {
            batch.push(InputEvent::KeyUp(hold.key));
        }
    }
    batches
}

/// Recording renderer that burns a fixed amount of simulated time per frame.
struct SimulatedWork {
    inner: RecordingRenderer,
    clock: ManualClock,
    work: Duration,
}

impl Renderer for SimulatedWork {
    fn set_draw_color(&mut self, color: Color) {
        self.inner.set_draw_color(color);
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.inner.fill_rect(rect);
    }

    fn present(&mut self) {
        self.clock.advance(self.work);
        self.inner.present();
    }
}

#[derive(Serialize)]
struct FrameRecord {
    frame: u64,
    state: SimState,
    elapsed_ms: f64,
    slept_ms: f64,
}

/// Milliseconds from the command line as a `Duration`.
fn work_duration(work_ms: f64) -> anyhow::Result<Duration> {
    Duration::try_from_secs_f64(work_ms / 1000.0)
        .with_context(|| format!("work time {work_ms} ms is not a representable duration"))
}

struct SimulateArgs {
    frames: usize,
    script: String,
    work_ms: f64,
    json: bool,
}

fn simulate(config: &LoopConfig, args: &SimulateArgs) -> anyhow::Result<()> {
    config.validate().context("invalid configuration")?;
    let work = work_duration(args.work_ms)?;
    let holds = parse_script(&args.script)?;
    tracing::debug!(holds = holds.len(), frames = args.frames, "hold script parsed");
    let mut events = ScriptedEvents::new(script_batches(&holds, args.frames));

    let clock = ManualClock::new();
    let bounds = Bounds::from_size(config.width, config.height);
    let mut frame_loop = FrameLoop::new(config, bounds, clock.clone(), clock.clone())?;
    let mut renderer = SimulatedWork {
        inner: RecordingRenderer::new(),
        clock: clock.clone(),
        work,
    };

    if args.json {
        println!("{}", serde_json::to_string(config)?);
    }
    while let FrameOutcome::Presented(report) = frame_loop.run_frame(&mut events, &mut renderer) {
        if args.json {
            let record = FrameRecord {
                frame: frame_loop.frames_presented(),
                state: *frame_loop.state(),
                elapsed_ms: report.elapsed.as_secs_f64() * 1000.0,
                slept_ms: report.slept.as_secs_f64() * 1000.0,
            };
            println!("{}", serde_json::to_string(&record)?);
        }
    }

    if !args.json {
        let pos = frame_loop.state().position;
        let timer = frame_loop.timer();
        println!(
            "Simulated {} frames in {:.2} ms of loop time",
            frame_loop.frames_presented(),
            clock.now().as_secs_f64() * 1000.0
        );
        println!("Final position: ({:.2}, {:.2})", pos.x, pos.y);
        println!(
            "Frame work: avg={:?} max={:?} overruns={}",
            timer.average(),
            timer.max(),
            timer.overruns()
        );
        print!("{}", renderer.inner.describe());
    }
    Ok(())
}

/// `RUST_LOG` when set and valid, otherwise `info` or `debug` with `--verbose`.
fn log_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "info" };
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("movesquare-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", movesquare_common::crate_info());
            println!("input: {}", movesquare_input::crate_info());
            println!("pacing: {}", movesquare_pacing::crate_info());
            println!("render: {}", movesquare_render::crate_info());
            println!("kernel: {}", movesquare_kernel::crate_info());
        }
        Commands::Simulate {
            frames,
            script,
            work_ms,
            fps,
            speed,
            size,
            width,
            height,
            json,
        } => {
            let config = LoopConfig {
                width,
                height,
                target_fps: fps,
                motion: MoveParams { speed, size },
                ..LoopConfig::default()
            };
            let args = SimulateArgs {
                frames,
                script,
                work_ms,
                json,
            };
            simulate(&config, &args)?;
        }
        Commands::Pace { work_ms, fps } => {
            let target = target_frame_duration(fps);
            let sleep = compute_frame_sleep(work_duration(work_ms)?, target);
            match target {
                Some(t) => println!(
                    "target={:.3} ms work={work_ms:.3} ms sleep={:.3} ms",
                    t.as_secs_f64() * 1000.0,
                    sleep.as_secs_f64() * 1000.0
                ),
                None => println!("uncapped: no sleep"),
            }
        }
    }

    Ok(())
}
