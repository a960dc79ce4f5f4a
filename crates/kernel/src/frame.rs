use movesquare_common::{Bounds, Color, MoveParams};
use movesquare_input::{EventSource, InputMapper, KeyBindings};
use movesquare_pacing::{Clock, FramePacer, FrameReport, FrameTimer, Sleeper};
use movesquare_render::{Renderer, Scene, draw_frame};

use crate::config::{ConfigError, LoopConfig};
use crate::motion::step_position;
use crate::state::{LoopPhase, SimState};

const STATS_WINDOW: usize = 120;

/// Result of one [`FrameLoop::run_frame`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A frame was updated, drawn and paced.
    Presented(FrameReport),
    /// The loop has stopped; nothing was updated or drawn.
    Stopped,
}

/// Drives one frame at a time: drain input, move, draw, pace.
///
/// Windowing, drawing and time are injected, so the same controller runs
/// under a real window, headless, or against a fake clock.
#[derive(Debug)]
pub struct FrameLoop<C, S> {
    state: SimState,
    phase: LoopPhase,
    bounds: Bounds,
    motion: MoveParams,
    background: Color,
    square_color: Color,
    mapper: InputMapper,
    pacer: FramePacer<C, S>,
    timer: FrameTimer,
    stats_interval: u64,
    frames: u64,
}

impl<C: Clock, S: Sleeper> FrameLoop<C, S> {
    /// `bounds` is captured once here and used for the whole run.
    pub fn new(
        config: &LoopConfig,
        bounds: Bounds,
        clock: C,
        sleeper: S,
    ) -> Result<Self, ConfigError> {
        config.validate_for(bounds)?;

        let bindings = if config.arrow_keys {
            KeyBindings::with_arrow_keys()
        } else {
            KeyBindings::default()
        };

        tracing::info!(
            width = bounds.width,
            height = bounds.height,
            target_fps = config.target_fps,
            speed = config.motion.speed,
            size = config.motion.size,
            "frame loop ready"
        );

        Ok(Self {
            state: SimState::new(config.initial_position),
            phase: LoopPhase::Running,
            bounds,
            motion: config.motion,
            background: config.background,
            square_color: config.square_color,
            mapper: InputMapper::new(bindings),
            pacer: FramePacer::with_fps(clock, sleeper, config.target_fps),
            timer: FrameTimer::new(STATS_WINDOW),
            stats_interval: config.stats_interval,
            frames: 0,
        })
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }

    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    pub fn pacer(&self) -> &FramePacer<C, S> {
        &self.pacer
    }

    /// What the next frame would draw for the current state.
    pub fn scene(&self) -> Scene {
        Scene::new(
            self.state.position,
            self.motion.size,
            self.background,
            self.square_color,
        )
    }

    /// Run one iteration.
    ///
    /// A quit observed while draining abandons the frame: no update, no
    /// draw, no pacing sleep. Once stopped, further calls do nothing.
    pub fn run_frame<E, R>(&mut self, events: &mut E, renderer: &mut R) -> FrameOutcome
    where
        E: EventSource + ?Sized,
        R: Renderer + ?Sized,
    {
        if !self.phase.is_running() {
            return FrameOutcome::Stopped;
        }

        let timing = self.pacer.begin_frame();

        let drained = self.mapper.drain(events, &mut self.state.intent);
        if drained.quit_requested {
            self.phase.request_stop();
            self.phase.complete_stop();
            tracing::info!(frames = self.frames, "frame loop stopped");
            return FrameOutcome::Stopped;
        }

        self.state.position = step_position(
            self.state.position,
            self.state.intent,
            &self.motion,
            self.bounds,
        );

        draw_frame(renderer, &self.scene());

        let report = self.pacer.end_frame(timing);
        self.timer
            .record(report.elapsed, report.overran(self.pacer.target()));
        self.frames += 1;

        if self.stats_interval > 0 && self.frames % self.stats_interval == 0 {
            tracing::debug!(
                frames = self.frames,
                avg_us = self.timer.average().as_micros() as u64,
                max_us = self.timer.max().as_micros() as u64,
                min_us = self.timer.min().as_micros() as u64,
                overruns = self.timer.overruns(),
                "frame stats"
            );
        }

        FrameOutcome::Presented(report)
    }

    /// Run frames until a quit is observed. Returns the frames presented.
    pub fn run<E, R>(&mut self, events: &mut E, renderer: &mut R) -> u64
    where
        E: EventSource + ?Sized,
        R: Renderer + ?Sized,
    {
        while let FrameOutcome::Presented(_) = self.run_frame(events, renderer) {}
        self.frames
    }
}
