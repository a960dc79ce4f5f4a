use std::time::Duration;

use serde::Serialize;

use crate::clock::{Clock, Sleeper};

/// Frame duration for a target rate. `0` fps means uncapped.
pub fn target_frame_duration(fps: u32) -> Option<Duration> {
    (fps > 0).then(|| Duration::from_secs_f64(1.0 / fps as f64))
}

/// Sleep needed to stretch a frame of `elapsed` work to `target`.
///
/// Zero when the frame already took at least `target`. An overrun is not
/// carried into the next frame.
pub fn compute_frame_sleep(elapsed: Duration, target: Option<Duration>) -> Duration {
    match target {
        Some(frame_target) if elapsed < frame_target => frame_target - elapsed,
        _ => Duration::ZERO,
    }
}

/// Start of one frame, as returned by [`FramePacer::begin_frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTiming {
    pub start: Duration,
}

/// What the pacer measured and did at the end of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameReport {
    /// Wall-clock work time from `begin_frame` to `end_frame`.
    pub elapsed: Duration,
    /// Sleep requested afterwards; zero on overrun.
    pub slept: Duration,
}

impl FrameReport {
    pub fn overran(&self, target: Option<Duration>) -> bool {
        target.is_some_and(|t| self.elapsed >= t)
    }
}

/// Best-effort fixed frame rate: measure each frame, sleep off the remainder.
#[derive(Debug)]
pub struct FramePacer<C, S> {
    clock: C,
    sleeper: S,
    target: Option<Duration>,
}

impl<C: Clock, S: Sleeper> FramePacer<C, S> {
    pub fn new(clock: C, sleeper: S, target: Option<Duration>) -> Self {
        Self {
            clock,
            sleeper,
            target,
        }
    }

    pub fn with_fps(clock: C, sleeper: S, fps: u32) -> Self {
        Self::new(clock, sleeper, target_frame_duration(fps))
    }

    pub fn target(&self) -> Option<Duration> {
        self.target
    }

    /// Record the frame start. Call before any input, update or render work.
    pub fn begin_frame(&self) -> FrameTiming {
        FrameTiming {
            start: self.clock.now(),
        }
    }

    /// Measure the frame and sleep the remainder of the target duration.
    pub fn end_frame(&mut self, timing: FrameTiming) -> FrameReport {
        let elapsed = self.clock.now().saturating_sub(timing.start);
        let slept = compute_frame_sleep(elapsed, self.target);
        if slept > Duration::ZERO {
            self.sleeper.sleep(slept);
        }
        tracing::trace!(
            elapsed_us = elapsed.as_micros() as u64,
            slept_us = slept.as_micros() as u64,
            "frame paced"
        );
        FrameReport { elapsed, slept }
    }
}
