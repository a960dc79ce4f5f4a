use std::collections::VecDeque;
use std::time::Duration;

/// Rolling window of recent frame work times, for instrumentation.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    samples: VecDeque<Duration>,
    capacity: usize,
    overruns: u64,
    total_frames: u64,
}

impl FrameTimer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            overruns: 0,
            total_frames: 0,
        }
    }

    /// Add one frame's work time; `overran` marks frames that missed the target.
    pub fn record(&mut self, work: Duration, overran: bool) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(work);
        self.total_frames += 1;
        if overran {
            self.overruns += 1;
        }
    }

    pub fn average(&self) -> Duration {
        if self.samples.is_empty() {
            return Duration::ZERO;
        }
        self.samples.iter().sum::<Duration>() / self.samples.len() as u32
    }

    pub fn max(&self) -> Duration {
        self.samples.iter().copied().max().unwrap_or(Duration::ZERO)
    }

    pub fn min(&self) -> Duration {
        self.samples.iter().copied().min().unwrap_or(Duration::ZERO)
    }

    /// Samples currently in the window.
    pub fn count(&self) -> usize {
        self.samples.len()
    }

    /// Frames recorded since creation, including those evicted from the window.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    pub fn overruns(&self) -> u64 {
        self.overruns
    }
}
