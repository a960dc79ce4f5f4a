//! Frame pacing: hold the loop to a target frame rate by sleeping off unused time.
//!
//! # Invariants
//! - Each frame's sleep depends only on that frame's elapsed time.
//! - No catch-up, no frame skipping, no accumulated debt.
//! - Sleep precision is whatever the host scheduler gives; this is soft real-time.

mod clock;
mod pacer;
mod timer;

pub use clock::{Clock, ManualClock, Sleeper, SystemClock, ThreadSleeper};
pub use pacer::{FramePacer, FrameReport, FrameTiming, compute_frame_sleep, target_frame_duration};
pub use timer::FrameTimer;

pub fn crate_info() -> &'static str {
    "movesquare-pacing v0.1.0"
}
