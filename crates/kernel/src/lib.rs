//! Frame Loop Controller: input drain, position update, render submit, pacing.
//!
//! # Invariants
//! - One thread, strictly sequential steps; the pacing sleep is the only suspension point.
//! - The position update is a pure function of position, intent, motion and bounds.
//! - After a quit is observed no further updates or renders happen.
//! - Window and surface are released surface-first, exactly once.

pub mod config;
pub mod frame;
pub mod motion;
pub mod resources;
pub mod state;

pub use config::{ConfigError, LoopConfig};
pub use frame::{FrameLoop, FrameOutcome};
pub use motion::step_position;
pub use resources::Resources;
pub use state::{LoopPhase, SimState};

pub fn crate_info() -> &'static str {
    "movesquare-kernel v0.1.0"
}
