//! Input mapping: queued key and system events become a persistent movement intent.
//!
//! # Invariants
//! - The queue is drained once per frame, in arrival order.
//! - Only the movement intent and the quit signal are affected; no rendering or timing.
//! - Unknown events are ignored, never reported as errors.

pub mod event;
pub mod intent;
pub mod mapper;

pub use event::{EventSource, InputEvent, Key, ScriptedEvents};
pub use intent::{Direction, MovementIntent};
pub use mapper::{DrainReport, InputMapper, KeyBindings};

pub fn crate_info() -> &'static str {
    "movesquare-input v0.1.0"
}
