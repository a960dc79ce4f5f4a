use glam::Vec2;
use movesquare_input::MovementIntent;
use serde::{Deserialize, Serialize};

/// Mutable simulation state threaded through every frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    pub position: Vec2,
    pub intent: MovementIntent,
}

impl SimState {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            intent: MovementIntent::new(),
        }
    }
}

/// Lifecycle of the frame loop.
///
/// `Running -> Stopping` when a quit is observed, `Stopping -> Stopped` once
/// the in-flight frame has been abandoned. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopPhase {
    #[default]
    Running,
    Stopping,
    Stopped,
}

impl LoopPhase {
    pub fn is_running(self) -> bool {
        self == LoopPhase::Running
    }

    /// Running -> Stopping. No effect in any other phase.
    pub fn request_stop(&mut self) {
        if *self == LoopPhase::Running {
            *self = LoopPhase::Stopping;
        }
    }

    /// Stopping -> Stopped. Returns `true` only for that transition.
    pub fn complete_stop(&mut self) -> bool {
        if *self == LoopPhase::Stopping {
            *self = LoopPhase::Stopped;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_no_intent() {
        let s = SimState::new(Vec2::new(100.0, 100.0));
        assert!(s.intent.is_empty());
        assert_eq!(s.position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn phase_walks_forward_only() {
        let mut phase = LoopPhase::default();
        assert!(phase.is_running());
        assert!(!phase.complete_stop());

        phase.request_stop();
        assert_eq!(phase, LoopPhase::Stopping);
        assert!(phase.complete_stop());
        assert_eq!(phase, LoopPhase::Stopped);

        phase.request_stop();
        assert!(!phase.complete_stop());
        assert_eq!(phase, LoopPhase::Stopped);
    }
}
