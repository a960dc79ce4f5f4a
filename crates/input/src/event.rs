use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Physical keys the frame loop knows how to bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl Key {
    /// Parse a key name as used by hold scripts (`w`, `a`, `up`, `left`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "w" => Some(Key::W),
            "a" => Some(Key::A),
            "s" => Some(Key::S),
            "d" => Some(Key::D),
            "up" => Some(Key::ArrowUp),
            "down" => Some(Key::ArrowDown),
            "left" => Some(Key::ArrowLeft),
            "right" => Some(Key::ArrowRight),
            _ => None,
        }
    }
}

/// A queued input or system event, already translated from the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// The user closed the window or the system asked the program to stop.
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// Anything else; ignored by the mapper.
    Other,
}

/// Non-blocking event queue.
///
/// `None` means the queue is empty for now. That is the normal end of a
/// per-frame drain, not an error.
pub trait EventSource {
    fn poll_event(&mut self) -> Option<InputEvent>;
}

impl EventSource for VecDeque<InputEvent> {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.pop_front()
    }
}

/// Event source fed from a prepared list of per-frame batches.
///
/// Each drain sees exactly one batch: the batch is loaded on the first poll
/// of a frame and `None` is returned once it runs dry. When every batch has
/// been consumed the source reports `Quit`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    batches: VecDeque<Vec<InputEvent>>,
    current: Option<VecDeque<InputEvent>>,
}

impl ScriptedEvents {
    pub fn new(batches: Vec<Vec<InputEvent>>) -> Self {
        Self {
            batches: batches.into(),
            current: None,
        }
    }

    /// Frames still queued, not counting the one being drained.
    pub fn remaining_frames(&self) -> usize {
        self.batches.len()
    }
}

impl EventSource for ScriptedEvents {
    fn poll_event(&mut self) -> Option<InputEvent> {
        let current = self.current.get_or_insert_with(|| {
            self.batches
                .pop_front()
                .unwrap_or_else(|| vec![InputEvent::Quit])
                .into()
        });
        let next = current.pop_front();
        if next.is_none() {
            self.current = None;
        }
        next
    }
}
