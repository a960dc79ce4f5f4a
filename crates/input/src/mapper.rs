use crate::event::{EventSource, InputEvent, Key};
use crate::intent::{Direction, MovementIntent};

/// Key to direction table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    entries: Vec<(Key, Direction)>,
}

impl Default for KeyBindings {
    /// W/A/S/D.
    fn default() -> Self {
        Self {
            entries: vec![
                (Key::W, Direction::Up),
                (Key::S, Direction::Down),
                (Key::A, Direction::Left),
                (Key::D, Direction::Right),
            ],
        }
    }
}

impl KeyBindings {
    /// Default bindings plus the arrow keys.
    pub fn with_arrow_keys() -> Self {
        let mut bindings = Self::default();
        bindings.bind(Key::ArrowUp, Direction::Up);
        bindings.bind(Key::ArrowDown, Direction::Down);
        bindings.bind(Key::ArrowLeft, Direction::Left);
        bindings.bind(Key::ArrowRight, Direction::Right);
        bindings
    }

    /// Bind `key` to `dir`, replacing any previous binding of that key.
    pub fn bind(&mut self, key: Key, dir: Direction) {
        self.entries.retain(|(k, _)| *k != key);
        self.entries.push((key, dir));
    }

    pub fn lookup(&self, key: Key) -> Option<Direction> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, d)| *d)
    }
}

/// Result of draining one frame's worth of events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrainReport {
    /// Events consumed, including ignored ones.
    pub events: usize,
    /// A quit signal was seen during this drain.
    pub quit_requested: bool,
}

/// Translates key presses and releases into a persistent [`MovementIntent`].
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    bindings: KeyBindings,
}

impl InputMapper {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    /// Apply one event to `intent`. Returns `true` for a quit signal.
    pub fn apply(&self, event: InputEvent, intent: &mut MovementIntent) -> bool {
        let (key, held) = match event {
            InputEvent::Quit => return true,
            InputEvent::KeyDown(key) => (key, true),
            InputEvent::KeyUp(key) => (key, false),
            InputEvent::Other => return false,
        };
        if let Some(dir) = self.bindings.lookup(key) {
            if intent.is_active(dir) != held {
                tracing::trace!(?dir, held, "movement intent changed");
            }
            intent.set(dir, held);
        }
        false
    }

    /// Drain every queued event in arrival order.
    ///
    /// A quit does not stop the drain; the queue is always emptied.
    pub fn drain<E: EventSource + ?Sized>(
        &self,
        source: &mut E,
        intent: &mut MovementIntent,
    ) -> DrainReport {
        let mut report = DrainReport::default();
        while let Some(event) = source.poll_event() {
            report.events += 1;
            if self.apply(event, intent) && !report.quit_requested {
                tracing::info!("quit requested");
                report.quit_requested = true;
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn queue(events: &[InputEvent]) -> VecDeque<InputEvent> {
        events.iter().copied().collect()
    }

    #[test]
    fn default_bindings_are_wasd() {
        let b = KeyBindings::default();
        assert_eq!(b.lookup(Key::W), Some(Direction::Up));
        assert_eq!(b.lookup(Key::S), Some(Direction::Down));
        assert_eq!(b.lookup(Key::A), Some(Direction::Left));
        assert_eq!(b.lookup(Key::D), Some(Direction::Right));
        assert_eq!(b.lookup(Key::ArrowUp), None);
    }

    #[test]
    fn arrow_keys_are_aliases() {
        let b = KeyBindings::with_arrow_keys();
        assert_eq!(b.lookup(Key::ArrowLeft), Some(Direction::Left));
        assert_eq!(b.lookup(Key::A), Some(Direction::Left));
    }

    #[test]
    fn rebinding_replaces_previous_entry() {
        let mut b = KeyBindings::default();
        b.bind(Key::W, Direction::Down);
        assert_eq!(b.lookup(Key::W), Some(Direction::Down));
    }

    #[test]
    fn key_down_sets_and_key_up_clears() {
        let mapper = InputMapper::default();
        let mut intent = MovementIntent::new();

        let mut q = queue(&[InputEvent::KeyDown(Key::W), InputEvent::KeyDown(Key::D)]);
        let report = mapper.drain(&mut q, &mut intent);
        assert_eq!(report.events, 2);
        assert!(!report.quit_requested);
        assert!(intent.is_active(Direction::Up));
        assert!(intent.is_active(Direction::Right));

        let mut q = queue(&[InputEvent::KeyUp(Key::W)]);
        mapper.drain(&mut q, &mut intent);
        assert!(!intent.is_active(Direction::Up));
        assert!(intent.is_active(Direction::Right));
    }

    #[test]
    fn intent_persists_across_empty_drains() {
        let mapper = InputMapper::default();
        let mut intent = MovementIntent::new();
        mapper.drain(&mut queue(&[InputEvent::KeyDown(Key::S)]), &mut intent);
        let report = mapper.drain(&mut queue(&[]), &mut intent);
        assert_eq!(report, DrainReport::default());
        assert!(intent.is_active(Direction::Down));
    }

    #[test]
    fn unbound_and_other_events_are_ignored() {
        let mapper = InputMapper::default();
        let mut intent = MovementIntent::new();
        let mut q = queue(&[InputEvent::Other, InputEvent::KeyDown(Key::ArrowUp)]);
        let report = mapper.drain(&mut q, &mut intent);
        assert_eq!(report.events, 2);
        assert!(intent.is_empty());
    }

    #[test]
    fn events_apply_in_arrival_order() {
        let mapper = InputMapper::default();
        let mut intent = MovementIntent::new();
        let mut q = queue(&[InputEvent::KeyUp(Key::A), InputEvent::KeyDown(Key::A)]);
        mapper.drain(&mut q, &mut intent);
        assert!(intent.is_active(Direction::Left));

        let mut q = queue(&[InputEvent::KeyDown(Key::A), InputEvent::KeyUp(Key::A)]);
        mapper.drain(&mut q, &mut intent);
        assert!(!intent.is_active(Direction::Left));
    }

    #[test]
    fn quit_is_reported_and_queue_still_drained() {
        let mapper = InputMapper::default();
        let mut intent = MovementIntent::new();
        let mut q = queue(&[
            InputEvent::Quit,
            InputEvent::KeyDown(Key::D),
            InputEvent::Quit,
        ]);
        let report = mapper.drain(&mut q, &mut intent);
        assert!(report.quit_requested);
        assert_eq!(report.events, 3);
        assert!(q.is_empty());
    }
}
