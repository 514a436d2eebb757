/// Pointer event types the widget understands.
/// World coordinates, not DOM pixels — the JS layer converts before pushing.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A touch/click began at world coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// A touch/click ended at world coordinates (x, y).
    PointerUp { x: f32, y: f32 },
    /// A touch/cursor moved to world coordinates (x, y).
    PointerMove { x: f32, y: f32 },
}

/// A queue of input events.
/// JS writes events into the queue; the widget reads and the runner drains
/// them once per frame, so one click is one toggle — no debounce layer.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::PointerMove { x: 11.0, y: 21.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn iter_does_not_consume() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerUp { x: 1.0, y: 2.0 });
        assert_eq!(q.iter().count(), 1);
        assert_eq!(q.len(), 1);
    }
}
