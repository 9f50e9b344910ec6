/// Input event types the finale runtime understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse or touch moved to viewport coordinates (x, y) at host time `time_ms`.
    PointerMove { x: f32, y: f32, time_ms: f64 },
    /// The viewport was resized.
    Resize { width: f32, height: f32 },
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
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
        q.push(InputEvent::PointerMove { x: 10.0, y: 20.0, time_ms: 5.0 });
        q.push(InputEvent::Resize { width: 800.0, height: 600.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn drain_preserves_order() {
        let mut q = InputQueue::new();
        for i in 0..3 {
            q.push(InputEvent::PointerMove { x: i as f32, y: 0.0, time_ms: i as f64 });
        }
        let xs: Vec<f32> = q
            .drain()
            .into_iter()
            .filter_map(|e| match e {
                InputEvent::PointerMove { x, .. } => Some(x),
                _ => None,
            })
            .collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
    }
}
