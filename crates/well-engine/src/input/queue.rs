/// Input event types the engine understands.
/// Generic — games map key codes and custom kinds to their own actions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// A custom event from the UI layer (menu buttons etc.).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

impl InputEvent {
    /// A custom event without payload.
    pub fn custom(kind: u32) -> Self {
        InputEvent::Custom { kind, a: 0.0, b: 0.0, c: 0.0 }
    }
}

/// This frame's input events plus the set of keys currently held down.
///
/// Events are edges and are drained once per frame; held keys persist until
/// the matching `KeyUp` arrives.
pub struct InputQueue {
    events: Vec<InputEvent>,
    held: Vec<u32>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
            held: Vec::new(),
        }
    }

    /// Push a new input event and update the held-key set.
    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown { key_code } => {
                if !self.held.contains(&key_code) {
                    self.held.push(key_code);
                }
            }
            InputEvent::KeyUp { key_code } => {
                self.held.retain(|&k| k != key_code);
            }
            InputEvent::Custom { .. } => {}
        }
        self.events.push(event);
    }

    /// Drain this frame's events. Held keys are kept.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Whether the key is currently held down.
    pub fn is_held(&self, key_code: u32) -> bool {
        self.held.contains(&key_code)
    }

    /// Whether the key went down during this frame.
    pub fn pressed(&self, key_code: u32) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, InputEvent::KeyDown { key_code: k } if *k == key_code))
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

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
    fn held_keys_survive_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key_code: 40 });
        assert!(q.pressed(40));
        assert!(q.is_held(40));

        assert_eq!(q.drain().len(), 1);
        assert!(q.is_empty());
        assert!(!q.pressed(40));
        assert!(q.is_held(40));

        q.push(InputEvent::KeyUp { key_code: 40 });
        assert!(!q.is_held(40));
    }

    #[test]
    fn repeated_key_down_is_held_once() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key_code: 38 });
        q.push(InputEvent::KeyDown { key_code: 38 });
        q.push(InputEvent::KeyUp { key_code: 38 });
        assert!(!q.is_held(38));
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn custom_event() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Custom { kind: 7, a: 1.5, b: 2.5, c: 3.5 });
        q.push(InputEvent::custom(3));
        let events = q.drain();
        assert_eq!(events[0], InputEvent::Custom { kind: 7, a: 1.5, b: 2.5, c: 3.5 });
        assert_eq!(events[1], InputEvent::Custom { kind: 3, a: 0.0, b: 0.0, c: 0.0 });
    }
}
