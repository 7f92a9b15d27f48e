use glam::Vec2;

/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// A sound event emitted by the game logic.
/// The numeric value maps to a game-defined clip on the audio side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

/// A fire-and-forget notification for presentation collaborators.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GameEvent {
    pub kind: u32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub fn new(kind: u32) -> Self {
        Self { kind, ..Self::default() }
    }

    /// Event located at a world position (`a`, `b`).
    pub fn at(kind: u32, pos: Vec2) -> Self {
        Self { kind, a: pos.x, b: pos.y, c: 0.0 }
    }

    pub fn with_c(mut self, c: f32) -> Self {
        self.c = c;
        self
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.a, self.b)
    }
}
