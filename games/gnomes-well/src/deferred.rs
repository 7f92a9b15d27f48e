use glam::Vec2;
use well_engine::EntityId;

/// Work the game schedules on its [`well_engine::TimerScheduler`].
///
/// Timers cannot be cancelled, so every handler must cope with the world
/// having moved on (a corpse already cleared, a reset already done).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Deferred {
    /// Bring back a fresh gnome after a death.
    ResetGame,
    /// Clear a dead gnome's body parts, identified by its torso.
    RemoveGnome(EntityId),
    /// Let the ghost rise from where the gnome died. `fallback` is used
    /// when the corpse is already gone.
    ReleaseGhost { gnome: EntityId, fallback: Vec2 },
    /// Despawn a short-lived entity such as a ghost.
    RemoveEntity(EntityId),
}
