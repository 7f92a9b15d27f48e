use glam::Vec2;
use crate::api::types::EntityId;
#[cfg(feature = "physics")]
use crate::core::physics::PhysicsBody;

/// Tag carried by every body the hazards should react to.
pub const PLAYER_TAG: &str = "player";

/// Fat Entity — a single struct with optional components.
/// Positions are synced from the physics body after every step.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name and routing collisions.
    pub tag: String,
    /// Inactive entities stay in the scene but are ignored by gameplay.
    pub active: bool,
    /// Position in world space.
    pub pos: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
    /// Physics body (optional — requires "physics" feature).
    #[cfg(feature = "physics")]
    pub body: Option<PhysicsBody>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            rotation: 0.0,
            #[cfg(feature = "physics")]
            body: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    #[cfg(feature = "physics")]
    pub fn with_body(mut self, body: PhysicsBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Whether collisions with this entity count as the player touching something.
    pub fn is_player(&self) -> bool {
        self.active && self.tag == PLAYER_TAG
    }

    /// Drop the entity's tag so triggers stop reporting it.
    pub fn untag(&mut self) {
        self.tag.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_entity_is_not_player() {
        let mut e = Entity::new(EntityId(1)).with_tag(PLAYER_TAG);
        assert!(e.is_player());
        e.untag();
        assert!(!e.is_player());
        assert!(e.tag.is_empty());
    }

    #[test]
    fn inactive_player_is_ignored() {
        let mut e = Entity::new(EntityId(1)).with_tag(PLAYER_TAG);
        e.active = false;
        assert!(!e.is_player());
    }
}
