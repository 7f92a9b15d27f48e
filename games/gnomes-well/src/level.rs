//! Static level pieces: hazards, the exit, and the treasure.

use glam::Vec2;
use well_engine::{BodyDesc, ColliderDesc, ColliderMaterial, EngineContext, Entity, EntityId};

use crate::config::{HazardKind, LevelConfig};

pub const TRAP_TAG: &str = "trap";
pub const FIRE_TRAP_TAG: &str = "fire_trap";
pub const EXIT_TAG: &str = "exit";
pub const TREASURE_TAG: &str = "treasure";

/// Something that returns to its initial state when the level restarts.
pub trait Resettable {
    fn reset(&mut self, ctx: &mut EngineContext);
}

/// The pickup at the bottom of the well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Treasure {
    entity: EntityId,
    collected: bool,
}

impl Treasure {
    pub fn spawn(ctx: &mut EngineContext, at: Vec2, radius: f32) -> Self {
        let entity = spawn_sensor(ctx, TREASURE_TAG, at, ColliderDesc::Ball { radius });
        Self { entity, collected: false }
    }

    pub fn entity(&self) -> EntityId {
        self.entity
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Take the treasure if `touched` is it and it is still lying there.
    pub fn collect(&mut self, ctx: &mut EngineContext, touched: EntityId) -> bool {
        if touched != self.entity || self.collected {
            return false;
        }
        self.collected = true;
        if let Some(entity) = ctx.scene.get_mut(self.entity) {
            entity.active = false;
        }
        true
    }
}

impl Resettable for Treasure {
    fn reset(&mut self, ctx: &mut EngineContext) {
        self.collected = false;
        if let Some(entity) = ctx.scene.get_mut(self.entity) {
            entity.active = true;
        }
    }
}

/// Entities making up a built level.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub exit: EntityId,
    pub hazards: Vec<EntityId>,
    pub treasure: Option<Treasure>,
}

impl Level {
    /// Spawn the exit zone, hazards and treasure as fixed sensors.
    pub fn build(ctx: &mut EngineContext, config: &LevelConfig) -> Self {
        let exit = spawn_sensor(ctx, EXIT_TAG, config.exit, cuboid(config.exit_half_extents));
        let hazards = config
            .hazards
            .iter()
            .map(|hazard| {
                let tag = match hazard.kind {
                    HazardKind::Blades => TRAP_TAG,
                    HazardKind::Fire => FIRE_TRAP_TAG,
                };
                spawn_sensor(ctx, tag, hazard.position, cuboid(hazard.half_extents))
            })
            .collect::<Vec<_>>();
        let treasure = config
            .treasure
            .map(|at| Treasure::spawn(ctx, at, config.treasure_radius));
        log::info!("level built: {} hazards, treasure: {}", hazards.len(), treasure.is_some());
        Self { exit, hazards, treasure }
    }
}

fn cuboid(half_extents: Vec2) -> ColliderDesc {
    ColliderDesc::Cuboid { half_width: half_extents.x, half_height: half_extents.y }
}

fn spawn_sensor(ctx: &mut EngineContext, tag: &str, at: Vec2, shape: ColliderDesc) -> EntityId {
    let id = ctx.next_id();
    let desc = BodyDesc::fixed(shape).with_position(at).with_sensor(true);
    ctx.spawn_with_body(Entity::new(id).with_tag(tag), desc, ColliderMaterial::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_spawns_every_piece() {
        let mut ctx = EngineContext::new();
        let config = LevelConfig::default();
        let level = Level::build(&mut ctx, &config);

        assert_eq!(level.hazards.len(), config.hazards.len());
        assert_eq!(ctx.scene.find_all_by_tag(TRAP_TAG).len(), 2);
        assert_eq!(ctx.scene.find_all_by_tag(FIRE_TRAP_TAG).len(), 1);
        assert_eq!(ctx.scene.tag_of(level.exit), EXIT_TAG);
        let treasure = level.treasure.expect("treasure placed");
        assert_eq!(ctx.position(treasure.entity()), config.treasure);
    }

    #[test]
    fn level_without_treasure() {
        let mut ctx = EngineContext::new();
        let config = LevelConfig { treasure: None, ..LevelConfig::default() };
        assert_eq!(Level::build(&mut ctx, &config).treasure, None);
    }

    #[test]
    fn treasure_is_collected_once_until_reset() {
        let mut ctx = EngineContext::new();
        let mut treasure = Treasure::spawn(&mut ctx, Vec2::new(0.0, 10.0), 0.3);
        let id = treasure.entity();

        assert!(!treasure.collect(&mut ctx, EntityId(999)));
        assert!(treasure.collect(&mut ctx, id));
        assert!(!treasure.collect(&mut ctx, id));
        assert!(!ctx.scene.get(id).expect("still in scene").active);

        treasure.reset(&mut ctx);
        assert!(!treasure.is_collected());
        assert!(ctx.scene.get(id).expect("still in scene").active);
        assert!(treasure.collect(&mut ctx, id));
    }
}
