//! The gnome: a ragdoll of hinged body parts that can be burnt or cut apart.

use glam::Vec2;
use well_engine::{
    BodyDesc, ColliderDesc, EngineContext, Entity, EntityId, GameEvent, JointDesc, JointHandle,
    PhysicsBody, TimerScheduler, PLAYER_TAG,
};

use crate::config::{ConfigError, GhostConfig, GnomeConfig};
use crate::deferred::Deferred;
use crate::events::kinds;

pub const GHOST_TAG: &str = "ghost";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageKind {
    Slicing,
    Burning,
}

impl DamageKind {
    /// Numeric code carried in event payloads.
    pub fn code(self) -> f32 {
        match self {
            DamageKind::Slicing => 1.0,
            DamageKind::Burning => 2.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BodyPart {
    pub name: String,
    pub entity: EntityId,
    attached: bool,
    damaged: bool,
    blood_origin: Option<Vec2>,
    /// Hinges holding this part to the torso.
    joints: Vec<JointHandle>,
}

impl BodyPart {
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_damaged(&self) -> bool {
        self.damaged
    }

    pub fn blood_origin(&self) -> Option<Vec2> {
        self.blood_origin
    }

    fn show_damaged(&mut self, kind: DamageKind, ctx: &mut EngineContext) {
        self.damaged = true;
        ctx.emit_event(GameEvent {
            a: self.entity.0 as f32,
            c: kind.code(),
            ..GameEvent::new(kinds::PART_DAMAGED)
        });
    }

    fn detach(&mut self, ctx: &mut EngineContext) {
        for joint in self.joints.drain(..) {
            ctx.physics.remove_joint(joint);
        }
        self.attached = false;
    }
}

#[derive(Debug, Clone)]
pub struct Gnome {
    parts: Vec<BodyPart>,
    rope_part: EntityId,
    alive: bool,
    holding_treasure: bool,
    pending_removal: bool,
    last_position: Vec2,
    delay_before_removing: f32,
    delay_before_releasing_ghost: f32,
    ghost: Option<GhostConfig>,
}

impl Gnome {
    /// Build the ragdoll with its torso at `at`. Every part is tagged as the player.
    pub fn spawn(ctx: &mut EngineContext, config: &GnomeConfig, at: Vec2) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut parts = Vec::with_capacity(config.parts.len());
        let mut torso: Option<PhysicsBody> = None;
        for desc in &config.parts {
            let id = ctx.next_id();
            let body_desc = BodyDesc::dynamic(desc.shape)
                .with_position(at + desc.offset)
                .with_angular_damping(0.5);
            ctx.spawn_with_body(Entity::new(id).with_tag(PLAYER_TAG), body_desc, config.material);

            let mut joints = Vec::new();
            match (torso, desc.pivot, ctx.body(id)) {
                (None, _, body) => torso = body,
                (Some(torso_body), Some(pivot), Some(body)) => {
                    let hinge = JointDesc::Revolute { anchor_a: pivot, anchor_b: pivot - desc.offset };
                    joints.push(ctx.physics.create_joint(&torso_body, &body, &hinge));
                }
                _ => {}
            }

            parts.push(BodyPart {
                name: desc.name.clone(),
                entity: id,
                attached: true,
                damaged: false,
                blood_origin: desc.blood_origin,
                joints,
            });
        }

        let root = parts[0].entity;
        let rope_part = parts
            .iter()
            .find(|p| p.name == config.rope_part)
            .map_or(root, |p| p.entity);

        log::debug!("gnome spawned at {at} with {} parts", parts.len());
        Ok(Self {
            parts,
            rope_part,
            alive: true,
            holding_treasure: false,
            pending_removal: false,
            last_position: at,
            delay_before_removing: config.delay_before_removing,
            delay_before_releasing_ghost: config.delay_before_releasing_ghost,
            ghost: config.ghost,
        })
    }

    /// The torso. The camera follows it and it names the gnome in deferred work.
    pub fn root(&self) -> EntityId {
        self.parts[0].entity
    }

    /// The part the rope is tied to.
    pub fn rope_part(&self) -> EntityId {
        self.rope_part
    }

    pub fn parts(&self) -> &[BodyPart] {
        &self.parts
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_holding_treasure(&self) -> bool {
        self.holding_treasure
    }

    pub fn is_pending_removal(&self) -> bool {
        self.pending_removal
    }

    /// Where the torso is now, or where it was last seen.
    pub fn position(&self, ctx: &EngineContext) -> Vec2 {
        ctx.position(self.root()).unwrap_or(self.last_position)
    }

    /// Dead gnomes cannot pick anything up. Returns whether the value was taken.
    pub fn set_holding_treasure(&mut self, ctx: &mut EngineContext, holding: bool) -> bool {
        if !self.alive {
            return false;
        }
        if self.holding_treasure != holding {
            self.holding_treasure = holding;
            ctx.emit_event(GameEvent {
                a: if holding { 1.0 } else { 0.0 },
                ..GameEvent::new(kinds::TREASURE_HELD)
            });
        }
        true
    }

    /// Death burst at the torso, shown even when the damage itself is ignored.
    pub fn show_damage_effect(&self, kind: DamageKind, ctx: &mut EngineContext) {
        let at = self.position(ctx);
        ctx.emit_event(GameEvent::at(kinds::DEATH_EFFECT, at).with_c(kind.code()));
    }

    /// Kill the gnome: mark parts damaged, knock some of them loose, and
    /// schedule the corpse's removal and the ghost. Only the first call does
    /// anything; later ones return `false`.
    pub fn apply_damage(
        &mut self,
        kind: DamageKind,
        ctx: &mut EngineContext,
        timers: &mut TimerScheduler<Deferred>,
    ) -> bool {
        if !self.alive {
            return false;
        }
        self.set_holding_treasure(ctx, false);
        self.alive = false;
        self.last_position = self.position(ctx);
        let root = self.root();

        for part in &mut self.parts {
            let show = match kind {
                DamageKind::Burning => ctx.rng.one_in(2),
                DamageKind::Slicing => true,
            };
            if show {
                part.show_damaged(kind, ctx);
            }

            if !ctx.rng.one_in(2) {
                continue;
            }
            part.detach(ctx);
            if kind != DamageKind::Slicing {
                continue;
            }
            if let (Some(origin), Some(body)) = (part.blood_origin, ctx.body(part.entity)) {
                let at = ctx.physics.local_to_world(&body, origin);
                ctx.emit_event(GameEvent::at(kinds::BLOOD_FOUNTAIN, at).with_c(root.0 as f32));
            }
        }

        self.pending_removal = true;
        timers.schedule(self.delay_before_removing, Deferred::RemoveGnome(root));
        if self.ghost.is_some() {
            timers.schedule(
                self.delay_before_releasing_ghost,
                Deferred::ReleaseGhost { gnome: root, fallback: self.last_position },
            );
        }
        log::info!("gnome died ({kind:?}) at {}", self.last_position);
        true
    }

    /// Stop hazards and pickups from reacting to this gnome.
    pub fn untag(&self, ctx: &mut EngineContext) {
        for part in &self.parts {
            if let Some(entity) = ctx.scene.get_mut(part.entity) {
                entity.untag();
            }
        }
    }

    /// Remove every part, and with them all hinges, from the world.
    pub fn despawn(&self, ctx: &mut EngineContext) {
        for part in &self.parts {
            ctx.despawn(part.entity);
        }
    }

}

/// A weightless sensor drifting upward, gone after its lifetime.
pub fn spawn_ghost(
    ctx: &mut EngineContext,
    timers: &mut TimerScheduler<Deferred>,
    ghost: &GhostConfig,
    at: Vec2,
) -> EntityId {
    let id = ctx.next_id();
    // Y-down world: rising means negative Y.
    let desc = BodyDesc::dynamic(ColliderDesc::Ball { radius: ghost.radius })
        .with_position(at)
        .with_velocity(Vec2::new(0.0, -ghost.rise_speed))
        .with_gravity_scale(0.0)
        .with_sensor(true);
    ctx.spawn_with_body(Entity::new(id).with_tag(GHOST_TAG), desc, Default::default());
    timers.schedule(ghost.lifetime, Deferred::RemoveEntity(id));
    ctx.emit_event(GameEvent::at(kinds::GHOST_RELEASED, at));
    id
}
