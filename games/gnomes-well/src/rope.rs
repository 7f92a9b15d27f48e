//! The gnome's rope: a chain of spring-linked bodies hanging from a fixed anchor.
//!
//! Index 0 is the active link, the one joined to the anchor. Paying out grows
//! it until it reaches the maximum segment length, then a fresh zero-length
//! link is spliced in above it. Reeling in shrinks it until it is empty, then
//! it is removed and the link below takes its place. The gnome always hangs
//! from the last link, so the far end of the rope never changes identity.

use glam::Vec2;
use well_engine::{
    BodyDesc, ColliderDesc, EngineContext, Entity, EntityId, JointDesc, JointHandle, PhysicsBody,
};

use crate::config::{RopeConfig, SpringSettings};

pub const ROPE_ANCHOR_TAG: &str = "rope_anchor";
pub const ROPE_LINK_TAG: &str = "rope_link";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RopeError {
    #[error("rope link template has no {0}")]
    MissingPrimitive(&'static str),
    #[error("rope segment length must be positive, got {0}")]
    InvalidSegmentLength(f32),
    #[error("rope speed must be positive, got {0}")]
    InvalidSpeed(f32),
    #[error("rope collapse epsilon must be at least 0 and below the segment length, got {0}")]
    InvalidEpsilon(f32),
}

/// One link of the chain and the spring holding it to the thing above it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsLink {
    pub entity: EntityId,
    pub body: PhysicsBody,
    /// The anchor for the active link, otherwise the link above.
    pub connected_to: EntityId,
    pub length: f32,
    joint: JointHandle,
}

#[derive(Debug, Clone, Copy)]
struct Anchor {
    entity: EntityId,
    body: PhysicsBody,
}

#[derive(Debug, Clone, Copy)]
struct ActorAttachment {
    entity: EntityId,
    body: PhysicsBody,
    joint: JointHandle,
}

pub struct RopeChain {
    config: RopeConfig,
    shape: ColliderDesc,
    spring: SpringSettings,
    anchor: Option<Anchor>,
    links: Vec<PhysicsLink>,
    actor: Option<ActorAttachment>,
    extending: bool,
    retracting: bool,
    visible: bool,
}

impl RopeChain {
    /// Checks the link template and tuning. Nothing is spawned until [`RopeChain::start`].
    pub fn new(config: RopeConfig) -> Result<Self, RopeError> {
        let shape = config.link.shape.ok_or(RopeError::MissingPrimitive("collision shape"));
        let spring = config.link.spring.ok_or(RopeError::MissingPrimitive("spring constraint"));
        let (shape, spring) = match (shape, spring) {
            (Ok(shape), Ok(spring)) => (shape, spring),
            (Err(err), _) | (_, Err(err)) => {
                log::error!("{err}");
                return Err(err);
            }
        };
        if !(config.max_segment_length > 0.0) {
            return Err(RopeError::InvalidSegmentLength(config.max_segment_length));
        }
        if !(config.speed > 0.0) {
            return Err(RopeError::InvalidSpeed(config.speed));
        }
        // A link shrinks no lower than 0, so it can only collapse if 0 is within epsilon.
        let epsilon = config.collapse_epsilon;
        if !(epsilon >= 0.0 && epsilon < config.max_segment_length) {
            return Err(RopeError::InvalidEpsilon(epsilon));
        }
        Ok(Self {
            config,
            shape,
            spring,
            anchor: None,
            links: Vec::new(),
            actor: None,
            extending: false,
            retracting: false,
            visible: false,
        })
    }

    /// Spawn the fixed anchor the rope hangs from.
    pub fn start(&mut self, ctx: &mut EngineContext, at: Vec2) -> EntityId {
        if let Some(old) = self.anchor.take() {
            self.clear_links(ctx);
            ctx.despawn(old.entity);
        }
        let id = ctx.next_id();
        let desc = BodyDesc::fixed(ColliderDesc::Ball { radius: 0.05 })
            .with_position(at)
            .with_sensor(true);
        ctx.spawn_with_body(Entity::new(id).with_tag(ROPE_ANCHOR_TAG), desc, self.config.link.material);
        if let Some(body) = ctx.body(id) {
            self.anchor = Some(Anchor { entity: id, body });
        }
        id
    }

    /// Throw away the current chain and start over with a single link of
    /// maximum length, tied to `actor` when given.
    pub fn reset_length(&mut self, ctx: &mut EngineContext, actor: Option<EntityId>) {
        let Some(anchor) = self.anchor else {
            log::warn!("rope reset before its anchor was spawned");
            return;
        };
        self.release_joint(ctx);
        self.clear_links(ctx);
        self.extending = false;
        self.retracting = false;

        let first = self.spawn_link(ctx, anchor.entity, anchor.body, self.config.max_segment_length);
        self.links.push(first);

        if let Some(entity) = actor {
            match ctx.body(entity) {
                Some(body) => {
                    let desc = self.spring_desc(self.config.actor_distance);
                    let joint = ctx.physics.create_joint(&body, &first.body, &desc);
                    self.actor = Some(ActorAttachment { entity, body, joint });
                }
                None => log::warn!("rope actor {entity:?} has no physics body"),
            }
        }
        self.visible = true;
        log::debug!("rope reset to one link of {}", self.config.max_segment_length);
    }

    /// Latch the pay-out / reel-in requests for the following ticks.
    pub fn set_intent(&mut self, extend: bool, retract: bool) {
        self.extending = extend;
        self.retracting = retract;
    }

    /// Advance the chain by `dt` seconds. Extending wins when both are requested.
    pub fn tick(&mut self, ctx: &mut EngineContext, dt: f32) {
        let step = self.config.speed * dt;
        if !self.visible || self.links.is_empty() || !(step > 0.0) {
            return;
        }
        let max = self.config.max_segment_length;

        if self.extending {
            if self.links[0].length >= max {
                self.splice(ctx);
            }
            let grown = (self.links[0].length + step).min(max);
            self.set_active_length(ctx, grown);
        } else if self.retracting {
            if self.links[0].length <= self.config.collapse_epsilon {
                if self.links.len() < 2 {
                    return;
                }
                self.collapse(ctx);
            }
            let shrunk = (self.links[0].length - step).max(0.0);
            self.set_active_length(ctx, shrunk);
        }
    }

    /// Let go of the actor and hide the rope. The links stay put until the next reset.
    pub fn release_actor(&mut self, ctx: &mut EngineContext) {
        self.release_joint(ctx);
        self.extending = false;
        self.retracting = false;
        self.visible = false;
    }

    /// Polyline for drawing: anchor, every link from the anchor down, then
    /// the actor's attachment point. Empty while hidden.
    pub fn points(&self, ctx: &EngineContext) -> Vec<Vec2> {
        if !self.visible {
            return Vec::new();
        }
        let mut points = Vec::with_capacity(self.links.len() + 2);
        if let Some(anchor) = &self.anchor {
            points.push(ctx.physics.body_position(&anchor.body).0);
        }
        points.extend(self.links.iter().map(|l| ctx.physics.body_position(&l.body).0));
        if let Some(actor) = &self.actor {
            points.push(ctx.physics.body_position(&actor.body).0);
        }
        points
    }

    pub fn links(&self) -> &[PhysicsLink] {
        &self.links
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Length of the link nearest the anchor.
    pub fn active_length(&self) -> f32 {
        self.links.first().map_or(0.0, |l| l.length)
    }

    pub fn total_length(&self) -> f32 {
        self.links.iter().map(|l| l.length).sum()
    }

    pub fn max_segment_length(&self) -> f32 {
        self.config.max_segment_length
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn actor(&self) -> Option<EntityId> {
        self.actor.map(|a| a.entity)
    }

    pub fn anchor(&self) -> Option<EntityId> {
        self.anchor.map(|a| a.entity)
    }

    pub fn is_extending(&self) -> bool {
        self.extending
    }

    pub fn is_retracting(&self) -> bool {
        self.retracting
    }

    // -- chain surgery --

    /// New empty link between the anchor and the old active link.
    fn splice(&mut self, ctx: &mut EngineContext) {
        let Some(anchor) = self.anchor else { return };
        let fresh = self.spawn_link(ctx, anchor.entity, anchor.body, 0.0);

        let desc = self.spring_desc(self.links[0].length);
        let old = &mut self.links[0];
        old.joint = ctx.physics.rewire_joint(old.joint, &old.body, &fresh.body, &desc);
        old.connected_to = fresh.entity;

        self.links.insert(0, fresh);
        log::trace!("rope spliced, {} links", self.links.len());
    }

    /// Drop the empty active link and tie its successor to the anchor.
    fn collapse(&mut self, ctx: &mut EngineContext) {
        let Some(anchor) = self.anchor else { return };
        let removed = self.links.remove(0);
        // Removing the body also removes both springs attached to it.
        ctx.despawn(removed.entity);

        let desc = self.spring_desc(self.links[0].length);
        let next = &mut self.links[0];
        next.joint = ctx.physics.rewire_joint(next.joint, &next.body, &anchor.body, &desc);
        next.connected_to = anchor.entity;
        log::trace!("rope collapsed, {} links", self.links.len());
    }

    fn set_active_length(&mut self, ctx: &mut EngineContext, length: f32) {
        let Some(target) = self.anchor else { return };
        let desc = self.spring_desc(length);
        let active = &mut self.links[0];
        if active.length == length {
            return;
        }
        active.length = length;
        active.joint = ctx.physics.rewire_joint(active.joint, &active.body, &target.body, &desc);
    }

    fn spawn_link(
        &self,
        ctx: &mut EngineContext,
        target: EntityId,
        target_body: PhysicsBody,
        length: f32,
    ) -> PhysicsLink {
        let at = ctx.physics.body_position(&target_body).0;
        let id = ctx.next_id();
        let desc = BodyDesc::dynamic(self.shape)
            .with_position(at)
            .with_sensor(true)
            .with_linear_damping(self.config.link.linear_damping);
        let body = ctx.physics.create_body(id, &desc, self.config.link.material);
        ctx.scene.spawn(Entity::new(id).with_tag(ROPE_LINK_TAG).with_pos(at).with_body(body));

        let joint = ctx.physics.create_joint(&body, &target_body, &self.spring_desc(length));
        PhysicsLink { entity: id, body, connected_to: target, length, joint }
    }

    fn spring_desc(&self, rest_length: f32) -> JointDesc {
        JointDesc::Spring {
            anchor_a: Vec2::ZERO,
            anchor_b: Vec2::ZERO,
            rest_length,
            stiffness: self.spring.stiffness,
            damping: self.spring.damping,
        }
    }

    fn release_joint(&mut self, ctx: &mut EngineContext) {
        if let Some(actor) = self.actor.take() {
            ctx.physics.remove_joint(actor.joint);
        }
    }

    fn clear_links(&mut self, ctx: &mut EngineContext) {
        for link in self.links.drain(..) {
            ctx.despawn(link.entity);
        }
    }
}
