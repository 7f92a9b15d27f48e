use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::types::{EntityId, GameEvent, SoundEvent};
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
#[cfg(feature = "physics")]
use crate::components::entity::Entity;
#[cfg(feature = "physics")]
use crate::core::physics::{BodyDesc, ColliderMaterial, CollisionPair, PhysicsBody, PhysicsWorld};

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Maximum fixed steps run for one frame.
    pub max_steps_per_frame: u32,
    /// Gravity vector for physics simulation. The world is Y-down, so
    /// downward gravity has positive Y.
    pub gravity: Vec2,
    /// Seed for the shared gameplay RNG.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: 10,
            gravity: Vec2::new(0.0, 9.81),
            seed: 42,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Called once per frame before any fixed step, even while time is
    /// stopped. Menu and pause toggles belong here.
    fn handle_input(&mut self, _ctx: &mut EngineContext, _input: &InputQueue) {}

    /// One fixed step of game logic. Physics is stepped right after it.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed explicitly to every game entry point.
pub struct EngineContext {
    pub scene: Scene,
    pub rng: Rng,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
    next_id: u32,
    dt: f32,
    time_scale: f32,
    #[cfg(feature = "physics")]
    pub physics: PhysicsWorld,
    #[cfg(feature = "physics")]
    collision_events: Vec<CollisionPair>,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    /// Create an EngineContext matching a game's configuration.
    pub fn from_config(config: &GameConfig) -> Self {
        #[cfg(feature = "physics")]
        let physics = {
            let mut world = PhysicsWorld::new(config.gravity);
            world.set_dt(config.fixed_dt);
            world
        };
        Self {
            scene: Scene::new(),
            rng: Rng::new(config.seed),
            sounds: Vec::new(),
            events: Vec::new(),
            next_id: 1,
            dt: config.fixed_dt,
            time_scale: 1.0,
            #[cfg(feature = "physics")]
            physics,
            #[cfg(feature = "physics")]
            collision_events: Vec::new(),
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// The fixed step length in seconds.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// 1.0 while the game runs, 0.0 while it is frozen (pause, win screen).
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// Emit a sound event for the audio collaborator.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    /// Emit a game event for presentation collaborators.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (sounds, events).
    /// Collision pairs are replaced by each physics step instead, so the
    /// first update of a frame still sees the last step of the previous one.
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }

    // -- Physics convenience methods --

    /// Spawn an entity with a physics body. Returns the EntityId.
    /// The entity's position is set from the BodyDesc.
    #[cfg(feature = "physics")]
    pub fn spawn_with_body(
        &mut self,
        entity: Entity,
        desc: BodyDesc,
        material: ColliderMaterial,
    ) -> EntityId {
        let id = entity.id;
        let body = self.physics.create_body(id, &desc, material);
        let entity = entity.with_pos(desc.position).with_body(body);
        self.scene.spawn(entity);
        id
    }

    /// Despawn an entity, cleaning up its physics body if present.
    /// Returns false if the entity was already gone.
    #[cfg(feature = "physics")]
    pub fn despawn(&mut self, id: EntityId) -> bool {
        match self.scene.despawn(id) {
            Some(entity) => {
                if let Some(body) = &entity.body {
                    self.physics.remove_body(body);
                }
                true
            }
            None => false,
        }
    }

    /// The physics body of an entity, if it has one.
    #[cfg(feature = "physics")]
    pub fn body(&self, id: EntityId) -> Option<PhysicsBody> {
        self.scene.get(id).and_then(|e| e.body)
    }

    /// Current world position of an entity, read from its body when it has one.
    #[cfg(feature = "physics")]
    pub fn position(&self, id: EntityId) -> Option<Vec2> {
        let entity = self.scene.get(id)?;
        Some(match &entity.body {
            Some(body) => self.physics.body_position(body).0,
            None => entity.pos,
        })
    }

    /// Get collision events from the most recent physics step.
    #[cfg(feature = "physics")]
    pub fn collisions(&self) -> &[CollisionPair] {
        &self.collision_events
    }

    /// Step the physics simulation and sync positions back to entities.
    /// Called by the runner after every `Game::update()`.
    #[cfg(feature = "physics")]
    pub fn step_physics(&mut self) {
        self.collision_events.clear();
        self.physics.step_into(&mut self.collision_events);

        for entity in self.scene.iter_mut() {
            if let Some(body) = &entity.body {
                let (pos, rot) = self.physics.body_position(body);
                entity.pos = pos;
                entity.rotation = rot;
            }
        }
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
