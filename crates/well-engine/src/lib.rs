pub mod api;
pub mod core;
pub mod components;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::runner::GameRunner;
pub use api::types::{EntityId, SoundEvent, GameEvent};
pub use components::entity::{Entity, PLAYER_TAG};
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use core::timer::{TimerId, TimerScheduler};
pub use input::queue::{InputEvent, InputQueue};

#[cfg(feature = "physics")]
pub use core::physics::{
    PhysicsWorld, PhysicsBody, BodyDesc, BodyType,
    ColliderDesc, ColliderMaterial, CollisionPair,
    JointHandle, JointDesc,
};
