pub mod rng;
pub mod scene;
pub mod time;
pub mod timer;
#[cfg(feature = "physics")]
pub mod physics;
