pub mod config;
pub mod controls;
pub mod deferred;
pub mod events;
pub mod game;
pub mod gnome;
pub mod level;
pub mod rope;

pub use config::{ConfigError, GnomesWellConfig};
pub use game::{GamePhase, GnomesWell};
pub use gnome::{DamageKind, Gnome};
pub use level::{Resettable, Treasure};
pub use rope::{RopeChain, RopeError};
