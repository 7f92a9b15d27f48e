//! Tuning for the whole game, loadable from JSON.
//!
//! Every struct derives `Default` with the shipped values, and `#[serde(default)]`
//! lets a JSON file override only the fields it names.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use well_engine::{ColliderDesc, ColliderMaterial, GameConfig};

use crate::rope::{RopeChain, RopeError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Rope(#[from] RopeError),
    #[error("gnome has no body parts")]
    NoBodyParts,
    #[error("body part `{0}` has no hinge pivot")]
    MissingPivot(String),
    #[error("rope attaches to unknown body part `{0}`")]
    UnknownRopePart(String),
    #[error("{name} must not be negative, got {value}")]
    NegativeDelay { name: &'static str, value: f32 },
}

/// Spring parameters of a rope link's constraint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringSettings {
    pub stiffness: f32,
    pub damping: f32,
}

/// What every rope link is built from. Both primitives are required; a
/// template missing either is rejected when the rope is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkTemplate {
    pub shape: Option<ColliderDesc>,
    pub spring: Option<SpringSettings>,
    pub material: ColliderMaterial,
    pub linear_damping: f32,
}

impl Default for LinkTemplate {
    fn default() -> Self {
        Self {
            shape: Some(ColliderDesc::Ball { radius: 0.05 }),
            spring: Some(SpringSettings { stiffness: 400.0, damping: 20.0 }),
            material: ColliderMaterial { restitution: 0.0, friction: 0.2, density: 0.5 },
            linear_damping: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RopeConfig {
    /// Longest a single link may stretch before a new one is spliced in.
    pub max_segment_length: f32,
    /// Pay-out / reel-in speed in units per second.
    pub speed: f32,
    /// At or below this length the active link counts as empty.
    pub collapse_epsilon: f32,
    /// Rest length of the spring between the last link and the gnome.
    pub actor_distance: f32,
    pub link: LinkTemplate,
}

impl Default for RopeConfig {
    fn default() -> Self {
        Self {
            max_segment_length: 1.0,
            speed: 4.0,
            collapse_epsilon: 0.005,
            actor_distance: 0.1,
            link: LinkTemplate::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPartDesc {
    pub name: String,
    /// Center relative to the torso.
    pub offset: Vec2,
    pub shape: ColliderDesc,
    /// Hinge point in torso space. Only the torso itself has none.
    #[serde(default)]
    pub pivot: Option<Vec2>,
    /// Where a blood fountain starts when this part is cut off, in part space.
    #[serde(default)]
    pub blood_origin: Option<Vec2>,
}

impl BodyPartDesc {
    fn new(name: &str, offset: Vec2, shape: ColliderDesc) -> Self {
        Self {
            name: name.to_string(),
            offset,
            shape,
            pivot: None,
            blood_origin: None,
        }
    }

    fn hinged_at(mut self, pivot: Vec2) -> Self {
        self.pivot = Some(pivot);
        self
    }

    fn bleeds_from(mut self, origin: Vec2) -> Self {
        self.blood_origin = Some(origin);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostConfig {
    pub radius: f32,
    /// Upward speed in units per second.
    pub rise_speed: f32,
    pub lifetime: f32,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            radius: 0.3,
            rise_speed: 1.5,
            lifetime: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GnomeConfig {
    /// The first part is the torso; the camera follows it.
    pub parts: Vec<BodyPartDesc>,
    /// Name of the part the rope is tied to.
    pub rope_part: String,
    pub material: ColliderMaterial,
    pub delay_before_removing: f32,
    pub delay_before_releasing_ghost: f32,
    /// `None` disables the ghost entirely.
    pub ghost: Option<GhostConfig>,
}

impl Default for GnomeConfig {
    fn default() -> Self {
        let limb = ColliderDesc::CapsuleY { half_height: 0.1, radius: 0.05 };
        Self {
            parts: vec![
                BodyPartDesc::new("body", Vec2::ZERO, ColliderDesc::CapsuleY { half_height: 0.15, radius: 0.15 }),
                BodyPartDesc::new("head", Vec2::new(0.0, -0.47), ColliderDesc::Ball { radius: 0.15 })
                    .hinged_at(Vec2::new(0.0, -0.3))
                    .bleeds_from(Vec2::new(0.0, 0.12)),
                BodyPartDesc::new("arm_holding", Vec2::new(-0.25, -0.05), limb)
                    .hinged_at(Vec2::new(-0.17, -0.15))
                    .bleeds_from(Vec2::new(0.0, -0.1)),
                BodyPartDesc::new("arm_free", Vec2::new(0.25, -0.05), limb)
                    .hinged_at(Vec2::new(0.17, -0.15))
                    .bleeds_from(Vec2::new(0.0, -0.1)),
                BodyPartDesc::new("leg_rope", Vec2::new(-0.1, 0.47), limb)
                    .hinged_at(Vec2::new(-0.1, 0.3))
                    .bleeds_from(Vec2::new(0.0, -0.1)),
                BodyPartDesc::new("leg_free", Vec2::new(0.1, 0.47), limb)
                    .hinged_at(Vec2::new(0.1, 0.3))
                    .bleeds_from(Vec2::new(0.0, -0.1)),
            ],
            rope_part: "leg_rope".to_string(),
            material: ColliderMaterial { restitution: 0.1, friction: 0.6, density: 1.0 },
            delay_before_removing: 3.0,
            delay_before_releasing_ghost: 0.25,
            ghost: Some(GhostConfig::default()),
        }
    }
}

impl GnomeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some((_, limbs)) = self.parts.split_first() else {
            return Err(ConfigError::NoBodyParts);
        };
        if let Some(part) = limbs.iter().find(|p| p.pivot.is_none()) {
            return Err(ConfigError::MissingPivot(part.name.clone()));
        }
        if !self.parts.iter().any(|p| p.name == self.rope_part) {
            return Err(ConfigError::UnknownRopePart(self.rope_part.clone()));
        }
        check_delay("delay_before_removing", self.delay_before_removing)?;
        check_delay("delay_before_releasing_ghost", self.delay_before_releasing_ghost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    /// Spikes and blades: slicing damage.
    Blades,
    Fire,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardDesc {
    pub kind: HazardKind,
    pub position: Vec2,
    pub half_extents: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Fixed point the rope hangs from.
    pub rope_anchor: Vec2,
    /// Where new gnomes appear.
    pub start_point: Vec2,
    pub exit: Vec2,
    pub exit_half_extents: Vec2,
    pub treasure: Option<Vec2>,
    pub treasure_radius: f32,
    pub hazards: Vec<HazardDesc>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            rope_anchor: Vec2::ZERO,
            start_point: Vec2::new(0.0, 1.8),
            exit: Vec2::new(0.0, 0.6),
            exit_half_extents: Vec2::new(1.5, 0.4),
            treasure: Some(Vec2::new(0.0, 14.0)),
            treasure_radius: 0.3,
            hazards: vec![
                HazardDesc { kind: HazardKind::Blades, position: Vec2::new(-1.6, 6.0), half_extents: Vec2::new(0.8, 0.2) },
                HazardDesc { kind: HazardKind::Fire, position: Vec2::new(1.6, 9.0), half_extents: Vec2::new(0.8, 0.3) },
                HazardDesc { kind: HazardKind::Blades, position: Vec2::new(0.0, 15.5), half_extents: Vec2::new(3.0, 0.3) },
            ],
        }
    }
}

/// Everything the game needs, in one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GnomesWellConfig {
    pub engine: GameConfig,
    pub rope: RopeConfig,
    pub gnome: GnomeConfig,
    pub level: LevelConfig,
    /// Time between a death and the automatic reset.
    pub delay_after_death: f32,
    /// Damage only shows its effects; nobody dies.
    pub invincible: bool,
}

impl Default for GnomesWellConfig {
    fn default() -> Self {
        Self {
            engine: GameConfig::default(),
            rope: RopeConfig::default(),
            gnome: GnomeConfig::default(),
            level: LevelConfig::default(),
            delay_after_death: 1.0,
            invincible: false,
        }
    }
}

impl GnomesWellConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        RopeChain::new(self.rope.clone())?;
        self.gnome.validate()?;
        check_delay("delay_after_death", self.delay_after_death)
    }
}

fn check_delay(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value < 0.0 {
        return Err(ConfigError::NegativeDelay { name, value });
    }
    Ok(())
}
