//! Input mapping. Keyboard codes follow the browser `keyCode` values the
//! host forwards; menu buttons arrive as custom events.

pub const KEY_ESCAPE: u32 = 27;
pub const KEY_UP: u32 = 38;
pub const KEY_DOWN: u32 = 40;
pub const KEY_R: u32 = 82;

/// Held: pay rope out.
pub const EXTEND_KEYS: [u32; 1] = [KEY_DOWN];
/// Held: reel rope in.
pub const RETRACT_KEYS: [u32; 1] = [KEY_UP];

/// `InputEvent::Custom` kinds sent by the menu panels.
pub mod custom {
    pub const PAUSE: u32 = 1;
    pub const RESUME: u32 = 2;
    pub const RESTART: u32 = 3;
    pub const TOGGLE_INVINCIBLE: u32 = 4;
    /// On-screen rope buttons; `a` is 1.0 while held, 0.0 on release.
    pub const ROPE_DOWN: u32 = 5;
    pub const ROPE_UP: u32 = 6;
}
