//! Sound ids and presentation events the game emits.

use well_engine::{EngineContext, GameEvent, SoundEvent};

pub const SOUND_GNOME_DIED: SoundEvent = SoundEvent(1);
pub const SOUND_GAME_WON: SoundEvent = SoundEvent(2);

/// `GameEvent::kind` values. Positions travel in `a`/`b`.
pub mod kinds {
    /// `a` holds the [`super::UiPanels`] bits.
    pub const PANELS: u32 = 1;
    /// Death burst at the camera target; `c` is the damage code.
    pub const DEATH_EFFECT: u32 = 2;
    /// A body part switched to its damaged look; `a` entity, `c` damage code.
    pub const PART_DAMAGED: u32 = 3;
    /// Blood fountain at a severed part; `c` is the torso it follows.
    pub const BLOOD_FOUNTAIN: u32 = 4;
    pub const GHOST_RELEASED: u32 = 5;
    /// `a` is 1.0 when the gnome picked the treasure up, 0.0 when it dropped it.
    pub const TREASURE_HELD: u32 = 6;
}

/// Which UI panels should be showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiPanels {
    pub gameplay: bool,
    pub main_menu: bool,
    pub game_over: bool,
}

impl UiPanels {
    pub fn playing() -> Self {
        Self { gameplay: true, ..Self::default() }
    }

    pub fn paused() -> Self {
        Self { main_menu: true, ..Self::default() }
    }

    pub fn won() -> Self {
        Self { game_over: true, ..Self::default() }
    }

    pub fn bits(self) -> u32 {
        self.gameplay as u32 | (self.main_menu as u32) << 1 | (self.game_over as u32) << 2
    }

    pub fn emit(self, ctx: &mut EngineContext) {
        ctx.emit_event(GameEvent { a: self.bits() as f32, ..GameEvent::new(kinds::PANELS) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_bits() {
        assert_eq!(UiPanels::playing().bits(), 0b001);
        assert_eq!(UiPanels::paused().bits(), 0b010);
        assert_eq!(UiPanels::won().bits(), 0b100);
    }

    #[test]
    fn emit_pushes_panel_event() {
        let mut ctx = EngineContext::new();
        UiPanels::won().emit(&mut ctx);
        assert_eq!(ctx.events, vec![GameEvent { a: 4.0, ..GameEvent::new(kinds::PANELS) }]);
    }
}
