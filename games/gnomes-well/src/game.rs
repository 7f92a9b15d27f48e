use glam::Vec2;
use well_engine::{
    CollisionPair, EngineContext, EntityId, Game, GameConfig, InputEvent, InputQueue,
    TimerScheduler,
};

use crate::config::{ConfigError, GnomesWellConfig};
use crate::controls::{custom, EXTEND_KEYS, KEY_ESCAPE, KEY_R, RETRACT_KEYS};
use crate::deferred::Deferred;
use crate::events::{UiPanels, SOUND_GAME_WON, SOUND_GNOME_DIED};
use crate::gnome::{spawn_ghost, DamageKind, Gnome};
use crate::level::{Level, Resettable, EXIT_TAG, FIRE_TRAP_TAG, TRAP_TAG, TREASURE_TAG};
use crate::rope::RopeChain;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    /// The gnome died; a reset is scheduled.
    DeathPending,
    Won,
}

/// What a player-tagged body just touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Contact {
    Trap,
    FireTrap,
    Treasure(EntityId),
    Exit,
}

/// Gnome's Well: lower the gnome into the well, grab the treasure, bring it back up.
pub struct GnomesWell {
    config: GnomesWellConfig,
    phase: GamePhase,
    paused: bool,
    invincible: bool,
    rope: RopeChain,
    gnome: Option<Gnome>,
    /// Dead gnomes waiting for their scheduled removal.
    corpses: Vec<Gnome>,
    camera_target: Option<EntityId>,
    timers: TimerScheduler<Deferred>,
    level: Option<Level>,
    resettables: Vec<Box<dyn Resettable>>,
    panels: UiPanels,
    // On-screen rope buttons, held like keys.
    button_extend: bool,
    button_retract: bool,
}

impl GnomesWell {
    pub fn new(config: GnomesWellConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rope = RopeChain::new(config.rope.clone())?;
        Ok(Self {
            phase: GamePhase::Playing,
            paused: false,
            invincible: config.invincible,
            rope,
            gnome: None,
            corpses: Vec::new(),
            camera_target: None,
            timers: TimerScheduler::new(),
            level: None,
            resettables: Vec::new(),
            panels: UiPanels::playing(),
            button_extend: false,
            button_retract: false,
            config,
        })
    }

    /// Register a level object that goes back to its initial state on every reset.
    pub fn add_resettable(&mut self, item: Box<dyn Resettable>) {
        self.resettables.push(item);
    }

    /// Start a fresh attempt: new gnome on a full-length rope, level objects
    /// restored, time running.
    pub fn reset(&mut self, ctx: &mut EngineContext) {
        for item in &mut self.resettables {
            item.reset(ctx);
        }
        if let Some(treasure) = self.level.as_mut().and_then(|l| l.treasure.as_mut()) {
            treasure.reset(ctx);
        }

        // A gnome still in play leaves without a death sequence.
        if let Some(old) = self.gnome.take() {
            old.despawn(ctx);
        }
        self.camera_target = None;

        match Gnome::spawn(ctx, &self.config.gnome, self.config.level.start_point) {
            Ok(gnome) => {
                self.rope.reset_length(ctx, Some(gnome.rope_part()));
                self.camera_target = Some(gnome.root());
                self.gnome = Some(gnome);
            }
            Err(err) => log::error!("cannot spawn gnome: {err}"),
        }

        self.phase = GamePhase::Playing;
        self.set_paused(ctx, false);
        log::info!("game reset");
    }

    /// The gnome ran into blades.
    pub fn trap_touched(&mut self, ctx: &mut EngineContext) {
        self.kill_gnome(ctx, DamageKind::Slicing);
    }

    pub fn fire_trap_touched(&mut self, ctx: &mut EngineContext) {
        self.kill_gnome(ctx, DamageKind::Burning);
    }

    pub fn treasure_collected(&mut self, ctx: &mut EngineContext) {
        match self.gnome.as_mut() {
            Some(gnome) => {
                if gnome.set_holding_treasure(ctx, true) {
                    log::info!("treasure picked up");
                }
            }
            None => log::debug!("treasure collected with no gnome in play"),
        }
    }

    /// Win if the gnome made it back with the treasure.
    pub fn exit_reached(&mut self, ctx: &mut EngineContext) {
        let holding = self.gnome.as_ref().is_some_and(|g| g.is_holding_treasure());
        if self.phase != GamePhase::Playing || !holding {
            log::debug!("exit reached without treasure");
            return;
        }
        ctx.emit_sound(SOUND_GAME_WON);
        self.phase = GamePhase::Won;
        ctx.set_time_scale(0.0);
        self.show_panels(ctx, UiPanels::won());
        log::info!("treasure brought home, game won");
    }

    /// Pausing stops time and brings up the main menu. Time stays stopped
    /// after a win even when unpaused.
    pub fn set_paused(&mut self, ctx: &mut EngineContext, paused: bool) {
        self.paused = paused;
        let won = self.phase == GamePhase::Won;
        ctx.set_time_scale(if paused || won { 0.0 } else { 1.0 });
        let panels = if paused {
            UiPanels::paused()
        } else if won {
            UiPanels::won()
        } else {
            UiPanels::playing()
        };
        self.show_panels(ctx, panels);
    }

    /// Throw the current gnome away and start over right now.
    pub fn restart_game(&mut self, ctx: &mut EngineContext) {
        if let Some(gnome) = self.gnome.take() {
            gnome.despawn(ctx);
        }
        self.reset(ctx);
    }

    pub fn set_invincible(&mut self, invincible: bool) {
        self.invincible = invincible;
        log::info!("invincible: {invincible}");
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible
    }

    pub fn gnome(&self) -> Option<&Gnome> {
        self.gnome.as_ref()
    }

    pub fn corpses(&self) -> &[Gnome] {
        &self.corpses
    }

    pub fn rope(&self) -> &RopeChain {
        &self.rope
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    pub fn camera_target(&self) -> Option<EntityId> {
        self.camera_target
    }

    /// Where the camera should look this frame.
    pub fn camera_position(&self, ctx: &EngineContext) -> Option<Vec2> {
        ctx.position(self.camera_target?)
    }

    pub fn panels(&self) -> UiPanels {
        self.panels
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    fn kill_gnome(&mut self, ctx: &mut EngineContext, kind: DamageKind) {
        if self.phase != GamePhase::Playing {
            log::debug!("{kind:?} damage ignored in {:?}", self.phase);
            return;
        }
        let Some(gnome) = self.gnome.as_mut() else {
            return;
        };

        ctx.emit_sound(SOUND_GNOME_DIED);
        gnome.show_damage_effect(kind, ctx);
        if self.invincible {
            return;
        }

        gnome.apply_damage(kind, ctx, &mut self.timers);
        self.remove_gnome(ctx);
        self.timers.schedule(self.config.delay_after_death, Deferred::ResetGame);
        self.phase = GamePhase::DeathPending;
    }

    /// Take the gnome out of play: the rope lets go, the camera stops
    /// following and hazards stop seeing it. The body stays until its timer.
    fn remove_gnome(&mut self, ctx: &mut EngineContext) {
        self.rope.release_actor(ctx);
        self.camera_target = None;
        if let Some(gnome) = self.gnome.take() {
            gnome.untag(ctx);
            self.corpses.push(gnome);
        }
    }

    fn on_timer(&mut self, ctx: &mut EngineContext, due: Deferred) {
        match due {
            Deferred::ResetGame => self.reset(ctx),
            Deferred::RemoveGnome(root) => {
                match self.corpses.iter().position(|g| g.root() == root) {
                    Some(index) => self.corpses.swap_remove(index).despawn(ctx),
                    None => log::debug!("gnome {root:?} already removed"),
                }
            }
            Deferred::ReleaseGhost { gnome, fallback } => {
                if let Some(ghost) = self.config.gnome.ghost {
                    let at = ctx.position(gnome).unwrap_or(fallback);
                    spawn_ghost(ctx, &mut self.timers, &ghost, at);
                }
            }
            Deferred::RemoveEntity(id) => {
                ctx.despawn(id);
            }
        }
    }

    fn route_collisions(&mut self, ctx: &mut EngineContext) {
        let pairs: Vec<CollisionPair> = ctx.collisions().iter().filter(|p| p.started).copied().collect();
        for pair in pairs {
            let Some(contact) = player_contact(ctx, &pair) else {
                continue;
            };
            match contact {
                Contact::Trap => self.trap_touched(ctx),
                Contact::FireTrap => self.fire_trap_touched(ctx),
                Contact::Exit => self.exit_reached(ctx),
                Contact::Treasure(id) => {
                    let picked = self.gnome.as_ref().is_some_and(|g| g.is_alive())
                        && self
                            .level
                            .as_mut()
                            .and_then(|l| l.treasure.as_mut())
                            .is_some_and(|t| t.collect(ctx, id));
                    if picked {
                        self.treasure_collected(ctx);
                    }
                }
            }
        }
    }

    fn show_panels(&mut self, ctx: &mut EngineContext, panels: UiPanels) {
        self.panels = panels;
        panels.emit(ctx);
    }
}

/// The tagged object a live player part touched, if this pair is one.
fn player_contact(ctx: &EngineContext, pair: &CollisionPair) -> Option<Contact> {
    let is_player = |id| ctx.scene.get(id).is_some_and(|e| e.is_player());
    let other = if is_player(pair.entity_a) {
        pair.entity_b
    } else if is_player(pair.entity_b) {
        pair.entity_a
    } else {
        return None;
    };

    let entity = ctx.scene.get(other).filter(|e| e.active)?;
    match entity.tag.as_str() {
        TRAP_TAG => Some(Contact::Trap),
        FIRE_TRAP_TAG => Some(Contact::FireTrap),
        TREASURE_TAG => Some(Contact::Treasure(other)),
        EXIT_TAG => Some(Contact::Exit),
        _ => None,
    }
}

impl Game for GnomesWell {
    fn config(&self) -> GameConfig {
        self.config.engine.clone()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.level = Some(Level::build(ctx, &self.config.level));
        self.rope.start(ctx, self.config.level.rope_anchor);
        self.reset(ctx);
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match event {
                InputEvent::KeyDown { key_code: KEY_ESCAPE } => self.set_paused(ctx, !self.paused),
                InputEvent::KeyDown { key_code: KEY_R } => self.restart_game(ctx),
                InputEvent::Custom { kind: custom::PAUSE, .. } => self.set_paused(ctx, true),
                InputEvent::Custom { kind: custom::RESUME, .. } => self.set_paused(ctx, false),
                InputEvent::Custom { kind: custom::RESTART, .. } => self.restart_game(ctx),
                InputEvent::Custom { kind: custom::TOGGLE_INVINCIBLE, .. } => {
                    self.set_invincible(!self.invincible)
                }
                InputEvent::Custom { kind: custom::ROPE_DOWN, a, .. } => self.button_extend = *a != 0.0,
                InputEvent::Custom { kind: custom::ROPE_UP, a, .. } => self.button_retract = *a != 0.0,
                _ => {}
            }
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        let dt = ctx.dt();

        for due in self.timers.tick(dt) {
            self.on_timer(ctx, due);
        }

        self.route_collisions(ctx);

        let extend = self.button_extend || EXTEND_KEYS.iter().any(|&k| input.is_held(k));
        let retract = self.button_retract || RETRACT_KEYS.iter().any(|&k| input.is_held(k));
        self.rope.set_intent(extend, retract);
        self.rope.tick(ctx, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use well_engine::{GameEvent, GameRunner, PLAYER_TAG};

    use crate::config::{HazardDesc, HazardKind};
    use crate::controls::KEY_DOWN;
    use crate::events::kinds;
    use crate::gnome::GHOST_TAG;

    fn setup_with(config: GnomesWellConfig) -> (GnomesWell, EngineContext) {
        let mut game = GnomesWell::new(config).expect("valid config");
        let mut ctx = EngineContext::from_config(&game.config());
        game.init(&mut ctx);
        ctx.clear_frame_data();
        (game, ctx)
    }

    fn setup() -> (GnomesWell, EngineContext) {
        setup_with(GnomesWellConfig::default())
    }

    /// Run `seconds` of fixed updates without stepping physics.
    fn advance(game: &mut GnomesWell, ctx: &mut EngineContext, seconds: f32) {
        let input = InputQueue::new();
        let steps = (seconds / ctx.dt()).ceil() as u32 + 1;
        for _ in 0..steps {
            game.update(ctx, &input);
        }
    }

    fn player_parts(ctx: &EngineContext) -> usize {
        ctx.scene.find_all_by_tag(PLAYER_TAG).len()
    }

    #[test]
    fn init_spawns_a_gnome_on_the_rope() {
        let (game, ctx) = setup();
        let gnome = game.gnome().expect("gnome in play");

        assert_eq!(game.phase(), GamePhase::Playing);
        assert!(gnome.is_alive());
        assert_eq!(game.rope().actor(), Some(gnome.rope_part()));
        assert_eq!(game.rope().link_count(), 1);
        assert_eq!(game.camera_target(), Some(gnome.root()));
        assert_eq!(ctx.time_scale(), 1.0);
        assert_eq!(game.panels(), UiPanels::playing());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = GnomesWellConfig::default();
        config.rope.link.spring = None;
        assert!(matches!(GnomesWell::new(config), Err(ConfigError::Rope(_))));
    }

    #[test]
    fn trap_kills_and_schedules_reset() {
        let (mut game, mut ctx) = setup();
        let parts = game.gnome().expect("gnome").parts().len();

        game.trap_touched(&mut ctx);

        assert_eq!(ctx.sounds, vec![SOUND_GNOME_DIED]);
        assert_eq!(game.phase(), GamePhase::DeathPending);
        assert!(game.gnome().is_none());
        assert_eq!(game.corpses().len(), 1);
        assert!(!game.corpses()[0].is_alive());
        assert!(!game.rope().is_visible());
        assert_eq!(game.camera_target(), None);
        assert_eq!(player_parts(&ctx), 0);
        // Reset, corpse removal, ghost.
        assert_eq!(game.pending_timers(), 3);

        ctx.clear_frame_data();
        game.treasure_collected(&mut ctx);
        assert!(game.gnome().is_none());
        assert!(!game.corpses()[0].is_holding_treasure());
        assert!(!ctx.events.iter().any(|e| e.kind == kinds::TREASURE_HELD));
        assert_eq!(game.phase(), GamePhase::DeathPending);
        assert_eq!(game.pending_timers(), 3);

        advance(&mut game, &mut ctx, 1.0);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert!(game.gnome().expect("respawned").is_alive());
        assert_eq!(player_parts(&ctx), parts);
        assert_eq!(game.corpses().len(), 1, "corpse lingers until its own timer");

        advance(&mut game, &mut ctx, 2.0);
        assert!(game.corpses().is_empty());
    }

    #[test]
    fn ghost_rises_after_death_and_fades() {
        let (mut game, mut ctx) = setup();
        game.fire_trap_touched(&mut ctx);

        advance(&mut game, &mut ctx, 0.25);
        assert_eq!(ctx.scene.find_all_by_tag(GHOST_TAG).len(), 1);
        assert!(ctx.events.iter().any(|e| e.kind == kinds::GHOST_RELEASED));

        advance(&mut game, &mut ctx, 3.0);
        assert!(ctx.scene.find_by_tag(GHOST_TAG).is_none());
    }

    #[test]
    fn invincible_gnome_only_shows_the_effect() {
        let (mut game, mut ctx) = setup();
        game.set_invincible(true);

        game.trap_touched(&mut ctx);

        assert_eq!(ctx.sounds, vec![SOUND_GNOME_DIED]);
        assert!(ctx.events.iter().any(|e| e.kind == kinds::DEATH_EFFECT));
        assert_eq!(game.phase(), GamePhase::Playing);
        assert!(game.gnome().expect("still here").is_alive());
        assert_eq!(game.pending_timers(), 0);
        assert!(game.rope().is_visible());
    }

    #[test]
    fn hazards_are_ignored_outside_play() {
        let (mut game, mut ctx) = setup();
        game.trap_touched(&mut ctx);
        ctx.clear_frame_data();

        game.fire_trap_touched(&mut ctx);
        assert!(ctx.sounds.is_empty());
        assert_eq!(game.corpses().len(), 1);
        assert_eq!(game.pending_timers(), 3);
    }

    #[test]
    fn exit_needs_the_treasure() {
        let (mut game, mut ctx) = setup();

        game.exit_reached(&mut ctx);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert!(ctx.sounds.is_empty());

        game.treasure_collected(&mut ctx);
        assert!(game.gnome().expect("gnome").is_holding_treasure());
        game.exit_reached(&mut ctx);

        assert_eq!(game.phase(), GamePhase::Won);
        assert_eq!(ctx.sounds, vec![SOUND_GAME_WON]);
        assert_eq!(ctx.time_scale(), 0.0);
        assert_eq!(game.panels(), UiPanels::won());
    }

    #[test]
    fn unpausing_after_a_win_keeps_time_stopped() {
        let (mut game, mut ctx) = setup();
        game.treasure_collected(&mut ctx);
        game.exit_reached(&mut ctx);

        game.set_paused(&mut ctx, true);
        assert_eq!(game.panels(), UiPanels::paused());
        game.set_paused(&mut ctx, false);
        assert_eq!(ctx.time_scale(), 0.0);
        assert_eq!(game.panels(), UiPanels::won());

        game.restart_game(&mut ctx);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(ctx.time_scale(), 1.0);
    }

    #[test]
    fn pause_toggles_time_and_panels() {
        let (mut game, mut ctx) = setup();
        game.set_paused(&mut ctx, true);
        assert!(game.is_paused());
        assert_eq!(ctx.time_scale(), 0.0);
        assert_eq!(
            ctx.events.last(),
            Some(&GameEvent { a: UiPanels::paused().bits() as f32, ..GameEvent::new(kinds::PANELS) })
        );

        game.set_paused(&mut ctx, false);
        assert!(!game.is_paused());
        assert_eq!(ctx.time_scale(), 1.0);
        assert_eq!(game.panels(), UiPanels::playing());
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn restart_replaces_the_gnome_without_a_death() {
        let (mut game, mut ctx) = setup();
        let old = game.gnome().expect("gnome").root();
        let parts = player_parts(&ctx);

        game.restart_game(&mut ctx);

        let new = game.gnome().expect("new gnome");
        assert_ne!(new.root(), old);
        assert!(!ctx.scene.contains(old));
        assert!(game.corpses().is_empty());
        assert_eq!(player_parts(&ctx), parts);
        assert_eq!(game.pending_timers(), 0);
    }

    #[test]
    fn stale_reset_after_restart_is_harmless() {
        let (mut game, mut ctx) = setup();
        let parts = player_parts(&ctx);
        game.trap_touched(&mut ctx);
        game.restart_game(&mut ctx);

        advance(&mut game, &mut ctx, 3.5);

        assert_eq!(game.phase(), GamePhase::Playing);
        assert!(game.gnome().expect("gnome").is_alive());
        assert_eq!(player_parts(&ctx), parts, "exactly one live gnome");
        assert!(game.corpses().is_empty());
        assert_eq!(game.rope().link_count(), 1);
    }

    #[test]
    fn reset_restores_resettables_and_treasure() {
        struct Counter(Rc<Cell<u32>>);
        impl Resettable for Counter {
            fn reset(&mut self, _ctx: &mut EngineContext) {
                self.0.set(self.0.get() + 1);
            }
        }

        let (mut game, mut ctx) = setup();
        let count = Rc::new(Cell::new(0));
        game.add_resettable(Box::new(Counter(count.clone())));

        let treasure = game.level().and_then(|l| l.treasure).expect("treasure").entity();
        if let Some(t) = game.level.as_mut().and_then(|l| l.treasure.as_mut()) {
            assert!(t.collect(&mut ctx, treasure));
        }

        game.restart_game(&mut ctx);
        assert_eq!(count.get(), 1);
        assert!(!game.level().and_then(|l| l.treasure).expect("treasure").is_collected());
    }

    #[test]
    fn keys_drive_pause_restart_and_invincibility() {
        let (mut game, mut ctx) = setup();
        let mut input = InputQueue::new();

        input.push(InputEvent::KeyDown { key_code: KEY_ESCAPE });
        game.handle_input(&mut ctx, &input);
        assert!(game.is_paused());
        input.drain();

        input.push(InputEvent::custom(custom::RESUME));
        input.push(InputEvent::custom(custom::TOGGLE_INVINCIBLE));
        game.handle_input(&mut ctx, &input);
        assert!(!game.is_paused());
        assert!(game.is_invincible());
        input.drain();

        let old = game.gnome().expect("gnome").root();
        input.push(InputEvent::KeyDown { key_code: KEY_R });
        game.handle_input(&mut ctx, &input);
        assert_ne!(game.gnome().expect("gnome").root(), old);
    }

    #[test]
    fn held_key_pays_out_rope() {
        let (mut game, mut ctx) = setup();
        let mut input = InputQueue::new();
        input.push(InputEvent::KeyDown { key_code: KEY_DOWN });

        game.update(&mut ctx, &input);
        assert_eq!(game.rope().link_count(), 2);

        input.push(InputEvent::KeyUp { key_code: KEY_DOWN });
        let total = game.rope().total_length();
        game.update(&mut ctx, &input);
        assert_eq!(game.rope().total_length(), total);
    }

    #[test]
    fn rope_button_pays_out_rope() {
        let (mut game, mut ctx) = setup();
        let mut input = InputQueue::new();
        input.push(InputEvent::Custom { kind: custom::ROPE_DOWN, a: 1.0, b: 0.0, c: 0.0 });
        game.handle_input(&mut ctx, &input);
        input.drain();

        game.update(&mut ctx, &input);
        game.update(&mut ctx, &input);
        assert_eq!(game.rope().link_count(), 2);
        assert!(game.rope().total_length() > 1.0);
    }

    #[test]
    fn runner_routes_trap_contact() {
        let mut config = GnomesWellConfig::default();
        config.level.hazards = vec![HazardDesc {
            kind: HazardKind::Blades,
            position: config.level.start_point,
            half_extents: Vec2::new(1.0, 1.0),
        }];
        let mut runner = GameRunner::new(GnomesWell::new(config).expect("valid"));
        runner.init();

        for _ in 0..5 {
            runner.tick(1.0 / 60.0);
        }

        assert_eq!(runner.game().phase(), GamePhase::DeathPending);
        assert_eq!(runner.game().corpses().len(), 1);
    }

    #[test]
    fn runner_routes_treasure_pickup() {
        let mut config = GnomesWellConfig::default();
        config.level.hazards.clear();
        config.level.treasure = Some(config.level.start_point);
        let mut runner = GameRunner::new(GnomesWell::new(config).expect("valid"));
        runner.init();

        for _ in 0..5 {
            runner.tick(1.0 / 60.0);
        }

        assert!(runner.game().gnome().expect("gnome").is_holding_treasure());
        let treasure = runner.game().level().and_then(|l| l.treasure).expect("treasure");
        assert!(treasure.is_collected());
    }

    #[test]
    fn pause_freezes_the_death_timer() {
        let mut runner = GameRunner::new(GnomesWell::new(GnomesWellConfig::default()).expect("valid"));
        runner.init();
        let (game, ctx) = runner.split_mut();
        game.trap_touched(ctx);

        runner.push_input(InputEvent::KeyDown { key_code: KEY_ESCAPE });
        for _ in 0..120 {
            runner.tick(1.0 / 60.0);
        }
        assert!(runner.game().is_paused());
        assert_eq!(runner.game().phase(), GamePhase::DeathPending);

        runner.push_input(InputEvent::KeyUp { key_code: KEY_ESCAPE });
        runner.push_input(InputEvent::KeyDown { key_code: KEY_ESCAPE });
        for _ in 0..90 {
            runner.tick(1.0 / 60.0);
        }
        assert!(!runner.game().is_paused());
        assert_eq!(runner.game().phase(), GamePhase::Playing);
    }
}
