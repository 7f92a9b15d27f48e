use crate::api::game::{EngineContext, Game, GameConfig};
use crate::core::time::FixedTimestep;
use crate::input::queue::{InputEvent, InputQueue};

/// Headless runner that wires a [`Game`] to the engine loop.
///
/// One call to [`GameRunner::tick`] is one frame: the game sees the frame's
/// input edges, then the fixed timestep (scaled by the context's time scale)
/// decides how many `update` + physics steps run.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    timestep: FixedTimestep,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt).with_max_steps(config.max_steps_per_frame);

        Self {
            game,
            ctx: EngineContext::from_config(&config),
            input: InputQueue::new(),
            timestep,
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        log::info!(
            "runner initialized (dt={:.4}, seed={})",
            self.config.fixed_dt,
            self.config.seed
        );
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame. Returns the number of fixed steps that ran.
    pub fn tick(&mut self, frame_dt: f32) -> u32 {
        if !self.initialized {
            return 0;
        }

        self.ctx.clear_frame_data();

        self.game.handle_input(&mut self.ctx, &self.input);

        self.timestep.set_time_scale(self.ctx.time_scale());
        let steps = self.timestep.accumulate(frame_dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
            #[cfg(feature = "physics")]
            self.ctx.step_physics();
            // A step may stop time (win screen); later steps of this frame must not run.
            if self.ctx.time_scale() == 0.0 {
                self.timestep.set_time_scale(0.0);
                break;
            }
        }

        self.input.drain();
        steps
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn ctx(&self) -> &EngineContext {
        &self.ctx
    }

    /// The game and its context at once, for calling game entry points directly.
    pub fn split_mut(&mut self) -> (&mut G, &mut EngineContext) {
        (&mut self.game, &mut self.ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingGame {
        updates: u32,
        input_passes: u32,
        stop_after: Option<u32>,
    }

    impl Game for CountingGame {
        fn config(&self) -> GameConfig {
            GameConfig { fixed_dt: 0.25, ..GameConfig::default() }
        }

        fn init(&mut self, _ctx: &mut EngineContext) {}

        fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.input_passes += 1;
            if input.pressed(1) {
                ctx.set_time_scale(1.0);
            }
        }

        fn update(&mut self, ctx: &mut EngineContext, _input: &InputQueue) {
            self.updates += 1;
            if Some(self.updates) == self.stop_after {
                ctx.set_time_scale(0.0);
            }
        }
    }

    #[test]
    fn tick_before_init_does_nothing() {
        let mut runner = GameRunner::new(CountingGame::default());
        assert_eq!(runner.tick(1.0), 0);
        assert_eq!(runner.game().input_passes, 0);
    }

    #[test]
    fn runs_fixed_steps_per_frame() {
        let mut runner = GameRunner::new(CountingGame::default());
        runner.init();
        assert_eq!(runner.tick(0.5), 2);
        assert_eq!(runner.game().updates, 2);
        assert_eq!(runner.game().input_passes, 1);
    }

    #[test]
    fn stopped_time_still_handles_input() {
        let mut runner = GameRunner::new(CountingGame { stop_after: Some(1), ..Default::default() });
        runner.init();
        runner.tick(1.0);
        assert_eq!(runner.game().updates, 1, "time stopped after the first step");

        runner.tick(1.0);
        assert_eq!(runner.game().updates, 1);
        assert_eq!(runner.game().input_passes, 2);

        runner.push_input(InputEvent::KeyDown { key_code: 1 });
        runner.tick(0.25);
        assert_eq!(runner.game().updates, 2);
    }
}
