//! Headless run of Gnome's Well: pays the rope out into the well, reels it
//! back in and logs what happened. Pass a JSON config path to override tuning.

use std::process::ExitCode;

use gnomes_well::{GamePhase, GnomesWell, GnomesWellConfig};
use well_engine::{GameRunner, InputEvent};

const FRAME_DT: f32 = 1.0 / 60.0;
const FRAMES_PER_PHASE: u32 = 240;

fn load_config() -> Result<GnomesWellConfig, String> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path).map_err(|e| format!("{path}: {e}"))?;
            GnomesWellConfig::from_json(&json).map_err(|e| format!("{path}: {e}"))
        }
        None => Ok(GnomesWellConfig::default()),
    }
}

fn run_phase(runner: &mut GameRunner<GnomesWell>, key: u32, label: &str) {
    runner.push_input(InputEvent::KeyDown { key_code: key });
    for frame in 0..FRAMES_PER_PHASE {
        runner.tick(FRAME_DT);
        if runner.game().phase() != GamePhase::Playing {
            log::info!("{label}: {:?} after {frame} frames", runner.game().phase());
            break;
        }
    }
    runner.push_input(InputEvent::KeyUp { key_code: key });
    runner.tick(FRAME_DT);

    let game = runner.game();
    let camera = game.camera_position(runner.ctx());
    log::info!(
        "{label}: {} links, {:.2} units of rope, camera at {camera:?}",
        game.rope().link_count(),
        game.rope().total_length(),
    );
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let game = match GnomesWell::new(config) {
        Ok(game) => game,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut runner = GameRunner::new(game);
    runner.init();

    run_phase(&mut runner, gnomes_well::controls::KEY_DOWN, "descend");
    run_phase(&mut runner, gnomes_well::controls::KEY_UP, "climb");

    log::info!(
        "finished in {:?} with {} corpses",
        runner.game().phase(),
        runner.game().corpses().len()
    );
    ExitCode::SUCCESS
}
