//! Headless demo driver
//!
//! Stands in for the real frame scheduler: runs the simulation with a
//! scripted pilot for a fixed number of frames and logs the outcome. Pass a
//! JSON tuning file as the first argument to override the stock constants.
//!
//!     RUST_LOG=info cargo run --release -- tuning.json

use std::process::ExitCode;

use rand::Rng;

use skylane::Config;
use skylane::consts::{MAX_FRAME_DELTA, NOMINAL_FRAME_MS};
use skylane::input::{Action, ActionSet};
use skylane::sim::{World, step};

/// Frames to simulate (one minute at 60 Hz)
const DEMO_FRAMES: u32 = 3600;

fn load_config(path: &str) -> Result<Config, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&text)?;
    config.validate()?;
    Ok(config)
}

/// A crude pilot: always firing, strafing side to side, restarting on death
fn scripted_actions(frame: u32, world: &World) -> ActionSet {
    let mut actions = ActionSet::new();
    if world.game_over {
        actions.press(Action::Restart);
        return actions;
    }
    actions.press(Action::Fire);
    if (frame / 120) % 2 == 0 {
        actions.press(Action::MoveRight);
    } else {
        actions.press(Action::MoveLeft);
    }
    if (frame / 200) % 2 == 0 {
        actions.press(Action::Ascend);
    }
    actions
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("failed to load tuning file {path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    let seed: u64 = rand::rng().random();
    log::info!("seed {seed}");

    // with_config only fails on invalid tuning, which load_config already
    // checked; the default config is always valid.
    let mut world = match World::with_config(config, seed) {
        Ok(world) => world,
        Err(err) => {
            eprintln!("invalid tuning: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut resets = 0u32;
    for frame in 0..DEMO_FRAMES {
        let actions = scripted_actions(frame, &world);
        if world.game_over && actions.contains(Action::Restart) {
            resets += 1;
        }
        // A real driver divides measured milliseconds by NOMINAL_FRAME_MS;
        // the demo ticks perfect frames and clamps the same way anyway.
        let dt = (16.666 / NOMINAL_FRAME_MS).min(MAX_FRAME_DELTA);
        step(&mut world, &actions, dt);

        if frame % 600 == 599 {
            log::info!(
                "frame {frame}: score {}, lives {}, {} enemies / {} obstacles in flight",
                world.score,
                world.lives,
                world.enemies.len(),
                world.obstacles.len()
            );
        }
    }

    println!(
        "simulated {DEMO_FRAMES} frames: final score {}, lives {}, {} restarts",
        world.score, world.lives, resets
    );
    ExitCode::SUCCESS
}
