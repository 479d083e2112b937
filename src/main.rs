//! Coin Hopper - headless runner
//!
//! Plays a session with the autopilot at the fixed simulation rate and
//! prints the final HUD as JSON. Restarts after a game over until the tick
//! budget runs out.
//!
//! Usage: coin-hopper [--ticks N] [--seed S] [--tuning path.json] [--once]

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use coin_hopper::consts::SIM_DT;
use coin_hopper::platform::{Autopilot, KeyboardState, LogDisplay, NullRenderer};
use coin_hopper::{Game, Tuning};

const DEFAULT_TICKS: u64 = 60 * 60;

/// Play a seeded demo session with the autopilot and print the final HUD.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Number of 60 Hz frames to simulate.
    #[arg(
        long,
        value_name = "FRAMES",
        default_value_t = DEFAULT_TICKS,
        value_parser = clap::value_parser!(u64)
    )]
    ticks: u64,
    /// Run seed; defaults to the wall clock.
    #[arg(long, value_name = "SEED", value_parser = clap::value_parser!(u64))]
    seed: Option<u64>,
    /// JSON file overriding the default tuning.
    #[arg(long, value_name = "PATH")]
    tuning: Option<PathBuf>,
    /// Stop at the first game over instead of restarting.
    #[arg(long)]
    once: bool,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();

    let tuning = match &args.tuning {
        Some(path) => Tuning::load_or_default(path),
        None => Tuning::default(),
    };
    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!("Coin Hopper (headless) starting with seed {seed}");

    let mut game = Game::new(seed, tuning, KeyboardState::new());
    let mut autopilot = Autopilot::new();
    let mut renderer = NullRenderer;
    let mut display = LogDisplay::default();

    game.start();
    let mut frames = 0;
    for _ in 0..args.ticks {
        if display.final_score.take().is_some() {
            if args.once {
                break;
            }
            game.start();
        }

        let (state, keys) = game.state_and_input();
        autopilot.drive(state, keys);
        game.frame(SIM_DT, &mut renderer, &mut display);
        frames += 1;
    }

    log::info!(
        "Finished after {frames} frames (seed {})",
        game.state().seed
    );
    match serde_json::to_string(&game.state().hud()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize HUD: {e}");
            ExitCode::FAILURE
        }
    }
}
