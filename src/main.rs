//! Skyline Runner headless driver
//!
//! Runs one autopilot game at a fixed 60 Hz and logs the result. An optional
//! first argument names a JSON config file (missing fields take defaults); an
//! optional second argument fixes the seed.
//!
//! `RUST_LOG=debug skyline-runner tuning.json 42`

use std::process::ExitCode;

use skyline_runner::consts::SIM_DT;
use skyline_runner::sim::{GameState, Snapshot, TickInput};
use skyline_runner::{ConfigError, RunnerConfig};

/// Give up after ten minutes of simulated time
const MAX_TICKS: u64 = 60 * 60 * 10;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("Config {}: {}", path, err);
                return ExitCode::FAILURE;
            }
        },
        None => RunnerConfig::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| rand::random());

    log::info!("Skyline Runner (headless) starting with seed {}", seed);
    let mut state = match GameState::new(config, seed) {
        Ok(state) => state,
        Err(err) => {
            log::error!("Invalid config: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut snapshot = state.snapshot();
    let mut duck_held = false;
    while snapshot.alive && state.time_ticks < MAX_TICKS {
        let input = autopilot(&snapshot, &mut duck_held, state.config().screen_width);
        snapshot = state.step(&input, SIM_DT);
    }

    println!(
        "Survived {} s ({} ticks), final speed {:.1}",
        snapshot.score, state.time_ticks, snapshot.scroll_speed
    );
    ExitCode::SUCCESS
}

fn load_config(path: &str) -> Result<RunnerConfig, ConfigError> {
    let json = std::fs::read_to_string(path)?;
    RunnerConfig::from_json(&json)
}

/// Jump when the segment underfoot is about to run out. With plenty of runway
/// left it bobs between crouching and standing.
fn autopilot(snapshot: &Snapshot, duck_held: &mut bool, view_width: f32) -> TickInput {
    let (top_left, bottom_right) = (snapshot.player.rect.min(), snapshot.player.rect.max());
    let standing = snapshot.velocity == 0.0;

    let support_end = snapshot
        .segments
        .iter()
        .find(|s| s.rect.x < bottom_right.x && s.rect.max_x() > top_left.x)
        .map(|s| s.rect.max_x())
        .unwrap_or(view_width);
    let runway = support_end - bottom_right.x;

    // Take off with a few ticks of runway left
    let lead = snapshot.scroll_speed * 6.0;
    let jump = standing && runway < lead;

    *duck_held = standing && !jump && runway > lead * 8.0 && !*duck_held;

    TickInput {
        jump,
        duck: *duck_held,
    }
}
