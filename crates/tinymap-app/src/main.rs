//! Headless TinyMap runner.
//!
//! Usage: `tinymap [config.json] [seconds]`
//!
//! Runs the game loop in real time with the autopilot at the stick and logs
//! the outcome. Set `RUST_LOG=info` (or `debug`) to follow the match.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use tinymap_app::autopilot::Autopilot;
use tinymap_app::game_loop::TICK_DURATION;
use tinymap_app::host;
use tinymap_app::state::AppState;
use tinymap_core::config::GameConfig;
use tinymap_core::events::GameEvent;
use tinymap_sim::engine::SimConfig;

const DEFAULT_RUN_SECS: u64 = 10;

fn load_config(path: Option<&str>) -> Result<GameConfig, String> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let json = std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    GameConfig::from_json(&json).map_err(|e| format!("{path}: {e}"))
}

fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    let game = load_config(args.get(1).map(String::as_str))?;
    let run_secs = match args.get(2) {
        Some(s) => s.parse().map_err(|e| format!("bad duration {s:?}: {e}"))?,
        None => DEFAULT_RUN_SECS,
    };

    let state = AppState::new();
    let (snap_tx, snap_rx) = mpsc::channel();
    host::start_simulation(
        &state,
        SimConfig {
            game,
            ..Default::default()
        },
        Some(snap_tx),
    )?;

    let mut pilot = Autopilot::new(0.05);
    let mut matches = 0u32;
    let mut best_score = 0u32;
    let deadline = Instant::now() + Duration::from_secs(run_secs);

    while Instant::now() < deadline {
        for snap in snap_rx.try_iter() {
            for event in &snap.events {
                match event {
                    GameEvent::MatchStarted => matches += 1,
                    GameEvent::GameOver { score, .. } => {
                        log::info!("match {matches} over, score {score}");
                        best_score = best_score.max(*score);
                    }
                    _ => {}
                }
            }
        }

        let latest = host::get_snapshot(&state)?;
        for command in pilot.next_commands(latest.as_ref()) {
            host::send_command(&state, command)?;
        }
        std::thread::sleep(TICK_DURATION);
    }

    let last_score = host::get_snapshot(&state)?.map_or(0, |s| s.score);
    host::stop_simulation(&state)?;

    println!(
        "{} match(es) in {}s, best score {}, last score {}",
        matches,
        run_secs,
        best_score.max(last_score),
        last_score
    );
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
