//! Host API handlers.
//!
//! The driving layer (binary, renderer, physics host) calls these to control
//! the game loop thread. They bridge requests to the loop via channels.

use std::sync::mpsc;

use tinymap_core::commands::PlayerCommand;
use tinymap_core::state::GameStateSnapshot;
use tinymap_core::types::EntityId;
use tinymap_sim::engine::SimConfig;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(
    state: &AppState,
    config: SimConfig,
    subscriber: Option<mpsc::Sender<GameStateSnapshot>>,
) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if *running {
        return Err("Simulation already running".into());
    }

    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(config, state.latest_snapshot.clone(), subscriber)?;

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    *tx_lock = Some(cmd_tx);
    let mut thread_lock = state.loop_thread.lock().map_err(|e| e.to_string())?;
    *thread_lock = Some(handle);
    *running = true;

    Ok(())
}

fn send(state: &AppState, command: GameLoopCommand) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(command)
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Simulation not started".into()),
    }
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), String> {
    send(state, GameLoopCommand::PlayerCommand(command))
}

/// Forward a contact reported by an external physics host.
pub fn report_contact(state: &AppState, a: EntityId, b: EntityId) -> Result<(), String> {
    send(state, GameLoopCommand::ReportContact(a, b))
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for its thread to exit.
pub fn stop_simulation(state: &AppState) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;
    if !*running {
        return Ok(());
    }

    if let Some(tx) = state.command_tx.lock().map_err(|e| e.to_string())?.take() {
        // The loop may already be gone; joining below is what matters.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    if let Some(handle) = state.loop_thread.lock().map_err(|e| e.to_string())?.take() {
        handle
            .join()
            .map_err(|_| "Game loop thread panicked".to_string())?;
    }
    *running = false;

    Ok(())
}
