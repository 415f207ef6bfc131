//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Lifecycle ---
    /// Start gesture on the menu: begin a fresh match.
    StartGame,
    /// Leave the match and go back to the menu.
    ReturnToMenu,
    /// Suspend the match.
    Pause,
    /// Resume a suspended match.
    Resume,
    /// Pause if running, resume if paused.
    TogglePause,

    // --- Input ---
    /// Movement joystick sample (raw stick velocity).
    Move { dx: f64, dy: f64 },
    /// Rotation joystick sample: new facing in radians. May fire a projectile.
    Aim { angle: f64 },
}
