//! Scripted stick input for the headless binary.
//!
//! Sweeps the flashlight until an enemy is lit, then tracks and fires at the
//! nearest lit enemy. Starts a new match whenever the menu comes up.

use tinymap_core::commands::PlayerCommand;
use tinymap_core::enums::GamePhase;
use tinymap_core::state::GameStateSnapshot;

pub struct Autopilot {
    sweep_angle: f64,
    /// Radians per tick while no enemy is lit.
    sweep_rate: f64,
}

impl Autopilot {
    pub fn new(sweep_rate: f64) -> Self {
        Self {
            sweep_angle: 0.0,
            sweep_rate,
        }
    }

    /// Commands to send for the next tick given the latest snapshot.
    pub fn next_commands(&mut self, snapshot: Option<&GameStateSnapshot>) -> Vec<PlayerCommand> {
        let Some(snapshot) = snapshot else {
            return Vec::new();
        };

        match snapshot.phase {
            GamePhase::MainMenu => vec![PlayerCommand::StartGame],
            GamePhase::Paused | GamePhase::GameOver => Vec::new(),
            GamePhase::Active => {
                let Some(player) = &snapshot.player else {
                    return Vec::new();
                };
                let target = snapshot
                    .enemies
                    .iter()
                    .filter_map(|e| {
                        let bearing = player.position.bearing_to(&e.position)?;
                        Some((player.position.range_to(&e.position), bearing))
                    })
                    .min_by(|a, b| a.0.total_cmp(&b.0));

                let angle = match target {
                    Some((_, bearing)) => {
                        self.sweep_angle = bearing;
                        bearing
                    }
                    None => {
                        self.sweep_angle = (self.sweep_angle + self.sweep_rate)
                            .rem_euclid(std::f64::consts::TAU);
                        self.sweep_angle
                    }
                };
                vec![PlayerCommand::Aim { angle }]
            }
        }
    }
}
