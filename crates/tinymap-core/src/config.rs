//! Tunable game parameters.
//!
//! `GameConfig::default()` reproduces the constants in `constants.rs`.
//! Hosts may load overrides from JSON; missing fields keep their defaults
//! and out-of-range values are clamped rather than rejected.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{ContactOrdering, GameOverDestination, SpawnPolicy};
use crate::types::PlayField;

/// Smallest cone step accepted (degrees).
const MIN_CONE_STEP_DEG: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub play_field: PlayField,

    // --- Spawner ---
    pub spawn_policy: SpawnPolicy,
    pub spawn_interval_secs: f64,

    // --- Actors ---
    pub enemy_speed: f64,
    pub enemy_radius: f64,
    pub player_radius: f64,
    pub move_multiplier: f64,

    // --- Visibility cone ---
    pub cone_half_angle_deg: f64,
    pub cone_range: f64,
    pub cone_step_deg: f64,

    // --- Bullet emitter ---
    pub projectiles_enabled: bool,
    pub max_projectiles: u32,
    pub cooldown_threshold: u32,
    pub projectile_speed: f64,
    pub projectile_radius: f64,
    pub projectile_ttl_ticks: u32,
    pub projectile_oob_margin: f64,

    // --- Combat / lifecycle ---
    pub contact_ordering: ContactOrdering,
    pub game_over_delay_secs: f64,
    pub game_over_destination: GameOverDestination,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            play_field: PlayField::default(),
            spawn_policy: SpawnPolicy::default(),
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            enemy_speed: ENEMY_SPEED,
            enemy_radius: ENEMY_RADIUS,
            player_radius: PLAYER_RADIUS,
            move_multiplier: MOVE_VELOCITY_MULTIPLIER,
            cone_half_angle_deg: CONE_HALF_ANGLE_DEG,
            cone_range: CONE_RANGE,
            cone_step_deg: CONE_STEP_DEG,
            projectiles_enabled: true,
            max_projectiles: MAX_PROJECTILES,
            cooldown_threshold: COOLDOWN_THRESHOLD,
            projectile_speed: PROJECTILE_SPEED,
            projectile_radius: PROJECTILE_RADIUS,
            projectile_ttl_ticks: PROJECTILE_TTL_TICKS,
            projectile_oob_margin: PROJECTILE_OOB_MARGIN,
            contact_ordering: ContactOrdering::default(),
            game_over_delay_secs: GAME_OVER_DELAY_SECS,
            game_over_destination: GameOverDestination::default(),
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON and sanitize it.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: GameConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Clamp degenerate values into a usable range.
    pub fn sanitized(mut self) -> Self {
        if !is_positive(self.play_field.half_width) || !is_positive(self.play_field.half_height)
        {
            log::warn!(
                "play field {:?} is degenerate, using default",
                self.play_field
            );
            self.play_field = PlayField::default();
        }
        if self.spawn_interval_secs.is_nan() || self.spawn_interval_secs < DT {
            log::warn!(
                "spawn interval {}s below one tick, clamping",
                self.spawn_interval_secs
            );
            self.spawn_interval_secs = DT;
        }
        if self.cone_step_deg.is_nan() || self.cone_step_deg < MIN_CONE_STEP_DEG {
            log::warn!("cone step {}deg too small, clamping", self.cone_step_deg);
            self.cone_step_deg = MIN_CONE_STEP_DEG;
        }
        self.cone_half_angle_deg =
            clamp_or(self.cone_half_angle_deg, 0.0, 180.0, CONE_HALF_ANGLE_DEG);
        self.cone_range = clamp_or(self.cone_range, 0.0, f64::MAX, CONE_RANGE);
        self.enemy_speed = clamp_or(self.enemy_speed, 0.0, f64::MAX, ENEMY_SPEED);
        self.enemy_radius = clamp_or(self.enemy_radius, 0.0, f64::MAX, ENEMY_RADIUS);
        self.player_radius = clamp_or(self.player_radius, 0.0, f64::MAX, PLAYER_RADIUS);
        self.projectile_speed = clamp_or(self.projectile_speed, 0.0, f64::MAX, PROJECTILE_SPEED);
        self.projectile_radius =
            clamp_or(self.projectile_radius, 0.0, f64::MAX, PROJECTILE_RADIUS);
        self.projectile_oob_margin =
            clamp_or(self.projectile_oob_margin, 0.0, f64::MAX, PROJECTILE_OOB_MARGIN);
        self.game_over_delay_secs =
            clamp_or(self.game_over_delay_secs, 0.0, f64::MAX, GAME_OVER_DELAY_SECS);
        self
    }

    /// Ticks between spawns (at least one).
    pub fn spawn_interval_ticks(&self) -> u64 {
        ((self.spawn_interval_secs * TICK_RATE as f64).round() as u64).max(1)
    }

    /// Ticks between the player hit and leaving the match.
    pub fn game_over_delay_ticks(&self) -> u64 {
        (self.game_over_delay_secs * TICK_RATE as f64).round() as u64
    }

    pub fn cone_half_angle(&self) -> f64 {
        self.cone_half_angle_deg.to_radians()
    }

    pub fn cone_step(&self) -> f64 {
        self.cone_step_deg.to_radians()
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Clamp `value` to `[min, max]`, substituting `fallback` for NaN.
fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        log::warn!("config value is NaN, using {fallback}");
        return fallback;
    }
    value.clamp(min, max)
}
