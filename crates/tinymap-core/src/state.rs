//! Game state snapshot: the complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::GameEvent;
use crate::types::{EntityId, Position, SimTime, Velocity};

/// Complete game state published after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u32,
    pub player: Option<PlayerView>,
    /// Enemies currently inside the flashlight cone. Hidden enemies are omitted.
    pub enemies: Vec<EnemyView>,
    /// All live enemies, visible or not.
    pub enemy_count: u32,
    pub projectiles: Vec<ProjectileView>,
    /// Live-projectile counter maintained by the emitter.
    pub projectile_count: u32,
    pub cone: Option<ConeView>,
    pub events: Vec<GameEvent>,
    /// Seconds left before the match is left (only during game over).
    pub game_over_remaining_secs: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: EntityId,
    pub position: Position,
    pub facing: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EntityId,
    pub position: Position,
    pub facing: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: EntityId,
    pub position: Position,
    pub velocity: Velocity,
}

/// Flashlight pose for rendering the lit sector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConeView {
    pub origin: Position,
    pub facing: f64,
    pub half_angle: f64,
    pub range: f64,
}
