//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only: it never modifies the world.

use hecs::World;

use tinymap_core::components::*;
use tinymap_core::config::GameConfig;
use tinymap_core::enums::{GamePhase, LifeState};
use tinymap_core::events::GameEvent;
use tinymap_core::state::*;
use tinymap_core::types::{EntityId, Position, SimTime, Velocity};

use crate::session::{EmitterState, ScoreState};

/// Everything outside the world that the snapshot reports.
pub struct SnapshotContext<'a> {
    pub time: &'a SimTime,
    pub phase: GamePhase,
    pub score: &'a ScoreState,
    pub emitter: &'a EmitterState,
    pub config: &'a GameConfig,
    pub game_over_remaining_secs: Option<f64>,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    ctx: &SnapshotContext<'_>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let player = build_player(world);
    let cone = player.as_ref().map(|p| ConeView {
        origin: p.position,
        facing: p.facing,
        half_angle: ctx.config.cone_half_angle(),
        range: ctx.config.cone_range,
    });

    GameStateSnapshot {
        time: *ctx.time,
        phase: ctx.phase,
        score: ctx.score.enemies_destroyed,
        player,
        enemies: build_visible_enemies(world),
        enemy_count: count_live_enemies(world),
        projectiles: build_projectiles(world),
        projectile_count: ctx.emitter.live_projectiles,
        cone,
        events,
        game_over_remaining_secs: ctx.game_over_remaining_secs,
    }
}

fn build_player(world: &World) -> Option<PlayerView> {
    world
        .query::<(&Player, &EntityId, &Position, &Facing, &LifeState)>()
        .iter()
        .find(|(_, (_, _, _, _, life))| **life == LifeState::Alive)
        .map(|(_, (_, id, pos, facing, _))| PlayerView {
            id: *id,
            position: *pos,
            facing: facing.angle,
        })
}

/// Only lit enemies are rendered.
fn build_visible_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &EntityId, &Position, &Facing, &Visibility, &LifeState)>()
        .iter()
        .filter(|(_, (_, _, _, _, vis, life))| vis.visible && **life == LifeState::Alive)
        .map(|(_, (_, id, pos, facing, _, _))| EnemyView {
            id: *id,
            position: *pos,
            facing: facing.angle,
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn count_live_enemies(world: &World) -> u32 {
    world
        .query::<(&Enemy, &LifeState)>()
        .iter()
        .filter(|(_, (_, life))| **life == LifeState::Alive)
        .count() as u32
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &EntityId, &Position, &Velocity, &LifeState)>()
        .iter()
        .filter(|(_, (_, _, _, _, life))| **life == LifeState::Alive)
        .map(|(_, (_, id, pos, vel, _))| ProjectileView {
            id: *id,
            position: *pos,
            velocity: *vel,
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}
