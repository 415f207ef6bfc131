//! Entity spawn factories.
//!
//! Creates the player, enemies and projectiles with their component bundles,
//! and registers each in the `EntityIndex`.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use tinymap_core::components::*;
use tinymap_core::config::GameConfig;
use tinymap_core::constants::*;
use tinymap_core::enums::{EntityKind, LifeState, SpawnPolicy};
use tinymap_core::types::{EntityId, PlayField, Position, Velocity};

use crate::registry::EntityIndex;

/// Spawn the player at the field center, facing +x.
pub fn spawn_player(world: &mut World, index: &mut EntityIndex, config: &GameConfig) -> EntityId {
    let id = index.allocate();
    let entity = world.spawn((
        Player,
        id,
        Position::new(0.0, 0.0),
        Facing::default(),
        LifeState::Alive,
        Body {
            kind: EntityKind::Player,
            radius: config.player_radius,
            category: CATEGORY_PLAYER,
            contact_mask: CATEGORY_ENEMY,
        },
    ));
    index.insert(id, entity);
    id
}

/// Spawn one enemy at `position`. Enemies start hidden.
pub fn spawn_enemy(
    world: &mut World,
    index: &mut EntityIndex,
    config: &GameConfig,
    position: Position,
) -> EntityId {
    let id = index.allocate();
    let entity = world.spawn((
        Enemy,
        id,
        position,
        Facing::default(),
        Visibility { visible: false },
        LifeState::Alive,
        Body {
            kind: EntityKind::Enemy,
            radius: config.enemy_radius,
            category: CATEGORY_ENEMY,
            contact_mask: CATEGORY_PLAYER | CATEGORY_PROJECTILE,
        },
    ));
    index.insert(id, entity);
    id
}

/// Spawn a projectile at `origin` travelling along `angle`.
pub fn spawn_projectile(
    world: &mut World,
    index: &mut EntityIndex,
    config: &GameConfig,
    origin: Position,
    angle: f64,
) -> EntityId {
    let id = index.allocate();
    let entity = world.spawn((
        Projectile,
        id,
        origin,
        Velocity::from_heading(angle, config.projectile_speed),
        Lifetime {
            remaining_ticks: config.projectile_ttl_ticks,
        },
        LifeState::Alive,
        Body {
            kind: EntityKind::Projectile,
            radius: config.projectile_radius,
            category: CATEGORY_PROJECTILE,
            contact_mask: CATEGORY_ENEMY,
        },
    ));
    index.insert(id, entity);
    id
}

/// Pick a spawn point according to the configured policy.
pub fn spawn_position(rng: &mut ChaCha8Rng, config: &GameConfig) -> Position {
    match config.spawn_policy {
        SpawnPolicy::RandomInBox => random_in_box(rng, &config.play_field),
        SpawnPolicy::Ring => ring_position(rng, &config.play_field, config.enemy_radius),
    }
}

/// Uniform integer point inside the field.
pub fn random_in_box(rng: &mut ChaCha8Rng, field: &PlayField) -> Position {
    let x = rng.gen_range(field.left().ceil() as i64..=field.right().floor() as i64);
    let y = rng.gen_range(field.bottom().ceil() as i64..=field.top().floor() as i64);
    Position::new(x as f64, y as f64)
}

/// Uniform bearing on the circle that just clears the field corners.
pub fn ring_position(rng: &mut ChaCha8Rng, field: &PlayField, enemy_half_size: f64) -> Position {
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let radius = ring_radius(field, enemy_half_size);
    Position::new(0.0, 0.0).offset(angle, radius)
}

/// Half the field diagonal plus the enemy half-size.
pub fn ring_radius(field: &PlayField, enemy_half_size: f64) -> f64 {
    field.half_diagonal() + enemy_half_size
}
