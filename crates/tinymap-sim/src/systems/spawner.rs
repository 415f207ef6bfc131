//! Spawner system: creates one enemy each time the spawn timer elapses.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use tinymap_core::config::GameConfig;
use tinymap_core::events::GameEvent;

use crate::registry::EntityIndex;
use crate::session::SpawnTimer;
use crate::world_setup;

/// Step the spawn timer and spawn an enemy if one is due.
/// There is no cap on live enemies.
pub fn run(
    world: &mut World,
    index: &mut EntityIndex,
    rng: &mut ChaCha8Rng,
    timer: &mut SpawnTimer,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) {
    if !timer.step() {
        return;
    }

    let position = world_setup::spawn_position(rng, config);
    let id = world_setup::spawn_enemy(world, index, config, position);
    timer.spawned += 1;

    log::debug!("enemy {:?} spawned at ({:.1}, {:.1})", id, position.x, position.y);
    events.push(GameEvent::EnemySpawned { id, position });
}
