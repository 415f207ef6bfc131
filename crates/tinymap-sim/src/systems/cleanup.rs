//! Cleanup system: despawns destroyed entities and drops them from the registry.

use hecs::{Entity, World};

use tinymap_core::enums::LifeState;
use tinymap_core::types::EntityId;

use crate::registry::EntityIndex;

/// Remove every entity in the `Destroyed` state.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, index: &mut EntityIndex, despawn_buffer: &mut Vec<(Entity, EntityId)>) {
    despawn_buffer.clear();

    for (entity, (id, life)) in world.query_mut::<(&EntityId, &LifeState)>() {
        if *life == LifeState::Destroyed {
            despawn_buffer.push((entity, *id));
        }
    }

    for (entity, id) in despawn_buffer.drain(..) {
        index.remove(id);
        let _ = world.despawn(entity);
    }
}
