//! Explicit entity registry: stable `EntityId`s mapped to hecs entities.
//!
//! Hosts address entities by id (contact reports, snapshots). A lookup of a
//! destroyed entity simply misses.

use std::collections::HashMap;

use hecs::Entity;

use tinymap_core::types::EntityId;

#[derive(Debug, Default)]
pub struct EntityIndex {
    by_id: HashMap<EntityId, Entity>,
    next_id: u32,
}

impl EntityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out a fresh id. Ids are never reused, even across matches.
    pub fn allocate(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn insert(&mut self, id: EntityId, entity: Entity) {
        self.by_id.insert(id, entity);
    }

    pub fn get(&self, id: EntityId) -> Option<Entity> {
        self.by_id.get(&id).copied()
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.by_id.remove(&id)
    }

    /// Forget every mapping. The id counter keeps running.
    pub fn clear(&mut self) {
        self.by_id.clear();
    }
}
