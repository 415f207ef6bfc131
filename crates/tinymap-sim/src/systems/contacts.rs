//! Contact detection: circle overlap filtered by category/contact bitmasks.
//!
//! Reports *begin* contacts only: a pair that keeps overlapping on later
//! frames is not reported again until it separates. Bodies are visited in
//! `EntityId` order. An enemy, when one is involved, is the primary body of
//! the reported pair; otherwise the lower id is.

use std::collections::HashSet;

use hecs::{Entity, World};

use tinymap_core::components::Body;
use tinymap_core::enums::{EntityKind, LifeState};
use tinymap_core::types::{EntityId, Position};

use super::combat::Contact;

/// Pairs that were touching at the end of the previous detection pass.
#[derive(Debug, Default)]
pub struct ContactTracker {
    touching: HashSet<(Entity, Entity)>,
}

impl ContactTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.touching.clear();
    }
}

/// Whether two bodies are allowed to produce a contact.
pub fn masks_interact(a: &Body, b: &Body) -> bool {
    (a.category & b.contact_mask) != 0 || (b.category & a.contact_mask) != 0
}

/// Order a pair so the enemy, if any, is body `a`.
fn primary_first(a: Entity, body_a: &Body, b: Entity, body_b: &Body) -> Contact {
    if body_b.kind == EntityKind::Enemy && body_a.kind != EntityKind::Enemy {
        Contact { a: b, b: a }
    } else {
        Contact { a, b }
    }
}

/// Detect contacts that began this frame.
pub fn detect(world: &World, tracker: &mut ContactTracker) -> Vec<Contact> {
    let mut bodies: Vec<(EntityId, Entity, Position, Body)> = world
        .query::<(&EntityId, &Position, &Body, &LifeState)>()
        .iter()
        .filter(|(_, (_, _, _, life))| **life == LifeState::Alive)
        .map(|(entity, (id, pos, body, _))| (*id, entity, *pos, *body))
        .collect();
    bodies.sort_by_key(|(id, ..)| *id);

    let mut touching = HashSet::new();
    let mut began = Vec::new();

    for (i, (_, entity_a, pos_a, body_a)) in bodies.iter().enumerate() {
        for (_, entity_b, pos_b, body_b) in &bodies[i + 1..] {
            if !masks_interact(body_a, body_b) {
                continue;
            }
            let reach = body_a.radius + body_b.radius;
            let dx = pos_b.x - pos_a.x;
            let dy = pos_b.y - pos_a.y;
            if dx * dx + dy * dy > reach * reach {
                continue;
            }

            let pair = (*entity_a, *entity_b);
            if !tracker.touching.contains(&pair) {
                began.push(primary_first(*entity_a, body_a, *entity_b, body_b));
            }
            touching.insert(pair);
        }
    }

    tracker.touching = touching;
    began
}
