//! Combat resolver: applies contact events to entity state.
//!
//! Every entity moves `Alive -> Destroyed` at most once. A contact naming an
//! entity that is already destroyed, or no longer exists, is a no-op, so at
//! most one resolution path fires per contact.

use hecs::{Entity, World};

use tinymap_core::components::Body;
use tinymap_core::enums::{ContactOrdering, EntityKind, ExpiryReason, LifeState};
use tinymap_core::events::GameEvent;
use tinymap_core::types::EntityId;

use crate::session::{EmitterState, ScoreState};

/// Two bodies that began touching. `a` is the primary body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Contact {
    pub a: Entity,
    pub b: Entity,
}

/// What a single contact did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    Ignored,
    EnemyKilled { enemy: EntityId, by: EntityKind },
    PlayerHit { player: EntityId },
}

/// Rules the resolver runs under.
#[derive(Debug, Clone, Copy)]
pub struct CombatRules {
    pub ordering: ContactOrdering,
    /// Whether the enemy dies (and scores) when it reaches the player.
    pub counter_kill: bool,
}

#[derive(Debug, Clone, Copy)]
struct Party {
    entity: Entity,
    id: EntityId,
    kind: EntityKind,
    life: LifeState,
}

fn probe(world: &World, entity: Entity) -> Option<Party> {
    let kind = world.get::<&Body>(entity).ok()?.kind;
    let life = *world.get::<&LifeState>(entity).ok()?;
    let id = *world.get::<&EntityId>(entity).ok()?;
    Some(Party {
        entity,
        id,
        kind,
        life,
    })
}

/// Flip an entity to `Destroyed`. Returns false if it was not alive.
fn mark_destroyed(world: &World, entity: Entity) -> bool {
    match world.get::<&mut LifeState>(entity) {
        Ok(mut life) if *life == LifeState::Alive => {
            *life = LifeState::Destroyed;
            true
        }
        _ => false,
    }
}

/// Destroy a projectile and release its slot in the live counter.
/// The counter is decremented only on the `Alive -> Destroyed` transition.
pub fn destroy_projectile(
    world: &World,
    entity: Entity,
    emitter: &mut EmitterState,
    reason: ExpiryReason,
    events: &mut Vec<GameEvent>,
) -> bool {
    if !mark_destroyed(world, entity) {
        return false;
    }
    debug_assert!(emitter.live_projectiles > 0, "projectile counter underflow");
    emitter.live_projectiles = emitter.live_projectiles.saturating_sub(1);

    if let Ok(id) = world.get::<&EntityId>(entity) {
        log::debug!("projectile {:?} expired ({:?})", *id, reason);
        events.push(GameEvent::ProjectileExpired { id: *id, reason });
    }
    true
}

fn destroy_enemy(
    world: &World,
    enemy: &Party,
    by: EntityKind,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) -> bool {
    if !mark_destroyed(world, enemy.entity) {
        return false;
    }
    score.enemies_destroyed += 1;
    log::debug!("enemy {:?} destroyed by {:?}", enemy.id, by);
    events.push(GameEvent::EnemyDestroyed { id: enemy.id, by });
    true
}

/// Resolve one contact.
pub fn resolve_one(
    world: &World,
    contact: Contact,
    rules: CombatRules,
    score: &mut ScoreState,
    emitter: &mut EmitterState,
    events: &mut Vec<GameEvent>,
) -> ContactOutcome {
    let (Some(a), Some(b)) = (probe(world, contact.a), probe(world, contact.b)) else {
        return ContactOutcome::Ignored;
    };
    if a.life != LifeState::Alive || b.life != LifeState::Alive {
        return ContactOutcome::Ignored;
    }

    // The player's own projectiles never hurt it.
    if matches!(
        (a.kind, b.kind),
        (EntityKind::Projectile, EntityKind::Player) | (EntityKind::Player, EntityKind::Projectile)
    ) {
        return ContactOutcome::Ignored;
    }

    let (enemy, other) = match rules.ordering {
        ContactOrdering::Symmetric if a.kind == EntityKind::Enemy => (a, b),
        ContactOrdering::Symmetric if b.kind == EntityKind::Enemy => (b, a),
        ContactOrdering::PrimaryOnly if a.kind == EntityKind::Enemy => (a, b),
        _ => return ContactOutcome::Ignored,
    };

    match other.kind {
        EntityKind::Player => {
            if rules.counter_kill {
                destroy_enemy(world, &enemy, EntityKind::Player, score, events);
            }
            mark_destroyed(world, other.entity);
            log::info!("player {:?} hit by enemy {:?}", other.id, enemy.id);
            events.push(GameEvent::PlayerHit { id: other.id });
            ContactOutcome::PlayerHit { player: other.id }
        }
        EntityKind::Projectile => {
            destroy_enemy(world, &enemy, EntityKind::Projectile, score, events);
            destroy_projectile(world, other.entity, emitter, ExpiryReason::Contact, events);
            ContactOutcome::EnemyKilled {
                enemy: enemy.id,
                by: EntityKind::Projectile,
            }
        }
        EntityKind::Enemy => ContactOutcome::Ignored,
    }
}

/// Resolve contacts in order. Returns the id of the player if it was hit.
pub fn resolve(
    world: &World,
    contacts: &[Contact],
    rules: CombatRules,
    score: &mut ScoreState,
    emitter: &mut EmitterState,
    events: &mut Vec<GameEvent>,
) -> Option<EntityId> {
    let mut player_hit = None;
    for &contact in contacts {
        if let ContactOutcome::PlayerHit { player } =
            resolve_one(world, contact, rules, score, emitter, events)
        {
            player_hit.get_or_insert(player);
        }
    }
    player_hit
}
