//! Projectile system: integrates motion and expires spent projectiles.
//!
//! A projectile expires when its lifetime runs out or it leaves the play
//! field plus margin. Expiry goes through `combat::destroy_projectile`, the
//! single place the live counter is decremented.

use hecs::{Entity, World};

use tinymap_core::components::{Lifetime, Projectile};
use tinymap_core::config::GameConfig;
use tinymap_core::enums::{ExpiryReason, LifeState};
use tinymap_core::events::GameEvent;
use tinymap_core::types::{Position, Velocity};

use super::combat;
use crate::session::EmitterState;

/// Move live projectiles and expire the ones that timed out or left the field.
pub fn run(
    world: &mut World,
    emitter: &mut EmitterState,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) {
    let mut expired: Vec<(Entity, ExpiryReason)> = Vec::new();

    for (entity, (_projectile, pos, vel, lifetime, life)) in world.query_mut::<(
        &Projectile,
        &mut Position,
        &Velocity,
        &mut Lifetime,
        &LifeState,
    )>() {
        if *life != LifeState::Alive {
            continue;
        }

        pos.x += vel.x;
        pos.y += vel.y;
        lifetime.remaining_ticks = lifetime.remaining_ticks.saturating_sub(1);

        if lifetime.remaining_ticks == 0 {
            expired.push((entity, ExpiryReason::Timeout));
        } else if !config
            .play_field
            .contains(pos, config.projectile_oob_margin)
        {
            expired.push((entity, ExpiryReason::OutOfBounds));
        }
    }

    for (entity, reason) in expired {
        combat::destroy_projectile(world, entity, emitter, reason, events);
    }
}
