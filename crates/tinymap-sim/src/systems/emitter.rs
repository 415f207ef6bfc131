//! Bullet emitter: fires a projectile along the player's facing on aim input.
//!
//! Two gates, checked in order: the live-projectile cap, then the cooldown
//! counter. Both throttle silently.

use hecs::World;

use tinymap_core::config::GameConfig;
use tinymap_core::events::GameEvent;
use tinymap_core::types::{EntityId, Position};

use crate::registry::EntityIndex;
use crate::session::{EmitterState, ScoreState};
use crate::world_setup;

/// Result of one emission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitOutcome {
    Fired(EntityId),
    /// Cooldown counter still running.
    Throttled,
    /// Cap reached; the cooldown counter is left untouched.
    AtCapacity,
    /// Emission switched off in config.
    Disabled,
}

/// Attempt to emit one projectile from `origin` along `angle`.
#[allow(clippy::too_many_arguments)]
pub fn try_emit(
    world: &mut World,
    index: &mut EntityIndex,
    emitter: &mut EmitterState,
    score: &mut ScoreState,
    config: &GameConfig,
    origin: Position,
    angle: f64,
    events: &mut Vec<GameEvent>,
) -> EmitOutcome {
    if !config.projectiles_enabled {
        return EmitOutcome::Disabled;
    }
    if emitter.live_projectiles >= config.max_projectiles {
        return EmitOutcome::AtCapacity;
    }
    if !emitter.cooldown.attempt(config.cooldown_threshold) {
        return EmitOutcome::Throttled;
    }

    let id = world_setup::spawn_projectile(world, index, config, origin, angle);
    emitter.live_projectiles += 1;
    score.projectiles_fired += 1;

    log::debug!(
        "projectile {:?} fired at {:.3} rad ({} live)",
        id,
        angle,
        emitter.live_projectiles
    );
    events.push(GameEvent::ProjectileFired { id, angle });
    EmitOutcome::Fired(id)
}
