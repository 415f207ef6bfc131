//! Visibility system: the flashlight sweep.
//!
//! Every enemy is reset to hidden first, then the fan of rays from the
//! player's pose re-marks the ones it touches. Nothing from the previous
//! frame survives the reset.

use hecs::{Entity, World};

use tinymap_core::components::{Body, Enemy, Facing, Player, Visibility};
use tinymap_core::config::GameConfig;
use tinymap_core::enums::LifeState;
use tinymap_core::types::Position;

use tinymap_vision::{ConeSpec, SweepTarget};

/// Flashlight pose of the live player, if any.
pub fn player_cone(world: &World, config: &GameConfig) -> Option<ConeSpec> {
    world
        .query::<(&Player, &Position, &Facing, &LifeState)>()
        .iter()
        .find(|(_, (_, _, _, life))| **life == LifeState::Alive)
        .map(|(_, (_, pos, facing, _))| ConeSpec {
            origin: *pos,
            facing: facing.angle,
            half_angle: config.cone_half_angle(),
            range: config.cone_range,
            step: config.cone_step(),
        })
}

/// Recompute enemy visibility from scratch. Returns the number of lit enemies.
pub fn run(world: &mut World, config: &GameConfig) -> usize {
    for (_entity, (_enemy, visibility)) in world.query_mut::<(&Enemy, &mut Visibility)>() {
        visibility.visible = false;
    }

    let Some(cone) = player_cone(world, config) else {
        return 0;
    };

    let (entities, targets): (Vec<Entity>, Vec<SweepTarget>) = world
        .query::<(&Enemy, &Position, &Body, &LifeState)>()
        .iter()
        .filter(|(_, (_, _, _, life))| **life == LifeState::Alive)
        .map(|(entity, (_, pos, body, _))| {
            (
                entity,
                SweepTarget {
                    position: *pos,
                    radius: body.radius,
                },
            )
        })
        .unzip();

    let lit = cone.sweep(&targets);
    let mut count = 0;
    for (entity, is_lit) in entities.into_iter().zip(lit) {
        if !is_lit {
            continue;
        }
        if let Ok(mut visibility) = world.get::<&mut Visibility>(entity) {
            visibility.visible = true;
            count += 1;
        }
    }
    count
}
