//! Pursuit system: every live enemy seeks the player.
//!
//! The player position is sampled once before any enemy moves, and each
//! enemy reads only its own pre-step position, so the result does not depend
//! on iteration order. Runs regardless of visibility.

use hecs::World;

use tinymap_core::components::{Enemy, Facing, Player};
use tinymap_core::enums::LifeState;
use tinymap_core::types::Position;

use tinymap_ai::seek::{seek, SeekContext};

/// Current position of the live player, if any.
pub fn player_position(world: &World) -> Option<Position> {
    world
        .query::<(&Player, &Position, &LifeState)>()
        .iter()
        .find(|(_, (_, _, life))| **life == LifeState::Alive)
        .map(|(_, (_, pos, _))| *pos)
}

/// Advance every live enemy one seek step toward the player.
/// Does nothing when there is no live player.
pub fn run(world: &mut World, speed: f64) {
    let Some(target) = player_position(world) else {
        return;
    };

    for (_entity, (_enemy, pos, facing, life)) in
        world.query_mut::<(&Enemy, &mut Position, &mut Facing, &LifeState)>()
    {
        if *life != LifeState::Alive {
            continue;
        }

        let update = seek(&SeekContext {
            position: *pos,
            facing: facing.angle,
            target,
            speed,
        });
        *pos = update.position;
        facing.angle = update.facing;
    }
}
