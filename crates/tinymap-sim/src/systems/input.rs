//! Input system: applies joystick samples to the player.
//!
//! Movement samples translate the player immediately; the field clamp runs
//! once per frame. Aim samples set the facing and hand off to the emitter.

use hecs::World;

use tinymap_core::components::{Facing, Player};
use tinymap_core::config::GameConfig;
use tinymap_core::enums::LifeState;
use tinymap_core::types::{PlayField, Position};

/// Translate the live player by a stick velocity sample scaled by the move
/// multiplier, staying inside the play field.
pub fn apply_move(world: &mut World, dx: f64, dy: f64, config: &GameConfig) {
    if !dx.is_finite() || !dy.is_finite() {
        log::warn!("ignoring non-finite move sample ({dx}, {dy})");
        return;
    }
    for (_entity, (_player, pos, life)) in world.query_mut::<(&Player, &mut Position, &LifeState)>()
    {
        if *life == LifeState::Alive {
            let moved = Position::new(
                pos.x + dx * config.move_multiplier,
                pos.y + dy * config.move_multiplier,
            );
            *pos = config.play_field.clamp(moved);
        }
    }
}

/// Set the live player's facing. Returns the player position and new facing,
/// or `None` if there is no live player or the angle is unusable.
pub fn apply_aim(world: &mut World, angle: f64) -> Option<(Position, f64)> {
    if !angle.is_finite() {
        log::warn!("ignoring non-finite aim sample {angle}");
        return None;
    }
    let mut aimed = None;
    for (_entity, (_player, pos, facing, life)) in
        world.query_mut::<(&Player, &Position, &mut Facing, &LifeState)>()
    {
        if *life == LifeState::Alive {
            facing.angle = angle;
            aimed = Some((*pos, angle));
        }
    }
    aimed
}

/// Keep the player inside the play field.
pub fn clamp_player(world: &mut World, field: &PlayField) {
    for (_entity, (_player, pos)) in world.query_mut::<(&Player, &mut Position)>() {
        *pos = field.clamp(*pos);
    }
}
