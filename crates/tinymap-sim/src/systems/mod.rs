//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! Per-match counters live in `session` and are passed in explicitly.

pub mod cleanup;
pub mod combat;
pub mod contacts;
pub mod emitter;
pub mod input;
pub mod projectiles;
pub mod pursuit;
pub mod snapshot;
pub mod spawner;
pub mod visibility;
