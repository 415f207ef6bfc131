//! Simulation engine for TinyMap.
//!
//! Owns the hecs ECS world, runs the per-frame systems (spawner, pursuit,
//! projectiles, contacts, combat, visibility, cleanup) and produces
//! `GameStateSnapshot`s for the host.

pub mod engine;
pub mod registry;
pub mod scheduler;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use tinymap_core as core;

#[cfg(test)]
mod tests;
