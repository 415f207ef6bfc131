//! TinyMap host application.
//!
//! Wires the simulation crates into a fixed-rate game loop thread and exposes
//! a small command/snapshot API to whatever drives it (the headless binary,
//! a renderer, or tests).

pub mod autopilot;
pub mod game_loop;
pub mod host;
pub mod state;

pub use tinymap_core as core;
