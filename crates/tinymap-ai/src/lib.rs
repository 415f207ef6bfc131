//! Enemy steering for TinyMap.
//!
//! Pure pursuit functions over plain data; the simulation crate applies
//! them to ECS components.

pub mod seek;

pub use tinymap_core as core;
