//! Flashlight visibility for TinyMap.
//!
//! Cone sampling and ray/circle intersection. Pure geometry with no ECS
//! dependency; the simulation resets and re-marks enemy visibility from
//! these results every frame.

pub use tinymap_core as core;

pub mod cone;
pub mod ray;

// Re-export key types for convenience.
pub use cone::{angular_half_width, step_resolves, ConeSpec, SweepTarget};
pub use ray::Ray;
