//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;

/// Collision volume plus category/contact bitmasks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub kind: EntityKind,
    pub radius: f64,
    /// Categories this body belongs to.
    pub category: u32,
    /// Categories whose overlap with this body produces a contact.
    pub contact_mask: u32,
}

/// Facing angle in radians (0 = +x, counter-clockwise).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Facing {
    pub angle: f64,
}

/// Whether an enemy is inside the flashlight cone this frame.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Visibility {
    pub visible: bool,
}

/// Remaining projectile lifetime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifetime {
    pub remaining_ticks: u32,
}

/// Marks the player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an enemy entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks a projectile entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

// Position, Velocity, EntityId (types.rs) and LifeState (enums.rs)
// are also attached as components.
