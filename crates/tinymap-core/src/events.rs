//! Events emitted by the simulation for presentation feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, ExpiryReason};
use crate::types::{EntityId, Position};

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A fresh match began.
    MatchStarted,
    /// An enemy entered the world (hidden until illuminated).
    EnemySpawned { id: EntityId, position: Position },
    /// An enemy was destroyed by contact with `by`.
    EnemyDestroyed { id: EntityId, by: EntityKind },
    /// A projectile was emitted.
    ProjectileFired { id: EntityId, angle: f64 },
    /// A projectile left the world.
    ProjectileExpired { id: EntityId, reason: ExpiryReason },
    /// The player was destroyed.
    PlayerHit { id: EntityId },
    /// The game-over delay started.
    GameOver { score: u32, delay_secs: f64 },
    /// Control went back to the menu.
    ReturnedToMenu,
    Paused,
    Resumed,
}
