//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Kind of a simulated entity. Contact dispatch matches on this directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
    Projectile,
}

/// Life cycle of an entity. `Alive -> Destroyed` is one-way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeState {
    #[default]
    Alive,
    Destroyed,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a start gesture.
    #[default]
    MainMenu,
    /// Match running: every system steps each tick.
    Active,
    /// Match suspended: nothing advances.
    Paused,
    /// Player was hit; waiting out the delay before leaving the match.
    GameOver,
}

/// Where new enemies are placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnPolicy {
    /// Uniform integer point inside the play field.
    RandomInBox,
    /// Uniform bearing on a circle just outside the play field.
    #[default]
    Ring,
}

/// How the combat resolver reads the two bodies of a contact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactOrdering {
    /// Either body may be the enemy.
    #[default]
    Symmetric,
    /// Only body A is examined for an enemy. The built-in detector always
    /// reports the enemy as body A, so this only narrows host-reported contacts.
    PrimaryOnly,
}

/// Where control goes once the game-over delay elapses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverDestination {
    #[default]
    MainMenu,
    Restart,
}

/// Why a projectile left the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpiryReason {
    Timeout,
    OutOfBounds,
    Contact,
}
