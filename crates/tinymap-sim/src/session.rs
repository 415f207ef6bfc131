//! Per-match bookkeeping kept alongside the ECS world.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities. Reset on every match start.

/// Running score.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    /// Enemies destroyed by the player's action. Never decreases within a match.
    pub enemies_destroyed: u32,
    pub projectiles_fired: u32,
}

/// Frame-count gate between successful emissions.
///
/// A fresh counter lets the first attempt through. After a success the
/// counter climbs by one per attempt until it passes `threshold`; the next
/// attempt resets it to zero (still failing) and the one after succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cooldown {
    pub counter: u32,
}

impl Cooldown {
    /// Register one emission attempt. Returns true when emission may proceed.
    pub fn attempt(&mut self, threshold: u32) -> bool {
        if self.counter == 0 {
            self.counter = 1;
            true
        } else if self.counter <= threshold {
            self.counter = self.counter.saturating_add(1);
            false
        } else {
            self.counter = 0;
            false
        }
    }
}

/// Bullet emitter state.
#[derive(Debug, Clone, Default)]
pub struct EmitterState {
    /// Live projectiles. Incremented once per spawn, decremented once per
    /// projectile leaving the `Alive` state.
    pub live_projectiles: u32,
    pub cooldown: Cooldown,
}

/// Periodic spawn trigger.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    pub interval_ticks: u64,
    pub ticks_until_next: u64,
    /// Enemies spawned this match.
    pub spawned: u32,
}

impl SpawnTimer {
    pub fn new(interval_ticks: u64) -> Self {
        let interval_ticks = interval_ticks.max(1);
        Self {
            interval_ticks,
            ticks_until_next: interval_ticks,
            spawned: 0,
        }
    }

    /// Advance one tick. Returns true when a spawn is due.
    pub fn step(&mut self) -> bool {
        self.ticks_until_next = self.ticks_until_next.saturating_sub(1);
        if self.ticks_until_next == 0 {
            self.ticks_until_next = self.interval_ticks;
            true
        } else {
            false
        }
    }
}
