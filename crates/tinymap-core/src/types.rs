//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in play-field space (units, Cartesian, origin at field center).
/// x = right, y = up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in units per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Stable identifier handed out to every spawned entity.
///
/// Hosts refer to entities by this id (contact reports, snapshots);
/// ids are never reused within one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Axis-aligned play field centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayField {
    pub half_width: f64,
    pub half_height: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.to_vec().distance(other.to_vec())
    }

    /// Bearing to another position in radians (0 = +x, counter-clockwise).
    /// Returns `None` when both positions coincide.
    pub fn bearing_to(&self, other: &Position) -> Option<f64> {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        Some(dy.atan2(dx))
    }

    /// Position reached by moving `distance` units along `heading`.
    pub fn offset(&self, heading: f64, distance: f64) -> Position {
        Position::new(
            self.x + heading.cos() * distance,
            self.y + heading.sin() * distance,
        )
    }

    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn from_vec(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity of magnitude `speed` along `heading` (radians).
    pub fn from_heading(heading: f64, speed: f64) -> Self {
        Self {
            x: heading.cos() * speed,
            y: heading.sin() * speed,
        }
    }
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

impl PlayField {
    pub fn new(half_width: f64, half_height: f64) -> Self {
        Self {
            half_width,
            half_height,
        }
    }

    pub fn left(&self) -> f64 {
        -self.half_width
    }

    pub fn right(&self) -> f64 {
        self.half_width
    }

    pub fn bottom(&self) -> f64 {
        -self.half_height
    }

    pub fn top(&self) -> f64 {
        self.half_height
    }

    /// Half the diagonal extent of the field.
    pub fn half_diagonal(&self) -> f64 {
        self.half_width.hypot(self.half_height)
    }

    /// Whether `pos` lies inside the field grown by `margin` on every side.
    pub fn contains(&self, pos: &Position, margin: f64) -> bool {
        pos.x >= self.left() - margin
            && pos.x <= self.right() + margin
            && pos.y >= self.bottom() - margin
            && pos.y <= self.top() + margin
    }

    /// Clamp `pos` into the field.
    pub fn clamp(&self, pos: Position) -> Position {
        Position::new(
            pos.x.clamp(self.left(), self.right()),
            pos.y.clamp(self.bottom(), self.top()),
        )
    }
}

impl Default for PlayField {
    fn default() -> Self {
        Self::new(
            crate::constants::PLAY_FIELD_HALF_WIDTH,
            crate::constants::PLAY_FIELD_HALF_HEIGHT,
        )
    }
}
