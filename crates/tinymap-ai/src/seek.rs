//! Seek steering: face the target and advance at constant speed.
//!
//! No avoidance, no acceleration. The bearing is recomputed from the
//! current positions on every call.

use glam::DVec2;

use tinymap_core::types::Position;

/// Input to a single seek step.
pub struct SeekContext {
    /// Pursuer position before the step.
    pub position: Position,
    /// Pursuer facing before the step (radians).
    pub facing: f64,
    /// Target position, sampled once per frame.
    pub target: Position,
    /// Distance covered per step.
    pub speed: f64,
}

/// Result of a seek step.
pub struct SeekUpdate {
    pub position: Position,
    pub facing: f64,
}

/// Advance one step toward the target.
///
/// The step always covers exactly `speed` units, even when the target is
/// closer than that. A pursuer coinciding with its target keeps its previous
/// facing and does not move.
pub fn seek(ctx: &SeekContext) -> SeekUpdate {
    let to_target = ctx.target.to_vec() - ctx.position.to_vec();
    if to_target == DVec2::ZERO {
        return SeekUpdate {
            position: ctx.position,
            facing: ctx.facing,
        };
    }

    let bearing = to_target.y.atan2(to_target.x);
    let step = DVec2::from_angle(bearing) * ctx.speed;

    SeekUpdate {
        position: Position::from_vec(ctx.position.to_vec() + step),
        facing: bearing,
    }
}
