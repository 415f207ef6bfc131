//! Finite rays and their intersection with circular bodies.

use glam::DVec2;

use tinymap_core::types::Position;

/// A segment from `origin` along unit direction `dir` for `length` units.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: DVec2,
    pub dir: DVec2,
    pub length: f64,
}

impl Ray {
    /// Ray from `origin` at `angle` radians (0 = +x, counter-clockwise).
    pub fn from_polar(origin: Position, angle: f64, length: f64) -> Self {
        Self {
            origin: origin.to_vec(),
            dir: DVec2::from_angle(angle),
            length,
        }
    }

    /// Whether the segment touches a circle. A circle containing the origin
    /// counts as hit.
    pub fn hits_circle(&self, center: Position, radius: f64) -> bool {
        let to_center = center.to_vec() - self.origin;
        let t = to_center.dot(self.dir).clamp(0.0, self.length);
        let closest = self.origin + self.dir * t;
        closest.distance_squared(center.to_vec()) <= radius * radius
    }
}
