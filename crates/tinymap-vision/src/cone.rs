//! Flashlight cone sweep.
//!
//! The cone is sampled as a fan of rays from the player position, one every
//! `step` radians from `facing - half_angle` to `facing + half_angle`.
//! A target is lit iff at least one ray of the fan touches it. Every sweep
//! is computed from scratch; nothing carries over between frames.

use tinymap_core::types::Position;

use crate::ray::Ray;

/// Pose and shape of the flashlight for one frame.
#[derive(Debug, Clone, Copy)]
pub struct ConeSpec {
    pub origin: Position,
    /// Center bearing of the cone (radians).
    pub facing: f64,
    /// Half-angle of the cone (radians).
    pub half_angle: f64,
    /// Maximum ray length.
    pub range: f64,
    /// Requested angular step between rays (radians).
    pub step: f64,
}

/// A circular body the sweep may light.
#[derive(Debug, Clone, Copy)]
pub struct SweepTarget {
    pub position: Position,
    pub radius: f64,
}

impl ConeSpec {
    /// Number of gaps between rays. The fan spans the full cone with a
    /// uniform spacing no wider than `step`.
    fn segments(&self) -> usize {
        if self.half_angle <= 0.0 || self.step <= 0.0 {
            return 0;
        }
        // Tolerance keeps an exact multiple from rounding up to an extra ray.
        (2.0 * self.half_angle / self.step - 1e-9).ceil().max(1.0) as usize
    }

    /// Absolute bearing of every ray in the fan, edge to edge.
    pub fn ray_angles(&self) -> impl Iterator<Item = f64> + '_ {
        let segments = self.segments();
        let spacing = if segments == 0 {
            0.0
        } else {
            2.0 * self.half_angle / segments as f64
        };
        let start = self.facing - if segments == 0 { 0.0 } else { self.half_angle };
        (0..=segments).map(move |i| start + spacing * i as f64)
    }

    pub fn rays(&self) -> impl Iterator<Item = Ray> + '_ {
        self.ray_angles()
            .map(|angle| Ray::from_polar(self.origin, angle, self.range))
    }

    pub fn ray_count(&self) -> usize {
        self.segments() + 1
    }

    /// Sweep the fan over `targets` and return one lit flag per target.
    pub fn sweep(&self, targets: &[SweepTarget]) -> Vec<bool> {
        let mut lit = vec![false; targets.len()];
        let mut remaining = targets.len();

        for ray in self.rays() {
            if remaining == 0 {
                break;
            }
            for (i, target) in targets.iter().enumerate() {
                if !lit[i] && ray.hits_circle(target.position, target.radius) {
                    lit[i] = true;
                    remaining -= 1;
                }
            }
        }

        lit
    }
}

/// Angular half-width subtended by a circle of `radius` seen from `range`.
pub fn angular_half_width(radius: f64, range: f64) -> f64 {
    if range <= radius {
        return std::f64::consts::PI;
    }
    (radius / range).asin()
}

/// Whether rays spaced `step` apart cannot slip past a body of `radius`
/// anywhere out to `range`.
pub fn step_resolves(step: f64, radius: f64, range: f64) -> bool {
    angular_half_width(radius, range) > step
}
