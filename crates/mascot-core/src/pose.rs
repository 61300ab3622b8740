//! Rigid avatar placement and the per-channel smoothing step.

use crate::constants::REFERENCE_HZ;
use glam::Vec3;

/// Position, Euler rotation (radians, XYZ) and uniform scale of the avatar root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl Pose {
    /// Centered, unrotated, unit scale. Used while the footer is in view.
    pub const NEUTRAL: Pose = Pose::new(Vec3::ZERO, Vec3::ZERO, 1.0);

    pub const fn new(position: Vec3, rotation: Vec3, scale: f32) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// The seven scalar channels in a fixed order: position xyz, rotation xyz, scale.
    pub fn channels(&self) -> [f32; 7] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
            self.scale,
        ]
    }

    pub fn from_channels(c: [f32; 7]) -> Self {
        Self::new(
            Vec3::new(c[0], c[1], c[2]),
            Vec3::new(c[3], c[4], c[5]),
            c[6],
        )
    }

    /// Adds a procedural offset on top of this pose. Scale is untouched.
    pub fn with_offset(&self, offset: &PoseOffset) -> Self {
        Self::new(
            self.position + offset.position,
            self.rotation + offset.rotation,
            self.scale,
        )
    }

    /// Moves every channel toward `target` by the dt-scaled smoothing fraction.
    pub fn approach(&mut self, target: &Pose, coefficient: f32, dt_sec: f32) {
        let alpha = smoothing_alpha(coefficient, dt_sec);
        let cur = self.channels();
        let tgt = target.channels();
        let mut next = cur;
        for i in 0..next.len() {
            next[i] = approach(cur[i], tgt[i], alpha);
        }
        *self = Self::from_channels(next);
    }
}

/// Additive, time-varying displacement layered over a base pose.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PoseOffset {
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Fraction of the remaining distance to cover in `dt_sec`, given a per-tick
/// coefficient at [`REFERENCE_HZ`]. Exactly `coefficient` for a 60 Hz tick.
#[inline]
pub fn smoothing_alpha(coefficient: f32, dt_sec: f32) -> f32 {
    if dt_sec <= 0.0 || !dt_sec.is_finite() {
        return 0.0;
    }
    let keep = (1.0 - coefficient.clamp(0.0, 1.0)).powf(dt_sec * REFERENCE_HZ);
    (1.0 - keep).clamp(0.0, 1.0)
}

/// One exponential smoothing step. Never increases the distance to `target`.
#[inline]
pub fn approach(current: f32, target: f32, alpha: f32) -> f32 {
    let next = current + (target - current) * alpha;
    if (target - next).abs() <= (target - current).abs() {
        next
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_matches_coefficient_at_reference_rate() {
        let a = smoothing_alpha(0.05, 1.0 / REFERENCE_HZ);
        assert!((a - 0.05).abs() < 1e-5);
    }

    #[test]
    fn alpha_is_zero_without_elapsed_time() {
        assert_eq!(smoothing_alpha(0.05, 0.0), 0.0);
        assert_eq!(smoothing_alpha(0.05, f32::NAN), 0.0);
    }

    #[test]
    fn approach_handles_huge_jumps() {
        let v = approach(0.0, 1.0e30, 0.05);
        assert!(v.is_finite());
        assert!(v > 0.0);
    }
}
