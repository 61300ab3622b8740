//! Pointer-driven secondary rotation (the drone's camera head).

use crate::pose::{approach, smoothing_alpha};
use glam::Vec2;

/// Latest pointer position in `[-1, 1]²`, +y up. Frozen while tracking is off.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub tracking: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            tracking: true,
        }
    }

    /// Stores a new pointer position; ignored while tracking is disabled.
    pub fn update(&mut self, normalized: Vec2) {
        if self.tracking {
            self.position = normalized.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
        }
    }
}

/// Pitch (x) and yaw (y) of the gimbal sub-part, in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Gimbal {
    pub orientation: Vec2,
}

impl Gimbal {
    pub fn target(pointer: Vec2, gain: f32) -> Vec2 {
        Vec2::new(-pointer.y * gain, pointer.x * gain)
    }

    /// One smoothing step toward the pointer. Holds still while tracking is off.
    pub fn step(&mut self, pointer: &PointerState, gain: f32, coefficient: f32, dt_sec: f32) {
        if !pointer.tracking {
            return;
        }
        let target = Self::target(pointer.position, gain);
        let alpha = smoothing_alpha(coefficient, dt_sec);
        self.orientation = Vec2::new(
            approach(self.orientation.x, target.x, alpha),
            approach(self.orientation.y, target.y, alpha),
        );
    }
}
