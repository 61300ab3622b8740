//! Section-driven procedural motion for the drone.

use crate::constants::{
    IDLE_BOB_AMPLITUDE, IDLE_BOB_RATE, REFERENCE_HZ, ROTOR_COUNT, ROTOR_HIGHLIGHTS_BOOST,
    ROTOR_SPIN_PER_TICK,
};
use crate::pose::PoseOffset;
use crate::section::{Region, SectionId};
use glam::Vec3;

/// Motion signature layered over the base pose while a region is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Vertical hover bob.
    Idle,
    /// Figure-eight sweep while looking side to side.
    Scan,
    /// Quick vertical twitch with a tilt and a slow yaw sweep.
    Analyze,
    /// Circle in the horizontal plane, banking into the turn.
    Orbit,
    /// Pushes toward and away from the viewer.
    Inspect,
    /// Rectified hop with a fast nod.
    Bounce,
}

impl Motion {
    pub fn for_section(id: SectionId) -> Motion {
        match id {
            SectionId::Hero => Motion::Idle,
            SectionId::About => Motion::Scan,
            SectionId::Skills => Motion::Analyze,
            SectionId::Highlights => Motion::Orbit,
            SectionId::Projects => Motion::Inspect,
            SectionId::Publications => Motion::Bounce,
        }
    }

    /// The footer idles like the hero.
    pub fn for_region(region: Region) -> Motion {
        region.section().map_or(Motion::Idle, Motion::for_section)
    }

    /// Offset at `t` seconds of elapsed animation time.
    pub fn offset(&self, t: f32) -> PoseOffset {
        match self {
            Motion::Idle => PoseOffset {
                position: Vec3::new(0.0, (t * IDLE_BOB_RATE).sin() * IDLE_BOB_AMPLITUDE, 0.0),
                rotation: Vec3::ZERO,
            },
            Motion::Scan => PoseOffset {
                position: Vec3::new((t * 1.5).sin() * 0.3, (t * 3.0).cos() * 0.1, 0.0),
                rotation: Vec3::new(0.0, (t * 1.5).sin() * 0.2, 0.0),
            },
            Motion::Analyze => PoseOffset {
                position: Vec3::new(0.0, (t * 4.0).sin() * 0.05, 0.0),
                rotation: Vec3::new(0.0, (t * 0.5).sin() * 0.3, (t * 2.0).sin() * 0.1),
            },
            Motion::Orbit => PoseOffset {
                position: Vec3::new(t.cos() * 0.2, 0.0, t.sin() * 0.2),
                rotation: Vec3::new(0.0, 0.0, t.cos() * 0.1),
            },
            Motion::Inspect => PoseOffset {
                position: Vec3::new(0.0, (t * 1.6).cos() * 0.05, (t * 0.8).sin() * 0.4),
                rotation: Vec3::ZERO,
            },
            Motion::Bounce => PoseOffset {
                position: Vec3::new(0.0, (t * 3.0).sin().abs() * 0.2, 0.0),
                rotation: Vec3::new((t * 6.0).sin() * 0.05, 0.0, 0.0),
            },
        }
    }
}

/// Elapsed-time clock driving [`Motion::offset`].
#[derive(Clone, Debug, Default)]
pub struct Animator {
    elapsed: f32,
}

impl Animator {
    pub fn advance(&mut self, dt_sec: f32) {
        if dt_sec > 0.0 && dt_sec.is_finite() {
            self.elapsed += dt_sec;
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn offset(&self, region: Region) -> PoseOffset {
        Motion::for_region(region).offset(self.elapsed)
    }
}

/// Rotor blade angles. Neighbouring rotors counter-rotate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rotors {
    pub angles: [f32; ROTOR_COUNT],
}

impl Rotors {
    pub fn spin_rate(region: Region) -> f32 {
        match region {
            Region::Section(SectionId::Highlights) => ROTOR_SPIN_PER_TICK * ROTOR_HIGHLIGHTS_BOOST,
            _ => ROTOR_SPIN_PER_TICK,
        }
    }

    pub fn step(&mut self, region: Region, dt_sec: f32) {
        if dt_sec <= 0.0 || !dt_sec.is_finite() {
            return;
        }
        let delta = Self::spin_rate(region) * dt_sec * REFERENCE_HZ;
        for (i, angle) in self.angles.iter_mut().enumerate() {
            let dir = if i % 2 == 0 { 1.0 } else { -1.0 };
            *angle = (*angle + delta * dir).rem_euclid(std::f32::consts::TAU);
        }
    }
}
