//! Per-frame mascot state shared with the web frontend.
//!
//! Everything the render loop needs lives in [`MascotState`]: the displayed
//! and target poses, pointer input, the procedural clock and the clip
//! selector. Scroll callbacks only write the target through
//! [`MascotState::retarget`]; the frame loop only advances the displayed pose
//! through [`MascotState::tick`]. Neither touches platform APIs, so the whole
//! update path runs in host-side tests.

use crate::clip::{ClipMix, ClipSelector, Transition};
use crate::constants::*;
use crate::gimbal::{Gimbal, PointerState};
use crate::pose::Pose;
use crate::procedural::{Animator, Rotors};
use crate::registry::Variant;
use crate::section::{Region, SectionId};
use crate::tracker::PoseChange;
use glam::Vec2;

/// Smoothing coefficients and gains. Defaults come from [`crate::constants`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    pub body_smoothing: f32,
    pub gimbal_smoothing: f32,
    pub pointer_tilt_gain: f32,
    pub gimbal_gain: f32,
    pub crossfade_sec: f32,
    pub entrance_delay_sec: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            body_smoothing: BODY_SMOOTHING,
            gimbal_smoothing: GIMBAL_SMOOTHING,
            pointer_tilt_gain: POINTER_TILT_GAIN,
            gimbal_gain: GIMBAL_GAIN,
            crossfade_sec: CLIP_CROSSFADE_SEC,
            entrance_delay_sec: ENTRANCE_DELAY_SEC,
        }
    }
}

/// Externally owned motion policy flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Policy {
    pub reduced_motion: bool,
    pub mobile: bool,
}

impl Policy {
    pub fn pointer_tracking(&self) -> bool {
        !self.reduced_motion && !self.mobile
    }
}

pub struct MascotState {
    pub tuning: Tuning,
    variant: Variant,
    policy: Policy,
    displayed: Pose,
    target: Pose,
    region: Region,
    pointer: PointerState,
    gimbal: Gimbal,
    animator: Animator,
    rotors: Rotors,
    clips: ClipSelector,
    entrance_remaining: Option<f32>,
}

impl MascotState {
    pub fn new(variant: Variant, tuning: Tuning) -> Self {
        let entrance = variant.entrance_pose();
        Self {
            tuning,
            variant,
            policy: Policy::default(),
            displayed: entrance,
            target: entrance,
            region: Region::Section(SectionId::Hero),
            pointer: PointerState::new(),
            gimbal: Gimbal::default(),
            animator: Animator::default(),
            rotors: Rotors::default(),
            clips: ClipSelector::new(tuning.crossfade_sec),
            entrance_remaining: Some(tuning.entrance_delay_sec),
        }
    }

    /// Full reset into `variant`: entrance pose, fresh clock, fresh clip state.
    /// Pointer position and policy carry over.
    pub fn set_variant(&mut self, variant: Variant) {
        if variant == self.variant {
            return;
        }
        log::info!("[mascot] switching {} -> {}", self.variant, variant);
        let pointer = self.pointer;
        let policy = self.policy;
        *self = Self::new(variant, self.tuning);
        self.pointer = pointer;
        self.policy = policy;
    }

    pub fn set_policy(&mut self, policy: Policy) {
        self.policy = policy;
        self.pointer.tracking = policy.pointer_tracking();
    }

    pub fn set_pointer(&mut self, normalized: Vec2) {
        self.pointer.update(normalized);
    }

    /// Applies a tracker announcement to the target. Returns whether it was
    /// accepted; reduced motion and mobile layouts ignore scroll retargets.
    pub fn retarget(&mut self, change: &PoseChange) -> bool {
        if self.policy.reduced_motion || self.policy.mobile {
            return false;
        }
        log::debug!("[mascot] {} -> {}", self.region, change.region);
        self.target = change.pose;
        self.region = change.region;
        self.entrance_remaining = None;
        true
    }

    /// Moves the skeletal clip to the region the last batch of announcements
    /// ended in. Called once per tracker observation, so a jump across several
    /// sections starts a single cross-fade.
    pub fn select_clip(&mut self) -> Option<Transition> {
        if self.variant != Variant::Robot || self.policy.reduced_motion {
            return None;
        }
        self.clips.on_region(self.region)
    }

    /// Advances one frame. Nothing moves while motion is reduced.
    pub fn tick(&mut self, dt_sec: f32) {
        if self.policy.reduced_motion {
            return;
        }
        if let Some(remaining) = self.entrance_remaining.as_mut() {
            *remaining -= dt_sec.max(0.0);
            if *remaining <= 0.0 {
                self.entrance_remaining = None;
                self.target = self.variant.home_pose();
                self.region = Region::Section(SectionId::Hero);
            }
        }

        self.animator.advance(dt_sec);
        let goal = self.body_target();
        self.displayed
            .approach(&goal, self.tuning.body_smoothing, dt_sec);

        match self.variant {
            Variant::Drone => {
                self.gimbal.step(
                    &self.pointer,
                    self.tuning.gimbal_gain,
                    self.tuning.gimbal_smoothing,
                    dt_sec,
                );
                self.rotors.step(self.region, dt_sec);
            }
            Variant::Robot => self.clips.step(dt_sec),
        }
    }

    /// What the body is currently being pulled toward: the base target plus
    /// procedural offset and pointer tilt (drone), in render space.
    pub fn body_target(&self) -> Pose {
        let pose = match self.variant {
            Variant::Drone => {
                let mut p = self.target.with_offset(&self.animator.offset(self.region));
                p.rotation.x += -self.pointer.position.y * self.tuning.pointer_tilt_gain;
                p.rotation.z += self.pointer.position.x * self.tuning.pointer_tilt_gain;
                p
            }
            Variant::Robot => self.target,
        };
        self.variant.profile().apply(&pose)
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn displayed(&self) -> Pose {
        self.displayed
    }

    pub fn target(&self) -> Pose {
        self.target
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn gimbal(&self) -> Gimbal {
        self.gimbal
    }

    pub fn rotors(&self) -> &Rotors {
        &self.rotors
    }

    pub fn elapsed(&self) -> f32 {
        self.animator.elapsed()
    }

    /// Clip blend for the skeletal variant; `None` for the drone.
    pub fn clip_mix(&self) -> Option<ClipMix> {
        (self.variant == Variant::Robot).then(|| self.clips.mix())
    }

    pub fn clip_transitions(&self) -> u32 {
        self.clips.transitions()
    }
}
