use bytemuck::{Pod, Zeroable};
use mascot_core::{Clip, ClipMix, MascotState, Region, Variant, ROTOR_COUNT};

/// Flat per-frame placement handed to the render layer as a `Float32Array`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct PoseFrame {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: f32,
    pub gimbal: [f32; 2], // pitch, yaw
    pub rotors: [f32; ROTOR_COUNT],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    pub frame: PoseFrame,
    pub variant: Variant,
    pub region: Region,
    pub clip: Option<ClipMix>,
}

impl Snapshot {
    pub fn capture(state: &MascotState) -> Self {
        let pose = state.displayed();
        let gimbal = state.gimbal().orientation;
        Self {
            frame: PoseFrame {
                position: pose.position.to_array(),
                rotation: pose.rotation.to_array(),
                scale: pose.scale,
                gimbal: [gimbal.x, gimbal.y],
                rotors: state.rotors().angles,
            },
            variant: state.variant(),
            region: state.region(),
            clip: state.clip_mix(),
        }
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(&self.frame))
    }

    pub fn clip_name(&self) -> &'static str {
        self.clip.map(|m| m.active.name()).unwrap_or("")
    }

    /// Heaviest clip still fading out, empty when settled.
    pub fn fading_clip_name(&self) -> &'static str {
        self.clip
            .and_then(|m| m.fading())
            .map(|(c, _)| c.name())
            .unwrap_or("")
    }

    /// One weight per clip in [`Clip::ALL`] order; all zero for the drone.
    pub fn clip_weights(&self) -> [f32; Clip::COUNT] {
        self.clip.map(|m| m.weights).unwrap_or([0.0; Clip::COUNT])
    }
}
