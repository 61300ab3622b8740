// Host-side tests for the render-layer snapshot.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod snapshot {
    include!("../src/snapshot.rs");
}

use mascot_core::*;
use snapshot::*;

#[test]
fn frame_layout_is_flat_f32() {
    assert_eq!(std::mem::size_of::<PoseFrame>(), 13 * 4);
}

#[test]
fn drone_snapshot_carries_pose_gimbal_and_rotors() {
    let mut state = MascotState::new(Variant::Drone, Tuning::default());
    state.set_pointer(glam::Vec2::new(1.0, 0.0));
    state.tick(1.0 / 60.0);

    let snap = Snapshot::capture(&state);
    let floats = snap.as_floats();
    assert_eq!(floats.len(), 13);

    let pose = state.displayed();
    assert_eq!(&floats[0..3], &pose.position.to_array()[..]);
    assert_eq!(&floats[3..6], &pose.rotation.to_array()[..]);
    assert_eq!(floats[6], pose.scale);
    assert_eq!(floats[8], state.gimbal().orientation.y);
    assert_eq!(&floats[9..13], &state.rotors().angles[..]);

    assert_eq!(snap.variant, Variant::Drone);
    assert_eq!(snap.clip_name(), "");
    assert_eq!(snap.clip_weights(), [0.0; Clip::COUNT]);
}

#[test]
fn robot_snapshot_reports_crossfade() {
    let mut state = MascotState::new(Variant::Robot, Tuning::default());
    state.retarget(&PoseChange {
        region: Region::Section(SectionId::Highlights),
        pose: resolve(Region::Section(SectionId::Highlights), Variant::Robot),
    });
    state.select_clip();
    state.tick(0.25);

    let snap = Snapshot::capture(&state);
    assert_eq!(snap.region.as_str(), "highlights");
    assert_eq!(snap.clip_name(), "Dance");
    assert_eq!(snap.fading_clip_name(), "Idle");
    let weights = snap.clip_weights();
    assert!((weights[Clip::Dance.index()] - 0.5).abs() < 1e-5);
    assert!((weights[Clip::Idle.index()] - 0.5).abs() < 1e-5);
    assert!((weights.iter().sum::<f32>() - 1.0).abs() < 1e-6);
}
