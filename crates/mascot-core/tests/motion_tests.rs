// Host-side tests for the per-frame update path: smoothing convergence,
// entrance, pointer tracking and the gimbal.

use glam::{Vec2, Vec3};
use mascot_core::*;

const DT: f32 = 1.0 / 60.0;

fn change(region: Region, variant: Variant) -> PoseChange {
    PoseChange {
        region,
        pose: resolve(region, variant),
    }
}

#[test]
fn approach_converges_monotonically_on_every_channel() {
    let targets = [
        Pose::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, -0.3, 0.0), 1.2),
        Pose::new(Vec3::new(-1.0e6, 3.0e5, 0.5), Vec3::new(1.57, 0.0, -0.1), 40.0),
        Pose::new(Vec3::new(1.0e-6, -2.0e-6, 0.0), Vec3::new(0.0, 1.0e-5, 0.0), 1.0),
        Pose::NEUTRAL,
    ];
    let mut displayed = Variant::Drone.entrance_pose();
    for target in &targets {
        for _ in 0..50 {
            let before = displayed.channels();
            displayed.approach(target, BODY_SMOOTHING, DT);
            let after = displayed.channels();
            let goal = target.channels();
            for ch in 0..7 {
                let d0 = (goal[ch] - before[ch]).abs();
                let d1 = (goal[ch] - after[ch]).abs();
                assert!(d1 <= d0, "channel {ch} moved away: {d0} -> {d1}");
                if d0 > 1e-3 * (1.0 + goal[ch].abs()) {
                    assert!(d1 < d0, "channel {ch} stalled at {d0}");
                }
            }
        }
    }
}

#[test]
fn one_reference_tick_covers_the_nominal_fraction() {
    let mut p = Pose::new(Vec3::ZERO, Vec3::ZERO, 1.0);
    let target = Pose::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, 1.0);
    p.approach(&target, 0.05, DT);
    assert!((p.position.x - 0.5).abs() < 1e-4);
}

#[test]
fn displayed_pose_converges_toward_retargeted_section() {
    let mut state = MascotState::new(Variant::Robot, Tuning::default());
    state.retarget(&change(Region::Section(SectionId::About), Variant::Robot));

    let goal = state.body_target().channels();
    let mut prev = state.displayed().channels();
    for _ in 0..120 {
        state.tick(DT);
        let now = state.displayed().channels();
        for ch in 0..7 {
            let d0 = (goal[ch] - prev[ch]).abs();
            let d1 = (goal[ch] - now[ch]).abs();
            if d0 > 0.0 {
                assert!(d1 < d0, "channel {ch} not strictly converging");
            } else {
                assert_eq!(d1, 0.0);
            }
        }
        prev = now;
    }
}

#[test]
fn robot_target_is_lowered_and_scaled_down() {
    let mut state = MascotState::new(Variant::Robot, Tuning::default());
    state.retarget(&change(Region::Section(SectionId::Hero), Variant::Robot));
    let t = state.body_target();
    assert_eq!(t.position, Vec3::new(2.0, -2.0, 0.0));
    assert!((t.scale - 1.3 * ROBOT_SCALE_FACTOR).abs() < 1e-6);
}

#[test]
fn entrance_flies_home_after_delay() {
    let mut state = MascotState::new(Variant::Drone, Tuning::default());
    assert_eq!(state.displayed(), Variant::Drone.entrance_pose());
    assert_eq!(state.target(), Variant::Drone.entrance_pose());

    for _ in 0..3 {
        state.tick(DT);
    }
    assert_eq!(state.target(), Variant::Drone.entrance_pose());
    for _ in 0..6 {
        state.tick(DT);
    }
    assert_eq!(state.target(), Variant::Drone.home_pose());
    assert!(state.displayed().position.y < DRONE_ENTRANCE_POSITION[1]);
}

#[test]
fn scroll_retarget_cancels_pending_entrance() {
    let mut state = MascotState::new(Variant::Drone, Tuning::default());
    let about = change(Region::Section(SectionId::About), Variant::Drone);
    assert!(state.retarget(&about));
    for _ in 0..30 {
        state.tick(DT);
    }
    assert_eq!(state.target(), about.pose);
    assert_eq!(state.region(), Region::Section(SectionId::About));
}

#[test]
fn drone_target_includes_procedural_offset_and_tilt() {
    let mut state = MascotState::new(Variant::Drone, Tuning::default());
    state.retarget(&change(Region::Section(SectionId::Publications), Variant::Drone));
    state.set_pointer(Vec2::new(0.5, -1.0));
    state.tick(0.25);

    let base = DRONE_SECTIONS[5].pose;
    let t = state.body_target();
    let bob = (0.25_f32 * 3.0).sin().abs() * 0.2;
    assert!((t.position.y - (base.position.y + bob)).abs() < 1e-5);
    let nod = (0.25_f32 * 6.0).sin() * 0.05;
    assert!((t.rotation.x - (nod + 1.0 * POINTER_TILT_GAIN)).abs() < 1e-5);
    assert!((t.rotation.z - 0.5 * POINTER_TILT_GAIN).abs() < 1e-5);
    assert_eq!(t.scale, base.scale);
}

#[test]
fn gimbal_tracks_faster_than_body() {
    let mut state = MascotState::new(Variant::Drone, Tuning::default());
    state.set_pointer(Vec2::new(1.0, 0.0));
    state.tick(DT);
    let yaw = state.gimbal().orientation.y;
    assert!((yaw - GIMBAL_GAIN * GIMBAL_SMOOTHING).abs() < 1e-4);

    for _ in 0..30 {
        state.tick(DT);
    }
    let remaining = GIMBAL_GAIN - state.gimbal().orientation.y;
    assert!(remaining < GIMBAL_GAIN * 0.01);
}

#[test]
fn gimbal_holds_while_tracking_disabled() {
    let mut state = MascotState::new(Variant::Drone, Tuning::default());
    state.set_pointer(Vec2::new(-0.6, 0.4));
    for _ in 0..10 {
        state.tick(DT);
    }
    let resting = state.gimbal();

    state.set_policy(Policy {
        reduced_motion: false,
        mobile: true,
    });
    state.set_pointer(Vec2::new(1.0, 1.0));
    assert_eq!(state.pointer().position, Vec2::new(-0.6, 0.4));
    for _ in 0..10 {
        state.tick(DT);
    }
    assert_eq!(state.gimbal(), resting);
}

#[test]
fn pointer_input_is_clamped() {
    let mut p = PointerState::new();
    p.update(Vec2::new(3.0, -7.0));
    assert_eq!(p.position, Vec2::new(1.0, -1.0));
}

#[test]
fn mobile_ignores_scroll_retargets() {
    let mut state = MascotState::new(Variant::Drone, Tuning::default());
    state.set_policy(Policy {
        reduced_motion: false,
        mobile: true,
    });
    assert!(!state.retarget(&change(Region::Section(SectionId::Skills), Variant::Drone)));
    assert_eq!(state.target(), Variant::Drone.entrance_pose());
}

#[test]
fn rotors_only_spin_for_the_drone() {
    let mut drone = MascotState::new(Variant::Drone, Tuning::default());
    let mut robot = MascotState::new(Variant::Robot, Tuning::default());
    drone.tick(DT);
    robot.tick(DT);
    assert!(drone.rotors().angles[0] > 0.0);
    assert_eq!(robot.rotors().angles, [0.0; ROTOR_COUNT]);
    assert!(drone.clip_mix().is_none());
    assert_eq!(robot.clip_mix().map(|m| m.active), Some(Clip::Idle));
}

#[test]
fn resolver_falls_back_to_home_for_unknown_ids() {
    assert_eq!(resolve_id("contact", Variant::Drone), Variant::Drone.home_pose());
    assert_eq!(resolve_id("skills", Variant::Robot), ROBOT_SECTIONS[2].pose);
    assert_eq!(resolve_id("footer", Variant::Robot), Pose::NEUTRAL);
    assert_eq!(resolve(Region::Footer, Variant::Drone), Pose::NEUTRAL);
}
