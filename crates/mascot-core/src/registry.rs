//! Static per-variant pose tables and the pure section-to-pose lookup.
//!
//! Each avatar variant has its own table because the two models are framed
//! differently: the drone floats around the page at varied heights and
//! angles, while the robot stays on a fixed floor line and only turns.

use crate::constants::*;
use crate::pose::Pose;
use crate::section::{MascotError, Region, SectionId};
use glam::Vec3;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub pose: Pose,
}

const fn descriptor(id: SectionId, p: [f32; 3], r: [f32; 3], scale: f32) -> SectionDescriptor {
    SectionDescriptor {
        id,
        pose: Pose::new(Vec3::new(p[0], p[1], p[2]), Vec3::new(r[0], r[1], r[2]), scale),
    }
}

pub static DRONE_SECTIONS: [SectionDescriptor; 6] = [
    descriptor(SectionId::Hero, [2.0, 0.0, 0.0], [0.0, -0.3, 0.0], 1.2), // side view
    descriptor(SectionId::About, [-2.0, -0.5, 1.0], [0.1, 0.3, 0.0], 1.0),
    descriptor(SectionId::Skills, [0.0, 0.0, 0.0], [1.57, 0.0, 0.0], 1.3), // top facing camera
    descriptor(SectionId::Highlights, [-1.5, 0.0, 0.0], [0.0, 0.3, -0.1], 1.0),
    descriptor(SectionId::Projects, [1.5, 0.5, 1.0], [-0.1, -0.4, 0.0], 1.1), // high angle
    descriptor(SectionId::Publications, [0.0, -0.2, 2.0], [0.0, 0.0, 0.0], 1.2), // front view
];

pub static ROBOT_SECTIONS: [SectionDescriptor; 6] = [
    descriptor(SectionId::Hero, [2.0, -1.0, 0.0], [0.0, -0.5, 0.0], 1.3),
    descriptor(SectionId::About, [-2.0, -1.0, 1.0], [0.0, 0.5, 0.0], 1.3),
    descriptor(SectionId::Skills, [1.5, -1.0, 0.0], [0.0, -0.2, 0.0], 1.3),
    descriptor(SectionId::Highlights, [-1.5, -1.0, 0.0], [0.0, 0.5, 0.0], 1.3),
    descriptor(SectionId::Projects, [1.5, -1.0, 1.0], [0.0, -0.5, 0.0], 1.3),
    descriptor(SectionId::Publications, [0.0, -1.0, 2.0], [0.0, 0.0, 0.0], 1.3),
];

/// Render-space adjustment applied to every target of a variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantProfile {
    pub position_offset: Vec3,
    pub scale_factor: f32,
}

impl VariantProfile {
    pub fn apply(&self, pose: &Pose) -> Pose {
        Pose::new(
            pose.position + self.position_offset,
            pose.rotation,
            pose.scale * self.scale_factor,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Drone,
    Robot,
}

impl Variant {
    pub fn sections(&self) -> &'static [SectionDescriptor] {
        match self {
            Variant::Drone => &DRONE_SECTIONS,
            Variant::Robot => &ROBOT_SECTIONS,
        }
    }

    pub fn home_pose(&self) -> Pose {
        self.sections()[0].pose
    }

    pub fn profile(&self) -> VariantProfile {
        match self {
            Variant::Drone => VariantProfile {
                position_offset: Vec3::ZERO,
                scale_factor: 1.0,
            },
            Variant::Robot => VariantProfile {
                position_offset: Vec3::new(0.0, ROBOT_Y_OFFSET, 0.0),
                scale_factor: ROBOT_SCALE_FACTOR,
            },
        }
    }

    /// Off-screen pose the avatar starts from when it is mounted.
    pub fn entrance_pose(&self) -> Pose {
        let p = match self {
            Variant::Drone => DRONE_ENTRANCE_POSITION,
            Variant::Robot => ROBOT_ENTRANCE_POSITION,
        };
        Pose::new(Vec3::from(p), Vec3::from(ENTRANCE_ROTATION), ENTRANCE_SCALE)
    }

    pub fn toggle(&self) -> Variant {
        match self {
            Variant::Drone => Variant::Robot,
            Variant::Robot => Variant::Drone,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Drone => "drone",
            Variant::Robot => "robot",
        }
    }
}

impl FromStr for Variant {
    type Err = MascotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drone" => Ok(Variant::Drone),
            "robot" => Ok(Variant::Robot),
            other => Err(MascotError::UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base pose for `region` in `variant`'s table; sections without an entry fall
/// back to the home (first) entry, the footer is always neutral.
pub fn resolve(region: Region, variant: Variant) -> Pose {
    match region {
        Region::Footer => Pose::NEUTRAL,
        Region::Section(id) => lookup(variant.sections(), id),
    }
}

/// Same as [`resolve`] for a raw DOM id. Unknown ids resolve to home.
pub fn resolve_id(id: &str, variant: Variant) -> Pose {
    if id == Region::Footer.as_str() {
        return Pose::NEUTRAL;
    }
    match id.parse::<SectionId>() {
        Ok(section) => resolve(Region::Section(section), variant),
        Err(e) => {
            log::debug!("[resolve] {}; using home pose", e);
            variant.home_pose()
        }
    }
}

pub(crate) fn lookup(table: &[SectionDescriptor], id: SectionId) -> Pose {
    table
        .iter()
        .find(|d| d.id == id)
        .or_else(|| table.first())
        .map(|d| d.pose)
        .unwrap_or(Pose::NEUTRAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_follow_page_order() {
        for variant in [Variant::Drone, Variant::Robot] {
            let ids: Vec<_> = variant.sections().iter().map(|d| d.id).collect();
            assert_eq!(ids, SectionId::ALL.to_vec());
        }
    }

    #[test]
    fn missing_entry_falls_back_to_first() {
        let partial = &DRONE_SECTIONS[..2];
        assert_eq!(lookup(partial, SectionId::Projects), DRONE_SECTIONS[0].pose);
        assert_eq!(lookup(&[], SectionId::Projects), Pose::NEUTRAL);
    }

    #[test]
    fn variant_names_round_trip_and_reject_unknowns() {
        for v in [Variant::Drone, Variant::Robot] {
            assert_eq!(v.as_str().parse::<Variant>(), Ok(v));
        }
        assert_eq!(
            "ufo".parse::<Variant>(),
            Err(MascotError::UnknownVariant("ufo".into()))
        );
    }
}
