//! Animation clip selection for the skeletal (robot) variant.
//!
//! Clips change only when the announced region changes. Every clip that
//! still carries weight when a transition starts fades out from that weight
//! while the incoming one fades in, so blend weights never jump.

use crate::section::{Region, SectionId};

/// Clips available in the robot model, named as they appear in the glTF file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Clip {
    Idle,
    Wave,
    Jump,
    Dance,
    Walking,
    ThumbsUp,
}

impl Clip {
    pub const ALL: [Clip; 6] = [
        Clip::Idle,
        Clip::Wave,
        Clip::Jump,
        Clip::Dance,
        Clip::Walking,
        Clip::ThumbsUp,
    ];
    pub const COUNT: usize = Clip::ALL.len();

    /// Position in [`Clip::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Clip::Idle => "Idle",
            Clip::Wave => "Wave",
            Clip::Jump => "Jump",
            Clip::Dance => "Dance",
            Clip::Walking => "Walking",
            Clip::ThumbsUp => "ThumbsUp",
        }
    }

    pub fn for_region(region: Region) -> Clip {
        match region {
            Region::Section(SectionId::Hero) | Region::Footer => Clip::Idle,
            Region::Section(SectionId::About) => Clip::Wave,
            Region::Section(SectionId::Skills) => Clip::Jump,
            Region::Section(SectionId::Highlights) => Clip::Dance,
            Region::Section(SectionId::Projects) => Clip::Walking,
            Region::Section(SectionId::Publications) => Clip::ThumbsUp,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: Clip,
    pub to: Clip,
    pub crossfade_sec: f32,
}

/// Transition table: the clip to cross-fade to when `region` is entered while
/// `current` is playing, or `None` when the clip would not change.
pub fn transition(current: Clip, region: Region, crossfade_sec: f32) -> Option<Transition> {
    let next = Clip::for_region(region);
    (next != current).then_some(Transition {
        from: current,
        to: next,
        crossfade_sec,
    })
}

/// Blend weights for the render layer's clip mixer, in [`Clip::ALL`] order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipMix {
    pub active: Clip,
    pub weights: [f32; Clip::COUNT],
}

impl ClipMix {
    pub fn weight(&self, clip: Clip) -> f32 {
        self.weights[clip.index()]
    }

    pub fn active_weight(&self) -> f32 {
        self.weight(self.active)
    }

    /// Heaviest clip still fading out.
    pub fn fading(&self) -> Option<(Clip, f32)> {
        Clip::ALL
            .iter()
            .filter(|c| **c != self.active)
            .map(|c| (*c, self.weight(*c)))
            .filter(|(_, w)| *w > 0.0)
            .fold(None, |best, cur| match best {
                Some((_, w)) if w >= cur.1 => best,
                _ => Some(cur),
            })
    }
}

#[derive(Clone, Debug)]
pub struct ClipSelector {
    current: Clip,
    region: Option<Region>,
    // weights at the start of the running fade; None once settled
    fade_from: Option<[f32; Clip::COUNT]>,
    fade_elapsed: f32,
    fade_duration: f32,
    crossfade_sec: f32,
    transitions: u32,
}

impl ClipSelector {
    pub fn new(crossfade_sec: f32) -> Self {
        Self {
            current: Clip::Idle,
            region: None,
            fade_from: None,
            fade_elapsed: 0.0,
            fade_duration: 0.0,
            crossfade_sec,
            transitions: 0,
        }
    }

    pub fn current(&self) -> Clip {
        self.current
    }

    /// Number of cross-fades started since construction.
    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    /// Feeds a newly announced region. Returns the started transition, if any.
    /// A transition started mid-fade picks up the blend where it currently is.
    pub fn on_region(&mut self, region: Region) -> Option<Transition> {
        if self.region == Some(region) {
            return None;
        }
        self.region = Some(region);
        let t = transition(self.current, region, self.crossfade_sec)?;
        log::debug!(
            "[clip] {} -> {} over {:.2}s",
            t.from.name(),
            t.to.name(),
            t.crossfade_sec
        );
        self.fade_from = Some(self.mix().weights);
        self.current = t.to;
        self.fade_elapsed = 0.0;
        self.fade_duration = t.crossfade_sec;
        self.transitions += 1;
        Some(t)
    }

    pub fn step(&mut self, dt_sec: f32) {
        if self.fade_from.is_none() || dt_sec <= 0.0 || !dt_sec.is_finite() {
            return;
        }
        self.fade_elapsed += dt_sec;
        if self.fade_elapsed >= self.fade_duration {
            self.fade_from = None;
        }
    }

    fn progress(&self) -> f32 {
        if self.fade_duration <= 0.0 {
            1.0
        } else {
            (self.fade_elapsed / self.fade_duration).clamp(0.0, 1.0)
        }
    }

    pub fn mix(&self) -> ClipMix {
        let mut weights = [0.0; Clip::COUNT];
        match self.fade_from {
            Some(from) => {
                let p = self.progress();
                for (w, start) in weights.iter_mut().zip(from) {
                    *w = start * (1.0 - p);
                }
                weights[self.current.index()] += p;
            }
            None => weights[self.current.index()] = 1.0,
        }
        ClipMix {
            active: self.current,
            weights,
        }
    }
}
